//! Text helpers shared across analysis layers.

use unicode_segmentation::UnicodeSegmentation;

/// Case-fold text for literal phrase matching.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

/// Join two text fields with a single space.
pub fn join_fields(first: &str, second: &str) -> String {
    let mut joined = String::with_capacity(first.len() + second.len() + 1);
    joined.push_str(first);
    joined.push(' ');
    joined.push_str(second);
    joined
}

/// Title-case a phrase: every word segment gets an uppercase first letter and
/// lowercase remainder. Punctuation between words is kept as-is.
///
/// Segments follow Unicode word boundaries, so an inner apostrophe stays in
/// its word ("state's" becomes "State's") and a segment starting with a digit
/// is left unchanged ("3rd" stays "3rd").
///
/// # Examples
/// ```
/// use layered_legal::text::title_case;
///
/// assert_eq!(title_case("peaceful use of outer space"), "Peaceful Use Of Outer Space");
/// assert_eq!(title_case("non-appropriation of outer space"), "Non-Appropriation Of Outer Space");
/// ```
pub fn title_case(phrase: &str) -> String {
    phrase
        .split_word_bounds()
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) if first.is_alphabetic() => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                _ => segment.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_is_lowercase() {
        assert_eq!(fold("Opinio JURIS"), "opinio juris");
    }

    #[test]
    fn join_with_empty_fields() {
        assert_eq!(join_fields("", ""), " ");
        assert_eq!(join_fields("body", "Title"), "body Title");
    }

    #[test]
    fn title_case_catalog_phrases() {
        assert_eq!(
            title_case("benefit and interests of all countries"),
            "Benefit And Interests Of All Countries"
        );
        assert_eq!(
            title_case("state responsibility for national activities"),
            "State Responsibility For National Activities"
        );
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_keeps_apostrophes_and_digits_inside_words() {
        assert_eq!(title_case("state's duty"), "State's Duty");
        assert_eq!(title_case("3rd party liability"), "3rd Party Liability");
        assert_eq!(title_case("DUE regard"), "Due Regard");
    }
}
