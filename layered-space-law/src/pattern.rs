//! Linguistic-function scoring.
//!
//! Counts how often a text uses five classes of normative language:
//! - Binding (shall, must, obliged, required, binding)
//! - Recommendatory (should, may, encouraged, recommended)
//! - Prohibitive (prohibited, forbidden, not allowed, shall not)
//! - Rights (right, entitled, privilege, freedom)
//! - Duty (duty, obligation, responsibility, liability)
//!
//! Unlike indicator presence in [`crate::DocumentClassifier`], these are
//! occurrence counts: "shall ... shall" scores two. Classes overlap, so
//! "shall not" counts once as binding and once as prohibitive.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One of the five normative language classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageClass {
    Binding,
    Recommendatory,
    Prohibitive,
    Rights,
    Duty,
}

impl LanguageClass {
    pub fn all() -> &'static [LanguageClass] {
        &[
            Self::Binding,
            Self::Recommendatory,
            Self::Prohibitive,
            Self::Rights,
            Self::Duty,
        ]
    }

    /// The words and phrases that belong to this class.
    pub fn terms(&self) -> &'static [&'static str] {
        match self {
            Self::Binding => &["shall", "must", "obliged", "required", "binding"],
            Self::Recommendatory => &["should", "may", "encouraged", "recommended"],
            Self::Prohibitive => &["prohibited", "forbidden", "not allowed", "shall not"],
            Self::Rights => &["right", "entitled", "privilege", "freedom"],
            Self::Duty => &["duty", "obligation", "responsibility", "liability"],
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Self::Binding => &BINDING,
            Self::Recommendatory => &RECOMMENDATORY,
            Self::Prohibitive => &PROHIBITIVE,
            Self::Rights => &RIGHTS,
            Self::Duty => &DUTY,
        }
    }
}

fn word_pattern(class: LanguageClass) -> Regex {
    let alternatives: Vec<String> = class.terms().iter().map(|t| regex::escape(t)).collect();
    let source = format!(r"(?i)\b(?:{})\b", alternatives.join("|"));
    Regex::new(&source).expect("language class terms are escaped literals")
}

static BINDING: Lazy<Regex> = Lazy::new(|| word_pattern(LanguageClass::Binding));
static RECOMMENDATORY: Lazy<Regex> = Lazy::new(|| word_pattern(LanguageClass::Recommendatory));
static PROHIBITIVE: Lazy<Regex> = Lazy::new(|| word_pattern(LanguageClass::Prohibitive));
static RIGHTS: Lazy<Regex> = Lazy::new(|| word_pattern(LanguageClass::Rights));
static DUTY: Lazy<Regex> = Lazy::new(|| word_pattern(LanguageClass::Duty));

/// Occurrence counts for each normative language class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PatternCounts {
    #[serde(rename = "binding_language")]
    pub binding: usize,
    #[serde(rename = "recommendatory_language")]
    pub recommendatory: usize,
    #[serde(rename = "prohibitive_language")]
    pub prohibitive: usize,
    #[serde(rename = "rights_language")]
    pub rights: usize,
    #[serde(rename = "duty_language")]
    pub duty: usize,
}

impl PatternCounts {
    pub fn get(&self, class: LanguageClass) -> usize {
        match class {
            LanguageClass::Binding => self.binding,
            LanguageClass::Recommendatory => self.recommendatory,
            LanguageClass::Prohibitive => self.prohibitive,
            LanguageClass::Rights => self.rights,
            LanguageClass::Duty => self.duty,
        }
    }

    pub fn total(&self) -> usize {
        LanguageClass::all().iter().map(|c| self.get(*c)).sum()
    }
}

/// Stateless scorer for normative language.
///
/// # Example
/// ```
/// use layered_space_law::PatternScorer;
///
/// let counts = PatternScorer::new().score("States shall not claim sovereignty; they shall cooperate.");
/// assert_eq!(counts.binding, 2);
/// assert_eq!(counts.prohibitive, 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternScorer;

impl PatternScorer {
    pub fn new() -> Self {
        Self
    }

    /// Count whole-word occurrences of every language class in `text`.
    pub fn score(&self, text: &str) -> PatternCounts {
        let count = |class: LanguageClass| class.pattern().find_iter(text).count();
        PatternCounts {
            binding: count(LanguageClass::Binding),
            recommendatory: count(LanguageClass::Recommendatory),
            prohibitive: count(LanguageClass::Prohibitive),
            rights: count(LanguageClass::Rights),
            duty: count(LanguageClass::Duty),
        }
    }
}

/// Count normative language in `text` with the default scorer.
pub fn score_patterns(text: &str) -> PatternCounts {
    PatternScorer::new().score(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(score_patterns(""), PatternCounts::default());
    }

    #[test]
    fn counts_occurrences_not_presence() {
        let counts = score_patterns("shall shall must");
        assert_eq!(counts.binding, 3);
    }

    #[test]
    fn whole_words_only() {
        let counts = score_patterns("rights mayor dutyfree obligations freedoms");
        assert_eq!(counts, PatternCounts::default());
    }

    #[test]
    fn classes_are_independent() {
        let counts = score_patterns("states shall not appropriate the moon");
        assert_eq!(counts.binding, 1);
        assert_eq!(counts.prohibitive, 1);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn matching_ignores_case() {
        let counts = score_patterns("The Right to Freedom; a DUTY");
        assert_eq!(counts.rights, 2);
        assert_eq!(counts.duty, 1);
    }

    #[test]
    fn serializes_with_persisted_keys() {
        let json = serde_json::to_value(score_patterns("may")).unwrap();
        assert_eq!(json["recommendatory_language"], 1);
        assert_eq!(json["binding_language"], 0);
    }
}
