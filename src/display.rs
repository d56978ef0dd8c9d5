use std::fmt::{self, Write};

use unicode_width::UnicodeWidthStr;

const SPACE_PADDING: usize = 2;

/// A plain text table whose columns are aligned by display width, so that
/// titles with wide or combining characters still line up.
///
/// ```
/// use layered_legal::TableDisplay;
///
/// let mut table = TableDisplay::new(["jurisdiction", "documents"]);
/// table.push_row(["us", "4"]);
/// table.push_row(["international", "2"]);
///
/// assert_eq!(
///     table.to_string(),
///     "jurisdiction   documents\n\
///      ─────────────  ─────────\n\
///      us             4\n\
///      international  2"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableDisplay {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableDisplay {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty; extra cells are dropped.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                self.rows
                    .iter()
                    .map(|row| UnicodeWidthStr::width(row[idx].as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(header.as_str())))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn write_line(out: &mut String, cells: &[String], widths: &[usize]) -> fmt::Result {
        let mut line = String::new();
        for (idx, cell) in cells.iter().enumerate() {
            if idx > 0 {
                line.extend(std::iter::repeat(' ').take(SPACE_PADDING));
            }
            line.push_str(cell);
            let pad = widths[idx].saturating_sub(UnicodeWidthStr::width(cell.as_str()));
            line.extend(std::iter::repeat(' ').take(pad));
        }
        out.write_str(line.trim_end())
    }
}

impl fmt::Display for TableDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let mut out = String::new();

        Self::write_line(&mut out, &self.headers, &widths)?;

        out.push('\n');
        let rules: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
        Self::write_line(&mut out, &rules, &widths)?;

        for row in &self.rows {
            out.push('\n');
            Self::write_line(&mut out, row, &widths)?;
        }

        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligns_wide_characters() {
        let mut table = TableDisplay::new(["id", "title"]);
        table.push_row(["宇宙法", "Space Law"]);
        table.push_row(["ost", "Outer Space Treaty"]);

        insta::assert_snapshot!(table.to_string(), @r###"
        id      title
        ──────  ──────────────────
        宇宙法  Space Law
        ost     Outer Space Treaty
        "###);
    }

    #[test]
    fn short_rows_are_padded() {
        let mut table = TableDisplay::new(["a", "b"]);
        table.push_row(["x"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.to_string(), "a  b\n─  ─\nx");
    }
}
