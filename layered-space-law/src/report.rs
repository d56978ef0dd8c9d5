use std::fmt;

use layered_legal::TableDisplay;

use crate::pipeline::AnalysisOutcome;

/// Human-readable rendering of an [`AnalysisOutcome`].
///
/// Sections with no rows are omitted. Confidences print with two decimals.
pub struct AnalysisReport<'a> {
    outcome: &'a AnalysisOutcome,
}

impl<'a> AnalysisReport<'a> {
    pub fn new(outcome: &'a AnalysisOutcome) -> Self {
        Self { outcome }
    }

    fn classification_table(&self) -> TableDisplay {
        let mut table = TableDisplay::new([
            "document",
            "classification",
            "confidence",
            "customary",
            "treaty",
            "jus cogens",
        ]);
        for entry in &self.outcome.analyses {
            let result = &entry.analysis;
            table.push_row([
                entry.document_id.clone(),
                result.classification.to_string(),
                format!("{:.2}", result.confidence),
                result.customary_indicator_count.to_string(),
                result.treaty_indicator_count.to_string(),
                format!("{:.1}", result.jus_cogens_score),
            ]);
        }
        table
    }

    fn boundary_table(&self) -> TableDisplay {
        let mut table = TableDisplay::new([
            "jurisdiction",
            "type",
            "legal basis",
            "conflicts",
            "confidence",
        ]);
        for boundary in &self.outcome.boundaries {
            table.push_row([
                boundary.jurisdiction.to_string(),
                boundary.boundary_type.to_string(),
                boundary.legal_basis.len().to_string(),
                boundary.conflicts.len().to_string(),
                format!("{:.2}", boundary.confidence),
            ]);
        }
        table
    }

    fn recommendation_table(&self) -> TableDisplay {
        let mut table = TableDisplay::new(["principle", "support", "strength"]);
        for rec in &self.outcome.recommendations {
            table.push_row([
                rec.principle.clone(),
                rec.supporting_documents.len().to_string(),
                format!("{:.2}", rec.recommendation_strength),
            ]);
        }
        table
    }
}

impl fmt::Display for AnalysisReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sections = [
            ("Classifications", self.classification_table()),
            ("Jurisdictional boundaries", self.boundary_table()),
            ("Jus cogens recommendations", self.recommendation_table()),
        ];

        let mut first = true;
        for (heading, table) in sections.iter().filter(|(_, t)| !t.is_empty()) {
            if !first {
                f.write_str("\n\n")?;
            }
            first = false;
            write!(f, "{}\n{}", heading, table)?;
        }

        if !self.outcome.missing_documents.is_empty() {
            if !first {
                f.write_str("\n\n")?;
            }
            write!(f, "Missing documents: {}", self.outcome.missing_documents.join(", "))?;
        }

        Ok(())
    }
}

impl AnalysisOutcome {
    /// Text report of this outcome.
    pub fn report(&self) -> AnalysisReport<'_> {
        AnalysisReport::new(self)
    }
}
