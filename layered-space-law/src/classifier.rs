//! Treaty / customary classification of a single document.
//!
//! The classifier counts *presence* of catalog indicators in the folded text
//! (each indicator counts at most once) and applies a fixed threshold rule:
//!
//! | Rule | Label | Confidence |
//! |------|-------|------------|
//! | treaty > customary and treaty > 2 | `treaty_law` | min(0.9, 0.6 + 0.1 × treaty) |
//! | customary > treaty and customary > 1 | `customary_law` | min(0.9, 0.6 + 0.1 × customary) |
//! | otherwise | `mixed_or_uncertain` | 0.5 |
//!
//! Customary law needs only two indicators while treaty law needs three.
//! The asymmetry is part of the rule set and is preserved as-is.

use std::fmt;
use std::sync::Arc;

use layered_legal::Document;
use serde::{Deserialize, Serialize};

use crate::catalog::IndicatorCatalog;
use crate::pattern::{PatternCounts, PatternScorer};

/// Ceiling applied to every rule-based confidence.
pub(crate) const MAX_CONFIDENCE_TENTHS: usize = 9;

/// Confidence assigned to `mixed_or_uncertain`.
pub const MIXED_CONFIDENCE: f64 = 0.5;

/// The legal source a document most likely expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawClassification {
    TreatyLaw,
    CustomaryLaw,
    MixedOrUncertain,
}

impl LawClassification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TreatyLaw => "treaty_law",
            Self::CustomaryLaw => "customary_law",
            Self::MixedOrUncertain => "mixed_or_uncertain",
        }
    }
}

impl fmt::Display for LawClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Banded jus cogens score from the number of jus cogens indicators present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum JusCogensBand {
    /// No indicators
    Minimal,
    /// One indicator
    Low,
    /// Two indicators
    Moderate,
    /// Three or more indicators
    Strong,
}

impl JusCogensBand {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::Minimal,
            1 => Self::Low,
            2 => Self::Moderate,
            _ => Self::Strong,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            Self::Minimal => 0.2,
            Self::Low => 0.4,
            Self::Moderate => 0.6,
            Self::Strong => 0.8,
        }
    }
}

/// Convert `6 + count` tenths to a confidence, capped at 0.9.
///
/// Working in integer tenths keeps documented values like 0.9 and 0.8 exact.
pub(crate) fn indicator_confidence(count: usize) -> f64 {
    (6 + count).min(MAX_CONFIDENCE_TENTHS) as f64 / 10.0
}

/// Classification record for one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub classification: LawClassification,
    #[serde(rename = "confidence_score")]
    pub confidence: f64,
    #[serde(rename = "customary_indicators_found")]
    pub customary_indicator_count: usize,
    #[serde(rename = "treaty_indicators_found")]
    pub treaty_indicator_count: usize,
    pub jus_cogens_score: f64,
    #[serde(rename = "legal_patterns")]
    pub pattern_counts: PatternCounts,
    pub reasoning: String,
}

impl ClassificationResult {
    /// Apply the threshold rule to indicator counts.
    ///
    /// `reasoning` is derived from the label and the counts, never supplied.
    pub fn from_counts(
        customary_count: usize,
        treaty_count: usize,
        jus_cogens_count: usize,
        pattern_counts: PatternCounts,
    ) -> Self {
        let (classification, confidence) =
            if treaty_count > customary_count && treaty_count > 2 {
                (LawClassification::TreatyLaw, indicator_confidence(treaty_count))
            } else if customary_count > treaty_count && customary_count > 1 {
                (LawClassification::CustomaryLaw, indicator_confidence(customary_count))
            } else {
                (LawClassification::MixedOrUncertain, MIXED_CONFIDENCE)
            };

        Self {
            classification,
            confidence,
            customary_indicator_count: customary_count,
            treaty_indicator_count: treaty_count,
            jus_cogens_score: JusCogensBand::from_count(jus_cogens_count).score(),
            pattern_counts,
            reasoning: reasoning(classification, customary_count, treaty_count),
        }
    }
}

fn reasoning(classification: LawClassification, customary_count: usize, treaty_count: usize) -> String {
    match classification {
        LawClassification::TreatyLaw => format!(
            "Document classified as treaty law based on {} treaty indicators found, indicating formal international agreement.",
            treaty_count
        ),
        LawClassification::CustomaryLaw => format!(
            "Document classified as customary law based on {} customary law indicators, suggesting established state practice.",
            customary_count
        ),
        LawClassification::MixedOrUncertain => format!(
            "Mixed classification due to similar indicators for both treaty ({}) and customary ({}) law.",
            treaty_count, customary_count
        ),
    }
}

/// Labels documents as treaty law, customary law or an uncertain mixture.
///
/// # Example
/// ```
/// use layered_legal::Document;
/// use layered_space_law::{DocumentClassifier, LawClassification};
///
/// let doc = Document::new("d1", "Resolution", "Evidence of state practice and opinio juris.");
/// let result = DocumentClassifier::new().classify(&doc);
/// assert_eq!(result.classification, LawClassification::CustomaryLaw);
/// assert_eq!(result.confidence, 0.8);
/// ```
#[derive(Debug, Clone)]
pub struct DocumentClassifier {
    catalog: Arc<IndicatorCatalog>,
    scorer: PatternScorer,
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self::with_catalog(IndicatorCatalog::shared())
    }
}

impl DocumentClassifier {
    /// Create a classifier over the built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Arc<IndicatorCatalog>) -> Self {
        Self {
            catalog,
            scorer: PatternScorer::new(),
        }
    }

    pub fn catalog(&self) -> &IndicatorCatalog {
        &self.catalog
    }

    /// Classify a document from its content and title.
    pub fn classify(&self, document: &Document) -> ClassificationResult {
        let result = self.classify_text(&document.folded_text());
        tracing::debug!(
            document_id = %document.id,
            customary = result.customary_indicator_count,
            treaty = result.treaty_indicator_count,
            classification = %result.classification,
            "classified document"
        );
        result
    }

    /// Classify already case-folded text.
    pub fn classify_text(&self, folded_text: &str) -> ClassificationResult {
        ClassificationResult::from_counts(
            self.catalog.count_customary(folded_text),
            self.catalog.count_treaty(folded_text),
            self.catalog.count_jus_cogens(folded_text),
            self.scorer.score(folded_text),
        )
    }
}

/// Classify a document with the built-in catalog.
pub fn classify(document: &Document) -> ClassificationResult {
    DocumentClassifier::new().classify(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges() {
        assert_eq!(JusCogensBand::from_count(0).score(), 0.2);
        assert_eq!(JusCogensBand::from_count(1).score(), 0.4);
        assert_eq!(JusCogensBand::from_count(2).score(), 0.6);
        assert_eq!(JusCogensBand::from_count(3).score(), 0.8);
        assert_eq!(JusCogensBand::from_count(9).score(), 0.8);
    }

    #[test]
    fn indicator_confidence_is_exact_and_capped() {
        assert_eq!(indicator_confidence(2), 0.8);
        assert_eq!(indicator_confidence(3), 0.9);
        assert_eq!(indicator_confidence(10), 0.9);
    }

    #[test]
    fn threshold_rule() {
        let p = PatternCounts::default();
        let r = ClassificationResult::from_counts(0, 2, 0, p);
        assert_eq!(r.classification, LawClassification::MixedOrUncertain);

        let r = ClassificationResult::from_counts(0, 3, 0, p);
        assert_eq!(r.classification, LawClassification::TreatyLaw);

        let r = ClassificationResult::from_counts(2, 1, 0, p);
        assert_eq!(r.classification, LawClassification::CustomaryLaw);
        assert_eq!(r.confidence, 0.8);

        let r = ClassificationResult::from_counts(3, 3, 0, p);
        assert_eq!(r.classification, LawClassification::MixedOrUncertain);
        assert_eq!(r.confidence, MIXED_CONFIDENCE);
    }
}
