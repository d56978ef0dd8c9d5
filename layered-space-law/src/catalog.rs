//! Indicator catalogs: the diagnostic phrase sets every analysis layer reads.
//!
//! A catalog is an immutable configuration value. Components receive it at
//! construction through an [`Arc`], so one catalog can back any number of
//! classifiers, analyzers and recommenders running on different threads.
//!
//! Phrases are matched against case-folded text, so every phrase is folded
//! when a catalog is built.

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

const CUSTOMARY_INDICATORS: &[&str] = &[
    "state practice",
    "opinio juris",
    "general practice",
    "accepted as law",
    "consistent practice",
    "widespread acceptance",
    "universal recognition",
    "long-standing practice",
    "established custom",
    "international custom",
];

const TREATY_INDICATORS: &[&str] = &[
    "treaty",
    "convention",
    "agreement",
    "protocol",
    "signed",
    "ratified",
    "entered into force",
    "signatory",
    "party to",
    "binding obligation",
];

const JUS_COGENS_INDICATORS: &[&str] = &[
    "peremptory norm",
    "jus cogens",
    "fundamental principle",
    "non-derogable",
    "absolute prohibition",
    "universal prohibition",
    "overriding norm",
    "hierarchy of norms",
    "superior norm",
];

/// Space law principles that are candidates for peremptory status.
const SPACE_LAW_PRINCIPLES: &[&str] = &[
    "peaceful use of outer space",
    "non-appropriation of outer space",
    "freedom of exploration and use",
    "benefit and interests of all countries",
    "international cooperation",
    "state responsibility for national activities",
    "avoidance of harmful contamination",
];

const CONFLICT_KEYWORDS: &[&str] = &[
    "conflict",
    "dispute",
    "overlap",
    "contradiction",
    "incompatible",
];

static DEFAULT_CATALOG: Lazy<Arc<IndicatorCatalog>> =
    Lazy::new(|| Arc::new(IndicatorCatalog::builtin()));

/// The phrase sets used by classification, recommendation and boundary analysis.
///
/// # Example
/// ```
/// use layered_space_law::IndicatorCatalog;
///
/// let catalog = IndicatorCatalog::default();
/// assert_eq!(catalog.customary().len(), 10);
/// assert_eq!(catalog.count_customary("state practice and opinio juris"), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogFile", into = "CatalogFile")]
pub struct IndicatorCatalog {
    customary: Vec<String>,
    treaty: Vec<String>,
    jus_cogens: Vec<String>,
    principles: Vec<String>,
    conflict_keywords: Vec<String>,
}

/// Serialized shape of a catalog, validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CatalogFile {
    customary: Vec<String>,
    treaty: Vec<String>,
    jus_cogens: Vec<String>,
    principles: Vec<String>,
    conflict_keywords: Vec<String>,
}

impl TryFrom<CatalogFile> for IndicatorCatalog {
    type Error = AnalysisError;

    fn try_from(file: CatalogFile) -> Result<Self, Self::Error> {
        Ok(Self {
            customary: normalize_phrases("customary", file.customary)?,
            treaty: normalize_phrases("treaty", file.treaty)?,
            jus_cogens: normalize_phrases("jus_cogens", file.jus_cogens)?,
            principles: normalize_phrases("principles", file.principles)?,
            conflict_keywords: normalize_phrases("conflict_keywords", file.conflict_keywords)?,
        })
    }
}

impl From<IndicatorCatalog> for CatalogFile {
    fn from(catalog: IndicatorCatalog) -> Self {
        Self {
            customary: catalog.customary,
            treaty: catalog.treaty,
            jus_cogens: catalog.jus_cogens,
            principles: catalog.principles,
            conflict_keywords: catalog.conflict_keywords,
        }
    }
}

fn normalize_phrases(set: &str, phrases: Vec<String>) -> AnalysisResult<Vec<String>> {
    if phrases.is_empty() {
        return Err(AnalysisError::InvalidCatalog {
            reason: format!("phrase set `{}` is empty", set),
        });
    }

    let mut normalized: Vec<String> = Vec::with_capacity(phrases.len());
    for phrase in phrases {
        let folded = layered_legal::text::fold(phrase.trim());
        if folded.is_empty() {
            return Err(AnalysisError::InvalidCatalog {
                reason: format!("phrase set `{}` contains an empty phrase", set),
            });
        }
        // Each phrase counts once toward a presence total.
        if !normalized.contains(&folded) {
            normalized.push(folded);
        }
    }

    Ok(normalized)
}

fn owned(phrases: &[&str]) -> Vec<String> {
    phrases.iter().map(|p| p.to_string()).collect()
}

/// Count how many phrases occur at least once in `folded_text`.
pub(crate) fn count_present(phrases: &[String], folded_text: &str) -> usize {
    phrases
        .iter()
        .filter(|phrase| folded_text.contains(phrase.as_str()))
        .count()
}

impl IndicatorCatalog {
    fn builtin() -> Self {
        Self {
            customary: owned(CUSTOMARY_INDICATORS),
            treaty: owned(TREATY_INDICATORS),
            jus_cogens: owned(JUS_COGENS_INDICATORS),
            principles: owned(SPACE_LAW_PRINCIPLES),
            conflict_keywords: owned(CONFLICT_KEYWORDS),
        }
    }

    /// Build a catalog from explicit phrase sets.
    ///
    /// Phrases are trimmed and case-folded; duplicates within a set are
    /// dropped. Fails if any set is empty or contains an empty phrase.
    pub fn new(
        customary: Vec<String>,
        treaty: Vec<String>,
        jus_cogens: Vec<String>,
        principles: Vec<String>,
        conflict_keywords: Vec<String>,
    ) -> AnalysisResult<Self> {
        Self::try_from(CatalogFile {
            customary,
            treaty,
            jus_cogens,
            principles,
            conflict_keywords,
        })
    }

    /// The built-in catalog, shared across every component that uses defaults.
    pub fn shared() -> Arc<Self> {
        Arc::clone(&DEFAULT_CATALOG)
    }

    /// Parse a catalog from RON.
    pub fn from_ron_str(source: &str) -> AnalysisResult<Self> {
        let file: CatalogFile = ron::from_str(source)?;
        let catalog = Self::try_from(file)?;
        tracing::info!(
            customary = catalog.customary.len(),
            treaty = catalog.treaty.len(),
            jus_cogens = catalog.jus_cogens.len(),
            principles = catalog.principles.len(),
            "loaded indicator catalog"
        );
        Ok(catalog)
    }

    /// Render the catalog as pretty RON.
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(4)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        ron::ser::to_string_pretty(&CatalogFile::from(self.clone()), config)
    }

    pub fn customary(&self) -> &[String] {
        &self.customary
    }

    pub fn treaty(&self) -> &[String] {
        &self.treaty
    }

    pub fn jus_cogens(&self) -> &[String] {
        &self.jus_cogens
    }

    pub fn principles(&self) -> &[String] {
        &self.principles
    }

    pub fn conflict_keywords(&self) -> &[String] {
        &self.conflict_keywords
    }

    /// Number of customary-law indicators present in folded text.
    pub fn count_customary(&self, folded_text: &str) -> usize {
        count_present(&self.customary, folded_text)
    }

    /// Number of treaty-law indicators present in folded text.
    pub fn count_treaty(&self, folded_text: &str) -> usize {
        count_present(&self.treaty, folded_text)
    }

    /// Number of jus cogens indicators present in folded text.
    pub fn count_jus_cogens(&self, folded_text: &str) -> usize {
        count_present(&self.jus_cogens, folded_text)
    }
}

impl Default for IndicatorCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_sizes() {
        let catalog = IndicatorCatalog::default();
        assert_eq!(catalog.customary().len(), 10);
        assert_eq!(catalog.treaty().len(), 10);
        assert_eq!(catalog.jus_cogens().len(), 9);
        assert_eq!(catalog.principles().len(), 7);
        assert_eq!(catalog.conflict_keywords().len(), 5);
    }

    #[test]
    fn presence_not_occurrence() {
        let catalog = IndicatorCatalog::default();
        assert_eq!(catalog.count_treaty("treaty treaty treaty"), 1);
        assert_eq!(catalog.count_treaty(""), 0);
    }

    #[test]
    fn shipped_ron_matches_builtin() {
        let source = include_str!("../catalog/default.ron");
        let catalog = IndicatorCatalog::from_ron_str(source).unwrap();
        assert_eq!(catalog, IndicatorCatalog::default());
    }

    #[test]
    fn ron_round_trip_preserves_catalog() {
        let catalog = IndicatorCatalog::default();
        let ron = catalog.to_ron_string().unwrap();
        assert_eq!(IndicatorCatalog::from_ron_str(&ron).unwrap(), catalog);
    }

    #[test]
    fn phrases_are_folded_and_deduplicated() {
        let catalog = IndicatorCatalog::new(
            vec!["  State Practice ".into(), "state practice".into()],
            vec!["Treaty".into()],
            vec!["Jus Cogens".into()],
            vec!["International Cooperation".into()],
            vec!["Dispute".into()],
        )
        .unwrap();
        assert_eq!(catalog.customary(), &["state practice".to_string()]);
        assert_eq!(catalog.treaty(), &["treaty".to_string()]);
    }

    #[test]
    fn rejects_empty_sets_and_phrases() {
        let err = IndicatorCatalog::new(
            vec![],
            vec!["treaty".into()],
            vec!["jus cogens".into()],
            vec!["international cooperation".into()],
            vec!["dispute".into()],
        )
        .unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidCatalog { .. }));

        let source = r#"(
            customary: ["state practice"],
            treaty: ["   "],
            jus_cogens: ["jus cogens"],
            principles: ["international cooperation"],
            conflict_keywords: ["dispute"],
        )"#;
        assert!(matches!(
            IndicatorCatalog::from_ron_str(source),
            Err(AnalysisError::InvalidCatalog { .. })
        ));
    }

    #[test]
    fn malformed_ron_is_a_format_error() {
        assert!(matches!(
            IndicatorCatalog::from_ron_str("(customary: "),
            Err(AnalysisError::CatalogFormat(_))
        ));
    }
}
