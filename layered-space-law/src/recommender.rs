//! Jus cogens recommendations.
//!
//! A principle from the catalog becomes a candidate when its phrase occurs in
//! the folded content of the corpus. Each candidate is backed by the
//! documents whose own content contains the phrase, and its strength grows
//! with that support: `min(0.9, 0.3 + 0.1 × supporting)`.
//!
//! Titles are not searched. The recommender states evidentiary support only;
//! opposition arguments and guidance are fixed text.

use std::sync::Arc;

use layered_legal::{text, Document};
use serde::{Deserialize, Serialize};

use crate::catalog::IndicatorCatalog;
use crate::classifier::MAX_CONFIDENCE_TENTHS;
use crate::pipeline::parallel;

pub const OPPOSITION_ARGUMENT: &str = "Requires further state practice analysis";

pub const IMPLEMENTATION_GUIDANCE: &str =
    "Monitor state practice and opinio juris for this principle";

/// A candidate peremptory norm with its supporting evidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JusCogensRecommendation {
    /// Title-cased principle phrase
    pub principle: String,
    pub description: String,
    pub legal_basis: Vec<String>,
    /// Identifiers of documents whose content contains the principle
    pub supporting_documents: Vec<String>,
    pub opposition_arguments: Vec<String>,
    pub recommendation_strength: f64,
    pub implementation_guidance: String,
}

impl JusCogensRecommendation {
    /// Build a recommendation for a folded catalog phrase.
    pub fn new(phrase: &str, supporting_documents: Vec<String>) -> Self {
        let support = supporting_documents.len();
        Self {
            principle: text::title_case(phrase),
            description: format!(
                "Recommendation for recognizing '{}' as a peremptory norm of international space law",
                phrase
            ),
            legal_basis: vec![format!("Found in {} documents", support)],
            supporting_documents,
            opposition_arguments: vec![OPPOSITION_ARGUMENT.to_string()],
            recommendation_strength: recommendation_strength(support),
            implementation_guidance: IMPLEMENTATION_GUIDANCE.to_string(),
        }
    }
}

/// `min(0.9, 0.3 + 0.1 × support)`, computed in tenths.
fn recommendation_strength(support: usize) -> f64 {
    (3 + support).min(MAX_CONFIDENCE_TENTHS) as f64 / 10.0
}

/// Proposes jus cogens principles from a document corpus.
///
/// # Example
/// ```
/// use layered_legal::Document;
/// use layered_space_law::JusCogensRecommender;
///
/// let docs = vec![
///     Document::new("a", "", "The peaceful use of outer space is paramount."),
///     Document::new("b", "", "Nothing relevant."),
/// ];
/// let recs = JusCogensRecommender::new().recommend(&docs);
///
/// assert_eq!(recs.len(), 1);
/// assert_eq!(recs[0].principle, "Peaceful Use Of Outer Space");
/// assert_eq!(recs[0].supporting_documents, vec!["a".to_string()]);
/// assert_eq!(recs[0].recommendation_strength, 0.4);
/// ```
#[derive(Debug, Clone)]
pub struct JusCogensRecommender {
    catalog: Arc<IndicatorCatalog>,
    workers: usize,
}

impl Default for JusCogensRecommender {
    fn default() -> Self {
        Self::with_catalog(IndicatorCatalog::shared())
    }
}

impl JusCogensRecommender {
    /// Create a recommender over the built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Arc<IndicatorCatalog>) -> Self {
        Self { catalog, workers: 1 }
    }

    /// Scan candidate principles on up to `workers` threads. Zero is treated
    /// as one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn catalog(&self) -> &IndicatorCatalog {
        &self.catalog
    }

    /// One recommendation per catalog principle present in the corpus, in
    /// catalog order.
    pub fn recommend(&self, documents: &[Document]) -> Vec<JusCogensRecommendation> {
        self.recommend_refs(&documents.iter().collect::<Vec<_>>())
    }

    /// Like [`Self::recommend`], over borrowed documents.
    pub fn recommend_refs(&self, documents: &[&Document]) -> Vec<JusCogensRecommendation> {
        let folded: Vec<(&str, String)> = documents
            .iter()
            .map(|d| (d.id.as_str(), text::fold(&d.content)))
            .collect();
        let corpus = folded
            .iter()
            .map(|(_, content)| content.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let candidates: Vec<&str> = self
            .catalog
            .principles()
            .iter()
            .map(String::as_str)
            .filter(|phrase| corpus.contains(*phrase))
            .collect();

        let recommendations = parallel::map_ordered(&candidates, self.workers, |&phrase| {
            let supporting = folded
                .iter()
                .filter(|(_, content)| content.contains(phrase))
                .map(|(id, _)| id.to_string())
                .collect();
            JusCogensRecommendation::new(phrase, supporting)
        });

        tracing::info!(
            documents = documents.len(),
            recommendations = recommendations.len(),
            "generated jus cogens recommendations"
        );
        recommendations
    }
}

/// Recommend jus cogens principles with the built-in catalog.
pub fn recommend_jus_cogens(documents: &[Document]) -> Vec<JusCogensRecommendation> {
    JusCogensRecommender::new().recommend(documents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_is_exact_and_capped() {
        assert_eq!(recommendation_strength(0), 0.3);
        assert_eq!(recommendation_strength(3), 0.6);
        assert_eq!(recommendation_strength(6), 0.9);
        assert_eq!(recommendation_strength(40), 0.9);
    }

    #[test]
    fn boilerplate_fields() {
        let rec = JusCogensRecommendation::new("international cooperation", vec!["x".into()]);
        assert_eq!(rec.principle, "International Cooperation");
        assert_eq!(rec.legal_basis, vec!["Found in 1 documents".to_string()]);
        assert_eq!(rec.opposition_arguments, vec![OPPOSITION_ARGUMENT.to_string()]);
        assert_eq!(rec.implementation_guidance, IMPLEMENTATION_GUIDANCE);
        assert_eq!(
            rec.description,
            "Recommendation for recognizing 'international cooperation' as a peremptory norm of international space law"
        );
    }
}
