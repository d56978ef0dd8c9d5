//! Core types for TOML scenario fixtures.
//!
//! A fixture declares a corpus, an optional analysis request and the values
//! the analysis is expected to produce:
//!
//! ```toml
//! title = "Customary indicators"
//!
//! [[documents]]
//! id = "b1"
//! title = "Resolution"
//! content = "Evidence of state practice and opinio juris."
//!
//! [[expect.classifications]]
//! document = "b1"
//! classification = "customary_law"
//! confidence = 0.8
//! ```
//!
//! Every expectation field except the subject key is optional; only the
//! fields present are checked.

use layered_legal::{Document, Jurisdiction};
use layered_space_law::{AnalysisRequest, LawClassification};
use serde::{Deserialize, Serialize};

/// A parsed scenario fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LawFixture {
    /// Human-readable scenario name
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub documents: Vec<Document>,
    /// Request to run; defaults to every document with every analysis
    #[serde(default)]
    pub request: Option<AnalysisRequest>,
    #[serde(default)]
    pub expect: Expectations,
}

impl LawFixture {
    /// The request to run, falling back to all documents in fixture order.
    pub fn effective_request(&self) -> AnalysisRequest {
        match &self.request {
            Some(request) => request.clone(),
            None => AnalysisRequest::new(self.documents.iter().map(|d| d.id.clone())),
        }
    }

    /// Number of individual field checks this fixture declares.
    pub fn check_count(&self) -> usize {
        let e = &self.expect;
        e.classifications.iter().map(|c| c.field_count()).sum::<usize>()
            + e.boundaries.iter().map(|b| b.field_count()).sum::<usize>()
            + e.recommendations.iter().map(|r| r.field_count()).sum::<usize>()
            + usize::from(e.boundary_count.is_some())
            + usize::from(e.recommendation_count.is_some())
            + usize::from(e.missing_documents.is_some())
    }
}

/// Expected analysis output.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Expectations {
    #[serde(default)]
    pub classifications: Vec<ClassificationExpectation>,
    #[serde(default)]
    pub boundaries: Vec<BoundaryExpectation>,
    #[serde(default)]
    pub recommendations: Vec<RecommendationExpectation>,
    #[serde(default)]
    pub boundary_count: Option<usize>,
    #[serde(default)]
    pub recommendation_count: Option<usize>,
    #[serde(default)]
    pub missing_documents: Option<Vec<String>>,
}

/// Expected classification of one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationExpectation {
    pub document: String,
    #[serde(default)]
    pub classification: Option<LawClassification>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub customary_indicators: Option<usize>,
    #[serde(default)]
    pub treaty_indicators: Option<usize>,
    #[serde(default)]
    pub jus_cogens_score: Option<f64>,
}

impl ClassificationExpectation {
    fn field_count(&self) -> usize {
        [
            self.classification.is_some(),
            self.confidence.is_some(),
            self.customary_indicators.is_some(),
            self.treaty_indicators.is_some(),
            self.jus_cogens_score.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
            + 1
    }
}

/// Expected boundary for one jurisdiction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryExpectation {
    pub jurisdiction: Jurisdiction,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub legal_basis: Option<Vec<String>>,
    #[serde(default)]
    pub conflict_count: Option<usize>,
}

impl BoundaryExpectation {
    fn field_count(&self) -> usize {
        [
            self.confidence.is_some(),
            self.legal_basis.is_some(),
            self.conflict_count.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
            + 1
    }
}

/// Expected recommendation for one principle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationExpectation {
    /// Title-cased principle
    pub principle: String,
    #[serde(default)]
    pub supporting_documents: Option<Vec<String>>,
    #[serde(default)]
    pub strength: Option<f64>,
}

impl RecommendationExpectation {
    fn field_count(&self) -> usize {
        usize::from(self.supporting_documents.is_some()) + usize::from(self.strength.is_some()) + 1
    }
}
