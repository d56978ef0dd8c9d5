//! Batch driver that runs the analysis layers over a document set.
//!
//! A [`Pipeline`] owns one classifier, boundary analyzer and recommender, all
//! sharing a single catalog. [`Pipeline::run`] executes the analyses an
//! [`AnalysisRequest`] asks for:
//!
//! 1. Resolve requested ids against the supplied documents, in request order
//! 2. `customary_vs_treaty`: classify each resolved document
//! 3. `jurisdictional_analysis`: boundaries over the resolved documents
//! 4. `include_jus_cogens`: recommendations over the completed documents of
//!    the full supplied set
//!
//! Unknown ids never fail a run; they are reported in
//! [`AnalysisOutcome::missing_documents`].

pub(crate) mod parallel;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use layered_legal::{completed_documents, Document};
use serde::{Deserialize, Serialize};

use crate::boundary::{JurisdictionBoundaryAnalyzer, JurisdictionalBoundary};
use crate::catalog::IndicatorCatalog;
use crate::classifier::{ClassificationResult, DocumentClassifier};
use crate::error::AnalysisResult;
use crate::recommender::{JusCogensRecommendation, JusCogensRecommender};

/// Methodology recorded on every per-document analysis.
pub const METHODOLOGY: &str = "Pattern-based legal analysis";

/// An analysis a request can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    CustomaryVsTreaty,
    JurisdictionalAnalysis,
}

impl AnalysisKind {
    pub fn all() -> &'static [AnalysisKind] {
        &[Self::CustomaryVsTreaty, Self::JurisdictionalAnalysis]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CustomaryVsTreaty => "customary_vs_treaty",
            Self::JurisdictionalAnalysis => "jurisdictional_analysis",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_analysis_types() -> Vec<AnalysisKind> {
    AnalysisKind::all().to_vec()
}

fn default_include_jus_cogens() -> bool {
    true
}

/// Which documents to analyze and how.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub document_ids: Vec<String>,
    #[serde(default = "default_analysis_types")]
    pub analysis_types: Vec<AnalysisKind>,
    #[serde(default = "default_include_jus_cogens")]
    pub include_jus_cogens: bool,
}

impl AnalysisRequest {
    /// Request every analysis for the given ids.
    pub fn new<I, S>(document_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            document_ids: document_ids.into_iter().map(Into::into).collect(),
            analysis_types: default_analysis_types(),
            include_jus_cogens: default_include_jus_cogens(),
        }
    }

    pub fn with_analysis_types(mut self, kinds: impl IntoIterator<Item = AnalysisKind>) -> Self {
        self.analysis_types = kinds.into_iter().collect();
        self
    }

    pub fn with_jus_cogens(mut self, include: bool) -> Self {
        self.include_jus_cogens = include;
        self
    }

    pub fn wants(&self, kind: AnalysisKind) -> bool {
        self.analysis_types.contains(&kind)
    }
}

/// Classification of one document, as handed to persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub document_id: String,
    pub analysis_type: AnalysisKind,
    pub methodology: String,
    pub confidence_score: f64,
    pub analysis: ClassificationResult,
}

impl DocumentAnalysis {
    fn classification(document_id: &str, analysis: ClassificationResult) -> Self {
        Self {
            document_id: document_id.to_string(),
            analysis_type: AnalysisKind::CustomaryVsTreaty,
            methodology: METHODOLOGY.to_string(),
            confidence_score: analysis.confidence,
            analysis,
        }
    }
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub analyses: Vec<DocumentAnalysis>,
    pub boundaries: Vec<JurisdictionalBoundary>,
    pub recommendations: Vec<JusCogensRecommendation>,
    /// Requested ids with no matching document
    pub missing_documents: Vec<String>,
}

impl AnalysisOutcome {
    /// Pretty-printed JSON hand-off payload.
    pub fn to_json_pretty(&self) -> AnalysisResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn analysis_for(&self, document_id: &str) -> Option<&DocumentAnalysis> {
        self.analyses.iter().find(|a| a.document_id == document_id)
    }
}

/// Runs the analysis layers over document sets.
///
/// # Example
/// ```
/// use layered_legal::{Document, DocumentStatus};
/// use layered_space_law::{AnalysisRequest, LawClassification, Pipeline};
///
/// let docs = vec![
///     Document::new("ost", "Outer Space Treaty", "This treaty was signed and ratified; it entered into force in 1967.")
///         .with_jurisdiction("international")
///         .with_status(DocumentStatus::Completed),
/// ];
/// let outcome = Pipeline::standard().run(&docs, &AnalysisRequest::new(["ost", "gone"]));
///
/// assert_eq!(outcome.analyses[0].analysis.classification, LawClassification::TreatyLaw);
/// assert_eq!(outcome.boundaries.len(), 1);
/// assert_eq!(outcome.missing_documents, vec!["gone".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    classifier: DocumentClassifier,
    boundaries: JurisdictionBoundaryAnalyzer,
    recommender: JusCogensRecommender,
    workers: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

impl Pipeline {
    /// All layers over the built-in catalog, classifying on the calling thread.
    pub fn standard() -> Self {
        Self {
            classifier: DocumentClassifier::new(),
            boundaries: JurisdictionBoundaryAnalyzer::new(),
            recommender: JusCogensRecommender::new(),
            workers: 1,
        }
    }

    /// All layers over a custom catalog.
    pub fn with_catalog(catalog: Arc<IndicatorCatalog>) -> AnalysisResult<Self> {
        Ok(Self {
            boundaries: JurisdictionBoundaryAnalyzer::with_catalog(catalog.clone())?,
            classifier: DocumentClassifier::with_catalog(catalog.clone()),
            recommender: JusCogensRecommender::with_catalog(catalog),
            workers: 1,
        })
    }

    /// Classify documents and scan principles on up to `workers` threads.
    /// Zero is treated as one.
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self.recommender = self.recommender.with_workers(self.workers);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    pub fn classifier(&self) -> &DocumentClassifier {
        &self.classifier
    }

    pub fn boundary_analyzer(&self) -> &JurisdictionBoundaryAnalyzer {
        &self.boundaries
    }

    pub fn recommender(&self) -> &JusCogensRecommender {
        &self.recommender
    }

    /// Classify every document, preserving input order.
    pub fn classify_all(&self, documents: &[Document]) -> Vec<ClassificationResult> {
        parallel::map_ordered(documents, self.workers, |doc| self.classifier.classify(doc))
    }

    /// Run the analyses `request` asks for over `documents`.
    pub fn run(&self, documents: &[Document], request: &AnalysisRequest) -> AnalysisOutcome {
        let (resolved, missing_documents) = resolve(documents, &request.document_ids);
        for id in &missing_documents {
            tracing::warn!(document_id = %id, "requested document not found");
        }

        let analyses = if request.wants(AnalysisKind::CustomaryVsTreaty) {
            parallel::map_ordered(&resolved, self.workers, |doc| {
                DocumentAnalysis::classification(&doc.id, self.classifier.classify(doc))
            })
        } else {
            Vec::new()
        };

        let boundaries = if request.wants(AnalysisKind::JurisdictionalAnalysis) {
            self.boundaries.analyze_boundaries_refs(&resolved)
        } else {
            Vec::new()
        };

        let recommendations = if request.include_jus_cogens {
            self.recommender.recommend_refs(&completed_documents(documents))
        } else {
            Vec::new()
        };

        tracing::info!(
            requested = request.document_ids.len(),
            resolved = resolved.len(),
            missing = missing_documents.len(),
            analyses = analyses.len(),
            boundaries = boundaries.len(),
            recommendations = recommendations.len(),
            "pipeline run complete"
        );

        AnalysisOutcome {
            analyses,
            boundaries,
            recommendations,
            missing_documents,
        }
    }
}

/// Look up `ids` in `documents`, in id order. When several documents share an
/// id the first one wins.
fn resolve<'a>(documents: &'a [Document], ids: &[String]) -> (Vec<&'a Document>, Vec<String>) {
    let mut by_id: HashMap<&str, &Document> = HashMap::with_capacity(documents.len());
    for doc in documents {
        by_id.entry(doc.id.as_str()).or_insert(doc);
    }

    let mut resolved = Vec::with_capacity(ids.len());
    let mut missing = Vec::new();
    for id in ids {
        match by_id.get(id.as_str()) {
            Some(doc) => resolved.push(*doc),
            None => missing.push(id.clone()),
        }
    }
    (resolved, missing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_when_deserialized() {
        let request: AnalysisRequest =
            serde_json::from_str(r#"{ "document_ids": ["a"] }"#).unwrap();
        assert_eq!(request.analysis_types, AnalysisKind::all().to_vec());
        assert!(request.include_jus_cogens);
    }

    #[test]
    fn resolve_keeps_request_order() {
        let docs = vec![
            Document::new("a", "", ""),
            Document::new("b", "", ""),
        ];
        let ids = vec!["b".to_string(), "x".to_string(), "a".to_string()];
        let (resolved, missing) = resolve(&docs, &ids);
        assert_eq!(
            resolved.iter().map(|d| d.id.as_str()).collect::<Vec<_>>(),
            vec!["b", "a"]
        );
        assert_eq!(missing, vec!["x".to_string()]);
    }

    #[test]
    fn zero_workers_clamps_to_one() {
        assert_eq!(Pipeline::standard().with_workers(0).workers(), 1);
    }

    #[test]
    fn workers_reach_the_recommender() {
        let pipeline = Pipeline::standard().with_workers(4);
        assert_eq!(pipeline.recommender().workers(), 4);
        assert_eq!(Pipeline::standard().recommender().workers(), 1);
    }
}
