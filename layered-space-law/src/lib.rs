//! Space law analysis plugin for layered-legal.
//!
//! This crate holds the rule-based analysis engine for space law texts:
//!
//! ## Per-Document Analysis
//!
//! - [`PatternScorer`] - Counts binding, recommendatory, prohibitive, rights and duty language
//! - [`DocumentClassifier`] - Labels a document as treaty law, customary law or mixed
//!
//! ## Corpus-Level Analysis
//!
//! - [`JurisdictionBoundaryAnalyzer`] - Legal bases and conflict excerpts per jurisdiction
//! - [`JusCogensRecommender`] - Candidate peremptory norms with supporting documents
//!
//! ## Batch Processing
//!
//! - [`Pipeline`] - Runs the requested analyses over a document set
//! - [`AnalysisReport`] - Aligned text tables for an [`AnalysisOutcome`]
//!
//! ## Configuration
//!
//! Every component reads its phrases from an [`IndicatorCatalog`], shared
//! through an `Arc`. The built-in catalog is also available as RON in
//! `catalog/default.ron`.
//!
//! All analysis is deterministic: identical input always yields identical
//! output, and documents are only ever borrowed.
//!
//! ## Example
//!
//! ```
//! use layered_legal::Document;
//! use layered_space_law::{classify, LawClassification};
//!
//! let doc = Document::new(
//!     "d1",
//!     "Resolution 1962",
//!     "General practice accepted as law through consistent practice.",
//! );
//! let result = classify(&doc);
//! assert_eq!(result.classification, LawClassification::CustomaryLaw);
//! assert_eq!(result.confidence, 0.9);
//! ```

mod boundary;
mod catalog;
mod classifier;
mod error;
mod pattern;
mod pipeline;
mod recommender;
mod report;

pub use boundary::{
    analyze_boundaries, extract_legal_basis, BoundaryType, JurisdictionBoundaryAnalyzer,
    JurisdictionalBoundary, CONFLICT_CONTEXT_CHARS, MAX_CONFLICTS_PER_KEYWORD, MAX_LEGAL_BASIS,
};
pub use catalog::IndicatorCatalog;
pub use classifier::{
    classify, ClassificationResult, DocumentClassifier, JusCogensBand, LawClassification,
    MIXED_CONFIDENCE,
};
pub use error::{AnalysisError, AnalysisResult};
pub use pattern::{score_patterns, LanguageClass, PatternCounts, PatternScorer};
pub use pipeline::{
    AnalysisKind, AnalysisOutcome, AnalysisRequest, DocumentAnalysis, Pipeline, METHODOLOGY,
};
pub use recommender::{
    recommend_jus_cogens, JusCogensRecommendation, JusCogensRecommender, IMPLEMENTATION_GUIDANCE,
    OPPOSITION_ARGUMENT,
};
pub use report::AnalysisReport;
