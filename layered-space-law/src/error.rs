//! Error types for the analysis layers.
//!
//! Analysis itself is total: empty content and empty document lists produce
//! default-banded results, never errors. Errors only come from validating
//! caller-supplied values (jurisdiction tags, catalogs) and from serializing
//! results for hand-off.

use layered_legal::LegalError;
use thiserror::Error;

/// Errors that can occur while configuring or running an analysis.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// An input value was outside its recognized set.
    #[error(transparent)]
    Legal(#[from] LegalError),

    /// A catalog was well-formed but unusable.
    #[error("invalid indicator catalog: {reason}")]
    InvalidCatalog { reason: String },

    /// A catalog phrase could not be compiled into a search pattern.
    #[error("failed to compile catalog pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A catalog could not be parsed from RON.
    #[error("failed to parse indicator catalog: {0}")]
    CatalogFormat(#[from] ron::error::SpannedError),

    /// Results could not be serialized for hand-off.
    #[error("failed to serialize analysis output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;
