//! Error types for the scenario harness.
//!
//! Covers fixture parsing, file loading and analysis setup. Expectation
//! mismatches are not errors; they are reported as [`crate::Mismatch`] values.

use layered_space_law::AnalysisError;
use thiserror::Error;

/// Errors that can occur while loading or running scenarios.
#[derive(Debug, Error)]
pub enum SpecError {
    /// A fixture or configuration file was not valid.
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },

    /// A fixture or configuration file could not be read.
    #[error("failed to load {path}: {message}")]
    Load { path: String, message: String },

    /// The analysis pipeline could not be configured.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

/// Result type for harness operations.
pub type SpecResult<T> = Result<T, SpecError>;
