//! Error types for legal input validation.

use thiserror::Error;

/// Errors raised when an input value falls outside a recognized set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LegalError {
    /// A jurisdiction tag that is not one of the recognized jurisdictions.
    #[error("unknown jurisdiction: {tag:?}")]
    UnknownJurisdiction { tag: String },

    /// A law-type tag that is not one of the recognized law types.
    #[error("unknown law type: {tag:?}")]
    UnknownLawType { tag: String },

    /// A document status tag that is not one of the recognized statuses.
    #[error("unknown document status: {tag:?}")]
    UnknownStatus { tag: String },
}

/// Result type for legal input validation.
pub type LegalResult<T> = Result<T, LegalError>;
