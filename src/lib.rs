//! Data-oriented primitives for legal text analysis.
//!
//! This crate holds the records and helpers shared by the `layered-*` legal
//! analysis plugins:
//!
//! ## Core Types
//!
//! - [`Document`] - A legal text as supplied by an external store
//! - [`Jurisdiction`] / [`LawType`] / [`DocumentStatus`] - Enumerated tags
//! - [`LegalError`] - Validation failures on input values
//!
//! ## Helpers
//!
//! - [`text`] - Case folding, field joining and title casing
//! - [`TableDisplay`] - Width-aware text tables for reports
//!
//! ## Example
//!
//! ```
//! use layered_legal::{Document, Jurisdiction};
//!
//! let doc = Document::new("ost", "Outer Space Treaty", "States shall not place nuclear weapons in orbit.")
//!     .with_jurisdiction("international");
//! assert_eq!(doc.jurisdiction(), Jurisdiction::International);
//! assert_eq!(doc.folded_text(), "states shall not place nuclear weapons in orbit. outer space treaty");
//! ```

mod display;
mod document;
mod error;
mod jurisdiction;
pub mod text;

pub use display::TableDisplay;
pub use document::{completed_documents, Document, DocumentStatus, LawType};
pub use error::{LegalError, LegalResult};
pub use jurisdiction::Jurisdiction;
