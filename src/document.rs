//! The document record consumed by every analysis layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LegalError;
use crate::jurisdiction::Jurisdiction;
use crate::text;

/// The legal character a document was tagged with by its collector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LawType {
    Treaty,
    Customary,
    Domestic,
    Regulatory,
    CaseLaw,
}

impl LawType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Treaty => "treaty",
            Self::Customary => "customary",
            Self::Domestic => "domestic",
            Self::Regulatory => "regulatory",
            Self::CaseLaw => "case_law",
        }
    }
}

impl FromStr for LawType {
    type Err = LegalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "treaty" => Ok(Self::Treaty),
            "customary" => Ok(Self::Customary),
            "domestic" => Ok(Self::Domestic),
            "regulatory" => Ok(Self::Regulatory),
            "case_law" => Ok(Self::CaseLaw),
            _ => Err(LegalError::UnknownLawType { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for LawType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing state of a document in the external store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl FromStr for DocumentStatus {
    type Err = LegalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(LegalError::UnknownStatus { tag: s.to_string() }),
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A legal text supplied by an external store or collector.
///
/// Analysis layers only ever borrow documents. The jurisdiction is kept as the
/// raw tag the store supplied so that grouping can decide how to bucket
/// unrecognized values; use [`Document::jurisdiction`] for the typed view.
///
/// Missing `content` deserializes to the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Raw jurisdiction tag, if the store had one
    #[serde(default)]
    pub jurisdiction: Option<String>,
    #[serde(default)]
    pub law_type: Option<LawType>,
    #[serde(default)]
    pub status: DocumentStatus,
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            jurisdiction: None,
            law_type: None,
            status: DocumentStatus::default(),
        }
    }

    /// Set the raw jurisdiction tag.
    pub fn with_jurisdiction(mut self, tag: impl Into<String>) -> Self {
        self.jurisdiction = Some(tag.into());
        self
    }

    pub fn with_law_type(mut self, law_type: LawType) -> Self {
        self.law_type = Some(law_type);
        self
    }

    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }

    /// Typed jurisdiction, with missing or unknown tags mapped to `Other`.
    pub fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::from_tag_or_other(self.jurisdiction.as_deref())
    }

    /// Content followed by title, original case.
    pub fn full_text(&self) -> String {
        text::join_fields(&self.content, &self.title)
    }

    /// Content followed by title, case-folded.
    pub fn folded_text(&self) -> String {
        text::fold(&self.full_text())
    }

    pub fn is_completed(&self) -> bool {
        self.status == DocumentStatus::Completed
    }
}

/// Select the documents whose processing has completed.
pub fn completed_documents(documents: &[Document]) -> Vec<&Document> {
    documents.iter().filter(|d| d.is_completed()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_content_deserializes_as_empty() {
        let doc: Document =
            serde_json::from_str(r#"{"id":"d1","title":"Moon Agreement","status":"completed"}"#)
                .unwrap();
        assert_eq!(doc.content, "");
        assert_eq!(doc.jurisdiction(), Jurisdiction::Other);
        assert!(doc.is_completed());
    }

    #[test]
    fn law_type_tags() {
        assert_eq!("case_law".parse::<LawType>(), Ok(LawType::CaseLaw));
        assert!("statute".parse::<LawType>().is_err());
        assert_eq!(
            serde_json::to_string(&LawType::CaseLaw).unwrap(),
            "\"case_law\""
        );
    }

    #[test]
    fn status_tags() {
        assert_eq!("Completed".parse::<DocumentStatus>(), Ok(DocumentStatus::Completed));
        assert_eq!(
            "archived".parse::<DocumentStatus>(),
            Err(LegalError::UnknownStatus {
                tag: "archived".to_string()
            })
        );
    }

    #[test]
    fn completed_filter_keeps_order() {
        let docs = vec![
            Document::new("a", "A", "").with_status(DocumentStatus::Completed),
            Document::new("b", "B", ""),
            Document::new("c", "C", "").with_status(DocumentStatus::Completed),
        ];
        let ids: Vec<_> = completed_documents(&docs).iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }
}
