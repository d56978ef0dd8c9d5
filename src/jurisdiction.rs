//! Jurisdiction tags for space law documents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LegalError;

/// The jurisdictions a space law document can be attributed to.
///
/// Parsing with [`FromStr`] is strict and rejects unknown tags. Grouping code
/// that must place every document somewhere uses
/// [`Jurisdiction::from_tag_or_other`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    /// Multilateral instruments with no single national owner
    International,
    /// United Nations bodies (COPUOS, General Assembly resolutions)
    Un,
    /// United States
    Us,
    /// European Union
    Eu,
    /// Russian Federation
    Russia,
    /// People's Republic of China
    China,
    /// Anything else, including missing tags
    Other,
}

impl Jurisdiction {
    /// Returns all jurisdictions in canonical order.
    pub fn all() -> &'static [Jurisdiction] {
        &[
            Self::International,
            Self::Un,
            Self::Us,
            Self::Eu,
            Self::Russia,
            Self::China,
            Self::Other,
        ]
    }

    /// Returns the snake_case tag, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::International => "international",
            Self::Un => "un",
            Self::Us => "us",
            Self::Eu => "eu",
            Self::Russia => "russia",
            Self::China => "china",
            Self::Other => "other",
        }
    }

    /// Lenient mapping used when partitioning documents.
    ///
    /// Missing and unrecognized tags both land in [`Jurisdiction::Other`].
    pub fn from_tag_or_other(tag: Option<&str>) -> Self {
        tag.and_then(|t| t.parse().ok()).unwrap_or(Self::Other)
    }
}

impl FromStr for Jurisdiction {
    type Err = LegalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|j| j.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| LegalError::UnknownJurisdiction { tag: s.to_string() })
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
