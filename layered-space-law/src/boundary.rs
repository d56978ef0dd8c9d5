//! Jurisdictional boundary analysis.
//!
//! Documents are partitioned by jurisdiction (missing or unrecognized tags go
//! to `other`). For each partition the analyzer:
//!
//! 1. Joins `content + " " + title` of every document, in input order
//! 2. Extracts legal-basis references from the original-case text:
//!    capitalized instrument names ("Outer Space Treaty", "Commercial Space
//!    Launch Act") and lowercase principle phrases ("principle of due regard")
//! 3. Captures up to three ~50-character context windows per conflict keyword
//! 4. Scores confidence by evidentiary volume
//!
//! Only functional boundaries are produced.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use layered_legal::{Document, Jurisdiction};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::catalog::IndicatorCatalog;
use crate::error::AnalysisResult;

/// Maximum number of legal-basis entries kept per boundary.
pub const MAX_LEGAL_BASIS: usize = 10;

/// Maximum number of context windows kept per conflict keyword.
pub const MAX_CONFLICTS_PER_KEYWORD: usize = 3;

/// Characters of context captured on each side of a conflict keyword.
pub const CONFLICT_CONTEXT_CHARS: usize = 50;

/// Confidence ceiling, in twentieths.
const MAX_CONFIDENCE_TWENTIETHS: usize = 18;

static LEGAL_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z][a-z]+ (?:\w+ )*(?:Treaty|Convention|Agreement|Act|Law|Code)\b")
        .expect("legal reference pattern is valid")
});

static LEGAL_PRINCIPLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:principle|rule|norm) (?:of|for) [a-z\s]+\b")
        .expect("legal principle pattern is valid")
});

/// The kind of boundary a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryType {
    /// Scope of authority defined by subject matter and activity
    Functional,
}

impl BoundaryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Functional => "functional",
        }
    }
}

impl fmt::Display for BoundaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Boundary record for one jurisdiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JurisdictionalBoundary {
    pub jurisdiction: Jurisdiction,
    pub boundary_type: BoundaryType,
    pub description: String,
    pub legal_basis: Vec<String>,
    pub conflicts: Vec<String>,
    #[serde(rename = "confidence_score")]
    pub confidence: f64,
}

impl JurisdictionalBoundary {
    /// Build a functional boundary, truncating `legal_basis` to
    /// [`MAX_LEGAL_BASIS`] and scoring confidence as
    /// `min(0.9, 0.5 + 0.05 × documents + 0.1 × legal_basis)`.
    pub fn functional(
        jurisdiction: Jurisdiction,
        document_count: usize,
        mut legal_basis: Vec<String>,
        conflicts: Vec<String>,
    ) -> Self {
        legal_basis.truncate(MAX_LEGAL_BASIS);
        let confidence = boundary_confidence(document_count, legal_basis.len());

        Self {
            jurisdiction,
            boundary_type: BoundaryType::Functional,
            description: format!(
                "Jurisdictional analysis for {} based on {} documents",
                jurisdiction, document_count
            ),
            legal_basis,
            conflicts,
            confidence,
        }
    }
}

/// `0.5 + 0.05 × documents + 0.1 × references`, computed in twentieths.
fn boundary_confidence(document_count: usize, legal_basis_count: usize) -> f64 {
    let twentieths = 10 + document_count + 2 * legal_basis_count;
    twentieths.min(MAX_CONFIDENCE_TWENTIETHS) as f64 / 20.0
}

/// Extract legal-basis references from original-case text.
///
/// Both extraction rules run before duplicates are removed (first occurrence
/// wins) and the list is truncated to [`MAX_LEGAL_BASIS`].
pub fn extract_legal_basis(text: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for m in LEGAL_REFERENCE
        .find_iter(text)
        .chain(LEGAL_PRINCIPLE.find_iter(text))
    {
        let reference = m.as_str();
        if !found.iter().any(|f| f == reference) {
            found.push(reference.to_string());
        }
    }

    found.truncate(MAX_LEGAL_BASIS);
    found
}

#[derive(Debug, Clone)]
struct ConflictPattern {
    keyword: String,
    window: Regex,
}

impl ConflictPattern {
    fn new(keyword: &str) -> AnalysisResult<Self> {
        let source = format!(
            r"(?i).{{0,{n}}}{kw}.{{0,{n}}}",
            n = CONFLICT_CONTEXT_CHARS,
            kw = regex::escape(keyword)
        );
        Ok(Self {
            keyword: keyword.to_string(),
            window: Regex::new(&source)?,
        })
    }

    fn windows<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.window
            .find_iter(text)
            .take(MAX_CONFLICTS_PER_KEYWORD)
            .map(|m| m.as_str())
    }
}

/// Partitions documents by jurisdiction and summarizes each partition.
///
/// # Example
/// ```
/// use layered_legal::{Document, Jurisdiction};
/// use layered_space_law::JurisdictionBoundaryAnalyzer;
///
/// let docs = vec![
///     Document::new("1", "Commercial Space Launch Act", "Licensing duties.").with_jurisdiction("us"),
///     Document::new("2", "Resolution", "A dispute over orbital slots.").with_jurisdiction("un"),
/// ];
/// let boundaries = JurisdictionBoundaryAnalyzer::new().analyze_boundaries(&docs);
///
/// assert_eq!(boundaries.len(), 2);
/// assert_eq!(boundaries[0].jurisdiction, Jurisdiction::Us);
/// assert_eq!(boundaries[0].legal_basis, vec!["Commercial Space Launch Act".to_string()]);
/// assert_eq!(boundaries[1].conflicts.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct JurisdictionBoundaryAnalyzer {
    catalog: Arc<IndicatorCatalog>,
    conflict_patterns: Vec<ConflictPattern>,
}

impl Default for JurisdictionBoundaryAnalyzer {
    fn default() -> Self {
        Self::with_catalog(IndicatorCatalog::shared())
            .expect("built-in conflict keywords compile")
    }
}

impl JurisdictionBoundaryAnalyzer {
    /// Create an analyzer over the built-in catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer over a custom catalog, compiling its conflict keywords.
    pub fn with_catalog(catalog: Arc<IndicatorCatalog>) -> AnalysisResult<Self> {
        let conflict_patterns = catalog
            .conflict_keywords()
            .iter()
            .map(|kw| ConflictPattern::new(kw))
            .collect::<AnalysisResult<Vec<_>>>()?;

        Ok(Self {
            catalog,
            conflict_patterns,
        })
    }

    pub fn catalog(&self) -> &IndicatorCatalog {
        &self.catalog
    }

    /// One boundary per distinct jurisdiction, in first-appearance order.
    pub fn analyze_boundaries(&self, documents: &[Document]) -> Vec<JurisdictionalBoundary> {
        self.analyze_refs(documents.iter())
    }

    /// Like [`Self::analyze_boundaries`], over borrowed documents.
    pub fn analyze_boundaries_refs(&self, documents: &[&Document]) -> Vec<JurisdictionalBoundary> {
        self.analyze_refs(documents.iter().copied())
    }

    /// Analyze `documents` as a single group under an explicitly named
    /// jurisdiction. The tag must be a recognized jurisdiction.
    pub fn analyze_jurisdiction(
        &self,
        tag: &str,
        documents: &[Document],
    ) -> AnalysisResult<JurisdictionalBoundary> {
        let jurisdiction = Jurisdiction::from_str(tag)?;
        let group: Vec<&Document> = documents.iter().collect();
        Ok(self.analyze_group(jurisdiction, &group))
    }

    /// Boundaries for a requested jurisdiction alongside international law.
    ///
    /// Selects documents tagged with `tag` or `international`, then partitions
    /// them as [`Self::analyze_boundaries`] does.
    pub fn boundaries_for(
        &self,
        tag: &str,
        documents: &[Document],
    ) -> AnalysisResult<Vec<JurisdictionalBoundary>> {
        let requested = Jurisdiction::from_str(tag)?;
        let in_scope = documents.iter().filter(|d| {
            let j = d.jurisdiction();
            j == requested || j == Jurisdiction::International
        });
        Ok(self.analyze_refs(in_scope))
    }

    fn analyze_refs<'a>(
        &self,
        documents: impl Iterator<Item = &'a Document>,
    ) -> Vec<JurisdictionalBoundary> {
        let groups = group_by_jurisdiction(documents);
        let boundaries: Vec<JurisdictionalBoundary> = groups
            .iter()
            .map(|(jurisdiction, docs)| self.analyze_group(*jurisdiction, docs))
            .collect();

        tracing::info!(
            jurisdictions = boundaries.len(),
            documents = groups.iter().map(|(_, d)| d.len()).sum::<usize>(),
            "analyzed jurisdictional boundaries"
        );
        boundaries
    }

    fn analyze_group(&self, jurisdiction: Jurisdiction, documents: &[&Document]) -> JurisdictionalBoundary {
        let blob = documents
            .iter()
            .map(|d| d.full_text())
            .collect::<Vec<_>>()
            .join(" ");

        let legal_basis = extract_legal_basis(&blob);
        let conflicts = self.extract_conflicts(&blob);

        tracing::debug!(
            %jurisdiction,
            documents = documents.len(),
            legal_basis = legal_basis.len(),
            conflicts = conflicts.len(),
            "analyzed jurisdiction group"
        );

        JurisdictionalBoundary::functional(jurisdiction, documents.len(), legal_basis, conflicts)
    }

    /// Context windows around conflict keywords, capped per keyword.
    pub fn extract_conflicts(&self, text: &str) -> Vec<String> {
        self.conflict_patterns
            .iter()
            .flat_map(|pattern| {
                pattern.windows(text).map(move |w| {
                    tracing::trace!(keyword = %pattern.keyword, window = w, "conflict context");
                    w.to_string()
                })
            })
            .collect()
    }
}

/// Partition documents by jurisdiction, preserving first-appearance order of
/// jurisdictions and input order within each group.
fn group_by_jurisdiction<'a>(
    documents: impl Iterator<Item = &'a Document>,
) -> Vec<(Jurisdiction, Vec<&'a Document>)> {
    let mut groups: Vec<(Jurisdiction, Vec<&'a Document>)> = Vec::new();
    for doc in documents {
        let jurisdiction = doc.jurisdiction();
        match groups.iter_mut().find(|(j, _)| *j == jurisdiction) {
            Some((_, docs)) => docs.push(doc),
            None => groups.push((jurisdiction, vec![doc])),
        }
    }
    groups
}

/// Analyze boundaries with the built-in catalog.
pub fn analyze_boundaries(documents: &[Document]) -> Vec<JurisdictionalBoundary> {
    JurisdictionBoundaryAnalyzer::new().analyze_boundaries(documents)
}
