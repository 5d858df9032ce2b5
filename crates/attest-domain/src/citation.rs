//! Citation types - reference-like substrings audited for validity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Pattern family a citation was matched by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CitationKind {
    /// An http(s) or www link
    Url,

    /// A DOI token (`10.xxxx/...`)
    Doi,

    /// A bracketed reference marker such as `[1]` or `[Smith 2023]`
    Bracketed,

    /// A parenthetical author-year citation such as `(Smith, 2023)`
    AuthorYear,
}

impl CitationKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            CitationKind::Url => "url",
            CitationKind::Doi => "doi",
            CitationKind::Bracketed => "bracketed",
            CitationKind::AuthorYear => "author_year",
        }
    }
}

impl fmt::Display for CitationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A citation-like substring found in input text
///
/// `raw` is the exact substring matched. An invalid citation always carries
/// a reason stating which check failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// The exact substring matched
    pub raw: String,

    /// Pattern family the substring was matched by
    pub kind: CitationKind,

    /// Whether the citation passed the validity policy
    pub is_valid: bool,

    /// Explanation for the validity result
    pub reason: String,
}

impl Citation {
    /// Create a new citation
    pub fn new(
        raw: impl Into<String>,
        kind: CitationKind,
        is_valid: bool,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            raw: raw.into(),
            kind,
            is_valid,
            reason: reason.into(),
        }
    }
}

/// Audit of all citations found in one input text
///
/// Invariant: `valid_citations <= total_citations == citations.len()`.
/// Constructing through [`CitationReport::from_citations`] upholds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationReport {
    /// Total number of citations found
    pub total_citations: usize,

    /// Number of citations that passed the validity policy
    pub valid_citations: usize,

    /// The citations in source order
    pub citations: Vec<Citation>,
}

impl CitationReport {
    /// An empty report: no citations found (a neutral outcome)
    pub fn empty() -> Self {
        Self {
            total_citations: 0,
            valid_citations: 0,
            citations: Vec::new(),
        }
    }

    /// Build a report from audited citations, deriving the counts
    pub fn from_citations(citations: Vec<Citation>) -> Self {
        let total_citations = citations.len();
        let valid_citations = citations.iter().filter(|c| c.is_valid).count();
        Self {
            total_citations,
            valid_citations,
            citations,
        }
    }

    /// Check the counting invariant (useful in tests and assertions)
    pub fn is_consistent(&self) -> bool {
        self.valid_citations <= self.total_citations && self.total_citations == self.citations.len()
    }

    /// Fraction of citations that passed validation; `None` when empty
    pub fn validity_ratio(&self) -> Option<f64> {
        if self.total_citations == 0 {
            None
        } else {
            Some(self.valid_citations as f64 / self.total_citations as f64)
        }
    }
}

impl Default for CitationReport {
    fn default() -> Self {
        Self::empty()
    }
}
