//! Knowledge entry - a known fact used as verification ground truth

use serde::{Deserialize, Serialize};

/// A single known fact in the knowledge base
///
/// Entries are immutable and loaded once at process start. `keywords`
/// drives the overlap match in the verifier; `canonical_statement` is the
/// reference wording a claim is compared against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    /// Unique lookup key, also the deterministic tie-breaker
    pub key: String,

    /// Canonical statement of the fact
    pub canonical_statement: String,

    /// Keywords used for overlap matching against claim text
    pub keywords: Vec<String>,
}

impl KnowledgeEntry {
    /// Create a new knowledge entry
    pub fn new(
        key: impl Into<String>,
        canonical_statement: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            key: key.into(),
            canonical_statement: canonical_statement.into(),
            keywords,
        }
    }
}
