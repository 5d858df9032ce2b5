//! Knowledge base error types

use thiserror::Error;

/// Errors that can occur while loading a knowledge base
///
/// These are startup errors: a process that cannot load its knowledge
/// base must fail loudly instead of serving verification requests.
/// Verification itself never fails; an unmatched claim is a normal
/// `UNVERIFIABLE` outcome.
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// Failed to read the knowledge base file
    #[error("Failed to read knowledge base file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the knowledge base TOML
    #[error("Failed to parse knowledge base TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// The knowledge base contains no entries
    #[error("Knowledge base contains no entries")]
    Empty,

    /// Two entries share the same key
    #[error("Duplicate knowledge base key: '{0}'")]
    DuplicateKey(String),

    /// An entry is structurally invalid
    #[error("Invalid knowledge base entry: {0}")]
    InvalidEntry(String),
}
