//! Citation checker error types

use thiserror::Error;

/// Errors that can occur while constructing a citation checker
///
/// Scanning itself never fails; per-citation problems degrade to an
/// invalid citation with a reason.
#[derive(Debug, Error)]
pub enum CitationError {
    /// Invalid citation policy
    #[error("Invalid citation policy: {0}")]
    Policy(String),

    /// A citation pattern failed to compile
    #[error("Failed to compile citation pattern: {0}")]
    Pattern(#[from] regex::Error),
}
