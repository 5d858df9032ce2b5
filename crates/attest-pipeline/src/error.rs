//! Pipeline error types

use attest_citations::CitationError;
use thiserror::Error;

/// Errors that can occur while building a pipeline
///
/// `run` itself is total; per-claim and per-citation problems degrade to
/// status values inside the report.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Invalid pipeline configuration
    #[error("Invalid pipeline configuration: {0}")]
    Config(String),

    /// Citation checker construction failed
    #[error("Citation checker error: {0}")]
    Citation(#[from] CitationError),
}
