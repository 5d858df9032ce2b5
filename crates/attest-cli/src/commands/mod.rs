//! CLI command implementations.

mod kb;
mod verify;

pub use kb::execute_kb;
pub use verify::execute_verify;

use crate::error::Result;
use attest_verifier::KnowledgeBase;
use std::path::Path;

/// Load the knowledge base from a path, or fall back to the built-in one.
pub(crate) fn load_knowledge_base(path: Option<&Path>) -> Result<KnowledgeBase> {
    match path {
        Some(path) => Ok(KnowledgeBase::from_file(path)?),
        None => Ok(KnowledgeBase::builtin()),
    }
}
