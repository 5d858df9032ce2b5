//! Knowledge base loading and validation

use crate::error::KnowledgeError;
use attest_domain::KnowledgeEntry;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// The built-in knowledge base shipped with the crate
const BUILTIN_KB: &str = include_str!("../data/knowledge.toml");

/// On-disk shape of a knowledge base file
#[derive(Debug, Deserialize)]
struct KnowledgeFile {
    entries: Vec<KnowledgeEntry>,
}

/// An ordered, immutable collection of known facts with unique keys
///
/// Constructed once at process start; every constructor validates the
/// collection so that a malformed knowledge base fails loudly before any
/// verification happens.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    /// Build a knowledge base from entries, validating them
    pub fn new(entries: Vec<KnowledgeEntry>) -> Result<Self, KnowledgeError> {
        if entries.is_empty() {
            return Err(KnowledgeError::Empty);
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.key.trim().is_empty() {
                return Err(KnowledgeError::InvalidEntry("entry has an empty key".to_string()));
            }
            if !seen.insert(entry.key.clone()) {
                return Err(KnowledgeError::DuplicateKey(entry.key.clone()));
            }
            if entry.keywords.iter().all(|k| k.trim().is_empty()) {
                return Err(KnowledgeError::InvalidEntry(format!(
                    "entry '{}' has no keywords",
                    entry.key
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Parse a knowledge base from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, KnowledgeError> {
        let file: KnowledgeFile = toml::from_str(toml_str)?;
        Self::new(file.entries)
    }

    /// Load a knowledge base from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, KnowledgeError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let kb = Self::from_toml_str(&contents)?;
        info!(
            "Loaded knowledge base from {}: {} entries",
            path.as_ref().display(),
            kb.len()
        );
        Ok(kb)
    }

    /// The built-in knowledge base
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN_KB).expect("builtin knowledge base is valid")
    }

    /// The entries in load order
    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Look up an entry by key
    pub fn get(&self, key: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the knowledge base is empty (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
