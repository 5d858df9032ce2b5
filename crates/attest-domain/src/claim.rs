//! Claim module - the unit of verification output

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verification status of a single claim
///
/// A closed set rather than a free-form string, so exhaustive handling is
/// checked at compile time. Serialized in the upper-case wire form
/// (`VERIFIED`, `CONTRADICTED`, `UNVERIFIABLE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClaimStatus {
    /// The claim agrees with a knowledge base entry
    Verified,

    /// The claim conflicts with a knowledge base entry
    Contradicted,

    /// No knowledge base entry matched the claim
    Unverifiable,
}

impl ClaimStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Verified => "VERIFIED",
            ClaimStatus::Contradicted => "CONTRADICTED",
            ClaimStatus::Unverifiable => "UNVERIFIABLE",
        }
    }

    /// Parse a status from a string (internal use)
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "VERIFIED" => Some(ClaimStatus::Verified),
            "CONTRADICTED" => Some(ClaimStatus::Contradicted),
            "UNVERIFIABLE" => Some(ClaimStatus::Unverifiable),
            _ => None,
        }
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A factual claim extracted from input text, with its verification outcome
///
/// Claims are immutable once created. The verifier builds one per extracted
/// sentence; `text` is trimmed and free of extraction artifacts, and
/// `reason` always states why the status was assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// The claim text as extracted from the source
    #[serde(rename = "claim_text")]
    pub text: String,

    /// Verification status
    pub status: ClaimStatus,

    /// Explanation for the verification result
    pub reason: String,
}

impl Claim {
    /// Create a new claim
    pub fn new(text: impl Into<String>, status: ClaimStatus, reason: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            status,
            reason: reason.into(),
        }
    }
}
