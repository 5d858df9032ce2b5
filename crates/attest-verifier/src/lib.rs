//! Attest Claim Verifier
//!
//! Verifies extracted claims against a static, immutable knowledge base.
//! Each claim is matched to the knowledge entry with the highest keyword
//! overlap; the match either confirms the claim, contradicts it on a
//! numeric discrepancy, or leaves it unverifiable.
//!
//! The knowledge base is loaded once at process start and never mutated.
//! Load failure is the one fatal error in the system: a process without a
//! valid knowledge base must not serve verification requests.
//!
//! # Examples
//!
//! ```
//! use attest_verifier::{ClaimVerifier, KnowledgeBase, VerifierConfig};
//! use attest_domain::ClaimStatus;
//!
//! let verifier = ClaimVerifier::new(KnowledgeBase::builtin(), VerifierConfig::default());
//! let claim = verifier.verify("The Eiffel Tower is 330 meters tall.");
//! assert_eq!(claim.status, ClaimStatus::Verified);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod knowledge;
mod verifier;

pub use config::VerifierConfig;
pub use error::KnowledgeError;
pub use knowledge::KnowledgeBase;
pub use verifier::ClaimVerifier;
