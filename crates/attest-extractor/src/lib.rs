//! Attest Claim Extractor
//!
//! Splits raw text into an ordered sequence of atomic factual-claim
//! strings. Sentence-like units are cut at terminal punctuation, then
//! interrogative and subjective units are dropped; what survives is
//! returned in source order.
//!
//! # Examples
//!
//! ```
//! use attest_extractor::{ClaimExtractor, ExtractorConfig};
//!
//! let extractor = ClaimExtractor::new(ExtractorConfig::default());
//! let claims = extractor.extract("Water boils at 100 degrees. Is that hot?");
//! assert_eq!(claims, vec!["Water boils at 100 degrees.".to_string()]);
//! ```

#![warn(missing_docs)]

mod config;
mod extractor;

pub use config::ExtractorConfig;
pub use extractor::ClaimExtractor;
