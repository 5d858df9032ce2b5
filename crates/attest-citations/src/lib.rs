//! Attest Citation Checker
//!
//! Scans raw text for citation-like substrings and classifies each one:
//! URLs, DOI tokens, bracketed reference markers and parenthetical
//! author-year citations. Validity is decided by a [`CitationPolicy`]:
//! URLs must resolve to a trusted domain, DOIs must be well-formed, and
//! marker-style citations are accepted or rejected wholesale.
//!
//! Absence of citations is a neutral outcome, never an error, and a
//! malformed citation degrades to `is_valid = false` with a reason instead
//! of aborting the scan.
//!
//! # Examples
//!
//! ```
//! use attest_citations::{CitationChecker, CitationPolicy};
//!
//! let checker = CitationChecker::new(CitationPolicy::default()).unwrap();
//! let report = checker.check("See https://en.wikipedia.org/wiki/DOI [1].");
//! assert_eq!(report.total_citations, 2);
//! assert_eq!(report.valid_citations, 2);
//! ```

#![warn(missing_docs)]

mod checker;
mod error;
mod policy;

pub use checker::CitationChecker;
pub use error::CitationError;
pub use policy::CitationPolicy;
