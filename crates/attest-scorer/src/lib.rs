//! Attest Trust Scorer
//!
//! Aggregates verified claims and the citation audit into a single trust
//! score in [0, 100] with a reliability label.
//!
//! Scoring policy (constants fixed in [`ScoringConfig`] for
//! reproducibility):
//!
//! - Base score is the verified fraction of claims, scaled to 100. An
//!   empty claim list scores 100: with nothing to contradict, this
//!   component stays neutral-maximal.
//! - Each contradicted claim subtracts an additional flat penalty;
//!   contradictions are strictly worse than unverifiable absence of
//!   evidence.
//! - The citation validity ratio contributes a bounded adjustment, up to
//!   the configured cap in either direction. Zero citations adjust
//!   nothing.
//! - The result is clamped to [0, 100] and rounded to the nearest
//!   integer.

#![warn(missing_docs)]

mod config;
mod scorer;

pub use config::ScoringConfig;
pub use scorer::TrustScorer;
