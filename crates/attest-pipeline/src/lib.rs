//! Attest Pipeline
//!
//! Composes the four verification stages into one fixed sequence:
//! extract claims, verify each against the knowledge base, audit
//! citations, and aggregate into a trust score. This crate is the only
//! place with cross-cutting knowledge of the stages; each stage remains
//! independently testable.
//!
//! Data flows strictly forward and every stage is a pure function, so a
//! built pipeline can be shared freely across threads and `run` called
//! concurrently without locks.
//!
//! # Examples
//!
//! ```
//! use attest_pipeline::{PipelineConfig, TrustPipeline};
//! use attest_verifier::KnowledgeBase;
//!
//! let pipeline = TrustPipeline::new(KnowledgeBase::builtin(), PipelineConfig::default()).unwrap();
//! let report = pipeline.run("The Eiffel Tower is 330 meters tall.");
//! assert_eq!(report.trust_score, 100);
//! ```

#![warn(missing_docs)]

mod config;
mod error;

pub use config::PipelineConfig;
pub use error::PipelineError;

use attest_citations::CitationChecker;
use attest_domain::{Claim, ScoreBreakdown, TrustReport};
use attest_extractor::ClaimExtractor;
use attest_scorer::TrustScorer;
use attest_verifier::{ClaimVerifier, KnowledgeBase};
use tracing::{debug, info};

/// The orchestrated verification pipeline
///
/// Holds one instance of each stage, built from a validated
/// [`PipelineConfig`] and an immutable [`KnowledgeBase`]. Construction is
/// the only fallible step; `run` is total.
pub struct TrustPipeline {
    extractor: ClaimExtractor,
    checker: CitationChecker,
    verifier: ClaimVerifier,
    scorer: TrustScorer,
}

impl TrustPipeline {
    /// Build a pipeline over the given knowledge base
    ///
    /// Fails loudly on invalid configuration so that a misconfigured
    /// process never starts serving.
    pub fn new(kb: KnowledgeBase, config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate().map_err(PipelineError::Config)?;
        Ok(Self {
            extractor: ClaimExtractor::new(config.extractor),
            checker: CitationChecker::new(config.citations)?,
            verifier: ClaimVerifier::new(kb, config.verifier),
            scorer: TrustScorer::new(config.scoring),
        })
    }

    /// Build a pipeline over the built-in knowledge base with defaults
    pub fn with_builtin_kb() -> Result<Self, PipelineError> {
        Self::new(KnowledgeBase::builtin(), PipelineConfig::default())
    }

    /// The knowledge base this pipeline verifies against
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        self.verifier.knowledge_base()
    }

    /// Run the full pipeline on one input text
    ///
    /// Pure: the report is fully determined by `text` and the knowledge
    /// base. An empty input yields the neutral report (no claims, no
    /// citations, score 100).
    pub fn run(&self, text: &str) -> TrustReport {
        debug!("Running trust pipeline on {} chars", text.len());

        let extracted = self.extractor.extract(text);
        debug!("Extracted {} claims", extracted.len());

        let claims: Vec<Claim> = extracted
            .iter()
            .map(|claim_text| self.verifier.verify(claim_text))
            .collect();

        let citation_report = self.checker.check(text);

        let (trust_score, reliability_label) = self.scorer.score(&claims, &citation_report);
        let breakdown = ScoreBreakdown::for_claims(&claims);

        info!(
            "Pipeline complete: score {} ({}), {} claims, {} citations",
            trust_score,
            reliability_label,
            breakdown.total_claims,
            citation_report.total_citations
        );

        TrustReport {
            trust_score,
            reliability_label,
            breakdown,
            claims,
            citation_report,
        }
    }
}
