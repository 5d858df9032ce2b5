//! Pipeline configuration

use attest_citations::CitationPolicy;
use attest_extractor::ExtractorConfig;
use attest_scorer::ScoringConfig;
use attest_verifier::VerifierConfig;
use serde::{Deserialize, Serialize};

/// Configuration for the whole pipeline, one section per stage
///
/// Every section is optional in TOML; omitted sections take the stage's
/// documented defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Claim extractor tuning
    #[serde(default)]
    pub extractor: ExtractorConfig,

    /// Citation validity policy
    #[serde(default)]
    pub citations: CitationPolicy,

    /// Verifier matching threshold
    #[serde(default)]
    pub verifier: VerifierConfig,

    /// Scoring constants
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl PipelineConfig {
    /// Validate all stage configurations
    pub fn validate(&self) -> Result<(), String> {
        self.extractor.validate()?;
        self.citations.validate()?;
        self.verifier.validate()?;
        self.scoring.validate()?;
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, String> {
        let config: PipelineConfig =
            toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))?;
        config.validate()?;
        Ok(config)
    }
}
