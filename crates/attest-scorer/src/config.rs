//! Configuration for the trust scorer

use serde::{Deserialize, Serialize};

/// Configuration for the trust scorer
///
/// The defaults are the documented scoring constants; changing them
/// changes what a given score means, so deployments that compare reports
/// over time should pin them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Flat score penalty per contradicted claim, on top of the lost
    /// base share
    #[serde(default = "default_contradiction_penalty")]
    pub contradiction_penalty: f64,

    /// Maximum score adjustment (either direction) from citation validity
    #[serde(default = "default_citation_adjustment_cap")]
    pub citation_adjustment_cap: f64,
}

fn default_contradiction_penalty() -> f64 {
    10.0
}

fn default_citation_adjustment_cap() -> f64 {
    10.0
}

impl ScoringConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.contradiction_penalty.is_finite() || self.contradiction_penalty < 0.0 {
            return Err(format!(
                "contradiction_penalty must be non-negative, got {}",
                self.contradiction_penalty
            ));
        }
        if !self.citation_adjustment_cap.is_finite()
            || self.citation_adjustment_cap < 0.0
            || self.citation_adjustment_cap > 100.0
        {
            return Err(format!(
                "citation_adjustment_cap must be in [0, 100], got {}",
                self.citation_adjustment_cap
            ));
        }
        Ok(())
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            contradiction_penalty: default_contradiction_penalty(),
            citation_adjustment_cap: default_citation_adjustment_cap(),
        }
    }
}
