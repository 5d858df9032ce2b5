//! Configuration for the claim verifier

use serde::{Deserialize, Serialize};

/// Configuration for the claim verifier
///
/// `high_threshold` is the fixed decision constant: an entry whose keyword
/// overlap reaches it is considered a match. The default of 0.6 is kept
/// stable for reproducibility; reports are only comparable across runs
/// that used the same threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifierConfig {
    /// Minimum keyword-overlap fraction for an entry to count as a match
    #[serde(default = "default_high_threshold")]
    pub high_threshold: f64,
}

fn default_high_threshold() -> f64 {
    0.6
}

impl VerifierConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.high_threshold > 0.0 && self.high_threshold <= 1.0) {
            return Err(format!(
                "high_threshold must be in (0.0, 1.0], got {}",
                self.high_threshold
            ));
        }
        Ok(())
    }
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            high_threshold: default_high_threshold(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = VerifierConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.high_threshold, 0.6);
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        assert!(VerifierConfig { high_threshold: 0.0 }.validate().is_err());
        assert!(VerifierConfig { high_threshold: 1.5 }.validate().is_err());
        assert!(VerifierConfig { high_threshold: f64::NAN }.validate().is_err());
    }
}
