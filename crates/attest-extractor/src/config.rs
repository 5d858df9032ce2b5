//! Configuration for the claim extractor

use serde::{Deserialize, Serialize};

/// Configuration for the claim extractor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Minimum claim length in characters; shorter units are dropped
    #[serde(default = "default_min_claim_chars")]
    pub min_claim_chars: usize,

    /// Lower-case markers that flag a unit as subjective, not factual
    #[serde(default = "default_subjective_markers")]
    pub subjective_markers: Vec<String>,
}

fn default_min_claim_chars() -> usize {
    10
}

fn default_subjective_markers() -> Vec<String> {
    ["i think", "i believe", "in my opinion", "maybe", "perhaps"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl ExtractorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.subjective_markers.iter().any(|m| m.trim().is_empty()) {
            return Err("subjective_markers must not contain empty entries".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            min_claim_chars: default_min_claim_chars(),
            subjective_markers: default_subjective_markers(),
        }
    }
}
