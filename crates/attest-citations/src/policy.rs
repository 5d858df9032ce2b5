//! Citation validity policy

use serde::{Deserialize, Serialize};

/// Validity policy for citation auditing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationPolicy {
    /// Trusted domains for URL citations
    ///
    /// Entries starting with a dot (`.gov`) match any host with that
    /// suffix; plain entries (`nature.com`) match the host itself and
    /// its subdomains.
    #[serde(default = "default_trusted_domains")]
    pub trusted_domains: Vec<String>,

    /// Accept bracketed reference markers such as `[1]` or `[Smith 2023]`
    #[serde(default = "default_true")]
    pub accept_bracketed: bool,

    /// Accept parenthetical author-year citations such as `(Smith, 2023)`
    #[serde(default = "default_true")]
    pub accept_author_year: bool,
}

fn default_true() -> bool {
    true
}

fn default_trusted_domains() -> Vec<String> {
    [
        "wikipedia.org",
        "nature.com",
        "science.org",
        "arxiv.org",
        "github.com",
        ".gov",
        ".edu",
        "reuters.com",
        "bbc.com",
        "nytimes.com",
        "who.int",
        "cdc.gov",
        "nih.gov",
        "doi.org",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl CitationPolicy {
    /// Create a strict policy: only allowlisted URLs and well-formed DOIs
    /// count as valid, marker-style citations do not
    pub fn strict() -> Self {
        Self {
            trusted_domains: [
                ".gov",
                ".edu",
                "doi.org",
                "arxiv.org",
                "nature.com",
                "science.org",
                "who.int",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            accept_bracketed: false,
            accept_author_year: false,
        }
    }

    /// Validate the policy
    pub fn validate(&self) -> Result<(), String> {
        if self.trusted_domains.iter().any(|d| d.trim().is_empty()) {
            return Err("trusted_domains must not contain empty entries".to_string());
        }
        Ok(())
    }
}

impl Default for CitationPolicy {
    fn default() -> Self {
        Self {
            trusted_domains: default_trusted_domains(),
            accept_bracketed: true,
            accept_author_year: true,
        }
    }
}
