//! Trust report - the pipeline's sole output

use crate::citation::CitationReport;
use crate::claim::{Claim, ClaimStatus};
use crate::label::ReliabilityLabel;
use serde::{Deserialize, Serialize};

/// Per-status claim counts, included in the report for transparency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Total number of claims extracted
    pub total_claims: usize,

    /// Number of verified claims
    pub verified_count: usize,

    /// Number of contradicted claims
    pub contradicted_count: usize,

    /// Number of claims no knowledge entry matched
    pub unverifiable_count: usize,
}

impl ScoreBreakdown {
    /// Count claims by status
    pub fn for_claims(claims: &[Claim]) -> Self {
        let mut breakdown = Self {
            total_claims: claims.len(),
            ..Self::default()
        };
        for claim in claims {
            match claim.status {
                ClaimStatus::Verified => breakdown.verified_count += 1,
                ClaimStatus::Contradicted => breakdown.contradicted_count += 1,
                ClaimStatus::Unverifiable => breakdown.unverifiable_count += 1,
            }
        }
        breakdown
    }
}

/// The structured trust assessment for one input text
///
/// Fully determined by the input text and the knowledge base; running the
/// pipeline twice on identical input yields an identical report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustReport {
    /// Aggregate trust score in [0, 100]
    pub trust_score: u8,

    /// Human-readable band for the score
    pub reliability_label: ReliabilityLabel,

    /// Per-status claim counts (flattened onto the report)
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,

    /// The verified claims in source order
    pub claims: Vec<Claim>,

    /// The citation audit
    pub citation_report: CitationReport,
}
