//! Score aggregation

use crate::config::ScoringConfig;
use attest_domain::{Claim, CitationReport, ReliabilityLabel, ScoreBreakdown};
use tracing::debug;

/// Aggregates claim statuses and the citation audit into a trust score
pub struct TrustScorer {
    config: ScoringConfig,
}

impl TrustScorer {
    /// Create a new scorer
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Compute the trust score and its reliability label
    ///
    /// Pure: the same claims and citation report always produce the same
    /// score.
    pub fn score(&self, claims: &[Claim], citations: &CitationReport) -> (u8, ReliabilityLabel) {
        let breakdown = ScoreBreakdown::for_claims(claims);

        // Empty claim list scores neutral-maximal: nothing to contradict.
        let base = if breakdown.total_claims == 0 {
            100.0
        } else {
            100.0 * breakdown.verified_count as f64 / breakdown.total_claims as f64
        };

        let penalty = breakdown.contradicted_count as f64 * self.config.contradiction_penalty;

        // Citation ratio maps [0, 1] onto [-cap, +cap]; no citations is
        // neutral and adjusts nothing.
        let adjustment = match citations.validity_ratio() {
            None => 0.0,
            Some(ratio) => (ratio - 0.5) * 2.0 * self.config.citation_adjustment_cap,
        };

        let raw = (base - penalty + adjustment).clamp(0.0, 100.0);
        let score = raw.round() as u8;

        debug!(
            "Scored {} claims: base {:.1}, penalty {:.1}, citation adjustment {:.1} -> {}",
            breakdown.total_claims, base, penalty, adjustment, score
        );

        (score, ReliabilityLabel::for_score(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_domain::{Citation, CitationKind, ClaimStatus};

    fn scorer() -> TrustScorer {
        TrustScorer::new(ScoringConfig::default())
    }

    fn claim(status: ClaimStatus) -> Claim {
        Claim::new("The Sun is a star.", status, "test reason")
    }

    fn citations(valid: usize, invalid: usize) -> CitationReport {
        let mut all = Vec::new();
        for _ in 0..valid {
            all.push(Citation::new("[1]", CitationKind::Bracketed, true, "ok"));
        }
        for _ in 0..invalid {
            all.push(Citation::new("10.1/x", CitationKind::Doi, false, "malformed DOI"));
        }
        CitationReport::from_citations(all)
    }

    #[test]
    fn test_no_claims_scores_neutral_maximal() {
        let (score, label) = scorer().score(&[], &CitationReport::empty());
        assert_eq!(score, 100);
        assert_eq!(label, ReliabilityLabel::HighlyReliable);
    }

    #[test]
    fn test_all_verified_scores_100() {
        let claims = vec![claim(ClaimStatus::Verified), claim(ClaimStatus::Verified)];
        let (score, label) = scorer().score(&claims, &CitationReport::empty());
        assert_eq!(score, 100);
        assert_eq!(label, ReliabilityLabel::HighlyReliable);
    }

    #[test]
    fn test_contradiction_scores_below_unverifiable() {
        let with_contradiction = vec![claim(ClaimStatus::Verified), claim(ClaimStatus::Contradicted)];
        let with_unverifiable = vec![claim(ClaimStatus::Verified), claim(ClaimStatus::Unverifiable)];

        let (contradicted_score, _) = scorer().score(&with_contradiction, &CitationReport::empty());
        let (unverifiable_score, _) = scorer().score(&with_unverifiable, &CitationReport::empty());

        // Both lose half the base; the contradiction costs an extra penalty.
        assert_eq!(unverifiable_score, 50);
        assert_eq!(contradicted_score, 40);
        assert!(contradicted_score < unverifiable_score);
    }

    #[test]
    fn test_contradiction_strictly_lowers_score() {
        let all_verified = vec![claim(ClaimStatus::Verified), claim(ClaimStatus::Verified)];
        let one_contradicted = vec![claim(ClaimStatus::Verified), claim(ClaimStatus::Contradicted)];

        let (verified_score, _) = scorer().score(&all_verified, &CitationReport::empty());
        let (contradicted_score, _) = scorer().score(&one_contradicted, &CitationReport::empty());
        assert!(contradicted_score < verified_score);
    }

    #[test]
    fn test_score_floors_at_zero() {
        let claims = vec![
            claim(ClaimStatus::Contradicted),
            claim(ClaimStatus::Contradicted),
            claim(ClaimStatus::Contradicted),
        ];
        let (score, label) = scorer().score(&claims, &citations(0, 4));
        assert_eq!(score, 0);
        assert_eq!(label, ReliabilityLabel::Unreliable);
    }

    #[test]
    fn test_valid_citations_raise_score() {
        let claims = vec![claim(ClaimStatus::Verified), claim(ClaimStatus::Unverifiable)];

        let (without, _) = scorer().score(&claims, &CitationReport::empty());
        let (with_valid, _) = scorer().score(&claims, &citations(2, 0));
        assert_eq!(without, 50);
        assert_eq!(with_valid, 60);
    }

    #[test]
    fn test_invalid_citations_lower_score() {
        let claims = vec![claim(ClaimStatus::Verified), claim(ClaimStatus::Unverifiable)];

        let (all_invalid, _) = scorer().score(&claims, &citations(0, 2));
        assert_eq!(all_invalid, 40);
    }

    #[test]
    fn test_citation_adjustment_is_bounded() {
        let claims = vec![claim(ClaimStatus::Verified)];
        let cap = ScoringConfig::default().citation_adjustment_cap;

        for (valid, invalid) in [(1, 0), (0, 1), (3, 1), (1, 3), (5, 5)] {
            let (with_citations, _) = scorer().score(&claims, &citations(valid, invalid));
            let (without, _) = scorer().score(&claims, &CitationReport::empty());
            let delta = (with_citations as f64 - without as f64).abs();
            assert!(delta <= cap, "adjustment {} exceeded cap {}", delta, cap);
        }
    }

    #[test]
    fn test_zero_citations_are_neutral() {
        let claims = vec![claim(ClaimStatus::Verified), claim(ClaimStatus::Contradicted)];
        let (with_empty_report, _) = scorer().score(&claims, &CitationReport::empty());
        let (with_default_report, _) = scorer().score(&claims, &CitationReport::default());
        assert_eq!(with_empty_report, with_default_report);
    }

    #[test]
    fn test_mixed_citations_round_correctly() {
        // 2 of 3 valid: ratio 2/3, adjustment (2/3 - 1/2) * 2 * 10 = 10/3.
        let claims = vec![claim(ClaimStatus::Verified)];
        let (score, _) = scorer().score(&claims, &citations(2, 1));
        assert_eq!(score, 100); // clamped before rounding
    }

    #[test]
    fn test_score_always_in_range() {
        let statuses = [
            ClaimStatus::Verified,
            ClaimStatus::Contradicted,
            ClaimStatus::Unverifiable,
        ];
        for a in statuses {
            for b in statuses {
                for (valid, invalid) in [(0, 0), (2, 0), (0, 2), (1, 1)] {
                    let (score, label) =
                        scorer().score(&[claim(a), claim(b)], &citations(valid, invalid));
                    assert!(score <= 100);
                    assert_eq!(label, ReliabilityLabel::for_score(score));
                }
            }
        }
    }
}
