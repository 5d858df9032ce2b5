//! Claim verification against the knowledge base

use crate::config::VerifierConfig;
use crate::knowledge::KnowledgeBase;
use attest_domain::{Claim, ClaimStatus, KnowledgeEntry};
use tracing::debug;

/// Reason attached to every verified claim
const VERIFIED_REASON: &str = "Claim matches known facts in knowledge base";

/// Reason attached to every unverifiable claim
const UNVERIFIABLE_REASON: &str = "No matching entry in knowledge base";

/// Verifies claim strings against an immutable knowledge base
///
/// The knowledge base is injected at construction and only ever read.
/// Verification is total: an unmatched claim is a normal `UNVERIFIABLE`
/// outcome, never an error.
pub struct ClaimVerifier {
    kb: KnowledgeBase,
    config: VerifierConfig,
}

impl ClaimVerifier {
    /// Create a new verifier over the given knowledge base
    pub fn new(kb: KnowledgeBase, config: VerifierConfig) -> Self {
        Self { kb, config }
    }

    /// The knowledge base this verifier reads
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Verify one claim string, producing a [`Claim`] with status and reason
    ///
    /// The entry with the highest keyword overlap wins; ties break on the
    /// lexicographically smallest key so results are stable across runs.
    pub fn verify(&self, claim_text: &str) -> Claim {
        let claim_lower = claim_text.to_lowercase();

        let mut best: Option<(f64, &KnowledgeEntry)> = None;
        for entry in self.kb.entries() {
            let overlap = keyword_overlap(&claim_lower, &entry.keywords);
            let better = match best {
                None => true,
                Some((best_overlap, best_entry)) => {
                    overlap > best_overlap
                        || (overlap == best_overlap && entry.key < best_entry.key)
                }
            };
            if better {
                best = Some((overlap, entry));
            }
        }

        match best {
            Some((overlap, entry)) if overlap >= self.config.high_threshold => {
                debug!(
                    "Claim matched entry '{}' with overlap {:.2}",
                    entry.key, overlap
                );
                match numeric_conflict(&claim_lower, &entry.canonical_statement) {
                    Some(value) => Claim::new(
                        claim_text,
                        ClaimStatus::Contradicted,
                        format!(
                            "Claim value {} conflicts with known fact: '{}'",
                            value, entry.canonical_statement
                        ),
                    ),
                    None => Claim::new(claim_text, ClaimStatus::Verified, VERIFIED_REASON),
                }
            }
            _ => Claim::new(claim_text, ClaimStatus::Unverifiable, UNVERIFIABLE_REASON),
        }
    }
}

/// Fraction of the entry's keywords present in the claim text
fn keyword_overlap(claim_lower: &str, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let matched = keywords
        .iter()
        .filter(|keyword| claim_lower.contains(keyword.to_lowercase().as_str()))
        .count();
    matched as f64 / keywords.len() as f64
}

/// First numeric token in the claim that is absent from the canonical
/// statement, when both sides carry numeric tokens
///
/// Bracketed and parenthesized spans in the claim (citation markers,
/// asides) are not asserted values and are excluded from the comparison.
fn numeric_conflict(claim_lower: &str, canonical_statement: &str) -> Option<String> {
    let claim_numbers = numeric_tokens(&strip_asides(claim_lower));
    let canonical_numbers = numeric_tokens(canonical_statement);
    if claim_numbers.is_empty() || canonical_numbers.is_empty() {
        return None;
    }
    claim_numbers
        .into_iter()
        .find(|token| !canonical_numbers.contains(token))
}

/// Remove bracketed and parenthesized spans
fn strip_asides(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut paren_depth = 0usize;
    let mut bracket_depth = 0usize;
    for c in text.chars() {
        match c {
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            _ if paren_depth == 0 && bracket_depth == 0 => out.push(c),
            _ => {}
        }
    }
    out
}

/// Numeric tokens of a text: integers and decimals, thousands separators
/// stripped
fn numeric_tokens(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c.is_ascii_digit() {
            current.push(c);
        } else if (c == '.' || c == ',')
            && !current.is_empty()
            && chars.peek().is_some_and(|next| next.is_ascii_digit())
        {
            // Decimal points survive; commas are thousands separators
            if c == '.' {
                current.push('.');
            }
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> ClaimVerifier {
        ClaimVerifier::new(KnowledgeBase::builtin(), VerifierConfig::default())
    }

    fn fixture_kb(entries: &[(&str, &str, &[&str])]) -> KnowledgeBase {
        KnowledgeBase::new(
            entries
                .iter()
                .map(|(key, statement, keywords)| {
                    attest_domain::KnowledgeEntry::new(
                        *key,
                        *statement,
                        keywords.iter().map(|k| k.to_string()).collect(),
                    )
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_matching_claim_is_verified() {
        let claim = verifier().verify("The Eiffel Tower is 330 meters tall.");
        assert_eq!(claim.status, ClaimStatus::Verified);
        assert_eq!(claim.reason, VERIFIED_REASON);
    }

    #[test]
    fn test_conflicting_number_is_contradicted() {
        let claim = verifier().verify("The Eiffel Tower is 50 meters tall.");
        assert_eq!(claim.status, ClaimStatus::Contradicted);
        assert!(claim.reason.contains("50"));
        assert!(claim.reason.contains("330"));
    }

    #[test]
    fn test_unmatched_claim_is_unverifiable() {
        let claim = verifier().verify("Quartz crystals sing in the rain.");
        assert_eq!(claim.status, ClaimStatus::Unverifiable);
        assert_eq!(claim.reason, UNVERIFIABLE_REASON);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let claim = verifier().verify("GRAVITY pulls OBJECTS toward each other.");
        assert_eq!(claim.status, ClaimStatus::Verified);
    }

    #[test]
    fn test_year_claim_verified_and_contradicted() {
        let verified = verifier().verify("Python was created in 1991.");
        assert_eq!(verified.status, ClaimStatus::Verified);

        let contradicted = verifier().verify("Python was created in 1990.");
        assert_eq!(contradicted.status, ClaimStatus::Contradicted);
        assert!(contradicted.reason.contains("1990"));
    }

    #[test]
    fn test_best_overlap_wins() {
        // "The Moon orbits Earth" touches the earth entry too, but the
        // moon entry matches completely.
        let kb = KnowledgeBase::builtin();
        let verifier = ClaimVerifier::new(kb, VerifierConfig::default());
        let claim = verifier.verify("The Moon orbits Earth.");
        assert_eq!(claim.status, ClaimStatus::Verified);
    }

    #[test]
    fn test_tie_breaks_on_lowest_key() {
        let kb = fixture_kb(&[
            ("zeta", "The widget weighs 900 grams", &["widget", "grams"]),
            ("alpha", "The widget weighs 5 grams", &["widget", "grams"]),
        ]);
        let verifier = ClaimVerifier::new(kb, VerifierConfig::default());

        // Both entries overlap fully; the contradiction reason must quote
        // the alpha entry's statement because "alpha" < "zeta".
        let claim = verifier.verify("The widget weighs 7 grams.");
        assert_eq!(claim.status, ClaimStatus::Contradicted);
        assert!(claim.reason.contains("weighs 5 grams"));
    }

    #[test]
    fn test_threshold_boundary() {
        let kb = fixture_kb(&[(
            "fixture",
            "The fixture holds 3 bolts",
            &["fixture", "holds", "bolts", "steel", "frame"],
        )]);
        let verifier = ClaimVerifier::new(kb, VerifierConfig::default());

        // 3 of 5 keywords = 0.6, exactly at the threshold: a match.
        let at = verifier.verify("The fixture holds 3 bolts.");
        assert_eq!(at.status, ClaimStatus::Verified);

        // 2 of 5 keywords = 0.4: below the threshold.
        let below = verifier.verify("The fixture holds nothing.");
        assert_eq!(below.status, ClaimStatus::Unverifiable);
    }

    #[test]
    fn test_claim_without_numbers_cannot_contradict() {
        let claim = verifier().verify("The Eiffel Tower is a tall tower.");
        assert_eq!(claim.status, ClaimStatus::Verified);
    }

    #[test]
    fn test_numeric_tokens() {
        assert_eq!(numeric_tokens("330 meters in 1889"), vec!["330", "1889"]);
        assert_eq!(numeric_tokens("about 3.14 units"), vec!["3.14"]);
        assert_eq!(numeric_tokens("1,234 visitors"), vec!["1234"]);
        assert!(numeric_tokens("no numbers here").is_empty());
    }

    #[test]
    fn test_numeric_conflict_requires_both_sides() {
        assert!(numeric_conflict("it is 50 meters", "it is quite tall").is_none());
        assert!(numeric_conflict("it is tall", "it is 330 meters tall").is_none());
        assert_eq!(
            numeric_conflict("it is 50 meters", "it is 330 meters tall"),
            Some("50".to_string())
        );
        assert!(numeric_conflict("built in 1889", "completed in 1889").is_none());
    }

    #[test]
    fn test_citation_markers_do_not_poison_numbers() {
        let with_marker = verifier().verify("The Eiffel Tower is 330 meters tall [1].");
        assert_eq!(with_marker.status, ClaimStatus::Verified);

        let with_author_year = verifier().verify("The Eiffel Tower is 330 meters tall (Dupont, 2019).");
        assert_eq!(with_author_year.status, ClaimStatus::Verified);
    }

    #[test]
    fn test_strip_asides() {
        assert_eq!(strip_asides("tall [1] and (Smith, 2023) wide"), "tall  and  wide");
        assert_eq!(strip_asides("no asides here"), "no asides here");
    }

    #[test]
    fn test_verification_is_deterministic() {
        let a = verifier().verify("The Sun is a star.");
        let b = verifier().verify("The Sun is a star.");
        assert_eq!(a, b);
    }
}
