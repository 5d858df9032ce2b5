//! Reliability label module - human-readable score bands

use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable reliability band derived from a trust score
///
/// The bands are fixed, ordered and non-overlapping, and partition the full
/// 0-100 range: [80,100] / [60,79] / [40,59] / [0,39].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReliabilityLabel {
    /// Score in [80, 100]
    #[serde(rename = "HIGHLY RELIABLE")]
    HighlyReliable,

    /// Score in [60, 79]
    #[serde(rename = "MOSTLY RELIABLE")]
    MostlyReliable,

    /// Score in [40, 59]
    #[serde(rename = "QUESTIONABLE")]
    Questionable,

    /// Score in [0, 39]
    #[serde(rename = "UNRELIABLE")]
    Unreliable,
}

impl ReliabilityLabel {
    /// Map a trust score to its band
    ///
    /// Total over the whole `u8` range; scores above 100 never occur in
    /// practice (the scorer clamps) and fall into the top band.
    pub fn for_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => ReliabilityLabel::HighlyReliable,
            60..=79 => ReliabilityLabel::MostlyReliable,
            40..=59 => ReliabilityLabel::Questionable,
            0..=39 => ReliabilityLabel::Unreliable,
        }
    }

    /// Get the label in its wire form
    pub fn as_str(&self) -> &'static str {
        match self {
            ReliabilityLabel::HighlyReliable => "HIGHLY RELIABLE",
            ReliabilityLabel::MostlyReliable => "MOSTLY RELIABLE",
            ReliabilityLabel::Questionable => "QUESTIONABLE",
            ReliabilityLabel::Unreliable => "UNRELIABLE",
        }
    }
}

impl fmt::Display for ReliabilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges() {
        assert_eq!(ReliabilityLabel::for_score(100), ReliabilityLabel::HighlyReliable);
        assert_eq!(ReliabilityLabel::for_score(80), ReliabilityLabel::HighlyReliable);
        assert_eq!(ReliabilityLabel::for_score(79), ReliabilityLabel::MostlyReliable);
        assert_eq!(ReliabilityLabel::for_score(60), ReliabilityLabel::MostlyReliable);
        assert_eq!(ReliabilityLabel::for_score(59), ReliabilityLabel::Questionable);
        assert_eq!(ReliabilityLabel::for_score(40), ReliabilityLabel::Questionable);
        assert_eq!(ReliabilityLabel::for_score(39), ReliabilityLabel::Unreliable);
        assert_eq!(ReliabilityLabel::for_score(0), ReliabilityLabel::Unreliable);
    }

    #[test]
    fn test_wire_form() {
        let json = serde_json::to_string(&ReliabilityLabel::HighlyReliable).unwrap();
        assert_eq!(json, "\"HIGHLY RELIABLE\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every score in [0, 100] maps to exactly one band
        #[test]
        fn test_bands_partition_score_range(score in 0u8..=100) {
            let label = ReliabilityLabel::for_score(score);

            let in_band = match label {
                ReliabilityLabel::HighlyReliable => (80..=100).contains(&score),
                ReliabilityLabel::MostlyReliable => (60..=79).contains(&score),
                ReliabilityLabel::Questionable => (40..=59).contains(&score),
                ReliabilityLabel::Unreliable => (0..=39).contains(&score),
            };
            prop_assert!(in_band, "score {} mapped outside its band", score);
        }

        /// Property: band assignment is monotone in the score
        #[test]
        fn test_bands_are_monotone(a in 0u8..=100, b in 0u8..=100) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

            let rank = |label: ReliabilityLabel| match label {
                ReliabilityLabel::Unreliable => 0,
                ReliabilityLabel::Questionable => 1,
                ReliabilityLabel::MostlyReliable => 2,
                ReliabilityLabel::HighlyReliable => 3,
            };
            prop_assert!(rank(ReliabilityLabel::for_score(lo)) <= rank(ReliabilityLabel::for_score(hi)));
        }
    }
}
