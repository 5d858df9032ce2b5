//! Sentence splitting and claim filtering

use crate::config::ExtractorConfig;
use tracing::debug;

/// Extracts factual-claim strings from raw text
///
/// Pure and deterministic: identical input always yields identical output,
/// and extraction itself cannot fail.
pub struct ClaimExtractor {
    config: ExtractorConfig,
    markers: Vec<String>,
}

impl ClaimExtractor {
    /// Create a new extractor
    pub fn new(config: ExtractorConfig) -> Self {
        let markers = config
            .subjective_markers
            .iter()
            .map(|m| m.to_lowercase())
            .collect();
        Self { config, markers }
    }

    /// Extract claim strings from `text`, preserving source order
    ///
    /// Units ending in `?` and units carrying subjective markers are not
    /// verifiable assertions and are dropped. Text with no sentence
    /// boundary at all is treated as a single whole-text claim rather
    /// than an error.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let mut claims = Vec::new();
        for unit in split_sentences(trimmed) {
            let unit = tidy(&unit);
            if self.keeps(&unit) && unit.chars().count() >= self.config.min_claim_chars {
                claims.push(unit);
            }
        }

        // No boundary found anywhere: the whole text is one claim, the
        // length filter does not apply.
        if claims.is_empty() && !trimmed.contains(['.', '!', '?']) {
            let whole = tidy(&collapse_whitespace(trimmed));
            if self.keeps(&whole) {
                claims.push(whole);
            }
        }

        debug!("Extracted {} claims from {} chars", claims.len(), text.len());
        claims
    }

    /// Whether a tidied unit survives the interrogative/subjective filters
    fn keeps(&self, unit: &str) -> bool {
        if unit.is_empty() || unit.ends_with('?') {
            return false;
        }
        let lower = unit.to_lowercase();
        !self.markers.iter().any(|m| lower.contains(m.as_str()))
    }
}

/// Split text into sentence-like units at terminal punctuation
///
/// The terminator stays with its unit. A stop only ends a unit when
/// followed by whitespace or end of text, so decimals like `3.14` survive.
fn split_sentences(text: &str) -> Vec<String> {
    let mut units = Vec::new();
    let mut current = String::new();
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?') {
            let at_break = chars.peek().map_or(true, |next| next.is_whitespace());
            if at_break {
                let unit = collapse_whitespace(&current);
                if !unit.is_empty() {
                    units.push(unit);
                }
                current.clear();
            }
        }
    }

    let tail = collapse_whitespace(&current);
    if !tail.is_empty() {
        units.push(tail);
    }

    units
}

/// Collapse runs of whitespace into single spaces
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip extraction artifacts: leading punctuation and doubled-up stops
fn tidy(unit: &str) -> String {
    let stripped = unit
        .trim()
        .trim_start_matches(|c: char| matches!(c, '.' | '!' | '?' | ',' | ';' | ':'))
        .trim_start();

    let mut out = stripped.to_string();
    while out.len() >= 2 {
        let bytes = out.as_bytes();
        let last_two_are_stops = matches!(bytes[out.len() - 1], b'.' | b'!' | b'?')
            && matches!(bytes[out.len() - 2], b'.' | b'!' | b'?');
        if !last_two_are_stops {
            break;
        }
        out.pop();
    }
    out
}
