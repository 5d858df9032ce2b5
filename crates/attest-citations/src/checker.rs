//! Citation scanning and validity auditing

use crate::error::CitationError;
use crate::policy::CitationPolicy;
use attest_domain::{Citation, CitationKind, CitationReport};
use regex::Regex;
use tracing::debug;

/// URLs: http(s) links and bare www hosts
const URL_PATTERN: &str = r#"https?://[^\s<>"'\])]+|www\.[^\s<>"'\])]+"#;

/// Anything DOI-shaped, lax on the registrant so malformed DOIs are still
/// found (and then failed by the strict check)
const DOI_PATTERN: &str = r"\b10\.\d{1,9}/\S+";

/// The well-formed DOI shape: a 4-9 digit registrant
const DOI_STRICT_PATTERN: &str = r"^10\.\d{4,9}/\S+$";

/// Bracketed reference markers such as `[1]`, `[2, 3]`, `[Smith 2023]`
const BRACKET_PATTERN: &str = r"\[[^\]]+\]";

/// Parenthetical author-year citations such as `(Smith, 2023)`,
/// `(Smith et al., 2020)`, `(Smith & Jones 2019a)`
const AUTHOR_YEAR_PATTERN: &str =
    r"\([A-Z][a-z]+(?:\s+(?:and|&)\s+[A-Z][a-z]+)*(?:\s+et\s+al\.?)?(?:,\s*|\s+)\d{4}[a-z]?\)";

/// Scans text for citation-like substrings and audits each one
pub struct CitationChecker {
    policy: CitationPolicy,
    url_re: Regex,
    doi_re: Regex,
    doi_strict_re: Regex,
    bracket_re: Regex,
    author_year_re: Regex,
}

impl CitationChecker {
    /// Create a new checker, compiling the citation patterns once
    pub fn new(policy: CitationPolicy) -> Result<Self, CitationError> {
        policy.validate().map_err(CitationError::Policy)?;
        Ok(Self {
            policy,
            url_re: Regex::new(URL_PATTERN)?,
            doi_re: Regex::new(DOI_PATTERN)?,
            doi_strict_re: Regex::new(DOI_STRICT_PATTERN)?,
            bracket_re: Regex::new(BRACKET_PATTERN)?,
            author_year_re: Regex::new(AUTHOR_YEAR_PATTERN)?,
        })
    }

    /// Scan `text` and audit every citation found, in source order
    ///
    /// No citations is a neutral outcome: the report comes back empty.
    pub fn check(&self, text: &str) -> CitationReport {
        let mut found: Vec<(usize, Citation)> = Vec::new();

        let mut url_spans: Vec<(usize, usize)> = Vec::new();
        for m in self.url_re.find_iter(text) {
            url_spans.push((m.start(), m.end()));
            found.push((m.start(), self.audit_url(m.as_str())));
        }

        for m in self.doi_re.find_iter(text) {
            // A DOI inside a matched URL (doi.org links) is already audited
            let inside_url = url_spans
                .iter()
                .any(|&(start, end)| m.start() >= start && m.start() < end);
            if !inside_url {
                found.push((m.start(), self.audit_doi(m.as_str())));
            }
        }

        for m in self.bracket_re.find_iter(text) {
            let lower = m.as_str().to_lowercase();
            if lower.contains("http") || lower.contains("www") || lower.contains("://") {
                continue;
            }
            found.push((m.start(), self.audit_bracketed(m.as_str())));
        }

        for m in self.author_year_re.find_iter(text) {
            found.push((m.start(), self.audit_author_year(m.as_str())));
        }

        found.sort_by_key(|(position, _)| *position);
        let citations: Vec<Citation> = found.into_iter().map(|(_, citation)| citation).collect();

        debug!("Found {} citations", citations.len());
        CitationReport::from_citations(citations)
    }

    fn audit_url(&self, raw: &str) -> Citation {
        let host = host_of(raw);
        if self.domain_trusted(host) {
            Citation::new(
                raw,
                CitationKind::Url,
                true,
                format!("domain '{}' is in the trusted allowlist", host),
            )
        } else {
            Citation::new(
                raw,
                CitationKind::Url,
                false,
                "domain not in trusted allowlist",
            )
        }
    }

    fn audit_doi(&self, raw: &str) -> Citation {
        if self.doi_strict_re.is_match(raw) {
            Citation::new(raw, CitationKind::Doi, true, "well-formed DOI")
        } else {
            Citation::new(raw, CitationKind::Doi, false, "malformed DOI")
        }
    }

    fn audit_bracketed(&self, raw: &str) -> Citation {
        if self.policy.accept_bracketed {
            Citation::new(raw, CitationKind::Bracketed, true, "reference marker recognized")
        } else {
            Citation::new(
                raw,
                CitationKind::Bracketed,
                false,
                "bracketed references not accepted by policy",
            )
        }
    }

    fn audit_author_year(&self, raw: &str) -> Citation {
        if self.policy.accept_author_year {
            Citation::new(
                raw,
                CitationKind::AuthorYear,
                true,
                "author-year citation format recognized",
            )
        } else {
            Citation::new(
                raw,
                CitationKind::AuthorYear,
                false,
                "author-year citations not accepted by policy",
            )
        }
    }

    /// Whether a host matches the trusted allowlist
    fn domain_trusted(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        self.policy.trusted_domains.iter().any(|entry| {
            let entry = entry.to_lowercase();
            if entry.starts_with('.') {
                host.ends_with(&entry)
            } else {
                host == entry || host.ends_with(&format!(".{}", entry))
            }
        })
    }
}

/// Extract the host part of a URL-ish token
fn host_of(url: &str) -> &str {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    rest.split(['/', '?', '#']).next().unwrap_or(rest)
}
