//! Output formatting for the CLI.

use crate::cli::CliFormat;
use crate::error::Result;
use attest_domain::{ClaimStatus, KnowledgeEntry, ReliabilityLabel, TrustReport};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (score and label only) format
    Quiet,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => OutputFormat::Table,
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Quiet => OutputFormat::Quiet,
        }
    }
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format a trust report.
    pub fn format_report(&self, report: &TrustReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Quiet => Ok(format!(
                "{} {}",
                report.trust_score, report.reliability_label
            )),
            OutputFormat::Table => self.format_report_table(report),
        }
    }

    /// Format knowledge base entries.
    pub fn format_entries(&self, entries: &[KnowledgeEntry]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(entries)?),
            OutputFormat::Quiet => {
                let keys: Vec<&str> = entries.iter().map(|e| e.key.as_str()).collect();
                Ok(keys.join("\n"))
            }
            OutputFormat::Table => self.format_entries_table(entries),
        }
    }

    /// Format a trust report as tables with a summary header.
    fn format_report_table(&self, report: &TrustReport) -> Result<String> {
        let mut sections = Vec::new();

        let label = self.colorize_label(report.reliability_label);
        sections.push(format!(
            "Trust score: {}/100  {}\nClaims: {} total, {} verified, {} contradicted, {} unverifiable",
            report.trust_score,
            label,
            report.breakdown.total_claims,
            report.breakdown.verified_count,
            report.breakdown.contradicted_count,
            report.breakdown.unverifiable_count,
        ));

        if !report.claims.is_empty() {
            let mut builder = Builder::default();
            builder.push_record(["Claim", "Status", "Reason"]);
            for claim in &report.claims {
                builder.push_record([
                    claim.text.as_str(),
                    &self.colorize_status(claim.status),
                    claim.reason.as_str(),
                ]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            sections.push(table.to_string());
        }

        if report.citation_report.total_citations > 0 {
            let mut builder = Builder::default();
            builder.push_record(["Citation", "Kind", "Valid", "Reason"]);
            for citation in &report.citation_report.citations {
                builder.push_record([
                    citation.raw.as_str(),
                    citation.kind.as_str(),
                    if citation.is_valid { "yes" } else { "no" },
                    citation.reason.as_str(),
                ]);
            }
            let mut table = builder.build();
            table
                .with(Style::rounded())
                .with(Modify::new(Rows::first()).with(Alignment::center()));
            sections.push(format!(
                "Citations: {} total, {} valid\n{}",
                report.citation_report.total_citations,
                report.citation_report.valid_citations,
                table
            ));
        } else {
            sections.push("Citations: none found".to_string());
        }

        Ok(sections.join("\n\n"))
    }

    /// Format knowledge base entries as a table.
    fn format_entries_table(&self, entries: &[KnowledgeEntry]) -> Result<String> {
        if entries.is_empty() {
            return Ok(self.colorize("No knowledge entries loaded.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Key", "Canonical Statement", "Keywords"]);
        for entry in entries {
            builder.push_record([
                entry.key.as_str(),
                entry.canonical_statement.as_str(),
                &entry.keywords.join(", "),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize a claim status.
    fn colorize_status(&self, status: ClaimStatus) -> String {
        let color = match status {
            ClaimStatus::Verified => "green",
            ClaimStatus::Contradicted => "red",
            ClaimStatus::Unverifiable => "yellow",
        };
        self.colorize(status.as_str(), color)
    }

    /// Colorize a reliability label.
    fn colorize_label(&self, label: ReliabilityLabel) -> String {
        let color = match label {
            ReliabilityLabel::HighlyReliable => "green",
            ReliabilityLabel::MostlyReliable => "cyan",
            ReliabilityLabel::Questionable => "yellow",
            ReliabilityLabel::Unreliable => "red",
        };
        self.colorize(label.as_str(), color)
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
