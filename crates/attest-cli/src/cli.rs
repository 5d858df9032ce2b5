//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Attest CLI - Trust assessment for AI-generated content.
#[derive(Debug, Parser)]
#[command(name = "attest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (score and label only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Verify a block of text and print its trust report
    Verify(VerifyArgs),

    /// List the entries of the knowledge base
    Kb(KbArgs),
}

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// The text to verify; reads stdin when neither this nor --file is given
    pub text: Option<String>,

    /// Read the text to verify from a file
    #[arg(short = 'i', long)]
    pub file: Option<PathBuf>,

    /// Knowledge base TOML file (built-in knowledge base when omitted)
    #[arg(short, long)]
    pub kb: Option<PathBuf>,

    /// Pipeline configuration TOML file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the kb command.
#[derive(Debug, Parser)]
pub struct KbArgs {
    /// Knowledge base TOML file (built-in knowledge base when omitted)
    #[arg(short, long)]
    pub kb: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_verify_with_text() {
        let cli = Cli::try_parse_from(["attest", "verify", "Earth is round."]).unwrap();
        match cli.command {
            Command::Verify(args) => {
                assert_eq!(args.text.as_deref(), Some("Earth is round."));
                assert!(args.file.is_none());
            }
            _ => panic!("Expected verify command"),
        }
    }

    #[test]
    fn test_parse_verify_with_file_and_format() {
        let cli =
            Cli::try_parse_from(["attest", "--format", "json", "verify", "--file", "in.txt"])
                .unwrap();
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Verify(args) => {
                assert_eq!(args.file.as_deref(), Some(std::path::Path::new("in.txt")));
            }
            _ => panic!("Expected verify command"),
        }
    }

    #[test]
    fn test_parse_kb_command() {
        let cli = Cli::try_parse_from(["attest", "kb", "--kb", "facts.toml"]).unwrap();
        match cli.command {
            Command::Kb(args) => {
                assert!(args.kb.is_some());
            }
            _ => panic!("Expected kb command"),
        }
    }
}
