//! Attest CLI - Command-line trust assessment for AI-generated content.

use attest_cli::commands;
use attest_cli::{Cli, Command, Formatter, OutputFormat};
use clap::Parser;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> attest_cli::Result<()> {
    let cli = Cli::parse();

    // Determine output format
    let format = cli.format.map(Into::into).unwrap_or(OutputFormat::Table);

    // Create formatter
    let formatter = Formatter::new(format, !cli.no_color);

    match cli.command {
        Command::Verify(args) => commands::execute_verify(args, &formatter),
        Command::Kb(args) => commands::execute_kb(args, &formatter),
    }
}
