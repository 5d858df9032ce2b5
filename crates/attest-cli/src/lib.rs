//! Attest CLI library.
//!
//! Command-line front end for the verification pipeline: feed it text
//! from an argument, a file or stdin and get the trust report as a
//! table, JSON, or a one-line summary.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, CliFormat, Command};
pub use error::{CliError, Result};
pub use output::{Formatter, OutputFormat};
