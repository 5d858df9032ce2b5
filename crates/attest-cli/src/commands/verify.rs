//! The verify command: run the pipeline on text and print the report.

use crate::cli::VerifyArgs;
use crate::commands::load_knowledge_base;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use attest_pipeline::{PipelineConfig, TrustPipeline};
use std::fs;
use std::io::Read;

/// Execute the verify command.
pub fn execute_verify(args: VerifyArgs, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args)?;
    if text.trim().is_empty() {
        return Err(CliError::InvalidInput(
            "no text to verify; pass it as an argument, via --file, or on stdin".to_string(),
        ));
    }

    let kb = load_knowledge_base(args.kb.as_deref())?;
    let config = match &args.config {
        Some(path) => {
            let contents = fs::read_to_string(path)?;
            PipelineConfig::from_toml_str(&contents).map_err(CliError::Config)?
        }
        None => PipelineConfig::default(),
    };

    let pipeline = TrustPipeline::new(kb, config)?;
    let report = pipeline.run(&text);

    println!("{}", formatter.format_report(&report)?);
    Ok(())
}

/// Resolve the input text: argument, file, or stdin, in that order.
fn read_input(args: &VerifyArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }
    if let Some(path) = &args.file {
        return Ok(fs::read_to_string(path)?);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn args(text: Option<&str>, file: Option<PathBuf>) -> VerifyArgs {
        VerifyArgs {
            text: text.map(String::from),
            file,
            kb: None,
            config: None,
        }
    }

    #[test]
    fn test_read_input_prefers_argument() {
        let resolved = read_input(&args(Some("Earth is round."), None)).unwrap();
        assert_eq!(resolved, "Earth is round.");
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "The Moon orbits Earth.").unwrap();

        let resolved = read_input(&args(None, Some(file.path().to_path_buf()))).unwrap();
        assert_eq!(resolved, "The Moon orbits Earth.");
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input(&args(None, Some(PathBuf::from("/nonexistent/input.txt"))));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
