//! The kb command: list the loaded knowledge base entries.

use crate::cli::KbArgs;
use crate::commands::load_knowledge_base;
use crate::error::Result;
use crate::output::Formatter;

/// Execute the kb command.
pub fn execute_kb(args: KbArgs, formatter: &Formatter) -> Result<()> {
    let kb = load_knowledge_base(args.kb.as_deref())?;
    println!("{}", formatter.format_entries(kb.entries())?);
    Ok(())
}
