//! `movesmith templates`

use std::io::Write;

use colored::*;
use movesmith_assistant::Assistant;

use crate::error::CliResult;
use crate::output::{write_structured, OutputFormat};

/// Execute `templates`
pub fn execute(assistant: &Assistant, format: OutputFormat, out: &mut dyn Write) -> CliResult<()> {
    let listing = assistant.catalog().list();
    if !write_structured(out, &listing, format)? {
        for info in &listing {
            writeln!(
                out,
                "{:<18} {:<12} {}",
                info.pattern_id.bold(),
                info.intent.label(),
                info.description
            )?;
            writeln!(out, "{:<18} keys: {}", "", info.keys.join(", ").dimmed())?;
        }
    }
    Ok(())
}
