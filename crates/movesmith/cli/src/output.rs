//! Output formatting utilities

use std::io::Write;

use colored::*;
use movesmith_types::{ContextSnapshot, Finding, Severity};
use serde::{Deserialize, Serialize};

use crate::error::CliResult;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, generated code and findings verbatim
    #[default]
    Text,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
}

/// Write `data` as JSON or YAML. Returns `false` for [`OutputFormat::Text`]
/// so the caller renders its own text form.
pub fn write_structured<T: Serialize>(
    out: &mut dyn Write,
    data: &T,
    format: OutputFormat,
) -> CliResult<bool> {
    match format {
        OutputFormat::Text => Ok(false),
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(data)?)?;
            Ok(true)
        }
        OutputFormat::Yaml => {
            write!(out, "{}", serde_yaml::to_string(data)?)?;
            Ok(true)
        }
    }
}

/// A finding line coloured by severity.
pub fn finding_line(finding: &Finding) -> ColoredString {
    let line = finding.to_string();
    match finding.severity {
        Severity::Warning => line.yellow(),
        Severity::Suggestion => line.cyan(),
        Severity::Confirmation => line.green(),
    }
}

/// Write the three context lists, one heading each.
pub fn write_snapshot(out: &mut dyn Write, snapshot: &ContextSnapshot) -> CliResult<()> {
    if snapshot.is_empty() {
        writeln!(out, "{}", "Context is empty".dimmed())?;
        return Ok(());
    }
    for (heading, entries) in [
        ("Modules", &snapshot.modules),
        ("Structs", &snapshot.structs),
        ("Functions", &snapshot.functions),
    ] {
        writeln!(out, "{} ({})", heading.bold(), entries.len())?;
        for entry in entries {
            writeln!(out, "  {}", entry)?;
        }
    }
    Ok(())
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}
