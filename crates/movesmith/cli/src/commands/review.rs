//! `movesmith review`

use std::io::Write;

use movesmith_assistant::{Assistant, Finding};
use serde::Serialize;

use crate::error::CliResult;
use crate::output::{finding_line, write_structured, OutputFormat};

#[derive(Debug, Serialize)]
struct ReviewOutput {
    findings: Vec<String>,
    details: Vec<Finding>,
}

/// Execute `review` over already-read source
pub fn execute(
    source: &str,
    assistant: &Assistant,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let details = assistant.review_findings(source);
    let result = ReviewOutput {
        findings: details.iter().map(Finding::to_string).collect(),
        details,
    };
    if !write_structured(out, &result, format)? {
        for finding in &result.details {
            writeln!(out, "{}", finding_line(finding))?;
        }
    }
    Ok(())
}
