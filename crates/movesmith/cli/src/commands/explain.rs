//! `movesmith explain`

use std::io::Write;

use movesmith_assistant::Assistant;
use serde::Serialize;

use crate::error::CliResult;
use crate::output::{write_structured, OutputFormat};

#[derive(Debug, Serialize)]
struct ExplainOutput<'a> {
    concept: &'a str,
    explanation: &'a str,
}

/// Execute `explain`
pub fn execute(
    concept: &[String],
    assistant: &Assistant,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let concept = concept.join(" ");
    let explanation = assistant.explain_concept(&concept);
    let result = ExplainOutput {
        concept: &concept,
        explanation,
    };
    if !write_structured(out, &result, format)? {
        writeln!(out, "{}", explanation)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use movesmith_assistant::CONCEPT_NOT_FOUND;

    #[test]
    fn explain_joins_words() {
        let mut out = Vec::new();
        let words = vec!["what".to_string(), "is".to_string(), "a".to_string(), "Signer".to_string()];
        execute(&words, &Assistant::new(), OutputFormat::Text, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("signer::address_of"));
    }

    #[test]
    fn explain_unknown_in_yaml() {
        let mut out = Vec::new();
        execute(&["banana".to_string()], &Assistant::new(), OutputFormat::Yaml, &mut out).unwrap();
        let yaml = String::from_utf8(out).unwrap();
        assert!(yaml.contains("concept: banana"));
        assert!(yaml.contains(CONCEPT_NOT_FOUND));
    }
}
