//! `movesmith analyze`

use std::io::Write;
use std::path::PathBuf;

use movesmith_assistant::{Assistant, ContextSnapshot, ExtractionSummary};
use serde::Serialize;

use crate::commands::read_source;
use crate::error::CliResult;
use crate::output::{write_snapshot, write_structured, OutputFormat};

#[derive(Debug, Serialize)]
struct FileSummary {
    path: String,
    added: ExtractionSummary,
}

#[derive(Debug, Serialize)]
struct AnalyzeOutput {
    files: Vec<FileSummary>,
    total: ExtractionSummary,
    context: ContextSnapshot,
}

/// Execute `analyze`: fold every file, in order, into one context
pub fn execute(
    files: &[PathBuf],
    assistant: &mut Assistant,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let mut summaries = Vec::with_capacity(files.len());
    let mut total = ExtractionSummary::default();
    for path in files {
        let source = read_source(Some(path))?;
        let added = assistant.analyze_code(&source);
        total += added;
        summaries.push(FileSummary {
            path: path.display().to_string(),
            added,
        });
    }

    let result = AnalyzeOutput {
        files: summaries,
        total,
        context: assistant.context(),
    };
    if !write_structured(out, &result, format)? {
        for file in &result.files {
            writeln!(out, "{}: {}", file.path, file.added)?;
        }
        writeln!(out, "total: {}", result.total)?;
        writeln!(out)?;
        write_snapshot(out, &result.context)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    fn write_temp(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("movesmith-{}-{}.move", name, std::process::id()));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn analyze_folds_files_in_order() {
        let a = write_temp("analyze-a", "module 0x1::A { fun shared() {} }");
        let b = write_temp("analyze-b", "module 0x1::B { fun shared() {} fun only_b() {} }");

        let mut assistant = Assistant::new();
        let mut out = Vec::new();
        execute(&[a.clone(), b.clone()], &mut assistant, OutputFormat::Text, &mut out).unwrap();
        std::fs::remove_file(&a).ok();
        std::fs::remove_file(&b).ok();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("+1 modules, +0 structs, +1 functions"));
        assert_eq!(assistant.context().modules, vec!["0x1::A", "0x1::B"]);
        assert_eq!(assistant.context().functions, vec!["shared", "only_b"]);
        assert!(text.contains("total: +2 modules, +0 structs, +2 functions"));
    }

    #[test]
    fn analyze_json_reports_grand_total() {
        let a = write_temp("total-a", "struct P {} fun one() {}");
        let b = write_temp("total-b", "struct P {} struct Q {} fun two() {}");

        let mut assistant = Assistant::new();
        let mut out = Vec::new();
        execute(&[a.clone(), b.clone()], &mut assistant, OutputFormat::Json, &mut out).unwrap();
        std::fs::remove_file(&a).ok();
        std::fs::remove_file(&b).ok();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["total"]["structs_added"], 2);
        assert_eq!(json["total"]["functions_added"], 2);
        assert_eq!(json["files"][1]["added"]["structs_added"], 1);
    }

    #[test]
    fn analyze_missing_file_is_io_error() {
        let mut assistant = Assistant::new();
        let err = execute(
            &[PathBuf::from("/nonexistent/x.move")],
            &mut assistant,
            OutputFormat::Json,
            &mut Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }
}
