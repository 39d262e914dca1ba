//! `movesmith generate`

use std::io::Write;

use clap::Args;
use movesmith_assistant::{Assistant, GenerationParameters, Intent};
use serde::Serialize;

use crate::error::{CliError, CliResult};
use crate::output::{write_structured, OutputFormat};

/// Arguments for `generate`
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Free-form instruction, e.g. "create a token"
    #[arg(required = true, num_args = 1..)]
    pub intent: Vec<String>,

    /// Contract (module) name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Publishing address
    #[arg(short, long)]
    pub address: Option<String>,

    /// Extra template parameter, e.g. initial_balance=500
    #[arg(short, long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,
}

impl GenerateArgs {
    pub fn instruction(&self) -> String {
        self.intent.join(" ")
    }

    /// `--param` pairs first, then `--name` and `--address` on top.
    pub fn parameters(&self) -> GenerationParameters {
        let mut params: GenerationParameters = self.params.iter().cloned().collect();
        if let Some(name) = &self.name {
            params.insert("name", name.clone());
        }
        if let Some(address) = &self.address {
            params.insert("address", address.clone());
        }
        params
    }
}

#[derive(Debug, Serialize)]
struct GenerateOutput {
    intent: Intent,
    code: String,
}

/// Execute `generate`
pub fn execute(
    args: &GenerateArgs,
    assistant: &Assistant,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let instruction = args.instruction();
    let intent = assistant.classify(&instruction);
    let code = assistant.generate_code(&instruction, &args.parameters());

    let result = GenerateOutput { intent, code };
    if !write_structured(out, &result, format)? {
        writeln!(out, "{}", result.code)?;
    }
    Ok(())
}

fn parse_key_val(raw: &str) -> Result<(String, String), CliError> {
    let (key, value) = raw.split_once('=').ok_or_else(|| {
        CliError::InvalidArgument(format!("expected KEY=VALUE, got '{raw}'"))
    })?;
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "empty parameter name in '{raw}'"
        )));
    }
    Ok((key.to_string(), value.to_string()))
}
