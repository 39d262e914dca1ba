//! One-shot subcommands

pub mod analyze;
pub mod explain;
pub mod generate;
pub mod review;
pub mod serve;
pub mod templates;

use std::io::Read;
use std::path::Path;

use crate::error::CliResult;

/// Read `path`, or all of stdin when `path` is `None` or `-`.
pub fn read_source(path: Option<&Path>) -> CliResult<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
