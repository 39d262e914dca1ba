//! Numbered-menu session over any line reader and writer.

use std::io::{BufRead, Write};

use movesmith_assistant::{Assistant, GenerationParameters, Intent};
use movesmith_types::DEFAULT_ADDRESS;
use tracing::debug;

use crate::error::CliResult;
use crate::output::{finding_line, write_snapshot};

/// Line that terminates multi-line code entry.
pub const END_OF_CODE: &str = "END";

const MENU: &str = "
=== movesmith: Move contract assistant ===
1. Generate token contract
2. Generate NFT contract
3. Generate marketplace contract
4. Generate generic module
5. Explain a Move concept
6. Review code
7. Analyze code into context
8. Show context
0. Exit";

/// One interactive session. Generation, explanation and review leave the
/// assistant untouched; option 7 folds code into its context.
pub struct Session<'a, R, W> {
    assistant: &'a mut Assistant,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(assistant: &'a mut Assistant, input: R, output: W) -> Self {
        Self {
            assistant,
            input,
            output,
        }
    }

    /// Run until `0` or end of input.
    pub fn run(&mut self) -> CliResult<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Choice: ")? else {
                break;
            };
            debug!(choice = %choice, "menu selection");

            let keep_going = match choice.as_str() {
                "1" => self.generate(Intent::Token)?,
                "2" => self.generate(Intent::Nft)?,
                "3" => self.generate(Intent::Marketplace)?,
                "4" => self.generate(Intent::Module)?,
                "5" => self.explain()?,
                "6" => self.review()?,
                "7" => self.analyze()?,
                "8" => {
                    write_snapshot(&mut self.output, &self.assistant.context())?;
                    true
                }
                "0" => {
                    writeln!(self.output, "Goodbye!")?;
                    false
                }
                other => {
                    writeln!(
                        self.output,
                        "Invalid choice '{}'. Enter a number from 0 to 8.",
                        other
                    )?;
                    true
                }
            };
            if !keep_going {
                break;
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Returns `false` when input ran out mid-prompt.
    fn generate(&mut self, intent: Intent) -> CliResult<bool> {
        let Some(name) = self.prompt("Contract name (blank for default): ")? else {
            return Ok(false);
        };
        let Some(address) =
            self.prompt(&format!("Address (blank for {}): ", DEFAULT_ADDRESS))?
        else {
            return Ok(false);
        };

        let params = GenerationParameters::new()
            .with_name(name)
            .with_address(address);
        let code = self.assistant.generate_code(intent.label(), &params);
        writeln!(self.output, "\n{}", code)?;
        Ok(true)
    }

    fn explain(&mut self) -> CliResult<bool> {
        let Some(concept) = self.prompt("Concept (abilities, resources, acquires, signer): ")?
        else {
            return Ok(false);
        };
        writeln!(self.output, "\n{}", self.assistant.explain_concept(&concept))?;
        Ok(true)
    }

    fn review(&mut self) -> CliResult<bool> {
        let code = self.read_code()?;
        writeln!(self.output)?;
        for finding in self.assistant.review_findings(&code) {
            writeln!(self.output, "{}", finding_line(&finding))?;
        }
        Ok(true)
    }

    fn analyze(&mut self) -> CliResult<bool> {
        let code = self.read_code()?;
        let added = self.assistant.analyze_code(&code);
        writeln!(self.output, "\nAdded to context: {}", added)?;
        Ok(true)
    }

    /// Print `label` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> CliResult<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Read lines until one reading exactly [`END_OF_CODE`] or end of input.
    fn read_code(&mut self) -> CliResult<String> {
        writeln!(
            self.output,
            "Paste Move code, then a line containing only {}:",
            END_OF_CODE
        )?;
        self.output.flush()?;

        let mut lines = Vec::new();
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let content = line.trim_end_matches(['\n', '\r']);
            if content.trim() == END_OF_CODE {
                break;
            }
            lines.push(content.to_string());
        }
        Ok(lines.join("\n"))
    }
}
