//! movesmith CLI - Move smart-contract assistant
//!
//! This CLI gives developers a terminal interface to:
//! - Generate Move contract skeletons from a plain-language request
//! - Explain core Move concepts
//! - Review Move source with quick heuristic checks
//! - Accumulate a context of modules, structs and functions
//! - Serve the same operations over HTTP

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use movesmith_assistant::Assistant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod interactive;
mod output;

use commands::generate::GenerateArgs;
use config::MovesmithConfig;
use error::CliResult;
use interactive::Session;
use output::{print_error, OutputFormat};

/// movesmith CLI application
#[derive(Parser)]
#[command(name = "movesmith")]
#[command(about = "movesmith - Move smart-contract assistant", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "MOVESMITH_CONFIG", global = true)]
    config: Option<String>,

    /// Output format (text, json, yaml); defaults to the configured format
    #[arg(short, long, global = true)]
    output: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Generate a contract from an instruction
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Explain a Move concept
    Explain {
        /// Concept or question, e.g. "acquires"
        #[arg(required = true, num_args = 1..)]
        concept: Vec<String>,
    },

    /// Review Move source (stdin when no file is given)
    Review {
        /// Source file, or `-` for stdin
        file: Option<PathBuf>,
    },

    /// Extract declarations from files into one context
    Analyze {
        /// Source files, folded in order
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// List available templates
    Templates,

    /// Interactive numbered menu (default)
    Interactive,

    /// Run the web shell
    Serve {
        /// Listen address, overrides server.listen_addr
        #[arg(short, long)]
        listen: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = MovesmithConfig::load(cli.config.as_deref())?;
    init_tracing(&config, cli.verbose, cli.log_json);

    let format = cli.output.unwrap_or(config.output);
    let mut assistant = Assistant::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Generate(args) => commands::generate::execute(&args, &assistant, format, &mut out),
        Commands::Explain { concept } => {
            commands::explain::execute(&concept, &assistant, format, &mut out)
        }
        Commands::Review { file } => {
            let source = commands::read_source(file.as_deref())?;
            commands::review::execute(&source, &assistant, format, &mut out)
        }
        Commands::Analyze { files } => {
            commands::analyze::execute(&files, &mut assistant, format, &mut out)
        }
        Commands::Templates => commands::templates::execute(&assistant, format, &mut out),
        Commands::Interactive => {
            let stdin = io::stdin();
            Session::new(&mut assistant, stdin.lock(), &mut out).run()
        }
        Commands::Serve { listen } => {
            drop(out);
            commands::serve::execute(config.server, listen.as_deref()).await
        }
    }?;

    io::stdout().flush()?;
    Ok(())
}

/// `RUST_LOG` wins; otherwise `--verbose` means debug, else the configured level.
fn init_tracing(config: &MovesmithConfig, verbose: bool, log_json: bool) {
    let level = if verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if log_json || config.logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(io::stderr),
            )
            .init();
    }
}
