//! CLI configuration

use movesmith_server::ServerConfig;
use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;

/// Environment variable prefix; nested keys use `__`, e.g.
/// `MOVESMITH_SERVER__LISTEN_ADDR`.
pub const ENV_PREFIX: &str = "MOVESMITH";

/// Main CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovesmithConfig {
    /// Default output format
    #[serde(default)]
    pub output: OutputFormat,

    /// Web shell configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl MovesmithConfig {
    /// Load configuration: defaults, then the optional file, then environment.
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        Self::build(path).map_err(|e| CliError::Config(e.to_string()))
    }

    fn build(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(config::Config::try_from(&MovesmithConfig::default())?);

        // Add file configuration if provided
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Add environment variables with MOVESMITH_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
