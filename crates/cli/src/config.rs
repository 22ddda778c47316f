//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ORDER_DESK_LOG` - Log filter directive (default: `warn`); `RUST_LOG` wins if set
//! - `ORDER_DESK_FORMAT` - Default output format, `text` or `json` (default: `text`)

use std::str::FromStr;

use thiserror::Error;

/// Log filter used when neither `RUST_LOG` nor `ORDER_DESK_LOG` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// How command output is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One summary line.
    #[default]
    Text,
    /// A JSON object with the order ID, summary and total.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("expected `text` or `json`, got `{s}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive
    pub log_filter: String,
    /// Output format used when `--format` is not given
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let log_filter = lookup("ORDER_DESK_LOG")
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let format = match lookup("ORDER_DESK_FORMAT") {
            Some(value) => value.parse::<OutputFormat>().map_err(|e| {
                ConfigError::InvalidEnvVar("ORDER_DESK_FORMAT".to_string(), e)
            })?,
            None => OutputFormat::default(),
        };

        Ok(Self { log_filter, format })
    }
}
