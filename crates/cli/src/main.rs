//! Order Desk CLI - Validate and summarize order documents.
//!
//! # Usage
//!
//! ```bash
//! # Print the one-line summary of an order
//! order-desk summarize order.json
//!
//! # Print the summary and total as JSON
//! order-desk summarize order.json --format json
//!
//! # Check an order document without summarizing it
//! order-desk validate order.json
//! ```
//!
//! # Commands
//!
//! - `summarize` - Validate an order document and print its summary
//! - `validate` - Validate an order document and report the first error

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

mod commands;
mod config;

use commands::CommandError;
use config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "order-desk")]
#[command(author, version, about = "Order Desk CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an order document and print its summary
    Summarize {
        /// Path to the order JSON file
        file: PathBuf,

        /// Output format (overrides `ORDER_DESK_FORMAT`)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Validate an order document and report the first error
    Validate {
        /// Path to the order JSON file
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(config::DEFAULT_LOG_FILTER);
            tracing::error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_filter);

    let mut stdout = io::stdout().lock();
    match run(cli, &config, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Validation(e)) => {
            tracing::error!(kind = %e.kind(), "Invalid order: {e}");
            ExitCode::FAILURE
        }
        Err(e) => {
            tracing::error!("Command failed: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stderr so that stdout carries only command output.
///
/// `RUST_LOG` takes precedence over `ORDER_DESK_LOG`.
fn init_tracing(default_filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: Cli, config: &Config, out: &mut impl Write) -> Result<(), CommandError> {
    match cli.command {
        Commands::Summarize { file, format } => {
            commands::summarize::run(&file, format.unwrap_or(config.format), out)
        }
        Commands::Validate { file } => commands::validate::run(&file, out),
    }
}
