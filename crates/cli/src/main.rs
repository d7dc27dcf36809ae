//! Superset CLI - Command-line administration for Apache Superset.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute Superset security API commands via the shared client library.
//! - Log results as pretty-printed JSON.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Any persistence; every invocation logs in afresh.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Global options (like `--url`) are accepted before or after the subcommand.
//! - Only `main` turns errors into exit codes; commands return `Result`.

mod args;
mod commands;
mod dispatch;
mod error;
mod output;

use std::io::IsTerminal;
use std::time::Duration;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use superset_config::{Config, ConfigLoader};
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Resolve configuration: defaults < env (and `.env`) < command-line flags.
fn build_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .from_env()
        .context("Failed to load configuration from environment")?;

    if let Some(ref url) = cli.url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(ref user) = cli.user {
        loader = loader.with_username(user.clone());
    }
    if let Some(ref pass) = cli.pass {
        loader = loader.with_password(pass.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }

    loader.build().context("Failed to build configuration")
}

fn init_logging() {
    let stdout_is_tty = std::io::stdout().is_terminal();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_writer(std::io::stdout)
                .with_ansi(stdout_is_tty),
        )
        .init();
}

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();
    init_logging();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Error: {:#}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    if config.is_using_default_credentials() {
        warn!("Using default Superset credentials (admin/admin); change them outside local development.");
    }

    let exit_code = match run_command(cli.command, &config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            error!("Error: {:#}", e);
            if let Some(body) = e.client_error().and_then(|c| c.response_body()) {
                error!("Response content: {}", body);
            }
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
