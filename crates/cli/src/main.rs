//! Dealer Portal CLI - sample data and scripted sessions.
//!
//! # Usage
//!
//! ```bash
//! # Print the sample retailers, staff and visits as JSON
//! dp-cli sample
//!
//! # Replay a YAML script of user actions and print the final session
//! dp-cli run demos/schedule-visit.yaml
//!
//! # Stop at the first rejected action
//! dp-cli run demos/schedule-visit.yaml --fail-fast
//! ```
//!
//! # Commands
//!
//! - `sample` - Print the sample data
//! - `run` - Replay a script against a fresh in-memory session
//!
//! # Environment Variables
//!
//! - `RUST_LOG` - Log filter (default `dealer_portal_admin=info,dealer_portal_cli=info`)
//! - `PORTAL_LOG_JSON` - Emit logs as JSON when set
//! - `PORTAL_*` - Portal settings, see `PortalConfig`
//!
//! Logs go to stderr; stdout carries only the JSON output.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "dp-cli")]
#[command(author, version, about = "Dealer portal CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the sample data as JSON
    Sample,
    /// Replay a YAML script of user actions
    Run {
        /// Path to the script
        file: PathBuf,

        /// Abort on the first rejected action instead of skipping it
        #[arg(long)]
        fail_fast: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load .env before reading logging settings
    let _ = dotenvy::dotenv();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "dealer_portal_admin=info,dealer_portal_cli=info".into());

    let json_logs = std::env::var("PORTAL_LOG_JSON").is_ok();
    let json_layer = json_logs.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer =
        (!json_logs).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Sample => commands::sample::print()?,
        Commands::Run { file, fail_fast } => commands::run::run(&file, fail_fast).await?,
    }
    Ok(())
}
