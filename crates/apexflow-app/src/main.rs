//! ApexFlow assistant - Entry Point
//!
//! `serve` runs the HTTP API; `parse` and `token` answer a single query
//! from the command line.

use anyhow::Result;
use apexflow_app::{AppConfig, Application};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

/// ApexFlow trading assistant
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via APEXFLOW_CONFIG env var)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API server (default)
    Serve,
    /// Parse an automation prompt and print the result as JSON
    Parse {
        /// Natural-language prompt, e.g. "buy $50 of ETH every day"
        prompt: String,
    },
    /// Print token information as JSON
    Token {
        /// Ticker symbol, e.g. WIRE
        symbol: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load diagnostics are logged once the subscriber is up.
    let (config, source) = AppConfig::load(args.config.as_deref())?;

    apexflow_telemetry::init_logging(
        &config.telemetry.log_level,
        config.server.is_production(),
    )?;

    source.log();
    for warning in config.warnings() {
        warn!("{warning}");
    }

    let app = Application::new(config);

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting ApexFlow v{}", env!("CARGO_PKG_VERSION"));
            app.serve().await?;
        }
        Command::Parse { prompt } => println!("{}", app.parse_prompt(&prompt)?),
        Command::Token { symbol } => println!("{}", app.describe_token(&symbol)?),
    }

    Ok(())
}
