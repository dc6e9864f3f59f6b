//! Figma Token Sync - push design tokens into Figma variables
//!
//! Converts a style-dictionary token document into a Figma variables payload,
//! writes a debug copy of it, and optionally uploads it to a Figma file.
//!
//! # Usage
//!
//! ```bash
//! # Convert a local file
//! figma-token-sync convert --input tokens.json --collections-file collections.json
//!
//! # Fetch, convert, and upload
//! FIGMA_TOKEN=... figma-token-sync sync \
//!     --style-dictionary-url https://example.com/tokens.json \
//!     --collections-file collections.json --figma-file AbC123
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use figma_token_sync::cli::{ConfigArgs, ConvertArgs, SyncArgs};
use figma_token_sync::constants::APP_BINARY_NAME;

/// Figma Token Sync - push design tokens into Figma variables
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a local token file into a payload
    Convert(ConvertArgs),
    /// Fetch tokens, convert them, and upload to Figma
    Sync(SyncArgs),
    /// Show or change the configuration file
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    // Initialize tracing (stderr keeps stdout parseable)
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Commands::Convert(args) => args.execute(),
        Commands::Sync(args) => args.execute().await,
        Commands::Config(args) => args.execute(),
    };

    match result {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            err.code.into()
        }
    }
}
