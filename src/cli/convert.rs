//! Offline conversion of a local token file.

use clap::Args;
use std::io;
use std::path::PathBuf;

use crate::cli::common::{CliError, CliResult, CollectionsArgs};
use crate::config::Config;
use crate::parser::parse_token_file;
use crate::services::convert_to_payload;
use crate::transport::write_payload;

/// Convert a local style-dictionary JSON file into a Figma variables payload
#[derive(Debug, Clone, Args)]
pub struct ConvertArgs {
    /// Path to the style-dictionary JSON file
    #[arg(short, long, value_name = "FILE")]
    pub input: PathBuf,

    /// Collection configuration source
    #[command(flatten)]
    pub collections: CollectionsArgs,

    /// Output path for the payload (defaults to the configured output path)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print the payload to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> CliResult<()> {
        let collections = self.collections.load()?;

        let tree = parse_token_file(&self.input).map_err(|e| {
            if e.root_cause().is::<io::Error>() {
                CliError::io(format!("{e:#}"))
            } else {
                CliError::validation(format!("{e:#}"))
            }
        })?;

        let payload = convert_to_payload(&collections, &tree)
            .map_err(|e| CliError::validation(format!("Conversion failed: {e:#}")))?;

        if self.stdout {
            let json = payload
                .to_pretty_json()
                .map_err(|e| CliError::io(format!("Failed to serialize payload: {e}")))?;
            println!("{json}");
            return Ok(());
        }

        let output_path = self.output_path()?;
        write_payload(&payload, &output_path).map_err(|e| CliError::io(format!("{e:#}")))?;

        println!(
            "✓ Wrote {} variable(s) in {} collection(s) to: {}",
            payload.variables.len(),
            payload.variable_collections.len(),
            output_path.display()
        );

        Ok(())
    }

    /// Get the output file path (either user-specified or from config)
    fn output_path(&self) -> CliResult<PathBuf> {
        if let Some(ref path) = self.output {
            return Ok(path.clone());
        }

        let config =
            Config::load().map_err(|e| CliError::validation(format!("Failed to load config: {e:#}")))?;
        Ok(config.output.path)
    }
}
