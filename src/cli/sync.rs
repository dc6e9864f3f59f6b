//! Fetch, convert, and upload in one go.

use clap::Args;
use std::path::PathBuf;
use tracing::info;

use crate::cli::common::{CliError, CliResult, CollectionsArgs};
use crate::config::Config;
use crate::services::convert_to_payload;
use crate::transport::{write_payload, FigmaClient};

/// Fetch a remote style dictionary, convert it, and push it to a Figma file
#[derive(Debug, Clone, Args)]
pub struct SyncArgs {
    /// URL of the style-dictionary JSON document
    #[arg(long, value_name = "URL")]
    pub style_dictionary_url: String,

    /// Collection configuration source
    #[command(flatten)]
    pub collections: CollectionsArgs,

    /// Figma file key to upload to (upload is skipped without it)
    #[arg(long, value_name = "ID", env = "FIGMA_FILE")]
    pub figma_file: Option<String>,

    /// Figma personal access token (upload is skipped without it)
    #[arg(long, value_name = "TOKEN", env = "FIGMA_TOKEN", hide_env_values = true)]
    pub figma_token: Option<String>,

    /// Output path for the debug payload (defaults to the configured output path)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Figma API host (defaults to the configured base URL)
    #[arg(long, value_name = "URL")]
    pub api_base: Option<String>,
}

impl SyncArgs {
    /// Execute the sync command
    pub async fn execute(&self) -> CliResult<()> {
        let config =
            Config::load().map_err(|e| CliError::validation(format!("Failed to load config: {e:#}")))?;
        let collections = self.collections.load()?;

        let base_url = self.api_base.clone().unwrap_or(config.api.base_url);
        let client = FigmaClient::with_base_url(base_url)
            .map_err(|e| CliError::network(format!("{e:#}")))?;

        let tree = client
            .fetch_token_tree(&self.style_dictionary_url)
            .await
            .map_err(|e| CliError::network(format!("{e:#}")))?;

        let payload = convert_to_payload(&collections, &tree)
            .map_err(|e| CliError::validation(format!("Conversion failed: {e:#}")))?;

        let output_path = self.output.clone().unwrap_or(config.output.path);
        write_payload(&payload, &output_path).map_err(|e| CliError::io(format!("{e:#}")))?;

        let Some((file_id, token)) = self.credentials() else {
            info!("No Figma file and token given, skipping upload");
            return Ok(());
        };

        let response = client
            .post_variables(&payload, token, file_id)
            .await
            .map_err(|e| CliError::network(format!("{e:#}")))?;

        let rendered = serde_json::to_string_pretty(&response)
            .map_err(|e| CliError::io(format!("Failed to serialize response: {e}")))?;
        println!("{rendered}");

        Ok(())
    }

    /// Returns true if both upload credentials are present.
    #[must_use]
    pub fn will_upload(&self) -> bool {
        self.credentials().is_some()
    }

    /// File id and token, if both are non-empty.
    fn credentials(&self) -> Option<(&str, &str)> {
        let file_id = self.figma_file.as_deref().filter(|f| !f.is_empty());
        let token = self.figma_token.as_deref().filter(|t| !t.is_empty());
        file_id.zip(token)
    }
}
