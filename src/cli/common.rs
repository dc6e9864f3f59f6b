//! Shared CLI types: error reporting, exit codes, and collection arguments.

use clap::Args;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::models::CollectionConfig;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid input: bad arguments, collection JSON, token JSON, or config
    ValidationError = 1,
    /// Local file could not be read or written
    IoError = 2,
    /// Fetch or upload failed
    NetworkError = 3,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}

/// Error returned by command handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to report
    pub code: ExitCode,
    /// Human-readable message
    pub message: String,
}

impl CliError {
    /// Invalid input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Transport failure.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            code: ExitCode::NetworkError,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type of command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Where the collection configuration comes from.
#[derive(Debug, Clone, Args)]
pub struct CollectionsArgs {
    /// Collection configuration as JSON, e.g. '{"default":{"name":"Default","modeId":"default"}}'
    #[arg(long, value_name = "JSON", required_unless_present = "collections_file")]
    pub collections: Option<String>,

    /// Read the collection configuration from a JSON file instead
    #[arg(long, value_name = "FILE", conflicts_with = "collections")]
    pub collections_file: Option<PathBuf>,
}

impl CollectionsArgs {
    /// Loads and validates the collection configuration.
    pub fn load(&self) -> CliResult<CollectionConfig> {
        let json = match (&self.collections, &self.collections_file) {
            (Some(json), _) => json.clone(),
            (None, Some(path)) => fs::read_to_string(path).map_err(|e| {
                CliError::io(format!(
                    "Failed to read collections file {}: {e}",
                    path.display()
                ))
            })?,
            (None, None) => {
                return Err(CliError::validation(
                    "Either --collections or --collections-file is required",
                ))
            }
        };

        let config = CollectionConfig::from_json_str(&json)
            .map_err(|e| CliError::validation(format!("{e:#}")))?;
        config
            .validate()
            .map_err(|e| CliError::validation(e.to_string()))?;

        Ok(config)
    }
}
