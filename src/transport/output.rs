//! Debug copy of the payload on disk.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::FigmaPayload;

/// Writes the payload as pretty-printed JSON, creating parent directories and
/// overwriting any existing file.
pub fn write_payload(payload: &FigmaPayload, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create output directory: {}",
                parent.display()
            ))?;
        }
    }

    let json = payload
        .to_pretty_json()
        .context("Failed to serialize payload")?;

    fs::write(path, json).context(format!("Failed to write payload: {}", path.display()))?;

    tracing::info!("Wrote payload to {}", path.display());
    Ok(())
}
