//! CLI command handlers.
//!
//! This module provides headless, scriptable access to the conversion for
//! automation and CI/CD integration.

pub mod common;
pub mod config;
pub mod convert;
pub mod sync;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, CollectionsArgs, ExitCode};
pub use config::ConfigArgs;
pub use convert::ConvertArgs;
pub use sync::SyncArgs;
