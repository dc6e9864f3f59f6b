//! Figma Token Sync Library
//!
//! This library converts hierarchical style-dictionary design tokens into the
//! flat payload of the Figma variables REST API: variable collections, modes,
//! variables, and per-mode values. It also provides the HTTP transport used to
//! fetch token documents and submit payloads.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod models;
pub mod parser;
pub mod services;
pub mod transport;

pub use models::{CollectionConfig, CollectionEntry, FigmaPayload};
pub use services::convert_to_payload;
