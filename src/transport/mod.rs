//! I/O boundary: HTTP access to the style dictionary and the Figma API, and the
//! on-disk debug copy of the payload.

pub mod client;
pub mod output;

pub use client::FigmaClient;
pub use output::write_payload;
