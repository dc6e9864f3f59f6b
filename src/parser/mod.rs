//! Parsing of style-dictionary documents and token values.
//!
//! This module handles reading the raw token JSON into a normalized tree and
//! coercing individual token values into the shapes the Figma API expects.

pub mod token_tree;
pub mod values;

// Re-export commonly used functions
pub use token_tree::{normalize_document, parse_token_file, parse_token_tree};
pub use values::{
    parse_color, parse_float_value, parse_line_height, parse_token_value, FloatValue,
};
