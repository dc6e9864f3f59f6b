//! Service layer for the token conversion.
//!
//! This module contains the collection resolver, the token classifier, the tree
//! traversal, and the payload assembler. None of it performs I/O.

pub mod classifier;
pub mod collections;
pub mod converter;
pub mod payload;

// Re-export commonly used types and functions
pub use converter::{convert_to_payload, ConversionContext};
pub use payload::{PayloadBuilder, TokenRecord};
