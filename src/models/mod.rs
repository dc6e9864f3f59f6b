//! Data models for token trees, collections, and the Figma payload.
//!
//! This module contains the core data structures used throughout the application.
//! Models are independent of traversal and transport logic.

pub mod collection;
pub mod color;
pub mod payload;
pub mod token;

// Re-export all model types
pub use collection::{Collection, CollectionConfig, CollectionEntry, CollectionRegistry};
pub use color::FigmaColor;
pub use payload::{
    Action, AliasKind, AliasRef, CodeSyntax, FigmaPayload, ResolvedType, Variable,
    VariableCollection, VariableMode, VariableModeValue, VariableValue,
};
pub use token::{TokenAttributes, TokenGroup, TokenLeaf, TokenNode};
