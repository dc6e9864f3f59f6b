//! Normalized token tree.
//!
//! The raw style-dictionary document is split into interior nodes and leaves
//! once, by [`crate::parser::token_tree`]. Everything downstream matches on
//! [`TokenNode`] instead of probing JSON objects for a `$value` key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One node of the token tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenNode {
    /// Group of child tokens, in document order.
    Interior(TokenGroup),
    /// A single design token.
    Leaf(TokenLeaf),
}

/// Interior node: ordered children plus an optional declared type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenGroup {
    /// Type declared on this group with `$type`, inherited by descendants
    pub declared_type: Option<String>,
    /// Child entries (metadata keys already removed)
    pub children: Vec<(String, TokenNode)>,
}

/// A design token carrying a value.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenLeaf {
    /// Resolved value (`$value`), kept as raw JSON
    pub value: Value,
    /// Pre-resolution value (`original.$value`), used to detect aliases
    pub original_value: Option<Value>,
    /// Type declared on the leaf itself
    pub declared_type: Option<String>,
    /// Display name from the style dictionary (e.g. "rh-color-brand-red")
    pub name: Option<String>,
    /// Path segments from the document root, as declared by the style dictionary
    pub path: Option<Vec<String>>,
    /// Classification hints
    pub attributes: TokenAttributes,
}

/// Style Dictionary CTI attributes used for classification fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenAttributes {
    /// Category (e.g. "color", "font")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Type within the category (e.g. "brand", "weight")
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Hex color without the leading '#'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,
}

impl TokenLeaf {
    /// Creates a leaf with only a value set.
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self {
            value,
            original_value: None,
            declared_type: None,
            name: None,
            path: None,
            attributes: TokenAttributes::default(),
        }
    }

    /// Textual form of the value, as used for unit checks and code syntax.
    #[must_use]
    pub fn value_text(&self) -> String {
        value_text(&self.value)
    }

    /// Textual form of the original value, if there is one.
    #[must_use]
    pub fn original_text(&self) -> Option<String> {
        self.original_value.as_ref().map(value_text)
    }

    /// Returns the name, falling back to the empty string.
    #[must_use]
    pub fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

/// Renders a JSON value the way token values are compared and displayed.
///
/// Strings are taken verbatim, numbers in shortest form, arrays as comma-joined
/// elements, everything else as compact JSON.
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(","),
        Value::Null | Value::Object(_) => value.to_string(),
    }
}

/// Shortest decimal form: `1.0` renders as `1`, `0.5` as `0.5`.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.is_finite() => format!("{f}"),
        _ => n.to_string(),
    }
}
