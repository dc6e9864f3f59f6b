//! Style-dictionary JSON normalization.
//!
//! Turns the raw document into a [`TokenGroup`] tree. An object carrying `$value`
//! becomes a [`TokenLeaf`]; any other object becomes an interior group whose
//! metadata keys (`$type`, `$description`, ...) are lifted out of the children.
//! Scalars and arrays sitting where a token group is expected are not tokens and
//! are dropped.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::constants::{METADATA_MARKER, ORIGINAL_KEY, TYPE_KEY, VALUE_KEY};
use crate::models::{TokenAttributes, TokenGroup, TokenLeaf, TokenNode};

/// Parses a token document from JSON text.
pub fn parse_token_tree(json: &str) -> Result<TokenGroup> {
    let value: Value = serde_json::from_str(json).context("Failed to parse token JSON")?;
    normalize_document(&value)
}

/// Reads and parses a token document from disk.
pub fn parse_token_file(path: &Path) -> Result<TokenGroup> {
    let content = fs::read_to_string(path)
        .context(format!("Failed to read token file: {}", path.display()))?;

    parse_token_tree(&content).context(format!("Failed to parse token file: {}", path.display()))
}

/// Normalizes an already-parsed document. The root must be a JSON object.
pub fn normalize_document(value: &Value) -> Result<TokenGroup> {
    let Value::Object(map) = value else {
        anyhow::bail!("Token document root must be a JSON object");
    };

    Ok(normalize_group(map))
}

/// Returns true if a key is metadata rather than a child token name.
#[must_use]
pub fn is_metadata_key(key: &str) -> bool {
    key.starts_with(METADATA_MARKER)
}

fn normalize_group(map: &Map<String, Value>) -> TokenGroup {
    let children = map
        .iter()
        .filter(|(key, _)| !is_metadata_key(key))
        .filter_map(|(key, child)| normalize_node(child).map(|node| (key.clone(), node)))
        .collect();

    TokenGroup {
        declared_type: string_field(map, TYPE_KEY),
        children,
    }
}

fn normalize_node(value: &Value) -> Option<TokenNode> {
    let Value::Object(map) = value else {
        return None;
    };

    if let Some(token_value) = map.get(VALUE_KEY) {
        Some(TokenNode::Leaf(normalize_leaf(map, token_value)))
    } else {
        Some(TokenNode::Interior(normalize_group(map)))
    }
}

fn normalize_leaf(map: &Map<String, Value>, token_value: &Value) -> TokenLeaf {
    let original_value = map
        .get(ORIGINAL_KEY)
        .and_then(|original| original.get(VALUE_KEY))
        .cloned();

    let path = map.get("path").and_then(Value::as_array).map(|segments| {
        segments
            .iter()
            .map(crate::models::token::value_text)
            .collect()
    });

    // Attributes are advisory; a malformed bag is treated as absent.
    let attributes = map
        .get("attributes")
        .and_then(|attrs| serde_json::from_value::<TokenAttributes>(attrs.clone()).ok())
        .unwrap_or_default();

    TokenLeaf {
        value: token_value.clone(),
        original_value,
        declared_type: string_field(map, TYPE_KEY),
        name: map.get("name").map(crate::models::token::value_text),
        path,
        attributes,
    }
}

fn string_field(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}
