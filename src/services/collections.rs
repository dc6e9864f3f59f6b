//! Collection registration and per-token collection resolution.

use anyhow::{Context, Result};
use tracing::debug;

use crate::constants::{DEFAULT_COLLECTION, FONT_COLLECTION};
use crate::models::{Collection, CollectionRegistry, TokenGroup, TokenLeaf};

/// One step of the collection fallback chain.
///
/// `candidate` proposes a collection key for a leaf (given its traversal key);
/// the proposal only wins if that collection is registered.
#[derive(Debug, Clone, Copy)]
pub struct ResolutionRule {
    /// Short rule name, used in logs and tests
    pub name: &'static str,
    /// Proposes a collection key
    pub candidate: fn(&TokenLeaf, &str) -> Option<String>,
}

/// Collection fallback chain, in precedence order. `default` follows the last rule.
pub const COLLECTION_RULES: &[ResolutionRule] = &[
    ResolutionRule {
        name: "attributes.category",
        candidate: |leaf, _| leaf.attributes.category.clone(),
    },
    ResolutionRule {
        name: "attributes.type",
        candidate: |leaf, _| leaf.attributes.kind.clone(),
    },
    ResolutionRule {
        name: "font",
        candidate: |leaf, _| {
            let mentions_font = |s: &Option<String>| s.as_deref().is_some_and(|s| s.contains("font"));
            (mentions_font(&leaf.attributes.category) || mentions_font(&leaf.attributes.kind))
                .then(|| FONT_COLLECTION.to_string())
        },
    },
    ResolutionRule {
        name: "top-level key",
        candidate: |_, key| key.split('/').next().map(str::to_string),
    },
];

/// Registers one collection per top-level token key that is not configured yet.
///
/// The display name is the key with hyphens turned into spaces and each word
/// capitalized (`color-palette` becomes `Color Palette`); the mode id is the key.
pub fn register_top_level_collections(registry: &mut CollectionRegistry, tree: &TokenGroup) {
    for (key, _) in &tree.children {
        if key.is_empty() {
            continue;
        }

        let added = registry.register(Collection {
            key: key.clone(),
            name: display_name(key),
            mode_id: key.clone(),
            secondary_mode_id: None,
        });

        if added {
            debug!("Registered collection '{}' from top-level key", key);
        }
    }
}

/// Converts a collection key into a display name.
#[must_use]
pub fn display_name(key: &str) -> String {
    let spaced = key.replace('-', " ");
    let mut name = String::with_capacity(spaced.len());
    let mut previous_is_word = false;

    for c in spaced.chars() {
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !previous_is_word {
            name.push(c.to_ascii_uppercase());
        } else {
            name.push(c);
        }
        previous_is_word = is_word;
    }

    name
}

/// Picks the collection a leaf belongs to, following [`COLLECTION_RULES`].
///
/// Falls back to the `default` collection; fails only if that is missing.
pub fn resolve_collection<'a>(
    registry: &'a CollectionRegistry,
    leaf: &TokenLeaf,
    key: &str,
) -> Result<&'a Collection> {
    for rule in COLLECTION_RULES {
        if let Some(collection) = (rule.candidate)(leaf, key).and_then(|k| registry.get(&k)) {
            return Ok(collection);
        }
    }

    registry
        .get(DEFAULT_COLLECTION)
        .context(format!("No collection matches '{key}' and no '{DEFAULT_COLLECTION}' collection exists"))
}

/// Returns the name of the first rule that resolves a leaf, or `None` when the
/// `default` fallback applies.
#[must_use]
pub fn matching_rule(registry: &CollectionRegistry, leaf: &TokenLeaf, key: &str) -> Option<&'static str> {
    COLLECTION_RULES
        .iter()
        .find(|rule| (rule.candidate)(leaf, key).is_some_and(|k| registry.contains(&k)))
        .map(|rule| rule.name)
}
