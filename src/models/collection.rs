//! Variable collections: caller configuration and the runtime registry.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::constants::DEFAULT_COLLECTION;

/// One configured collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionEntry {
    /// Display name, also used as the collection id in the payload
    pub name: String,
    /// Initial mode of the collection
    pub mode_id: String,
    /// Second mode (e.g. "dark" for the semantic collection)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_mode_id: Option<String>,
}

/// Caller-supplied mapping from collection key to its entry, in document order.
///
/// Order matters: it is the order collections appear in the payload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct CollectionConfig {
    entries: Vec<(String, CollectionEntry)>,
}

impl CollectionConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from its JSON text, e.g.
    /// `{"default": {"name": "Default", "modeId": "default"}}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse collection configuration JSON")
    }

    /// Adds or replaces an entry, keeping the original position on replace.
    pub fn insert(&mut self, key: impl Into<String>, entry: CollectionEntry) {
        let key = key.into();
        if let Some(existing) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = entry;
        } else {
            self.entries.push((key, entry));
        }
    }

    /// Builder-style variant of [`CollectionConfig::insert`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, entry: CollectionEntry) -> Self {
        self.insert(key, entry);
        self
    }

    /// Looks up an entry by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CollectionEntry> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    /// Iterates entries in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CollectionEntry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    /// Number of configured collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks that the `default` fallback collection is configured.
    pub fn validate(&self) -> Result<()> {
        if self.get(DEFAULT_COLLECTION).is_none() {
            anyhow::bail!(
                "Collection configuration is missing the required '{DEFAULT_COLLECTION}' entry"
            );
        }
        Ok(())
    }
}

impl CollectionEntry {
    /// Creates a single-mode entry.
    #[must_use]
    pub fn new(name: impl Into<String>, mode_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode_id: mode_id.into(),
            secondary_mode_id: None,
        }
    }

    /// Adds a secondary mode.
    #[must_use]
    pub fn with_secondary_mode(mut self, mode_id: impl Into<String>) -> Self {
        self.secondary_mode_id = Some(mode_id.into());
        self
    }
}

impl TryFrom<Map<String, Value>> for CollectionConfig {
    type Error = serde_json::Error;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        let entries = map
            .into_iter()
            .map(|(key, value)| Ok((key, serde_json::from_value(value)?)))
            .collect::<Result<Vec<_>, serde_json::Error>>()?;
        Ok(Self { entries })
    }
}

impl From<CollectionConfig> for Map<String, Value> {
    fn from(config: CollectionConfig) -> Self {
        config
            .entries
            .into_iter()
            .map(|(key, entry)| {
                let value = serde_json::to_value(entry).unwrap_or(Value::Null);
                (key, value)
            })
            .collect()
    }
}

/// A collection known to one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    /// Lookup key (configuration key or top-level token key)
    pub key: String,
    /// Display name and payload id
    pub name: String,
    /// Initial mode id
    pub mode_id: String,
    /// Secondary mode id, if the collection has two modes
    pub secondary_mode_id: Option<String>,
}

impl Collection {
    /// Builds a runtime collection from a configured entry.
    #[must_use]
    pub fn from_entry(key: &str, entry: &CollectionEntry) -> Self {
        Self {
            key: key.to_string(),
            name: entry.name.clone(),
            mode_id: entry.mode_id.clone(),
            secondary_mode_id: entry.secondary_mode_id.clone(),
        }
    }
}

/// Ordered set of collections, first registration wins.
#[derive(Debug, Clone, Default)]
pub struct CollectionRegistry {
    collections: Vec<Collection>,
}

impl CollectionRegistry {
    /// Seeds the registry from the caller's configuration.
    #[must_use]
    pub fn from_config(config: &CollectionConfig) -> Self {
        let collections = config
            .iter()
            .map(|(key, entry)| Collection::from_entry(key, entry))
            .collect();
        Self { collections }
    }

    /// Registers a collection unless its key is already present.
    ///
    /// Returns true if the collection was added.
    pub fn register(&mut self, collection: Collection) -> bool {
        if self.contains(&collection.key) {
            return false;
        }
        self.collections.push(collection);
        true
    }

    /// Returns true if a collection with this key exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Looks up a collection by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Collection> {
        self.collections.iter().find(|c| c.key == key)
    }

    /// Iterates collections in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Collection> {
        self.collections.iter()
    }

    /// Number of registered collections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    /// Returns true if no collection is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }
}
