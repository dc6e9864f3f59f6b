//! Append-only accumulator for the four payload sequences.

use std::collections::HashSet;
use tracing::{debug, info};

use crate::models::{
    Action, CodeSyntax, Collection, CollectionRegistry, FigmaPayload, ResolvedType, Variable,
    VariableCollection, VariableMode, VariableModeValue, VariableValue,
};

/// One token record to emit: a `variables` entry plus its mode value.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenRecord {
    /// Owning collection id (collection display name)
    pub collection_id: String,
    /// Mode the value is recorded for
    pub mode_id: Option<String>,
    /// Figma type
    pub resolved_type: ResolvedType,
    /// Variable id and name
    pub id: String,
    /// Coerced value
    pub value: VariableValue,
    /// Usage snippet
    pub code_syntax: CodeSyntax,
}

/// Builds a [`FigmaPayload`] for a single conversion run.
#[derive(Debug, Default)]
pub struct PayloadBuilder {
    payload: FigmaPayload,
}

impl PayloadBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one `variableCollections` record per registered collection, plus a
    /// `variableModes` record for every collection with a secondary mode.
    pub fn add_collections(&mut self, registry: &CollectionRegistry) {
        for collection in registry.iter() {
            self.add_collection(collection);
        }
    }

    /// Adds a single collection (and its secondary mode, if any).
    pub fn add_collection(&mut self, collection: &Collection) {
        self.payload.variable_collections.push(VariableCollection {
            action: Action::Create,
            id: collection.name.clone(),
            name: collection.name.clone(),
            initial_mode_id: collection.mode_id.clone(),
        });

        if let Some(mode) = &collection.secondary_mode_id {
            self.add_secondary_mode(mode, &collection.name);
        }
    }

    /// Adds a `variableModes` record.
    pub fn add_secondary_mode(&mut self, mode_id: &str, collection_id: &str) {
        debug!("Adding mode '{}' to collection '{}'", mode_id, collection_id);
        self.payload.variable_modes.push(VariableMode {
            action: Action::Create,
            id: mode_id.to_string(),
            name: mode_id.to_string(),
            variable_collection_id: collection_id.to_string(),
        });
    }

    /// Appends a token record as a mode value and a variable.
    pub fn add_token(&mut self, record: TokenRecord) {
        debug!(
            "Emitting {:?} variable '{}' in '{}'",
            record.resolved_type, record.id, record.collection_id
        );

        self.payload.variable_mode_values.push(VariableModeValue {
            variable_id: record.id.clone(),
            mode_id: record.mode_id,
            value: record.value,
        });

        self.payload.variables.push(Variable {
            action: Action::Create,
            id: record.id.clone(),
            name: record.id,
            resolved_type: record.resolved_type,
            variable_collection_id: record.collection_id,
            code_syntax: record.code_syntax,
        });
    }

    /// Drops collections that no variable references. Modes are left alone.
    ///
    /// Returns the number of collections removed.
    pub fn prune_unused_collections(&mut self) -> usize {
        let used: HashSet<&str> = self
            .payload
            .variables
            .iter()
            .map(|v| v.variable_collection_id.as_str())
            .collect();

        let before = self.payload.variable_collections.len();
        let kept: Vec<VariableCollection> = self
            .payload
            .variable_collections
            .iter()
            .filter(|c| used.contains(c.id.as_str()))
            .cloned()
            .collect();
        self.payload.variable_collections = kept;

        let removed = before - self.payload.variable_collections.len();
        if removed > 0 {
            info!("Pruned {} unused collection(s)", removed);
        }
        removed
    }

    /// Finishes the run and hands out the payload.
    #[must_use]
    pub fn finish(self) -> FigmaPayload {
        self.payload
    }
}
