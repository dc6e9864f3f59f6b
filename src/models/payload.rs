//! Figma variables API payload.
//!
//! Field names follow the REST API (`POST /v1/files/:file_key/variables`), so the
//! serialized form of [`FigmaPayload`] is the request body as-is.

use serde::{Deserialize, Serialize};

use super::color::FigmaColor;

/// Action requested for a payload record. Only creation is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    /// Create a new object
    #[default]
    Create,
}

/// Figma variable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResolvedType {
    /// RGB color
    Color,
    /// Number
    Float,
    /// Free text
    String,
}

/// `variableCollections` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    /// Requested action
    pub action: Action,
    /// Collection id (its display name)
    pub id: String,
    /// Display name
    pub name: String,
    /// Mode the collection is created with
    pub initial_mode_id: String,
}

/// `variableModes` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableMode {
    /// Requested action
    pub action: Action,
    /// Mode id
    pub id: String,
    /// Mode display name
    pub name: String,
    /// Owning collection id
    pub variable_collection_id: String,
}

/// Usage snippets shown in Figma's dev mode, per platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSyntax {
    /// CSS usage, e.g. `var(--rh-color-brand-red, #ee0000)`
    #[serde(rename = "WEB")]
    pub web: String,
}

/// `variables` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    /// Requested action
    pub action: Action,
    /// Variable id (path-derived)
    pub id: String,
    /// Variable name, identical to the id
    pub name: String,
    /// Figma type
    pub resolved_type: ResolvedType,
    /// Owning collection id
    pub variable_collection_id: String,
    /// Usage snippets
    pub code_syntax: CodeSyntax,
}

/// Reference to another variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasRef {
    /// Id of the referenced variable
    pub id: String,
    /// Reference kind marker
    #[serde(rename = "type")]
    pub kind: AliasKind,
}

/// Marker for alias values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AliasKind {
    /// Variable alias
    #[serde(rename = "ALIAS")]
    Alias,
}

/// Value of a variable in one mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    /// Reference to another variable
    Alias(AliasRef),
    /// Normalized RGB color
    Color(FigmaColor),
    /// Number
    Float(f64),
    /// Text
    String(String),
}

/// `variableModeValues` record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableModeValue {
    /// Variable the value belongs to
    pub variable_id: String,
    /// Mode the value belongs to; omitted when the semantic collection has no
    /// matching mode configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode_id: Option<String>,
    /// The value
    pub value: VariableValue,
}

/// The complete request body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FigmaPayload {
    /// Collections to create
    pub variable_collections: Vec<VariableCollection>,
    /// Variables to create
    pub variables: Vec<Variable>,
    /// Extra modes to create
    pub variable_modes: Vec<VariableMode>,
    /// Per-mode values
    pub variable_mode_values: Vec<VariableModeValue>,
}

impl FigmaPayload {
    /// Serializes the payload as pretty-printed JSON (2-space indentation).
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Finds a variable by id.
    #[must_use]
    pub fn variable(&self, id: &str) -> Option<&Variable> {
        self.variables.iter().find(|v| v.id == id)
    }

    /// Finds the mode value recorded for a variable id.
    #[must_use]
    pub fn mode_value(&self, variable_id: &str) -> Option<&VariableModeValue> {
        self.variable_mode_values
            .iter()
            .find(|v| v.variable_id == variable_id)
    }
}
