//! Token tree to Figma payload conversion.
//!
//! A [`ConversionContext`] is created per call and owns the collection registry
//! and the payload accumulator, so concurrent conversions never share state.
//!
//! Each leaf emits, in order:
//! 1. for colors named `...light` / `...dark`: a themed record keyed
//!    `<path>/<theme>/--<name>` whose mode is the token category, followed by a
//!    semantic record `<path>/<cleaned-name>`;
//! 2. for colors named `...white` / `...black`: a semantic record;
//! 3. always: the base record `<path>/--<name>` in the collection's own mode.
//!
//! A top-level token has no `<path>/` prefix, and its base id is the bare name.

use anyhow::Result;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, info, warn};

use super::classifier::{
    build_code_syntax, classify_category, classify_type, detect_color_theme,
};
use super::collections::{matching_rule, register_top_level_collections, resolve_collection};
use super::payload::{PayloadBuilder, TokenRecord};
use crate::constants::{LINE_HEIGHT_MODE, SEMANTIC_COLLECTION};
use crate::models::{
    CodeSyntax, Collection, CollectionConfig, CollectionRegistry, FigmaPayload, ResolvedType,
    TokenGroup, TokenLeaf, TokenNode, VariableValue,
};
use crate::parser::values::{
    parse_color, parse_float_value, parse_line_height, parse_token_value, FloatValue,
};

static LIGHT_VARIANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"light(er|est)?|white").expect("light pattern is valid"));

static DARK_VARIANT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"dark(er|est)?|black").expect("dark pattern is valid"));

static LIGHT_DARK_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(light|dark)$").expect("light/dark pattern is valid"));

static WHITE_BLACK_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(white|black)$").expect("white/black pattern is valid"));

/// Converts a token tree into a Figma payload.
///
/// Fails only when the configuration lacks a `default` collection.
///
/// # Examples
///
/// ```
/// use figma_token_sync::models::{CollectionConfig, CollectionEntry};
/// use figma_token_sync::parser::parse_token_tree;
/// use figma_token_sync::services::convert_to_payload;
///
/// let config = CollectionConfig::new()
///     .with("color", CollectionEntry::new("Color", "color"))
///     .with("default", CollectionEntry::new("Default", "default"));
/// let tree = parse_token_tree(
///     r##"{"color": {"brand": {"$type": "color", "primary": {"$value": "#ff0000"}}}}"##,
/// )?;
///
/// let payload = convert_to_payload(&config, &tree)?;
/// assert_eq!(payload.variables[0].id, "color/brand/--primary");
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn convert_to_payload(config: &CollectionConfig, tree: &TokenGroup) -> Result<FigmaPayload> {
    ConversionContext::new(config, tree)?.run(tree)
}

/// State of one conversion call.
#[derive(Debug)]
pub struct ConversionContext {
    registry: CollectionRegistry,
    builder: PayloadBuilder,
}

impl ConversionContext {
    /// Validates the configuration and registers collections: configured ones
    /// first, then one per new top-level key.
    pub fn new(config: &CollectionConfig, tree: &TokenGroup) -> Result<Self> {
        config.validate()?;

        let mut registry = CollectionRegistry::from_config(config);
        register_top_level_collections(&mut registry, tree);

        let mut builder = PayloadBuilder::new();
        builder.add_collections(&registry);

        Ok(Self { registry, builder })
    }

    /// Walks the tree, prunes unused collections, and returns the payload.
    pub fn run(mut self, tree: &TokenGroup) -> Result<FigmaPayload> {
        for (key, node) in &tree.children {
            self.traverse(tree.declared_type.as_deref(), key, node)?;
        }

        self.builder.prune_unused_collections();
        let payload = self.builder.finish();

        info!(
            "Converted {} variable(s) into {} collection(s)",
            payload.variables.len(),
            payload.variable_collections.len()
        );
        Ok(payload)
    }

    fn traverse(&mut self, inherited_type: Option<&str>, key: &str, node: &TokenNode) -> Result<()> {
        match node {
            TokenNode::Leaf(leaf) => {
                let declared = leaf.declared_type.as_deref().or(inherited_type);
                self.emit_leaf(declared, key, leaf)
            }
            TokenNode::Interior(group) => {
                let declared = group.declared_type.as_deref().or(inherited_type);
                for (child_key, child) in &group.children {
                    self.traverse(declared, &format!("{key}/{child_key}"), child)?;
                }
                Ok(())
            }
        }
    }

    fn emit_leaf(&mut self, declared_type: Option<&str>, key: &str, leaf: &TokenLeaf) -> Result<()> {
        let resolved_type = classify_type(declared_type, leaf);
        let category = classify_category(&self.registry, leaf);
        let collection = resolve_collection(&self.registry, leaf, key)?.clone();
        debug!(
            "'{}' -> collection '{}' (rule: {})",
            key,
            collection.key,
            matching_rule(&self.registry, leaf, key).unwrap_or("default")
        );
        let code_syntax = build_code_syntax(leaf, resolved_type, key);
        let value = coerce_value(resolved_type, &collection, leaf);

        let path = TokenPath::for_leaf(leaf, key);

        if resolved_type == ResolvedType::Color {
            if let Some(theme) = detect_color_theme(leaf) {
                self.builder.add_token(TokenRecord {
                    collection_id: collection.name.clone(),
                    mode_id: Some(category),
                    resolved_type,
                    id: path.qualify(&format!("{}/--{}", theme.as_str(), path.name)),
                    value: value.clone(),
                    code_syntax: code_syntax.clone(),
                });
                self.emit_semantic(leaf, &path, &LIGHT_DARK_SUFFIX, &value, &code_syntax);
            }

            if leaf.name.as_deref().is_some_and(|n| WHITE_BLACK_SUFFIX.is_match(n)) {
                self.emit_semantic(leaf, &path, &WHITE_BLACK_SUFFIX, &value, &code_syntax);
            }
        }

        self.builder.add_token(TokenRecord {
            collection_id: collection.name,
            mode_id: Some(collection.mode_id),
            resolved_type,
            id: path.base_id(),
            value,
            code_syntax,
        });

        Ok(())
    }

    /// Emits a theme-independent token into the semantic collection.
    fn emit_semantic(
        &mut self,
        leaf: &TokenLeaf,
        path: &TokenPath,
        pattern: &Regex,
        value: &VariableValue,
        code_syntax: &CodeSyntax,
    ) {
        let name = leaf.name_str();
        if !pattern.is_match(name) {
            return;
        }

        let Some(semantic) = self.registry.get(SEMANTIC_COLLECTION) else {
            warn!(
                "Skipping semantic token for '{}': no '{}' collection configured",
                name, SEMANTIC_COLLECTION
            );
            return;
        };

        let mode_id = if LIGHT_VARIANT.is_match(name) {
            Some(semantic.mode_id.clone())
        } else if DARK_VARIANT.is_match(name) {
            semantic.secondary_mode_id.clone()
        } else {
            None
        };

        let id = path.qualify(&semantic_name(name));

        self.builder.add_token(TokenRecord {
            collection_id: semantic.name.clone(),
            mode_id,
            resolved_type: ResolvedType::Color,
            id,
            value: value.clone(),
            code_syntax: code_syntax.clone(),
        });
    }
}

/// Identifier pieces of a leaf.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TokenPath {
    /// Ancestor segments joined with '/'
    parent: String,
    /// Token name used in identifiers
    name: String,
}

impl TokenPath {
    /// Uses the declared path when present, the traversal key otherwise. The name
    /// is the declared display name, else the last path segment.
    fn for_leaf(leaf: &TokenLeaf, key: &str) -> Self {
        let segments: Vec<String> = leaf
            .path
            .clone()
            .unwrap_or_else(|| key.split('/').map(str::to_string).collect());

        let (last, ancestors) = segments
            .split_last()
            .map_or((String::new(), &[][..]), |(last, rest)| (last.clone(), rest));

        Self {
            parent: ancestors.join("/"),
            name: leaf.name.clone().unwrap_or(last),
        }
    }

    /// Prefixes `tail` with the ancestor path. Top-level tokens have no prefix.
    fn qualify(&self, tail: &str) -> String {
        if self.parent.is_empty() {
            tail.to_string()
        } else {
            format!("{}/{}", self.parent, tail)
        }
    }

    /// `<parent>/--<name>`, or the bare name for a top-level token.
    fn base_id(&self) -> String {
        if self.parent.is_empty() {
            self.name.clone()
        } else {
            self.qualify(&format!("--{}", self.name))
        }
    }
}

/// Strips theme words from a color name: the first light variant, then the first
/// dark variant, then a trailing `-`, then a trailing `-on`.
#[must_use]
pub fn semantic_name(name: &str) -> String {
    let name = LIGHT_VARIANT.replace(name, "");
    let name = DARK_VARIANT.replace(&name, "");
    let name = name.strip_suffix('-').unwrap_or(&name);
    let name = name.strip_suffix("-on").unwrap_or(name);
    name.to_string()
}

/// Coerces a leaf's value for its type and collection. Aliases win over literals.
fn coerce_value(resolved_type: ResolvedType, collection: &Collection, leaf: &TokenLeaf) -> VariableValue {
    if let Some(original) = leaf.original_text().filter(|text| text.contains('{')) {
        return VariableValue::Alias(parse_token_value(&original));
    }

    let text = leaf.value_text();
    match resolved_type {
        ResolvedType::Float => match parse_float_value(collection, &text) {
            FloatValue::Number(n) => VariableValue::Float(n),
            FloatValue::Text(t) => VariableValue::String(t),
        },
        ResolvedType::Color => {
            let hex = leaf.attributes.hex.as_deref().unwrap_or(&text);
            let color = parse_color(hex);
            if !color.is_valid() {
                warn!("Color '{}' is not valid hex, sending {}", hex, color);
            }
            VariableValue::Color(color)
        }
        ResolvedType::String if collection.mode_id == LINE_HEIGHT_MODE => {
            VariableValue::String(parse_line_height(&text))
        }
        ResolvedType::String => {
            debug!("Keeping '{}' as text", text);
            VariableValue::String(text)
        }
    }
}
