//! Token classification: Figma type, category, color theme, and code syntax.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::DEFAULT_COLLECTION;
use crate::models::{CodeSyntax, CollectionRegistry, ResolvedType, TokenLeaf};

static UNIT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(px|rem)$").expect("unit suffix pattern is valid"));

static THEME_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(light|dark)$").expect("theme suffix pattern is valid"));

/// Theme detected from a color token's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTheme {
    /// Name ends in `light`
    Light,
    /// Name ends in `dark`
    Dark,
}

impl ColorTheme {
    /// Path segment used for the themed record (`light` / `dark`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Determines the Figma type of a token.
///
/// A value ending in `px`/`rem` is FLOAT whatever the declared type says;
/// otherwise `number` is FLOAT, `color` is COLOR, and the rest is STRING.
#[must_use]
pub fn classify_type(declared_type: Option<&str>, leaf: &TokenLeaf) -> ResolvedType {
    if UNIT_SUFFIX.is_match(&leaf.value_text()) || declared_type == Some("number") {
        ResolvedType::Float
    } else if declared_type == Some("color") {
        ResolvedType::Color
    } else {
        ResolvedType::String
    }
}

/// Determines the token category: a registered `attributes.category`, else a
/// registered `attributes.type`, else `default`.
///
/// The category doubles as the mode id of themed color records.
#[must_use]
pub fn classify_category(registry: &CollectionRegistry, leaf: &TokenLeaf) -> String {
    [&leaf.attributes.category, &leaf.attributes.kind]
        .into_iter()
        .flatten()
        .find(|candidate| registry.contains(candidate))
        .cloned()
        .unwrap_or_else(|| DEFAULT_COLLECTION.to_string())
}

/// Detects a literal `light` or `dark` suffix on the token name.
///
/// `lighter`, `white` and friends do not count here.
#[must_use]
pub fn detect_color_theme(leaf: &TokenLeaf) -> Option<ColorTheme> {
    let name = leaf.name.as_deref()?;
    match THEME_SUFFIX.find(name)?.as_str() {
        "light" => Some(ColorTheme::Light),
        _ => Some(ColorTheme::Dark),
    }
}

/// Builds the CSS usage snippet shown in Figma.
///
/// Named colors fall back to their hex attribute (or `000000`); other named
/// tokens fall back to their value. Unnamed tokens use the traversal key with
/// slashes turned into hyphens.
#[must_use]
pub fn build_code_syntax(leaf: &TokenLeaf, resolved_type: ResolvedType, key: &str) -> CodeSyntax {
    let web = match leaf.name.as_deref() {
        Some(name) if resolved_type == ResolvedType::Color => {
            let hex = leaf.attributes.hex.as_deref().unwrap_or("000000");
            format!("var(--{name}, #{hex})")
        }
        Some(name) => format!("var(--{name}, {})", leaf.value_text()),
        None => format!("var(--{}, {})", key.replace('/', "-"), leaf.value_text()),
    };

    CodeSyntax { web }
}
