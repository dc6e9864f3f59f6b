//! Application-wide constants.
//!
//! This module defines the application name, the reserved keys of the token
//! document, the collection keys that carry special coercion rules, and the
//! defaults used when no configuration file is present.

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "figma-token-sync";

/// Directory name used below the platform config directory.
pub const CONFIG_DIR_NAME: &str = "figma-token-sync";

/// Environment variable that overrides the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "FIGMA_TOKEN_SYNC_CONFIG_DIR";

/// Keys starting with this character are metadata, never child tokens.
pub const METADATA_MARKER: char = '$';

/// Key holding a token's resolved value. Its presence marks a leaf.
pub const VALUE_KEY: &str = "$value";

/// Key holding a node-level declared type.
pub const TYPE_KEY: &str = "$type";

/// Key of the pre-resolution copy of a token (`original.$value`).
pub const ORIGINAL_KEY: &str = "original";

/// Collection that always has to exist as the last resolution fallback.
pub const DEFAULT_COLLECTION: &str = "default";

/// Collection receiving theme-independent semantic color tokens.
pub const SEMANTIC_COLLECTION: &str = "semantic";

/// Collection used for any category or type mentioning fonts.
pub const FONT_COLLECTION: &str = "font";

/// Mode id of the letter-spacing collection (em values scaled to px).
pub const LETTER_SPACING_MODE: &str = "letter-spacing";

/// Mode id of the line-height collection (unitless values scaled to px strings).
pub const LINE_HEIGHT_MODE: &str = "line-height";

/// Pixels per em/rem used by unit conversions.
pub const BASE_FONT_SIZE: f64 = 16.0;

/// Prefix of the flattened CSS custom property names referenced by aliases.
pub const ALIAS_PREFIX: &str = "rh";

/// Default Figma REST API host.
pub const DEFAULT_API_BASE: &str = "https://api.figma.com";

/// Default location of the debug payload file, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "build/figma.output.json";

/// Header carrying the Figma personal access token.
pub const FIGMA_TOKEN_HEADER: &str = "X-FIGMA-TOKEN";
