//! Value coercion from raw token text into Figma value shapes.
//!
//! Every function here is best-effort: malformed input yields `NaN` or the input
//! text, never an error, so one bad token cannot abort a batch conversion.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{ALIAS_PREFIX, BASE_FONT_SIZE, LETTER_SPACING_MODE};
use crate::models::{AliasKind, AliasRef, Collection, FigmaColor};

/// Longest numeric prefix accepted by [`parse_leading_float`].
static LEADING_FLOAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)")
        .expect("leading float pattern is valid")
});

/// Measurement units stripped by [`parse_float_value`].
static UNIT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(px|rem)$").expect("unit suffix pattern is valid"));

/// Result of [`parse_float_value`].
#[derive(Debug, Clone, PartialEq)]
pub enum FloatValue {
    /// Parsed number
    Number(f64),
    /// Unitless text passed through unchanged
    Text(String),
}

/// Parses a hex color into normalized RGB channels.
///
/// `#abc` and `#aabbcc` are equivalent. Malformed channels become `NaN`.
#[must_use]
pub fn parse_color(hex: &str) -> FigmaColor {
    FigmaColor::from_hex(hex)
}

/// Coerces a FLOAT token value.
///
/// Letter-spacing values are em multipliers and are scaled by 16. Otherwise a
/// `px` or `rem` suffix is stripped and the number returned; text without a
/// unit is returned unchanged.
#[must_use]
pub fn parse_float_value(collection: &Collection, value: &str) -> FloatValue {
    if collection.mode_id == LETTER_SPACING_MODE {
        return FloatValue::Number(parse_leading_float(value) * BASE_FONT_SIZE);
    }

    if let Some(unit) = UNIT_SUFFIX.find(value) {
        return FloatValue::Number(parse_leading_float(&value[..unit.start()]));
    }

    FloatValue::Text(value.to_string())
}

/// Converts a unitless line height into a pixel string (`"1.5"` becomes `"24px"`).
#[must_use]
pub fn parse_line_height(value: &str) -> String {
    format!("{}px", parse_leading_float(value) * BASE_FONT_SIZE)
}

/// Builds an alias reference from a `{a.b.c}` token reference.
///
/// The id is `<a/b>/--rh-<a-b-c>`: every dotted segment but the last forms the
/// path, and the whole reference flattened with hyphens forms the name.
#[must_use]
pub fn parse_token_value(reference: &str) -> AliasRef {
    let body = reference.replacen('{', "", 1).replacen('}', "", 1);
    let flattened = body.replace('.', "-");

    let segments: Vec<&str> = body.split('.').collect();
    let path = segments[..segments.len().saturating_sub(1)].join("/");

    AliasRef {
        id: format!("{path}/--{ALIAS_PREFIX}-{flattened}"),
        kind: AliasKind::Alias,
    }
}

/// Parses the longest leading number of `text`, ignoring leading whitespace.
///
/// Returns `NaN` when the text does not start with a number.
#[must_use]
pub fn parse_leading_float(text: &str) -> f64 {
    LEADING_FLOAT
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(mode_id: &str) -> Collection {
        Collection {
            key: mode_id.to_string(),
            name: mode_id.to_string(),
            mode_id: mode_id.to_string(),
            secondary_mode_id: None,
        }
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("#ffffff"), FigmaColor::new(1.0, 1.0, 1.0));
        assert_eq!(parse_color("000000"), FigmaColor::new(0.0, 0.0, 0.0));
        assert_eq!(parse_color("#abc"), parse_color("#aabbcc"));
    }

    #[test]
    fn test_parse_float_letter_spacing() {
        let letter_spacing = collection("letter-spacing");
        assert_eq!(parse_float_value(&letter_spacing, "0.5"), FloatValue::Number(8.0));
        assert_eq!(
            parse_float_value(&letter_spacing, "-0.01em"),
            FloatValue::Number(-0.16)
        );
    }

    #[test]
    fn test_parse_float_units() {
        let space = collection("space");
        assert_eq!(parse_float_value(&space, "16px"), FloatValue::Number(16.0));
        assert_eq!(parse_float_value(&space, "1rem"), FloatValue::Number(1.0));
        assert_eq!(parse_float_value(&space, "0.25rem"), FloatValue::Number(0.25));
    }

    #[test]
    fn test_parse_float_without_unit_passes_through() {
        let space = collection("space");
        assert_eq!(
            parse_float_value(&space, "400"),
            FloatValue::Text("400".to_string())
        );
        assert_eq!(
            parse_float_value(&space, "50%"),
            FloatValue::Text("50%".to_string())
        );
    }

    #[test]
    fn test_parse_float_malformed_is_nan() {
        let space = collection("space");
        match parse_float_value(&space, "abcpx") {
            FloatValue::Number(n) => assert!(n.is_nan()),
            other => panic!("expected number, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_line_height() {
        assert_eq!(parse_line_height("1.5"), "24px");
        assert_eq!(parse_line_height("1.3"), "20.8px");
        assert_eq!(parse_line_height("2"), "32px");
        assert_eq!(parse_line_height("normal"), "NaNpx");
    }

    #[test]
    fn test_parse_token_value() {
        let alias = parse_token_value("{color.brand.primary}");
        assert_eq!(alias.id, "color/brand/--rh-color-brand-primary");
        assert_eq!(alias.kind, AliasKind::Alias);

        let alias = parse_token_value("{space.md}");
        assert_eq!(alias.id, "space/--rh-space-md");
    }

    #[test]
    fn test_parse_token_value_single_segment() {
        let alias = parse_token_value("{white}");
        assert_eq!(alias.id, "/--rh-white");
    }

    #[test]
    fn test_parse_leading_float() {
        assert_eq!(parse_leading_float("16px"), 16.0);
        assert_eq!(parse_leading_float("  -1.5e2x"), -150.0);
        assert_eq!(parse_leading_float(".5"), 0.5);
        assert_eq!(parse_leading_float("3."), 3.0);
        assert!(parse_leading_float("Infinity").is_infinite());
        assert!(parse_leading_float("px").is_nan());
        assert!(parse_leading_float("").is_nan());
    }
}
