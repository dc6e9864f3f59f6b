//! Normalized RGB color as expected by the Figma variables API.

use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color with channels normalized to the `[0, 1]` range.
///
/// Parsing is best-effort: a channel that cannot be read as hex becomes `NaN`
/// (serialized as `null`) instead of failing the whole conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FigmaColor {
    /// Red channel (0.0-1.0)
    pub r: f64,
    /// Green channel (0.0-1.0)
    pub g: f64,
    /// Blue channel (0.0-1.0)
    pub b: f64,
}

impl FigmaColor {
    /// Creates a new `FigmaColor` from normalized channel values.
    #[must_use]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses a color from a hex string.
    ///
    /// Accepts "#RRGGBB", "RRGGBB", "#RGB" and "RGB". Three-digit forms are
    /// expanded by doubling each digit. Anything after the sixth digit (such as an
    /// alpha channel) is ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use figma_token_sync::models::FigmaColor;
    ///
    /// let color = FigmaColor::from_hex("#ff0000");
    /// assert_eq!(color, FigmaColor::new(1.0, 0.0, 0.0));
    ///
    /// assert_eq!(FigmaColor::from_hex("#abc"), FigmaColor::from_hex("#aabbcc"));
    /// ```
    #[must_use]
    pub fn from_hex(hex: &str) -> Self {
        let hex = hex.strip_prefix('#').unwrap_or(hex).trim();

        let expanded: String = if hex.chars().count() == 3 {
            hex.chars().flat_map(|c| [c, c]).collect()
        } else {
            hex.to_string()
        };
        let digits: Vec<char> = expanded.chars().collect();

        Self {
            r: channel(&digits, 0),
            g: channel(&digits, 2),
            b: channel(&digits, 4),
        }
    }

    /// Returns true if every channel holds a real number.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !(self.r.is_nan() || self.g.is_nan() || self.b.is_nan())
    }
}

/// Reads the two-digit hex channel starting at `start`, normalized by 255.
///
/// Only the leading hex digits of the slice count, so "f" and "fz" both read as 15.
fn channel(digits: &[char], start: usize) -> f64 {
    let end = (start + 2).min(digits.len());
    let slice = digits.get(start..end).unwrap_or_default();

    let mut value: Option<u32> = None;
    for c in slice {
        match c.to_digit(16) {
            Some(d) => value = Some(value.unwrap_or(0) * 16 + d),
            None => break,
        }
    }

    value.map_or(f64::NAN, |v| f64::from(v) / 255.0)
}

impl fmt::Display for FigmaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
