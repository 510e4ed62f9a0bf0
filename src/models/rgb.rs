//! RGB color handling with hex parsing and luminance.

// Allow small types passed by reference for API consistency
#![allow(clippy::trivially_copy_pass_by_ref)]

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color value with hex string representation.
///
/// Represents a color using red, green, and blue channels (0-255 each).
/// Alpha is not tracked; contrast is computed on opaque channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RgbColor {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses an `RgbColor` from a CSS hex string.
    ///
    /// Supports "#RGB" and "#RRGGBB" (case-insensitive). The leading `#` is required,
    /// matching CSS syntax.
    ///
    /// # Examples
    ///
    /// ```
    /// use gradient_card::models::RgbColor;
    ///
    /// let color = RgbColor::from_hex("#FF0000").unwrap();
    /// assert_eq!(color, RgbColor::new(255, 0, 0));
    ///
    /// let color = RgbColor::from_hex("#0f0").unwrap();
    /// assert_eq!(color, RgbColor::new(0, 255, 0));
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a 3 or 6 digit hex color.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let hex = hex.trim();
        let digits = hex
            .strip_prefix('#')
            .with_context(|| format!("Hex color '{hex}' must start with '#'"))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Invalid hex digits in color '{hex}'");
        }

        match digits.len() {
            3 => {
                let channel = |i: usize| -> Result<u8> {
                    let v = u8::from_str_radix(&digits[i..=i], 16)
                        .with_context(|| format!("Invalid channel in hex color '{hex}'"))?;
                    Ok(v * 17)
                };
                Ok(Self::new(channel(0)?, channel(1)?, channel(2)?))
            }
            6 => {
                let r = u8::from_str_radix(&digits[0..2], 16)
                    .context(format!("Invalid red channel in hex color '{hex}'"))?;
                let g = u8::from_str_radix(&digits[2..4], 16)
                    .context(format!("Invalid green channel in hex color '{hex}'"))?;
                let b = u8::from_str_radix(&digits[4..6], 16)
                    .context(format!("Invalid blue channel in hex color '{hex}'"))?;
                Ok(Self::new(r, g, b))
            }
            n => anyhow::bail!(
                "Invalid hex color format '{hex}'. Expected 3 or 6 hex digits, got {n}"
            ),
        }
    }

    /// Converts the color to a lowercase "#rrggbb" hex string, as CSS serializes it.
    ///
    /// ```
    /// use gradient_card::models::RgbColor;
    ///
    /// assert_eq!(RgbColor::new(0, 128, 255).to_hex(), "#0080ff");
    /// ```
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// WCAG relative luminance in `[0, 1]`.
    ///
    /// Each channel is normalized to `[0, 1]` and linearized with
    /// `c <= 0.03928 ? c / 12.92 : ((c + 0.055) / 1.055)^2.4`, then weighted
    /// `0.2126 R + 0.7152 G + 0.0722 B`.
    #[must_use]
    pub fn relative_luminance(&self) -> f64 {
        fn linearize(channel: u8) -> f64 {
            let c = f64::from(channel) / 255.0;
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }

        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default color is white (#ffffff).
    fn default() -> Self {
        Self::new(255, 255, 255)
    }
}
