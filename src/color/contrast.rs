//! WCAG 2.1 color contrast analysis.
//!
//! See: https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio

use super::resolver::ColorResolver;
use crate::constants::{WCAG_AAA_RATIO, WCAG_AA_RATIO};
use crate::models::RgbColor;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Conformance level reached by a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ContrastLevel {
    /// Below 4.5:1, or unresolvable
    #[serde(rename = "fail")]
    Fail,
    /// At least 4.5:1
    #[serde(rename = "AA")]
    Aa,
    /// At least 7:1
    #[serde(rename = "AAA")]
    Aaa,
}

impl ContrastLevel {
    /// Classifies a ratio: `>= 7` is AAA, `>= 4.5` is AA, anything else fails.
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        if ratio >= WCAG_AAA_RATIO {
            Self::Aaa
        } else if ratio >= WCAG_AA_RATIO {
            Self::Aa
        } else {
            Self::Fail
        }
    }
}

impl fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fail => write!(f, "fail"),
            Self::Aa => write!(f, "AA"),
            Self::Aaa => write!(f, "AAA"),
        }
    }
}

/// Outcome of a contrast check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastResult {
    /// Contrast ratio in `[1, 21]`; `None` when either color could not be resolved
    pub ratio: Option<f64>,
    /// True when the ratio meets AA
    pub is_valid: bool,
    /// Conformance level
    pub level: ContrastLevel,
}

impl ContrastResult {
    /// Result for colors that could not be resolved to RGB.
    pub const UNRESOLVED: Self = Self {
        ratio: None,
        is_valid: false,
        level: ContrastLevel::Fail,
    };

    /// Builds a result from a computed ratio.
    #[must_use]
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio: Some(ratio),
            is_valid: ratio >= WCAG_AA_RATIO,
            level: ContrastLevel::classify(ratio),
        }
    }
}

/// Contrast ratio between two colors: `(L_lighter + 0.05) / (L_darker + 0.05)`.
#[must_use]
pub fn contrast_ratio(a: RgbColor, b: RgbColor) -> f64 {
    let l1 = a.relative_luminance();
    let l2 = b.relative_luminance();
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

/// Checks the contrast between a foreground and a background color string.
///
/// Diagnostic only: callers decide whether to warn about a failing result.
#[must_use]
pub fn contrast(
    foreground: &str,
    background: &str,
    resolver: &dyn ColorResolver,
) -> ContrastResult {
    match (resolver.to_rgb(foreground), resolver.to_rgb(background)) {
        (Some(fg), Some(bg)) => ContrastResult::from_ratio(contrast_ratio(fg, bg)),
        _ => ContrastResult::UNRESOLVED,
    }
}
