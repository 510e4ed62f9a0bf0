//! Pluggable color resolution strategies.
//!
//! Normalizers and the contrast analyzer only talk to [`ColorResolver`].
//! [`ComputedResolver`] is authoritative and parses the full color grammar
//! supported by [`super::css`]; [`PatternResolver`] is the surface-less
//! fallback that validates by pattern and only resolves hex to RGB.

use super::{css, named};
use crate::models::RgbColor;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Decides whether a string is a color and what RGB value it resolves to.
pub trait ColorResolver: Send + Sync {
    /// Short name for logs and CLI output.
    fn name(&self) -> &'static str;

    /// Returns true if `color` is an acceptable CSS color.
    fn is_valid(&self, color: &str) -> bool;

    /// Resolves `color` to RGB, or `None` when this resolver cannot.
    fn to_rgb(&self, color: &str) -> Option<RgbColor>;
}

/// Resolves colors by fully computing them, the way a rendering surface does.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputedResolver;

impl ColorResolver for ComputedResolver {
    fn name(&self) -> &'static str {
        "computed"
    }

    fn is_valid(&self, color: &str) -> bool {
        css::is_css_color(color)
    }

    fn to_rgb(&self, color: &str) -> Option<RgbColor> {
        css::parse_css_color(color)
    }
}

static COLOR_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})|(?:rgba?|hsla?)\(.*\)|(?P<ident>[a-zA-Z]+))$",
    )
    .expect("color pattern is a valid regex")
});

static HEX_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex pattern is a valid regex")
});

/// Validates colors by pattern, without computing them.
///
/// Accepts 3/6 digit hex, `rgb(`/`rgba(`/`hsl(`/`hsla(` functional notation, and a
/// bare identifier when it is a known color keyword. Only hex resolves to RGB.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternResolver;

impl ColorResolver for PatternResolver {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn is_valid(&self, color: &str) -> bool {
        let color = color.trim();
        match COLOR_PATTERN.captures(color) {
            Some(caps) => caps
                .name("ident")
                .map_or(true, |ident| named::is_color_keyword(ident.as_str())),
            None => false,
        }
    }

    fn to_rgb(&self, color: &str) -> Option<RgbColor> {
        let color = color.trim();
        if !HEX_PATTERN.is_match(color) {
            return None;
        }
        RgbColor::from_hex(color).ok()
    }
}

/// Which resolver a composer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverStrategy {
    /// [`ComputedResolver`]
    #[default]
    Computed,
    /// [`PatternResolver`]
    Pattern,
}

impl ResolverStrategy {
    /// Builds the resolver for this strategy.
    #[must_use]
    pub fn build(self) -> Arc<dyn ColorResolver> {
        match self {
            Self::Computed => Arc::new(ComputedResolver),
            Self::Pattern => Arc::new(PatternResolver),
        }
    }
}

impl fmt::Display for ResolverStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Computed => write!(f, "computed"),
            Self::Pattern => write!(f, "pattern"),
        }
    }
}

impl FromStr for ResolverStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "computed" => Ok(Self::Computed),
            "pattern" => Ok(Self::Pattern),
            other => anyhow::bail!(
                "Unknown resolver strategy '{other}'. Expected 'computed' or 'pattern'"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Inputs both strategies must agree on.
    const AGREED_VALID: &[&str] = &["#ff0000", "#0000ff", "white", "#000000", "#ffffff", "#fff"];
    const AGREED_INVALID: &[&str] = &["invalid-color", "another-invalid", "", "   ", "#12"];

    #[test]
    fn test_strategies_agree_on_reference_inputs() {
        let resolvers: [&dyn ColorResolver; 2] = [&ComputedResolver, &PatternResolver];
        for resolver in resolvers {
            for color in AGREED_VALID {
                assert!(resolver.is_valid(color), "{} should accept {color:?}", resolver.name());
            }
            for color in AGREED_INVALID {
                assert!(!resolver.is_valid(color), "{} should reject {color:?}", resolver.name());
            }
        }
    }

    #[test]
    fn test_pattern_functional_notation_is_prefix_checked() {
        assert!(PatternResolver.is_valid("rgb(1, 2, 3)"));
        assert!(PatternResolver.is_valid("hsla(1, 2%, 3%, 0.4)"));
        assert!(!PatternResolver.is_valid("lab(50% 40 59)"));
    }

    #[test]
    fn test_pattern_resolves_only_hex() {
        assert_eq!(PatternResolver.to_rgb("#ffffff"), Some(RgbColor::new(255, 255, 255)));
        assert_eq!(PatternResolver.to_rgb("white"), None);
        assert_eq!(PatternResolver.to_rgb("rgb(0, 0, 0)"), None);
    }

    #[test]
    fn test_computed_resolves_rich_notation() {
        assert_eq!(ComputedResolver.to_rgb("white"), Some(RgbColor::new(255, 255, 255)));
        assert_eq!(ComputedResolver.to_rgb("rgb(0, 0, 0)"), Some(RgbColor::new(0, 0, 0)));
        assert!(ComputedResolver.is_valid("#ff000080"));
    }

    #[test]
    fn test_strategy_parse() {
        assert_eq!("Pattern".parse::<ResolverStrategy>().unwrap(), ResolverStrategy::Pattern);
        assert_eq!(ResolverStrategy::default(), ResolverStrategy::Computed);
        assert!("canvas".parse::<ResolverStrategy>().is_err());
        assert_eq!(ResolverStrategy::Pattern.build().name(), "pattern");
    }
}
