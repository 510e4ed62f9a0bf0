//! Style descriptors produced for the two nested card containers.

use crate::constants::DEFAULT_GRADIENT_DIRECTION;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// A two-stop linear gradient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientConfig {
    /// Start color
    pub from: String,
    /// End color
    pub to: String,
    /// Angle in degrees
    #[serde(default = "default_direction")]
    pub direction: u16,
}

const fn default_direction() -> u16 {
    DEFAULT_GRADIENT_DIRECTION
}

impl GradientConfig {
    /// Creates a gradient at the default 135° angle.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            direction: DEFAULT_GRADIENT_DIRECTION,
        }
    }

    /// CSS `linear-gradient(...)` value.
    #[must_use]
    pub fn css(&self) -> String {
        format!("linear-gradient({}deg, {}, {})", self.direction, self.from, self.to)
    }
}

/// Style of the outer container, whose padding shows the gradient as a border.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OuterFrame {
    /// Gradient background
    pub background: String,
    /// Equal to the border width, in px
    pub padding: String,
    /// Outer radius
    pub border_radius: String,
    /// Present only when a shadow is configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    /// `pointer` for interactive cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// `none` for interactive cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    /// Caller-supplied declarations with no typed field
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

impl OuterFrame {
    /// Merges caller overrides; a key naming a typed property replaces it.
    ///
    /// Keys may be camelCase (`boxShadow`) or kebab-case (`box-shadow`).
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<String, String>) {
        for (property, value) in overrides {
            let slot = match to_kebab_case(property).as_str() {
                "background" => {
                    self.background.clone_from(value);
                    continue;
                }
                "padding" => {
                    self.padding.clone_from(value);
                    continue;
                }
                "border-radius" => {
                    self.border_radius.clone_from(value);
                    continue;
                }
                "box-shadow" => &mut self.box_shadow,
                "cursor" => &mut self.cursor,
                "outline" => &mut self.outline,
                _ => {
                    self.extra.insert(property.clone(), value.clone());
                    continue;
                }
            };
            *slot = Some(value.clone());
        }
    }

    /// Renders the frame as a CSS declaration list.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut declarations = vec![
            ("background".to_string(), self.background.as_str()),
            ("padding".to_string(), self.padding.as_str()),
            ("border-radius".to_string(), self.border_radius.as_str()),
        ];
        for (name, value) in [
            ("box-shadow", &self.box_shadow),
            ("cursor", &self.cursor),
            ("outline", &self.outline),
        ] {
            if let Some(value) = value {
                declarations.push((name.to_string(), value.as_str()));
            }
        }
        for (property, value) in &self.extra {
            declarations.push((to_kebab_case(property), value.as_str()));
        }
        render_declarations(&declarations)
    }
}

/// Style of the inner container that holds the content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InnerSurface {
    /// Solid background
    pub background: String,
    /// `calc({outer radius} - {border width}px)`
    pub border_radius: String,
    /// Content padding
    pub padding: String,
    /// Always `100%`
    pub width: String,
    /// Always `100%`
    pub height: String,
}

impl InnerSurface {
    /// Renders the surface as a CSS declaration list.
    #[must_use]
    pub fn to_css(&self) -> String {
        render_declarations(&[
            ("background".to_string(), self.background.as_str()),
            ("border-radius".to_string(), self.border_radius.as_str()),
            ("padding".to_string(), self.padding.as_str()),
            ("width".to_string(), self.width.as_str()),
            ("height".to_string(), self.height.as_str()),
        ])
    }
}

/// The pair of style descriptors applied to the nested containers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedStyleSet {
    /// Outer gradient frame
    pub outer_frame: OuterFrame,
    /// Inner content surface
    pub inner_surface: InnerSurface,
}

fn render_declarations(declarations: &[(String, &str)]) -> String {
    let mut css = String::new();
    for (name, value) in declarations {
        if !css.is_empty() {
            css.push(' ');
        }
        let _ = write!(css, "{name}: {value};");
    }
    css
}

fn to_kebab_case(property: &str) -> String {
    let mut kebab = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            kebab.push('-');
            kebab.push(c.to_ascii_lowercase());
        } else {
            kebab.push(c);
        }
    }
    kebab
}
