//! Card props as supplied by callers.

use super::PropValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything a caller can configure on a gradient border card.
///
/// Visual props are [`PropValue`]s because they arrive untrusted; an omitted
/// prop (`Undefined`) takes the component default without a diagnostic,
/// while an explicit invalid value is reported and replaced.
///
/// Deserializes from JSON or TOML with camelCase keys (`gradientFrom`,
/// `borderWidth`, `aria-label`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardProps {
    /// Card content; only `null`/omitted counts as empty
    #[serde(skip_serializing_if = "PropValue::is_undefined")]
    pub children: PropValue,
    /// Extra classes appended to the outer container
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    /// Inline style overrides merged last onto the outer frame
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
    /// Gradient start color (default `#ff6ec7`)
    #[serde(skip_serializing_if = "PropValue::is_undefined")]
    pub gradient_from: PropValue,
    /// Gradient end color (default `#4facfe`)
    #[serde(skip_serializing_if = "PropValue::is_undefined")]
    pub gradient_to: PropValue,
    /// Border width in px (default `2`)
    #[serde(skip_serializing_if = "PropValue::is_undefined")]
    pub border_width: PropValue,
    /// Outer radius (default `1rem`)
    #[serde(skip_serializing_if = "PropValue::is_undefined")]
    pub border_radius: PropValue,
    /// Inner padding (default `1.5rem`)
    #[serde(skip_serializing_if = "PropValue::is_undefined")]
    pub padding: PropValue,
    /// Inner surface color (default `white`)
    #[serde(skip_serializing_if = "PropValue::is_undefined")]
    pub background: PropValue,
    /// Shadow: bool, `"none"`, a preset name or raw CSS (default `true`)
    #[serde(skip_serializing_if = "PropValue::is_undefined")]
    pub shadow: PropValue,
    /// Animation: bool, `"none"`, a preset name or raw classes (default `false`)
    #[serde(skip_serializing_if = "PropValue::is_undefined")]
    pub animated: PropValue,
    /// Accessible name
    #[serde(rename = "aria-label", skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    /// Id of the describing element
    #[serde(rename = "aria-describedby", skip_serializing_if = "Option::is_none")]
    pub aria_describedby: Option<String>,
    /// ARIA role for non-interactive cards (default `region`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Explicit tab order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_index: Option<i32>,
    /// Whether the card acts as a button
    pub interactive: bool,
}

impl CardProps {
    /// Creates props with the given content and every other prop omitted.
    pub fn new(children: impl Into<PropValue>) -> Self {
        Self {
            children: children.into(),
            ..Self::default()
        }
    }

    /// Sets both gradient endpoints.
    pub fn gradient(mut self, from: impl Into<PropValue>, to: impl Into<PropValue>) -> Self {
        self.gradient_from = from.into();
        self.gradient_to = to.into();
        self
    }

    /// Sets the border width.
    pub fn border_width(mut self, width: impl Into<PropValue>) -> Self {
        self.border_width = width.into();
        self
    }

    /// Sets the outer radius.
    pub fn border_radius(mut self, radius: impl Into<PropValue>) -> Self {
        self.border_radius = radius.into();
        self
    }

    /// Sets the inner padding.
    pub fn padding(mut self, padding: impl Into<PropValue>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the inner surface color.
    pub fn background(mut self, background: impl Into<PropValue>) -> Self {
        self.background = background.into();
        self
    }

    /// Sets the shadow.
    pub fn shadow(mut self, shadow: impl Into<PropValue>) -> Self {
        self.shadow = shadow.into();
        self
    }

    /// Sets the animation.
    pub fn animated(mut self, animated: impl Into<PropValue>) -> Self {
        self.animated = animated.into();
        self
    }

    /// Marks the card as interactive.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Sets the accessible name.
    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    /// Appends caller classes.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Adds one inline style override.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_json() {
        let props: CardProps = serde_json::from_str(
            r##"{
                "children": "Hello",
                "gradientFrom": "#ff0000",
                "borderWidth": 5,
                "shadow": "small",
                "aria-label": "Promo",
                "tabIndex": 2,
                "interactive": true
            }"##,
        )
        .unwrap();

        assert_eq!(props.children, PropValue::from("Hello"));
        assert_eq!(props.gradient_from, PropValue::from("#ff0000"));
        assert_eq!(props.border_width, PropValue::Number(5.0));
        assert_eq!(props.shadow, PropValue::from("small"));
        assert_eq!(props.aria_label.as_deref(), Some("Promo"));
        assert_eq!(props.tab_index, Some(2));
        assert!(props.interactive);
        assert!(props.gradient_to.is_undefined());
    }

    #[test]
    fn test_explicit_null_is_not_undefined() {
        let props: CardProps =
            serde_json::from_str(r#"{"children": null, "background": null}"#).unwrap();
        assert_eq!(props.children, PropValue::Null);
        assert_eq!(props.background, PropValue::Null);
        assert!(props.padding.is_undefined());
    }

    #[test]
    fn test_deserialize_toml() {
        let props: CardProps = toml::from_str(
            r##"
            children = "From TOML"
            borderRadius = "20"
            animated = true

            [style]
            maxWidth = "24rem"
            "##,
        )
        .unwrap();
        assert_eq!(props.border_radius, PropValue::from("20"));
        assert_eq!(props.animated, PropValue::Bool(true));
        assert_eq!(props.style.get("maxWidth").map(String::as_str), Some("24rem"));
    }

    #[test]
    fn test_builder() {
        let props = CardProps::new("x")
            .gradient("#000", "#fff")
            .border_width(3.0)
            .interactive(true);
        assert_eq!(props.gradient_to, PropValue::from("#fff"));
        assert_eq!(props.border_width, PropValue::Number(3.0));
        assert!(props.interactive);
    }
}
