//! Named preset tables for card styling.
//!
//! Every table is a closed enum so that lookups by name are exhaustive and
//! the public configuration surface can be listed (see the `presets` CLI
//! command). Shadow and animation presets also drive [`resolve_shadow`] and
//! [`resolve_animation`].

use crate::models::PropValue;
use serde::Serialize;

/// Defines a preset enum with a stable token name and a value per variant.
macro_rules! preset_table {
    (
        $(#[$meta:meta])*
        $name:ident: $value_ty:ty {
            $($(#[$vmeta:meta])* $variant:ident => $token:literal = $value:expr,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl $name {
            /// All presets in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Token used to select this preset.
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }

            /// Concrete value of this preset.
            #[must_use]
            pub const fn value(self) -> $value_ty {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            /// Looks a preset up by its token (exact, case-sensitive).
            #[must_use]
            pub fn from_name(token: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|preset| preset.name() == token)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

/// A pair of gradient endpoint colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GradientStops {
    /// Start color
    pub from: &'static str,
    /// End color
    pub to: &'static str,
}

preset_table! {
    /// Gradient themes.
    GradientPreset: GradientStops {
        /// Pink to blue
        Sunset => "sunset" = GradientStops { from: "#ff6ec7", to: "#4facfe" },
        /// Blue to violet
        Ocean => "ocean" = GradientStops { from: "#667eea", to: "#764ba2" },
        /// Teal to green
        Forest => "forest" = GradientStops { from: "#11998e", to: "#38ef7d" },
        /// Coral to pink
        Fire => "fire" = GradientStops { from: "#ff9a9e", to: "#fecfef" },
        /// Mint to blush
        Purple => "purple" = GradientStops { from: "#a8edea", to: "#fed6e3" },
    }
}

preset_table! {
    /// Border width tokens in px.
    BorderWidthPreset: f64 {
        /// 1px
        Thin => "thin" = 1.0,
        /// 2px
        Normal => "normal" = 2.0,
        /// 4px
        Thick => "thick" = 4.0,
        /// 8px
        ExtraThick => "extra_thick" = 8.0,
    }
}

preset_table! {
    /// Border radius tokens.
    BorderRadiusPreset: &'static str {
        /// Square corners
        None => "none" = "0",
        /// 0.25rem
        Small => "small" = "0.25rem",
        /// 0.5rem
        Normal => "normal" = "0.5rem",
        /// 1rem
        Medium => "medium" = "1rem",
        /// 1.5rem
        Large => "large" = "1.5rem",
        /// 2rem
        ExtraLarge => "extra_large" = "2rem",
        /// Pill / circle
        Full => "full" = "50%",
    }
}

preset_table! {
    /// Inner padding tokens.
    PaddingPreset: &'static str {
        /// No padding
        None => "none" = "0",
        /// 0.5rem
        Small => "small" = "0.5rem",
        /// 1rem
        Normal => "normal" = "1rem",
        /// 1.5rem
        Medium => "medium" = "1.5rem",
        /// 2rem
        Large => "large" = "2rem",
        /// 3rem
        ExtraLarge => "extra_large" = "3rem",
    }
}

preset_table! {
    /// Box shadow presets.
    ShadowPreset: &'static str {
        /// Subtle elevation
        Small => "small" = "0 2px 4px rgba(0,0,0,0.05), 0 1px 2px rgba(0,0,0,0.1)",
        /// Card elevation
        Medium => "medium" = "0 4px 8px rgba(0,0,0,0.08), 0 2px 4px rgba(0,0,0,0.06)",
        /// Default card shadow
        Large => "large" = "0 10px 25px rgba(0,0,0,0.1), 0 4px 6px rgba(0,0,0,0.05)",
        /// Floating elevation
        ExtraLarge => "extra_large" = "0 20px 40px rgba(0,0,0,0.15), 0 8px 16px rgba(0,0,0,0.1)",
    }
}

preset_table! {
    /// Hover/transition class sets.
    AnimationPreset: &'static str {
        /// Grow slightly on hover
        Scale => "scale" = "transition-all duration-300 hover:scale-105",
        /// Rise on hover
        Lift => "lift" = "transition-all duration-300 hover:-translate-y-2 hover:shadow-lg",
        /// Colored glow on hover
        Glow => "glow" = "transition-all duration-300 hover:shadow-2xl hover:shadow-pink-500/25",
        /// Slight tilt on hover
        Rotate => "rotate" = "transition-all duration-300 hover:rotate-1",
        /// Grow and pulse
        Pulse => "pulse" = "transition-all duration-300 hover:scale-105 animate-pulse",
        /// Slow eased transition for focus styling
        Focus => "focus" = "transition-all duration-500 ease-in-out",
    }
}

/// Token that disables shadows and animations.
const NONE_TOKEN: &str = "none";

/// Parsed shadow configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShadowSpec {
    /// `false` or `"none"`
    Disabled,
    /// A named preset; `true` selects [`ShadowPreset::Large`].
    Preset(ShadowPreset),
    /// A raw `box-shadow` value, passed through verbatim.
    Custom(String),
}

impl ShadowSpec {
    /// Interprets an untrusted prop value.
    ///
    /// Values that are neither booleans nor strings fall back to the default
    /// `large` shadow.
    #[must_use]
    pub fn from_prop(value: &PropValue) -> Self {
        match value {
            PropValue::Bool(false) => Self::Disabled,
            PropValue::Bool(true) => Self::Preset(ShadowPreset::Large),
            PropValue::Text(s) if s == NONE_TOKEN => Self::Disabled,
            PropValue::Text(s) => {
                ShadowPreset::from_name(s).map_or_else(|| Self::Custom(s.clone()), Self::Preset)
            }
            _ => Self::Preset(ShadowPreset::Large),
        }
    }

    /// The `box-shadow` value; empty means no shadow.
    #[must_use]
    pub fn css(&self) -> String {
        match self {
            Self::Disabled => String::new(),
            Self::Preset(preset) => preset.value().to_string(),
            Self::Custom(raw) => raw.clone(),
        }
    }
}

/// Parsed animation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationSpec {
    /// `false` or `"none"`
    Disabled,
    /// A named preset; `true` selects [`AnimationPreset::Scale`].
    Preset(AnimationPreset),
    /// A raw class/utility string, passed through verbatim.
    Custom(String),
}

impl AnimationSpec {
    /// Interprets an untrusted prop value.
    ///
    /// Values that are neither booleans nor strings disable animation.
    #[must_use]
    pub fn from_prop(value: &PropValue) -> Self {
        match value {
            PropValue::Bool(true) => Self::Preset(AnimationPreset::Scale),
            PropValue::Text(s) if s == NONE_TOKEN => Self::Disabled,
            PropValue::Text(s) => {
                AnimationPreset::from_name(s).map_or_else(|| Self::Custom(s.clone()), Self::Preset)
            }
            _ => Self::Disabled,
        }
    }

    /// The class list; empty means no animation.
    #[must_use]
    pub fn classes(&self) -> String {
        match self {
            Self::Disabled => String::new(),
            Self::Preset(preset) => preset.value().to_string(),
            Self::Custom(raw) => raw.clone(),
        }
    }
}

/// Resolves a shadow prop to a `box-shadow` value (empty string = no shadow).
#[must_use]
pub fn resolve_shadow(spec: &PropValue) -> String {
    ShadowSpec::from_prop(spec).css()
}

/// Resolves an animation prop to a class list (empty string = no animation).
#[must_use]
pub fn resolve_animation(spec: &PropValue) -> String {
    AnimationSpec::from_prop(spec).classes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_shadow() {
        assert_eq!(resolve_shadow(&false.into()), "");
        assert_eq!(resolve_shadow(&"none".into()), "");
        assert_eq!(resolve_shadow(&true.into()), ShadowPreset::Large.value());
        assert_eq!(resolve_shadow(&"small".into()), ShadowPreset::Small.value());
        assert_eq!(resolve_shadow(&"extra_large".into()), ShadowPreset::ExtraLarge.value());
        assert_eq!(resolve_shadow(&"0 1px 1px red".into()), "0 1px 1px red");
    }

    #[test]
    fn test_shadow_values_are_exact() {
        assert_eq!(
            ShadowPreset::Small.value(),
            "0 2px 4px rgba(0,0,0,0.05), 0 1px 2px rgba(0,0,0,0.1)"
        );
        assert_eq!(
            ShadowPreset::Medium.value(),
            "0 4px 8px rgba(0,0,0,0.08), 0 2px 4px rgba(0,0,0,0.06)"
        );
        assert_eq!(
            ShadowPreset::Large.value(),
            "0 10px 25px rgba(0,0,0,0.1), 0 4px 6px rgba(0,0,0,0.05)"
        );
        assert_eq!(
            ShadowPreset::ExtraLarge.value(),
            "0 20px 40px rgba(0,0,0,0.15), 0 8px 16px rgba(0,0,0,0.1)"
        );
    }

    #[test]
    fn test_resolve_shadow_non_string_falls_back_to_large() {
        assert_eq!(resolve_shadow(&PropValue::Null), ShadowPreset::Large.value());
        assert_eq!(resolve_shadow(&PropValue::Number(3.0)), ShadowPreset::Large.value());
    }

    #[test]
    fn test_resolve_animation() {
        assert_eq!(resolve_animation(&false.into()), "");
        assert_eq!(resolve_animation(&"none".into()), "");
        assert_eq!(resolve_animation(&true.into()), AnimationPreset::Scale.value());
        for preset in AnimationPreset::ALL {
            assert_eq!(resolve_animation(&preset.name().into()), preset.value());
        }
        assert_eq!(
            resolve_animation(&"my-anim hover:opacity-80".into()),
            "my-anim hover:opacity-80"
        );
        assert_eq!(resolve_animation(&PropValue::Undefined), "");
    }

    #[test]
    fn test_preset_keys_are_exact() {
        assert!(ShadowPreset::from_name("Small").is_none());
        assert!(AnimationPreset::from_name("bounce").is_none());
        assert_eq!(
            AnimationPreset::ALL.iter().map(|p| p.name()).collect::<Vec<_>>(),
            vec!["scale", "lift", "glow", "rotate", "pulse", "focus"]
        );
    }

    #[test]
    fn test_static_tables() {
        assert_eq!(GradientPreset::Ocean.value().from, "#667eea");
        assert!((BorderWidthPreset::ExtraThick.value() - 8.0).abs() < f64::EPSILON);
        assert_eq!(BorderRadiusPreset::Full.value(), "50%");
        assert_eq!(PaddingPreset::ExtraLarge.value(), "3rem");
        assert_eq!(GradientPreset::ALL.len(), 5);
        assert_eq!(BorderRadiusPreset::ALL.len(), 7);
    }
}
