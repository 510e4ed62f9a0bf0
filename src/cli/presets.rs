//! Presets command: list the named preset tables.

use crate::cli::common::{print_json, CliResult};
use crate::presets::{
    AnimationPreset, BorderRadiusPreset, BorderWidthPreset, GradientPreset, PaddingPreset,
    ShadowPreset,
};
use clap::{Args, ValueEnum};
use serde_json::{json, Map, Value};

/// A preset table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetKind {
    /// Gradient themes
    Gradient,
    /// Border width tokens
    BorderWidth,
    /// Border radius tokens
    BorderRadius,
    /// Padding tokens
    Padding,
    /// Box shadow presets
    Shadow,
    /// Animation class sets
    Animation,
}

impl PresetKind {
    const ALL: [Self; 6] = [
        Self::Gradient,
        Self::BorderWidth,
        Self::BorderRadius,
        Self::Padding,
        Self::Shadow,
        Self::Animation,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Gradient => "gradient",
            Self::BorderWidth => "border_width",
            Self::BorderRadius => "border_radius",
            Self::Padding => "padding",
            Self::Shadow => "shadow",
            Self::Animation => "animation",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Gradient => "Gradients",
            Self::BorderWidth => "Border widths",
            Self::BorderRadius => "Border radii",
            Self::Padding => "Paddings",
            Self::Shadow => "Shadows",
            Self::Animation => "Animations",
        }
    }

    /// `(name, display value, JSON value)` for every preset in the table.
    fn entries(self) -> Vec<(&'static str, String, Value)> {
        fn text(name: &'static str, value: &'static str) -> (&'static str, String, Value) {
            (name, value.to_string(), json!(value))
        }

        match self {
            Self::Gradient => GradientPreset::ALL
                .iter()
                .map(|p| {
                    let stops = p.value();
                    (p.name(), format!("{} → {}", stops.from, stops.to), json!(stops))
                })
                .collect(),
            Self::BorderWidth => BorderWidthPreset::ALL
                .iter()
                .map(|p| (p.name(), format!("{}px", p.value()), json!(p.value())))
                .collect(),
            Self::BorderRadius => BorderRadiusPreset::ALL
                .iter()
                .map(|p| text(p.name(), p.value()))
                .collect(),
            Self::Padding => PaddingPreset::ALL
                .iter()
                .map(|p| text(p.name(), p.value()))
                .collect(),
            Self::Shadow => ShadowPreset::ALL
                .iter()
                .map(|p| text(p.name(), p.value()))
                .collect(),
            Self::Animation => AnimationPreset::ALL
                .iter()
                .map(|p| text(p.name(), p.value()))
                .collect(),
        }
    }
}

/// List the named preset tables
#[derive(Debug, Clone, Args)]
pub struct PresetsArgs {
    /// Only list this table
    #[arg(value_enum)]
    pub kind: Option<PresetKind>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl PresetsArgs {
    /// Execute the presets command
    pub fn execute(&self) -> CliResult<()> {
        let kinds: Vec<PresetKind> =
            self.kind.map_or_else(|| PresetKind::ALL.to_vec(), |kind| vec![kind]);

        if self.json {
            let mut tables = Map::new();
            for kind in &kinds {
                let table: Map<String, Value> = kind
                    .entries()
                    .into_iter()
                    .map(|(name, _, value)| (name.to_string(), value))
                    .collect();
                tables.insert(kind.key().to_string(), Value::Object(table));
            }
            return print_json(&Value::Object(tables));
        }

        for (idx, kind) in kinds.iter().enumerate() {
            if idx > 0 {
                println!();
            }
            println!("{}:", kind.title());
            let entries = kind.entries();
            let width = entries.iter().map(|(name, _, _)| name.len()).max().unwrap_or(0);
            for (name, display, _) in entries {
                println!("  {name:<width$}  {display}");
            }
        }

        Ok(())
    }
}
