//! Contrast command: WCAG contrast between two colors.

use crate::cli::common::{print_json, CliError, CliResult, GlobalOptions};
use crate::color::{contrast, ContrastLevel, ContrastResult};
use clap::{Args, ValueEnum};
use serde::Serialize;

/// Minimum conformance level to require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MinimumLevel {
    /// Ratio of at least 4.5
    Aa,
    /// Ratio of at least 7
    Aaa,
}

impl MinimumLevel {
    fn is_met_by(self, level: ContrastLevel) -> bool {
        match self {
            Self::Aa => matches!(level, ContrastLevel::Aa | ContrastLevel::Aaa),
            Self::Aaa => level == ContrastLevel::Aaa,
        }
    }
}

/// Compute the contrast ratio between a foreground and a background color
#[derive(Debug, Clone, Args)]
pub struct ContrastArgs {
    /// Foreground (text) color
    #[arg(value_name = "FOREGROUND")]
    pub foreground: String,

    /// Background color
    #[arg(value_name = "BACKGROUND")]
    pub background: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero unless this level is met
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub min: Option<MinimumLevel>,
}

#[derive(Serialize)]
struct ContrastOutput<'a> {
    foreground: &'a str,
    background: &'a str,
    resolver: &'static str,
    #[serde(flatten)]
    result: ContrastResult,
}

impl ContrastArgs {
    /// Execute the contrast command
    pub fn execute(&self, global: &GlobalOptions) -> CliResult<()> {
        let resolver = global.build_resolver();
        let result = contrast(&self.foreground, &self.background, resolver.as_ref());

        if self.json {
            print_json(&ContrastOutput {
                foreground: &self.foreground,
                background: &self.background,
                resolver: resolver.name(),
                result,
            })?;
        } else {
            match result.ratio {
                Some(ratio) => println!("Contrast ratio: {ratio:.2}:1 ({})", result.level),
                None => println!(
                    "Contrast ratio: unavailable ({} resolver could not resolve both colors)",
                    resolver.name()
                ),
            }
        }

        if let Some(min) = self.min {
            if result.ratio.is_none() {
                return Err(CliError::validation("Colors could not be resolved to RGB"));
            }
            if !min.is_met_by(result.level) {
                return Err(CliError::validation(format!(
                    "Contrast level {} does not meet {}",
                    result.level,
                    match min {
                        MinimumLevel::Aa => "AA",
                        MinimumLevel::Aaa => "AAA",
                    }
                )));
            }
        }

        Ok(())
    }
}
