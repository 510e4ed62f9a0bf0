//! Compose command: resolve a card's styles from a props file.

use crate::accessibility::CardHandlers;
use crate::cli::common::{print_json, read_props, CliError, CliResult, GlobalOptions};
use crate::compose::{ContentSlot, ResolvedCard};
use crate::diagnostics::Diagnostic;
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Output format for a composed card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ComposeFormat {
    /// The resolved card and its diagnostics as JSON
    #[default]
    Json,
    /// CSS rules for the outer and inner containers
    Css,
}

/// Compose a card from props and print the resolved styles
#[derive(Debug, Clone, Args)]
pub struct ComposeArgs {
    /// Path to a JSON or TOML props file, or `-` for stdin
    #[arg(short, long, value_name = "FILE")]
    pub props: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = ComposeFormat::Json)]
    pub format: ComposeFormat,

    /// Exit non-zero when any diagnostic was emitted
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize)]
struct ComposeOutput<'a> {
    card: &'a ResolvedCard,
    diagnostics: &'a [Diagnostic],
}

impl ComposeArgs {
    /// Execute the compose command
    pub fn execute(&self, global: &GlobalOptions) -> CliResult<()> {
        let props = read_props(&self.props)?;
        let (composer, reporter) = global.composer();
        let card = composer.compose(&props, &CardHandlers::default());
        let diagnostics = reporter.take();

        match self.format {
            ComposeFormat::Json => print_json(&ComposeOutput {
                card: &card,
                diagnostics: &diagnostics,
            })?,
            ComposeFormat::Css => print!("{}", render_css(&card)),
        }

        if self.strict && !diagnostics.is_empty() {
            return Err(CliError::validation(format!(
                "{} diagnostics emitted in strict mode",
                diagnostics.len()
            )));
        }

        Ok(())
    }
}

/// Renders a card as two CSS rules plus its class list.
fn render_css(card: &ResolvedCard) -> String {
    let mut css = format!(
        ".gradient-card {{ {} }}\n.gradient-card__inner {{ {} }}\n",
        card.styles.outer_frame.to_css(),
        card.styles.inner_surface.to_css()
    );
    if !card.class_name.is_empty() {
        let _ = writeln!(css, "/* classes: {} */", card.class_name);
    }
    if let ContentSlot::Placeholder { text, .. } = &card.content {
        let _ = writeln!(css, "/* content: {text} */");
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::CardComposer;
    use crate::models::CardProps;

    #[test]
    fn test_render_css() {
        let card = CardComposer::default().compose(
            &CardProps::default().shadow(false).animated("pulse"),
            &CardHandlers::default(),
        );
        let css = render_css(&card);
        assert!(css.starts_with(concat!(
            ".gradient-card { background: linear-gradient(135deg, #ff6ec7, #4facfe); ",
            "padding: 2px; border-radius: 1rem; }"
        )));
        assert!(css.contains(
            ".gradient-card__inner { background: white; border-radius: calc(1rem - 2px);"
        ));
        assert!(css.contains(
            "/* classes: transition-all duration-300 hover:scale-105 animate-pulse */"
        ));
        assert!(css.contains("/* content: No content */"));
    }
}
