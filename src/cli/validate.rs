//! Validation command for card props files.

use crate::accessibility::CardHandlers;
use crate::cli::common::{print_json, read_props, CliError, CliResult, GlobalOptions};
use crate::diagnostics::{Diagnostic, DiagnosticsReport};
use crate::normalize::ValidatedProps;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate card props and report what would be replaced or clamped
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to a JSON or TOML props file, or `-` for stdin
    #[arg(short, long, value_name = "FILE")]
    pub props: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,

    /// Treat warnings as errors (exit non-zero)
    #[arg(long)]
    pub strict: bool,
}

/// JSON response for `validate --json`.
#[derive(Debug, Serialize)]
struct ValidationResponse<'a> {
    valid: bool,
    resolver: &'static str,
    errors: &'a [Diagnostic],
    warnings: &'a [Diagnostic],
    props: &'a ValidatedProps,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, global: &GlobalOptions) -> CliResult<()> {
        let props = read_props(&self.props)?;
        let (composer, reporter) = global.composer();
        let card = composer.compose(&props, &CardHandlers::default());
        let report = DiagnosticsReport::from_diagnostics(reporter.take());

        if self.json {
            print_json(&ValidationResponse {
                valid: report.is_valid(),
                resolver: composer.resolver().name(),
                errors: &report.errors,
                warnings: &report.warnings,
                props: &card.props,
            })?;
        } else {
            if report.is_valid() {
                println!("✓ Validation passed");
            } else {
                println!("✗ Validation failed");
            }

            let details = report.format_message();
            if !details.is_empty() {
                println!();
                print!("{details}");
            }
        }

        if !report.is_valid() {
            return Err(CliError::validation("Validation failed"));
        }

        if self.strict && !report.warnings.is_empty() {
            return Err(CliError::validation("Warnings found in strict mode"));
        }

        Ok(())
    }
}
