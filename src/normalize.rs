//! Normalization of untrusted card props into guaranteed-valid values.
//!
//! Every normalizer is total: it returns either the input (possibly
//! rewritten, e.g. `"20"` → `"20px"`) or the caller's default, and reports a
//! diagnostic whenever it had to intervene.

use crate::color::ColorResolver;
use crate::compose::CompositionError;
use crate::constants::{
    DEFAULT_BACKGROUND, DEFAULT_BORDER_RADIUS, DEFAULT_BORDER_WIDTH, DEFAULT_GRADIENT_FROM,
    DEFAULT_GRADIENT_TO, DEFAULT_PADDING, MAX_BORDER_WIDTH, MIN_BORDER_WIDTH,
};
use crate::diagnostics::{Diagnostic, DiagnosticKind, DiagnosticsReporter};
use crate::models::PropValue;
use crate::validators::{
    is_bare_integer, is_valid_border_width, is_valid_color, is_valid_css_length,
};
use serde::Serialize;

/// Returns `input` if it is a valid color, otherwise `default`.
///
/// Only non-empty strings are considered; anything else is reported and replaced.
pub fn normalize_color(
    input: &PropValue,
    default: &str,
    field: &str,
    resolver: &dyn ColorResolver,
    reporter: &dyn DiagnosticsReporter,
) -> String {
    let color = match input.as_text() {
        Some(color) if !color.is_empty() => color,
        _ => {
            reporter.report(&Diagnostic::warn(
                DiagnosticKind::InvalidInput,
                field,
                format!("Invalid {field}: {input}, using default value {default}"),
            ));
            return default.to_string();
        }
    };

    if !is_valid_color(input, resolver) {
        reporter.report(&Diagnostic::warn(
            DiagnosticKind::InvalidInput,
            field,
            format!("Invalid {field} format: {color}, using default value {default}"),
        ));
        return default.to_string();
    }

    color.to_string()
}

/// Returns `input` as a CSS length, or `default`.
///
/// Bare integers get a `px` suffix.
pub fn normalize_length(
    input: &PropValue,
    default: &str,
    field: &str,
    reporter: &dyn DiagnosticsReporter,
) -> String {
    let value = match input.as_text() {
        Some(value) if !value.is_empty() => value,
        _ => {
            reporter.report(&Diagnostic::warn(
                DiagnosticKind::InvalidInput,
                field,
                format!("Invalid {field}: {input}, using default value {default}"),
            ));
            return default.to_string();
        }
    };

    if !is_valid_css_length(value) {
        reporter.report(&Diagnostic::warn(
            DiagnosticKind::InvalidInput,
            field,
            format!("Invalid {field} format: {value}, using default value {default}"),
        ));
        return default.to_string();
    }

    if is_bare_integer(value) {
        return format!("{value}px");
    }

    value.to_string()
}

/// Normalizes a border radius, defaulting to `1rem`.
pub fn normalize_border_radius(input: &PropValue, reporter: &dyn DiagnosticsReporter) -> String {
    normalize_length(input, DEFAULT_BORDER_RADIUS, "borderRadius", reporter)
}

/// Normalizes inner padding, defaulting to `1.5rem`.
pub fn normalize_padding(input: &PropValue, reporter: &dyn DiagnosticsReporter) -> String {
    normalize_length(input, DEFAULT_PADDING, "padding", reporter)
}

/// Clamps a border width into `[0.5, 50]`; non-finite or non-numeric input yields `2`.
///
/// Invalid input and clamping are reported separately and never both.
#[allow(clippy::float_cmp)]
pub fn normalize_border_width(input: &PropValue, reporter: &dyn DiagnosticsReporter) -> f64 {
    let width = match input.as_number() {
        Some(width) if is_valid_border_width(input) => width,
        _ => {
            reporter.report(&Diagnostic::warn(
                DiagnosticKind::InvalidInput,
                "borderWidth",
                format!(
                    "Invalid border width: {input}, using default value {DEFAULT_BORDER_WIDTH}"
                ),
            ));
            return DEFAULT_BORDER_WIDTH;
        }
    };

    let normalized = width.clamp(MIN_BORDER_WIDTH, MAX_BORDER_WIDTH);

    if normalized != width {
        reporter.report(&Diagnostic::warn(
            DiagnosticKind::Clamped,
            "borderWidth",
            format!("Border width {width} was clamped to {normalized}"),
        ));
    }

    normalized
}

/// The normalized visual props a card is composed from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedProps {
    /// Gradient start color
    pub gradient_from: String,
    /// Gradient end color
    pub gradient_to: String,
    /// Border width in px, within `[0.5, 50]`
    pub border_width: f64,
    /// Outer radius
    pub border_radius: String,
    /// Inner padding
    pub padding: String,
    /// Inner surface color
    pub background: String,
}

impl ValidatedProps {
    /// Checks the invariants every normalizer guarantees.
    pub fn check(&self) -> Result<(), CompositionError> {
        let violated = |field: &str, value: String| CompositionError::InvariantViolated {
            field: field.to_string(),
            value,
        };

        if !self.border_width.is_finite()
            || !(MIN_BORDER_WIDTH..=MAX_BORDER_WIDTH).contains(&self.border_width)
        {
            return Err(violated("borderWidth", self.border_width.to_string()));
        }
        if !is_valid_css_length(&self.border_radius) {
            return Err(violated("borderRadius", self.border_radius.clone()));
        }
        if !is_valid_css_length(&self.padding) {
            return Err(violated("padding", self.padding.clone()));
        }
        for (field, color) in [
            ("gradientFrom", &self.gradient_from),
            ("gradientTo", &self.gradient_to),
            ("background", &self.background),
        ] {
            if color.trim().is_empty() {
                return Err(violated(field, color.clone()));
            }
        }
        Ok(())
    }
}

impl Default for ValidatedProps {
    /// The full set of hard-coded defaults.
    fn default() -> Self {
        Self {
            gradient_from: DEFAULT_GRADIENT_FROM.to_string(),
            gradient_to: DEFAULT_GRADIENT_TO.to_string(),
            border_width: DEFAULT_BORDER_WIDTH,
            border_radius: DEFAULT_BORDER_RADIUS.to_string(),
            padding: DEFAULT_PADDING.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}
