//! Diagnostics emitted while normalizing card props.
//!
//! Normalization never fails; it falls back to defaults and reports what it
//! did through a [`DiagnosticsReporter`]. Production code routes reports to
//! `tracing` via [`TracingReporter`]; tests collect them with
//! [`MemoryReporter`], and the CLI does both through [`FanoutReporter`].

// Allow format! appended to String - more readable for building messages
#![allow(clippy::format_push_string)]

use serde::Serialize;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Recoverable problem, handled locally
    Warn,
    /// Composition failed and defaults were substituted
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// What kind of fallback or advisory a diagnostic describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Malformed or missing input replaced by a default
    InvalidInput,
    /// Numeric input clamped into range
    Clamped,
    /// Background contrast below WCAG AA
    LowContrast,
    /// Normalization failed as a whole; every field took its default
    CompositionFailure,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput => write!(f, "Invalid Input"),
            Self::Clamped => write!(f, "Clamped"),
            Self::LowContrast => write!(f, "Low Contrast"),
            Self::CompositionFailure => write!(f, "Composition Failure"),
        }
    }
}

/// A single non-fatal report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity
    pub level: Level,
    /// Category
    pub kind: DiagnosticKind,
    /// Prop the report is about (e.g. `gradientFrom`)
    pub field: String,
    /// Human-readable message naming the rejected value
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning.
    pub fn warn(
        kind: DiagnosticKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level: Level::Warn,
            kind,
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates an error.
    pub fn error(
        kind: DiagnosticKind,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level: Level::Error,
            kind,
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.field, self.kind, self.message)
    }
}

/// Sink for diagnostics.
pub trait DiagnosticsReporter: Send + Sync {
    /// Records one diagnostic. Must not fail.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl DiagnosticsReporter for TracingReporter {
    fn report(&self, diagnostic: &Diagnostic) {
        let field = diagnostic.field.as_str();
        let kind = diagnostic.kind;
        match diagnostic.level {
            Level::Warn => tracing::warn!(field, %kind, "{}", diagnostic.message),
            Level::Error => tracing::error!(field, %kind, "{}", diagnostic.message),
        }
    }
}

/// Collects diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    entries: Mutex<Vec<Diagnostic>>,
}

impl MemoryReporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything reported so far.
    #[must_use]
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Removes and returns everything reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.entries.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Number of diagnostics of the given kind.
    #[must_use]
    pub fn count(&self, kind: DiagnosticKind) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|d| d.kind == kind)
            .count()
    }

    /// Returns true if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
    }
}

impl DiagnosticsReporter for MemoryReporter {
    fn report(&self, diagnostic: &Diagnostic) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}

/// Discards diagnostics.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl DiagnosticsReporter for NullReporter {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

/// Sends every diagnostic to each inner reporter in order.
#[derive(Clone, Default)]
pub struct FanoutReporter {
    reporters: Vec<Arc<dyn DiagnosticsReporter>>,
}

impl FanoutReporter {
    /// Creates a reporter forwarding to `reporters`.
    #[must_use]
    pub fn new(reporters: Vec<Arc<dyn DiagnosticsReporter>>) -> Self {
        Self { reporters }
    }
}

impl fmt::Debug for FanoutReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FanoutReporter")
            .field("reporters", &self.reporters.len())
            .finish()
    }
}

impl DiagnosticsReporter for FanoutReporter {
    fn report(&self, diagnostic: &Diagnostic) {
        for reporter in &self.reporters {
            reporter.report(diagnostic);
        }
    }
}

/// Diagnostics grouped into errors and warnings for presentation.
///
/// Invalid input and composition failures count as errors; clamps and
/// contrast shortfalls are warnings.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DiagnosticsReport {
    /// Inputs that were rejected
    pub errors: Vec<Diagnostic>,
    /// Inputs that were adjusted, and advisories
    pub warnings: Vec<Diagnostic>,
}

impl DiagnosticsReport {
    /// Groups a list of diagnostics.
    #[must_use]
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        let (errors, warnings) = diagnostics.into_iter().partition(|d| {
            matches!(
                d.kind,
                DiagnosticKind::InvalidInput | DiagnosticKind::CompositionFailure
            )
        });
        Self { errors, warnings }
    }

    /// Returns true if there are no errors (warnings are allowed).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if nothing at all was reported.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    /// Formats the report as a user-friendly message.
    #[must_use]
    pub fn format_message(&self) -> String {
        let mut message = String::new();

        if !self.errors.is_empty() {
            message.push_str(&format!("✗ {} invalid props:\n", self.errors.len()));
            for (idx, error) in self.errors.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, error));
            }
        }

        if !self.warnings.is_empty() {
            if !message.is_empty() {
                message.push('\n');
            }
            message.push_str(&format!("⚠ {} warnings:\n", self.warnings.len()));
            for (idx, warning) in self.warnings.iter().enumerate() {
                message.push_str(&format!("  {}. {}\n", idx + 1, warning));
            }
        }

        message
    }
}
