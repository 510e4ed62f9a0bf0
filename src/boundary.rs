//! Recoverable boundary around card rendering.
//!
//! [`CardBoundary`] runs a render closure and catches panics raised by it
//! (typically from content, which the composer does not control). After a
//! failure it keeps showing the same [`FailureNotice`] until [`CardBoundary::reset`]
//! is called, the way a retry button would.

use crate::compose::panic_message;
use crate::constants::{BOUNDARY_RETRY_LABEL, BOUNDARY_TITLE, BOUNDARY_UNKNOWN_ERROR};
use serde::Serialize;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Shown in place of a card that failed to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureNotice {
    /// Fixed title
    pub title: &'static str,
    /// Error text
    pub detail: String,
    /// Label of the reset action
    pub retry_label: &'static str,
}

impl FailureNotice {
    fn new(detail: Option<String>) -> Self {
        Self {
            title: BOUNDARY_TITLE,
            detail: detail
                .filter(|detail| !detail.is_empty())
                .unwrap_or_else(|| BOUNDARY_UNKNOWN_ERROR.to_string()),
            retry_label: BOUNDARY_RETRY_LABEL,
        }
    }
}

/// Result of rendering through a boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryOutput<T> {
    /// The render closure completed
    Rendered(T),
    /// The render closure panicked now or earlier
    Failed(FailureNotice),
}

impl<T> BoundaryOutput<T> {
    /// Returns the rendered value, if any.
    pub fn rendered(self) -> Option<T> {
        match self {
            Self::Rendered(value) => Some(value),
            Self::Failed(_) => None,
        }
    }
}

/// Catches render failures and holds them until reset.
#[derive(Debug, Default)]
pub struct CardBoundary {
    error: Option<Option<String>>,
}

impl CardBoundary {
    /// Creates a boundary with no recorded failure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `render` unless a failure is already recorded.
    pub fn render<T>(&mut self, render: impl FnOnce() -> T) -> BoundaryOutput<T> {
        if let Some(detail) = &self.error {
            return BoundaryOutput::Failed(FailureNotice::new(detail.clone()));
        }

        match catch_unwind(AssertUnwindSafe(render)) {
            Ok(value) => BoundaryOutput::Rendered(value),
            Err(payload) => {
                let detail = panic_message(payload.as_ref());
                tracing::error!(
                    detail = detail.as_deref().unwrap_or(BOUNDARY_UNKNOWN_ERROR),
                    "card render failed"
                );
                self.error = Some(detail.clone());
                BoundaryOutput::Failed(FailureNotice::new(detail))
            }
        }
    }

    /// Returns true while a failure is recorded.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Clears the recorded failure so the next render runs again.
    pub fn reset(&mut self) {
        self.error = None;
    }
}
