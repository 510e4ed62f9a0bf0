//! Application-wide constants.
//!
//! Default prop values, fixed accessibility phrases and the failure notice
//! shown by the card boundary.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Gradient Card";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "gradient-card";

/// Directory name used under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "GradientCard";

// Card defaults

/// Default gradient start color.
pub const DEFAULT_GRADIENT_FROM: &str = "#ff6ec7";
/// Default gradient end color.
pub const DEFAULT_GRADIENT_TO: &str = "#4facfe";
/// Default border width in px.
pub const DEFAULT_BORDER_WIDTH: f64 = 2.0;
/// Default outer border radius.
pub const DEFAULT_BORDER_RADIUS: &str = "1rem";
/// Default inner padding.
pub const DEFAULT_PADDING: &str = "1.5rem";
/// Default inner surface background.
pub const DEFAULT_BACKGROUND: &str = "white";
/// Default gradient angle in degrees.
pub const DEFAULT_GRADIENT_DIRECTION: u16 = 135;

/// Smallest border width a card will render (px).
pub const MIN_BORDER_WIDTH: f64 = 0.5;
/// Largest border width a card will render (px).
pub const MAX_BORDER_WIDTH: f64 = 50.0;

/// Foreground color assumed when auditing the background contrast.
pub const DEFAULT_TEXT_COLOR: &str = "#000000";

/// WCAG 2.1 AA threshold for normal text.
pub const WCAG_AA_RATIO: f64 = 4.5;
/// WCAG 2.1 AAA threshold for normal text.
pub const WCAG_AAA_RATIO: f64 = 7.0;

// Accessibility

/// Role used by non-interactive cards unless the caller supplies one.
pub const DEFAULT_ROLE: &str = "region";
/// Role forced onto interactive cards.
pub const INTERACTIVE_ROLE: &str = "button";
/// Label used when an interactive card has no `aria-label`.
pub const INTERACTIVE_ARIA_LABEL: &str = "Interactive gradient border card";
/// Label used when a static card has no `aria-label`.
pub const STATIC_ARIA_LABEL: &str = "Gradient border card";
/// Focus ring classes added to interactive cards.
pub const FOCUS_RING_CLASSES: &str = "focus:ring-2 focus:ring-blue-500 focus:ring-offset-2";

// Content placeholder

/// Text rendered when a card has no content.
pub const EMPTY_CONTENT_TEXT: &str = "No content";
/// Classes applied to the empty-content placeholder.
pub const EMPTY_CONTENT_CLASSES: &str = "text-gray-400 text-center";

// Boundary

/// Title of the notice shown when card rendering fails.
pub const BOUNDARY_TITLE: &str = "Gradient border card failed to render";
/// Detail shown when the failure carried no message.
pub const BOUNDARY_UNKNOWN_ERROR: &str = "Unknown error";
/// Label of the reset action on the failure notice.
pub const BOUNDARY_RETRY_LABEL: &str = "Retry";
