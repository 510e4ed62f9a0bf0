//! Gradient Card Library
//!
//! This library provides the style engine behind gradient border cards:
//! validating and normalizing untrusted props, auditing color contrast,
//! resolving preset tables, and composing the outer frame, inner surface and
//! accessibility attributes of a card.
//!
//! ```
//! use gradient_card::accessibility::CardHandlers;
//! use gradient_card::compose::CardComposer;
//! use gradient_card::models::CardProps;
//!
//! let card = CardComposer::default().compose(
//!     &CardProps::new("Hello").gradient("#ff0000", "#0000ff").border_width(4.0),
//!     &CardHandlers::default(),
//! );
//! assert_eq!(card.styles.outer_frame.padding, "4px");
//! ```

// Module declarations
pub mod accessibility;
pub mod boundary;
pub mod cache;
pub mod cli;
pub mod color;
pub mod compose;
pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod models;
pub mod normalize;
pub mod presets;
pub mod validators;
