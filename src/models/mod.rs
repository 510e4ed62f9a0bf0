//! Value types for card props and the styles composed from them.
//!
//! Models carry no behavior beyond parsing and rendering; validation and
//! normalization live in [`crate::validators`] and [`crate::normalize`].

pub mod prop_value;
pub mod props;
pub mod rgb;
pub mod style;

// Re-export all model types
pub use prop_value::PropValue;
pub use props::CardProps;
pub use rgb::RgbColor;
pub use style::{GradientConfig, InnerSurface, OuterFrame, ResolvedStyleSet};
