//! Color validation, resolution and contrast analysis.

pub mod contrast;
pub mod css;
pub mod named;
pub mod resolver;

pub use contrast::{contrast, contrast_ratio, ContrastLevel, ContrastResult};
pub use css::{is_css_color, parse_css_color};
pub use resolver::{ColorResolver, ComputedResolver, PatternResolver, ResolverStrategy};
