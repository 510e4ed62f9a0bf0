//! Well-formedness predicates for card props.

use crate::color::ColorResolver;
use crate::models::PropValue;

/// Length units a CSS length must end with.
pub const CSS_LENGTH_UNITS: &[&str] = &["px", "rem", "em", "%", "vh", "vw", "vmin", "vmax"];

/// Returns true if `value` is a non-empty string the resolver accepts as a color.
#[must_use]
pub fn is_valid_color(value: &PropValue, resolver: &dyn ColorResolver) -> bool {
    match value.as_text() {
        Some(color) if !color.is_empty() => resolver.is_valid(color),
        _ => false,
    }
}

/// Returns true if the string consists solely of ASCII digits.
#[must_use]
pub fn is_bare_integer(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_digit())
}

/// Returns true if the string ends in a recognized unit or is a bare integer.
///
/// Only the suffix is checked, so `"1.5rem"` and `"calc(1px + 2px)"` pass while
/// `"invalid-radius"` does not.
#[must_use]
pub fn is_valid_css_length(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    CSS_LENGTH_UNITS.iter().any(|unit| value.ends_with(unit)) || is_bare_integer(value)
}

/// Returns true if `value` is a finite number.
#[must_use]
pub fn is_valid_border_width(value: &PropValue) -> bool {
    value.as_number().is_some_and(f64::is_finite)
}
