//! CSS color value parsing.
//!
//! Resolves a color string to opaque RGB the way a rendering surface would
//! compute it. Alpha is parsed and validated but not returned.
//!
//! Supported notations:
//! - `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - `rgb()` / `rgba()` with comma or space separated channels, numbers or percentages
//! - `hsl()` / `hsla()` with `deg`, `rad`, `grad`, `turn` or unitless hue
//! - named colors and `transparent`

use super::named;
use crate::models::RgbColor;

/// Parses a CSS color to RGB. Returns `None` for anything a browser would reject.
///
/// `currentcolor` is a valid color but depends on context, so it also yields `None`;
/// use [`is_css_color`] for validity checks.
#[must_use]
pub fn parse_css_color(input: &str) -> Option<RgbColor> {
    let value = input.trim().to_ascii_lowercase();
    if value.is_empty() {
        return None;
    }

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    if value == "transparent" {
        return Some(RgbColor::new(0, 0, 0));
    }

    if let Some(open) = value.find('(') {
        let body = value[open + 1..].strip_suffix(')')?;
        return match &value[..open] {
            "rgb" | "rgba" => parse_rgb_args(body),
            "hsl" | "hsla" => parse_hsl_args(body),
            _ => None,
        };
    }

    named::lookup(&value)
}

/// Returns true if the string is a color a rendering surface would accept.
#[must_use]
pub fn is_css_color(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("currentcolor") || parse_css_color(input).is_some()
}

fn parse_hex(hex: &str) -> Option<RgbColor> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    match hex.len() {
        3 | 4 => Some(RgbColor::new(nibble(0)?, nibble(1)?, nibble(2)?)),
        6 | 8 => Some(RgbColor::new(byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

/// Splits functional arguments into the three channels and an optional alpha.
///
/// Accepts the legacy comma syntax (`1, 2, 3[, a]`) and the modern space
/// syntax (`1 2 3[ / a]`). Mixing the two is rejected.
fn split_args(body: &str) -> Option<(Vec<&str>, Option<&str>)> {
    if body.contains(',') {
        if body.contains('/') {
            return None;
        }
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        return match parts.len() {
            3 => Some((parts, None)),
            4 => Some((parts[..3].to_vec(), Some(parts[3]))),
            _ => None,
        };
    }

    let (channels, alpha) = match body.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha.trim())),
        None => (body, None),
    };
    let parts: Vec<&str> = channels.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }
    Some((parts, alpha))
}

/// Parses a plain CSS number, rejecting `inf`, `nan` and other Rust-only spellings.
fn parse_number(token: &str) -> Option<f64> {
    if token.is_empty()
        || !token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e'))
    {
        return None;
    }
    token.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn parse_percentage(token: &str) -> Option<f64> {
    token.strip_suffix('%').and_then(parse_number)
}

fn parse_alpha(token: &str) -> Option<f64> {
    let alpha = match parse_percentage(token) {
        Some(pct) => pct / 100.0,
        None => parse_number(token)?,
    };
    Some(alpha.clamp(0.0, 1.0))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

fn parse_rgb_channel(token: &str) -> Option<u8> {
    match parse_percentage(token) {
        Some(pct) => Some(to_channel(pct * 2.55)),
        None => parse_number(token).map(to_channel),
    }
}

fn parse_rgb_args(body: &str) -> Option<RgbColor> {
    let (channels, alpha) = split_args(body)?;
    if let Some(alpha) = alpha {
        parse_alpha(alpha)?;
    }
    Some(RgbColor::new(
        parse_rgb_channel(channels[0])?,
        parse_rgb_channel(channels[1])?,
        parse_rgb_channel(channels[2])?,
    ))
}

fn parse_hue(token: &str) -> Option<f64> {
    let degrees = if let Some(v) = token.strip_suffix("deg") {
        parse_number(v)?
    } else if let Some(v) = token.strip_suffix("grad") {
        parse_number(v)? * 0.9
    } else if let Some(v) = token.strip_suffix("rad") {
        parse_number(v)?.to_degrees()
    } else if let Some(v) = token.strip_suffix("turn") {
        parse_number(v)? * 360.0
    } else {
        parse_number(token)?
    };
    degrees.is_finite().then(|| degrees.rem_euclid(360.0))
}

/// Saturation/lightness as a fraction; bare numbers are read as percentages.
fn parse_fraction(token: &str) -> Option<f64> {
    let pct = parse_percentage(token).or_else(|| parse_number(token))?;
    Some((pct / 100.0).clamp(0.0, 1.0))
}

fn parse_hsl_args(body: &str) -> Option<RgbColor> {
    let (channels, alpha) = split_args(body)?;
    if let Some(alpha) = alpha {
        parse_alpha(alpha)?;
    }
    let h = parse_hue(channels[0])?;
    let s = parse_fraction(channels[1])?;
    let l = parse_fraction(channels[2])?;
    Some(hsl_to_rgb(h, s, l))
}

/// Converts HSL (hue in degrees, saturation and lightness in `[0, 1]`) to RGB.
#[allow(clippy::many_single_char_names)]
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> RgbColor {
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    RgbColor::new(
        to_channel((r + m) * 255.0),
        to_channel((g + m) * 255.0),
        to_channel((b + m) * 255.0),
    )
}
