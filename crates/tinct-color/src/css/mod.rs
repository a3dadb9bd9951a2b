//! CSS-style text forms: `rgb(r, g, b)` and `hsl(h, s%, l%)`.
//!
//! These are the strings shown in, and typed into, the RGB and HSL fields.
//! Parsing is case-insensitive and tolerant of whitespace around each
//! number. Grammar mismatches are [`ColorError::InvalidFormat`]; numbers
//! outside their domain are [`ColorError::InvalidRange`].

mod parse;


use tinct_common::{ColorError, Hsl, Rgb};

use parse::{capture_triple, HSL_RE, RGB_RE};

/// Format as `rgb(R, G, B)`.
pub fn format_rgb(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Format as `hsl(H, S%, L%)`, each component rounded to an integer.
pub fn format_hsl(hsl: Hsl) -> String {
    hsl.to_string()
}

/// Parse `rgb(r, g, b)` with integer channels in `[0, 255]`.
pub fn parse_rgb(s: &str) -> Result<Rgb, ColorError> {
    let s = s.trim();
    let [r, g, b] = capture_triple(&RGB_RE, s)
        .ok_or_else(|| ColorError::InvalidFormat(format!("invalid rgb color: {s}")))?;
    Rgb::try_new(r, g, b)
}

/// Parse `hsl(h, s%, l%)` with integer components.
pub fn parse_hsl(s: &str) -> Result<Hsl, ColorError> {
    let s = s.trim();
    let [h, sat, l] = capture_triple(&HSL_RE, s)
        .ok_or_else(|| ColorError::InvalidFormat(format!("invalid hsl color: {s}")))?;
    Hsl::try_new(h as f64, sat as f64, l as f64)
}
