//! Conversions between HEX strings, [`Rgb`] and [`Hsl`].
//!
//! RGB channels are always integers; HSL is an unrounded intermediate that
//! is rounded back to integer channels on the way out. That keeps
//! HEX -> RGB -> HSL -> RGB -> HEX free of drift.

use regex::Regex;
use std::sync::LazyLock;
use tinct_common::types::{HUE_MAX, PERCENT_MAX};
use tinct_common::{ColorError, Hsl, Rgb};

/// Six hex digits with an optional leading `#`.
static HEX6_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#?([0-9a-fA-F]{6})$").unwrap());

/// Parse `#RRGGBB`, `RRGGBB` or the `#RGB` shorthand into an [`Rgb`].
///
/// Shorthand is expanded by duplicating each nibble (`#f80` -> `#ff8800`)
/// before parsing. Anything that is not six hex digits after expansion is
/// rejected with [`ColorError::InvalidFormat`].
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, ColorError> {
    let expanded = expand_shorthand(hex);
    let digits = HEX6_RE
        .captures(&expanded)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ColorError::InvalidFormat(format!("invalid hex color: {hex}")))?;

    let value = u32::from_str_radix(digits.as_str(), 16)
        .map_err(|e| ColorError::InvalidFormat(format!("invalid hex color {hex}: {e}")))?;

    Ok(Rgb::new((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

/// Format as `#RRGGBB`, uppercase, each channel zero-padded to two digits.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

/// Convert to hue/saturation/lightness.
///
/// Achromatic colors (all channels equal) get hue and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    // Sector offsets keep the fraction in [0, 1).
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl::new(h / 6.0 * 360.0, s * 100.0, l * 100.0)
}

/// Convert back to integer channels, rounding to nearest and clamping.
///
/// Input is normalized first: hue wraps onto `[0, 360)`, saturation and
/// lightness clamp to `[0, 100]`, and NaN components count as 0.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = finite_or_zero(hsl.h).rem_euclid(HUE_MAX) / HUE_MAX;
    let s = finite_or_zero(hsl.s).clamp(0.0, PERCENT_MAX) / PERCENT_MAX;
    let l = finite_or_zero(hsl.l).clamp(0.0, PERCENT_MAX) / PERCENT_MAX;

    if s == 0.0 {
        let v = to_channel(l);
        return Rgb::new(v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgb::new(
        to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
        to_channel(hue_to_rgb(p, q, h)),
        to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
    )
}

fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

fn expand_shorthand(hex: &str) -> String {
    match hex.strip_prefix('#') {
        Some(digits) if digits.chars().count() == 3 => {
            let mut out = String::with_capacity(7);
            out.push('#');
            for c in digits.chars() {
                out.push(c);
                out.push(c);
            }
            out
        }
        _ => hex.to_string(),
    }
}
