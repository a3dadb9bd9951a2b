//! Format and range validators. None of these ever fail.

use regex::Regex;
use std::sync::LazyLock;
use tinct_common::{Hsl, Rgb};

/// `#` followed by exactly 3 or exactly 6 hex digits, any case.
static HEX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

/// Whether `s` is a `#RGB` or `#RRGGBB` hex color.
pub fn is_valid_hex(s: &str) -> bool {
    HEX_RE.is_match(s)
}

/// Whether every channel is an integer in `[0, 255]`.
pub fn is_valid_rgb(r: i64, g: i64, b: i64) -> bool {
    Rgb::try_new(r, g, b).is_ok()
}

/// Whether `h` is in `[0, 360]` and `s`, `l` are in `[0, 100]`.
pub fn is_valid_hsl(h: f64, s: f64, l: f64) -> bool {
    Hsl::try_new(h, s, l).is_ok()
}
