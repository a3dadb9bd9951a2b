//! Internal regexes and capture helpers for the CSS text forms.

use regex::Regex;
use std::sync::LazyLock;

/// `rgb(r, g, b)`, any case, optional whitespace around each channel.
pub(super) static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgb\(\s*([0-9]+)\s*,\s*([0-9]+)\s*,\s*([0-9]+)\s*\)$").unwrap()
});

/// `hsl(h, s%, l%)`, any case, percent signs required on s and l.
pub(super) static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^hsl\(\s*([0-9]+)\s*,\s*([0-9]+)%\s*,\s*([0-9]+)%\s*\)$").unwrap()
});

/// Match `s` against `re` and parse its three numeric groups.
///
/// A group too long for `i64` saturates to `i64::MAX` so the caller reports
/// it as out of range rather than malformed.
pub(super) fn capture_triple(re: &Regex, s: &str) -> Option<[i64; 3]> {
    let caps = re.captures(s)?;
    let mut out = [0i64; 3];
    for (slot, i) in out.iter_mut().zip(1..=3) {
        *slot = caps[i].parse().unwrap_or(i64::MAX);
    }
    Some(out)
}
