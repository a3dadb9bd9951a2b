//! Validation for the `[palette]` section.

use crate::schema::TinctConfig;
use regex::Regex;
use std::sync::LazyLock;

use super::helpers::validate_range;

/// Storage keys double as file names.
static STORAGE_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

pub(crate) const MAX_CAPACITY: usize = 64;

pub(crate) fn validate_palette(errors: &mut Vec<String>, config: &TinctConfig) {
    validate_range(
        errors,
        "palette.capacity",
        config.palette.capacity,
        1,
        MAX_CAPACITY,
    );

    if !STORAGE_KEY_RE.is_match(&config.palette.storage_key) {
        errors.push(format!(
            "palette.storage_key = {:?} must be letters, digits, '_' or '-'",
            config.palette.storage_key
        ));
    }
}
