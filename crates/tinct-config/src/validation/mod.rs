//! Full configuration validation.
//!
//! Each section has its own validator; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod palette;

#[cfg(test)]
mod tests;

use crate::schema::TinctConfig;
use tinct_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &TinctConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    palette::validate_palette(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
