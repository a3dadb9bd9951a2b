//! Saved-palette configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tinct_palette::{DEFAULT_CAPACITY, STORAGE_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Maximum number of saved colors.
    pub capacity: usize,
    /// Record name in the store.
    pub storage_key: String,
    /// Overrides the platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            storage_key: STORAGE_KEY.into(),
            store_dir: None,
        }
    }
}
