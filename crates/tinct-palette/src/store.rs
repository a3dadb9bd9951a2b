//! The palette store: in-memory cache plus its storage collaborator.

use tinct_color::is_valid_hex;
use tinct_common::{ColorError, StorageError, TinctError};
use tracing::{debug, info, warn};

use crate::storage::KeyValueStore;

/// Maximum number of saved colors.
pub const DEFAULT_CAPACITY: usize = 12;

/// Key the palette record is stored under.
pub const STORAGE_KEY: &str = "savedColors";

/// Ordered, deduplicated, capacity-bounded list of saved HEX colors.
///
/// Most recently added first. Loaded once when opened and written back in
/// full after every mutation.
#[derive(Debug)]
pub struct PaletteStore<S: KeyValueStore> {
    storage: S,
    key: String,
    capacity: usize,
    colors: Vec<String>,
}

impl<S: KeyValueStore> PaletteStore<S> {
    /// Open with the default key and capacity, loading any saved record.
    pub fn open(storage: S) -> Self {
        Self::with_options(storage, STORAGE_KEY, DEFAULT_CAPACITY)
    }

    /// Open with a custom key and capacity. A capacity of 0 is treated as 1.
    pub fn with_options(storage: S, key: impl Into<String>, capacity: usize) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            capacity: capacity.max(1),
            colors: Vec::new(),
        };
        store.load();
        store
    }

    /// Re-read the record from storage, replacing the in-memory list.
    ///
    /// A missing or malformed record yields an empty palette; the decode
    /// failure is logged, never returned. Entries that are not HEX colors
    /// and duplicates are dropped, and the list is cut to capacity.
    pub fn load(&mut self) -> &[String] {
        let colors = match self.storage.get(&self.key) {
            None => Vec::new(),
            Some(raw) => decode(&raw).unwrap_or_else(|e| {
                warn!("ignoring saved palette under '{}': {e}", self.key);
                Vec::new()
            }),
        };

        self.colors = Vec::with_capacity(colors.len().min(self.capacity));
        for color in colors {
            if self.colors.len() == self.capacity {
                break;
            }
            if !is_valid_hex(&color) {
                warn!(color, "dropping saved entry that is not a hex color");
                continue;
            }
            if !self.colors.contains(&color) {
                self.colors.push(color);
            }
        }

        info!("loaded {} saved colors", self.colors.len());
        &self.colors
    }

    /// Save `color` at the front of the palette.
    ///
    /// Returns `Ok(false)` without touching storage if the exact string is
    /// already saved; its position is left unchanged. When the palette is
    /// full the oldest color is dropped. If the write fails the in-memory
    /// change stands and the error is returned.
    ///
    /// `color` must be `#RGB` or `#RRGGBB`; anything else is rejected with
    /// [`ColorError::InvalidFormat`] and the palette is left unchanged.
    pub fn add(&mut self, color: &str) -> Result<bool, TinctError> {
        if !is_valid_hex(color) {
            return Err(ColorError::InvalidFormat(format!("not a hex color: {color}")).into());
        }
        if self.contains(color) {
            debug!(color, "color already saved");
            return Ok(false);
        }

        self.colors.insert(0, color.to_string());
        if self.colors.len() > self.capacity {
            if let Some(evicted) = self.colors.pop() {
                debug!(color = %evicted, "evicted oldest color");
            }
        }

        self.persist()?;
        Ok(true)
    }

    /// Remove the color at `index`, returning it.
    ///
    /// An out-of-range index is a no-op and returns `Ok(None)`.
    pub fn remove_at(&mut self, index: usize) -> Result<Option<String>, StorageError> {
        if index >= self.colors.len() {
            debug!(index, len = self.colors.len(), "remove index out of range");
            return Ok(None);
        }

        let removed = self.colors.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    pub fn list(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.colors)
            .map_err(|e| StorageError::Encode(e.to_string()))?;
        self.storage.set(&self.key, &json)?;
        debug!(key = %self.key, count = self.colors.len(), "palette persisted");
        Ok(())
    }
}

/// Decode a JSON array of strings.
fn decode(raw: &str) -> Result<Vec<String>, StorageError> {
    serde_json::from_str(raw).map_err(|e| StorageError::Decode(e.to_string()))
}
