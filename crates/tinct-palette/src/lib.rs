//! Saved-color palette backed by a key-value store.
//!
//! The palette is an ordered list of HEX strings (`#RGB` or `#RRGGBB`), most recent first, with
//! no duplicates and a fixed capacity. Every mutation writes the whole list
//! back to storage as a JSON array under a single key.
//!
//! ```rust
//! use tinct_palette::{MemoryStore, PaletteStore};
//!
//! let mut palette = PaletteStore::open(MemoryStore::new());
//! palette.add("#FF0000").unwrap();
//! palette.add("#00FF00").unwrap();
//! assert_eq!(palette.list(), ["#00FF00", "#FF0000"]);
//! ```

pub mod shared;
pub mod storage;
pub mod store;

pub use shared::SharedPalette;
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{PaletteStore, DEFAULT_CAPACITY, STORAGE_KEY};

pub use tinct_common::{StorageError, TinctError};
