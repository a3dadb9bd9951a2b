//! Key-value storage backends for the palette record.

mod file;
mod memory;

pub use file::{default_dir, FileStore};
pub use memory::MemoryStore;

use tinct_common::StorageError;

/// Durable single-key string storage.
///
/// A write replaces the whole value for `key` and is expected to be atomic
/// at the backend's granularity.
pub trait KeyValueStore {
    /// The stored value, or `None` if absent. Backends log read failures
    /// and report them as absent.
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
