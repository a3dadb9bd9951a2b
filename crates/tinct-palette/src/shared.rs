//! Thread-safe handle around a [`PaletteStore`].
//!
//! Each operation holds the lock across load-modify-store, so concurrent
//! callers always see their own writes and the capacity bound holds.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tinct_common::{StorageError, TinctError};

use crate::storage::KeyValueStore;
use crate::store::PaletteStore;

pub struct SharedPalette<S: KeyValueStore> {
    inner: Arc<Mutex<PaletteStore<S>>>,
}

impl<S: KeyValueStore> Clone for SharedPalette<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: KeyValueStore> SharedPalette<S> {
    pub fn new(store: PaletteStore<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn add(&self, color: &str) -> Result<bool, TinctError> {
        self.lock().add(color)
    }

    pub fn remove_at(&self, index: usize) -> Result<Option<String>, StorageError> {
        self.lock().remove_at(index)
    }

    /// Re-read storage and return the freshly loaded list.
    pub fn reload(&self) -> Vec<String> {
        self.lock().load().to_vec()
    }

    /// A copy of the current list.
    pub fn snapshot(&self) -> Vec<String> {
        self.lock().list().to_vec()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Every operation leaves the store consistent, so a panic elsewhere
    // while holding the lock does not invalidate the data.
    fn lock(&self) -> MutexGuard<'_, PaletteStore<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
