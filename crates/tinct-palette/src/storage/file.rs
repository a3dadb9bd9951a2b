//! File-backed storage: one `<key>.json` file per key.
//!
//! Writes are atomic (write to `.tmp`, then rename) so a crash mid-write
//! never leaves a truncated record behind.

use std::path::PathBuf;

use tinct_common::StorageError;
use tracing::{debug, warn};

use super::KeyValueStore;

const APP_NAME: &str = "tinct";

/// The platform data directory for tinct.
///
/// - macOS: `~/Library/Application Support/tinct`
/// - Linux: `$XDG_DATA_HOME/tinct` (defaults to `~/.local/share/tinct`)
/// - Windows: `%APPDATA%\tinct`
pub fn default_dir() -> Result<PathBuf, StorageError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| StorageError::Path("could not determine data directory".into()))?
        .join(APP_NAME))
}

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// A store rooted at [`default_dir`].
    pub fn open_default() -> Result<Self, StorageError> {
        Ok(Self::new(default_dir()?))
    }

    /// Path of the record for `key`. Keys are restricted to
    /// `[A-Za-z0-9_-]+` so they can never escape the directory.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::Path(format!("invalid storage key: {key:?}")));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = match self.path_for(key) {
            Ok(path) => path,
            Err(e) => {
                warn!("{e}");
                return None;
            }
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("failed to read {}: {e}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            StorageError::Write(format!(
                "failed to create storage directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value).map_err(|e| {
            StorageError::Write(format!("failed to write {}: {e}", tmp_path.display()))
        })?;

        if let Err(e) = std::fs::rename(&tmp_path, &path) {
            // Rename can fail when the target is locked (Windows)
            warn!("atomic rename failed ({e}), falling back to direct write");
            std::fs::write(&path, value).map_err(|e2| {
                StorageError::Write(format!("failed to write {}: {e2}", path.display()))
            })?;
            let _ = std::fs::remove_file(&tmp_path);
        }

        debug!(path = %path.display(), "record saved to disk");
        Ok(())
    }
}
