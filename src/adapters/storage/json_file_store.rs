use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::core::errors::{PetroError, Result};
use crate::core::traits::store::CollectionStore;

/// Collection store that keeps one JSON array per file.
///
/// A missing or blank file loads as an empty collection. Saves go to a
/// temporary file in the same directory which is then renamed over the
/// target, so readers never observe a half-written array. Concurrent
/// writers are not coordinated: the last save wins.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _items: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    /// Create a store backed by `{dir}/{file_name}`.
    pub fn new(dir: &Path, file_name: &str) -> Self {
        Self {
            path: dir.join(file_name),
            _items: PhantomData,
        }
    }

    fn storage_error(&self, detail: String) -> PetroError {
        PetroError::Storage {
            path: self.path.clone(),
            detail,
        }
    }
}

impl<T> CollectionStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Result<Vec<T>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| self.storage_error(format!("Cannot read collection: {e}")))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items: Vec<T> = serde_json::from_str(&content)
            .map_err(|e| self.storage_error(format!("Malformed collection: {e}")))?;
        debug!(path = %self.path.display(), count = items.len(), "collection loaded");
        Ok(items)
    }

    fn save(&self, items: &[T]) -> Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let mut tmp = NamedTempFile::new_in(dir)
            .map_err(|e| self.storage_error(format!("Cannot create temporary file: {e}")))?;
        serde_json::to_writer_pretty(&mut tmp, items)
            .map_err(|e| self.storage_error(format!("Failed to serialize collection: {e}")))?;
        tmp.write_all(b"\n")?;

        tmp.persist(&self.path)
            .map_err(|e| self.storage_error(format!("Cannot replace collection file: {e}")))?;

        debug!(path = %self.path.display(), count = items.len(), "collection saved");
        Ok(())
    }
}
