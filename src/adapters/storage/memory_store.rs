use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::errors::{PetroError, Result};
use crate::core::traits::store::CollectionStore;

/// In-memory collection store, used as the test double for file storage.
///
/// Counts saves so tests can assert that a failed operation wrote nothing.
pub struct MemoryStore<T> {
    items: Mutex<Vec<T>>,
    saves: AtomicUsize,
    reject_saves: bool,
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::with_items(Vec::new())
    }
}

impl<T> MemoryStore<T> {
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
            saves: AtomicUsize::new(0),
            reject_saves: false,
        }
    }

    /// A store that loads `items` but fails every save, like a file on a
    /// read-only volume.
    pub fn rejecting_saves(items: Vec<T>) -> Self {
        Self {
            reject_saves: true,
            ..Self::with_items(items)
        }
    }

    /// Number of `save` calls so far.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl<T: Clone> MemoryStore<T> {
    /// Current contents, bypassing the port.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.lock().map(|items| items.clone()).unwrap_or_default()
    }
}

impl<T: Clone + Send> CollectionStore<T> for MemoryStore<T> {
    fn load(&self) -> Result<Vec<T>> {
        let items = self.items.lock().map_err(|e| poisoned(&e.to_string()))?;
        Ok(items.clone())
    }

    fn save(&self, items: &[T]) -> Result<()> {
        if self.reject_saves {
            return Err(PetroError::Storage {
                path: "<memory>".into(),
                detail: "store is read-only".into(),
            });
        }
        let mut stored = self.items.lock().map_err(|e| poisoned(&e.to_string()))?;
        *stored = items.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn poisoned(detail: &str) -> PetroError {
    PetroError::Storage {
        path: "<memory>".into(),
        detail: format!("store lock poisoned: {detail}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_counts_saves() {
        let store: MemoryStore<u32> = MemoryStore::default();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.save_count(), 0);

        store.save(&[1, 2, 3]).unwrap();
        assert_eq!(store.load().unwrap(), vec![1, 2, 3]);
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn rejecting_store_keeps_contents() {
        let store = MemoryStore::rejecting_saves(vec![1]);
        assert!(store.save(&[2]).is_err());
        assert_eq!(store.snapshot(), vec![1]);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn save_replaces_contents() {
        let store = MemoryStore::with_items(vec![1, 2, 3]);
        store.save(&[9]).unwrap();
        assert_eq!(store.snapshot(), vec![9]);
    }
}
