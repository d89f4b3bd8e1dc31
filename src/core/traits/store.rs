use crate::core::errors::Result;

/// Port for persisting one whole collection of records.
///
/// Every mutation rewrites the full collection; there is no delta
/// persistence. A store that has never been written loads as empty.
pub trait CollectionStore<T>: Send + Sync {
    /// Read the full collection, in stored order.
    fn load(&self) -> Result<Vec<T>>;

    /// Replace the stored collection with `items`.
    fn save(&self, items: &[T]) -> Result<()>;
}
