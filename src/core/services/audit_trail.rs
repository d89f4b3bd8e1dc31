use tracing::{debug, info};

use crate::core::errors::Result;
use crate::core::models::audit_entry::AuditLogEntry;
use crate::core::traits::store::CollectionStore;

/// Append-only view over the persisted audit log.
///
/// Entries are kept newest first. The only destructive operation is
/// [`AuditTrail::clear`], which wipes the whole log at once.
pub struct AuditTrail<'a> {
    store: &'a dyn CollectionStore<AuditLogEntry>,
}

impl<'a> AuditTrail<'a> {
    pub fn new(store: &'a dyn CollectionStore<AuditLogEntry>) -> Self {
        Self { store }
    }

    /// Prepend `entry` and persist the log.
    pub fn record(&self, entry: AuditLogEntry) -> Result<()> {
        self.prepare()?.commit(entry)
    }

    /// Load the log so that one entry can be appended later.
    ///
    /// Callers that change another collection alongside the log load it
    /// first, so an unreadable log fails before anything is written.
    pub fn prepare(&self) -> Result<PendingEntry<'a>> {
        Ok(PendingEntry {
            store: self.store,
            entries: self.store.load()?,
        })
    }

    /// All entries, newest first.
    pub fn entries(&self) -> Result<Vec<AuditLogEntry>> {
        self.store.load()
    }

    /// Remove every entry. Returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let count = self.store.load()?.len();
        if count > 0 {
            self.store.save(&[])?;
            info!(removed = count, "audit log wiped");
        }
        Ok(count)
    }
}

/// A loaded audit log waiting for its next entry.
pub struct PendingEntry<'a> {
    store: &'a dyn CollectionStore<AuditLogEntry>,
    entries: Vec<AuditLogEntry>,
}

impl PendingEntry<'_> {
    pub fn commit(mut self, entry: AuditLogEntry) -> Result<()> {
        debug!(
            report_id = %entry.report_id,
            action = %entry.action,
            "audit entry recorded"
        );
        self.entries.insert(0, entry);
        self.store.save(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::memory_store::MemoryStore;
    use crate::core::models::audit_entry::AuditAction;
    use crate::core::models::audit_entry::fixtures::entry_at;

    #[test]
    fn record_prepends_newest_first() {
        let store = MemoryStore::<AuditLogEntry>::default();
        let trail = AuditTrail::new(&store);

        trail
            .record(entry_at("CR-1", AuditAction::Created, "01/01/2026, 10:00:00"))
            .unwrap();
        trail
            .record(entry_at("CR-2", AuditAction::Created, "02/01/2026, 10:00:00"))
            .unwrap();

        let entries = trail.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].report_id, "CR-2");
        assert_eq!(entries[1].report_id, "CR-1");
    }

    #[test]
    fn prepared_entry_commits_onto_loaded_log() {
        let store = MemoryStore::with_items(vec![entry_at(
            "CR-1",
            AuditAction::Created,
            "01/01/2026, 10:00:00",
        )]);
        let trail = AuditTrail::new(&store);

        let pending = trail.prepare().unwrap();
        assert_eq!(store.save_count(), 0);
        pending
            .commit(entry_at("CR-1", AuditAction::Updated, "02/01/2026, 10:00:00"))
            .unwrap();

        let entries = store.snapshot();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].action, "Updated Report");
    }

    #[test]
    fn clear_wipes_everything() {
        let store = MemoryStore::<AuditLogEntry>::default();
        let trail = AuditTrail::new(&store);
        trail
            .record(entry_at("CR-1", AuditAction::Created, "01/01/2026, 10:00:00"))
            .unwrap();

        assert_eq!(trail.clear().unwrap(), 1);
        assert!(trail.entries().unwrap().is_empty());
    }

    #[test]
    fn clear_on_empty_log_writes_nothing() {
        let store = MemoryStore::<AuditLogEntry>::default();
        let trail = AuditTrail::new(&store);
        assert_eq!(trail.clear().unwrap(), 0);
        assert_eq!(store.save_count(), 0);
    }
}
