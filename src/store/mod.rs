//! The entry store: single owner of the entry collection and its persistence.
//!
//! The collection is read once when the store is loaded and written back in
//! full after every mutation. There is no batching. A mutation is built on a
//! copy of the collection, flushed, and only then committed in memory, so a
//! failed write leaves the store exactly as it was.

mod file_slot;
mod memory_slot;

pub use file_slot::{ensure_data_directory_exists, FileSlot};
pub use memory_slot::MemorySlot;

use crate::entry::Entry;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, info, warn};

/// Message shown when a draft is empty after trimming.
pub const EMPTY_DRAFT_MESSAGE: &str = "Nothing to save: entry is empty";

/// A persistence slot holding the whole collection as one JSON payload.
///
/// Implementations only move text in and out; (de)serialization stays in the
/// store.
pub trait StorageSlot {
    /// Returns the stored payload, or `None` when nothing has been stored yet.
    fn read(&self) -> AppResult<Option<String>>;

    /// Replaces the stored payload.
    fn write(&self, payload: &str) -> AppResult<()>;
}

/// Ordered collection of entries backed by a [`StorageSlot`].
#[derive(Debug)]
pub struct EntryStore<S: StorageSlot> {
    slot: S,
    entries: Vec<Entry>,
}

impl<S: StorageSlot> EntryStore<S> {
    /// Loads the collection from `slot`.
    ///
    /// Never fails: a missing, unreadable or malformed payload (including one
    /// that is valid JSON but not an array of entries) yields an empty store.
    pub fn load(slot: S) -> Self {
        let entries = match slot.read() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Entry>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Stored entries are malformed, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("No stored entries yet");
                Vec::new()
            }
            Err(e) => {
                warn!("Could not read stored entries, starting empty: {}", e);
                Vec::new()
            }
        };

        debug!("Loaded {} entries", entries.len());
        EntryStore { slot, entries }
    }

    /// All entries in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The underlying slot.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Saves a draft and returns the id of the saved entry.
    ///
    /// With no `active_id` a new entry is appended. With an `active_id` the
    /// matching entry gets the new content and `updated_at = now`; its id and
    /// `created_at` are kept.
    ///
    /// # Errors
    ///
    /// - `AppError::Validation` if the draft is empty after trimming; nothing changes.
    /// - `AppError::NotFound` if `active_id` names no entry.
    /// - I/O or serialization errors from the flush; nothing changes.
    pub fn save(&mut self, draft: &str, active_id: Option<&str>, now: DateTime<Utc>) -> AppResult<String> {
        if draft.trim().is_empty() {
            return Err(AppError::Validation(EMPTY_DRAFT_MESSAGE.to_string()));
        }

        let mut next = self.entries.clone();
        let id = match active_id {
            None => {
                let entry = Entry::new(draft, now);
                let id = entry.id.clone();
                next.push(entry);
                info!("Created entry {}", id);
                id
            }
            Some(active) => {
                let entry = next
                    .iter_mut()
                    .find(|entry| entry.id == active)
                    .ok_or_else(|| AppError::NotFound(active.to_string()))?;
                entry.content = draft.to_string();
                entry.updated_at = now.trunc_subsecs(3).max(entry.created_at);
                info!("Updated entry {}", active);
                active.to_string()
            }
        };

        self.commit(next)?;
        Ok(id)
    }

    /// Removes the entry with `id`. Returns `false` (and writes nothing) when
    /// no such entry exists.
    pub fn delete(&mut self, id: &str) -> AppResult<bool> {
        if self.get(id).is_none() {
            debug!("Delete of unknown entry {} ignored", id);
            return Ok(false);
        }

        let next: Vec<Entry> = self.entries.iter().filter(|e| e.id != id).cloned().collect();
        self.commit(next)?;
        info!("Deleted entry {}", id);
        Ok(true)
    }

    /// Removes every entry and returns how many were removed.
    pub fn clear_all(&mut self) -> AppResult<usize> {
        let removed = self.entries.len();
        self.commit(Vec::new())?;
        info!("Cleared {} entries", removed);
        Ok(removed)
    }

    /// Replaces the whole collection, e.g. with the result of an import merge.
    pub fn replace_all(&mut self, entries: Vec<Entry>) -> AppResult<()> {
        self.commit(entries)
    }

    fn commit(&mut self, next: Vec<Entry>) -> AppResult<()> {
        let payload = serde_json::to_string(&next)?;
        self.slot.write(&payload)?;
        self.entries = next;
        debug!("Flushed {} entries", self.entries.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 0).unwrap()
    }

    fn empty_store() -> EntryStore<MemorySlot> {
        EntryStore::load(MemorySlot::new())
    }

    #[test]
    fn test_load_from_empty_slot() {
        let store = empty_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_falls_back_to_empty_on_bad_payloads() {
        for payload in ["not json", "{\"entries\": []}", "42", "[{\"id\": 1}]", "[1, 2"] {
            let store = EntryStore::load(MemorySlot::with_payload(payload));
            assert!(store.is_empty(), "payload {:?} should load as empty", payload);
        }
    }

    #[test]
    fn test_load_falls_back_to_empty_on_read_error() {
        let slot = MemorySlot::new();
        slot.fail_reads(true);
        let store = EntryStore::load(slot);
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_new_entry_appends_and_flushes() {
        let mut store = empty_store();
        let id = store.save("  first thoughts \n", None, t0()).unwrap();

        assert_eq!(store.len(), 1);
        let entry = store.get(&id).unwrap();
        assert_eq!(entry.content, "  first thoughts \n");
        assert_eq!(entry.created_at, entry.updated_at);

        let persisted: Vec<Entry> =
            serde_json::from_str(&store.slot().payload().unwrap()).unwrap();
        assert_eq!(persisted, store.entries());
    }

    #[test]
    fn test_save_appends_at_the_end() {
        let mut store = empty_store();
        let first = store.save("one", None, t0()).unwrap();
        let second = store.save("two", None, t0() + Duration::minutes(1)).unwrap();

        let ids: Vec<&str> = store.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec![first.as_str(), second.as_str()]);
    }

    #[test]
    fn test_save_existing_updates_content_and_updated_at_only() {
        let mut store = empty_store();
        let id = store.save("draft", None, t0()).unwrap();
        let other = store.save("other", None, t0()).unwrap();
        let other_before = store.get(&other).unwrap().clone();

        let later = t0() + Duration::hours(2);
        let saved = store.save("final", Some(&id), later).unwrap();

        assert_eq!(saved, id);
        assert_eq!(store.len(), 2);
        let entry = store.get(&id).unwrap();
        assert_eq!(entry.content, "final");
        assert_eq!(entry.created_at, t0());
        assert_eq!(entry.updated_at, later);
        assert_eq!(store.get(&other).unwrap(), &other_before);
    }

    #[test]
    fn test_save_never_moves_updated_at_before_created_at() {
        let mut store = empty_store();
        let id = store.save("draft", None, t0()).unwrap();
        store.save("edited", Some(&id), t0() - Duration::hours(1)).unwrap();

        let entry = store.get(&id).unwrap();
        assert!(entry.created_at <= entry.updated_at);
    }

    #[test]
    fn test_save_rejects_whitespace_only_drafts() {
        let mut store = empty_store();
        let id = store.save("keep", None, t0()).unwrap();
        let payload_before = store.slot().payload();

        for draft in ["", "   ", "\n\t \n"] {
            let result = store.save(draft, None, t0());
            assert!(matches!(result, Err(AppError::Validation(_))));
            let result = store.save(draft, Some(&id), t0());
            assert!(matches!(result, Err(AppError::Validation(_))));
        }

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().content, "keep");
        assert_eq!(store.slot().payload(), payload_before);
    }

    #[test]
    fn test_save_with_unknown_active_id_is_not_found() {
        let mut store = empty_store();
        let result = store.save("text", Some("missing"), t0());
        assert!(matches!(result, Err(AppError::NotFound(id)) if id == "missing"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_removes_exactly_the_target() {
        let mut store = empty_store();
        let a = store.save("a", None, t0()).unwrap();
        let b = store.save("b", None, t0()).unwrap();
        let c = store.save("c", None, t0()).unwrap();

        assert!(store.delete(&b).unwrap());

        let ids: Vec<&str> = store.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec![a.as_str(), c.as_str()]);
    }

    #[test]
    fn test_delete_unknown_id_is_a_noop() {
        let mut store = empty_store();
        store.save("a", None, t0()).unwrap();
        let writes_before = store.slot().write_count();

        assert!(!store.delete("nope").unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(store.slot().write_count(), writes_before);
    }

    #[test]
    fn test_clear_all() {
        let mut store = empty_store();
        store.save("a", None, t0()).unwrap();
        store.save("b", None, t0()).unwrap();

        assert_eq!(store.clear_all().unwrap(), 2);
        assert!(store.is_empty());
        assert_eq!(store.slot().payload().as_deref(), Some("[]"));
    }

    #[test]
    fn test_failed_flush_leaves_store_unchanged() {
        let mut store = empty_store();
        let id = store.save("original", None, t0()).unwrap();
        store.slot().fail_writes(true);

        assert!(store.save("new", None, t0()).is_err());
        assert!(store.save("edited", Some(&id), t0()).is_err());
        assert!(store.delete(&id).is_err());
        assert!(store.clear_all().is_err());

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().content, "original");
    }

    #[test]
    fn test_reload_sees_flushed_state() {
        let mut store = empty_store();
        store.save("persist me", None, t0()).unwrap();
        let payload = store.slot().payload().unwrap();

        let reloaded = EntryStore::load(MemorySlot::with_payload(&payload));
        assert_eq!(reloaded.entries(), store.entries());
    }

    #[test]
    fn test_sub_millisecond_clock_survives_reload() {
        let raw_now = t0() + Duration::nanoseconds(123_456_789);
        let mut store = empty_store();
        let id = store.save("first", None, raw_now).unwrap();
        store
            .save("second", Some(&id), raw_now + Duration::nanoseconds(987_654))
            .unwrap();

        let entry = store.get(&id).unwrap();
        assert_eq!(entry.created_at, t0() + Duration::milliseconds(123));
        assert_eq!(entry.updated_at, t0() + Duration::milliseconds(124));

        let payload = store.slot().payload().unwrap();
        let reloaded = EntryStore::load(MemorySlot::with_payload(&payload));
        assert_eq!(reloaded.entries(), store.entries());
    }
}
