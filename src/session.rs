//! Editing session: the store plus the editor state around it.
//!
//! A session tracks the *active id* (the entry loaded for update, unset when
//! composing a new entry) and the current draft text, next to the search and
//! sort state used to derive the list view. Destructive actions go through a
//! [`Prompt`] first.

use crate::entry::Entry;
use crate::errors::{AppError, AppResult};
use crate::exchange::{self, ImportReport};
use crate::prompt::Prompt;
use crate::query::{self, QueryState, SortOrder};
use crate::store::{EntryStore, StorageSlot};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Question asked before deleting one entry.
pub const DELETE_QUESTION: &str = "Delete this entry? This cannot be undone.";

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// No entry with that id; nothing was asked or changed.
    NotFound,
    /// The user said no.
    Declined,
}

pub struct Session<S: StorageSlot, P: Prompt> {
    store: EntryStore<S>,
    prompt: P,
    active_id: Option<String>,
    draft: String,
    query: QueryState,
}

impl<S: StorageSlot, P: Prompt> Session<S, P> {
    /// Starts a session with a blank draft.
    pub fn new(store: EntryStore<S>, prompt: P) -> Self {
        Session {
            store,
            prompt,
            active_id: None,
            draft: String::new(),
            query: QueryState::default(),
        }
    }

    pub fn store(&self) -> &EntryStore<S> {
        &self.store
    }

    pub fn active_id(&self) -> Option<&str> {
        self.active_id.as_deref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Resets the editor to a blank, new entry.
    pub fn new_draft(&mut self) {
        self.active_id = None;
        self.draft.clear();
    }

    /// Discards the draft. Same as [`Session::new_draft`].
    pub fn cancel(&mut self) {
        debug!("Draft discarded");
        self.new_draft();
    }

    /// Loads an entry into the editor for update.
    pub fn edit(&mut self, id: &str) -> AppResult<()> {
        let entry = self
            .store
            .get(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        self.draft = entry.content.clone();
        self.active_id = Some(entry.id.clone());
        Ok(())
    }

    /// Saves the draft, creating or updating depending on the active id.
    ///
    /// On success the saved entry becomes active. An empty draft is rejected
    /// with `AppError::Validation` and leaves the session untouched.
    pub fn save(&mut self, now: DateTime<Utc>) -> AppResult<String> {
        let id = self.store.save(&self.draft, self.active_id.as_deref(), now)?;
        self.active_id = Some(id.clone());
        Ok(id)
    }

    /// Deletes an entry after confirmation. Resets the editor if the entry
    /// was active.
    pub fn delete(&mut self, id: &str) -> AppResult<DeleteOutcome> {
        if self.store.get(id).is_none() {
            return Ok(DeleteOutcome::NotFound);
        }
        if !self.prompt.confirm(DELETE_QUESTION)? {
            info!("Delete declined");
            return Ok(DeleteOutcome::Declined);
        }

        self.store.delete(id)?;
        if self.active_id.as_deref() == Some(id) {
            self.new_draft();
        }
        Ok(DeleteOutcome::Deleted)
    }

    /// Deletes every entry after confirmation and resets the editor.
    /// Returns `None` when declined.
    pub fn clear_all(&mut self) -> AppResult<Option<usize>> {
        let question = format!(
            "Delete all {} entries? This cannot be undone.",
            self.store.len()
        );
        if !self.prompt.confirm(&question)? {
            info!("Clear all declined");
            return Ok(None);
        }

        let removed = self.store.clear_all()?;
        self.new_draft();
        Ok(Some(removed))
    }

    /// Merges an export envelope into the store.
    pub fn import(&mut self, raw: &str, now: DateTime<Utc>) -> AppResult<ImportReport> {
        exchange::import_into(&mut self.store, raw, now)
    }

    /// Reads `path` and merges it into the store. A read failure changes nothing.
    pub fn import_file(&mut self, path: &Path, now: DateTime<Utc>) -> AppResult<ImportReport> {
        let raw = fs::read_to_string(path)?;
        self.import(&raw, now)
    }

    /// Writes every entry to `dir` and returns the file path.
    pub fn export_all(&self, dir: &Path, now: DateTime<Utc>) -> AppResult<PathBuf> {
        let envelope = exchange::export_all(self.store.entries(), now);
        exchange::write_envelope(dir, &exchange::export_all_file_name(now), &envelope)
    }

    /// Writes one entry to `dir` and returns the file path.
    pub fn export_entry(&self, id: &str, dir: &Path, now: DateTime<Utc>) -> AppResult<PathBuf> {
        let entry = self
            .store
            .get(id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;
        let envelope = exchange::export_one(entry, now);
        exchange::write_envelope(dir, &exchange::export_one_file_name(entry), &envelope)
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    pub fn set_sort(&mut self, order: SortOrder) {
        self.query.order = order;
    }

    pub fn toggle_sort(&mut self) -> SortOrder {
        self.query.order = self.query.order.toggle();
        self.query.order
    }

    /// The filtered, sorted list for display.
    pub fn view(&self) -> Vec<&Entry> {
        query::derive_view(self.store.entries(), &self.query)
    }
}
