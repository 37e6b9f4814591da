//! Derived, display-ready views of the entry collection.
//!
//! Everything here is pure: the view is recomputed from the collection and the
//! current filter state whenever either changes. Journals are small enough
//! that a linear scan plus a sort is all the indexing needed.

use crate::constants::{NO_PREVIEW_LABEL, PREVIEW_MAX_CHARS, TITLE_MAX_CHARS, UNTITLED_LABEL};
use crate::entry::Entry;

/// Chronological ordering of the view by `created_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Oldest first.
    Ascending,
    /// Newest first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// Transient filter state: search text and sort order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub order: SortOrder,
}

impl QueryState {
    pub fn new(search: impl Into<String>, order: SortOrder) -> Self {
        QueryState {
            search: search.into(),
            order,
        }
    }
}

/// Filters and sorts `entries` for display.
///
/// The search text is trimmed and matched case-insensitively as a substring
/// of each entry's content; an empty query keeps everything. Entries with the
/// same `created_at` keep their store order.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use jotter::entry::Entry;
/// use jotter::query::{derive_view, QueryState, SortOrder};
///
/// let older = Entry::new("Walked the dog", Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap());
/// let newer = Entry::new("Fed the DOG", Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap());
/// let entries = vec![older, newer];
///
/// let view = derive_view(&entries, &QueryState::new(" dog ", SortOrder::Descending));
/// assert_eq!(view.len(), 2);
/// assert_eq!(view[0].content, "Fed the DOG");
/// ```
pub fn derive_view<'a>(entries: &'a [Entry], state: &QueryState) -> Vec<&'a Entry> {
    let needle = state.search.trim().to_lowercase();

    let mut view: Vec<&Entry> = entries
        .iter()
        .filter(|entry| needle.is_empty() || entry.content.to_lowercase().contains(&needle))
        .collect();

    match state.order {
        SortOrder::Ascending => view.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Descending => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    view
}

/// First non-blank line of `content`, trimmed and cut to 60 characters.
pub fn title_of(content: &str) -> String {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.chars().take(TITLE_MAX_CHARS).collect())
        .unwrap_or_else(|| UNTITLED_LABEL.to_string())
}

/// First 180 characters of the raw content, line breaks included.
pub fn preview_of(content: &str) -> String {
    if content.is_empty() {
        return NO_PREVIEW_LABEL.to_string();
    }
    content.chars().take(PREVIEW_MAX_CHARS).collect()
}
