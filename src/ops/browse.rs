//! Listing and reading entries.

use crate::constants::DATE_FORMAT_DISPLAY;
use crate::entry::Entry;
use crate::errors::{AppError, AppResult};
use crate::prompt::Prompt;
use crate::query::{preview_of, title_of, SortOrder};
use crate::session::Session;
use crate::store::StorageSlot;
use chrono::{DateTime, Local, Utc};
use std::io::Write;

/// Prints the filtered, sorted list: one block per entry with its id,
/// creation time, title and preview.
pub fn list_entries<S, P>(
    session: &mut Session<S, P>,
    search: Option<&str>,
    ascending: bool,
    out: &mut impl Write,
) -> AppResult<()>
where
    S: StorageSlot,
    P: Prompt,
{
    session.set_search(search.unwrap_or_default());
    session.set_sort(if ascending {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    });

    let view = session.view();
    if view.is_empty() {
        if session.store().is_empty() {
            writeln!(out, "No entries yet.")?;
        } else {
            writeln!(out, "No entries match your search.")?;
        }
        return Ok(());
    }

    for entry in view {
        write_summary(entry, out)?;
    }
    Ok(())
}

/// Prints one entry in full.
///
/// # Errors
///
/// Returns `AppError::NotFound` if no entry has that id.
pub fn show_entry<S, P>(session: &Session<S, P>, id: &str, out: &mut impl Write) -> AppResult<()>
where
    S: StorageSlot,
    P: Prompt,
{
    let entry = session
        .store()
        .get(id)
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    writeln!(out, "{}", title_of(&entry.content))?;
    writeln!(out, "id:      {}", entry.id)?;
    writeln!(out, "created: {}", local_time(&entry.created_at))?;
    writeln!(out, "updated: {}", local_time(&entry.updated_at))?;
    writeln!(out)?;
    writeln!(out, "{}", entry.content.trim_end())?;
    Ok(())
}

fn write_summary(entry: &Entry, out: &mut impl Write) -> AppResult<()> {
    writeln!(
        out,
        "{}  {}  {}",
        local_time(&entry.created_at),
        entry.id,
        title_of(&entry.content)
    )?;
    for line in preview_of(&entry.content).lines() {
        writeln!(out, "    {}", line)?;
    }
    writeln!(out)?;
    Ok(())
}

fn local_time(ts: &DateTime<Utc>) -> String {
    ts.with_timezone(&Local).format(DATE_FORMAT_DISPLAY).to_string()
}
