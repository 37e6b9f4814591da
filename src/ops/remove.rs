//! Deleting entries, one or all, behind a confirmation.

use crate::errors::AppResult;
use crate::prompt::Prompt;
use crate::session::{DeleteOutcome, Session};
use crate::store::StorageSlot;
use std::io::Write;

const DECLINED_MESSAGE: &str = "Cancelled. Nothing was deleted.";

/// Deletes one entry after the session's prompt agrees.
///
/// An unknown id is reported on `out` without asking and is not an error.
pub fn delete_entry<S, P>(session: &mut Session<S, P>, id: &str, out: &mut impl Write) -> AppResult<()>
where
    S: StorageSlot,
    P: Prompt,
{
    match session.delete(id)? {
        DeleteOutcome::Deleted => writeln!(out, "Deleted entry {}", id)?,
        DeleteOutcome::Declined => writeln!(out, "{}", DECLINED_MESSAGE)?,
        DeleteOutcome::NotFound => writeln!(out, "No entry with id {}. Nothing was deleted.", id)?,
    }
    Ok(())
}

/// Deletes every entry after the session's prompt agrees.
pub fn clear_entries<S, P>(session: &mut Session<S, P>, out: &mut impl Write) -> AppResult<()>
where
    S: StorageSlot,
    P: Prompt,
{
    match session.clear_all()? {
        Some(removed) => {
            let noun = if removed == 1 { "entry" } else { "entries" };
            writeln!(out, "Deleted {} {}", removed, noun)?;
        }
        None => writeln!(out, "{}", DECLINED_MESSAGE)?,
    }
    Ok(())
}
