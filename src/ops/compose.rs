//! Writing new entries and rewriting existing ones.

use crate::editor::Editor;
use crate::entry;
use crate::errors::{AppError, AppResult, EditorError};
use crate::prompt::Prompt;
use crate::session::Session;
use crate::store::StorageSlot;
use std::io::Write;
use tracing::info;

/// Composes and saves a new entry.
///
/// The text comes from `message` when given, otherwise from the editor
/// opened on a blank draft. Quitting the editor with a failure status
/// discards the draft.
///
/// # Errors
///
/// - `AppError::Validation` if the text is empty after trimming.
/// - `AppError::Editor` if the editor cannot be launched.
/// - Store errors if the write fails.
pub fn new_entry<S, P>(
    session: &mut Session<S, P>,
    editor: &dyn Editor,
    message: Option<String>,
    out: &mut impl Write,
) -> AppResult<()>
where
    S: StorageSlot,
    P: Prompt,
{
    session.new_draft();
    let Some(text) = draft_text(session, editor, message, out)? else {
        return Ok(());
    };

    session.set_draft(text);
    let id = session.save(entry::now())?;
    writeln!(out, "Saved entry {}", id)?;
    Ok(())
}

/// Loads `id` into the editor and saves the result as an update.
///
/// Text identical to the stored content is not saved, so `updatedAt` only
/// moves when something changed.
///
/// # Errors
///
/// - `AppError::NotFound` if no entry has that id.
/// - Otherwise as [`new_entry`].
pub fn edit_entry<S, P>(
    session: &mut Session<S, P>,
    editor: &dyn Editor,
    id: &str,
    message: Option<String>,
    out: &mut impl Write,
) -> AppResult<()>
where
    S: StorageSlot,
    P: Prompt,
{
    session.edit(id)?;
    let Some(text) = draft_text(session, editor, message, out)? else {
        return Ok(());
    };

    if text == session.draft() {
        writeln!(out, "No changes to entry {}", id)?;
        return Ok(());
    }

    session.set_draft(text);
    session.save(entry::now())?;
    writeln!(out, "Updated entry {}", id)?;
    Ok(())
}

/// `None` means the user abandoned the editor.
fn draft_text<S, P>(
    session: &mut Session<S, P>,
    editor: &dyn Editor,
    message: Option<String>,
    out: &mut impl Write,
) -> AppResult<Option<String>>
where
    S: StorageSlot,
    P: Prompt,
{
    if let Some(text) = message {
        return Ok(Some(text));
    }

    match editor.compose(session.draft()) {
        Ok(text) => Ok(Some(text)),
        Err(AppError::Editor(EditorError::NonZeroExit { status_code, .. })) => {
            info!(status_code, "Editor exited with failure, draft discarded");
            session.cancel();
            writeln!(out, "Draft discarded, nothing saved.")?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
