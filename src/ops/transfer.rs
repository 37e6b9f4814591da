//! Export to and import from JSON files.

use crate::entry;
use crate::errors::AppResult;
use crate::prompt::Prompt;
use crate::session::Session;
use crate::store::StorageSlot;
use std::io::Write;
use std::path::Path;

/// Writes one entry (`id` given) or all entries into `dir`.
///
/// # Errors
///
/// - `AppError::NotFound` if `id` does not match an entry.
/// - `AppError::Io` if `dir` is missing or the file cannot be written.
pub fn export_entries<S, P>(
    session: &Session<S, P>,
    id: Option<&str>,
    dir: &Path,
    out: &mut impl Write,
) -> AppResult<()>
where
    S: StorageSlot,
    P: Prompt,
{
    let now = entry::now();
    let path = match id {
        Some(id) => session.export_entry(id, dir, now)?,
        None => session.export_all(dir, now)?,
    };
    writeln!(out, "Exported to {}", path.display())?;
    Ok(())
}

/// Merges an export file into the store by id.
///
/// # Errors
///
/// - `AppError::Io` if the file cannot be read.
/// - `AppError::Import` if it is not a recognizable export; the store is
///   left untouched.
pub fn import_entries<S, P>(session: &mut Session<S, P>, file: &Path, out: &mut impl Write) -> AppResult<()>
where
    S: StorageSlot,
    P: Prompt,
{
    let report = session.import_file(file, entry::now())?;
    writeln!(out, "{}.", report.summary())?;
    Ok(())
}
