//! User-facing operations behind each CLI command.
//!
//! Each handler takes a [`Session`] plus whatever the command needs, and
//! writes its user-facing output to the given writer. [`run`] wires the real
//! pieces together: the on-disk store, the terminal prompt and the system
//! editor.

pub mod browse;
pub mod compose;
pub mod remove;
pub mod transfer;

pub use browse::{list_entries, show_entry};
pub use compose::{edit_entry, new_entry};
pub use remove::{clear_entries, delete_entry};
pub use transfer::{export_entries, import_entries};

use crate::cli::Command;
use crate::config::Config;
use crate::editor::SystemEditor;
use crate::errors::AppResult;
use crate::prompt::{FixedAnswer, Prompt, TerminalPrompt};
use crate::session::Session;
use crate::store::{EntryStore, FileSlot};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::debug;

/// Executes one CLI command against the store in `config.data_dir`.
///
/// The store lock is held for the whole command, so a second invocation
/// running at the same time fails with `LockError::StoreBusy`.
///
/// # Errors
///
/// Propagates whatever the handler returns; see the individual operations.
pub fn run(command: Command, config: &Config) -> AppResult<()> {
    let slot = FileSlot::open(&config.data_dir)?;
    let store = EntryStore::load(slot);
    debug!(entries = store.len(), "Store loaded");

    let editor = SystemEditor {
        editor_cmd: config.editor.clone(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match command {
        Command::New { message } => {
            let mut session = Session::new(store, prompt_for(false));
            new_entry(&mut session, &editor, message, &mut out)
        }
        Command::Edit { id, message } => {
            let mut session = Session::new(store, prompt_for(false));
            edit_entry(&mut session, &editor, &id, message, &mut out)
        }
        Command::Show { id } => {
            let session = Session::new(store, prompt_for(false));
            show_entry(&session, &id, &mut out)
        }
        Command::List { search, asc } => {
            let mut session = Session::new(store, prompt_for(false));
            list_entries(&mut session, search.as_deref(), asc, &mut out)
        }
        Command::Delete { id, yes } => {
            let mut session = Session::new(store, prompt_for(yes));
            delete_entry(&mut session, &id, &mut out)
        }
        Command::Clear { yes } => {
            let mut session = Session::new(store, prompt_for(yes));
            clear_entries(&mut session, &mut out)
        }
        Command::Export { id, output } => {
            let session = Session::new(store, prompt_for(false));
            let dir = output.unwrap_or_else(|| PathBuf::from("."));
            export_entries(&session, id.as_deref(), &dir, &mut out)
        }
        Command::Import { file } => {
            let mut session = Session::new(store, prompt_for(false));
            import_entries(&mut session, &file, &mut out)
        }
    };

    out.flush()?;
    result
}

/// `--yes` skips the question; otherwise ask on the terminal.
fn prompt_for(yes: bool) -> Box<dyn Prompt> {
    if yes {
        Box::new(FixedAnswer(true))
    } else {
        Box::new(TerminalPrompt)
    }
}
