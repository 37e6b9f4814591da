/*!
# Jotter

Jotter is a small journal that keeps every entry in a single JSON file. Entries
are free-form text with an id and creation/update timestamps; they can be
searched, listed newest or oldest first, and moved between machines through
JSON export files that merge back in by id.

## Core Features

- Write new entries and rewrite existing ones in your editor (or with `-m`)
- List entries with a derived title and preview, filtered by a case-insensitive search
- Delete one entry or clear the journal, always behind a confirmation
- Export everything, or a single entry, to a versioned JSON file
- Import an export file, replacing entries with matching ids and adding the rest

## Architecture

- `entry`: The entry record, id generation and timestamp format
- `store`: The persisted collection and the storage slot it lives in
- `query`: Search, sort and the title/preview helpers for display
- `exchange`: Export envelopes and the import parser/merger
- `session`: Active id, draft and query state around a store
- `ops`: One handler per CLI command
- `cli`, `config`, `logging`, `errors`: The ambient application layers

## Usage Example

```rust,no_run
use jotter::prompt::FixedAnswer;
use jotter::session::Session;
use jotter::store::{EntryStore, FileSlot};
use jotter::{entry, Config};

fn main() -> jotter::AppResult<()> {
    let config = Config::load()?;
    let store = EntryStore::load(FileSlot::open(&config.data_dir)?);
    let mut session = Session::new(store, FixedAnswer(false));

    session.set_draft("Walked to the lake before work.");
    let id = session.save(entry::now())?;
    println!("Saved {}", id);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application constants
pub mod constants;
/// External editor integration
pub mod editor;
/// The journal entry record
pub mod entry;
/// Error types and utilities for error handling
pub mod errors;
/// JSON export and import
pub mod exchange;
/// Tracing subscriber setup
pub mod logging;
/// Command handlers
pub mod ops;
/// Confirmation prompts
pub mod prompt;
/// Search and sort over entries
pub mod query;
/// Editor state around a store
pub mod session;
/// Persistence of the entry collection
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use entry::Entry;
pub use errors::{AppError, AppResult};
pub use exchange::ImportReport;
pub use query::{QueryState, SortOrder};
pub use session::Session;
pub use store::{EntryStore, StorageSlot};
