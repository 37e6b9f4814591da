use crate::constants::{APP_DESCRIPTION, APP_NAME};
use crate::logging::LogFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A small journal that lives in a single JSON file
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose (debug) logs to stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Writes a new entry. Opens the editor unless -m is given.
    New {
        /// Entry text, instead of opening the editor
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Rewrites an existing entry. Opens the editor on its text unless -m is given.
    Edit {
        /// Id of the entry to edit
        id: String,
        /// Replacement text, instead of opening the editor
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Prints one entry in full.
    Show {
        /// Id of the entry to show
        id: String,
    },

    /// Lists entries, newest first, with a title and preview for each.
    List {
        /// Only entries containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
        /// Oldest first
        #[arg(long)]
        asc: bool,
    },

    /// Deletes one entry after confirmation.
    Delete {
        /// Id of the entry to delete
        id: String,
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Deletes every entry after confirmation.
    Clear {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Writes entries to a JSON export file.
    Export {
        /// Export only this entry
        #[arg(long)]
        id: Option<String>,
        /// Directory to write the file into (defaults to the current directory)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Merges a JSON export file into the journal by entry id.
    Import {
        /// Export file to read
        file: PathBuf,
    },
}
