//! Constants used throughout the application.
//!
//! This module contains all constants used in the Jotter application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "jotter";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A small journal that lives in a single JSON file";

// CLI Arguments & Defaults
/// Default command for the editor if not specified otherwise.
pub const DEFAULT_EDITOR_COMMAND: &str = "vim";
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Jotter data directory.
pub const ENV_VAR_JOTTER_DIR: &str = "JOTTER_DIR";
/// Environment variable for specifying the preferred Jotter editor.
pub const ENV_VAR_JOTTER_EDITOR: &str = "JOTTER_EDITOR";
/// Standard environment variable for specifying the default editor.
pub const ENV_VAR_EDITOR: &str = "EDITOR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory for the data directory within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".local/share/jotter";

// Validation
/// Characters forbidden in editor commands for security reasons.
pub const EDITOR_FORBIDDEN_CHARS: &[char] =
    &['|', '&', ';', '$', '(', ')', '`', '\\', '<', '>', '\'', '"'];
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

// File System Parameters
/// Name of the file holding the persisted entry collection.
pub const STORE_FILE_NAME: &str = "entries.json";
/// Name of the advisory lock file guarding the store.
pub const LOCK_FILE_NAME: &str = "entries.lock";
/// Suffix of the scratch file handed to the editor.
pub const DRAFT_FILE_SUFFIX: &str = ".md";
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
/// Default POSIX permissions for newly created files (owner read/write).
#[cfg(unix)]
pub const DEFAULT_FILE_PERMISSIONS: u32 = 0o600;

// Exchange Format
/// Envelope version written on export.
pub const EXPORT_VERSION: u32 = 2;
/// File name prefix for a full export.
pub const EXPORT_ALL_PREFIX: &str = "jotter-export-";
/// File name prefix for a single-entry export.
pub const EXPORT_ONE_PREFIX: &str = "jotter-entry-";
/// File extension for export files.
pub const EXPORT_FILE_EXTENSION: &str = ".json";
/// Date format used in export file names.
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Local date and time format used by `list` and `show`.
pub const DATE_FORMAT_DISPLAY: &str = "%Y-%m-%d %H:%M";

// Display
/// Maximum number of characters in a derived title.
pub const TITLE_MAX_CHARS: usize = 60;
/// Maximum number of characters in a derived preview.
pub const PREVIEW_MAX_CHARS: usize = 180;
/// Title shown when an entry has no non-blank line.
pub const UNTITLED_LABEL: &str = "Untitled entry";
/// Preview shown when an entry has no content.
pub const NO_PREVIEW_LABEL: &str = "No preview";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "jotter";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
