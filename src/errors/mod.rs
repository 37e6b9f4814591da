//! Error handling utilities for the jotter application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents specific error cases that can occur when interacting with external editors.
///
/// Each variant captures the editor command and, where there is one, the
/// underlying I/O error.
///
/// # Examples
///
/// ```
/// use jotter::errors::EditorError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "command not found");
/// let error = EditorError::CommandNotFound {
///     command: "vim".to_string(),
///     source: io_error,
/// };
///
/// assert!(format!("{}", error).contains("not found"));
/// assert!(format!("{}", error).contains("vim"));
/// ```
///
/// ```
/// use jotter::errors::EditorError;
///
/// let error = EditorError::NonZeroExit {
///     command: "vim".to_string(),
///     status_code: 1,
/// };
///
/// assert!(format!("{}", error).contains("non-zero status code"));
/// ```
#[derive(Debug, Error)]
pub enum EditorError {
    /// Error when the specified editor command cannot be found.
    #[error("Editor command '{command}' not found: {source}. Please check that the editor is installed and available in your PATH.")]
    CommandNotFound {
        /// The editor command that was not found
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when permission is denied to execute the editor command.
    #[error("Permission denied when trying to execute editor '{command}': {source}. Please check file permissions or try running with appropriate access rights.")]
    PermissionDenied {
        /// The editor command that had permission denied
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor command fails to execute due to other I/O errors.
    #[error("Failed to execute editor '{command}': {source}")]
    ExecutionFailed {
        /// The editor command that failed to execute
        command: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Error when the editor exits with a non-zero status code.
    ///
    /// This is how a user cancels a draft (`:cq` in vim), so callers treat it
    /// as "nothing saved".
    #[error("Editor '{command}' exited with non-zero status code: {status_code}. The draft was discarded.")]
    NonZeroExit {
        /// The editor command that exited with a non-zero status
        command: String,
        /// The exit status code
        status_code: i32,
    },
}

/// Represents errors that can occur when locking the entry store.
///
/// # Examples
///
/// ```
/// use jotter::errors::LockError;
/// use std::path::PathBuf;
///
/// let error = LockError::StoreBusy {
///     path: PathBuf::from("/data/jotter/entries.lock"),
/// };
///
/// assert!(format!("{}", error).contains("another jotter process"));
/// ```
#[derive(Debug, Error)]
pub enum LockError {
    /// Error when the store is already locked by another process.
    #[error("The journal is in use by another jotter process (lock file: {path}). Wait for it to finish and try again.")]
    StoreBusy {
        /// The path to the lock file
        path: PathBuf,
    },

    /// Error when acquiring the lock fails for a technical reason.
    #[error("Failed to acquire lock {path}: {source}. Please check file permissions and ensure the directory is accessible.")]
    AcquisitionFailed {
        /// The path to the lock file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// Reasons an import file is rejected.
///
/// Every variant leaves the store untouched.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file is not valid JSON.
    #[error("Invalid export file: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The JSON has neither an `entries` array nor an `entry` object.
    #[error("Invalid export file: expected an \"entries\" array or an \"entry\" object")]
    UnrecognizedShape,

    /// A candidate record is not a JSON object.
    #[error("Invalid export file: record {index} is not an entry")]
    InvalidEntry {
        /// Position of the record in the file
        index: usize,
    },
}

/// Represents all possible errors that can occur in the jotter application.
///
/// # Examples
///
/// ```
/// use jotter::errors::AppError;
///
/// let error = AppError::Config("Missing data directory".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Missing data directory");
/// ```
///
/// ```
/// use jotter::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A user action was rejected before anything changed (e.g. saving an empty draft).
    #[error("{0}")]
    Validation(String),

    /// An entry id that does not exist in the store.
    #[error("Entry not found: {0}")]
    NotFound(String),

    /// Errors serializing the store or an export envelope.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Errors when interacting with the text editor.
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),

    /// Errors related to locking the store.
    #[error("Store locking error: {0}")]
    Lock(#[from] LockError),

    /// Errors reading an import file.
    #[error("Failed to import: {0}")]
    Import(#[from] ImportError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use jotter::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::Validation("Something went wrong".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_display() {
        let config_error = AppError::Config("Invalid configuration".to_string());
        assert_eq!(
            format!("{}", config_error),
            "Configuration error: Invalid configuration"
        );

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let app_io_error = AppError::Io(io_error);
        assert_eq!(format!("{}", app_io_error), "I/O error: permission denied");

        let validation = AppError::Validation("Nothing to save: entry is empty".to_string());
        assert_eq!(format!("{}", validation), "Nothing to save: entry is empty");

        let not_found = AppError::NotFound("abc-123".to_string());
        assert_eq!(format!("{}", not_found), "Entry not found: abc-123");

        let lock_error = LockError::StoreBusy {
            path: PathBuf::from("/data/entries.lock"),
        };
        let app_error = AppError::Lock(lock_error);
        assert!(format!("{}", app_error).contains("Store locking error"));
        assert!(format!("{}", app_error).contains("/data/entries.lock"));
    }

    #[test]
    fn test_editor_error_variants() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "command not found");
        let error = EditorError::CommandNotFound {
            command: "vim".to_string(),
            source: io_error,
        };
        assert!(format!("{}", error).contains("not found"));
        assert!(format!("{}", error).contains("vim"));

        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
        let error = EditorError::PermissionDenied {
            command: "vim".to_string(),
            source: io_error,
        };
        assert!(format!("{}", error).contains("Permission denied"));

        let error = EditorError::ExecutionFailed {
            command: "vim".to_string(),
            source: io::Error::other("some other error"),
        };
        assert!(format!("{}", error).contains("Failed to execute"));

        let error = EditorError::NonZeroExit {
            command: "vim".to_string(),
            status_code: 1,
        };
        assert!(format!("{}", error).contains("non-zero status code"));
        assert!(format!("{}", error).contains("discarded"));
    }

    #[test]
    fn test_import_error_display_mentions_invalid_file() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{\"entries\": [").unwrap_err();
        let errors = [
            ImportError::InvalidJson(parse_error),
            ImportError::UnrecognizedShape,
            ImportError::InvalidEntry { index: 3 },
        ];

        for error in errors {
            let message = AppError::Import(error).to_string();
            assert!(message.starts_with("Failed to import: Invalid export file"));
        }
    }

    #[test]
    fn test_error_source_chaining() {
        let error = AppError::Editor(EditorError::ExecutionFailed {
            command: "nano".to_string(),
            source: io::Error::other("spawn failed"),
        });

        let editor_error = error.source().expect("AppError::Editor should have a source");
        let io_error = editor_error
            .source()
            .expect("EditorError::ExecutionFailed should have a source");
        assert_eq!(io_error.to_string(), "spawn failed");
    }

    #[test]
    fn test_result_combinators() {
        let io_result: Result<(), io::Error> = Err(io::Error::other("test error"));
        let app_result: AppResult<()> = io_result.map_err(AppError::Io);

        match app_result {
            Err(AppError::Io(inner)) => {
                assert_eq!(inner.kind(), io::ErrorKind::Other);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }
}
