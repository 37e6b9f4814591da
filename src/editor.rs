//! Editor abstraction for composing entry text.
//!
//! The terminal counterpart of a text area: the draft is written to a scratch
//! file, the user edits it in an external editor, and the result is read
//! back. Keeping this behind a trait lets the session and tests run without a
//! real editor.

use crate::constants::{DRAFT_FILE_SUFFIX, EDITOR_FORBIDDEN_CHARS};
use crate::errors::{AppError, AppResult, EditorError};
use std::fs;
use std::io::{self, Write};
use std::process::Command;
use tracing::debug;

/// Trait defining the interface for an editor component.
///
/// # Examples
///
/// ```
/// use jotter::editor::Editor;
/// use jotter::errors::AppResult;
///
/// struct Shout;
///
/// impl Editor for Shout {
///     fn compose(&self, initial: &str) -> AppResult<String> {
///         Ok(initial.to_uppercase())
///     }
/// }
///
/// assert_eq!(Shout.compose("hi").unwrap(), "HI");
/// ```
pub trait Editor {
    /// Lets the user edit `initial` and returns the edited text.
    ///
    /// # Errors
    ///
    /// Implementations return `AppError::Editor` when the user cancels or
    /// the editor cannot be run.
    fn compose(&self, initial: &str) -> AppResult<String>;
}

/// Checks that an editor command can be run directly, without a shell.
///
/// The command must be non-empty, contain no spaces and no shell
/// metacharacters. Editors that need arguments should be wrapped in a
/// script.
///
/// # Errors
///
/// Returns `AppError::Config` naming the offending part of the command.
pub fn validate_command(editor_cmd: &str) -> AppResult<&str> {
    if editor_cmd.is_empty() {
        return Err(AppError::Config(
            "Editor command cannot be empty".to_string(),
        ));
    }

    if editor_cmd.contains(' ') {
        return Err(AppError::Config(
            "Editor command cannot contain spaces. Use a wrapper script or shell alias for editors requiring arguments".to_string(),
        ));
    }

    if let Some(ch) = editor_cmd.chars().find(|c| EDITOR_FORBIDDEN_CHARS.contains(c)) {
        return Err(AppError::Config(format!(
            "Editor command cannot contain shell metacharacters: '{}'. Use a wrapper script or shell alias instead",
            ch
        )));
    }

    Ok(editor_cmd)
}

/// An [`Editor`] that launches an external command on a scratch file.
///
/// # Examples
///
/// ```no_run
/// use jotter::editor::{Editor, SystemEditor};
///
/// let editor = SystemEditor {
///     editor_cmd: "vim".to_string(),
/// };
/// let text = editor.compose("Dear diary,\n").expect("editor failed");
/// ```
pub struct SystemEditor {
    /// The command to use (e.g., "vim", "nano").
    pub editor_cmd: String,
}

impl Editor for SystemEditor {
    /// Writes `initial` to a temp file, runs the editor on it and reads the
    /// file back. The temp file is removed afterwards.
    ///
    /// # Errors
    ///
    /// - `AppError::Config` if the command fails [`validate_command`]; no
    ///   scratch file is created in that case.
    /// - `EditorError::CommandNotFound` / `PermissionDenied` / `ExecutionFailed`
    ///   if the process cannot be started.
    /// - `EditorError::NonZeroExit` if the editor exits with a failure status,
    ///   which is how the user abandons a draft.
    fn compose(&self, initial: &str) -> AppResult<String> {
        let editor_cmd = validate_command(&self.editor_cmd)?;
        let mut scratch = tempfile::Builder::new()
            .prefix("jotter-draft-")
            .suffix(DRAFT_FILE_SUFFIX)
            .tempfile()?;
        scratch.write_all(initial.as_bytes())?;
        scratch.flush()?;

        debug!("Launching editor on draft file");
        let status = Command::new(editor_cmd)
            .arg(scratch.path())
            .status()
            .map_err(|source| self.launch_error(source))?;

        if !status.success() {
            return Err(EditorError::NonZeroExit {
                command: self.editor_cmd.clone(),
                status_code: status.code().unwrap_or(-1),
            }
            .into());
        }

        Ok(fs::read_to_string(scratch.path())?)
    }
}

impl SystemEditor {
    fn launch_error(&self, source: io::Error) -> EditorError {
        let command = self.editor_cmd.clone();
        match source.kind() {
            io::ErrorKind::NotFound => EditorError::CommandNotFound { command, source },
            io::ErrorKind::PermissionDenied => EditorError::PermissionDenied { command, source },
            _ => EditorError::ExecutionFailed { command, source },
        }
    }
}
