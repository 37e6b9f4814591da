//! Configuration management for the jotter application.
//!
//! This module handles loading and validating configuration settings from environment
//! variables, with sensible defaults. It supports configuring the data directory
//! holding the entry store and the editor command used to compose entries.
//!
//! # Environment Variables
//!
//! - `JOTTER_DIR`: Path to the data directory (defaults to ~/.local/share/jotter)
//! - `JOTTER_EDITOR`: Editor to use for composing entries
//! - `EDITOR`: Fallback editor if JOTTER_EDITOR is not set (defaults to "vim")
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DEFAULT_DATA_SUBDIR, DEFAULT_EDITOR_COMMAND, ENV_VAR_EDITOR, ENV_VAR_HOME, ENV_VAR_JOTTER_DIR,
    ENV_VAR_JOTTER_EDITOR, REDACTED_PLACEHOLDER,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Configuration for the jotter application.
///
/// # Examples
///
/// Creating a configuration manually:
/// ```
/// use jotter::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     editor: "nano".to_string(),
///     data_dir: PathBuf::from("/path/to/jotter"),
/// };
/// assert!(config.validate().is_ok());
/// ```
pub struct Config {
    /// Editor command used to compose entries.
    ///
    /// Loaded from `JOTTER_EDITOR`, then `EDITOR`, then defaults to "vim".
    /// Kept as given; it is only checked when the editor is launched, so an
    /// `EDITOR` with arguments does not block commands that never open it.
    pub editor: String,

    /// Directory holding `entries.json` and its lock file.
    ///
    /// Loaded from `JOTTER_DIR` with a fallback to ~/.local/share/jotter.
    pub data_dir: PathBuf,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("editor", &REDACTED_PLACEHOLDER)
            .field("data_dir", &REDACTED_PLACEHOLDER)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            editor: DEFAULT_EDITOR_COMMAND.to_string(),
            data_dir: PathBuf::from(""),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// The data directory path is expanded with `shellexpand`, so `~` and
    /// `$VAR` references work.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory path expansion fails
    /// or yields an empty path.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use jotter::Config;
    ///
    /// match Config::load() {
    ///     Ok(config) => println!("Loaded config with editor: {}", config.editor),
    ///     Err(err) => eprintln!("Failed to load config: {}", err),
    /// }
    /// ```
    pub fn load() -> AppResult<Self> {
        let editor = env::var(ENV_VAR_JOTTER_EDITOR)
            .or_else(|_| env::var(ENV_VAR_EDITOR))
            .unwrap_or_else(|_| DEFAULT_EDITOR_COMMAND.to_string());

        let data_dir_str = env::var(ENV_VAR_JOTTER_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
        });

        let expanded_path = shellexpand::full(&data_dir_str)
            .map_err(|e| AppError::Config(format!("Failed to expand path: {}", e)))?;
        let data_dir = PathBuf::from(expanded_path.into_owned());

        if data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        Ok(Config { editor, data_dir })
    }

    /// Validates that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` with one of the following messages:
    /// - "Data directory path is empty"
    /// - "Editor command is empty"
    /// - "Data directory must be an absolute path"
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("Data directory path is empty".to_string()));
        }

        if self.editor.is_empty() {
            return Err(AppError::Config("Editor command is empty".to_string()));
        }

        if !self.data_dir.is_absolute() {
            return Err(AppError::Config(
                "Data directory must be an absolute path".to_string(),
            ));
        }

        Ok(())
    }
}
