//! File-backed storage slot.
//!
//! The collection lives in `entries.json` inside the data directory. Writes go
//! to a temp file in the same directory which is then renamed over the old
//! file, so a crash mid-write never leaves a truncated store behind. An
//! exclusive lock on `entries.lock` is held for as long as the slot lives.

use super::StorageSlot;
use crate::constants::{LOCK_FILE_NAME, STORE_FILE_NAME};
use crate::errors::{AppError, AppResult, LockError};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
#[cfg(unix)]
use std::fs::Permissions;
use std::io::{self, Write};
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Ensures the data directory exists, creating it if necessary.
///
/// # Errors
///
/// Returns:
/// - `AppError::Config` if the provided path is not an absolute path
/// - `AppError::Io` if the directory creation fails
pub fn ensure_data_directory_exists(data_dir: &Path) -> AppResult<()> {
    if !data_dir.is_absolute() {
        return Err(AppError::Config(format!(
            "Data directory path must be absolute: {}",
            data_dir.display()
        )));
    }

    if !data_dir.exists() {
        fs::create_dir_all(data_dir).map_err(|e| {
            AppError::Io(io::Error::new(
                e.kind(),
                format!("Failed to create data directory: {}", e),
            ))
        })?;

        #[cfg(unix)]
        {
            let permissions = Permissions::from_mode(crate::constants::DEFAULT_DIR_PERMISSIONS);
            fs::set_permissions(data_dir, permissions).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("Failed to set secure permissions on data directory: {}", e),
                ))
            })?;
            debug!("Set 0o700 permissions on data directory");
        }
    }
    Ok(())
}

/// [`StorageSlot`] backed by `entries.json` in a data directory.
#[derive(Debug)]
pub struct FileSlot {
    path: PathBuf,
    // Held only for its lock; dropping it releases the lock.
    _lock: File,
}

impl FileSlot {
    /// Opens the slot in `data_dir`, creating the directory if needed and
    /// taking the store lock.
    ///
    /// # Errors
    ///
    /// - `LockError::StoreBusy` if another process holds the lock.
    /// - `LockError::AcquisitionFailed` if the lock file cannot be opened or locked.
    /// - Errors from [`ensure_data_directory_exists`].
    pub fn open(data_dir: &Path) -> AppResult<Self> {
        ensure_data_directory_exists(data_dir)?;

        let lock_path = data_dir.join(LOCK_FILE_NAME);
        let lock = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|source| LockError::AcquisitionFailed {
                path: lock_path.clone(),
                source,
            })?;

        if let Err(e) = lock.try_lock_exclusive() {
            let contended = e.kind() == io::ErrorKind::WouldBlock
                || e.raw_os_error() == fs2::lock_contended_error().raw_os_error();
            return Err(if contended {
                LockError::StoreBusy { path: lock_path }.into()
            } else {
                LockError::AcquisitionFailed {
                    path: lock_path,
                    source: e,
                }
                .into()
            });
        }
        debug!("Acquired store lock");

        Ok(FileSlot {
            path: data_dir.join(STORE_FILE_NAME),
            _lock: lock,
        })
    }

    /// Path of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> AppResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    fn write(&self, payload: &str) -> AppResult<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(payload.as_bytes())?;
        temp.as_file().sync_all()?;

        #[cfg(unix)]
        {
            let permissions = Permissions::from_mode(crate::constants::DEFAULT_FILE_PERMISSIONS);
            temp.as_file().set_permissions(permissions)?;
        }

        temp.persist(&self.path).map_err(|e| AppError::Io(e.error))?;
        Ok(())
    }
}
