use super::StorageSlot;
use crate::errors::{AppError, AppResult};
use std::cell::{Cell, RefCell};
use std::io;

/// In-memory [`StorageSlot`], for tests and embedding.
///
/// Reads and writes can be made to fail on demand to exercise the store's
/// error paths.
#[derive(Debug, Default)]
pub struct MemorySlot {
    payload: RefCell<Option<String>>,
    writes: Cell<usize>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(payload: &str) -> Self {
        let slot = Self::default();
        slot.payload.replace(Some(payload.to_string()));
        slot
    }

    /// The last payload written (or the seeded one).
    pub fn payload(&self) -> Option<String> {
        self.payload.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> AppResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(AppError::Io(io::Error::other("simulated read failure")));
        }
        Ok(self.payload())
    }

    fn write(&self, payload: &str) -> AppResult<()> {
        if self.fail_writes.get() {
            return Err(AppError::Io(io::Error::other("simulated write failure")));
        }
        self.payload.replace(Some(payload.to_string()));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
