use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::Record;
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Holds the serialized list exactly as the file backend would write it, so
/// tests go through the same serde path and can plant unparsable content.
///
/// Uses `RefCell` for interior mutability since the store is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    content: RefCell<Option<String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Replace the stored content with raw text (e.g. to simulate corruption).
    pub fn set_raw(&self, raw: impl Into<String>) {
        *self.content.borrow_mut() = Some(raw.into());
    }

    /// The stored content, as it would appear on disk.
    pub fn raw(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn load_records(&self) -> Result<Option<Vec<Record>>> {
        let content = self.content.borrow();
        match content.as_deref() {
            None => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|source| RosterError::Corrupt {
                    path: self.location(),
                    source,
                }),
        }
    }

    fn save_records(&self, records: &[Record]) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RosterError::Storage("Simulated write error".to_string()));
        }
        let raw = serde_json::to_string_pretty(records).map_err(RosterError::Serialization)?;
        *self.content.borrow_mut() = Some(raw);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://students.json")
    }
}
