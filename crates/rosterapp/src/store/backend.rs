use crate::error::Result;
use crate::model::Record;
use std::path::PathBuf;

/// Abstract interface for raw record storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecordStore handles the "what" (validation, uniqueness, statistics).
pub trait StorageBackend {
    /// Load the full record list.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err(RosterError::Corrupt) if the stored data cannot be parsed,
    /// and other errors for actual I/O failures.
    fn load_records(&self) -> Result<Option<Vec<Record>>>;

    /// Replace the stored list with `records`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn save_records(&self, records: &[Record]) -> Result<()>;

    /// The storage location. For FsBackend, the real path. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
