//! # Storage Layer
//!
//! The record set lives in a single JSON file: a pretty-printed array of
//! record objects, in insertion order.
//!
//! ```text
//! students.json
//! [
//!   { "name": "Budi Santoso", "id": "12345678", ... },
//!   ...
//! ]
//! ```
//!
//! ## Layers
//!
//! - [`backend::StorageBackend`]: raw I/O, load and save the whole list.
//!   - [`fs_backend::FsBackend`]: production, file on disk.
//!   - [`mem_backend::MemBackend`]: tests, keeps the serialized list in memory.
//! - [`record_store::RecordStore`]: the rules. Validation, id uniqueness,
//!   category defaults, statistics. Implements [`DataStore`].
//!
//! ## Persistence Contract
//!
//! Every mutation is a full read-modify-write of the list. Writes go to a temp
//! file that is renamed over the data file, so a reader sees either the old or
//! the new list, never a torn one. There is no locking: concurrent writers race
//! and the last successful write wins.
//!
//! Missing or corrupt files read as an empty list. Opening a store initializes
//! a missing file and replaces a corrupt one (with a warning). Write failures
//! are always returned to the caller.

use crate::error::Result;
use crate::model::{NewRecord, Record, RecordFilter, RecordPatch, Status};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

/// Aggregate figures over the whole record set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub total: usize,
    pub per_department: BTreeMap<String, usize>,
    pub per_status: BTreeMap<Status, usize>,
    /// Mean gpa over records that carry one, rounded to 2 decimals.
    pub average_gpa: f64,
    pub records_with_gpa: usize,
}

/// The record store operation surface.
pub trait DataStore {
    /// Validate and append a new record, returning it as stored.
    fn create(&mut self, input: NewRecord) -> Result<Record>;

    /// Snapshot of every record in insertion order. Never fails: an unreadable
    /// file reads as empty.
    fn read_all(&self) -> Vec<Record>;

    /// Snapshot restricted to `filter`, order preserved.
    fn read_filtered(&self, filter: &RecordFilter) -> Vec<Record> {
        self.read_all()
            .into_iter()
            .filter(|record| filter.matches(record))
            .collect()
    }

    fn read_by_id(&self, id: &str) -> Result<Record>;

    /// Apply a partial update. Either every provided field is applied or none.
    fn update(&mut self, id: &str, patch: RecordPatch) -> Result<Record>;

    /// Remove a record, returning it.
    fn delete(&mut self, id: &str) -> Result<Record>;

    fn statistics(&self) -> Statistics;

    /// Where the records live (a real path for files, a virtual one otherwise).
    fn location(&self) -> PathBuf;
}
