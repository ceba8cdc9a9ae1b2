//! # API Facade
//!
//! The single entry point for roster operations, whatever the UI. Each method
//! dispatches to a command in [`crate::commands`] and returns its
//! [`CmdResult`](commands::CmdResult).
//!
//! The facade holds no business logic, prints nothing and keeps no global
//! state: the store and the configured default algorithms travel with it.
//!
//! ## Generic Over DataStore
//!
//! `RosterApi<S: DataStore>` is generic over the store:
//! - Production: `RosterApi<RecordStore<FsBackend>>`
//! - Testing: `RosterApi<RecordStore<MemBackend>>`
//!
//! ## Testing Strategy
//!
//! API tests check dispatch and argument handling (default algorithms, field
//! names). Command behavior is tested in the command modules and store rules in
//! the store module.

use crate::algo::{Direction, SearchAlgorithm, SortAlgorithm};
use crate::commands;
use crate::config::RosterConfig;
use crate::error::Result;
use crate::model::{Field, NewRecord, RecordFilter, RecordPatch};
use crate::store::fs_backend::FsBackend;
use crate::store::record_store::RecordStore;
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// The main API facade for roster operations.
pub struct RosterApi<S: DataStore> {
    store: S,
    sort_algorithm: SortAlgorithm,
    search_algorithm: SearchAlgorithm,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            sort_algorithm: SortAlgorithm::default(),
            search_algorithm: SearchAlgorithm::default(),
        }
    }

    pub fn with_defaults(mut self, sort: SortAlgorithm, search: SearchAlgorithm) -> Self {
        self.sort_algorithm = sort;
        self.search_algorithm = search;
        self
    }

    pub fn data_location(&self) -> PathBuf {
        self.store.location()
    }

    pub fn create(&mut self, input: NewRecord) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, input)
    }

    pub fn list(&self, filter: &RecordFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn view(&self, id: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, id)
    }

    pub fn update(&mut self, id: &str, patch: RecordPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn statistics(&self) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store)
    }

    /// Sorts a snapshot; `None` picks the configured default algorithm.
    pub fn sort(
        &self,
        field: Field,
        direction: Direction,
        algorithm: Option<SortAlgorithm>,
    ) -> Result<commands::CmdResult> {
        let algorithm = algorithm.unwrap_or(self.sort_algorithm);
        commands::sort::run(&self.store, field, direction, algorithm)
    }

    /// Searches a snapshot; `None` picks the configured default algorithm.
    pub fn search(
        &self,
        field: Field,
        value: &str,
        algorithm: Option<SearchAlgorithm>,
    ) -> Result<commands::CmdResult> {
        let algorithm = algorithm.unwrap_or(self.search_algorithm);
        commands::search::run(&self.store, field, value, algorithm)
    }

    pub fn complexity(&self, algorithm: &str) -> Result<commands::CmdResult> {
        commands::complexity::run(algorithm)
    }
}

impl RosterApi<RecordStore<FsBackend>> {
    /// Opens the JSON file at `path`, creating it if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = RecordStore::open(FsBackend::new(path.as_ref()))?;
        Ok(Self::new(store))
    }

    /// Opens the data file named by `config`, with its default algorithms.
    pub fn from_config(config: &RosterConfig) -> Result<Self> {
        let sort = config.sort_algorithm()?;
        let search = config.search_algorithm()?;
        Ok(Self::open(config.data_path())?.with_defaults(sort, search))
    }
}
