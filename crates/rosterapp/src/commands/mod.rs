//! # Command Layer
//!
//! The operations of the roster live here, one submodule per command. Each
//! command is a plain function over a [`DataStore`](crate::store::DataStore)
//! and returns a [`CmdResult`].
//!
//! Commands do not print, parse arguments or pick exit codes. They return
//! records, figures and leveled messages, and the UI decides how to show them.
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `affected_records`: records created, updated, deleted or found
//! - `listed_records`: records to display (a listing, a sorted or searched snapshot)
//! - `statistics`: aggregate figures (for `stats`)
//! - `run`: the algorithm used and its comparison count (for `sort` and `search`)
//! - `complexity`: complexity tables (for `complexity`)
//! - `messages`: info, success, warning and error lines
//!
//! ## Testing Strategy
//!
//! Command tests run against `RecordStore<MemBackend>` so they never touch the
//! filesystem. Store rules are tested in the store module; here the focus is
//! on what each command reports.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a record
//! - [`list`]: List records, optionally filtered
//! - [`view`]: Fetch one record by id
//! - [`update`]: Patch a record
//! - [`delete`]: Remove a record
//! - [`stats`]: Aggregate statistics
//! - [`sort`]: Sort a snapshot with a chosen algorithm
//! - [`search`]: Search a snapshot with a chosen algorithm
//! - [`complexity`]: Complexity tables for the algorithms

use crate::algo::Complexity;
use crate::model::{Field, Record};
use crate::store::Statistics;
use serde::Serialize;

pub mod complexity;
pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod sort;
pub mod stats;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One instrumented engine run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmRun {
    pub algorithm: &'static str,
    pub field: Field,
    pub input_len: usize,
    pub comparisons: usize,
    /// Position of the hit within `listed_records` (searches only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
    pub complexity: Complexity,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub affected_records: Vec<Record>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub listed_records: Vec<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run: Option<AlgorithmRun>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub complexity: Vec<Complexity>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_records(mut self, records: Vec<Record>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Record>) -> Self {
        self.listed_records = records;
        self
    }
}
