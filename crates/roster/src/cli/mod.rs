//! # CLI Behavior
//!
//! This is **one possible UI client** for roster, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Data File
//!
//! The data file is picked in this order: `--data-file`, `ROSTER_DATA_FILE`,
//! `data_file` in `roster.toml`, then `students.json` in the platform data
//! directory. It is created on first use.
//!
//! ## Output
//!
//! Records print as an aligned table, single records as a detail card.
//! `--json` prints the raw `CmdResult` instead. Log lines go to stderr;
//! `-v` turns on debug logs, which include every algorithm run.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `logger`: tracing subscriber setup
//! - `render`: Output formatting (tables, colors, messages)
//! - `setup`: Argument parsing via clap

mod commands;
mod logger;
mod render;
pub mod setup;

pub use commands::run;
