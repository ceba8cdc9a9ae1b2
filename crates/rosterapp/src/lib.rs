//! # Roster Architecture
//!
//! Roster is a **UI-agnostic student record library**: a validated record store
//! persisted as a JSON file, plus instrumented sorting and searching algorithms
//! that report how many comparisons they made. The `roster` binary is one
//! client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (roster crate)                                         │
//! │  - Parses arguments, renders results, picks exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, carries default algorithms    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per operation, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                 │                              │
//!                 ▼                              ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  Storage (store/)            │ │  Algorithms (algo/)        │
//! │  DataStore, RecordStore,     │ │  bubble / merge / shell    │
//! │  FsBackend, MemBackend       │ │  linear / exact / binary   │
//! └──────────────────────────────┘ └────────────────────────────┘
//! ```
//!
//! Commands fetch a snapshot from the store and hand it to the algorithms.
//! The algorithms never see the store and the store never calls them.
//!
//! ## No I/O Assumptions in Core
//!
//! Everything in this crate takes plain arguments and returns plain values.
//! Nothing prints or exits. The only I/O is the backing file, and only through
//! [`store::fs_backend::FsBackend`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`store`]: Record store and storage backends
//! - [`algo`]: Sorting and searching with comparison counts
//! - [`model`]: Records, fields, categories
//! - [`validation`]: Field rules
//! - [`config`]: Configuration loading
//! - [`error`]: Error types

pub mod algo;
pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
