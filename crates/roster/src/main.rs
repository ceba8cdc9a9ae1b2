//! # Roster CLI
//!
//! The `roster` binary is a thin client of the `rosterapp` library: it parses
//! arguments, calls [`rosterapp::api::RosterApi`], and renders the returned
//! `CmdResult` values. The CLI lives in `src/cli/`; this file only invokes
//! `cli::run()` and turns errors into exit code 1.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/roster/src/cli/)                         │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering (render.rs), logging (logger.rs)      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  rosterapp: API facade → commands → store / algorithms      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Rendering is tested in `render.rs` with canned records and results.
//! - `tests/cli_e2e.rs` runs the built binary against a temp data file.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
