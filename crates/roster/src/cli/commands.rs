//! # CLI Layer
//!
//! The only place in the workspace that:
//! - Knows about stdout and stderr
//! - Handles argument parsing
//! - Formats output for humans
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns the shell arguments into [`Cli`]
//! 2. **Context Setup**: config is loaded and [`AppContext`] opens the data file
//! 3. **API Dispatch**: each handler calls one `RosterApi` method
//! 4. **Output Formatting**: `CmdResult` goes through `render` (or `--json`)
//! 5. **Error Handling**: errors bubble up to `main`, which exits with code 1

use super::logger::init_cli_logger;
use super::render::{
    render_complexity, render_messages, render_record_detail, render_record_table, render_run,
    render_statistics,
};
use super::setup::{Cli, Commands};
use anyhow::{bail, Context, Result};
use clap::Parser;
use rosterapp::algo::{Direction, SearchAlgorithm, SortAlgorithm};
use rosterapp::api::RosterApi;
use rosterapp::commands::CmdResult;
use rosterapp::config::RosterConfig;
use rosterapp::model::{Category, Field, NewRecord, RecordFilter, RecordPatch, Status};
use rosterapp::store::fs_backend::FsBackend;
use rosterapp::store::record_store::RecordStore;
use tracing::debug;

struct AppContext {
    api: RosterApi<RecordStore<FsBackend>>,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    // no data file needed
    if let Commands::Complexity { algorithm } = &cli.command {
        let result = rosterapp::commands::complexity::run(algorithm)?;
        return emit(cli.json, &result, |r| render_complexity(&r.complexity));
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Add {
            name,
            id,
            department,
            contact,
            entry_year,
            category,
            gpa,
            status,
            no_orientation,
        } => {
            let mut input = NewRecord::new(name, id, department, contact).with_category(category);
            input.entry_year = entry_year;
            input.gpa = gpa;
            input.status = status;
            if category == Category::New {
                input = input.with_orientation_done(!no_orientation);
            }
            handle_add(&mut ctx, input)
        }
        Commands::List {
            departments,
            statuses,
        } => handle_list(&ctx, departments, statuses),
        Commands::View { id } => handle_view(&ctx, &id),
        Commands::Edit {
            id,
            name,
            department,
            contact,
            status,
            entry_year,
            gpa,
        } => {
            let patch = RecordPatch {
                name,
                department,
                contact,
                status,
                entry_year,
                gpa,
            };
            handle_edit(&mut ctx, &id, patch)
        }
        Commands::Delete { id } => handle_delete(&mut ctx, &id),
        Commands::Stats => handle_stats(&ctx),
        Commands::Sort {
            field,
            desc,
            algorithm,
        } => {
            let direction = if desc {
                Direction::Descending
            } else {
                Direction::Ascending
            };
            handle_sort(&ctx, field, direction, algorithm)
        }
        Commands::Search {
            field,
            value,
            algorithm,
        } => handle_search(&ctx, field, &value, algorithm),
        // handled before the context exists
        Commands::Complexity { .. } => Ok(()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = match &cli.config {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            RosterConfig::load_from(Some(path))?
        }
        None => RosterConfig::load()?,
    };
    if let Some(path) = &cli.data_file {
        config.data_file = Some(path.display().to_string());
    }

    let data_path = config.data_path();
    let api = RosterApi::from_config(&config)
        .with_context(|| format!("cannot open data file {}", data_path.display()))?;
    debug!(path = %data_path.display(), "data file ready");

    Ok(AppContext {
        api,
        json: cli.json,
    })
}

/// Prints `result` as JSON, or as `render(result)` followed by its messages.
fn emit<F>(json: bool, result: &CmdResult, render: F) -> Result<()>
where
    F: FnOnce(&CmdResult) -> String,
{
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }
    print!("{}", render(result));
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_add(ctx: &mut AppContext, input: NewRecord) -> Result<()> {
    let result = ctx.api.create(input)?;
    emit(ctx.json, &result, |_| String::new())
}

fn handle_list(ctx: &AppContext, departments: Vec<String>, statuses: Vec<Status>) -> Result<()> {
    let filter = RecordFilter {
        departments,
        statuses,
    };
    let result = ctx.api.list(&filter)?;
    emit(ctx.json, &result, |r| render_record_table(&r.listed_records, None))
}

fn handle_view(ctx: &AppContext, id: &str) -> Result<()> {
    let result = ctx.api.view(id)?;
    emit(ctx.json, &result, |r| {
        r.listed_records.iter().map(render_record_detail).collect()
    })
}

fn handle_edit(ctx: &mut AppContext, id: &str, patch: RecordPatch) -> Result<()> {
    let result = ctx.api.update(id, patch)?;
    emit(ctx.json, &result, |r| {
        r.affected_records.iter().map(render_record_detail).collect()
    })
}

fn handle_delete(ctx: &mut AppContext, id: &str) -> Result<()> {
    let result = ctx.api.delete(id)?;
    emit(ctx.json, &result, |_| String::new())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.statistics()?;
    emit(ctx.json, &result, |r| {
        r.statistics.as_ref().map(render_statistics).unwrap_or_default()
    })
}

fn handle_sort(
    ctx: &AppContext,
    field: Field,
    direction: Direction,
    algorithm: Option<SortAlgorithm>,
) -> Result<()> {
    let result = ctx.api.sort(field, direction, algorithm)?;
    emit(ctx.json, &result, |r| {
        let mut out = render_record_table(&r.listed_records, None);
        if let Some(run) = &r.run {
            out.push_str(&render_run(run));
        }
        out
    })
}

fn handle_search(
    ctx: &AppContext,
    field: Field,
    value: &str,
    algorithm: Option<SearchAlgorithm>,
) -> Result<()> {
    let result = ctx.api.search(field, value, algorithm)?;
    emit(ctx.json, &result, |r| {
        let mut out = String::new();
        if let Some(run) = &r.run {
            if let Some(index) = run.index {
                out.push_str(&render_record_table(&r.listed_records, Some(index)));
            }
            out.push_str(&render_run(run));
        }
        out
    })
}
