//! # Rendering
//!
//! Turns `CmdResult` pieces into terminal text. Every function returns a
//! `String`; the handlers print it. Width math uses display width so names
//! with accents or wide characters stay aligned.

use chrono::{DateTime, Utc};
use colored::Colorize;
use rosterapp::algo::Complexity;
use rosterapp::commands::{AlgorithmRun, CmdMessage, MessageLevel};
use rosterapp::model::{Record, CREATED_AT_FORMAT};
use rosterapp::store::Statistics;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const COL_ID: usize = 12;
const COL_NAME: usize = 24;
const COL_DEPARTMENT: usize = 20;
const COL_STATUS: usize = 10;
const COL_YEAR: usize = 5;
const COL_GPA: usize = 5;
const COL_ADDED: usize = 14;

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// Aligned table of records. `highlight` marks one row (a search hit).
pub(super) fn render_record_table(records: &[Record], highlight: Option<usize>) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let header = format!(
        "{}  {}  {}  {}  {}  {}  {}",
        pad("ID", COL_ID),
        pad("Name", COL_NAME),
        pad("Department", COL_DEPARTMENT),
        pad("Status", COL_STATUS),
        pad("Year", COL_YEAR),
        pad("GPA", COL_GPA),
        pad_left("Added", COL_ADDED),
    );
    out.push_str(&format!("{}\n", header.bold()));

    for (i, record) in records.iter().enumerate() {
        let gpa = record.gpa.map(|g| format!("{:.2}", g)).unwrap_or_default();
        let row = format!(
            "{}  {}  {}  {}  {}  {}  {}",
            pad(&record.id, COL_ID),
            pad(&record.name, COL_NAME),
            pad(&record.department, COL_DEPARTMENT),
            pad(record.status.as_str(), COL_STATUS),
            pad(&record.entry_year.to_string(), COL_YEAR),
            pad(&gpa, COL_GPA),
            format_time_ago(record.created_at).dimmed(),
        );
        if highlight == Some(i) {
            out.push_str(&format!("{}\n", row.green().bold()));
        } else {
            out.push_str(&format!("{}\n", row));
        }
    }
    out
}

/// Every field of one record, one per line.
pub(super) fn render_record_detail(record: &Record) -> String {
    let mut lines = vec![
        ("Name", record.name.clone()),
        ("ID", record.id.clone()),
        ("Department", record.department.clone()),
        ("Contact", record.contact.clone()),
        ("Entry year", record.entry_year.to_string()),
        ("Status", record.status.to_string()),
        ("Category", record.category.to_string()),
    ];
    if let (Some(gpa), Some(standing)) = (record.gpa, record.gpa_standing()) {
        lines.push(("GPA", format!("{:.2} ({})", gpa, standing)));
    }
    if let Some(done) = record.orientation_done {
        lines.push(("Orientation", if done { "done" } else { "pending" }.to_string()));
    }
    lines.push((
        "Added",
        format!(
            "{} ({})",
            record.created_at.format(CREATED_AT_FORMAT),
            format_time_ago(record.created_at).trim()
        ),
    ));

    let mut out = String::new();
    for (label, value) in lines {
        out.push_str(&format!("{} {}\n", pad(&format!("{}:", label), 12).dimmed(), value));
    }
    out
}

pub(super) fn render_statistics(stats: &Statistics) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "Total students:".bold(), stats.total));

    if !stats.per_department.is_empty() {
        out.push_str(&format!("{}\n", "By department".bold()));
        for (department, count) in &stats.per_department {
            out.push_str(&format!("  {} {}\n", pad(department, COL_DEPARTMENT), count));
        }
    }
    if !stats.per_status.is_empty() {
        out.push_str(&format!("{}\n", "By status".bold()));
        for (status, count) in &stats.per_status {
            out.push_str(&format!("  {} {}\n", pad(status.as_str(), COL_DEPARTMENT), count));
        }
    }
    if stats.records_with_gpa > 0 {
        out.push_str(&format!(
            "{} {:.2} over {} students\n",
            "Average GPA:".bold(),
            stats.average_gpa,
            stats.records_with_gpa
        ));
    }
    out
}

/// One-line summary of an algorithm run.
pub(super) fn render_run(run: &AlgorithmRun) -> String {
    format!(
        "{} on {} ({} records): {} comparisons, average case {}\n",
        run.complexity.name.cyan(),
        run.field,
        run.input_len,
        run.comparisons.to_string().bold(),
        run.complexity.average
    )
}

pub(super) fn render_complexity(tables: &[Complexity]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!(
            "{}  {}  {}  {}  {}  {}",
            pad("Algorithm", 14),
            pad("Best", 11),
            pad("Average", 11),
            pad("Worst", 11),
            pad("Space", 6),
            "Notes"
        )
        .bold()
    ));
    for c in tables {
        let mut notes = vec![c.family.to_string()];
        match c.stable {
            Some(true) => notes.push("stable".to_string()),
            Some(false) => notes.push("not stable".to_string()),
            None => {}
        }
        if c.requires_sorted_input {
            notes.push("needs sorted input".to_string());
        }
        out.push_str(&format!(
            "{}  {}  {}  {}  {}  {}\n",
            pad(c.name, 14),
            pad(c.best, 11),
            pad(c.average, 11),
            pad(c.worst, 11),
            pad(c.space, 6),
            notes.join(", ")
        ));
    }
    out
}

/// Truncates to `width` display columns (with an ellipsis) and pads with spaces.
fn pad(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn pad_left(s: &str, width: usize) -> String {
    let text = truncate_to_width(s, width);
    let fill = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(fill), text)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = COL_ADDED)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterapp::algo::SortAlgorithm;
    use rosterapp::model::{Category, Field, Status};
    use std::collections::BTreeMap;

    fn plain() {
        colored::control::set_override(false);
    }

    fn record(name: &str, gpa: Option<f64>) -> Record {
        Record {
            name: name.to_string(),
            id: "12345678".to_string(),
            department: "Teknik Informatika".to_string(),
            contact: "budi@domain.com".to_string(),
            entry_year: 2022,
            status: Status::Active,
            category: if gpa.is_some() {
                Category::Returning
            } else {
                Category::General
            },
            created_at: Utc::now(),
            gpa,
            orientation_done: None,
        }
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("abcdefghij", 5), "abcd…");
        // wide characters take two columns each
        assert_eq!(truncate_to_width("日本語テキスト", 6), "日本…");
        assert_eq!(pad("Zoë", 5).width(), 5);
    }

    #[test]
    fn table_has_header_and_rows() {
        plain();
        let out = render_record_table(&[record("Budi Santoso", None), record("Sari", Some(3.5))], None);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        assert!(lines[1].contains("Budi Santoso"));
        assert!(lines[2].contains("3.50"));
    }

    #[test]
    fn empty_table_is_empty() {
        assert_eq!(render_record_table(&[], None), "");
    }

    #[test]
    fn detail_shows_gpa_standing() {
        plain();
        let out = render_record_detail(&record("Sari Dewi", Some(3.6)));
        assert!(out.contains("3.60 (cum laude)"));
        assert!(out.contains("returning"));
        let general = render_record_detail(&record("Budi Santoso", None));
        assert!(!general.contains("GPA"));
    }

    #[test]
    fn statistics_block() {
        plain();
        let stats = Statistics {
            total: 2,
            per_department: BTreeMap::from([("Hukum".to_string(), 2)]),
            per_status: BTreeMap::from([(Status::Active, 2)]),
            average_gpa: 3.25,
            records_with_gpa: 2,
        };
        let out = render_statistics(&stats);
        assert!(out.contains("Total students: 2"));
        assert!(out.contains("Hukum"));
        assert!(out.contains("Average GPA: 3.25 over 2 students"));
    }

    #[test]
    fn run_summary() {
        plain();
        let run = AlgorithmRun {
            algorithm: "merge",
            field: Field::Name,
            input_len: 4,
            comparisons: 5,
            index: None,
            complexity: SortAlgorithm::Merge.complexity(),
        };
        assert_eq!(
            render_run(&run),
            "Merge Sort on name (4 records): 5 comparisons, average case O(n log n)\n"
        );
    }

    #[test]
    fn messages_one_per_line() {
        plain();
        let out = render_messages(&[CmdMessage::success("done"), CmdMessage::warning("hmm")]);
        assert_eq!(out, "done\nhmm\n");
    }
}
