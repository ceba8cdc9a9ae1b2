use clap::{Parser, Subcommand};
use rosterapp::algo::{SearchAlgorithm, SortAlgorithm};
use rosterapp::model::{Category, Field, Status};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    bin_name = "roster",
    version,
    disable_help_subcommand = true
)]
#[command(about = "Student records with instrumented sorting and searching", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON data file (created if missing)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data_file: Option<PathBuf>,

    /// Config file (default: roster.toml in the platform config dir)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub config: Option<PathBuf>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student
    #[command(display_order = 1)]
    Add {
        /// Full name (at least 3 characters)
        #[arg(long)]
        name: String,

        /// Student id (8-12 digits)
        #[arg(long)]
        id: String,

        #[arg(long)]
        department: String,

        /// Email address
        #[arg(long)]
        contact: String,

        /// Entry year (defaults to the current year)
        #[arg(long)]
        entry_year: Option<i32>,

        /// general, new or returning
        #[arg(long, default_value = "general")]
        category: Category,

        /// GPA on a 0-4 scale (returning students only)
        #[arg(long)]
        gpa: Option<f64>,

        /// active, inactive, graduated or leave
        #[arg(long)]
        status: Option<Status>,

        /// New student has not attended orientation
        #[arg(long)]
        no_orientation: bool,
    },

    /// List students
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only these departments (repeatable)
        #[arg(long = "department", value_name = "DEPARTMENT")]
        departments: Vec<String>,

        /// Only these statuses (repeatable)
        #[arg(long = "status", value_name = "STATUS")]
        statuses: Vec<Status>,
    },

    /// Show one student
    #[command(display_order = 3)]
    View {
        id: String,
    },

    /// Change a student's fields
    #[command(display_order = 4)]
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        contact: Option<String>,

        #[arg(long)]
        status: Option<String>,

        #[arg(long)]
        entry_year: Option<i32>,

        /// Only applies to students that carry a GPA
        #[arg(long)]
        gpa: Option<f64>,
    },

    /// Delete a student
    #[command(alias = "rm", display_order = 5)]
    Delete {
        id: String,
    },

    /// Totals per department and status, average GPA
    #[command(display_order = 6)]
    Stats,

    /// Sort students by a field and report comparisons
    #[command(display_order = 7)]
    Sort {
        /// name, id, department, contact, entry_year, status, category, gpa, created_at
        field: Field,

        /// Descending order
        #[arg(long)]
        desc: bool,

        /// bubble, merge or shell (default from config)
        #[arg(long, short)]
        algorithm: Option<SortAlgorithm>,
    },

    /// Search students by a field and report comparisons
    #[command(display_order = 8)]
    Search {
        field: Field,

        value: String,

        /// linear, exact or binary (default from config)
        #[arg(long, short)]
        algorithm: Option<SearchAlgorithm>,
    },

    /// Show algorithm complexity tables
    #[command(display_order = 9)]
    Complexity {
        /// An algorithm name, or "all"
        #[arg(default_value = "all")]
        algorithm: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_category() {
        let cli = Cli::try_parse_from([
            "roster",
            "add",
            "--name",
            "Budi Santoso",
            "--id",
            "12345678",
            "--department",
            "Teknik Informatika",
            "--contact",
            "budi@domain.com",
            "--category",
            "returning",
            "--gpa",
            "3.4",
        ])
        .unwrap();

        match cli.command {
            Commands::Add { category, gpa, .. } => {
                assert_eq!(category, Category::Returning);
                assert_eq!(gpa, Some(3.4));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn parses_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["roster", "stats", "--data-file", "/tmp/x.json", "--json"])
                .unwrap();
        assert_eq!(cli.data_file, Some(PathBuf::from("/tmp/x.json")));
        assert!(cli.json);
    }

    #[test]
    fn parses_sort_and_search_enums() {
        let cli = Cli::try_parse_from(["roster", "sort", "entry-year", "--desc", "-a", "shell"])
            .unwrap();
        match cli.command {
            Commands::Sort {
                field,
                desc,
                algorithm,
            } => {
                assert_eq!(field, Field::EntryYear);
                assert!(desc);
                assert_eq!(algorithm, Some(SortAlgorithm::Shell));
            }
            other => panic!("unexpected command {:?}", other),
        }

        let cli = Cli::try_parse_from(["roster", "search", "name", "Gam", "--algorithm", "binary"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Search {
                algorithm: Some(SearchAlgorithm::Binary),
                ..
            }
        ));
    }

    #[test]
    fn rejects_unknown_field() {
        assert!(Cli::try_parse_from(["roster", "sort", "shoe_size"]).is_err());
    }

    #[test]
    fn list_filters_repeat() {
        let cli = Cli::try_parse_from([
            "roster",
            "list",
            "--status",
            "active",
            "--status",
            "Leave",
            "--department",
            "Hukum",
        ])
        .unwrap();
        match cli.command {
            Commands::List {
                departments,
                statuses,
            } => {
                assert_eq!(departments, vec!["Hukum"]);
                assert_eq!(statuses, vec![Status::Active, Status::Leave]);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
