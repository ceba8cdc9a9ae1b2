//! # Algorithm Engine
//!
//! Instrumented sorting and searching over record snapshots. Every algorithm
//! reports how many element comparisons it made, which is what the roster
//! shows next to each result to illustrate complexity classes.
//!
//! The engine is pure: it takes a borrowed snapshot and returns new values.
//! It never touches the store and the store never calls it.
//!
//! - [`sorting`]: bubble, merge and shell sort, each generic over a comparator.
//! - [`searching`]: linear (substring or exact) and binary search.
//!
//! [`sort_records`] and [`search_records`] are the record-level entry points.
//! Record fields compare through [`FieldValue::cmp_natural`], so numeric fields
//! order numerically and text fields lexicographically. Binary search uses the
//! same ordering, which keeps it consistent with a snapshot sorted here.

use crate::error::{Result, RosterError};
use crate::model::{Field, Record};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

pub mod searching;
pub mod sorting;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    /// Orients an ascending ordering for this direction.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ordering,
            Direction::Descending => ordering.reverse(),
        }
    }
}

impl FromStr for Direction {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(Direction::Ascending),
            "desc" | "descending" => Ok(Direction::Descending),
            other => Err(RosterError::InvalidArgument(format!(
                "unknown direction '{}' (expected asc or desc)",
                other
            ))),
        }
    }
}

/// Textbook complexity of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub name: &'static str,
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
    pub family: &'static str,
    /// Only meaningful for sorts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stable: Option<bool>,
    pub requires_sorted_input: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    Bubble,
    #[default]
    Merge,
    Shell,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 3] = [
        SortAlgorithm::Bubble,
        SortAlgorithm::Merge,
        SortAlgorithm::Shell,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortAlgorithm::Bubble => "bubble",
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Shell => "shell",
        }
    }

    pub fn complexity(&self) -> Complexity {
        match self {
            SortAlgorithm::Bubble => Complexity {
                name: "Bubble Sort",
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
                family: "Comparison-based",
                stable: Some(true),
                requires_sorted_input: false,
            },
            SortAlgorithm::Merge => Complexity {
                name: "Merge Sort",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
                family: "Divide & Conquer",
                stable: Some(true),
                requires_sorted_input: false,
            },
            SortAlgorithm::Shell => Complexity {
                name: "Shell Sort",
                best: "O(n log n)",
                average: "O(n^1.3)",
                worst: "O(n²)",
                space: "O(1)",
                family: "Insertion sort variant",
                stable: Some(false),
                requires_sorted_input: false,
            },
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortAlgorithm {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.strip_suffix("_sort").unwrap_or(&normalized) {
            "bubble" => Ok(SortAlgorithm::Bubble),
            "merge" => Ok(SortAlgorithm::Merge),
            "shell" => Ok(SortAlgorithm::Shell),
            _ => Err(RosterError::InvalidArgument(format!(
                "unknown sort algorithm '{}' (expected bubble, merge or shell)",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Case-insensitive substring scan.
    #[default]
    Linear,
    /// Exact-equality scan.
    LinearExact,
    /// Halving search over a snapshot sorted ascending by the search field.
    Binary,
}

impl SearchAlgorithm {
    pub const ALL: [SearchAlgorithm; 3] = [
        SearchAlgorithm::Linear,
        SearchAlgorithm::LinearExact,
        SearchAlgorithm::Binary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchAlgorithm::Linear => "linear",
            SearchAlgorithm::LinearExact => "exact",
            SearchAlgorithm::Binary => "binary",
        }
    }

    pub fn complexity(&self) -> Complexity {
        match self {
            SearchAlgorithm::Linear | SearchAlgorithm::LinearExact => Complexity {
                name: "Linear Search",
                best: "O(1)",
                average: "O(n)",
                worst: "O(n)",
                space: "O(1)",
                family: "Brute force",
                stable: None,
                requires_sorted_input: false,
            },
            SearchAlgorithm::Binary => Complexity {
                name: "Binary Search",
                best: "O(1)",
                average: "O(log n)",
                worst: "O(log n)",
                space: "O(1)",
                family: "Divide & Conquer",
                stable: None,
                requires_sorted_input: true,
            },
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchAlgorithm {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.strip_suffix("_search").unwrap_or(&normalized) {
            "linear" => Ok(SearchAlgorithm::Linear),
            "exact" | "linear_exact" => Ok(SearchAlgorithm::LinearExact),
            "binary" => Ok(SearchAlgorithm::Binary),
            _ => Err(RosterError::InvalidArgument(format!(
                "unknown search algorithm '{}' (expected linear, exact or binary)",
                s
            ))),
        }
    }
}

/// A sorted copy plus the number of comparisons it took.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortOutcome<T> {
    pub items: Vec<T>,
    pub comparisons: usize,
}

/// Position of the first hit (if any) plus the number of comparisons made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub index: Option<usize>,
    pub comparisons: usize,
}

impl SearchOutcome {
    pub fn found(index: usize, comparisons: usize) -> Self {
        Self {
            index: Some(index),
            comparisons,
        }
    }

    pub fn not_found(comparisons: usize) -> Self {
        Self {
            index: None,
            comparisons,
        }
    }
}

/// Sorts a copy of `snapshot` by `field`.
pub fn sort_records(
    snapshot: &[Record],
    field: Field,
    direction: Direction,
    algorithm: SortAlgorithm,
) -> SortOutcome<Record> {
    let compare = |a: &Record, b: &Record| direction.apply(a.value(field).cmp_natural(&b.value(field)));

    let outcome = match algorithm {
        SortAlgorithm::Bubble => sorting::bubble_sort_by(snapshot, compare),
        SortAlgorithm::Merge => sorting::merge_sort_by(snapshot, compare),
        SortAlgorithm::Shell => sorting::shell_sort_by(snapshot, compare),
    };
    debug!(
        %algorithm,
        %field,
        ?direction,
        n = snapshot.len(),
        comparisons = outcome.comparisons,
        "sorted snapshot"
    );
    outcome
}

/// Searches `snapshot` for `target` in `field`.
///
/// `Binary` assumes the snapshot is sorted ascending by `field`; on unsorted
/// input the result is unspecified.
pub fn search_records(
    snapshot: &[Record],
    field: Field,
    target: &str,
    algorithm: SearchAlgorithm,
) -> SearchOutcome {
    let outcome = match algorithm {
        SearchAlgorithm::Linear => searching::linear_search(snapshot, field, target),
        SearchAlgorithm::LinearExact => searching::linear_search_exact(snapshot, field, target),
        SearchAlgorithm::Binary => searching::binary_search(snapshot, field, target),
    };
    debug!(
        %algorithm,
        %field,
        n = snapshot.len(),
        index = ?outcome.index,
        comparisons = outcome.comparisons,
        "searched snapshot"
    );
    outcome
}
