//! Comparison-counting searches.

use super::SearchOutcome;
use crate::model::{Field, FieldValue, Record};
use std::cmp::Ordering;
use tracing::debug;

/// Scans `items` front to back and returns the first index where `is_match`
/// holds. Every element checked counts as one comparison.
pub fn linear_search_by<T, F>(items: &[T], mut is_match: F) -> SearchOutcome
where
    F: FnMut(&T) -> bool,
{
    let mut comparisons = 0;
    for (index, item) in items.iter().enumerate() {
        comparisons += 1;
        if is_match(item) {
            return SearchOutcome::found(index, comparisons);
        }
    }
    SearchOutcome::not_found(comparisons)
}

/// Binary search over items sorted ascending with respect to `probe`.
///
/// `probe` reports how an item orders relative to the target. Each probed
/// midpoint counts as one comparison, so a miss costs at most
/// ⌈log2(n+1)⌉ comparisons.
pub fn binary_search_by<T, F>(items: &[T], mut probe: F) -> SearchOutcome
where
    F: FnMut(&T) -> Ordering,
{
    let mut comparisons = 0;
    if items.is_empty() {
        return SearchOutcome::not_found(comparisons);
    }

    let mut low = 0usize;
    let mut high = items.len() - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        comparisons += 1;
        match probe(&items[mid]) {
            Ordering::Equal => return SearchOutcome::found(mid, comparisons),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    break;
                }
                high = mid - 1;
            }
        }
    }
    SearchOutcome::not_found(comparisons)
}

/// Case-insensitive substring search on the textual form of `field`.
///
/// An empty target matches the first record.
pub fn linear_search(snapshot: &[Record], field: Field, target: &str) -> SearchOutcome {
    let needle = target.to_lowercase();
    linear_search_by(snapshot, |record| {
        record
            .value(field)
            .to_string()
            .to_lowercase()
            .contains(&needle)
    })
}

/// Exact search: the textual form of `field` must equal `target`.
pub fn linear_search_exact(snapshot: &[Record], field: Field, target: &str) -> SearchOutcome {
    linear_search_by(snapshot, |record| record.value(field).to_string() == target)
}

/// Binary search on `field`, comparing in the field's natural type.
///
/// Returns a miss with zero comparisons when `target` cannot be a value of
/// `field`.
pub fn binary_search(snapshot: &[Record], field: Field, target: &str) -> SearchOutcome {
    match FieldValue::parse_for(field, target) {
        Some(wanted) => binary_search_by(snapshot, |record| record.value(field).cmp_natural(&wanted)),
        None => {
            debug!(%field, query = target, "target cannot match field type");
            SearchOutcome::not_found(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Status};
    use chrono::Utc;

    fn rec(name: &str, gpa: Option<f64>) -> Record {
        Record {
            name: name.to_string(),
            id: "12345678".to_string(),
            department: "Informatika".to_string(),
            contact: "x@y.com".to_string(),
            entry_year: 2021,
            status: Status::Active,
            category: Category::General,
            created_at: Utc::now(),
            gpa,
            orientation_done: None,
        }
    }

    fn roster() -> Vec<Record> {
        ["Alpha", "Beta", "Gamma", "Delta"]
            .into_iter()
            .map(|n| rec(n, None))
            .collect()
    }

    #[test]
    fn substring_search_is_case_insensitive() {
        let data = roster();
        assert_eq!(linear_search(&data, Field::Name, "amm"), SearchOutcome::found(2, 3));
        assert_eq!(linear_search(&data, Field::Name, "DELTA"), SearchOutcome::found(3, 4));
        assert_eq!(linear_search(&data, Field::Name, "zeta"), SearchOutcome::not_found(4));
    }

    #[test]
    fn empty_target_matches_first() {
        assert_eq!(linear_search(&roster(), Field::Name, ""), SearchOutcome::found(0, 1));
    }

    #[test]
    fn exact_search_requires_equality() {
        let data = roster();
        assert_eq!(linear_search_exact(&data, Field::Name, "Gamma"), SearchOutcome::found(2, 3));
        assert_eq!(linear_search_exact(&data, Field::Name, "gamma"), SearchOutcome::not_found(4));
        assert_eq!(linear_search_exact(&data, Field::Name, "Gam"), SearchOutcome::not_found(4));
    }

    #[test]
    fn exact_search_on_gpa_uses_display_form() {
        let data = vec![rec("A", None), rec("B", Some(3.0))];
        assert_eq!(linear_search_exact(&data, Field::Gpa, "3.0"), SearchOutcome::found(1, 2));
        // missing gpa renders empty
        assert_eq!(linear_search_exact(&data, Field::Gpa, ""), SearchOutcome::found(0, 1));
    }

    #[test]
    fn binary_search_on_sorted_names() {
        let mut data = roster();
        data.sort_by(|a, b| a.name.cmp(&b.name));
        // Alpha, Beta, Delta, Gamma
        let hit = binary_search(&data, Field::Name, "Gamma");
        assert_eq!(hit.index, Some(3));
        let miss = binary_search(&data, Field::Name, "Omega");
        assert_eq!(miss.index, None);
        assert!(miss.comparisons <= 3);
    }

    #[test]
    fn binary_search_empty_snapshot() {
        assert_eq!(binary_search(&[], Field::Name, "x"), SearchOutcome::not_found(0));
    }

    #[test]
    fn binary_search_below_first_element() {
        let items = [10, 20, 30];
        let outcome = binary_search_by(&items, |x| x.cmp(&5));
        assert_eq!(outcome, SearchOutcome::not_found(2));
    }

    #[test]
    fn binary_search_gpa_numeric() {
        let data = vec![rec("A", Some(2.5)), rec("B", Some(3.0)), rec("C", Some(3.75))];
        assert_eq!(binary_search(&data, Field::Gpa, "3").index, Some(1));
        assert_eq!(binary_search(&data, Field::Gpa, "high"), SearchOutcome::not_found(0));
    }
}
