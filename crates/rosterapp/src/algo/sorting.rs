//! Comparison-counting sorts.
//!
//! Each sort copies its input and leaves the caller's slice untouched. The
//! comparator returns the ordering in the requested direction; an element is
//! "out of order" when the comparator says `Greater`.

use super::SortOutcome;
use std::cmp::Ordering;

/// Bubble sort with early exit.
///
/// Every adjacent check is counted, including the final pass that finds
/// nothing to swap. Stable.
pub fn bubble_sort_by<T, F>(items: &[T], mut compare: F) -> SortOutcome<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut items = items.to_vec();
    let n = items.len();
    let mut comparisons = 0;

    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            comparisons += 1;
            if compare(&items[j], &items[j + 1]) == Ordering::Greater {
                items.swap(j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }

    SortOutcome { items, comparisons }
}

/// Top-down merge sort.
///
/// Ties take the left element, so the sort is stable. The count is the sum of
/// every merge step across the recursion.
pub fn merge_sort_by<T, F>(items: &[T], mut compare: F) -> SortOutcome<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let (items, comparisons) = merge_sort_rec(items.to_vec(), &mut compare);
    SortOutcome { items, comparisons }
}

fn merge_sort_rec<T, F>(mut items: Vec<T>, compare: &mut F) -> (Vec<T>, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return (items, 0);
    }
    let right = items.split_off(items.len() / 2);
    let (left, left_count) = merge_sort_rec(items, compare);
    let (right, right_count) = merge_sort_rec(right, compare);
    let (merged, merge_count) = merge(left, right, compare);
    (merged, left_count + right_count + merge_count)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> (Vec<T>, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    let mut comparisons = 0;

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        comparisons += 1;
        let take_left = compare(l, r) != Ordering::Greater;
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);

    (merged, comparisons)
}

/// Shell sort over the gap sequence n/2, n/4, ..., 1.
///
/// Each shift check is counted, including the one that stops the shift.
/// Not stable.
pub fn shell_sort_by<T, F>(items: &[T], mut compare: F) -> SortOutcome<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut items = items.to_vec();
    let n = items.len();
    let mut comparisons = 0;
    let mut gap = n / 2;

    while gap > 0 {
        for i in gap..n {
            // items[j] always holds the element being inserted
            let mut j = i;
            while j >= gap {
                comparisons += 1;
                if compare(&items[j - gap], &items[j]) == Ordering::Greater {
                    items.swap(j - gap, j);
                    j -= gap;
                } else {
                    break;
                }
            }
        }
        gap /= 2;
    }

    SortOutcome { items, comparisons }
}
