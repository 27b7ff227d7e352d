//! Comparison sorts used to order routes for display.
//!
//! Both sorts take any three-way comparison, so they work with the
//! comparators in [`crate::compare`] as well as `Ord::cmp`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Sorting algorithm offered to users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortAlgorithm {
    /// Stable merge sort.
    #[default]
    Merge,
    /// Unstable quick sort (last element as pivot).
    Quick,
}

impl SortAlgorithm {
    pub fn sort_by<T, F>(self, items: &mut [T], compare: F)
    where
        T: Clone,
        F: Fn(&T, &T) -> Ordering,
    {
        match self {
            SortAlgorithm::Merge => merge_sort(items, compare),
            SortAlgorithm::Quick => quick_sort(items, compare),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortAlgorithm::Merge => "stable merge sort",
            SortAlgorithm::Quick => "unstable quick sort",
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortAlgorithm::Merge => "merge",
            SortAlgorithm::Quick => "quick",
        })
    }
}

impl FromStr for SortAlgorithm {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "merge" | "mergesort" => Ok(SortAlgorithm::Merge),
            "quick" | "quicksort" => Ok(SortAlgorithm::Quick),
            _ => Err(Error::UnknownSortKey {
                value: value.to_string(),
            }),
        }
    }
}

/// Stable top-down merge sort.
pub fn merge_sort<T, F>(items: &mut [T], compare: F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    merge_sort_slice(items, &compare);
}

fn merge_sort_slice<T, F>(items: &mut [T], compare: &F)
where
    T: Clone,
    F: Fn(&T, &T) -> Ordering,
{
    let len = items.len();
    if len <= 1 {
        return;
    }
    let mid = len / 2;
    merge_sort_slice(&mut items[..mid], compare);
    merge_sort_slice(&mut items[mid..], compare);

    let left = items[..mid].to_vec();
    let right = items[mid..].to_vec();
    let (mut i, mut j) = (0, 0);
    for slot in items.iter_mut() {
        // Ties take from the left run, which keeps equal items in order.
        let take_left = j >= right.len()
            || (i < left.len() && compare(&left[i], &right[j]) != Ordering::Greater);
        if take_left {
            *slot = left[i].clone();
            i += 1;
        } else {
            *slot = right[j].clone();
            j += 1;
        }
    }
}

/// Quick sort with Lomuto partitioning around the last element.
pub fn quick_sort<T, F>(items: &mut [T], compare: F)
where
    F: Fn(&T, &T) -> Ordering,
{
    quick_sort_slice(items, &compare);
}

fn quick_sort_slice<T, F>(items: &mut [T], compare: &F)
where
    F: Fn(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }
    let pivot = partition(items, compare);
    let (lower, upper) = items.split_at_mut(pivot);
    quick_sort_slice(lower, compare);
    quick_sort_slice(&mut upper[1..], compare);
}

fn partition<T, F>(items: &mut [T], compare: &F) -> usize
where
    F: Fn(&T, &T) -> Ordering,
{
    let high = items.len() - 1;
    let mut store = 0;
    for j in 0..high {
        if compare(&items[j], &items[high]) != Ordering::Greater {
            items.swap(store, j);
            store += 1;
        }
    }
    items.swap(store, high);
    store
}
