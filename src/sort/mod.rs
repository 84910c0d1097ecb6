//! Comparator-driven sorts over an inclusive sub-range of a slice.
//!
//! Both sorts leave every element outside `[begin, end]` untouched, which the in-place
//! construction relies on when it re-sorts only the levels below the one it just filled.

mod heap;
mod insertion;

use std::cmp::Ordering;

pub use heap::heap_sort_by;
pub use insertion::insertion_sort_by;

/// Runs at or below this length are sorted with insertion sort.
pub(crate) const INSERTION_SORT_THRESHOLD: usize = 16;

/// Sort `slice[begin..=end]`, picking insertion sort for short runs and heap sort otherwise.
pub(crate) fn sort_range_by<T, F>(slice: &mut [T], begin: usize, end: usize, compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if begin >= end {
        return;
    }
    if end - begin < INSERTION_SORT_THRESHOLD {
        insertion_sort_by(slice, begin, end, compare);
    } else {
        heap_sort_by(slice, begin, end, compare);
    }
}
