use std::cmp::Ordering;

/// Stable insertion sort of `slice[begin..=end]`.
///
/// Panics if `end` is out of bounds. An empty or single-element range is left as is.
pub fn insertion_sort_by<T, F>(slice: &mut [T], begin: usize, end: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if begin >= end {
        return;
    }
    assert!(end < slice.len(), "Sort range end {} out of bounds.", end);

    for i in begin + 1..=end {
        let mut j = i;
        // Strictly greater only, so equal elements keep their order.
        while j > begin && compare(&slice[j - 1], &slice[j]) == Ordering::Greater {
            slice.swap(j - 1, j);
            j -= 1;
        }
    }
}
