use std::cmp::Ordering;

/// In-place heap sort of `slice[begin..=end]`. Not stable.
///
/// Panics if `end` is out of bounds. An empty or single-element range is left as is.
pub fn heap_sort_by<T, F>(slice: &mut [T], begin: usize, end: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if begin >= end {
        return;
    }
    assert!(end < slice.len(), "Sort range end {} out of bounds.", end);

    let heap = &mut slice[begin..=end];
    let len = heap.len();

    for v in (0..len / 2).rev() {
        sift_down(heap, v, len, &mut compare);
    }

    for last in (1..len).rev() {
        heap.swap(0, last);
        sift_down(heap, 0, last, &mut compare);
    }
}

/// Restore the max-heap property below `v`, looking only at `heap[..len]`.
fn sift_down<T, F>(heap: &mut [T], mut v: usize, len: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut w = 2 * v + 1;
        if w >= len {
            return;
        }
        if w + 1 < len && compare(&heap[w + 1], &heap[w]) == Ordering::Greater {
            w += 1;
        }
        if compare(&heap[w], &heap[v]) != Ordering::Greater {
            return;
        }
        heap.swap(v, w);
        v = w;
    }
}
