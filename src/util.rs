//! Capacity helpers for the implicit heap layouts.

/// Height of the smallest complete binary tree holding `num_items` nodes: `ceil(log2(n + 1))`.
#[inline]
pub fn tree_height(num_items: usize) -> u32 {
    usize::BITS - num_items.leading_zeros()
}

/// Number of slots in a complete binary tree of [`tree_height`]: `2^h - 1`.
#[inline]
pub fn heap_capacity(num_items: usize) -> usize {
    (1 << tree_height(num_items)) - 1
}

/// Slots of [`heap_capacity`] left unused by `num_items` points.
#[inline]
pub fn wasted_capacity(num_items: usize) -> usize {
    heap_capacity(num_items) - num_items
}

/// Number of slots on level `depth` (the root is depth 0).
#[inline]
pub fn width_at_depth(depth: u32) -> usize {
    1 << depth
}
