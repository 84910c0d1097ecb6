use std::collections::{BTreeMap, VecDeque};

use crate::error::{PstError, Result};
use crate::indices::NodeIndex;
use crate::point::Point;
use crate::r#type::IndexableNum;
use crate::split::{split, Split};
use crate::util::heap_capacity;

/// Slot storage filled in by a [`Construction`].
///
/// Slots of the complete tree sized for the input are stored densely. Mean-X splits are not
/// balanced, so a skewed input can nest deeper than that; those nodes go to a sparse map keyed by
/// slot instead of growing the dense vector a level at a time.
#[derive(Debug)]
pub struct HeapSlots<N: IndexableNum> {
    pub(crate) points: Vec<Option<Point<N>>>,
    /// `None` when medians are not cached.
    pub(crate) medians: Option<Vec<Option<f64>>>,
    pub(crate) deep: BTreeMap<NodeIndex, DeepNode<N>>,
}

/// A node stored below the dense slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DeepNode<N: IndexableNum> {
    pub(crate) point: Point<N>,
    pub(crate) median_x: Option<f64>,
}

impl<N: IndexableNum> HeapSlots<N> {
    pub(crate) fn new(num_items: usize, cache_median: bool) -> Self {
        let capacity = heap_capacity(num_items);
        Self {
            points: vec![None; capacity],
            medians: cache_median.then(|| vec![None; capacity]),
            deep: BTreeMap::new(),
        }
    }

    /// Store a split's node at `index`.
    pub(crate) fn place(&mut self, index: NodeIndex, split: &Split<N>) {
        let i = index.get();
        if i < self.points.len() {
            self.points[i] = Some(split.point);
            if let Some(medians) = self.medians.as_mut() {
                medians[i] = split.median_x;
            }
        } else {
            let median_x = split.median_x.filter(|_| self.medians.is_some());
            self.deep.insert(
                index,
                DeepNode {
                    point: split.point,
                    median_x,
                },
            );
        }
    }
}

/// A strategy that lays out points, pre-sorted by Y descending, into [`HeapSlots`].
pub trait Construction {
    /// Fill `slots` from `points`.
    ///
    /// Fails with [`PstError::TooDeep`] when a node's slot number would overflow `usize`.
    fn construct<N: IndexableNum>(points: &[Point<N>], slots: &mut HeapSlots<N>) -> Result<()>;
}

/// Top-down construction by recursion on each subtree.
#[derive(Debug, Clone, Copy)]
pub struct Recursive;

impl Construction for Recursive {
    fn construct<N: IndexableNum>(points: &[Point<N>], slots: &mut HeapSlots<N>) -> Result<()> {
        construct_subtree(Some(NodeIndex::ROOT), points, slots)
    }
}

/// `index` is `None` when the slot number overflowed, which is only an error if there is a node
/// to place.
fn construct_subtree<N: IndexableNum>(
    index: Option<NodeIndex>,
    points: &[Point<N>],
    slots: &mut HeapSlots<N>,
) -> Result<()> {
    let Some(split) = split(points) else {
        return Ok(());
    };
    let index = index.ok_or(PstError::TooDeep)?;
    slots.place(index, &split);
    construct_subtree(index.checked_left(), &split.lower, slots)?;
    construct_subtree(index.checked_right(), &split.upper, slots)
}

/// Breadth-first construction driven by a FIFO work queue. Produces the same slots as
/// [`Recursive`] without growing the call stack.
#[derive(Debug, Clone, Copy)]
pub struct Iterative;

impl Construction for Iterative {
    fn construct<N: IndexableNum>(points: &[Point<N>], slots: &mut HeapSlots<N>) -> Result<()> {
        let mut queue = VecDeque::new();
        queue.push_back((Some(NodeIndex::ROOT), points.to_vec()));

        while let Some((index, points)) = queue.pop_front() {
            let Some(split) = split(&points) else {
                continue;
            };
            let index = index.ok_or(PstError::TooDeep)?;
            slots.place(index, &split);
            queue.push_back((index.checked_left(), split.lower));
            queue.push_back((index.checked_right(), split.upper));
        }
        Ok(())
    }
}
