use std::collections::BTreeMap;

use crate::heap::construction::DeepNode;
use crate::indices::NodeIndex;
use crate::point::Point;
use crate::r#trait::PrioritySearchTree;
use crate::r#type::IndexableNum;
use crate::traversal::PstNode;

/// A priority search tree laid out as an implicit binary heap.
///
/// Built with a [`HeapPstBuilder`](crate::heap::HeapPstBuilder).
#[derive(Debug, Clone, PartialEq)]
pub struct HeapPst<N: IndexableNum = f64> {
    pub(crate) slots: Vec<Option<Point<N>>>,
    /// Parallel to `slots`; empty when medians are not cached.
    pub(crate) medians: Vec<Option<f64>>,
    /// Nodes nested deeper than `slots` reaches.
    pub(crate) deep: BTreeMap<NodeIndex, DeepNode<N>>,
    pub(crate) num_items: usize,
}

impl<N: IndexableNum> HeapPst<N> {
    /// The dense slot vector, sized as a complete tree over the input. Slot `i` has its children
    /// in slots `2i + 1` and `2i + 2`.
    pub fn slots(&self) -> &[Option<Point<N>>] {
        &self.slots
    }

    /// The number of dense slots, used or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// The number of unused dense slots.
    pub fn wasted_capacity(&self) -> usize {
        self.capacity() - (self.num_items - self.deep.len())
    }

    /// The number of nodes stored past the dense slots.
    pub fn num_deep_nodes(&self) -> usize {
        self.deep.len()
    }

    /// The point in slot `index`.
    pub fn get(&self, index: NodeIndex) -> Option<&Point<N>> {
        match self.slots.get(index.get()) {
            Some(slot) => slot.as_ref(),
            None => self.deep.get(&index).map(|node| &node.point),
        }
    }

    /// The cached median X of slot `index`, if medians were cached and the node has children.
    pub fn median_x_at(&self, index: NodeIndex) -> Option<f64> {
        if index.get() < self.slots.len() {
            self.medians.get(index.get()).copied().flatten()
        } else {
            self.deep.get(&index).and_then(|node| node.median_x)
        }
    }

    /// Handle onto the node in slot `index`.
    pub fn node(&self, index: NodeIndex) -> Option<HeapNode<'_, N>> {
        self.get(index).map(|point| HeapNode {
            tree: self,
            index,
            point: *point,
        })
    }
}

impl<N: IndexableNum> PrioritySearchTree<N> for HeapPst<N> {
    type Node<'a>
        = HeapNode<'a, N>
    where
        Self: 'a;

    fn root(&self) -> Option<Self::Node<'_>> {
        self.node(NodeIndex::ROOT)
    }

    fn num_items(&self) -> usize {
        self.num_items
    }
}

/// A node in a [`HeapPst`].
#[derive(Debug, Clone, Copy)]
pub struct HeapNode<'a, N: IndexableNum> {
    tree: &'a HeapPst<N>,
    index: NodeIndex,
    point: Point<N>,
}

impl<N: IndexableNum> HeapNode<'_, N> {
    /// The slot this node occupies.
    pub fn index(&self) -> NodeIndex {
        self.index
    }
}

impl<N: IndexableNum> PstNode<N> for HeapNode<'_, N> {
    #[inline]
    fn point(&self) -> Point<N> {
        self.point
    }

    #[inline]
    fn left(&self) -> Option<Self> {
        self.index
            .checked_left()
            .and_then(|index| self.tree.node(index))
    }

    #[inline]
    fn right(&self) -> Option<Self> {
        self.index
            .checked_right()
            .and_then(|index| self.tree.node(index))
    }

    #[inline]
    fn median_x(&self) -> Option<f64> {
        self.tree.median_x_at(self.index)
    }
}
