//! Building any layout behind one type.

use crate::error::Result;
use crate::heap::{HeapNode, HeapPst, HeapPstBuilder, Iterative, Recursive};
use crate::inplace::{InPlaceNode, OwnedInPlacePst};
use crate::point::Point;
use crate::pointer::{PointerNode, PointerPst, PointerPstBuilder};
use crate::r#trait::PrioritySearchTree;
use crate::r#type::IndexableNum;
use crate::traversal::PstNode;

/// Which layout [`build`] produces, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildStrategy {
    /// Heap-array layout, built by recursion.
    #[default]
    ArrayRecursive,
    /// Heap-array layout, built from a FIFO work queue.
    ArrayIterative,
    /// Boxed nodes.
    Pointer,
    /// The input buffer itself, permuted into heap order.
    InPlace,
}

/// A priority search tree in any of the supported layouts.
#[derive(Debug, Clone, PartialEq)]
pub enum Pst<N: IndexableNum = f64> {
    /// See [`HeapPst`].
    Heap(HeapPst<N>),
    /// See [`PointerPst`].
    Pointer(PointerPst<N>),
    /// See [`OwnedInPlacePst`].
    InPlace(OwnedInPlacePst<N>),
}

/// Build a tree over `points` with the given strategy. Medians are cached where the layout
/// supports them.
///
/// Building from no points gives an empty tree; its queries return
/// [`PstError::EmptyTree`](crate::PstError::EmptyTree). The heap-array strategies fail with
/// [`PstError::TooDeep`](crate::PstError::TooDeep) on inputs skewed enough that slot numbers
/// overflow; the other strategies always succeed.
pub fn build<N: IndexableNum>(
    points: impl IntoIterator<Item = Point<N>>,
    strategy: BuildStrategy,
) -> Result<Pst<N>> {
    let points: Vec<_> = points.into_iter().collect();
    tracing::debug!(?strategy, num_items = points.len(), "building priority search tree");

    let tree = match strategy {
        BuildStrategy::ArrayRecursive => {
            Pst::Heap(HeapPstBuilder::from_points(points).finish::<Recursive>()?)
        }
        BuildStrategy::ArrayIterative => {
            Pst::Heap(HeapPstBuilder::from_points(points).finish::<Iterative>()?)
        }
        BuildStrategy::Pointer => Pst::Pointer(PointerPstBuilder::from_points(points).finish()),
        BuildStrategy::InPlace => Pst::InPlace(OwnedInPlacePst::new(points)),
    };
    Ok(tree)
}

/// A node of any layout.
#[derive(Debug, Clone, Copy)]
pub enum PstNodeRef<'a, N: IndexableNum> {
    /// See [`HeapNode`].
    Heap(HeapNode<'a, N>),
    /// See [`PointerNode`].
    Pointer(&'a PointerNode<N>),
    /// See [`InPlaceNode`].
    InPlace(InPlaceNode<'a, N>),
}

impl<N: IndexableNum> PstNode<N> for PstNodeRef<'_, N> {
    fn point(&self) -> Point<N> {
        match self {
            Self::Heap(node) => node.point(),
            Self::Pointer(node) => node.point(),
            Self::InPlace(node) => node.point(),
        }
    }

    fn left(&self) -> Option<Self> {
        match self {
            Self::Heap(node) => node.left().map(Self::Heap),
            Self::Pointer(node) => node.left().map(Self::Pointer),
            Self::InPlace(node) => node.left().map(Self::InPlace),
        }
    }

    fn right(&self) -> Option<Self> {
        match self {
            Self::Heap(node) => node.right().map(Self::Heap),
            Self::Pointer(node) => node.right().map(Self::Pointer),
            Self::InPlace(node) => node.right().map(Self::InPlace),
        }
    }

    fn median_x(&self) -> Option<f64> {
        match self {
            Self::Heap(node) => node.median_x(),
            Self::Pointer(node) => node.median_x(),
            Self::InPlace(node) => node.median_x(),
        }
    }
}

macro_rules! dispatch {
    ($self:expr, $tree:ident => $call:expr) => {
        match $self {
            Pst::Heap($tree) => $call,
            Pst::Pointer($tree) => $call,
            Pst::InPlace($tree) => $call,
        }
    };
}

impl<N: IndexableNum> PrioritySearchTree<N> for Pst<N> {
    type Node<'a>
        = PstNodeRef<'a, N>
    where
        Self: 'a;

    fn root(&self) -> Option<Self::Node<'_>> {
        match self {
            Pst::Heap(tree) => tree.root().map(PstNodeRef::Heap),
            Pst::Pointer(tree) => tree.root().map(PstNodeRef::Pointer),
            Pst::InPlace(tree) => tree.root().map(PstNodeRef::InPlace),
        }
    }

    fn num_items(&self) -> usize {
        dispatch!(self, tree => tree.num_items())
    }

    fn height(&self) -> usize {
        dispatch!(self, tree => tree.height())
    }

    fn enumerate_3_sided(&self, min_x: N, max_x: N, min_y: N) -> Result<Vec<Point<N>>> {
        dispatch!(self, tree => tree.enumerate_3_sided(min_x, max_x, min_y))
    }

    fn min_x_in_range(&self, min_x: N, max_x: N, min_y: N) -> Result<N> {
        dispatch!(self, tree => tree.min_x_in_range(min_x, max_x, min_y))
    }

    fn max_x_in_range(&self, min_x: N, max_x: N, min_y: N) -> Result<N> {
        dispatch!(self, tree => tree.max_x_in_range(min_x, max_x, min_y))
    }

    fn min_y_in_range(&self, min_x: N, max_x: N, min_y: N) -> Result<N> {
        dispatch!(self, tree => tree.min_y_in_range(min_x, max_x, min_y))
    }

    fn max_y_in_range(&self, min_x: N, max_x: N, min_y: N) -> Result<N> {
        dispatch!(self, tree => tree.max_y_in_range(min_x, max_x, min_y))
    }
}
