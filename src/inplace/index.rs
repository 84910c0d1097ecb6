use std::marker::PhantomData;

use crate::error::{PstError, Result};
use crate::indices::NodeIndex;
use crate::inplace::build_in_place;
use crate::inplace::traversal;
use crate::point::Point;
use crate::r#trait::PrioritySearchTree;
use crate::r#type::IndexableNum;
use crate::traversal::PstNode;

/// An in-place priority search tree over a point buffer `S`.
///
/// The buffer holds exactly the tree's points, permuted into heap order; there is no other
/// storage. Use [`OwnedInPlacePst`] to hand the buffer over, or [`InPlacePstRef`] to build inside
/// a borrowed slice.
#[derive(Debug, Clone, PartialEq)]
pub struct InPlacePst<N: IndexableNum, S = Vec<Point<N>>> {
    points: S,
    phantom: PhantomData<N>,
}

/// An in-place priority search tree owning its buffer.
pub type OwnedInPlacePst<N> = InPlacePst<N, Vec<Point<N>>>;

/// An in-place priority search tree borrowing its buffer.
pub type InPlacePstRef<'a, N> = InPlacePst<N, &'a [Point<N>]>;

impl<N: IndexableNum> InPlacePst<N, Vec<Point<N>>> {
    /// Build a tree from `points`, reusing their allocation.
    pub fn new(mut points: Vec<Point<N>>) -> Self {
        build_in_place(&mut points);
        Self {
            points,
            phantom: PhantomData,
        }
    }

    /// A view onto this tree that borrows its buffer.
    pub fn as_ref(&self) -> InPlacePstRef<'_, N> {
        InPlacePst {
            points: &self.points,
            phantom: PhantomData,
        }
    }
}

impl<'a, N: IndexableNum> InPlacePst<N, &'a [Point<N>]> {
    /// Build a tree inside `points`, then keep borrowing them for queries.
    pub fn build(points: &'a mut [Point<N>]) -> Self {
        build_in_place(points);
        Self {
            points,
            phantom: PhantomData,
        }
    }

    /// Build a tree inside a flat `[x0, y0, x1, y1, ..]` coordinate buffer, without copying.
    ///
    /// Fails if `coords` has an odd length.
    pub fn from_interleaved(coords: &'a mut [N]) -> Result<Self> {
        let points: &'a mut [Point<N>] = bytemuck::try_cast_slice_mut(coords)
            .map_err(|err| PstError::General(format!("Invalid coordinate buffer: {}", err)))?;
        Ok(Self::build(points))
    }

    /// Wrap a buffer already permuted by [`build_in_place`].
    pub fn from_sorted_tree(points: &'a [Point<N>]) -> Self {
        Self {
            points,
            phantom: PhantomData,
        }
    }
}

impl<N: IndexableNum, S: AsRef<[Point<N>]>> InPlacePst<N, S> {
    /// The buffer in heap order.
    pub fn as_slice(&self) -> &[Point<N>] {
        self.points.as_ref()
    }

    /// Give the buffer back.
    pub fn into_inner(self) -> S {
        self.points
    }

    /// Handle onto the node in slot `index`.
    pub fn node(&self, index: NodeIndex) -> Option<InPlaceNode<'_, N>> {
        InPlaceNode::new(self.as_slice(), index)
    }
}

impl<N: IndexableNum, S: AsRef<[Point<N>]>> PrioritySearchTree<N> for InPlacePst<N, S> {
    type Node<'a>
        = InPlaceNode<'a, N>
    where
        Self: 'a;

    fn root(&self) -> Option<Self::Node<'_>> {
        self.node(NodeIndex::ROOT)
    }

    fn num_items(&self) -> usize {
        self.as_slice().len()
    }

    fn height(&self) -> usize {
        match self.num_items() {
            0 => 0,
            n => n.ilog2() as usize + 1,
        }
    }

    fn enumerate_3_sided(&self, min_x: N, max_x: N, min_y: N) -> Result<Vec<Point<N>>> {
        self.try_root()?;
        Ok(traversal::enumerate_3_sided(
            self.as_slice(),
            min_x,
            max_x,
            min_y,
        ))
    }

    fn min_x_in_range(&self, _min_x: N, _max_x: N, _min_y: N) -> Result<N> {
        self.try_root()?;
        Err(PstError::NotImplemented("min_x_in_range"))
    }

    fn max_x_in_range(&self, _min_x: N, _max_x: N, _min_y: N) -> Result<N> {
        self.try_root()?;
        Err(PstError::NotImplemented("max_x_in_range"))
    }

    fn min_y_in_range(&self, _min_x: N, _max_x: N, _min_y: N) -> Result<N> {
        self.try_root()?;
        Err(PstError::NotImplemented("min_y_in_range"))
    }

    fn max_y_in_range(&self, min_x: N, max_x: N, min_y: N) -> Result<N> {
        self.highest_3_sided(min_x, max_x, min_y)
            .map(|point| point.y())
    }
}

/// A node in an [`InPlacePst`].
#[derive(Debug, Clone, Copy)]
pub struct InPlaceNode<'a, N: IndexableNum> {
    points: &'a [Point<N>],
    index: NodeIndex,
}

impl<'a, N: IndexableNum> InPlaceNode<'a, N> {
    fn new(points: &'a [Point<N>], index: NodeIndex) -> Option<Self> {
        (index.get() < points.len()).then_some(Self { points, index })
    }

    /// The slot this node occupies.
    pub fn index(&self) -> NodeIndex {
        self.index
    }

    /// The parent node, `None` at the root.
    pub fn parent(&self) -> Option<Self> {
        self.index
            .parent()
            .and_then(|parent| Self::new(self.points, parent))
    }
}

impl<N: IndexableNum> PstNode<N> for InPlaceNode<'_, N> {
    #[inline]
    fn point(&self) -> Point<N> {
        self.points[self.index.get()]
    }

    #[inline]
    fn left(&self) -> Option<Self> {
        Self::new(self.points, self.index.left())
    }

    #[inline]
    fn right(&self) -> Option<Self> {
        Self::new(self.points, self.index.right())
    }
}
