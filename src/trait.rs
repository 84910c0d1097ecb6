use geo_traits::{CoordTrait, RectTrait};

use crate::error::{PstError, Result};
use crate::point::Point;
use crate::query::{self, Extreme};
use crate::r#type::IndexableNum;
use crate::traversal::PstNode;

/// A trait for querying a priority search tree.
///
/// Implementors only expose their root; every query has a default implementation on top of
/// [`PstNode`]. All queries return [`PstError::EmptyTree`] on a tree without points.
pub trait PrioritySearchTree<N: IndexableNum> {
    /// Handle onto one node of this tree.
    type Node<'a>: PstNode<N>
    where
        Self: 'a;

    /// The root node, or `None` for an empty tree.
    fn root(&self) -> Option<Self::Node<'_>>;

    /// The number of points in this tree.
    fn num_items(&self) -> usize;

    /// Returns `true` if this tree holds no points.
    fn is_empty(&self) -> bool {
        self.num_items() == 0
    }

    /// The root node, or [`PstError::EmptyTree`].
    fn try_root(&self) -> Result<Self::Node<'_>> {
        self.root().ok_or(PstError::EmptyTree)
    }

    /// Number of levels, counting the root as one. An empty tree has height 0.
    fn height(&self) -> usize {
        self.root().map_or(0, query::height)
    }

    /// Every point in the tree, in pre-order.
    fn points(&self) -> Vec<Point<N>> {
        self.root().map_or_else(Vec::new, query::points)
    }

    /// All points with `min_x <= x <= max_x` and `min_y <= y <= max_y`.
    fn enumerate_4_sided(&self, min_x: N, max_x: N, min_y: N, max_y: N) -> Result<Vec<Point<N>>> {
        let root = self.try_root()?;
        Ok(query::enumerate(root, min_x, max_x, min_y, Some(max_y)))
    }

    /// All points with `min_x <= x <= max_x` and `y >= min_y`.
    fn enumerate_3_sided(&self, min_x: N, max_x: N, min_y: N) -> Result<Vec<Point<N>>> {
        let root = self.try_root()?;
        Ok(query::enumerate(root, min_x, max_x, min_y, None))
    }

    /// All points inside a rectangle, bounds included.
    fn enumerate_rect(&self, rect: &impl RectTrait<T = N>) -> Result<Vec<Point<N>>> {
        self.enumerate_4_sided(
            rect.min().x(),
            rect.max().x(),
            rect.min().y(),
            rect.max().y(),
        )
    }

    /// Smallest X in `[min_x, max_x] x [min_y, +inf)`.
    fn min_x_in_range(&self, min_x: N, max_x: N, min_y: N) -> Result<N> {
        let root = self.try_root()?;
        query::range_extreme(root, min_x, max_x, min_y, Extreme::MinX)
            .ok_or(PstError::NoPointsInRange)
    }

    /// Largest X in `[min_x, max_x] x [min_y, +inf)`.
    fn max_x_in_range(&self, min_x: N, max_x: N, min_y: N) -> Result<N> {
        let root = self.try_root()?;
        query::range_extreme(root, min_x, max_x, min_y, Extreme::MaxX)
            .ok_or(PstError::NoPointsInRange)
    }

    /// Smallest Y in `[min_x, max_x] x [min_y, +inf)`.
    fn min_y_in_range(&self, min_x: N, max_x: N, min_y: N) -> Result<N> {
        let root = self.try_root()?;
        query::range_extreme(root, min_x, max_x, min_y, Extreme::MinY)
            .ok_or(PstError::NoPointsInRange)
    }

    /// Largest Y in `[min_x, max_x] x [min_y, +inf)`.
    fn max_y_in_range(&self, min_x: N, max_x: N, min_y: N) -> Result<N> {
        let root = self.try_root()?;
        query::range_extreme(root, min_x, max_x, min_y, Extreme::MaxY)
            .ok_or(PstError::NoPointsInRange)
    }

    /// The point with the smallest X among those with `x >= min_x` and `y >= min_y`.
    fn left_most_ne(&self, min_x: N, min_y: N) -> Result<Point<N>> {
        let root = self.try_root()?;
        query::left_most_ne(root, min_x, min_y).ok_or(PstError::NoPointsInRange)
    }

    /// The point with the largest Y among those with `x >= min_x` and `y >= min_y`.
    fn highest_ne(&self, min_x: N, min_y: N) -> Result<Point<N>> {
        let root = self.try_root()?;
        query::highest_ne(root, min_x, min_y).ok_or(PstError::NoPointsInRange)
    }

    /// The point with the largest Y in `[min_x, max_x] x [min_y, +inf)`.
    fn highest_3_sided(&self, min_x: N, max_x: N, min_y: N) -> Result<Point<N>> {
        let root = self.try_root()?;
        query::highest_3_sided(root, min_x, max_x, min_y).ok_or(PstError::NoPointsInRange)
    }

    /// Smallest X in the tree.
    fn min_x(&self) -> Result<N> {
        self.try_root().map(query::min_x)
    }

    /// Largest X in the tree.
    fn max_x(&self) -> Result<N> {
        self.try_root().map(query::max_x)
    }

    /// Smallest Y in the tree.
    fn min_y(&self) -> Result<N> {
        self.try_root().map(query::min_y)
    }

    /// Largest Y in the tree, which is always the root's.
    fn max_y(&self) -> Result<N> {
        self.try_root().map(|root| root.y())
    }
}
