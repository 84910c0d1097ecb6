//! Utilities to traverse any priority search tree layout.

use crate::point::Point;
use crate::r#type::IndexableNum;

/// A lightweight handle onto one node of a priority search tree.
///
/// Every layout hands out its own handle type; the query algorithms are written once against
/// this trait. Children are ordered: every point in the left subtree has a smaller X than every
/// point in the right subtree, and every child has a Y no greater than its parent.
pub trait PstNode<N: IndexableNum>: Copy {
    /// The point stored at this node.
    fn point(&self) -> Point<N>;

    /// The left child, if any.
    fn left(&self) -> Option<Self>;

    /// The right child, if any.
    fn right(&self) -> Option<Self>;

    /// The X value separating the two subtrees, when the layout caches it.
    ///
    /// Points in the left subtree have `x <= median_x`, points in the right subtree
    /// `x > median_x`.
    fn median_x(&self) -> Option<f64> {
        None
    }

    #[inline]
    fn x(&self) -> N {
        self.point().x()
    }

    #[inline]
    fn y(&self) -> N {
        self.point().y()
    }

    /// Returns `true` if this is a leaf node without children.
    #[inline]
    fn is_leaf(&self) -> bool {
        self.left().is_none() && self.right().is_none()
    }

    /// Both children, left first.
    #[inline]
    fn children(&self) -> [Option<Self>; 2] {
        [self.left(), self.right()]
    }

    /// Largest X in the subtree rooted here.
    ///
    /// Walks the right spine, falling back to the left child where no right child exists.
    fn subtree_max_x(&self) -> N {
        let mut node = *self;
        let mut max_x = node.x();
        while let Some(next) = node.right().or_else(|| node.left()) {
            if next.x() > max_x {
                max_x = next.x();
            }
            node = next;
        }
        max_x
    }

    /// Smallest X in the subtree rooted here.
    fn subtree_min_x(&self) -> N {
        let mut node = *self;
        let mut min_x = node.x();
        while let Some(next) = node.left().or_else(|| node.right()) {
            if next.x() < min_x {
                min_x = next.x();
            }
            node = next;
        }
        min_x
    }
}
