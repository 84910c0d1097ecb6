use crate::point::Point;
use crate::r#trait::PrioritySearchTree;
use crate::r#type::IndexableNum;
use crate::traversal::PstNode;

/// A priority search tree of boxed nodes.
///
/// Built with a [`PointerPstBuilder`](crate::pointer::PointerPstBuilder).
#[derive(Debug, Clone, PartialEq)]
pub struct PointerPst<N: IndexableNum = f64> {
    pub(crate) root: Option<Box<PointerNode<N>>>,
    pub(crate) num_items: usize,
}

impl<N: IndexableNum> PointerPst<N> {
    /// The root node, if the tree is not empty.
    pub fn root_node(&self) -> Option<&PointerNode<N>> {
        self.root.as_deref()
    }
}

impl<N: IndexableNum> Drop for PointerPst<N> {
    // Unlink iteratively; a skewed tree is deep enough to overflow the stack otherwise.
    fn drop(&mut self) {
        let mut stack: Vec<Box<PointerNode<N>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<N: IndexableNum> PrioritySearchTree<N> for PointerPst<N> {
    type Node<'a>
        = &'a PointerNode<N>
    where
        Self: 'a;

    fn root(&self) -> Option<Self::Node<'_>> {
        self.root.as_deref()
    }

    fn num_items(&self) -> usize {
        self.num_items
    }
}

/// A node in a [`PointerPst`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointerNode<N: IndexableNum> {
    pub(crate) point: Point<N>,
    pub(crate) median_x: Option<f64>,
    pub(crate) left: Option<Box<PointerNode<N>>>,
    pub(crate) right: Option<Box<PointerNode<N>>>,
}

impl<'a, N: IndexableNum> PstNode<N> for &'a PointerNode<N> {
    #[inline]
    fn point(&self) -> Point<N> {
        self.point
    }

    #[inline]
    fn left(&self) -> Option<Self> {
        let node: &'a PointerNode<N> = *self;
        node.left.as_deref()
    }

    #[inline]
    fn right(&self) -> Option<Self> {
        let node: &'a PointerNode<N> = *self;
        node.right.as_deref()
    }

    #[inline]
    fn median_x(&self) -> Option<f64> {
        self.median_x
    }
}
