use crate::point::Point;
use crate::r#type::IndexableNum;
use crate::traversal::PstNode;

/// Every point in the tree, in pre-order.
pub(crate) fn points<N, T>(root: T) -> Vec<Point<N>>
where
    N: IndexableNum,
    T: PstNode<N>,
{
    let mut result = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        result.push(node.point());
        stack.extend(node.right());
        stack.extend(node.left());
    }
    result
}

/// Number of levels, counting the root as one.
pub(crate) fn height<N, T>(root: T) -> usize
where
    N: IndexableNum,
    T: PstNode<N>,
{
    let mut height = 0;
    let mut stack = vec![(root, 1)];
    while let Some((node, depth)) = stack.pop() {
        height = height.max(depth);
        for child in node.children().into_iter().flatten() {
            stack.push((child, depth + 1));
        }
    }
    height
}

#[inline]
pub(crate) fn min_x<N, T>(root: T) -> N
where
    N: IndexableNum,
    T: PstNode<N>,
{
    root.subtree_min_x()
}

#[inline]
pub(crate) fn max_x<N, T>(root: T) -> N
where
    N: IndexableNum,
    T: PstNode<N>,
{
    root.subtree_max_x()
}

/// Smallest Y in the tree. Only leaves can hold it, but all of them have to be checked.
pub(crate) fn min_y<N, T>(root: T) -> N
where
    N: IndexableNum,
    T: PstNode<N>,
{
    let mut min_y = root.y();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_leaf() && node.y() < min_y {
            min_y = node.y();
        }
        stack.extend(node.children().into_iter().flatten());
    }
    min_y
}
