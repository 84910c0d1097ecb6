//! Extremal queries that follow a constant number of root-to-leaf paths.
//!
//! All of them rely on two facts about any layout: a node's Y bounds its whole subtree, and the
//! children on one level, read left to right, hold X-ordered subtrees. A child below `min_y`
//! takes its whole subtree out of the query, and once one child is classified left of, inside or
//! right of the X interval, every earlier or later child on the level is at least as far out.

use crate::point::Point;
use crate::query::Side;
use crate::r#type::IndexableNum;
use crate::traversal::PstNode;

/// The point with the smallest X among those with `x >= min_x` and `y >= min_y`.
///
/// Walks two cursors down one level at a time: `left`, the rightmost subtree still entirely left
/// of `min_x`, and `right`, the leftmost node known to qualify. Every point to the right of
/// `right` has a larger X than `right` itself, so nothing there can win.
pub(crate) fn left_most_ne<N, T>(root: T, min_x: N, min_y: N) -> Option<Point<N>>
where
    N: IndexableNum,
    T: PstNode<N>,
{
    if root.y() < min_y {
        return None;
    }

    let mut best: Option<Point<N>> = None;
    let (mut left, mut right) = if root.x() < min_x {
        (Some(root), None)
    } else {
        best = Some(root.point());
        (None, Some(root))
    };

    while left.is_some() || right.is_some() {
        let mut next_left = None;
        let mut next_right = None;

        let children = left
            .into_iter()
            .chain(right)
            .flat_map(|node| node.children())
            .flatten();
        for child in children {
            if child.x() < min_x {
                next_left = Some(child);
            } else if child.y() >= min_y {
                next_right = Some(child);
                break;
            }
        }

        if let Some(candidate) = next_right {
            if best.map_or(true, |b| candidate.x() < b.x()) {
                best = Some(candidate.point());
            }
        }
        left = next_left.filter(|node| node.y() >= min_y);
        right = next_right;
    }

    best
}

/// The point with the largest Y among those with `x >= min_x` and `y >= min_y`.
///
/// Any qualifying node beats its whole subtree, so only the rightmost child still left of
/// `min_x` has to be followed further.
pub(crate) fn highest_ne<N, T>(root: T, min_x: N, min_y: N) -> Option<Point<N>>
where
    N: IndexableNum,
    T: PstNode<N>,
{
    let mut best: Option<Point<N>> = None;
    let mut cursor = Some(root);

    while let Some(node) = cursor.take() {
        if node.y() < min_y || best.is_some_and(|b| node.y() <= b.y()) {
            break;
        }
        if node.x() >= min_x {
            best = Some(node.point());
            break;
        }

        for child in node.children().into_iter().flatten() {
            if child.x() < min_x {
                cursor = Some(child);
            } else if child.y() >= min_y && best.map_or(true, |b| child.y() > b.y()) {
                best = Some(child.point());
            }
        }
    }

    best
}

#[derive(Debug, Clone, Copy)]
struct Cursor<T> {
    node: T,
    depth: usize,
}

/// The point with the largest Y in `[min_x, max_x] x [min_y, +inf)`.
///
/// Keeps one cursor on the rightmost subtree left of `min_x` and one on the leftmost subtree
/// right of `max_x`. Each step expands the shallower cursor (the left one on ties); children
/// inside the interval are candidates and never need expanding, since they dominate their
/// subtrees.
pub(crate) fn highest_3_sided<N, T>(root: T, min_x: N, max_x: N, min_y: N) -> Option<Point<N>>
where
    N: IndexableNum,
    T: PstNode<N>,
{
    if root.y() < min_y {
        return None;
    }

    let (mut left, mut right) = match Side::of(root.x(), min_x, max_x) {
        Side::Inside => return Some(root.point()),
        Side::Left => (Some(Cursor { node: root, depth: 0 }), None),
        Side::Right => (None, Some(Cursor { node: root, depth: 0 })),
    };
    let mut best: Option<Point<N>> = None;

    loop {
        let expand_left = match (&left, &right) {
            (Some(l), Some(r)) => l.depth <= r.depth,
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (None, None) => break,
        };
        let taken = if expand_left { left.take() } else { right.take() };
        let Some(cursor) = taken else { break };

        if best.is_some_and(|b| cursor.node.y() <= b.y()) {
            continue;
        }

        let mut next_left = None;
        let mut next_right = None;
        for child in cursor.node.children().into_iter().flatten() {
            match Side::of(child.x(), min_x, max_x) {
                Side::Left => next_left = Some(child),
                Side::Inside => {
                    if child.y() >= min_y && best.map_or(true, |b| child.y() > b.y()) {
                        best = Some(child.point());
                    }
                }
                Side::Right => {
                    if next_right.is_none() {
                        next_right = Some(child);
                    }
                }
            }
        }

        // A new cursor on either side supersedes the old one, which lies further out.
        let depth = cursor.depth + 1;
        if let Some(node) = next_left {
            left = (node.y() >= min_y).then_some(Cursor { node, depth });
        }
        if let Some(node) = next_right {
            right = (node.y() >= min_y).then_some(Cursor { node, depth });
        }
    }

    best
}
