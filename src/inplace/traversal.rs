//! 3-sided enumeration over an in-place tree.

use tinyvec::TinyVec;

use crate::indices::NodeIndex;
use crate::point::Point;
use crate::query::Side;
use crate::r#type::IndexableNum;

/// The four cursors of [`enumerate_3_sided`], all on the same level and in X order.
#[derive(Debug, Default, Clone, Copy)]
struct Frontier {
    /// Rightmost subtree entirely left of the query interval.
    left: Option<NodeIndex>,
    /// Leftmost node inside the interval.
    left_inner: Option<NodeIndex>,
    /// Rightmost node inside the interval, when different from `left_inner`.
    right_inner: Option<NodeIndex>,
    /// Leftmost subtree entirely right of the query interval.
    right: Option<NodeIndex>,
}

impl Frontier {
    fn is_empty(&self) -> bool {
        self.left.is_none()
            && self.left_inner.is_none()
            && self.right_inner.is_none()
            && self.right.is_none()
    }

    fn nodes(&self) -> impl Iterator<Item = NodeIndex> {
        [self.left, self.left_inner, self.right_inner, self.right]
            .into_iter()
            .flatten()
    }
}

/// All points with `min_x <= x <= max_x` and `y >= min_y`.
///
/// Walks down level by level keeping at most four boundary nodes. Any child strictly between the
/// two inner boundary children is entirely inside the X interval and is handed to [`explore`].
pub(crate) fn enumerate_3_sided<N: IndexableNum>(
    points: &[Point<N>],
    min_x: N,
    max_x: N,
    min_y: N,
) -> Vec<Point<N>> {
    let mut result = Vec::new();
    let Some(root) = points.first() else {
        return result;
    };
    if root.y() < min_y {
        return result;
    }

    let mut frontier = Frontier::default();
    match Side::of(root.x(), min_x, max_x) {
        Side::Left => frontier.left = Some(NodeIndex::ROOT),
        Side::Right => frontier.right = Some(NodeIndex::ROOT),
        Side::Inside => {
            result.push(*root);
            frontier.left_inner = Some(NodeIndex::ROOT);
        }
    }

    let n = points.len();
    let above = |index: &NodeIndex| points[index.get()].y() >= min_y;

    while !frontier.is_empty() {
        let children: TinyVec<[NodeIndex; 8]> = frontier
            .nodes()
            .flat_map(|node| [node.left(), node.right()])
            .filter(|child| child.get() < n)
            .collect();

        let mut next = Frontier::default();
        let mut inside: Option<(usize, usize)> = None;
        for (position, &child) in children.iter().enumerate() {
            match Side::of(points[child.get()].x(), min_x, max_x) {
                Side::Left => next.left = Some(child),
                Side::Inside => {
                    inside = Some(match inside {
                        Some((first, _)) => (first, position),
                        None => (position, position),
                    });
                }
                Side::Right => {
                    if next.right.is_none() {
                        next.right = Some(child);
                    }
                }
            }
        }
        next.left = next.left.filter(above);
        next.right = next.right.filter(above);

        if let Some((first, last)) = inside {
            // Strictly between the two inner boundaries lies entirely inside the X interval.
            for &child in children.iter().take(last).skip(first + 1) {
                explore(points, child, min_y, &mut result);
            }

            let left_inner = children[first];
            if above(&left_inner) {
                result.push(points[left_inner.get()]);
                next.left_inner = Some(left_inner);
            }
            if last > first {
                let right_inner = children[last];
                if above(&right_inner) {
                    result.push(points[right_inner.get()]);
                    next.right_inner = Some(right_inner);
                }
            }
        }

        frontier = next;
    }

    result
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExploreState {
    /// Report the current node, then descend left.
    Visit,
    /// Descend right from the current node.
    TryRight,
    /// Return to the parent.
    Ascend,
}

/// Report every point with `y >= min_y` in the subtree rooted at `root`.
///
/// The X range is not checked. Walks with parent links instead of a stack, so the only state is
/// the current slot.
pub(crate) fn explore<N: IndexableNum>(
    points: &[Point<N>],
    root: NodeIndex,
    min_y: N,
    result: &mut Vec<Point<N>>,
) {
    let above = |index: NodeIndex| index.get() < points.len() && points[index.get()].y() >= min_y;
    if !above(root) {
        return;
    }

    let mut current = root;
    let mut state = ExploreState::Visit;
    loop {
        match state {
            ExploreState::Visit => {
                result.push(points[current.get()]);
                if above(current.left()) {
                    current = current.left();
                } else {
                    state = ExploreState::TryRight;
                }
            }
            ExploreState::TryRight => {
                if above(current.right()) {
                    current = current.right();
                    state = ExploreState::Visit;
                } else {
                    state = ExploreState::Ascend;
                }
            }
            ExploreState::Ascend => {
                if current == root {
                    break;
                }
                state = if current.is_left_child() {
                    ExploreState::TryRight
                } else {
                    ExploreState::Ascend
                };
                match current.parent() {
                    Some(parent) => current = parent,
                    None => break,
                }
            }
        }
    }
}
