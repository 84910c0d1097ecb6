use crate::point::Point;
use crate::r#type::IndexableNum;
use crate::traversal::PstNode;

/// Which extremum [`range_extreme`] tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Extreme {
    MinX,
    MaxX,
    MinY,
    MaxY,
}

/// All points in `[min_x, max_x] x [min_y, max_y]`, or the 3-sided region when `max_y` is `None`.
///
/// Output is in pre-order.
pub(crate) fn enumerate<N, T>(
    root: T,
    min_x: N,
    max_x: N,
    min_y: N,
    max_y: Option<N>,
) -> Vec<Point<N>>
where
    N: IndexableNum,
    T: PstNode<N>,
{
    let mut result = Vec::new();
    search(root, min_x, max_x, min_y, |point| {
        if max_y.map_or(true, |max_y| point.y() <= max_y) {
            result.push(point);
        }
        true
    });
    result
}

/// The extreme coordinate over the 3-sided region, or `None` if the region is empty.
pub(crate) fn range_extreme<N, T>(
    root: T,
    min_x: N,
    max_x: N,
    min_y: N,
    extreme: Extreme,
) -> Option<N>
where
    N: IndexableNum,
    T: PstNode<N>,
{
    let mut best: Option<N> = None;
    search(root, min_x, max_x, min_y, |point| {
        let value = match extreme {
            Extreme::MinX | Extreme::MaxX => point.x(),
            Extreme::MinY | Extreme::MaxY => point.y(),
        };
        let better = match (best, extreme) {
            (None, _) => true,
            (Some(b), Extreme::MinX | Extreme::MinY) => value < b,
            (Some(b), Extreme::MaxX | Extreme::MaxY) => value > b,
        };
        if better {
            best = Some(value);
        }
        // Nothing below a matching node has a larger Y.
        extreme != Extreme::MaxY
    });
    best
}

/// Depth-first walk over the 3-sided region `[min_x, max_x] x [min_y, +inf)`.
///
/// `visit` is called for every point in the region and returns whether the walk should continue
/// below that point. Subtrees are skipped once their root falls below `min_y`, and on X through
/// the cached median or, without one, the largest X of the left subtree.
fn search<N, T, F>(root: T, min_x: N, max_x: N, min_y: N, mut visit: F)
where
    N: IndexableNum,
    T: PstNode<N>,
    F: FnMut(Point<N>) -> bool,
{
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        let point = node.point();
        if point.y() < min_y {
            continue;
        }
        if point.in_3_sided(min_x, max_x, min_y) && !visit(point) {
            continue;
        }

        let (left, right) = route(&node, min_x, max_x);
        // Right first so the left subtree is popped first.
        stack.extend(right);
        stack.extend(left);
    }
}

/// The children of `node` whose subtrees may hold an X in `[min_x, max_x]`.
fn route<N, T>(node: &T, min_x: N, max_x: N) -> (Option<T>, Option<T>)
where
    N: IndexableNum,
    T: PstNode<N>,
{
    let left = node.left();
    let right = node.right();

    if let Some(median) = node.median_x() {
        let go_left = min_x.as_f64() <= median;
        let go_right = max_x.as_f64() > median;
        return (left.filter(|_| go_left), right.filter(|_| go_right));
    }

    match left {
        Some(left) => {
            let left_max = left.subtree_max_x();
            (
                Some(left).filter(|_| left_max >= min_x),
                right.filter(|_| left_max < max_x),
            )
        }
        None => (None, right),
    }
}
