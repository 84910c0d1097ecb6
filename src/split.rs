//! The splitting step shared by the heap-array and pointer constructions.

use crate::point::Point;
use crate::r#type::IndexableNum;
use crate::sort::heap_sort_by;

/// One node produced by [`split`]: its point, the median it routes on, and the points of its two
/// subtrees.
#[derive(Debug, Clone)]
pub(crate) struct Split<N: IndexableNum> {
    pub(crate) point: Point<N>,
    /// Mean X of `lower` and `upper` combined. `None` for a leaf.
    pub(crate) median_x: Option<f64>,
    /// Points with `x <= median_x`, still ordered by Y descending.
    pub(crate) lower: Vec<Point<N>>,
    /// Points with `x > median_x`, still ordered by Y descending.
    pub(crate) upper: Vec<Point<N>>,
}

/// Sort points by Y descending, the order [`split`] expects.
pub(crate) fn sort_by_y_descending<N: IndexableNum>(points: &mut [Point<N>]) {
    if let Some(last) = points.len().checked_sub(1) {
        heap_sort_by(points, 0, last, |a, b| b.cmp_by_y(a));
    }
}

/// Take the highest point as the node and partition the rest around their mean X.
///
/// `points` must be ordered by Y descending. Ties at the median go to `lower`. Returns `None` for
/// an empty input.
pub(crate) fn split<N: IndexableNum>(points: &[Point<N>]) -> Option<Split<N>> {
    let (point, rest) = points.split_first()?;
    let median_x = mean_x(rest);

    let (lower, upper) = match median_x {
        Some(median) => rest.iter().copied().partition(|p| p.x().as_f64() <= median),
        None => (Vec::new(), Vec::new()),
    };

    Some(Split {
        point: *point,
        median_x,
        lower,
        upper,
    })
}

fn mean_x<N: IndexableNum>(points: &[Point<N>]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }
    let sum: f64 = points.iter().map(|p| p.x().as_f64()).sum();
    Some(sum / points.len() as f64)
}
