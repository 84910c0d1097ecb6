use crate::indices::NodeIndex;
use crate::point::Point;
use crate::r#type::IndexableNum;
use crate::sort::sort_range_by;
use crate::util::width_at_depth;

/// Permute `points` into an in-place priority search tree.
///
/// Afterwards, slot 0 holds the highest point, each slot's Y is at least its children's, and for
/// every slot all X values in its left subtree are below all X values in its right subtree.
///
/// Long runs are re-sorted with the unstable heap sort. `Point::cmp_by_x` breaks X ties on Y, so
/// points that compare equal are identical and the resulting layout does not depend on the input
/// order.
pub fn build_in_place<N: IndexableNum>(points: &mut [Point<N>]) {
    let n = points.len();
    if n <= 1 {
        return;
    }

    sort_range_by(points, 0, n - 1, Point::cmp_by_x);

    // Levels 0..height are full; the bottom level takes what is left.
    let height = n.ilog2();
    for level in 0..height {
        build_level(points, level, height);
    }

    tracing::debug!(
        num_items = n,
        levels = height + 1,
        coord_type = N::TYPE_NAME,
        "built in-place priority search tree"
    );
}

/// Fill level `level`, assuming every point from that level down is sorted by X.
///
/// The points below the already filled levels form one X-sorted run per node of this level,
/// sized to that node's subtree: `full` subtrees reach the bottom level completely, at most one
/// reaches it partially, and the rest stop one level short. Each run's highest point moves into
/// the run's slot, and the remainder is re-sorted by X for the next level.
fn build_level<N: IndexableNum>(points: &mut [Point<N>], level: u32, height: u32) {
    let n = points.len();
    let width = width_at_depth(level);
    // Positions on the bottom level actually in use.
    let bottom = n - (width_at_depth(height) - 1);
    // Bottom-level positions under one node of this level.
    let span = width_at_depth(height - level);

    let full = bottom / span;
    let full_size = 2 * span - 1;
    let partial_size = span - 1 + bottom - full * span;
    let short_size = span - 1;

    tracing::trace!(level, full, partial_size, short_size, "filling level");

    // 1-based heap positions.
    let mut start = width;
    for j in 0..width {
        let size = if j < full {
            full_size
        } else if j == full {
            partial_size
        } else {
            short_size
        };

        let highest = highest_in(points, start, start + size - 1);
        points.swap(NodeIndex::from_one_based(width + j).get(), highest.get());
        start += size;
    }

    let below = 2 * width;
    if below < n {
        sort_range_by(
            points,
            NodeIndex::from_one_based(below).get(),
            n - 1,
            Point::cmp_by_x,
        );
    }
}

/// The slot of the highest point among 1-based positions `first..=last`.
fn highest_in<N: IndexableNum>(points: &[Point<N>], first: usize, last: usize) -> NodeIndex {
    let mut highest = NodeIndex::from_one_based(first);
    for position in first + 1..=last {
        let index = NodeIndex::from_one_based(position);
        if points[index.get()].y() > points[highest.get()].y() {
            highest = index;
        }
    }
    highest
}
