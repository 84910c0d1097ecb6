use crate::point::Point;
use crate::pointer::{PointerNode, PointerPst};
use crate::r#type::IndexableNum;
use crate::split::{sort_by_y_descending, split};

/// A builder to create a [`PointerPst`].
#[derive(Debug, Clone)]
pub struct PointerPstBuilder<N: IndexableNum> {
    points: Vec<Point<N>>,
    num_items: usize,
    cache_median: bool,
}

impl<N: IndexableNum> PointerPstBuilder<N> {
    /// Create a new builder with the provided number of items. Medians are cached by default.
    pub fn new(num_items: usize) -> Self {
        Self {
            points: Vec::with_capacity(num_items),
            num_items,
            cache_median: true,
        }
    }

    /// Create a builder already holding every point of `points`.
    pub fn from_points(points: impl IntoIterator<Item = Point<N>>) -> Self {
        let points: Vec<_> = points.into_iter().collect();
        Self {
            num_items: points.len(),
            points,
            cache_median: true,
        }
    }

    /// Whether to store each node's median X.
    pub fn cache_median(mut self, cache_median: bool) -> Self {
        self.cache_median = cache_median;
        self
    }

    /// Add a point to the index, returning its insertion index.
    pub fn add(&mut self, x: N, y: N) -> usize {
        let index = self.points.len();
        self.points.push(Point::new(x, y));
        index
    }

    /// Add every point of a flat `[x0, y0, x1, y1, ..]` coordinate buffer.
    pub fn add_interleaved(&mut self, coords: &[N]) {
        assert_eq!(coords.len() % 2, 0, "Interleaved coordinates must come in pairs.");
        self.points.extend_from_slice(bytemuck::cast_slice(coords));
    }

    /// Consume this builder, linking the points into a tree.
    pub fn finish(mut self) -> PointerPst<N> {
        assert_eq!(
            self.points.len(),
            self.num_items,
            "Added {} items when expected {}.",
            self.points.len(),
            self.num_items
        );

        sort_by_y_descending(&mut self.points);
        let root = build_subtree(&self.points, self.cache_median);

        tracing::debug!(
            num_items = self.num_items,
            cache_median = self.cache_median,
            coord_type = N::TYPE_NAME,
            "built pointer priority search tree"
        );

        PointerPst {
            root,
            num_items: self.num_items,
        }
    }
}

/// Subtrees at least this large are built on the rayon pool.
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 4096;

type Link<N> = Option<Box<PointerNode<N>>>;

fn build_subtree<N: IndexableNum>(points: &[Point<N>], cache_median: bool) -> Link<N> {
    let split = split(points)?;
    let (left, right) = build_children(&split.lower, &split.upper, cache_median);
    Some(Box::new(PointerNode {
        point: split.point,
        median_x: split.median_x.filter(|_| cache_median),
        left,
        right,
    }))
}

#[cfg(feature = "rayon")]
fn build_children<N: IndexableNum>(
    lower: &[Point<N>],
    upper: &[Point<N>],
    cache_median: bool,
) -> (Link<N>, Link<N>) {
    if lower.len() + upper.len() >= PARALLEL_THRESHOLD {
        rayon::join(
            || build_subtree(lower, cache_median),
            || build_subtree(upper, cache_median),
        )
    } else {
        (
            build_subtree(lower, cache_median),
            build_subtree(upper, cache_median),
        )
    }
}

#[cfg(not(feature = "rayon"))]
fn build_children<N: IndexableNum>(
    lower: &[Point<N>],
    upper: &[Point<N>],
    cache_median: bool,
) -> (Link<N>, Link<N>) {
    (
        build_subtree(lower, cache_median),
        build_subtree(upper, cache_median),
    )
}
