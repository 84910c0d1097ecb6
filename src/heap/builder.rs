use crate::error::Result;
use crate::heap::{Construction, HeapPst, HeapSlots};
use crate::point::Point;
use crate::r#type::IndexableNum;
use crate::split::sort_by_y_descending;

/// A builder to create a [`HeapPst`].
///
/// ```
/// use pst_index::heap::{HeapPstBuilder, Recursive};
/// use pst_index::PrioritySearchTree;
///
/// let mut builder = HeapPstBuilder::new(3);
/// builder.add(1.0, 1.0);
/// builder.add(2.0, 5.0);
/// builder.add(3.0, 2.0);
/// let tree = builder.finish::<Recursive>().unwrap();
/// assert_eq!(tree.max_y().unwrap(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct HeapPstBuilder<N: IndexableNum> {
    points: Vec<Point<N>>,
    num_items: usize,
    cache_median: bool,
}

impl<N: IndexableNum> HeapPstBuilder<N> {
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
    ///
    /// Without cached medians, range queries bound a left subtree by walking it for its largest
    /// X instead.
    pub fn cache_median(mut self, cache_median: bool) -> Self {
        self.cache_median = cache_median;
        self
    }

    /// Add a point to the index, returning its insertion index.
    pub fn add(&mut self, x: N, y: N) -> usize {
        self.add_point(Point::new(x, y))
    }

    /// Add a point to the index, returning its insertion index.
    pub fn add_point(&mut self, point: Point<N>) -> usize {
        let index = self.points.len();
        self.points.push(point);
        index
    }

    /// Add every point of a flat `[x0, y0, x1, y1, ..]` coordinate buffer.
    pub fn add_interleaved(&mut self, coords: &[N]) {
        assert_eq!(coords.len() % 2, 0, "Interleaved coordinates must come in pairs.");
        self.points.extend_from_slice(bytemuck::cast_slice(coords));
    }

    /// Consume this builder, laying the points out with construction strategy `C`.
    ///
    /// Fails with [`PstError::TooDeep`](crate::PstError::TooDeep) if the splits nest too deep to
    /// number the slots; build a [`PointerPst`](crate::pointer::PointerPst) for such inputs.
    pub fn finish<C: Construction>(mut self) -> Result<HeapPst<N>> {
        assert_eq!(
            self.points.len(),
            self.num_items,
            "Added {} items when expected {}.",
            self.points.len(),
            self.num_items
        );

        sort_by_y_descending(&mut self.points);
        let mut slots = HeapSlots::new(self.num_items, self.cache_median);
        C::construct(&self.points, &mut slots)?;

        tracing::debug!(
            num_items = self.num_items,
            capacity = slots.points.len(),
            deep_nodes = slots.deep.len(),
            cache_median = self.cache_median,
            coord_type = N::TYPE_NAME,
            "built heap priority search tree"
        );

        Ok(HeapPst {
            slots: slots.points,
            medians: slots.medians.unwrap_or_default(),
            deep: slots.deep,
            num_items: self.num_items,
        })
    }
}
