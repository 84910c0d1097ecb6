//! The indexed point type.

use std::cmp::Ordering;

use bytemuck::{Pod, Zeroable};
use geo_traits::CoordTrait;

use crate::r#type::IndexableNum;

/// An immutable 2-D point stored in a priority search tree.
///
/// Within one tree, X values are expected to be pairwise distinct and Y values pairwise distinct.
/// Duplicates still build a valid tree, but queries whose answer depends on a tie may return any
/// of the tied points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Point<N: IndexableNum = f64> {
    x: N,
    y: N,
}

impl<N: IndexableNum> Point<N> {
    /// Create a new point.
    pub fn new(x: N, y: N) -> Self {
        Self { x, y }
    }

    /// The X coordinate.
    #[inline]
    pub fn x(&self) -> N {
        self.x
    }

    /// The Y coordinate.
    #[inline]
    pub fn y(&self) -> N {
        self.y
    }

    /// Order by X, breaking ties on Y.
    pub fn cmp_by_x(&self, other: &Self) -> Ordering {
        partial(self.x, other.x).then_with(|| partial(self.y, other.y))
    }

    /// Order by Y, breaking ties on X.
    pub fn cmp_by_y(&self, other: &Self) -> Ordering {
        partial(self.y, other.y).then_with(|| partial(self.x, other.x))
    }

    /// Whether this point lies in the closed box `[min_x, max_x] x [min_y, max_y]`.
    #[inline]
    pub fn in_box(&self, min_x: N, max_x: N, min_y: N, max_y: N) -> bool {
        self.x >= min_x && self.x <= max_x && self.y >= min_y && self.y <= max_y
    }

    /// Whether this point lies in the 3-sided region `[min_x, max_x] x [min_y, +inf)`.
    #[inline]
    pub fn in_3_sided(&self, min_x: N, max_x: N, min_y: N) -> bool {
        self.x >= min_x && self.x <= max_x && self.y >= min_y
    }
}

/// NaN compares equal to everything, so sorting never panics.
#[inline]
fn partial<N: PartialOrd>(a: N, b: N) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

// SAFETY: `repr(C)` with two fields of the same plain-data type, so there is no padding and every
// bit pattern is a valid point.
unsafe impl<N: IndexableNum> Zeroable for Point<N> {}
unsafe impl<N: IndexableNum> Pod for Point<N> {}

impl<N: IndexableNum> From<(N, N)> for Point<N> {
    fn from((x, y): (N, N)) -> Self {
        Self::new(x, y)
    }
}

impl<N: IndexableNum> From<[N; 2]> for Point<N> {
    fn from([x, y]: [N; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<N: IndexableNum> CoordTrait for Point<N> {
    type T = N;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}
