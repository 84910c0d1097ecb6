//! Query algorithms shared by every layout.
//!
//! Each function starts from a root handle, so the empty-tree check lives with the caller.

mod cursor;
mod extent;
mod range;

pub(crate) use cursor::{highest_3_sided, highest_ne, left_most_ne};
pub(crate) use extent::{height, max_x, min_x, min_y, points};
pub(crate) use range::{enumerate, range_extreme, Extreme};

/// Where a point's X falls relative to a closed query interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Inside,
    Right,
}

impl Side {
    #[inline]
    pub(crate) fn of<N: PartialOrd>(x: N, min_x: N, max_x: N) -> Self {
        if x < min_x {
            Side::Left
        } else if x > max_x {
            Side::Right
        } else {
            Side::Inside
        }
    }
}
