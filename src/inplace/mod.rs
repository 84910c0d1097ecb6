//! A priority search tree built inside the caller's point buffer.
//!
//! Construction permutes the buffer into implicit heap order with no extra node storage, after
//! De, Maheshwari, Nandy and Smid, "An In-Place Priority Search Tree" (CCCG 2011). Slot `i` has
//! its children in slots `2i + 1` and `2i + 2`, every level is full except the last, and the
//! last level is filled from the left.

#![warn(missing_docs)]

mod builder;
mod index;
mod traversal;

pub use builder::build_in_place;
pub use index::{InPlaceNode, InPlacePst, InPlacePstRef, OwnedInPlacePst};
