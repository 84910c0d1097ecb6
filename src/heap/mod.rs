//! A priority search tree stored as an implicit binary heap.
//!
//! Node `i` lives in slot `i` of a vector, with its children in slots `2i + 1` and `2i + 2`.
//! Slots left empty by an unbalanced split stay `None`.

#![warn(missing_docs)]

mod builder;
mod construction;
mod index;

pub use builder::HeapPstBuilder;
pub use construction::{Construction, HeapSlots, Iterative, Recursive};
pub use index::{HeapNode, HeapPst};
