//! A priority search tree built from individually allocated nodes.

#![warn(missing_docs)]

mod builder;
mod index;

pub use builder::PointerPstBuilder;
pub use index::{PointerNode, PointerPst};
