#![doc = include_str!("../README.md")]

mod error;
pub mod heap;
pub mod indices;
pub mod inplace;
mod point;
pub mod pointer;
mod pst;
mod query;
pub mod sort;
mod split;
mod r#trait;
pub mod traversal;
mod r#type;
pub mod util;

pub use error::{PstError, Result};
pub use point::Point;
pub use pst::{build, BuildStrategy, Pst, PstNodeRef};
pub use r#trait::PrioritySearchTree;
pub use r#type::IndexableNum;

#[cfg(test)]
pub(crate) mod test;
