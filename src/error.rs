use std::fmt::Debug;
use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PstError {
    /// The tree holds no points, so it has no root to query from.
    #[error("Tree is empty")]
    EmptyTree,

    /// The query region matched no point.
    #[error("No points in range")]
    NoPointsInRange,

    /// The named query is not offered by this tree layout.
    #[error("{0} is not implemented for this tree layout")]
    NotImplemented(&'static str),

    /// A slot number of the heap-array layout no longer fits in a `usize`. Mean-X splits of a
    /// strongly skewed input can nest this deep; the pointer and in-place layouts have no such
    /// limit.
    #[error("Tree is too deep for the heap-array layout")]
    TooDeep,

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, PstError>;
