//! Positions in an implicit binary heap.

/// A 0-based slot in an implicit binary heap: the root is slot 0 and the children of slot `i`
/// are `2i + 1` and `2i + 2`.
///
/// The in-place construction is naturally expressed with 1-based arithmetic; it converts through
/// [`NodeIndex::from_one_based`] and nowhere else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(usize);

impl NodeIndex {
    /// The root slot.
    pub const ROOT: Self = Self(0);

    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Convert a 1-based heap position. Panics on 0.
    #[inline]
    pub fn from_one_based(position: usize) -> Self {
        assert!(position > 0, "1-based heap positions start at 1.");
        Self(position - 1)
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn left(self) -> Self {
        Self(2 * self.0 + 1)
    }

    #[inline]
    pub const fn right(self) -> Self {
        Self(2 * self.0 + 2)
    }

    /// The left child, or `None` once its slot number overflows `usize`.
    #[inline]
    pub fn checked_left(self) -> Option<Self> {
        self.0.checked_mul(2)?.checked_add(1).map(Self)
    }

    /// The right child, or `None` once its slot number overflows `usize`.
    #[inline]
    pub fn checked_right(self) -> Option<Self> {
        self.0.checked_mul(2)?.checked_add(2).map(Self)
    }

    /// `None` for the root.
    #[inline]
    pub const fn parent(self) -> Option<Self> {
        if self.0 == 0 {
            None
        } else {
            Some(Self((self.0 - 1) / 2))
        }
    }

    #[inline]
    pub const fn is_left_child(self) -> bool {
        self.0 % 2 == 1
    }
}

impl From<NodeIndex> for usize {
    fn from(value: NodeIndex) -> Self {
        value.0
    }
}
