//! Strongly-typed cell index.
//!
//! Cell indices are plain `usize` values underneath; the newtype keeps them
//! from being mixed up with DOF global IDs, which live in separate pools.

use std::fmt;
use std::ops::Index;

/// Dense cell index `k = j * n_theta + i` over the whole grid.
///
/// # Example
///
/// ```
/// use shaw_mesh::types::CellIndex;
///
/// let k = CellIndex::new(7);
/// assert_eq!(k.get(), 7);
/// assert_eq!(k.to_string(), "C7");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct CellIndex(usize);

impl CellIndex {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Raw index value.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Every index in `[0, n)`, in order.
    pub fn iter(n: usize) -> impl ExactSizeIterator<Item = CellIndex> {
        (0..n).map(CellIndex)
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}

// Vec<T> indexes through its deref to [T].
impl<T> Index<CellIndex> for [T] {
    type Output = T;

    #[inline]
    fn index(&self, idx: CellIndex) -> &T {
        &self[idx.0]
    }
}

impl<T> Index<CellIndex> for Vec<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: CellIndex) -> &T {
        &self[idx.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_index() {
        let idx = CellIndex::new(42);
        assert_eq!(idx.get(), 42);
        assert!(CellIndex::new(3) < idx);
    }

    #[test]
    fn test_slice_indexing() {
        let data = [10, 20, 30, 40, 50];
        assert_eq!(data[CellIndex::new(2)], 30);
        assert_eq!(data[CellIndex::new(4)], 50);

        let cells = Vec::from(["a", "b", "c"]);
        assert_eq!(cells[CellIndex::new(1)], "b");
    }

    #[test]
    fn test_iter() {
        let indices: Vec<_> = CellIndex::iter(3).collect();
        assert_eq!(
            indices,
            vec![CellIndex::new(0), CellIndex::new(1), CellIndex::new(2)]
        );
        assert_eq!(CellIndex::iter(5).len(), 5);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellIndex::new(12).to_string(), "C12");
    }
}
