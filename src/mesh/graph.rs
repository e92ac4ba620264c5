//! Dense stencil graphs indexed by DOF global ID.
//!
//! Global IDs are dense and zero-based, so a graph is just a `Vec` with one
//! fixed-width row per DOF. Rows are filled through [`DenseSlots`], which
//! rejects out-of-range, duplicate and missing IDs.

use super::dof::DofPool;
use super::error::MeshError;

/// Fixed-width adjacency rows, row `g` belonging to DOF `g` of `pool`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StencilGraph<const N: usize> {
    pool: DofPool,
    rows: Vec<[usize; N]>,
}

impl<const N: usize> StencilGraph<N> {
    pub(crate) fn from_rows(pool: DofPool, rows: Vec<[usize; N]>) -> Self {
        Self { pool, rows }
    }

    /// Pool of the source DOFs (row index space).
    #[inline]
    pub fn pool(&self) -> DofPool {
        self.pool
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Neighbour IDs of DOF `gid`, in stencil order.
    ///
    /// # Panics
    ///
    /// Panics if `gid >= len()`.
    #[inline]
    pub fn neighbors(&self, gid: usize) -> &[usize; N] {
        &self.rows[gid]
    }

    #[inline]
    pub fn get(&self, gid: usize) -> Option<&[usize; N]> {
        self.rows.get(gid)
    }

    #[inline]
    pub fn rows(&self) -> &[[usize; N]] {
        &self.rows
    }

    /// `(gid, neighbours)` in ascending ID order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &[usize; N])> {
        self.rows.iter().enumerate()
    }
}

/// Per-slot multipliers parallel to a vp [`StencilGraph`].
#[derive(Clone, Debug, PartialEq)]
pub struct CoeffTable<const N: usize> {
    rows: Vec<[f64; N]>,
}

impl<const N: usize> CoeffTable<N> {
    pub(crate) fn from_rows(rows: Vec<[f64; N]>) -> Self {
        Self { rows }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    pub fn coeffs(&self, gid: usize) -> &[f64; N] {
        &self.rows[gid]
    }

    #[inline]
    pub fn rows(&self) -> &[[f64; N]] {
        &self.rows
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &[f64; N])> {
        self.rows.iter().enumerate()
    }
}

/// Pre-sized output slots that must each be written exactly once.
#[derive(Debug)]
pub(crate) struct DenseSlots<T> {
    name: &'static str,
    slots: Vec<Option<T>>,
}

impl<T: Copy> DenseSlots<T> {
    pub(crate) fn new(name: &'static str, len: usize) -> Self {
        Self {
            name,
            slots: vec![None; len],
        }
    }

    pub(crate) fn set(&mut self, gid: usize, value: T) -> Result<(), MeshError> {
        let len = self.slots.len();
        let slot = self.slots.get_mut(gid).ok_or_else(|| {
            MeshError::invariant(format!(
                "{}: gid {} out of range for pool of size {}",
                self.name, gid, len
            ))
        })?;
        if slot.is_some() {
            return Err(MeshError::invariant(format!("{}: gid {} written twice", self.name, gid)));
        }
        *slot = Some(value);
        Ok(())
    }

    pub(crate) fn finish(self) -> Result<Vec<T>, MeshError> {
        let name = self.name;
        self.slots
            .into_iter()
            .enumerate()
            .map(|(gid, slot)| {
                slot.ok_or_else(|| {
                    MeshError::invariant(format!("{}: gid {} was never written", name, gid))
                })
            })
            .collect()
    }
}
