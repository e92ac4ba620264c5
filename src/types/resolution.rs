//! Polar grid resolution.

use std::fmt;

/// Number of grid points along angle (`n_theta`) and radius (`n_r`).
///
/// Every grid point is the origin of one cell, so this is also the number of
/// cells in each direction. Validation (both counts ≥ 2) happens in
/// [`GridGeometry`](crate::mesh::GridGeometry), not here.
///
/// # Example
///
/// ```
/// use shaw_mesh::types::PolarResolution;
///
/// let res = PolarResolution::new(4, 3);
/// assert_eq!(res.n_theta(), 4);
/// assert_eq!(res.n_r(), 3);
/// assert_eq!(res.total_cells(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PolarResolution {
    /// Number of points along theta
    n_theta: usize,
    /// Number of points along r
    n_r: usize,
}

impl PolarResolution {
    /// Create a new resolution.
    pub const fn new(n_theta: usize, n_r: usize) -> Self {
        Self { n_theta, n_r }
    }

    /// Number of points along theta.
    #[inline]
    pub fn n_theta(&self) -> usize {
        self.n_theta
    }

    /// Number of points along r.
    #[inline]
    pub fn n_r(&self) -> usize {
        self.n_r
    }

    /// Total number of cells (= number of vp points).
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.n_theta * self.n_r
    }

    /// Dense cell index of the structural pair `(i, j)`, angle fastest.
    #[inline]
    pub fn cell_index(&self, i: usize, j: usize) -> usize {
        j * self.n_theta + i
    }

    /// Structural pair `(i, j)` of a dense cell index.
    #[inline]
    pub fn cell_ij(&self, k: usize) -> (usize, usize) {
        (k % self.n_theta, k / self.n_theta)
    }

    /// Number of radial-stress points: `n_theta * (n_r - 1)`.
    #[inline]
    pub fn srp_count(&self) -> usize {
        self.n_theta * self.n_r.saturating_sub(1)
    }

    /// Number of angular-stress points: `(n_theta - 1) * n_r`.
    #[inline]
    pub fn stp_count(&self) -> usize {
        self.n_theta.saturating_sub(1) * self.n_r
    }

    /// Return as tuple (n_theta, n_r).
    #[inline]
    pub fn as_tuple(&self) -> (usize, usize) {
        (self.n_theta, self.n_r)
    }
}

impl fmt::Display for PolarResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}θ×{}r", self.n_theta, self.n_r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_creation() {
        let r = PolarResolution::new(100, 50);
        assert_eq!(r.n_theta(), 100);
        assert_eq!(r.n_r(), 50);
        assert_eq!(r.as_tuple(), (100, 50));
    }

    #[test]
    fn test_dof_counts() {
        let r = PolarResolution::new(4, 3);
        assert_eq!(r.total_cells(), 12);
        assert_eq!(r.srp_count(), 8);
        assert_eq!(r.stp_count(), 9);
    }

    #[test]
    fn test_cell_index_roundtrip() {
        let r = PolarResolution::new(5, 4);
        for j in 0..4 {
            for i in 0..5 {
                let k = r.cell_index(i, j);
                assert_eq!(r.cell_ij(k), (i, j));
            }
        }
        assert_eq!(r.cell_index(2, 1), 7);
    }
}
