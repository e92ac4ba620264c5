//! The unit building block of the staggered grid.
//!
//! Cell `(i, j)` owns the points inside the half-open box that starts at its
//! vp location:
//!
//! ```text
//!   r ^
//!     |  srp (θ, r + dr/2)
//!     |   o
//!     |   |
//!     |   x-----o stp (θ + dθ/2, r)
//!     |  vp (θ, r)
//!     +----------------> θ
//! ```
//!
//! The top row has no srp (it would lie outside the surface) and the last
//! angular column has no stp.

use super::dof::{DofCounters, DofKind, VarGrouping};
use crate::types::{CellIndex, PolarPoint, PolarResolution};

/// A DOF owned by a cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalDof {
    pub kind: DofKind,
    pub point: PolarPoint,
    /// Global ID inside the DOF's pool, set by [`Cell::assign_gids`]
    pub gid: Option<usize>,
}

/// One grid cell with its local DOFs.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    index: CellIndex,
    i: usize,
    j: usize,
    on_symmetry_axis: bool,
    /// Local DOFs in fixed order: vp, then srp, then stp
    dofs: Vec<LocalDof>,
}

impl Cell {
    /// Build cell `(i, j)` whose vp sits at `origin`.
    pub fn new(
        index: CellIndex,
        (i, j): (usize, usize),
        resolution: PolarResolution,
        origin: PolarPoint,
        d_theta: f64,
        d_r: f64,
    ) -> Self {
        let mut dofs = Vec::with_capacity(3);
        dofs.push(LocalDof {
            kind: DofKind::Vp,
            point: origin,
            gid: None,
        });

        if j < resolution.n_r() - 1 {
            dofs.push(LocalDof {
                kind: DofKind::Srp,
                point: origin.offset(0.0, 0.5 * d_r),
                gid: None,
            });
        }

        if i < resolution.n_theta() - 1 {
            dofs.push(LocalDof {
                kind: DofKind::Stp,
                point: origin.offset(0.5 * d_theta, 0.0),
                gid: None,
            });
        }

        Self {
            index,
            i,
            j,
            on_symmetry_axis: i == 0 || i == resolution.n_theta() - 1,
            dofs,
        }
    }

    /// Dense cell index.
    #[inline]
    pub fn index(&self) -> CellIndex {
        self.index
    }

    /// Structural index pair `(i, j)`.
    #[inline]
    pub fn ij(&self) -> (usize, usize) {
        (self.i, self.j)
    }

    #[inline]
    pub fn is_on_symmetry_axis(&self) -> bool {
        self.on_symmetry_axis
    }

    /// Local DOFs in order (vp first).
    #[inline]
    pub fn dofs(&self) -> &[LocalDof] {
        &self.dofs
    }

    #[inline]
    pub fn num_dofs(&self) -> usize {
        self.dofs.len()
    }

    pub fn dof(&self, kind: DofKind) -> Option<&LocalDof> {
        self.dofs.iter().find(|d| d.kind == kind)
    }

    pub fn has_dof(&self, kind: DofKind) -> bool {
        self.dof(kind).is_some()
    }

    /// Location of the DOF of `kind`, if the cell owns one.
    pub fn point(&self, kind: DofKind) -> Option<PolarPoint> {
        self.dof(kind).map(|d| d.point)
    }

    /// Global ID of the DOF of `kind`, if it exists and has been numbered.
    pub fn gid(&self, kind: DofKind) -> Option<usize> {
        self.dof(kind).and_then(|d| d.gid)
    }

    /// Number this cell's DOFs from the running counters, in local order.
    pub fn assign_gids(&mut self, grouping: VarGrouping, counters: &mut DofCounters) {
        for dof in &mut self.dofs {
            dof.gid = Some(counters.next_id(grouping.pool_of(dof.kind)));
        }
    }
}
