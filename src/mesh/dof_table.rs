//! Per-pool tables of DOF coordinates and flags, indexed by global ID.

use super::dof::{DofKind, DofPool};
use super::error::MeshError;
use super::factory::CellGrid;
use super::graph::DenseSlots;
use crate::types::PolarPoint;

/// What the output files record about one DOF.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DofEntry {
    pub kind: DofKind,
    pub point: PolarPoint,
    /// Set for vp and srp on the symmetry axes. Always false for stp.
    pub on_axis: bool,
}

impl DofEntry {
    /// Label column value of the merged sp table.
    #[inline]
    pub fn label(&self) -> u8 {
        self.kind.label()
    }
}

/// Entries of one numbering pool in ascending global-ID order.
#[derive(Clone, Debug, PartialEq)]
pub struct DofTable {
    pool: DofPool,
    entries: Vec<DofEntry>,
}

impl DofTable {
    /// Collect every DOF of `pool` from a numbered grid.
    pub fn from_grid(grid: &CellGrid, pool: DofPool) -> Result<Self, MeshError> {
        let grouping = grid.grouping();
        let mut slots = DenseSlots::new(pool.name(), grid.pool_size(pool));

        for cell in grid.cells() {
            for dof in cell.dofs() {
                if grouping.pool_of(dof.kind) != pool {
                    continue;
                }
                let gid = dof.gid.ok_or_else(|| {
                    MeshError::invariant(format!(
                        "{} of cell {} has no global ID",
                        dof.kind,
                        cell.index()
                    ))
                })?;
                let on_axis = match dof.kind {
                    DofKind::Stp => false,
                    DofKind::Vp | DofKind::Srp => cell.is_on_symmetry_axis(),
                };
                slots.set(
                    gid,
                    DofEntry {
                        kind: dof.kind,
                        point: dof.point,
                        on_axis,
                    },
                )?;
            }
        }

        Ok(Self {
            pool,
            entries: slots.finish()?,
        })
    }

    #[inline]
    pub fn pool(&self) -> DofPool {
        self.pool
    }

    /// Whether rows carry a label column (merged sp pool only).
    #[inline]
    pub fn has_labels(&self) -> bool {
        self.pool == DofPool::Sp
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn entry(&self, gid: usize) -> &DofEntry {
        &self.entries[gid]
    }

    #[inline]
    pub fn entries(&self) -> &[DofEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (usize, &DofEntry)> {
        self.entries.iter().enumerate()
    }
}
