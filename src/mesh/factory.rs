//! Construction and global numbering of all cells.
//!
//! Cells are visited with the angle index varying fastest:
//!
//! ```text
//! j=2:  8  9 10 11
//! j=1:  4  5  6  7
//! j=0:  0  1  2  3
//!      i=0 1  2  3
//! ```
//!
//! DOF global IDs are handed out in the same traversal, so each ID is a pure
//! function of `(i, j)`, the DOF kind and the grouping mode.

use log::debug;

use super::cell::Cell;
use super::dof::{DofCounters, DofPool, VarGrouping};
use super::geometry::GridGeometry;
use crate::types::{CellIndex, PolarResolution};

/// All cells of the grid in traversal order, with their DOFs numbered.
#[derive(Clone, Debug)]
pub struct CellGrid {
    geometry: GridGeometry,
    grouping: VarGrouping,
    cells: Vec<Cell>,
    counters: DofCounters,
}

impl CellGrid {
    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    #[inline]
    pub fn resolution(&self) -> PolarResolution {
        self.geometry.resolution()
    }

    /// Grouping mode the DOFs were numbered with.
    #[inline]
    pub fn grouping(&self) -> VarGrouping {
        self.grouping
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cell(&self, index: CellIndex) -> &Cell {
        &self.cells[index]
    }

    /// Cell at structural position `(i, j)`.
    #[inline]
    pub fn cell_at(&self, i: usize, j: usize) -> &Cell {
        &self.cells[self.resolution().cell_index(i, j)]
    }

    /// Dense size of a numbering pool (0 for pools unused by the grouping).
    #[inline]
    pub fn pool_size(&self, pool: DofPool) -> usize {
        self.counters.count(pool)
    }
}

/// Builds a [`CellGrid`] for a validated geometry.
///
/// # Example
///
/// ```
/// use shaw_mesh::mesh::{CellFactory, DofPool, GridGeometry, VarGrouping};
/// use shaw_mesh::types::{AnnulusBounds, PolarResolution};
///
/// let geometry = GridGeometry::new(
///     AnnulusBounds::new(0.0, 180.0, 3480.0, 6371.0),
///     PolarResolution::new(4, 3),
/// )
/// .unwrap();
/// let grid = CellFactory::new(geometry, VarGrouping::TwoGroups).build();
///
/// assert_eq!(grid.len(), 12);
/// assert_eq!(grid.pool_size(DofPool::Vp), 12);
/// assert_eq!(grid.pool_size(DofPool::Sp), 17);
/// ```
#[derive(Clone, Debug)]
pub struct CellFactory {
    geometry: GridGeometry,
    grouping: VarGrouping,
}

impl CellFactory {
    pub fn new(geometry: GridGeometry, grouping: VarGrouping) -> Self {
        Self { geometry, grouping }
    }

    /// Create every cell and number its DOFs.
    pub fn build(&self) -> CellGrid {
        let res = self.geometry.resolution();
        let (n_theta, n_r) = res.as_tuple();
        let d_theta = self.geometry.d_theta();
        let d_r = self.geometry.d_r();

        let mut cells = Vec::with_capacity(res.total_cells());
        let mut counters = DofCounters::new();

        for j in 0..n_r {
            for i in 0..n_theta {
                let index = CellIndex::new(cells.len());
                let origin = self.geometry.cell_origin(i, j);
                let mut cell = Cell::new(index, (i, j), res, origin, d_theta, d_r);
                cell.assign_gids(self.grouping, &mut counters);
                cells.push(cell);
            }
        }

        debug!(
            "built {} cells ({}), pools: {}",
            cells.len(),
            self.grouping,
            self.grouping
                .pools()
                .iter()
                .map(|p| format!("{}={}", p, counters.count(*p)))
                .collect::<Vec<_>>()
                .join(" ")
        );

        CellGrid {
            geometry: self.geometry,
            grouping: self.grouping,
            cells,
            counters,
        }
    }
}
