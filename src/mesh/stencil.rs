//! Per-cell stencil computation shared by both grouping modes.
//!
//! For cell `k = j·nθ + i`:
//!
//! - vp: `[west stp, north srp, east stp, south srp]` plus one coefficient per
//!   slot, taken from the cell's [`CellBoundary`].
//! - srp (if present): `[vp of k + nθ, vp of k]` (north, south).
//! - stp (if present): `[vp of k, vp of k + 1]` (west, east).
//!
//! Each cell only reads fixed-offset neighbours, so cells are independent
//! and can be processed in any order.

use std::fmt;

use super::boundary::{CellBoundary, NeighborCell};
use super::dof::DofKind;
use super::error::MeshError;
use super::factory::CellGrid;
use crate::types::{CellIndex, StencilSides};

/// 4-slot stencil of one vp DOF.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VpStencil {
    pub gid: usize,
    /// stp / srp global IDs
    pub neighbors: StencilSides<usize>,
    /// Multipliers, each exactly 0.0, 1.0 or -1.0
    pub coeffs: StencilSides<f64>,
}

impl fmt::Display for VpStencil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vp {} -> [{}] x [{}]",
            self.gid, self.neighbors, self.coeffs
        )
    }
}

/// 2-slot stencil of one stress DOF (neighbours are vp IDs).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StressStencil {
    pub kind: DofKind,
    pub gid: usize,
    pub neighbors: [usize; 2],
}

impl fmt::Display for StressStencil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} -> [{} {}]",
            self.kind, self.gid, self.neighbors[0], self.neighbors[1]
        )
    }
}

/// All stencils rooted in one cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CellStencils {
    pub cell: CellIndex,
    pub boundary: CellBoundary,
    pub vp: VpStencil,
    pub srp: Option<StressStencil>,
    pub stp: Option<StressStencil>,
}

/// Global ID of the `kind` DOF in the cell `offset` away from `k`.
fn gid_at(
    grid: &CellGrid,
    k: CellIndex,
    offset: NeighborCell,
    kind: DofKind,
) -> Result<usize, MeshError> {
    let target = offset.resolve(k.get(), grid.resolution()).ok_or_else(|| {
        MeshError::invariant(format!("{:?} neighbour of {} is off the grid", offset, k))
    })?;
    let cell = grid.cell(CellIndex::new(target));
    cell.gid(kind).ok_or_else(|| {
        MeshError::invariant(format!(
            "cell {} has no numbered {} (needed by cell {})",
            target, kind, k
        ))
    })
}

/// Compute the stencils of cell `k`.
pub fn cell_stencils(grid: &CellGrid, k: CellIndex) -> Result<CellStencils, MeshError> {
    let cell = grid.cell(k);
    let (i, j) = cell.ij();
    let boundary = CellBoundary::classify(i, j, grid.resolution());
    let taps = boundary.vp_taps();

    let vp_gid = gid_at(grid, k, NeighborCell::Current, DofKind::Vp)?;
    let neighbors = StencilSides::new(
        gid_at(grid, k, taps.west.cell, DofKind::Stp)?,
        gid_at(grid, k, taps.north.cell, DofKind::Srp)?,
        gid_at(grid, k, taps.east.cell, DofKind::Stp)?,
        gid_at(grid, k, taps.south.cell, DofKind::Srp)?,
    );
    let vp = VpStencil {
        gid: vp_gid,
        neighbors,
        coeffs: taps.map(|t| t.coeff),
    };

    let srp = match cell.gid(DofKind::Srp) {
        Some(gid) => Some(StressStencil {
            kind: DofKind::Srp,
            gid,
            neighbors: [gid_at(grid, k, NeighborCell::Above, DofKind::Vp)?, vp_gid],
        }),
        None => None,
    };

    let stp = match cell.gid(DofKind::Stp) {
        Some(gid) => Some(StressStencil {
            kind: DofKind::Stp,
            gid,
            neighbors: [vp_gid, gid_at(grid, k, NeighborCell::Next, DofKind::Vp)?],
        }),
        None => None,
    };

    Ok(CellStencils {
        cell: k,
        boundary,
        vp,
        srp,
        stp,
    })
}

/// Stencils of every cell, in cell order.
pub fn all_cell_stencils(grid: &CellGrid) -> Result<Vec<CellStencils>, MeshError> {
    CellIndex::iter(grid.len())
        .map(|k| cell_stencils(grid, k))
        .collect()
}

/// Parallel version of [`all_cell_stencils`] using Rayon.
///
/// The indexed collect keeps cell order, so the result is identical to the
/// serial path.
#[cfg(feature = "parallel")]
pub fn all_cell_stencils_parallel(grid: &CellGrid) -> Result<Vec<CellStencils>, MeshError> {
    use rayon::prelude::*;

    (0..grid.len())
        .into_par_iter()
        .map(|k| cell_stencils(grid, CellIndex::new(k)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::dof::VarGrouping;
    use crate::mesh::factory::CellFactory;
    use crate::mesh::geometry::GridGeometry;
    use crate::types::{AnnulusBounds, PolarResolution};

    fn grid(n_theta: usize, n_r: usize, grouping: VarGrouping) -> CellGrid {
        let geometry = GridGeometry::new(
            AnnulusBounds::new(0.0, 180.0, 3480.0, 6371.0),
            PolarResolution::new(n_theta, n_r),
        )
        .unwrap();
        CellFactory::new(geometry, grouping).build()
    }

    fn stp_of(g: &CellGrid, i: usize, j: usize) -> usize {
        g.cell_at(i, j).gid(DofKind::Stp).unwrap()
    }

    fn srp_of(g: &CellGrid, i: usize, j: usize) -> usize {
        g.cell_at(i, j).gid(DofKind::Srp).unwrap()
    }

    fn vp_of(g: &CellGrid, i: usize, j: usize) -> usize {
        g.cell_at(i, j).gid(DofKind::Vp).unwrap()
    }

    #[test]
    fn test_interior_vp_stencil() {
        let g = grid(4, 3, VarGrouping::TwoGroups);
        let s = cell_stencils(&g, CellIndex::new(6)).unwrap();
        assert_eq!(s.vp.gid, 6);
        assert_eq!(s.vp.neighbors.west, stp_of(&g, 1, 1));
        assert_eq!(s.vp.neighbors.north, srp_of(&g, 2, 1));
        assert_eq!(s.vp.neighbors.east, stp_of(&g, 2, 1));
        assert_eq!(s.vp.neighbors.south, srp_of(&g, 2, 0));
        assert_eq!(s.vp.coeffs.to_array(), [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_corner_vp_stencil() {
        let g = grid(4, 3, VarGrouping::TwoGroups);
        let s = cell_stencils(&g, CellIndex::new(0)).unwrap();
        assert_eq!(s.vp.neighbors.west, stp_of(&g, 0, 0));
        assert_eq!(s.vp.neighbors.east, stp_of(&g, 0, 0));
        assert_eq!(s.vp.neighbors.north, srp_of(&g, 0, 0));
        assert_eq!(s.vp.neighbors.south, srp_of(&g, 0, 0));
        assert_eq!(s.vp.coeffs.to_array(), [0.0; 4]);
    }

    #[test]
    fn test_right_axis_uses_west_stp() {
        let g = grid(4, 3, VarGrouping::TwoGroups);
        let s = cell_stencils(&g, CellIndex::new(g.resolution().cell_index(3, 1))).unwrap();
        assert_eq!(s.vp.neighbors.west, stp_of(&g, 2, 1));
        assert_eq!(s.vp.neighbors.east, stp_of(&g, 2, 1));
        assert_eq!(s.vp.coeffs.to_array(), [0.0; 4]);
    }

    #[test]
    fn test_outer_surface_mirror() {
        let g = grid(4, 3, VarGrouping::TwoGroups);
        let s = cell_stencils(&g, CellIndex::new(g.resolution().cell_index(2, 2))).unwrap();
        assert_eq!(s.vp.neighbors.north, srp_of(&g, 2, 1));
        assert_eq!(s.vp.neighbors.south, srp_of(&g, 2, 1));
        assert_eq!(s.vp.coeffs.north, -1.0);
        assert_eq!(s.vp.coeffs.south, 1.0);
        assert!(s.srp.is_none());
    }

    #[test]
    fn test_inner_boundary_mirror() {
        let g = grid(4, 3, VarGrouping::TwoGroups);
        let s = cell_stencils(&g, CellIndex::new(1)).unwrap();
        assert_eq!(s.vp.neighbors.south, srp_of(&g, 1, 0));
        assert_eq!(s.vp.neighbors.north, srp_of(&g, 1, 0));
        assert_eq!(s.vp.coeffs.south, -1.0);
        assert_eq!(s.vp.coeffs.north, 1.0);
    }

    #[test]
    fn test_stress_stencils() {
        let g = grid(4, 3, VarGrouping::ThreeGroups);
        let s = cell_stencils(&g, CellIndex::new(5)).unwrap();
        let srp = s.srp.unwrap();
        assert_eq!(srp.gid, srp_of(&g, 1, 1));
        assert_eq!(srp.neighbors, [vp_of(&g, 1, 2), vp_of(&g, 1, 1)]);
        let stp = s.stp.unwrap();
        assert_eq!(stp.gid, stp_of(&g, 1, 1));
        assert_eq!(stp.neighbors, [vp_of(&g, 1, 1), vp_of(&g, 2, 1)]);
    }

    #[test]
    fn test_last_column_has_no_stp_stencil() {
        let g = grid(4, 3, VarGrouping::ThreeGroups);
        let s = cell_stencils(&g, CellIndex::new(3)).unwrap();
        assert!(s.stp.is_none());
        assert!(s.srp.is_some());
    }

    #[test]
    fn test_all_cell_stencils_order() {
        let g = grid(5, 4, VarGrouping::TwoGroups);
        let all = all_cell_stencils(&g).unwrap();
        assert_eq!(all.len(), 20);
        for (k, s) in all.iter().enumerate() {
            assert_eq!(s.cell.get(), k);
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_serial() {
        let g = grid(9, 7, VarGrouping::TwoGroups);
        assert_eq!(
            all_cell_stencils(&g).unwrap(),
            all_cell_stencils_parallel(&g).unwrap()
        );
    }
}
