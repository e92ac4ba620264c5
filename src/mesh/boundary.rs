//! Boundary classification and per-direction stencil taps.
//!
//! Every vp stores a fixed-width 4-slot stencil, even on the boundary. Slots
//! whose neighbour would fall outside the grid are filled with a stand-in DOF
//! and a coefficient that gives the right boundary behaviour:
//!
//! | condition       | slot  | stand-in               | coeff |
//! |-----------------|-------|------------------------|-------|
//! | `LeftAxis`      | west  | stp of the same cell   |  0    |
//! | `RightAxis`     | east  | stp of the cell west   |  0    |
//! | `OuterSurface`  | north | srp of the cell below  | -1    |
//! | `InnerBoundary` | south | srp of the same cell   | -1    |
//!
//! The -1 mirrors make the stress antisymmetric across the boundary (free
//! surface on the outside, matching condition at the CMB). On the symmetry
//! axes velocity is undefined, so all four coefficients are zeroed there.

use std::fmt;

use crate::types::{PolarResolution, StencilSides};

/// Boundary condition seen by a cell in one direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryCondition {
    /// Both neighbours exist in this direction
    Interior,
    /// First angular column (i = 0)
    LeftAxis,
    /// Last angular column (i = nθ - 1)
    RightAxis,
    /// Top row (j = nr - 1), free surface
    OuterSurface,
    /// Bottom row (j = 0), core-mantle boundary
    InnerBoundary,
}

/// Cell that supplies a stencil neighbour, relative to the current cell `k`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NeighborCell {
    /// `k`
    Current,
    /// `k - 1`, angularly previous
    Previous,
    /// `k + 1`, angularly next
    Next,
    /// `k - nθ`, one row down
    Below,
    /// `k + nθ`, one row up
    Above,
}

impl NeighborCell {
    /// Dense index of the neighbour cell, or `None` if it falls off the grid.
    pub fn resolve(self, k: usize, resolution: PolarResolution) -> Option<usize> {
        let n_theta = resolution.n_theta();
        let idx = match self {
            NeighborCell::Current => Some(k),
            NeighborCell::Previous => k.checked_sub(1),
            NeighborCell::Next => k.checked_add(1),
            NeighborCell::Below => k.checked_sub(n_theta),
            NeighborCell::Above => k.checked_add(n_theta),
        };
        idx.filter(|&idx| idx < resolution.total_cells())
    }
}

/// Where a vp stencil slot takes its DOF from, and with which multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StencilTap {
    pub cell: NeighborCell,
    pub coeff: f64,
}

impl StencilTap {
    const fn new(cell: NeighborCell, coeff: f64) -> Self {
        Self { cell, coeff }
    }
}

impl BoundaryCondition {
    /// Whether this is one of the two symmetry axes.
    pub fn is_symmetry_axis(&self) -> bool {
        matches!(self, BoundaryCondition::LeftAxis | BoundaryCondition::RightAxis)
    }

    /// West stp tap.
    pub fn west_tap(&self) -> StencilTap {
        match self {
            BoundaryCondition::LeftAxis => StencilTap::new(NeighborCell::Current, 0.0),
            _ => StencilTap::new(NeighborCell::Previous, 1.0),
        }
    }

    /// East stp tap.
    pub fn east_tap(&self) -> StencilTap {
        match self {
            BoundaryCondition::RightAxis => StencilTap::new(NeighborCell::Previous, 0.0),
            _ => StencilTap::new(NeighborCell::Current, 1.0),
        }
    }

    /// North srp tap.
    pub fn north_tap(&self) -> StencilTap {
        match self {
            BoundaryCondition::OuterSurface => StencilTap::new(NeighborCell::Below, -1.0),
            _ => StencilTap::new(NeighborCell::Current, 1.0),
        }
    }

    /// South srp tap.
    pub fn south_tap(&self) -> StencilTap {
        match self {
            BoundaryCondition::InnerBoundary => StencilTap::new(NeighborCell::Current, -1.0),
            _ => StencilTap::new(NeighborCell::Below, 1.0),
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BoundaryCondition::Interior => "interior",
            BoundaryCondition::LeftAxis => "left axis",
            BoundaryCondition::RightAxis => "right axis",
            BoundaryCondition::OuterSurface => "outer surface",
            BoundaryCondition::InnerBoundary => "inner boundary",
        };
        f.write_str(s)
    }
}

/// Boundary conditions of one cell, resolved once from `(i, j)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellBoundary {
    /// `Interior`, `LeftAxis` or `RightAxis`
    pub angular: BoundaryCondition,
    /// `Interior`, `InnerBoundary` or `OuterSurface`
    pub radial: BoundaryCondition,
}

impl CellBoundary {
    /// Classify cell `(i, j)`. Requires `n_theta >= 2` and `n_r >= 2`.
    pub fn classify(i: usize, j: usize, resolution: PolarResolution) -> Self {
        let angular = if i == 0 {
            BoundaryCondition::LeftAxis
        } else if i == resolution.n_theta() - 1 {
            BoundaryCondition::RightAxis
        } else {
            BoundaryCondition::Interior
        };

        let radial = if j == 0 {
            BoundaryCondition::InnerBoundary
        } else if j == resolution.n_r() - 1 {
            BoundaryCondition::OuterSurface
        } else {
            BoundaryCondition::Interior
        };

        Self { angular, radial }
    }

    #[inline]
    pub fn is_on_axis(&self) -> bool {
        self.angular.is_symmetry_axis()
    }

    /// The four vp taps in stencil order, with the axis override applied.
    pub fn vp_taps(&self) -> StencilSides<StencilTap> {
        let taps = StencilSides::new(
            self.angular.west_tap(),
            self.radial.north_tap(),
            self.angular.east_tap(),
            self.radial.south_tap(),
        );

        if self.is_on_axis() {
            taps.map(|t| StencilTap::new(t.cell, 0.0))
        } else {
            taps
        }
    }
}
