//! Staggered polar grid and its DOF stencil graphs.
//!
//! Generation runs in a fixed pipeline:
//! - [`GridGeometry`]: validated bounds and spacing
//! - [`CellFactory`]: cells in angle-fastest order with global DOF IDs
//! - [`StencilGraphBuilder`]: per-DOF adjacency with boundary coefficients
//! - [`PolarMesh`]: the above plus per-pool coordinate tables

mod boundary;
mod builder;
mod cell;
mod dof;
mod dof_table;
mod error;
mod factory;
mod geometry;
mod graph;
mod polar_mesh;
mod sparse;
pub mod stencil;

pub use boundary::{BoundaryCondition, CellBoundary, NeighborCell, StencilTap};
pub use builder::{
    StencilGraphBuilder, ThreeGroupBuilder, ThreeGroupGraphs, TwoGroupBuilder, TwoGroupGraphs,
};
pub use cell::{Cell, LocalDof};
pub use dof::{DofCounters, DofKind, DofPool, VarGrouping};
pub use dof_table::{DofEntry, DofTable};
pub use error::MeshError;
pub use factory::{CellFactory, CellGrid};
pub use geometry::GridGeometry;
pub use graph::{CoeffTable, StencilGraph};
pub use polar_mesh::{MeshGraphs, PolarMesh};
pub use sparse::AdjacencyMatrix;
pub use stencil::{CellStencils, StressStencil, VpStencil, cell_stencils};
