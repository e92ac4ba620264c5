//! # shaw-mesh
//!
//! Mesh and DOF-graph generator for staggered finite-difference grids on a
//! 2D polar annulus (a planetary cross-section between the core-mantle
//! boundary and the surface).
//!
//! The crate produces the discretization topology consumed by an external
//! wave-propagation solver:
//! - Grid geometry (spacing from bounds and resolution)
//! - Cells with velocity (vp) and stress (srp, stp) points
//! - Global DOF numbering in two-group (vp, sp) or three-group (vp, srp, stp) mode
//! - Stencil graphs with boundary and symmetry-axis coefficients
//! - Text files describing the mesh, plus readers for them
//!
//! # Example
//!
//! ```
//! use shaw_mesh::{MeshConfig, PolarMesh};
//! use shaw_mesh::mesh::DofPool;
//!
//! let mesh = PolarMesh::generate(&MeshConfig::default().with_resolution(4, 3)).unwrap();
//! assert_eq!(mesh.pool_size(DofPool::Vp), 12);
//! ```

pub mod config;
pub mod io;
pub mod mesh;
pub mod types;

// Re-export main types for convenience
pub use config::{MeshConfig, SamplingMode};
pub use io::{MeshInfo, MeshIoError, mesh_directory, write_mesh_files};
pub use mesh::{
    GridGeometry, MeshError, MeshGraphs, PolarMesh, StencilGraphBuilder, ThreeGroupBuilder,
    TwoGroupBuilder, VarGrouping,
};
pub use types::{AnnulusBounds, CellIndex, PolarPoint, PolarResolution, StencilSides};
