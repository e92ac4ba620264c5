//! One-shot generation of the full mesh: geometry, cells, numbering, graphs.

use log::{info, warn};

use super::builder::{
    StencilGraphBuilder, ThreeGroupBuilder, ThreeGroupGraphs, TwoGroupBuilder, TwoGroupGraphs,
};
use super::dof::{DofPool, VarGrouping};
use super::dof_table::DofTable;
use super::error::MeshError;
use super::factory::{CellFactory, CellGrid};
use super::geometry::GridGeometry;
use super::sparse::AdjacencyMatrix;
use crate::config::MeshConfig;
use crate::types::PolarResolution;

/// Stencil graphs of either grouping mode.
#[derive(Clone, Debug, PartialEq)]
pub enum MeshGraphs {
    TwoGroups(TwoGroupGraphs),
    ThreeGroups(ThreeGroupGraphs),
}

impl MeshGraphs {
    pub fn grouping(&self) -> VarGrouping {
        match self {
            MeshGraphs::TwoGroups(_) => VarGrouping::TwoGroups,
            MeshGraphs::ThreeGroups(_) => VarGrouping::ThreeGroups,
        }
    }

    pub fn as_two_groups(&self) -> Option<&TwoGroupGraphs> {
        match self {
            MeshGraphs::TwoGroups(g) => Some(g),
            MeshGraphs::ThreeGroups(_) => None,
        }
    }

    pub fn as_three_groups(&self) -> Option<&ThreeGroupGraphs> {
        match self {
            MeshGraphs::ThreeGroups(g) => Some(g),
            MeshGraphs::TwoGroups(_) => None,
        }
    }

    /// Sparse adjacency view of every graph, named after its output file.
    pub fn adjacency(&self) -> Result<Vec<(&'static str, AdjacencyMatrix)>, MeshError> {
        match self {
            MeshGraphs::TwoGroups(g) => Ok(vec![
                ("vp", AdjacencyMatrix::from_graph(&g.vp, g.sp.len())?),
                ("sp", AdjacencyMatrix::from_graph(&g.sp, g.vp.len())?),
            ]),
            MeshGraphs::ThreeGroups(g) => {
                let (vp, srp, stp) = (g.vp_srp.len(), g.srp.len(), g.stp.len());
                Ok(vec![
                    ("vpsrp", AdjacencyMatrix::from_graph(&g.vp_srp, srp)?),
                    ("vpstp", AdjacencyMatrix::from_graph(&g.vp_stp, stp)?),
                    ("srp", AdjacencyMatrix::from_graph(&g.srp, vp)?),
                    ("stp", AdjacencyMatrix::from_graph(&g.stp, vp)?),
                ])
            }
        }
    }
}

/// A generated mesh, ready to be written out.
///
/// # Example
///
/// ```
/// use shaw_mesh::config::MeshConfig;
/// use shaw_mesh::mesh::{DofPool, PolarMesh};
///
/// let mesh = PolarMesh::generate(&MeshConfig::default().with_resolution(4, 3)).unwrap();
/// assert_eq!(mesh.pool_size(DofPool::Vp), 12);
/// assert_eq!(mesh.pool_size(DofPool::Sp), 17);
/// ```
#[derive(Clone, Debug)]
pub struct PolarMesh {
    config: MeshConfig,
    grid: CellGrid,
    tables: Vec<DofTable>,
    graphs: MeshGraphs,
}

impl PolarMesh {
    /// Generate the mesh described by `config`.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidDomain`] for bad bounds or resolution
    /// - [`MeshError::Unsupported`] for random sampling
    /// - [`MeshError::InvariantViolation`] if graph construction is inconsistent
    pub fn generate(config: &MeshConfig) -> Result<Self, MeshError> {
        let geometry = config.geometry()?;
        log_geometry(&geometry);

        let grid = CellFactory::new(geometry, config.grouping).build();

        let tables = config
            .grouping
            .pools()
            .iter()
            .map(|&pool| DofTable::from_grid(&grid, pool))
            .collect::<Result<Vec<_>, _>>()?;

        let graphs = match config.grouping {
            VarGrouping::TwoGroups => MeshGraphs::TwoGroups(TwoGroupBuilder.build(&grid)?),
            VarGrouping::ThreeGroups => MeshGraphs::ThreeGroups(ThreeGroupBuilder.build(&grid)?),
        };

        info!(
            "Generated {} mesh: {}",
            config.grouping,
            tables
                .iter()
                .map(|t| format!("{} {}", t.len(), t.pool()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(Self {
            config: *config,
            grid,
            tables,
            graphs,
        })
    }

    #[inline]
    pub fn config(&self) -> &MeshConfig {
        &self.config
    }

    #[inline]
    pub fn geometry(&self) -> &GridGeometry {
        self.grid.geometry()
    }

    #[inline]
    pub fn resolution(&self) -> PolarResolution {
        self.grid.resolution()
    }

    #[inline]
    pub fn grouping(&self) -> VarGrouping {
        self.grid.grouping()
    }

    #[inline]
    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    #[inline]
    pub fn graphs(&self) -> &MeshGraphs {
        &self.graphs
    }

    /// DOF tables in pool order (`vp, sp` or `vp, srp, stp`).
    #[inline]
    pub fn dof_tables(&self) -> &[DofTable] {
        &self.tables
    }

    /// Table of `pool`, or `None` if the grouping does not use it.
    pub fn dof_table(&self, pool: DofPool) -> Option<&DofTable> {
        self.tables.iter().find(|t| t.pool() == pool)
    }

    #[inline]
    pub fn pool_size(&self, pool: DofPool) -> usize {
        self.grid.pool_size(pool)
    }
}

fn log_geometry(geometry: &GridGeometry) {
    let bounds = geometry.bounds();
    let res = geometry.resolution();

    info!("Mesh domain: {}, resolution {}", bounds, res);
    info!(
        "Spacing: dth = {:.6} rad ({:.4} deg), dr = {:.4} km",
        geometry.d_theta(),
        geometry.d_theta().to_degrees(),
        geometry.d_r()
    );
    info!(
        "Arc length per angular step: {:.4} km at the CMB, {:.4} km at the surface",
        geometry.min_arc(),
        geometry.max_arc()
    );

    if res.n_theta() < 3 {
        warn!(
            "n_theta = {}: every cell lies on a symmetry axis, all vp coefficients are zero",
            res.n_theta()
        );
    }
    if res.n_r() < 3 {
        warn!("n_r = {}: the grid has no interior radial row", res.n_r());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SamplingMode;

    #[test]
    fn test_generate_two_groups() {
        let mesh = PolarMesh::generate(&MeshConfig::default().with_resolution(4, 3)).unwrap();
        assert_eq!(mesh.grouping(), VarGrouping::TwoGroups);
        assert_eq!(mesh.dof_tables().len(), 2);
        let graphs = mesh.graphs().as_two_groups().unwrap();
        assert_eq!(graphs.vp.len(), 12);
        assert_eq!(graphs.sp.len(), 17);
        assert!(mesh.dof_table(DofPool::Srp).is_none());
    }

    #[test]
    fn test_generate_three_groups() {
        let config = MeshConfig::default()
            .with_resolution(4, 3)
            .with_grouping(VarGrouping::ThreeGroups);
        let mesh = PolarMesh::generate(&config).unwrap();
        assert_eq!(mesh.dof_tables().len(), 3);
        assert!(mesh.graphs().as_two_groups().is_none());
        let graphs = mesh.graphs().as_three_groups().unwrap();
        assert_eq!(graphs.srp.len(), 8);
        assert_eq!(graphs.stp.len(), 9);
        assert_eq!(mesh.dof_table(DofPool::Stp).unwrap().len(), 9);
    }

    #[test]
    fn test_generate_rejects_bad_input() {
        let err = PolarMesh::generate(&MeshConfig::default().with_resolution(1, 3)).unwrap_err();
        assert!(matches!(err, MeshError::InvalidDomain(_)));

        let config = MeshConfig::default().with_sampling(SamplingMode::Random { percent: 50.0 });
        let err = PolarMesh::generate(&config).unwrap_err();
        assert!(matches!(err, MeshError::Unsupported(_)));
    }

    #[test]
    fn test_adjacency_views() {
        let mesh = PolarMesh::generate(&MeshConfig::default().with_resolution(5, 4)).unwrap();
        let views = mesh.graphs().adjacency().unwrap();
        let names: Vec<_> = views.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["vp", "sp"]);
        let (_, vp) = &views[0];
        assert_eq!(vp.nrows(), 20);
        assert_eq!(vp.ncols(), mesh.pool_size(DofPool::Sp));
        // interior vp touches four distinct stress points
        assert_eq!(vp.row(6).len(), 4);
        // axis vp has west == east
        assert_eq!(vp.row(5).len(), 3);
        // corner vp also mirrors north onto south
        assert_eq!(vp.row(0).len(), 2);
    }
}
