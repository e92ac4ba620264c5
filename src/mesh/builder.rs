//! Stencil graph builders for the two grouping modes.
//!
//! Both builders share the per-cell computation in
//! [`cell_stencils`](super::stencil::cell_stencils) and only differ in how the
//! results are scattered into output graphs:
//!
//! - [`TwoGroupBuilder`]: one 4-slot vp graph and one merged sp graph.
//! - [`ThreeGroupBuilder`]: the vp stencil split into a radial (srp) half and an
//!   angular (stp) half, plus separate srp and stp graphs.

use log::{Level, debug, log_enabled};

use super::dof::{DofPool, VarGrouping};
use super::error::MeshError;
use super::factory::CellGrid;
use super::graph::{CoeffTable, DenseSlots, StencilGraph};
use super::stencil::{self, CellStencils};

/// Graphs of the two-group (vp, sp) mode.
#[derive(Clone, Debug, PartialEq)]
pub struct TwoGroupGraphs {
    /// `[W, N, E, S]` sp neighbours of each vp
    pub vp: StencilGraph<4>,
    pub vp_coeffs: CoeffTable<4>,
    /// `[n1, n2]` vp neighbours of each sp (srp: north/south, stp: west/east)
    pub sp: StencilGraph<2>,
}

/// Graphs of the three-group (vp, srp, stp) mode.
#[derive(Clone, Debug, PartialEq)]
pub struct ThreeGroupGraphs {
    /// `[N, S]` srp neighbours of each vp
    pub vp_srp: StencilGraph<2>,
    /// `[W, E]` stp neighbours of each vp
    pub vp_stp: StencilGraph<2>,
    pub vp_srp_coeffs: CoeffTable<2>,
    pub vp_stp_coeffs: CoeffTable<2>,
    pub srp: StencilGraph<2>,
    pub stp: StencilGraph<2>,
}

/// Builds the stencil graphs of a numbered [`CellGrid`].
pub trait StencilGraphBuilder {
    type Graphs;

    /// Grouping mode this builder expects the grid to be numbered with.
    fn grouping(&self) -> VarGrouping;

    fn build(&self, grid: &CellGrid) -> Result<Self::Graphs, MeshError>;
}

/// Builder for [`VarGrouping::TwoGroups`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoGroupBuilder;

/// Builder for [`VarGrouping::ThreeGroups`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreeGroupBuilder;

fn check_grouping(expected: VarGrouping, grid: &CellGrid) -> Result<(), MeshError> {
    if grid.grouping() != expected {
        return Err(MeshError::unsupported(format!(
            "{} builder cannot run on a grid numbered as {}",
            expected,
            grid.grouping()
        )));
    }
    Ok(())
}

/// Per-cell stencils, in parallel when the `parallel` feature is enabled.
fn collect_stencils(grid: &CellGrid) -> Result<Vec<CellStencils>, MeshError> {
    #[cfg(feature = "parallel")]
    {
        stencil::all_cell_stencils_parallel(grid)
    }
    #[cfg(not(feature = "parallel"))]
    {
        stencil::all_cell_stencils(grid)
    }
}

impl StencilGraphBuilder for TwoGroupBuilder {
    type Graphs = TwoGroupGraphs;

    fn grouping(&self) -> VarGrouping {
        VarGrouping::TwoGroups
    }

    fn build(&self, grid: &CellGrid) -> Result<TwoGroupGraphs, MeshError> {
        check_grouping(self.grouping(), grid)?;
        let stencils = collect_stencils(grid)?;

        let n_vp = grid.pool_size(DofPool::Vp);
        let mut vp = DenseSlots::new("vp graph", n_vp);
        let mut vp_coeffs = DenseSlots::new("vp coefficients", n_vp);
        let mut sp = DenseSlots::new("sp graph", grid.pool_size(DofPool::Sp));

        for s in &stencils {
            vp.set(s.vp.gid, s.vp.neighbors.to_array())?;
            vp_coeffs.set(s.vp.gid, s.vp.coeffs.to_array())?;
            for stress in s.srp.iter().chain(s.stp.iter()) {
                sp.set(stress.gid, stress.neighbors)?;
            }
        }

        let graphs = TwoGroupGraphs {
            vp: StencilGraph::from_rows(DofPool::Vp, vp.finish()?),
            vp_coeffs: CoeffTable::from_rows(vp_coeffs.finish()?),
            sp: StencilGraph::from_rows(DofPool::Sp, sp.finish()?),
        };

        if log_enabled!(Level::Debug) {
            for (gid, row) in graphs.vp.iter() {
                let coeffs = graphs.vp_coeffs.coeffs(gid);
                debug!("vp {} -> {:?} x {:?}", gid, row, coeffs);
            }
            for (gid, row) in graphs.sp.iter() {
                debug!("sp {} -> {:?}", gid, row);
            }
        }

        Ok(graphs)
    }
}

impl StencilGraphBuilder for ThreeGroupBuilder {
    type Graphs = ThreeGroupGraphs;

    fn grouping(&self) -> VarGrouping {
        VarGrouping::ThreeGroups
    }

    fn build(&self, grid: &CellGrid) -> Result<ThreeGroupGraphs, MeshError> {
        check_grouping(self.grouping(), grid)?;
        let stencils = collect_stencils(grid)?;

        let n_vp = grid.pool_size(DofPool::Vp);
        let mut vp_srp = DenseSlots::new("vp-srp graph", n_vp);
        let mut vp_stp = DenseSlots::new("vp-stp graph", n_vp);
        let mut vp_srp_coeffs = DenseSlots::new("vp-srp coefficients", n_vp);
        let mut vp_stp_coeffs = DenseSlots::new("vp-stp coefficients", n_vp);
        let mut srp = DenseSlots::new("srp graph", grid.pool_size(DofPool::Srp));
        let mut stp = DenseSlots::new("stp graph", grid.pool_size(DofPool::Stp));

        for s in &stencils {
            let gid = s.vp.gid;
            vp_srp.set(gid, s.vp.neighbors.radial())?;
            vp_stp.set(gid, s.vp.neighbors.angular())?;
            vp_srp_coeffs.set(gid, s.vp.coeffs.radial())?;
            vp_stp_coeffs.set(gid, s.vp.coeffs.angular())?;
            if let Some(st) = s.srp {
                srp.set(st.gid, st.neighbors)?;
            }
            if let Some(st) = s.stp {
                stp.set(st.gid, st.neighbors)?;
            }
        }

        let graphs = ThreeGroupGraphs {
            vp_srp: StencilGraph::from_rows(DofPool::Vp, vp_srp.finish()?),
            vp_stp: StencilGraph::from_rows(DofPool::Vp, vp_stp.finish()?),
            vp_srp_coeffs: CoeffTable::from_rows(vp_srp_coeffs.finish()?),
            vp_stp_coeffs: CoeffTable::from_rows(vp_stp_coeffs.finish()?),
            srp: StencilGraph::from_rows(DofPool::Srp, srp.finish()?),
            stp: StencilGraph::from_rows(DofPool::Stp, stp.finish()?),
        };

        if graphs.vp_srp.len() != graphs.vp_stp.len() {
            return Err(MeshError::invariant(format!(
                "vp-srp graph has {} rows but vp-stp graph has {}",
                graphs.vp_srp.len(),
                graphs.vp_stp.len()
            )));
        }

        if log_enabled!(Level::Debug) {
            for (gid, row) in graphs.vp_srp.iter() {
                debug!(
                    "vp {} -> srp {:?} x {:?}, stp {:?} x {:?}",
                    gid,
                    row,
                    graphs.vp_srp_coeffs.coeffs(gid),
                    graphs.vp_stp.neighbors(gid),
                    graphs.vp_stp_coeffs.coeffs(gid)
                );
            }
            for (gid, row) in graphs.srp.iter() {
                debug!("srp {} -> {:?}", gid, row);
            }
            for (gid, row) in graphs.stp.iter() {
                debug!("stp {} -> {:?}", gid, row);
            }
        }

        Ok(graphs)
    }
}
