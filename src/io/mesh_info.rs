//! The `mesh_info.dat` metadata file.
//!
//! ```text
//! thL   0.00000000000000000000
//! thR   180.00000000000000000000
//! rCmb  3480.00000000000000000000
//! rSurf 6371.00000000000000000000
//! dth   1.04719755119659763132
//! dr    1445.50000000000000000000
//! numPtsVp 12
//! numPtsSp 17
//! nth 4
//! nr 3
//! ```
//!
//! Angles are in degrees (`dth` in radians), radii in km. The three-group
//! layout replaces `numPtsSp` with `numPtsSrp` and `numPtsStp`.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

use super::MeshIoError;
use crate::mesh::{DofPool, PolarMesh, VarGrouping};
use crate::types::{AnnulusBounds, PolarResolution};

/// Contents of `mesh_info.dat`.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshInfo {
    pub bounds: AnnulusBounds,
    /// Angular spacing (rad)
    pub d_theta: f64,
    /// Radial spacing (km)
    pub d_r: f64,
    pub resolution: PolarResolution,
    pub grouping: VarGrouping,
    /// Point count per pool, in `grouping.pools()` order
    point_counts: Vec<(DofPool, usize)>,
}

impl MeshInfo {
    pub fn from_mesh(mesh: &PolarMesh) -> Self {
        let geometry = mesh.geometry();
        let grouping = mesh.grouping();
        Self {
            bounds: *geometry.bounds(),
            d_theta: geometry.d_theta(),
            d_r: geometry.d_r(),
            resolution: mesh.resolution(),
            grouping,
            point_counts: grouping
                .pools()
                .iter()
                .map(|&p| (p, mesh.pool_size(p)))
                .collect(),
        }
    }

    /// Number of points in `pool`, if the grouping uses it.
    pub fn num_points(&self, pool: DofPool) -> Option<usize> {
        self.point_counts
            .iter()
            .find(|(p, _)| *p == pool)
            .map(|&(_, n)| n)
    }

    #[inline]
    pub fn d_theta_inv(&self) -> f64 {
        1.0 / self.d_theta
    }

    #[inline]
    pub fn d_r_inv(&self) -> f64 {
        1.0 / self.d_r
    }

    #[inline]
    pub fn min_radius_km(&self) -> f64 {
        self.bounds.r_cmb
    }

    #[inline]
    pub fn max_radius_km(&self) -> f64 {
        self.bounds.r_surf
    }

    /// CMB radius in meters, the unit the solver works in.
    #[inline]
    pub fn min_radius_m(&self) -> f64 {
        self.bounds.r_cmb * 1000.0
    }

    #[inline]
    pub fn max_radius_m(&self) -> f64 {
        self.bounds.r_surf * 1000.0
    }

    /// Arc length of one angular step at the CMB (km).
    #[inline]
    pub fn min_arc(&self) -> f64 {
        self.d_theta * self.bounds.r_cmb
    }

    /// Arc length of one angular step at the surface (km).
    #[inline]
    pub fn max_arc(&self) -> f64 {
        self.d_theta * self.bounds.r_surf
    }

    /// Write in the `mesh_info.dat` layout.
    pub fn write<W: Write>(&self, w: &mut W) -> Result<(), MeshIoError> {
        writeln!(w, "thL   {:.20}", self.bounds.theta_left_deg)?;
        writeln!(w, "thR   {:.20}", self.bounds.theta_right_deg)?;
        writeln!(w, "rCmb  {:.20}", self.bounds.r_cmb)?;
        writeln!(w, "rSurf {:.20}", self.bounds.r_surf)?;
        writeln!(w, "dth   {:.20}", self.d_theta)?;
        writeln!(w, "dr    {:.20}", self.d_r)?;
        for &(pool, n) in &self.point_counts {
            writeln!(w, "{} {}", count_key(pool), n)?;
        }
        writeln!(w, "nth {}", self.resolution.n_theta())?;
        writeln!(w, "nr {}", self.resolution.n_r())?;
        Ok(())
    }
}

fn count_key(pool: DofPool) -> &'static str {
    match pool {
        DofPool::Vp => "numPtsVp",
        DofPool::Sp => "numPtsSp",
        DofPool::Srp => "numPtsSrp",
        DofPool::Stp => "numPtsStp",
    }
}

/// Read `mesh_info.dat` from `path`.
pub fn read_mesh_info(path: &Path) -> Result<MeshInfo, MeshIoError> {
    let content = fs::read_to_string(path)?;
    parse_mesh_info(&content)
}

/// Parse `key value` lines. Unknown keys are ignored.
///
/// The grouping is inferred from the count keys: `numPtsSrp` means three
/// groups, otherwise `numPtsSp` is required.
pub fn parse_mesh_info(content: &str) -> Result<MeshInfo, MeshIoError> {
    let mut values: HashMap<&str, (usize, &str)> = HashMap::new();

    for (line_num, line) in content.lines().enumerate() {
        let mut parts = line.split_whitespace();
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        values.insert(key, (line_num + 1, value));
    }

    let float = |key: &str| -> Result<f64, MeshIoError> {
        let &(line, value) = values
            .get(key)
            .ok_or_else(|| MeshIoError::MissingKey(key.to_string()))?;
        value
            .parse::<f64>()
            .map_err(|_| MeshIoError::parse(line, format!("invalid value for {}: {}", key, value)))
    };
    let count = |key: &str| -> Result<usize, MeshIoError> {
        let &(line, value) = values
            .get(key)
            .ok_or_else(|| MeshIoError::MissingKey(key.to_string()))?;
        value
            .parse::<usize>()
            .map_err(|_| MeshIoError::parse(line, format!("invalid value for {}: {}", key, value)))
    };

    let grouping = if values.contains_key(count_key(DofPool::Srp)) {
        VarGrouping::ThreeGroups
    } else {
        VarGrouping::TwoGroups
    };

    let point_counts = grouping
        .pools()
        .iter()
        .map(|&p| count(count_key(p)).map(|n| (p, n)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(MeshInfo {
        bounds: AnnulusBounds::new(
            float("thL")?,
            float("thR")?,
            float("rCmb")?,
            float("rSurf")?,
        ),
        d_theta: float("dth")?,
        d_r: float("dr")?,
        resolution: PolarResolution::new(count("nth")?, count("nr")?),
        grouping,
        point_counts,
    })
}
