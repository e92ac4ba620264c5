//! Mesh generation parameters.
//!
//! [`MeshConfig`] defaults to a full Earth mantle cross-section
//! (θ ∈ [0°, 180°], from the core-mantle boundary to the surface) and is
//! adjusted with consuming `with_*` methods:
//!
//! ```
//! use shaw_mesh::config::MeshConfig;
//! use shaw_mesh::mesh::VarGrouping;
//!
//! let config = MeshConfig::default()
//!     .with_resolution(361, 201)
//!     .with_grouping(VarGrouping::ThreeGroups);
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;

use crate::mesh::{GridGeometry, MeshError, VarGrouping};
use crate::types::{AnnulusBounds, PolarResolution};

/// Reference radii of the Earth, in km.
pub mod earth {
    /// Mean radius of the Earth.
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
    /// Thickness of the mantle.
    pub const MANTLE_THICKNESS_KM: f64 = 2891.0;
    /// Radius of the core-mantle boundary.
    pub const CMB_RADIUS_KM: f64 = EARTH_RADIUS_KM - MANTLE_THICKNESS_KM;
}

// =============================================================================
// Sampling
// =============================================================================

/// Which points of the grid the graphs cover.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SamplingMode {
    /// Every grid point.
    #[default]
    Full,
    /// A random subset containing `percent` % of the velocity points.
    ///
    /// Accepted as a selector but not generated.
    Random { percent: f64 },
}

impl SamplingMode {
    /// Check the mode can be generated.
    ///
    /// # Errors
    ///
    /// [`MeshError::InvalidDomain`] for a percentage outside `(0, 100]`,
    /// [`MeshError::Unsupported`] for any valid random mode.
    pub fn validate(&self) -> Result<(), MeshError> {
        match *self {
            SamplingMode::Full => Ok(()),
            SamplingMode::Random { percent } => {
                if !(percent > 0.0 && percent <= 100.0) {
                    return Err(MeshError::invalid_domain(format!(
                        "sampling percentage must be in (0, 100], got {}",
                        percent
                    )));
                }
                Err(MeshError::unsupported(format!(
                    "random sample mesh ({}%) is not generated",
                    percent
                )))
            }
        }
    }
}

impl fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SamplingMode::Full => f.write_str("full"),
            SamplingMode::Random { percent } => write!(f, "random ({}%)", percent),
        }
    }
}

// =============================================================================
// Mesh configuration
// =============================================================================

/// Inputs of one mesh generation run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshConfig {
    /// Angular bounds (degrees) and radii (km).
    pub bounds: AnnulusBounds,
    /// Number of grid points along θ and r.
    pub resolution: PolarResolution,
    /// How stress DOFs are grouped for numbering.
    pub grouping: VarGrouping,
    pub sampling: SamplingMode,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            bounds: AnnulusBounds::new(0.0, 180.0, earth::CMB_RADIUS_KM, earth::EARTH_RADIUS_KM),
            resolution: PolarResolution::new(181, 101),
            grouping: VarGrouping::TwoGroups,
            sampling: SamplingMode::Full,
        }
    }
}

impl MeshConfig {
    /// Set the number of points along θ and r.
    pub fn with_resolution(mut self, n_theta: usize, n_r: usize) -> Self {
        self.resolution = PolarResolution::new(n_theta, n_r);
        self
    }

    /// Set the angular bounds in degrees.
    pub fn with_theta_bounds_deg(mut self, left: f64, right: f64) -> Self {
        self.bounds.theta_left_deg = left;
        self.bounds.theta_right_deg = right;
        self
    }

    /// Set the inner (CMB) and outer (surface) radii in km.
    pub fn with_radii_km(mut self, r_cmb: f64, r_surf: f64) -> Self {
        self.bounds.r_cmb = r_cmb;
        self.bounds.r_surf = r_surf;
        self
    }

    pub fn with_grouping(mut self, grouping: VarGrouping) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    /// Validate the domain and sampling mode, returning the grid geometry.
    pub fn geometry(&self) -> Result<GridGeometry, MeshError> {
        let geometry = GridGeometry::new(self.bounds, self.resolution)?;
        self.sampling.validate()?;
        Ok(geometry)
    }

    /// Check that this configuration can be generated.
    pub fn validate(&self) -> Result<(), MeshError> {
        self.geometry().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_earth_constants() {
        assert_relative_eq!(earth::CMB_RADIUS_KM, 3480.0);
    }

    #[test]
    fn test_default_is_valid() {
        let config = MeshConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grouping, VarGrouping::TwoGroups);
        assert_eq!(config.sampling, SamplingMode::Full);
        assert_relative_eq!(config.bounds.theta_right_deg, 180.0);
    }

    #[test]
    fn test_builder_methods() {
        let config = MeshConfig::default()
            .with_resolution(4, 3)
            .with_theta_bounds_deg(10.0, 90.0)
            .with_radii_km(1000.0, 2000.0)
            .with_grouping(VarGrouping::ThreeGroups);
        assert_eq!(config.resolution, PolarResolution::new(4, 3));
        assert_eq!(
            config.bounds,
            AnnulusBounds::new(10.0, 90.0, 1000.0, 2000.0)
        );
        assert_eq!(config.grouping, VarGrouping::ThreeGroups);
    }

    #[test]
    fn test_invalid_domain() {
        let err = MeshConfig::default()
            .with_radii_km(6371.0, 3480.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, MeshError::InvalidDomain(_)));
        assert!(err.to_string().contains("rCmb"));
    }

    #[test]
    fn test_random_sampling_is_unsupported() {
        let err = MeshConfig::default()
            .with_sampling(SamplingMode::Random { percent: 20.0 })
            .validate()
            .unwrap_err();
        assert!(matches!(err, MeshError::Unsupported(_)));
    }

    #[test]
    fn test_sampling_percent_range() {
        for percent in [0.0, -5.0, 100.5, f64::NAN] {
            let err = SamplingMode::Random { percent }.validate().unwrap_err();
            assert!(matches!(err, MeshError::InvalidDomain(_)), "{}", percent);
        }
    }
}
