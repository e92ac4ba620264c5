//! Grid spacing for the polar annulus.
//!
//! Points are placed at `θL + i·dθ` and `rCmb + j·dr`, with the first and last
//! point of each direction sitting exactly on the domain bounds:
//!
//! ```text
//! dθ = (θR - θL) / (nθ - 1)
//! dr = (rSurf - rCmb) / (nr - 1)
//! ```

use super::error::MeshError;
use crate::types::{AnnulusBounds, PolarPoint, PolarResolution};

/// Validated bounds, resolution and the derived spacing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    bounds: AnnulusBounds,
    resolution: PolarResolution,
    /// Angular spacing (rad)
    d_theta: f64,
    /// Radial spacing (km)
    d_r: f64,
}

impl GridGeometry {
    /// Validate the domain and compute the spacing.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidDomain`] when `θL >= θR`, `rCmb >= rSurf`,
    /// `rCmb <= 0`, a bound is not finite, or either resolution is below 2.
    pub fn new(bounds: AnnulusBounds, resolution: PolarResolution) -> Result<Self, MeshError> {
        validate(&bounds, &resolution)?;

        let d_theta = bounds.angular_extent() / (resolution.n_theta() - 1) as f64;
        let d_r = bounds.thickness() / (resolution.n_r() - 1) as f64;

        Ok(Self {
            bounds,
            resolution,
            d_theta,
            d_r,
        })
    }

    #[inline]
    pub fn bounds(&self) -> &AnnulusBounds {
        &self.bounds
    }

    #[inline]
    pub fn resolution(&self) -> PolarResolution {
        self.resolution
    }

    /// Angular spacing in radians.
    #[inline]
    pub fn d_theta(&self) -> f64 {
        self.d_theta
    }

    /// Radial spacing in km.
    #[inline]
    pub fn d_r(&self) -> f64 {
        self.d_r
    }

    /// Arc length of one angular step on the inner boundary (km).
    #[inline]
    pub fn min_arc(&self) -> f64 {
        self.d_theta * self.bounds.r_cmb
    }

    /// Arc length of one angular step on the outer surface (km).
    #[inline]
    pub fn max_arc(&self) -> f64 {
        self.d_theta * self.bounds.r_surf
    }

    /// Origin of cell `(i, j)`, which is also its vp location.
    #[inline]
    pub fn cell_origin(&self, i: usize, j: usize) -> PolarPoint {
        PolarPoint::new(
            self.bounds.theta_left() + i as f64 * self.d_theta,
            self.bounds.r_cmb + j as f64 * self.d_r,
        )
    }
}

fn validate(bounds: &AnnulusBounds, resolution: &PolarResolution) -> Result<(), MeshError> {
    let values = [
        bounds.theta_left_deg,
        bounds.theta_right_deg,
        bounds.r_cmb,
        bounds.r_surf,
    ];
    if values.iter().any(|v| !v.is_finite()) {
        return Err(MeshError::invalid_domain(format!(
            "domain bounds must be finite, got {}",
            bounds
        )));
    }
    if bounds.theta_left_deg >= bounds.theta_right_deg {
        return Err(MeshError::invalid_domain(format!(
            "thetaLeft ({}) must be < thetaRight ({})",
            bounds.theta_left_deg, bounds.theta_right_deg
        )));
    }
    if bounds.r_cmb <= 0.0 {
        return Err(MeshError::invalid_domain(format!("rCmb ({}) must be > 0", bounds.r_cmb)));
    }
    if bounds.r_cmb >= bounds.r_surf {
        return Err(MeshError::invalid_domain(format!(
            "rCmb ({}) must be < rSurf ({})",
            bounds.r_cmb, bounds.r_surf
        )));
    }
    if resolution.n_theta() < 2 {
        return Err(MeshError::invalid_domain(format!(
            "n_theta must be >= 2, got {}",
            resolution.n_theta()
        )));
    }
    if resolution.n_r() < 2 {
        return Err(MeshError::invalid_domain(format!(
            "n_r must be >= 2, got {}",
            resolution.n_r()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn earth() -> AnnulusBounds {
        AnnulusBounds::new(0.0, 180.0, 3480.0, 6371.0)
    }

    #[test]
    fn test_spacing() {
        let g = GridGeometry::new(earth(), PolarResolution::new(4, 3)).unwrap();
        assert_relative_eq!(g.d_theta(), 60f64.to_radians(), epsilon = 1e-14);
        assert_relative_eq!(g.d_r(), 1445.5);
    }

    #[test]
    fn test_arcs() {
        let g = GridGeometry::new(earth(), PolarResolution::new(181, 10)).unwrap();
        assert_relative_eq!(g.min_arc(), 1f64.to_radians() * 3480.0, epsilon = 1e-9);
        assert_relative_eq!(g.max_arc(), 1f64.to_radians() * 6371.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cell_origin_on_bounds() {
        let g = GridGeometry::new(earth(), PolarResolution::new(4, 3)).unwrap();
        let first = g.cell_origin(0, 0);
        let last = g.cell_origin(3, 2);
        assert_eq!(first, PolarPoint::new(0.0, 3480.0));
        assert_relative_eq!(last.theta, std::f64::consts::PI, epsilon = 1e-14);
        assert_relative_eq!(last.r, 6371.0);
    }

    #[test]
    fn test_inverted_theta() {
        let b = AnnulusBounds::new(90.0, 0.0, 3480.0, 6371.0);
        let err = GridGeometry::new(b, PolarResolution::new(4, 3)).unwrap_err();
        assert!(matches!(err, MeshError::InvalidDomain(_)));
    }

    #[test]
    fn test_equal_theta() {
        let b = AnnulusBounds::new(10.0, 10.0, 3480.0, 6371.0);
        assert!(GridGeometry::new(b, PolarResolution::new(4, 3)).is_err());
    }

    #[test]
    fn test_inverted_radii() {
        let b = AnnulusBounds::new(0.0, 180.0, 6371.0, 3480.0);
        let err = GridGeometry::new(b, PolarResolution::new(4, 3)).unwrap_err();
        assert!(err.to_string().contains("rCmb"));
    }

    #[test]
    fn test_non_positive_cmb() {
        let b = AnnulusBounds::new(0.0, 180.0, 0.0, 6371.0);
        assert!(GridGeometry::new(b, PolarResolution::new(4, 3)).is_err());
        let b = AnnulusBounds::new(0.0, 180.0, -5.0, 6371.0);
        assert!(GridGeometry::new(b, PolarResolution::new(4, 3)).is_err());
    }

    #[test]
    fn test_resolution_too_small() {
        let build = |n_theta, n_r| GridGeometry::new(earth(), PolarResolution::new(n_theta, n_r));
        assert!(build(0, 3).is_err());
        assert!(build(1, 3).is_err());
        assert!(build(4, 1).is_err());
        assert!(build(2, 2).is_ok());
    }

    #[test]
    fn test_non_finite() {
        let b = AnnulusBounds::new(0.0, f64::NAN, 3480.0, 6371.0);
        assert!(GridGeometry::new(b, PolarResolution::new(4, 3)).is_err());
    }
}
