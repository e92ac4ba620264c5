//! Annular domain bounds.

use std::fmt;

/// Bounds of the annular sector `[θL, θR] × [rCmb, rSurf]`.
///
/// Angles are stored in degrees as given by the caller (that is what the
/// metadata file records) and exposed in radians for the geometry. Radii are
/// in kilometers.
///
/// # Example
///
/// ```
/// use shaw_mesh::types::AnnulusBounds;
///
/// let bounds = AnnulusBounds::new(0.0, 180.0, 3480.0, 6371.0);
/// assert_eq!(bounds.thickness(), 2891.0);
/// assert!((bounds.theta_right() - std::f64::consts::PI).abs() < 1e-15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnulusBounds {
    /// Left angular bound (degrees)
    pub theta_left_deg: f64,
    /// Right angular bound (degrees)
    pub theta_right_deg: f64,
    /// Radius of the inner boundary / core-mantle boundary (km)
    pub r_cmb: f64,
    /// Radius of the outer surface (km)
    pub r_surf: f64,
}

impl AnnulusBounds {
    /// Create new bounds. No validation is done here.
    pub const fn new(theta_left_deg: f64, theta_right_deg: f64, r_cmb: f64, r_surf: f64) -> Self {
        Self {
            theta_left_deg,
            theta_right_deg,
            r_cmb,
            r_surf,
        }
    }

    /// Left angular bound in radians.
    #[inline]
    pub fn theta_left(&self) -> f64 {
        self.theta_left_deg.to_radians()
    }

    /// Right angular bound in radians.
    #[inline]
    pub fn theta_right(&self) -> f64 {
        self.theta_right_deg.to_radians()
    }

    /// Angular extent in radians.
    #[inline]
    pub fn angular_extent(&self) -> f64 {
        self.theta_right() - self.theta_left()
    }

    /// Radial extent (rSurf - rCmb) in km.
    #[inline]
    pub fn thickness(&self) -> f64 {
        self.r_surf - self.r_cmb
    }
}

impl fmt::Display for AnnulusBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "θ ∈ [{:.2}°, {:.2}°] × r ∈ [{:.2}, {:.2}] km",
            self.theta_left_deg, self.theta_right_deg, self.r_cmb, self.r_surf
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_bounds_creation() {
        let b = AnnulusBounds::new(0.0, 90.0, 1000.0, 2000.0);
        assert_eq!(b.theta_left_deg, 0.0);
        assert_eq!(b.theta_right_deg, 90.0);
        assert_eq!(b.r_cmb, 1000.0);
        assert_eq!(b.r_surf, 2000.0);
    }

    #[test]
    fn test_extents() {
        let b = AnnulusBounds::new(0.0, 90.0, 1000.0, 2000.0);
        assert_relative_eq!(b.angular_extent(), std::f64::consts::FRAC_PI_2);
        assert_eq!(b.thickness(), 1000.0);
    }
}
