//! Polar coordinate pair.

use std::fmt;

/// A grid point location `(theta [rad], r [km])`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct PolarPoint {
    /// Angle in radians
    pub theta: f64,
    /// Radius in km
    pub r: f64,
}

impl PolarPoint {
    #[inline]
    pub const fn new(theta: f64, r: f64) -> Self {
        Self { theta, r }
    }

    /// Shift by `(d_theta, d_r)`.
    #[inline]
    pub fn offset(self, d_theta: f64, d_r: f64) -> Self {
        Self::new(self.theta + d_theta, self.r + d_r)
    }
}

impl fmt::Display for PolarPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(θ={:.6}, r={:.3})", self.theta, self.r)
    }
}
