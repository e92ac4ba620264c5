//! Stencil slots with named fields.
//!
//! A vp stencil always has four neighbours in the fixed order
//! west, north, east, south. Named fields remove the need to remember
//! which array position is which direction.

use std::fmt;

/// One value per stencil direction.
///
/// The array order used for files and graphs is `[west, north, east, south]`.
///
/// # Example
///
/// ```
/// use shaw_mesh::types::StencilSides;
///
/// let coeffs = StencilSides::new(1.0, -1.0, 1.0, 1.0);
/// assert_eq!(coeffs.north, -1.0);
/// assert_eq!(coeffs.to_array(), [1.0, -1.0, 1.0, 1.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StencilSides<T> {
    /// Neighbour at smaller theta
    pub west: T,
    /// Neighbour at larger radius
    pub north: T,
    /// Neighbour at larger theta
    pub east: T,
    /// Neighbour at smaller radius
    pub south: T,
}

impl<T> StencilSides<T> {
    /// Create with explicit named values, in stencil order.
    pub fn new(west: T, north: T, east: T, south: T) -> Self {
        Self {
            west,
            north,
            east,
            south,
        }
    }

    /// Map a function over all sides.
    pub fn map<U, F>(self, mut f: F) -> StencilSides<U>
    where
        F: FnMut(T) -> U,
    {
        StencilSides {
            west: f(self.west),
            north: f(self.north),
            east: f(self.east),
            south: f(self.south),
        }
    }

    /// Convert to array `[west, north, east, south]`.
    pub fn to_array(self) -> [T; 4] {
        [self.west, self.north, self.east, self.south]
    }

    /// The radial pair `[north, south]`.
    pub fn radial(self) -> [T; 2] {
        [self.north, self.south]
    }

    /// The angular pair `[west, east]`.
    pub fn angular(self) -> [T; 2] {
        [self.west, self.east]
    }
}

impl<T: fmt::Display> fmt::Display for StencilSides<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "W:{} N:{} E:{} S:{}",
            self.west, self.north, self.east, self.south
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let sides = StencilSides::new(1, 2, 3, 4);
        assert_eq!(sides.west, 1);
        assert_eq!(sides.north, 2);
        assert_eq!(sides.east, 3);
        assert_eq!(sides.south, 4);
    }

    #[test]
    fn test_map() {
        let sides = StencilSides::new(1, 2, 3, 4).map(|x| x * 3);
        assert_eq!(sides.to_array(), [3, 6, 9, 12]);
    }

    #[test]
    fn test_pairs() {
        let sides = StencilSides::new(1, 2, 3, 4);
        assert_eq!(sides.radial(), [2, 4]);
        assert_eq!(sides.angular(), [1, 3]);
    }
}
