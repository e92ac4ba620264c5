//! Strongly-typed domain types for safer APIs.
//!
//! This module provides newtypes and structured types to make APIs
//! self-documenting and prevent parameter mix-ups.
//!
//! - **Named fields over positional**: `StencilSides { west, north, east, south }`
//! - **Units in the type docs**: angles in radians (degrees only where the
//!   caller supplies them), radii in km
//! - **Index newtypes**: `CellIndex` is not a DOF global ID
//!
//! # Example
//!
//! ```
//! use shaw_mesh::types::{AnnulusBounds, PolarResolution};
//!
//! let bounds = AnnulusBounds::new(0.0, 180.0, 3480.0, 6371.0);
//! let res = PolarResolution::new(4, 3);
//! assert_eq!(res.total_cells(), 12);
//! assert_eq!(bounds.thickness(), 2891.0);
//! ```

mod bounds;
mod indices;
mod point;
mod resolution;
mod sides;

pub use bounds::AnnulusBounds;
pub use indices::CellIndex;
pub use point::PolarPoint;
pub use resolution::PolarResolution;
pub use sides::StencilSides;
