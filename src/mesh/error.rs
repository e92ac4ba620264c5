//! Error types for mesh generation.

use thiserror::Error;

/// Errors that can occur while building the grid or its stencil graphs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    /// Bounds or resolution do not describe a valid annular grid.
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// A configuration the generator deliberately does not handle.
    #[error("Unsupported configuration: {0}")]
    Unsupported(String),

    /// The builder produced inconsistent output. This is a bug, not bad input.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl MeshError {
    /// Create an invalid-domain error.
    pub fn invalid_domain(msg: impl Into<String>) -> Self {
        Self::InvalidDomain(msg.into())
    }

    /// Create an unsupported-configuration error.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    /// Create an internal-invariant error.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }
}
