//! Error types shared by every geocore crate.

use thiserror::Error;

/// Errors raised while constructing or querying geometry.
///
/// A ray missing a shape is not an error; intersection queries return `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A constructor or query received an argument outside its domain
    /// (non-positive radius, zero direction, empty point set, bad camera setup).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The input is well-formed but geometrically degenerate
    /// (zero-length vector, collinear points).
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}

impl GeometryError {
    /// Create an [`GeometryError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a [`GeometryError::DegenerateInput`].
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput(message.into())
    }
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
