//! Error types for the circumsphere solver.

use thiserror::Error;

/// Errors that can occur while solving for a circumcenter or plane.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CircumError {
    /// The linear system has no unique solution.
    #[error("singular system: pivot {pivot:e} in column {column}")]
    SingularSystem {
        /// Column whose best pivot was too small.
        column: usize,
        /// Magnitude of that pivot.
        pivot: f64,
    },

    /// The three points are collinear or coincident, so they span no plane.
    #[error("points are collinear or coincident")]
    DegenerateTriangle,

    /// Plane contains the Z direction, so z cannot be sampled over x, y.
    #[error("plane is vertical (normal z component {0:e})")]
    VerticalPlane(f64),

    /// A sampling parameter is out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for solver operations.
pub type Result<T> = std::result::Result<T, CircumError>;
