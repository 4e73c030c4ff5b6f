use thiserror::Error;

use crate::geometry::GeometryKind;

/// Top-level error type for planar geometry operations.
#[derive(Debug, Error)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to the geometry values handed to an operation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("unsupported geometry type for {operation}: {kind}")]
    Unsupported {
        kind: GeometryKind,
        operation: &'static str,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to operation parameters.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl GeometryError {
    /// Builds the failure raised when `operation` receives a kind it does not handle.
    #[must_use]
    pub fn unsupported(kind: GeometryKind, operation: &'static str) -> Self {
        Self::Unsupported { kind, operation }
    }
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
