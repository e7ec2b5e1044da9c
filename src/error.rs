use thiserror::Error;

/// Top-level error type for the pentanet geometry core.
#[derive(Debug, Error)]
pub enum PentanetError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),
}

/// Errors related to geometric construction and queries.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("numeric degeneracy: {0}")]
    NumericDegeneracy(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to face nets and face definition tables.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

impl PentanetError {
    /// Returns `true` for [`GeometryError::InvalidArgument`].
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::Geometry(GeometryError::InvalidArgument(_)))
    }

    /// Returns `true` for [`GeometryError::NumericDegeneracy`].
    #[must_use]
    pub fn is_numeric_degeneracy(&self) -> bool {
        matches!(self, Self::Geometry(GeometryError::NumericDegeneracy(_)))
    }
}

/// Convenience type alias for results using [`PentanetError`].
pub type Result<T> = std::result::Result<T, PentanetError>;
