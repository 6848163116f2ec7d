use thiserror::Error;

/// Errors returned by the strict (`try_*` and `parse_*`) entry points.
///
/// The lenient functions never fail, they return sentinel values (`-1` distances, empty station
/// lists, caller supplied defaults) instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainageError {
    /// Polyline has fewer than 2 distinct points.
    #[error("polyline must contain at least 2 distinct points")]
    EmptyPolyline,

    /// Station interval was zero or negative.
    #[error("station interval must be positive, got {0}")]
    InvalidInterval(i32),

    /// Perpendicular foot could not be computed for the segment starting at `index`.
    #[error("degenerate segment at vertex index {index}")]
    DegenerateSegment { index: usize },

    #[error("malformed station text: {0:?}")]
    MalformedStation(String),

    #[error("at least {required} vertices required, found {found}")]
    InsufficientVertices { required: usize, found: usize },

    #[error("unknown datum: {0:?}")]
    UnknownDatum(String),
}

/// Result alias used by the strict entry points.
pub type Result<T, E = ChainageError> = std::result::Result<T, E>;
