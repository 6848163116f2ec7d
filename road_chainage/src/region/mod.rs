//! Polygon containment, point to polyline proximity, line buffers and track coverage.
//!
//! Proximity functions follow a sentinel contract: `-1` is returned when a distance cannot be
//! measured. The `try_*` variants report the failure as a [ChainageError](crate::ChainageError)
//! instead.
mod buffer;
mod coverage;
mod polygon;
mod proximity;

pub use buffer::*;
pub use coverage::*;
pub use polygon::*;
pub use proximity::*;
