//! Spherical earth primitives (distance, bearing, destination) and map datum conversion.
//!
//! All coordinates are longitude/latitude in degrees, distances are in meters.
mod lnglat;
mod sphere;

pub mod datum;

pub use datum::Datum;
pub use lnglat::LngLat;
pub use sphere::*;
