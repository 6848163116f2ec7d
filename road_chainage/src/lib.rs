//! Geodesic primitives and station (chainage) generation for road and vehicle location data.
//!
//! - [geodesy]: distance, bearing and destination on a spherical earth and WGS84/GCJ02/BD09 datum
//!   conversion.
//! - [region]: polygon containment, point to polyline distance, line buffers and track coverage.
//! - [chainage]: evenly spaced station markers along a route, optionally pinned to surveyed
//!   anchors, and `K1+234` style chainage text.
//!
//! All functions are generic over [Real](core::traits::Real) with `f64` as the default.
//!
//! # Examples
//!
//! ```
//! # use road_chainage::polyline;
//! # use road_chainage::chainage::station_to_str;
//! let route = polyline![(116.4074, 39.9042), (116.4374, 39.9342)];
//! let stations = route.stations(100);
//! assert_eq!(station_to_str(stations[1].chainage, "+"), "K0+100");
//! ```
extern crate static_aabb2d_index;

#[macro_use]
mod macros;
mod error;

pub mod chainage;
pub mod core;
pub mod geodesy;
pub mod polyline;
pub mod region;

pub use error::{ChainageError, Result};
