//! Station (chainage) generation along a route.
//!
//! A route is a polyline of [LngLat](crate::geodesy::LngLat) points. [stations_opt] turns it into
//! an ordered list of [Station] markers spaced by a fixed chainage interval, optionally pinned to
//! surveyed [Anchor] points. Chainage values are whole meters and format as `K<km>+<m>` text
//! through [station_to_str].
pub mod internal;

mod format;
mod generate;
mod options;
mod types;

pub use format::*;
pub use generate::*;
pub use options::*;
pub use types::*;
