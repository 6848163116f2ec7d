//! Internal stages of the station pipeline made public for benchmarking and testing purposes.
//!
//! Not expected to be used directly, [stations_opt](super::stations_opt) chains them together:
//! [resample] densifies the route, [segment] splits it at the anchors (using [locate]) and [emit]
//! walks the segments producing stations.
pub mod emit;
pub mod locate;
pub mod resample;
pub mod segment;
