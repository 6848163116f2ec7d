//! Core module has common/shared math and trait modules used by the geodesy, region and chainage
//! modules.
pub mod math;
pub mod traits;
