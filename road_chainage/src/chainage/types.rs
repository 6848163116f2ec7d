use super::station_to_str;
use crate::{
    core::traits::Real,
    geodesy::{LngLat, path_length},
};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A station marker, a point on the route annotated with its chainage in meters.
///
/// Stations are produced in traversal order, which is not necessarily increasing chainage order.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Station<T = f64> {
    pub pos: LngLat<T>,
    /// Chainage (meters along the route).
    pub chainage: i32,
}

impl<T> Station<T>
where
    T: Real,
{
    #[inline]
    pub fn new(pos: LngLat<T>, chainage: i32) -> Self {
        Station { pos, chainage }
    }
}

impl<T> fmt::Display for Station<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", station_to_str(self.chainage, "+"), self.pos)
    }
}

/// Externally surveyed point with a known chainage used to pin the generated stations.
///
/// Anchors are expected in route order but do not need to lie exactly on the route, each one is
/// snapped to the nearest dense route point. `payload` carries arbitrary caller data along.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Anchor<T = f64, D = ()> {
    pub pos: LngLat<T>,
    pub chainage: i32,
    pub payload: D,
}

impl<T> Anchor<T, ()>
where
    T: Real,
{
    #[inline]
    pub fn new(pos: LngLat<T>, chainage: i32) -> Self {
        Anchor {
            pos,
            chainage,
            payload: (),
        }
    }
}

impl<T, D> Anchor<T, D>
where
    T: Real,
{
    #[inline]
    pub fn with_payload(pos: LngLat<T>, chainage: i32, payload: D) -> Self {
        Anchor {
            pos,
            chainage,
            payload,
        }
    }
}

/// Contiguous run of dense route points with the chainage range assigned to it.
///
/// `points` borrows from the dense sequence, consecutive segments share their boundary point.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StationSegment<'a, T = f64> {
    pub points: &'a [LngLat<T>],
    /// Index of `points[0]` in the dense sequence.
    pub start_index: usize,
    pub start_chainage: i32,
    pub end_chainage: i32,
}

impl<'a, T> StationSegment<'a, T>
where
    T: Real,
{
    /// Signed chainage length (`end_chainage - start_chainage`), negative for a decreasing
    /// segment.
    #[inline]
    pub fn length(&self) -> i32 {
        self.end_chainage.saturating_sub(self.start_chainage)
    }

    /// Geodesic length in meters of the segment's points.
    #[inline]
    pub fn path_length(&self) -> T {
        path_length(self.points)
    }

    /// Index of the last point in the dense sequence.
    #[inline]
    pub fn end_index(&self) -> usize {
        self.start_index + self.points.len().saturating_sub(1)
    }
}
