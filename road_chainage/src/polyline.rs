//! Owning route polyline with methods delegating to the crate's free functions.
use crate::{
    Result,
    chainage::{self, Station, StationOptions},
    core::traits::Real,
    geodesy::{self, Datum, LngLat},
    region,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Open polyline of geographic points (a route, track or polygon ring).
///
/// All operations are also available as free functions taking `&[LngLat<T>]`, this type only adds
/// ownership and convenience methods.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline<T = f64> {
    #[cfg_attr(feature = "serde", serde(rename = "points"))]
    /// Contiguous sequence of points.
    pub vertex_data: Vec<LngLat<T>>,
}

impl<T> Polyline<T>
where
    T: Real,
{
    #[inline]
    pub fn new() -> Self {
        Polyline {
            vertex_data: Vec::new(),
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Polyline {
            vertex_data: Vec::with_capacity(capacity),
        }
    }

    /// Append a point given its longitude and latitude.
    #[inline]
    pub fn add(&mut self, lng: T, lat: T) {
        self.vertex_data.push(LngLat::new(lng, lat));
    }

    #[inline]
    pub fn add_point(&mut self, point: LngLat<T>) {
        self.vertex_data.push(point);
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_data.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, LngLat<T>> {
        self.vertex_data.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[LngLat<T>] {
        &self.vertex_data
    }

    /// Total length in meters, see [geodesy::path_length].
    #[inline]
    pub fn path_length(&self) -> T {
        geodesy::path_length(&self.vertex_data)
    }

    /// Dense resampling of the polyline, see [chainage::internal::resample::densify].
    #[inline]
    pub fn densify(&self) -> Polyline<T> {
        Polyline {
            vertex_data: chainage::internal::resample::densify(&self.vertex_data),
        }
    }

    /// Stations every `interval` meters starting at chainage 0, see [chainage::stations].
    #[inline]
    pub fn stations(&self, interval: i32) -> Vec<Station<T>> {
        chainage::stations(&self.vertex_data, interval)
    }

    /// See [chainage::stations_opt].
    #[inline]
    pub fn stations_opt<D>(&self, options: &StationOptions<T, D>) -> Vec<Station<T>> {
        chainage::stations_opt(&self.vertex_data, options)
    }

    /// See [chainage::try_stations_opt].
    #[inline]
    pub fn try_stations_opt<D>(&self, options: &StationOptions<T, D>) -> Result<Vec<Station<T>>> {
        chainage::try_stations_opt(&self.vertex_data, options)
    }

    /// Distance in meters from `point` to the polyline, `-1` if it cannot be measured. See
    /// [region::point_to_polyline_distance].
    #[inline]
    pub fn distance_to_point(&self, point: LngLat<T>) -> T {
        region::point_to_polyline_distance(point, &self.vertex_data)
    }

    /// Treat the polyline as a polygon ring and test `point` for containment, see
    /// [region::is_in_polygon].
    #[inline]
    pub fn contains_point(&self, point: LngLat<T>) -> bool {
        region::is_in_polygon(point, &self.vertex_data)
    }

    /// Buffer polygon `range` meters to both sides, see [region::line_to_region].
    #[inline]
    pub fn to_region(&self, range: T) -> Polyline<T> {
        Polyline {
            vertex_data: region::line_to_region(&self.vertex_data, range),
        }
    }

    /// Fraction of this polyline's vertices within `threshold` meters of `track`, see
    /// [region::coverage].
    #[inline]
    pub fn coverage_of(&self, track: &[LngLat<T>], threshold: T) -> T {
        region::coverage(&self.vertex_data, track, threshold)
    }

    /// Convert every point between datums, see [geodesy::datum::convert].
    pub fn convert_datum(&self, from: Datum, to: Datum) -> Polyline<T> {
        Polyline {
            vertex_data: self
                .vertex_data
                .iter()
                .map(|p| geodesy::datum::convert(*p, from, to))
                .collect(),
        }
    }
}

impl<T> Index<usize> for Polyline<T> {
    type Output = LngLat<T>;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.vertex_data[index]
    }
}

impl<T> IndexMut<usize> for Polyline<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.vertex_data[index]
    }
}

impl<T> AsRef<[LngLat<T>]> for Polyline<T> {
    #[inline]
    fn as_ref(&self) -> &[LngLat<T>] {
        &self.vertex_data
    }
}

impl<T> From<Vec<LngLat<T>>> for Polyline<T> {
    #[inline]
    fn from(vertex_data: Vec<LngLat<T>>) -> Self {
        Polyline { vertex_data }
    }
}

impl<T> FromIterator<LngLat<T>> for Polyline<T> {
    fn from_iter<I: IntoIterator<Item = LngLat<T>>>(iter: I) -> Self {
        Polyline {
            vertex_data: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Polyline<T> {
    type Item = &'a LngLat<T>;
    type IntoIter = std::slice::Iter<'a, LngLat<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertex_data.iter()
    }
}
