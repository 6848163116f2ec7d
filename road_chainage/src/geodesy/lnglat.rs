use crate::core::{math::Vector2, traits::Real};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Datum, azimuth, datum, destination, distance};

/// A geographic coordinate, longitude and latitude in degrees.
///
/// This is the one point type used across the crate. Raw coordinate pairs and arrays convert into
/// it through the [From] impls and [LngLat::from_slice].
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::LngLat;
/// let p = LngLat::new(116.4074, 39.9042);
/// assert_eq!(LngLat::from((116.4074, 39.9042)), p);
/// assert_eq!(LngLat::from([116.4074, 39.9042]), p);
/// assert_eq!(LngLat::from_slice(&[116.4074, 39.9042]), Some(p));
/// assert_eq!(<[f64; 2]>::from(p), [116.4074, 39.9042]);
/// assert_eq!(p.to_string(), "116.4074,39.9042");
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct LngLat<T = f64> {
    /// Longitude in degrees, -180 to 180.
    pub lng: T,
    /// Latitude in degrees, -90 to 90.
    pub lat: T,
}

impl<T> LngLat<T>
where
    T: Real,
{
    #[inline]
    pub fn new(lng: T, lat: T) -> Self {
        LngLat { lng, lat }
    }

    /// Construct a point from a `[lng, lat]` slice.
    ///
    /// If the slice does not contain exactly 2 elements then `None` is returned.
    #[inline]
    pub fn from_slice(slice: &[T]) -> Option<Self> {
        if let [lng, lat] = *slice {
            Some(LngLat::new(lng, lat))
        } else {
            None
        }
    }

    /// Construct a point from a degree space vector (`x` = longitude, `y` = latitude).
    #[inline]
    pub fn from_vector2(v: Vector2<T>) -> Self {
        LngLat::new(v.x, v.y)
    }

    /// Return the position as a degree space vector.
    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        Vector2::new(self.lng, self.lat)
    }

    /// Surface distance in meters to `other`, see [distance].
    #[inline]
    pub fn distance_to(&self, other: Self) -> T {
        distance(*self, other)
    }

    /// Initial bearing in degrees `[0, 360)` towards `other`, see [azimuth].
    #[inline]
    pub fn azimuth_to(&self, other: Self) -> T {
        azimuth(*self, other)
    }

    /// Point reached after traveling `meters` along `bearing` degrees, see [destination].
    #[inline]
    pub fn destination(&self, bearing: T, meters: T) -> Self {
        destination(*self, bearing, meters)
    }

    /// Convert this point between map datums, see [datum::convert].
    #[inline]
    pub fn convert(&self, from: Datum, to: Datum) -> Self {
        datum::convert(*self, from, to)
    }

    /// Fuzzy equal comparison with another point using `fuzzy_epsilon` given.
    #[inline]
    pub fn fuzzy_eq_eps(&self, other: Self, fuzzy_epsilon: T) -> bool {
        self.lng.fuzzy_eq_eps(other.lng, fuzzy_epsilon)
            && self.lat.fuzzy_eq_eps(other.lat, fuzzy_epsilon)
    }

    /// Fuzzy equal comparison with another point using T::fuzzy_epsilon().
    #[inline]
    pub fn fuzzy_eq(&self, other: Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T> From<(T, T)> for LngLat<T> {
    #[inline]
    fn from((lng, lat): (T, T)) -> Self {
        LngLat { lng, lat }
    }
}

impl<T> From<[T; 2]> for LngLat<T> {
    #[inline]
    fn from([lng, lat]: [T; 2]) -> Self {
        LngLat { lng, lat }
    }
}

impl<T> From<LngLat<T>> for [T; 2] {
    #[inline]
    fn from(p: LngLat<T>) -> Self {
        [p.lng, p.lat]
    }
}

impl<T> fmt::Display for LngLat<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lng, self.lat)
    }
}
