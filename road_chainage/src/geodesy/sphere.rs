use super::LngLat;
use crate::core::{math::normalize_degrees, traits::Real};

/// Mean earth radius in meters used by [destination].
pub const EARTH_RADIUS: f64 = 6_371_000.0;

/// Earth diameter in meters used by [distance] (twice the WGS84 semi-major axis).
pub const EARTH_DIAMETER: f64 = 12_756_274.0;

/// Surface distance in meters between `a` and `b` using the haversine formula.
///
/// Returns 0 if the result is not finite (e.g. NaN coordinates).
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::*;
/// let a: LngLat = LngLat::new(102.570619, 24.964126);
/// let b = LngLat::new(102.575351, 24.960976);
/// assert!((distance(a, b) - 592.4688).abs() < 1e-3);
/// assert_eq!(distance(a, a), 0.0);
/// assert_eq!(distance(a, LngLat::new(f64::NAN, 0.0)), 0.0);
/// ```
pub fn distance<T>(a: LngLat<T>, b: LngLat<T>) -> T
where
    T: Real,
{
    let half = T::constant(0.5);
    let sin_dlat = ((b.lat - a.lat).to_radians() * half).sin();
    let sin_dlng = ((b.lng - a.lng).to_radians() * half).sin();
    let mut h = sin_dlat * sin_dlat
        + sin_dlng * sin_dlng * a.lat.to_radians().cos() * b.lat.to_radians().cos();

    // rounding can push h just outside [0, 1] for (near) antipodal points
    if h < T::zero() {
        h = T::zero();
    } else if h > T::one() {
        h = T::one();
    }

    let d = T::constant(EARTH_DIAMETER) * h.sqrt().atan2((T::one() - h).sqrt());
    if d.is_finite_value() { d } else { T::zero() }
}

/// Initial great circle bearing in degrees `[0, 360)` from `start` to `end`, clockwise from north.
///
/// Coincident points return 0.
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::*;
/// # use road_chainage::core::traits::*;
/// let origin = LngLat::new(0.0, 0.0);
/// assert!(azimuth(origin, LngLat::new(0.0, 1.0)).fuzzy_eq(0.0));
/// assert!(azimuth(origin, LngLat::new(1.0, 0.0)).fuzzy_eq(90.0));
/// assert!(azimuth(origin, LngLat::new(0.0, -1.0)).fuzzy_eq(180.0));
/// assert!(azimuth(origin, LngLat::new(-1.0, 0.0)).fuzzy_eq(270.0));
/// ```
pub fn azimuth<T>(start: LngLat<T>, end: LngLat<T>) -> T
where
    T: Real,
{
    let lat1 = start.lat.to_radians();
    let lat2 = end.lat.to_radians();
    let dlng = (end.lng - start.lng).to_radians();

    let y = dlng.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlng.cos();
    normalize_degrees(y.atan2(x).to_degrees())
}

/// Point reached by traveling `meters` from `start` along the initial `bearing` (degrees) on a
/// sphere of radius [EARTH_RADIUS].
///
/// Note [distance] uses a slightly larger radius so measuring the result with [distance] gives a
/// value about 0.1% larger than `meters`.
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::*;
/// let start: LngLat = LngLat::new(116.4074, 39.9042);
/// let north = destination(start, 0.0, 1000.0);
/// assert!((north.lng - start.lng).abs() < 1e-9);
/// assert!((north.lat - 39.913193216).abs() < 1e-8);
/// ```
pub fn destination<T>(start: LngLat<T>, bearing: T, meters: T) -> LngLat<T>
where
    T: Real,
{
    let lat1 = start.lat.to_radians();
    let lng1 = start.lng.to_radians();
    let brng = bearing.to_radians();
    let delta = meters / T::constant(EARTH_RADIUS);

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * brng.cos()).asin();
    let lng2 = lng1
        + (brng.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    LngLat::new(lng2.to_degrees(), lat2.to_degrees())
}

/// Total length in meters of the polyline formed by `points` (0 for fewer than 2 points).
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::*;
/// let a = LngLat::new(116.4074, 39.9042);
/// let b = LngLat::new(116.4374, 39.9342);
/// assert_eq!(path_length::<f64>(&[]), 0.0);
/// assert_eq!(path_length(&[a]), 0.0);
/// assert_eq!(path_length(&[a, b]), distance(a, b));
/// ```
pub fn path_length<T>(points: &[LngLat<T>]) -> T
where
    T: Real,
{
    points
        .windows(2)
        .fold(T::zero(), |acc, w| acc + distance(w[0], w[1]))
}
