//! Conversions between the WGS84, GCJ02 and BD09 map datums.
//!
//! GCJ02 is the obfuscated datum mandated for published maps in mainland China, BD09 is a further
//! offset of GCJ02 used by Baidu maps. The GCJ02 to WGS84 direction has no closed form, it is
//! approximated with a single correction step (`2 * p - wgs84_to_gcj02(p)`) which is accurate to
//! a few meters.
//!
//! Conversions are applied regardless of location, use [is_outside_china] to decide whether a
//! point should be converted at all.
use super::LngLat;
use crate::{ChainageError, core::traits::Real};
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Krasovsky 1940 semi-major axis used by the GCJ02 offset.
const KRASOVSKY_A: f64 = 6_378_245.0;
/// Krasovsky 1940 first eccentricity squared.
const KRASOVSKY_EE: f64 = 0.006_693_421_622_965_943;
/// Angular factor used by the BD09 offset.
const BD09_X_PI: f64 = std::f64::consts::PI * 3000.0 / 180.0;

/// Geographic datum (coordinate reference system) of a point.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Datum {
    /// GPS datum.
    #[default]
    Wgs84,
    /// Chinese national obfuscated datum ("Mars coordinates").
    Gcj02,
    /// Baidu datum.
    Bd09,
}

impl fmt::Display for Datum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Datum::Wgs84 => "WGS84",
            Datum::Gcj02 => "GCJ02",
            Datum::Bd09 => "BD09",
        };
        f.write_str(name)
    }
}

impl FromStr for Datum {
    type Err = ChainageError;

    /// Parse a datum name, case insensitive (`"wgs84"`, `"gcj02"`, `"bd09"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs84" | "wgs-84" => Ok(Datum::Wgs84),
            "gcj02" | "gcj-02" => Ok(Datum::Gcj02),
            "bd09" | "bd-09" => Ok(Datum::Bd09),
            _ => Err(ChainageError::UnknownDatum(s.to_string())),
        }
    }
}

/// Returns true if `point` lies outside the rough bounding box of China (the GCJ02 offset is not
/// meaningful there).
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::{LngLat, datum::is_outside_china};
/// assert!(!is_outside_china(LngLat::new(116.4074, 39.9042)));
/// assert!(is_outside_china(LngLat::new(-0.1276, 51.5072)));
/// ```
#[inline]
pub fn is_outside_china<T>(point: LngLat<T>) -> bool
where
    T: Real,
{
    point.lng < T::constant(72.004)
        || point.lng > T::constant(137.8347)
        || point.lat < T::constant(0.8293)
        || point.lat > T::constant(55.8271)
}

fn sin_pi<T>(scale: T, v: T) -> T
where
    T: Real,
{
    (scale * v * T::pi()).sin()
}

fn offset_lat<T>(x: T, y: T) -> T
where
    T: Real,
{
    let c = T::constant;
    let two_thirds = c(2.0) / c(3.0);
    let mut r = c(-100.0) + c(2.0) * x + c(3.0) * y + c(0.2) * y * y + c(0.1) * x * y
        + c(0.2) * x.abs().sqrt();
    r = r + (c(20.0) * sin_pi(c(6.0), x) + c(20.0) * sin_pi(c(2.0), x)) * two_thirds;
    r = r + (c(20.0) * sin_pi(T::one(), y) + c(40.0) * sin_pi(T::one() / c(3.0), y)) * two_thirds;
    r + (c(160.0) * sin_pi(T::one() / c(12.0), y) + c(320.0) * sin_pi(T::one() / c(30.0), y))
        * two_thirds
}

fn offset_lng<T>(x: T, y: T) -> T
where
    T: Real,
{
    let c = T::constant;
    let two_thirds = c(2.0) / c(3.0);
    let mut r = c(300.0) + x + c(2.0) * y + c(0.1) * x * x + c(0.1) * x * y
        + c(0.1) * x.abs().sqrt();
    r = r + (c(20.0) * sin_pi(c(6.0), x) + c(20.0) * sin_pi(c(2.0), x)) * two_thirds;
    r = r + (c(20.0) * sin_pi(T::one(), x) + c(40.0) * sin_pi(T::one() / c(3.0), x)) * two_thirds;
    r + (c(150.0) * sin_pi(T::one() / c(12.0), x) + c(300.0) * sin_pi(T::one() / c(30.0), x))
        * two_thirds
}

/// Convert a WGS84 point to GCJ02.
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::{LngLat, datum::wgs84_to_gcj02};
/// let gcj = wgs84_to_gcj02(LngLat::new(114.304569, 30.593354));
/// assert!(gcj.fuzzy_eq_eps(LngLat::new(114.310012, 30.590943), 1e-6));
/// ```
pub fn wgs84_to_gcj02<T>(point: LngLat<T>) -> LngLat<T>
where
    T: Real,
{
    let c = T::constant;
    let x = point.lng - c(105.0);
    let y = point.lat - c(35.0);
    let a = c(KRASOVSKY_A);
    let ee = c(KRASOVSKY_EE);
    let half_turn = c(180.0);

    let rad_lat = point.lat / half_turn * T::pi();
    let sin_lat = rad_lat.sin();
    let magic = T::one() - ee * sin_lat * sin_lat;
    let sqrt_magic = magic.sqrt();

    let d_lat =
        offset_lat(x, y) * half_turn / ((a * (T::one() - ee)) / (magic * sqrt_magic) * T::pi());
    let d_lng = offset_lng(x, y) * half_turn / (a / sqrt_magic * rad_lat.cos() * T::pi());

    LngLat::new(point.lng + d_lng, point.lat + d_lat)
}

/// Convert a GCJ02 point back to WGS84 (single step approximation, error of a few meters).
pub fn gcj02_to_wgs84<T>(point: LngLat<T>) -> LngLat<T>
where
    T: Real,
{
    let shifted = wgs84_to_gcj02(point);
    LngLat::new(
        T::two() * point.lng - shifted.lng,
        T::two() * point.lat - shifted.lat,
    )
}

/// Convert a GCJ02 point to BD09.
pub fn gcj02_to_bd09<T>(point: LngLat<T>) -> LngLat<T>
where
    T: Real,
{
    let c = T::constant;
    let x_pi = c(BD09_X_PI);
    let (x, y) = (point.lng, point.lat);
    let z = (x * x + y * y).sqrt() + c(0.00002) * (y * x_pi).sin();
    let theta = y.atan2(x) + c(0.000003) * (x * x_pi).cos();
    LngLat::new(z * theta.cos() + c(0.0065), z * theta.sin() + c(0.006))
}

/// Convert a BD09 point to GCJ02.
pub fn bd09_to_gcj02<T>(point: LngLat<T>) -> LngLat<T>
where
    T: Real,
{
    let c = T::constant;
    let x_pi = c(BD09_X_PI);
    let x = point.lng - c(0.0065);
    let y = point.lat - c(0.006);
    let z = (x * x + y * y).sqrt() - c(0.00002) * (y * x_pi).sin();
    let theta = y.atan2(x) - c(0.000003) * (x * x_pi).cos();
    LngLat::new(z * theta.cos(), z * theta.sin())
}

/// Convert a WGS84 point to BD09 (through GCJ02).
#[inline]
pub fn wgs84_to_bd09<T>(point: LngLat<T>) -> LngLat<T>
where
    T: Real,
{
    gcj02_to_bd09(wgs84_to_gcj02(point))
}

/// Convert a BD09 point to WGS84 (through GCJ02).
#[inline]
pub fn bd09_to_wgs84<T>(point: LngLat<T>) -> LngLat<T>
where
    T: Real,
{
    gcj02_to_wgs84(bd09_to_gcj02(point))
}

/// Convert `point` from datum `from` to datum `to`, identical datums return the point unchanged.
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::{LngLat, datum::*};
/// let p = LngLat::new(116.407387, 39.904179);
/// assert_eq!(convert(p, Datum::Wgs84, Datum::Wgs84), p);
/// let bd = convert(p, Datum::Wgs84, Datum::Bd09);
/// assert_eq!(bd, wgs84_to_bd09(p));
/// ```
pub fn convert<T>(point: LngLat<T>, from: Datum, to: Datum) -> LngLat<T>
where
    T: Real,
{
    match (from, to) {
        (Datum::Wgs84, Datum::Gcj02) => wgs84_to_gcj02(point),
        (Datum::Wgs84, Datum::Bd09) => wgs84_to_bd09(point),
        (Datum::Gcj02, Datum::Wgs84) => gcj02_to_wgs84(point),
        (Datum::Gcj02, Datum::Bd09) => gcj02_to_bd09(point),
        (Datum::Bd09, Datum::Wgs84) => bd09_to_wgs84(point),
        (Datum::Bd09, Datum::Gcj02) => bd09_to_gcj02(point),
        (Datum::Wgs84, Datum::Wgs84)
        | (Datum::Gcj02, Datum::Gcj02)
        | (Datum::Bd09, Datum::Bd09) => point,
    }
}
