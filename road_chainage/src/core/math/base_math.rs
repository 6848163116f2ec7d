use super::Vector2;
use crate::core::traits::Real;

/// Threshold used for detecting degenerate line equations and points lying on a line when
/// computing perpendicular feet in degree space.
pub const LINE_EQUATION_EPSILON: f64 = 1e-13;

/// Returns the (min, max) values from `v1` and `v2`.
///
/// # Examples
///
/// ```
/// # use road_chainage::core::math::*;
/// let (min_lng, max_lng) = min_max(116.4374, 116.4074);
/// assert_eq!(min_lng, 116.4074);
/// assert_eq!(max_lng, 116.4374);
/// ```
#[inline]
pub fn min_max<T>(v1: T, v2: T) -> (T, T)
where
    T: PartialOrd,
{
    if v1 < v2 { (v1, v2) } else { (v2, v1) }
}

/// Normalize degrees to be in the range `[0, 360)`, e.g. `-90` becomes `270` and `450` becomes
/// `90`.
///
/// # Examples
///
/// ```
/// # use road_chainage::core::math::*;
/// # use road_chainage::core::traits::*;
/// assert!(normalize_degrees(-90.0).fuzzy_eq(270.0));
/// assert!(normalize_degrees(450.0).fuzzy_eq(90.0));
/// assert!(normalize_degrees(360.0).fuzzy_eq(0.0));
/// assert!(normalize_degrees(0.0).fuzzy_eq(0.0));
/// ```
#[inline]
pub fn normalize_degrees<T>(angle: T) -> T
where
    T: Real,
{
    let full = T::full_turn_degrees();
    if angle >= T::zero() && angle < full {
        return angle;
    }

    let result = angle - (angle / full).floor() * full;
    // floor based wrap can land exactly on 360 for tiny negative inputs
    if result >= full { T::zero() } else { result }
}

/// Round `value` to `decimals` decimal places (ties away from zero).
///
/// # Examples
///
/// ```
/// # use road_chainage::core::math::*;
/// assert_eq!(round_to(0.33333333, 4), 0.3333);
/// assert_eq!(round_to(1.23456, 3), 1.235);
/// assert_eq!(round_to(-2.5, 0), -3.0);
/// ```
#[inline]
pub fn round_to<T>(value: T, decimals: i32) -> T
where
    T: Real,
{
    let factor = T::constant(10f64.powi(decimals));
    (value * factor).round() / factor
}

/// Round `value` to the nearest integer with ties going to the even neighbor.
///
/// # Examples
///
/// ```
/// # use road_chainage::core::math::*;
/// assert_eq!(round_half_even(2.5), 2.0);
/// assert_eq!(round_half_even(3.5), 4.0);
/// assert_eq!(round_half_even(-2.5), -2.0);
/// assert_eq!(round_half_even(2.4), 2.0);
/// ```
#[inline]
pub fn round_half_even<T>(value: T) -> T
where
    T: Real,
{
    let rounded = value.round();
    if (rounded - value).abs() == T::constant(0.5) {
        T::two() * (value / T::two()).round()
    } else {
        rounded
    }
}

/// Ceiling of `value` as an `i32`, saturating at the `i32` bounds (NaN maps to 0).
#[inline]
pub fn ceil_to_i32<T>(value: T) -> i32
where
    T: Real,
{
    let c = value.ceil();
    if c.is_nan_value() {
        return 0;
    }

    c.to_i32()
        .unwrap_or(if c > T::zero() { i32::MAX } else { i32::MIN })
}

/// Returns the closest point on the line segment from `p0` to `p1` to the `point` given.
#[inline]
pub fn line_seg_closest_point<T>(p0: Vector2<T>, p1: Vector2<T>, point: Vector2<T>) -> Vector2<T>
where
    T: Real,
{
    // Dot product used to find angles
    // See: http://geomalgorithms.com/a02-_lines.html
    let v = p1 - p0;
    let w = point - p0;
    let c1 = w.dot(v);
    if c1 <= T::zero() {
        return p0;
    }

    let c2 = v.length_squared();
    if c2 <= c1 {
        return p1;
    }

    let b = c1 / c2;
    p0 + v.scale(b)
}

/// Coefficients `(a, b, c)` of the line `a * x + b * y + c = 0` passing through `p0` and `p1`.
///
/// All coefficients are zero when `p0 == p1`.
#[inline]
pub fn line_coefficients<T>(p0: Vector2<T>, p1: Vector2<T>) -> (T, T, T)
where
    T: Real,
{
    let a = p1.y - p0.y;
    let b = p0.x - p1.x;
    let c = p1.x * p0.y - p0.x * p1.y;
    (a, b, c)
}

/// Foot of the perpendicular dropped from `point` onto the line `a * x + b * y + c = 0`.
///
/// Returns `None` if the line is degenerate (`a * a + b * b` below [LINE_EQUATION_EPSILON]). If
/// `point` already lies on the line then `point` is returned unchanged.
///
/// # Examples
///
/// ```
/// # use road_chainage::core::math::*;
/// // x axis: 0 * x + 1 * y + 0 = 0
/// let foot = perpendicular_foot(Vector2::new(3.0, 2.0), 0.0, 1.0, 0.0).unwrap();
/// assert!(foot.fuzzy_eq(Vector2::new(3.0, 0.0)));
/// assert!(perpendicular_foot(Vector2::new(3.0, 2.0), 0.0, 0.0, 0.0).is_none());
/// ```
#[inline]
pub fn perpendicular_foot<T>(point: Vector2<T>, a: T, b: T, c: T) -> Option<Vector2<T>>
where
    T: Real,
{
    let eps = T::constant(LINE_EQUATION_EPSILON);
    let denom = a * a + b * b;
    if denom < eps {
        return None;
    }

    if (a * point.x + b * point.y + c).abs() < eps {
        return Some(point);
    }

    let x = (b * b * point.x - a * b * point.y - a * c) / denom;
    let y = (-a * b * point.x + a * a * point.y - b * c) / denom;
    Some(Vector2::new(x, y))
}
