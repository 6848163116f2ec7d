use crate::{
    ChainageError, Result,
    core::{
        math::{Vector2, line_coefficients, perpendicular_foot},
        traits::Real,
    },
    geodesy::{LngLat, distance},
};

/// Distance in meters from `point` to the segment `p0` to `p1`.
///
/// The perpendicular foot is computed in degree space. If the foot lies within the segment's
/// bounding box (compared with [fuzzy_between](crate::core::traits::FuzzyOrd::fuzzy_between))
/// the distance to the foot is returned, otherwise the distance to the nearer end point. Returns
/// `None` if the foot cannot be computed (segment too short for the line equation).
pub fn segment_distance<T>(point: LngLat<T>, p0: LngLat<T>, p1: LngLat<T>) -> Option<T>
where
    T: Real,
{
    let (a, b, c) = line_coefficients(p0.pos(), p1.pos());
    let foot = perpendicular_foot(point.pos(), a, b, c)?;

    let Vector2 { x, y } = foot;
    if x.fuzzy_between(p0.lng, p1.lng) && y.fuzzy_between(p0.lat, p1.lat) {
        Some(distance(point, LngLat::new(x, y)))
    } else {
        let d0 = distance(point, p0);
        let d1 = distance(point, p1);
        Some(if d0 < d1 { d0 } else { d1 })
    }
}

/// Minimum distance in meters from `point` to the polyline `points`.
///
/// Coincident consecutive vertices are skipped. If no segment could be measured (single vertex or
/// all vertices coincident) the distance to the nearer of the first and last vertex is returned.
///
/// Returns `-1` if `points` is empty or a perpendicular foot cannot be computed, see
/// [try_point_to_polyline_distance] for the error reporting variant.
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::{LngLat, distance};
/// # use road_chainage::region::point_to_polyline_distance;
/// let a = LngLat::new(116.0, 39.0);
/// let b = LngLat::new(116.01, 39.0);
/// // foot falls beyond the end of the segment, nearest end point distance is used
/// let beyond = LngLat::new(116.02, 39.001);
/// assert_eq!(point_to_polyline_distance(beyond, &[a, b]), distance(beyond, b));
/// assert_eq!(point_to_polyline_distance(beyond, &[]), -1.0);
/// ```
pub fn point_to_polyline_distance<T>(point: LngLat<T>, points: &[LngLat<T>]) -> T
where
    T: Real,
{
    try_point_to_polyline_distance(point, points).unwrap_or(-T::one())
}

/// Same as [point_to_polyline_distance] but returns an error instead of the `-1` sentinel.
///
/// # Errors
///
/// - [ChainageError::EmptyPolyline] if `points` is empty.
/// - [ChainageError::DegenerateSegment] if the perpendicular foot for the segment starting at
///   `index` cannot be computed.
pub fn try_point_to_polyline_distance<T>(point: LngLat<T>, points: &[LngLat<T>]) -> Result<T>
where
    T: Real,
{
    let (Some(&first), Some(&last)) = (points.first(), points.last()) else {
        return Err(ChainageError::EmptyPolyline);
    };

    let mut min_dist: Option<T> = None;
    for (index, w) in points.windows(2).enumerate() {
        if w[0] == w[1] {
            continue;
        }

        let dist = segment_distance(point, w[0], w[1])
            .ok_or(ChainageError::DegenerateSegment { index })?;
        if min_dist.is_none_or(|m| dist < m) {
            min_dist = Some(dist);
        }
    }

    Ok(min_dist.unwrap_or_else(|| {
        let d0 = distance(point, first);
        let d1 = distance(point, last);
        if d0 <= d1 { d0 } else { d1 }
    }))
}
