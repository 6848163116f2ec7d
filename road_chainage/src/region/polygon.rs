use crate::{
    ChainageError, Result,
    core::{math::line_seg_closest_point, traits::Real},
    geodesy::{LngLat, distance},
};

/// Returns true if `point` lies inside the polygon `ring` using even-odd ray casting.
///
/// The ring is implicitly closed (last vertex connects back to the first). Rings with fewer than
/// 3 vertices contain nothing and return false.
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::LngLat;
/// # use road_chainage::region::is_in_polygon;
/// let square = [
///     LngLat::new(0.0, 0.0),
///     LngLat::new(1.0, 0.0),
///     LngLat::new(1.0, 1.0),
///     LngLat::new(0.0, 1.0),
/// ];
/// assert!(is_in_polygon(LngLat::new(0.5, 0.5), &square));
/// assert!(!is_in_polygon(LngLat::new(1.5, 0.5), &square));
/// assert!(!is_in_polygon(LngLat::new(0.5, 0.5), &square[..2]));
/// ```
pub fn is_in_polygon<T>(point: LngLat<T>, ring: &[LngLat<T>]) -> bool
where
    T: Real,
{
    if ring.len() < 3 {
        return false;
    }

    let mut crossings = 0usize;
    let mut prev = ring[ring.len() - 1];
    for &curr in ring {
        let (start, end) = (prev, curr);
        prev = curr;

        let spans = (point.lat >= start.lat && point.lat < end.lat)
            || (point.lat >= end.lat && point.lat < start.lat);
        if !spans {
            continue;
        }

        let cross_lng =
            start.lng - (start.lng - end.lng) * (start.lat - point.lat) / (start.lat - end.lat);
        if cross_lng < point.lng {
            crossings += 1;
        }
    }

    crossings % 2 != 0
}

/// Same as [is_in_polygon] but rejects rings with fewer than 3 vertices.
///
/// # Examples
///
/// ```
/// # use road_chainage::{ChainageError, geodesy::LngLat, region::try_is_in_polygon};
/// let line = [LngLat::new(0.0, 0.0), LngLat::new(1.0, 0.0)];
/// assert_eq!(
///     try_is_in_polygon(LngLat::new(0.5, 0.0), &line),
///     Err(ChainageError::InsufficientVertices { required: 3, found: 2 })
/// );
/// ```
pub fn try_is_in_polygon<T>(point: LngLat<T>, ring: &[LngLat<T>]) -> Result<bool>
where
    T: Real,
{
    if ring.len() < 3 {
        return Err(ChainageError::InsufficientVertices {
            required: 3,
            found: ring.len(),
        });
    }

    Ok(is_in_polygon(point, ring))
}

/// Minimum distance in meters from `point` to the boundary of the closed `ring`.
///
/// The closest point on each edge is found in degree space and then measured with
/// [distance](crate::geodesy::distance). A single vertex ring measures the distance to that
/// vertex, an empty ring returns `-1`. Containment is not considered, a point inside the ring still
/// reports its distance to the nearest edge.
pub fn distance_to_polygon<T>(point: LngLat<T>, ring: &[LngLat<T>]) -> T
where
    T: Real,
{
    let Some(&last) = ring.last() else {
        return -T::one();
    };

    let target = point.pos();
    let mut prev = last;
    let mut min_dist = <T as Real>::max_value();
    for &curr in ring {
        let closest = line_seg_closest_point(prev.pos(), curr.pos(), target);
        let dist = distance(point, LngLat::from_vector2(closest));
        if dist < min_dist {
            min_dist = dist;
        }
        prev = curr;
    }

    min_dist
}
