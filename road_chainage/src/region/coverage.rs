use super::segment_distance;
use crate::{
    core::{math::min_max, traits::Real},
    geodesy::{LngLat, distance},
};
use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

/// Meters per degree of latitude used to expand segment boxes (below the true value so the
/// expansion never undershoots).
const METERS_PER_DEGREE: f64 = 110_000.0;

/// Lower bound on the latitude cosine used for longitude expansion near the poles.
const MIN_LAT_COS: f64 = 0.01;

/// Fraction (`0..=1`) of `road` vertices lying within `threshold` meters of the `track` polyline.
///
/// Each road vertex is measured against the track the same way as
/// [point_to_polyline_distance](super::point_to_polyline_distance). Candidate track segments are
/// found through a spatial index over the segment bounding boxes expanded by `threshold`. A track
/// segment whose perpendicular foot cannot be computed never covers a vertex.
///
/// Returns `-1` if `road` has fewer than 2 points or `track` is empty.
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::LngLat;
/// # use road_chainage::region::coverage;
/// let road = [
///     LngLat::new(116.0, 39.0),
///     LngLat::new(116.001, 39.0),
///     LngLat::new(116.002, 39.0),
///     LngLat::new(116.003, 39.0),
/// ];
/// // track follows the first half of the road
/// let track = [LngLat::new(116.0, 39.00001), LngLat::new(116.0015, 39.00001)];
/// assert_eq!(coverage(&road, &track, 5.0), 0.5);
/// assert_eq!(coverage(&road[..1], &track, 5.0), -1.0);
/// ```
pub fn coverage<T>(road: &[LngLat<T>], track: &[LngLat<T>], threshold: T) -> T
where
    T: Real,
{
    if road.len() < 2 || track.is_empty() {
        return -T::one();
    }

    let segments: Vec<(LngLat<T>, LngLat<T>)> = track
        .windows(2)
        .filter(|w| w[0] != w[1])
        .map(|w| (w[0], w[1]))
        .collect();

    let covered = if segments.is_empty() {
        // track collapsed to a point
        let first = track[0];
        road.iter()
            .filter(|&&p| distance(p, first) <= threshold)
            .count()
    } else {
        let index = create_segment_index(&segments, threshold);
        road.iter()
            .filter(|&&p| within_threshold(p, &segments, index.as_ref(), threshold))
            .count()
    };

    T::from(covered).unwrap_or_else(T::zero) / T::from(road.len()).unwrap_or_else(T::one)
}

fn within_threshold<T>(
    point: LngLat<T>,
    segments: &[(LngLat<T>, LngLat<T>)],
    index: Option<&StaticAABB2DIndex<T>>,
    threshold: T,
) -> bool
where
    T: Real,
{
    let is_close = |i: usize| {
        let (p0, p1) = segments[i];
        match segment_distance(point, p0, p1) {
            Some(d) => d <= threshold,
            None => {
                log::warn!("coverage: perpendicular foot failed for track segment {i}");
                false
            }
        }
    };

    match index {
        Some(index) => index
            .query(point.lng, point.lat, point.lng, point.lat)
            .into_iter()
            .any(is_close),
        None => (0..segments.len()).any(is_close),
    }
}

/// Build a spatial index over the track segments with boxes expanded by `threshold` meters.
///
/// Returns `None` if the index cannot be built (non-finite coordinates), callers then fall back to
/// a linear scan.
fn create_segment_index<T>(
    segments: &[(LngLat<T>, LngLat<T>)],
    threshold: T,
) -> Option<StaticAABB2DIndex<T>>
where
    T: Real,
{
    let meters = if threshold > T::zero() {
        threshold
    } else {
        T::zero()
    };
    let lat_margin = meters / T::constant(METERS_PER_DEGREE);

    let mut builder = StaticAABB2DIndexBuilder::new(segments.len());
    for &(p0, p1) in segments {
        let (min_x, max_x) = min_max(p0.lng, p1.lng);
        let (min_y, max_y) = min_max(p0.lat, p1.lat);

        let widest_lat =
            (num_traits::real::Real::max(min_y.abs(), max_y.abs()) + lat_margin).to_radians();
        let lat_cos = num_traits::real::Real::max(widest_lat.cos(), T::constant(MIN_LAT_COS));
        let lng_margin = lat_margin / lat_cos;

        builder.add(
            min_x - lng_margin,
            min_y - lat_margin,
            max_x + lng_margin,
            max_y + lat_margin,
        );
    }

    match builder.build() {
        Ok(index) => Some(index),
        Err(e) => {
            log::warn!("coverage: falling back to linear scan, spatial index build failed: {e}");
            None
        }
    }
}
