use super::{
    Station, StationOptions,
    internal::{
        emit::StationEmitter,
        resample::{resample, resample_interval},
        segment::segment_route,
    },
};
use crate::{
    ChainageError, Result,
    core::traits::Real,
    geodesy::{LngLat, distance, path_length},
};

/// Generate stations every `interval` meters along `points` starting at chainage 0.
///
/// Shorthand for [stations_opt] with [StationOptions::new].
///
/// # Examples
///
/// ```
/// # use road_chainage::chainage::stations;
/// # use road_chainage::geodesy::LngLat;
/// let route = [LngLat::new(116.4074, 39.9042), LngLat::new(116.4374, 39.9342)];
/// let result = stations(&route, 100);
/// assert_eq!(result[0].chainage, 0);
/// assert_eq!(result[0].pos, route[0]);
/// let last = result.last().unwrap();
/// assert_eq!(last.chainage, 4209);
/// assert_eq!(last.pos, route[1]);
/// ```
pub fn stations<T>(points: &[LngLat<T>], interval: i32) -> Vec<Station<T>>
where
    T: Real,
{
    stations_opt(points, &StationOptions::<T, ()>::new(interval))
}

/// Generate stations along `points` using the `options` given.
///
/// The route is first resampled to roughly one point per meter, so time and memory grow linearly
/// with the route length. The dense route is split at the anchors (if at least 2 are given) and
/// each segment is walked emitting stations spaced by `options.interval`. The first station is the
/// route start with `options.start_chainage`, every segment ends with a station at its end point.
///
/// Returns an empty list if `points` has fewer than 2 distinct points.
pub fn stations_opt<T, D>(points: &[LngLat<T>], options: &StationOptions<T, D>) -> Vec<Station<T>>
where
    T: Real,
{
    let total_length = path_length(points);
    let interval = resample_interval(total_length);
    let dense = resample(points, interval);
    log::debug!(
        "resampled {} vertices into {} dense points (interval {:?} m, length {:?} m)",
        points.len(),
        dense.len(),
        interval,
        total_length
    );

    let segments = segment_route(&dense, total_length, options);
    log::debug!("split route into {} segments", segments.len());

    let result: Vec<Station<T>> =
        StationEmitter::new(segments, options.interval, options.start_chainage).collect();
    log::debug!("emitted {} stations", result.len());
    result
}

/// Same as [stations_opt] but rejects inputs the lenient version silently degrades on.
///
/// # Errors
///
/// - [ChainageError::InvalidInterval] if `options.interval` is not positive.
/// - [ChainageError::EmptyPolyline] if `points` has fewer than 2 distinct points.
pub fn try_stations_opt<T, D>(
    points: &[LngLat<T>],
    options: &StationOptions<T, D>,
) -> Result<Vec<Station<T>>>
where
    T: Real,
{
    if options.interval <= 0 {
        return Err(ChainageError::InvalidInterval(options.interval));
    }

    if !points.windows(2).any(|w| w[0] != w[1]) {
        return Err(ChainageError::EmptyPolyline);
    }

    Ok(stations_opt(points, options))
}

/// Result of [estimate_chainage].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ChainageEstimate<T = f64> {
    /// Index of the nearest station in the list searched.
    pub index: usize,
    /// Nearest station.
    pub station: Station<T>,
    /// Distance in meters from the point to the nearest station.
    pub distance: T,
    /// Estimated chainage at the point.
    pub chainage: T,
}

/// Estimate the chainage at `point` from a list of generated `stations`.
///
/// The nearest station is offset by the distance to the point, moving towards the second nearest
/// station's chainage. Returns `None` if fewer than 2 stations are given.
///
/// # Examples
///
/// ```
/// # use road_chainage::chainage::{Station, estimate_chainage};
/// # use road_chainage::geodesy::LngLat;
/// let a: LngLat = LngLat::new(116.0, 39.0);
/// let b = a.destination(90.0, 100.0);
/// let c = b.destination(90.0, 100.0);
/// let list = [Station::new(a, 1000), Station::new(b, 1100), Station::new(c, 1200)];
///
/// let p = a.destination(90.0, 130.0);
/// let estimate = estimate_chainage(p, &list).unwrap();
/// assert_eq!(estimate.index, 1);
/// assert!((estimate.chainage - 1130.0).abs() < 1.0);
/// assert!(estimate_chainage(p, &list[..1]).is_none());
/// ```
pub fn estimate_chainage<T>(
    point: LngLat<T>,
    stations: &[Station<T>],
) -> Option<ChainageEstimate<T>>
where
    T: Real,
{
    if stations.len() < 2 {
        return None;
    }

    let mut nearest: Option<(usize, T)> = None;
    let mut second: Option<(usize, T)> = None;
    for (i, s) in stations.iter().enumerate() {
        let dist = distance(point, s.pos);
        if nearest.is_none_or(|(_, d)| dist < d) {
            second = nearest;
            nearest = Some((i, dist));
        } else if second.is_none_or(|(_, d)| dist < d) {
            second = Some((i, dist));
        }
    }

    let ((index, dist), (second_index, _)) = (nearest?, second?);
    let station = stations[index];
    let toward = stations[second_index].chainage.cmp(&station.chainage);
    let base = T::from(station.chainage)?;
    let chainage = match toward {
        std::cmp::Ordering::Greater => base + dist,
        std::cmp::Ordering::Less => base - dist,
        std::cmp::Ordering::Equal => base,
    };

    Some(ChainageEstimate {
        index,
        station,
        distance: dist,
        chainage,
    })
}
