use crate::{
    core::traits::Real,
    geodesy::{LngLat, distance},
};

/// Index of the point in `dense` nearest to `point`, searching from `start` onwards.
///
/// Ties resolve to the first index in scan order. Returns `None` if `start` is at or past the end
/// of `dense`.
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::LngLat;
/// # use road_chainage::chainage::internal::locate::find_nearest;
/// let dense = [
///     LngLat::new(116.0, 39.0),
///     LngLat::new(116.001, 39.0),
///     LngLat::new(116.002, 39.0),
///     LngLat::new(116.001, 39.0),
/// ];
/// assert_eq!(find_nearest(&dense, LngLat::new(116.0011, 39.0001), 0), Some(1));
/// assert_eq!(find_nearest(&dense, LngLat::new(116.0011, 39.0001), 2), Some(3));
/// assert_eq!(find_nearest(&dense, LngLat::new(116.0, 39.0), 4), None);
/// ```
pub fn find_nearest<T>(dense: &[LngLat<T>], point: LngLat<T>, start: usize) -> Option<usize>
where
    T: Real,
{
    let mut nearest: Option<(usize, T)> = None;
    for (i, &p) in dense.iter().enumerate().skip(start) {
        let dist = distance(point, p);
        if nearest.is_none_or(|(_, min)| dist < min) {
            nearest = Some((i, dist));
        }
    }

    nearest.map(|(i, _)| i)
}
