use crate::{
    core::traits::Real,
    geodesy::{LngLat, azimuth, destination},
};

/// Convert the polyline `line` into a closed buffer polygon offset `range` meters to both sides.
///
/// Vertices on the left side (bearing - 90) are emitted in travel order followed by the right side
/// (bearing + 90) in reverse order, so the result can be used directly as a ring with
/// [is_in_polygon](super::is_in_polygon). Coincident consecutive vertices are skipped. Returns an
/// empty ring if `line` has fewer than 2 distinct points.
///
/// # Examples
///
/// ```
/// # use road_chainage::geodesy::LngLat;
/// # use road_chainage::region::{is_in_polygon, line_to_region};
/// let line = [LngLat::new(116.0, 39.0), LngLat::new(116.01, 39.0)];
/// let region = line_to_region(&line, 10.0);
/// assert_eq!(region.len(), 4);
/// assert!(is_in_polygon(LngLat::new(116.005, 39.00005), &region));
/// assert!(!is_in_polygon(LngLat::new(116.005, 39.001), &region));
/// ```
pub fn line_to_region<T>(line: &[LngLat<T>], range: T) -> Vec<LngLat<T>>
where
    T: Real,
{
    let quarter_turn = T::constant(90.0);
    let mut left = Vec::with_capacity(line.len());
    let mut right = Vec::with_capacity(line.len());
    let mut last = None;

    for w in line.windows(2).filter(|w| w[0] != w[1]) {
        let (start, end) = (w[0], w[1]);
        let bearing = azimuth(start, end);
        left.push(destination(start, bearing - quarter_turn, range));
        right.push(destination(start, bearing + quarter_turn, range));
        last = Some((end, bearing));
    }

    let Some((end, bearing)) = last else {
        return Vec::new();
    };

    left.push(destination(end, bearing - quarter_turn, range));
    right.push(destination(end, bearing + quarter_turn, range));

    left.extend(right.into_iter().rev());
    left
}
