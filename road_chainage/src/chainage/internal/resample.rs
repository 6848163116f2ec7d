use crate::{
    core::{
        math::{ceil_to_i32, round_to},
        traits::Real,
    },
    geodesy::{LngLat, azimuth, destination, distance, path_length},
};

/// Dense sampling interval in meters for a route of `total_length` meters.
///
/// One third of the route length, capped at 1 meter and rounded to 4 decimal places below that.
///
/// # Examples
///
/// ```
/// # use road_chainage::chainage::internal::resample::resample_interval;
/// assert_eq!(resample_interval(4208.7), 1.0);
/// assert_eq!(resample_interval(1.0), 0.3333);
/// assert_eq!(resample_interval(0.0), 0.0);
/// ```
pub fn resample_interval<T>(total_length: T) -> T
where
    T: Real,
{
    let interval = total_length / T::three();
    if interval > T::one() {
        T::one()
    } else {
        round_to(interval, 4)
    }
}

/// Densify `points` using [resample_interval] of the route length.
///
/// Produces roughly one point per meter for routes longer than 3 meters.
pub fn densify<T>(points: &[LngLat<T>]) -> Vec<LngLat<T>>
where
    T: Real,
{
    resample(points, resample_interval(path_length(points)))
}

/// Resample `points` so consecutive output points are at most `interval` meters apart.
///
/// Every distinct input vertex is copied verbatim into the output, coincident consecutive input
/// vertices are collapsed. Between vertices the walk repeatedly steps `interval` meters from the
/// last sample towards the segment end, accumulating the traveled distance (rounded to millimeters)
/// until it reaches the segment length. The sample that reaches or passes the segment length is
/// not emitted, the end vertex is appended instead. This differs from a plain step-then-append
/// walk, which keeps the overshooting sample and so places one point beyond the end vertex right
/// before it.
///
/// A non-positive `interval` copies the distinct vertices without sampling between them.
pub fn resample<T>(points: &[LngLat<T>], interval: T) -> Vec<LngLat<T>>
where
    T: Real,
{
    let Some(&first) = points.first() else {
        return Vec::new();
    };

    let mut dense = Vec::with_capacity(points.len());
    dense.push(first);
    let mut prev = first;

    for &curr in &points[1..] {
        if curr == prev {
            continue;
        }

        if interval > T::zero() {
            sample_segment(prev, curr, interval, &mut dense);
        }

        if dense.last() != Some(&curr) {
            dense.push(curr);
        }
        prev = curr;
    }

    dense
}

fn sample_segment<T>(start: LngLat<T>, end: LngLat<T>, interval: T, dense: &mut Vec<LngLat<T>>)
where
    T: Real,
{
    let seg_length = distance(start, end);
    let max_steps = ceil_to_i32(seg_length / interval).max(0) as usize + 1;

    let mut traveled = T::zero();
    let mut last = start;
    for _ in 0..max_steps {
        let sample = destination(last, azimuth(last, end), interval);
        let step = distance(last, sample);
        let rounded = round_to(step, 3);
        let advance = if rounded > T::zero() { rounded } else { step };
        if advance <= T::zero() {
            break;
        }

        traveled = traveled + advance;
        if traveled >= seg_length {
            break;
        }

        if dense.last() != Some(&sample) {
            dense.push(sample);
        }
        last = sample;
    }
}
