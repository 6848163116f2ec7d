use super::locate::find_nearest;
use crate::{
    chainage::{Anchor, StationOptions, StationSegment},
    core::{math::ceil_to_i32, traits::Real},
    geodesy::{LngLat, path_length},
};

/// Minimum number of dense points for an anchor bounded segment to be kept.
pub const MIN_ANCHOR_SEGMENT_POINTS: usize = 3;

/// Split the `dense` route into station segments according to `options`.
///
/// With at least 2 anchors the route is split at the anchors ([segment_by_anchors]), otherwise it
/// becomes a single segment ([whole_route]). The whole route is also used when the anchors leave
/// no segment (every anchor segment too short and no tail). `total_length` is the route length in
/// meters.
pub fn segment_route<'a, T, D>(
    dense: &'a [LngLat<T>],
    total_length: T,
    options: &StationOptions<T, D>,
) -> Vec<StationSegment<'a, T>>
where
    T: Real,
{
    if let Some(anchors) = options.anchors.filter(|a| a.len() >= 2) {
        let segments = segment_by_anchors(
            dense,
            anchors,
            options.start_chainage,
            total_length,
            options.reverse,
        );
        if !segments.is_empty() {
            return segments;
        }

        log::trace!("every anchor segment was dropped, using the whole route");
    }

    whole_route(dense, total_length, options.start_chainage, options.reverse)
        .into_iter()
        .collect()
}

/// Whole `dense` route as one segment starting at `start_chainage`.
///
/// The chainage range spans `ceil(total_length)` meters, decreasing when `reverse` is set and
/// `start_chainage` exceeds the route length. Returns `None` for fewer than 2 dense points.
pub fn whole_route<T>(
    dense: &[LngLat<T>],
    total_length: T,
    start_chainage: i32,
    reverse: bool,
) -> Option<StationSegment<'_, T>>
where
    T: Real,
{
    if dense.len() < 2 {
        return None;
    }

    let ascending = !decreasing_from(start_chainage, total_length, reverse);
    Some(StationSegment {
        points: dense,
        start_index: 0,
        start_chainage,
        end_chainage: offset_chainage(start_chainage, total_length, ascending),
    })
}

/// Split `dense` at the points nearest to each anchor.
///
/// Anchors are located in order with each search starting at the previous anchor's index, so the
/// segments only move forward. An anchor locating onto the running start index is skipped.
/// Segments with fewer than [MIN_ANCHOR_SEGMENT_POINTS] points are dropped but still advance the
/// running start index and chainage. Any points remaining after the last anchor form a tail
/// segment whose range extends by the tail's length in the direction of the first segment.
pub fn segment_by_anchors<'a, T, D>(
    dense: &'a [LngLat<T>],
    anchors: &[Anchor<T, D>],
    start_chainage: i32,
    total_length: T,
    reverse: bool,
) -> Vec<StationSegment<'a, T>>
where
    T: Real,
{
    let mut segments = Vec::with_capacity(anchors.len() + 1);
    let mut start_index = 0;
    let mut running_chainage = start_chainage;

    for (i, anchor) in anchors.iter().enumerate() {
        let Some(end_index) = find_nearest(dense, anchor.pos, start_index) else {
            log::trace!("anchor {i}: nothing left to search from index {start_index}");
            break;
        };

        if end_index == start_index {
            log::trace!("anchor {i}: located at running start index {start_index}, skipped");
            continue;
        }

        let points = &dense[start_index..=end_index];
        if points.len() >= MIN_ANCHOR_SEGMENT_POINTS {
            log::trace!(
                "anchor {i}: segment {start_index}..={end_index} chainage {running_chainage} to {}",
                anchor.chainage
            );
            segments.push(StationSegment {
                points,
                start_index,
                start_chainage: running_chainage,
                end_chainage: anchor.chainage,
            });
        } else {
            log::trace!(
                "anchor {i}: dropped short segment {start_index}..={end_index} ({} points)",
                points.len()
            );
        }

        running_chainage = anchor.chainage;
        start_index = end_index;
    }

    let tail = dense.get(start_index..).unwrap_or_default();
    if tail.len() >= 2 {
        let ascending = match segments.first() {
            Some(first) => first.length() > 0,
            None => !decreasing_from(running_chainage, total_length, reverse),
        };

        segments.push(StationSegment {
            points: tail,
            start_index,
            start_chainage: running_chainage,
            end_chainage: offset_chainage(running_chainage, path_length(tail), ascending),
        });
    }

    segments
}

fn decreasing_from<T>(chainage: i32, total_length: T, reverse: bool) -> bool
where
    T: Real,
{
    reverse && T::from(chainage).is_some_and(|c| c > total_length)
}

fn offset_chainage<T>(chainage: i32, length: T, ascending: bool) -> i32
where
    T: Real,
{
    let meters = ceil_to_i32(length);
    if ascending {
        chainage.saturating_add(meters)
    } else {
        chainage.saturating_sub(meters)
    }
}
