use crate::{
    chainage::{Station, StationSegment},
    core::traits::Real,
    geodesy::distance,
};

#[derive(Debug, Copy, Clone, PartialEq)]
enum EmitState<T> {
    RouteStart,
    SegmentStart {
        segment: usize,
    },
    Walking {
        segment: usize,
        /// Next point index within the segment to accumulate.
        point: usize,
        accumulated: T,
        chainage: i32,
        per_station: T,
    },
    SegmentEnd {
        segment: usize,
    },
    Done,
}

/// Lazy iterator producing the stations for a list of segments.
///
/// Emits one station at the start of the route (first point of the first segment with the route
/// start chainage), intermediate stations spaced by `interval` chainage within each segment, and
/// one station at the end point of every segment carrying the segment's end chainage.
///
/// Within a segment the intermediate stations are placed by walking the dense points and emitting
/// whenever the accumulated distance reaches `segment path length / (chainage span / interval)`.
/// The last point of a segment never carries an intermediate station. Direction is taken from the
/// first segment and applied to every segment, a segment disagreeing with it is logged at warn
/// level and emitted as is.
#[derive(Debug, Clone)]
pub struct StationEmitter<'a, T>
where
    T: Real,
{
    segments: Vec<StationSegment<'a, T>>,
    interval: i32,
    route_start_chainage: i32,
    ascending: bool,
    state: EmitState<T>,
}

impl<'a, T> StationEmitter<'a, T>
where
    T: Real,
{
    pub fn new(
        segments: Vec<StationSegment<'a, T>>,
        interval: i32,
        route_start_chainage: i32,
    ) -> Self {
        let ascending = segments.first().is_some_and(|s| s.length() > 0);
        Self {
            segments,
            interval,
            route_start_chainage,
            ascending,
            state: EmitState::RouteStart,
        }
    }

    /// True if chainage increases along the route (decided by the first segment).
    #[inline]
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    fn begin_segment(&self, segment: usize) -> EmitState<T> {
        let Some(seg) = self.segments.get(segment) else {
            return EmitState::Done;
        };

        let length = seg.length();
        if length != 0 && (length > 0) != self.ascending {
            log::warn!(
                "segment {segment} runs {} to {} against the route direction",
                seg.start_chainage,
                seg.end_chainage
            );
        }

        let span = length.unsigned_abs();
        if self.interval <= 0 || span == 0 || seg.points.len() < 2 {
            return EmitState::SegmentEnd { segment };
        }

        let station_count = T::from(span).unwrap_or_else(T::zero)
            / T::from(self.interval).unwrap_or_else(T::one);
        let per_station = seg.path_length() / station_count;

        EmitState::Walking {
            segment,
            point: 1,
            accumulated: T::zero(),
            chainage: seg.start_chainage,
            per_station,
        }
    }

    fn step_chainage(&self, chainage: i32) -> i32 {
        if self.ascending {
            chainage.saturating_add(self.interval)
        } else {
            chainage.saturating_sub(self.interval)
        }
    }
}

impl<T> Iterator for StationEmitter<'_, T>
where
    T: Real,
{
    type Item = Station<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                EmitState::RouteStart => {
                    self.state = EmitState::SegmentStart { segment: 0 };
                    let first = self.segments.first().and_then(|s| s.points.first());
                    if let Some(&pos) = first {
                        return Some(Station::new(pos, self.route_start_chainage));
                    }
                }
                EmitState::SegmentStart { segment } => {
                    self.state = self.begin_segment(segment);
                }
                EmitState::Walking {
                    segment,
                    point,
                    mut accumulated,
                    chainage,
                    per_station,
                } => {
                    let points = self.segments[segment].points;
                    // last point is reserved for the segment end station
                    let last = points.len() - 1;
                    let mut emitted = None;
                    let mut i = point;
                    while i < last {
                        accumulated = accumulated + distance(points[i - 1], points[i]);
                        i += 1;
                        if accumulated >= per_station {
                            emitted = Some(points[i - 1]);
                            break;
                        }
                    }

                    match emitted {
                        Some(pos) => {
                            let chainage = self.step_chainage(chainage);
                            self.state = EmitState::Walking {
                                segment,
                                point: i,
                                accumulated: T::zero(),
                                chainage,
                                per_station,
                            };
                            return Some(Station::new(pos, chainage));
                        }
                        None => self.state = EmitState::SegmentEnd { segment },
                    }
                }
                EmitState::SegmentEnd { segment } => {
                    self.state = EmitState::SegmentStart {
                        segment: segment + 1,
                    };
                    let seg = &self.segments[segment];
                    if let Some(&pos) = seg.points.last() {
                        return Some(Station::new(pos, seg.end_chainage));
                    }
                }
                EmitState::Done => return None,
            }
        }
    }
}
