mod test_utils;

use road_chainage::{
    chainage::{
        Anchor, StationOptions, try_stations_opt,
        internal::{
            resample::densify,
            segment::{segment_by_anchors, segment_route, whole_route},
        },
    },
    geodesy::{LngLat, path_length},
};
use test_utils::east_route;

fn dense_east() -> (Vec<LngLat>, f64) {
    let route = east_route();
    (densify(&route), path_length(&route))
}

fn index_of(dense: &[LngLat], p: LngLat) -> usize {
    dense.iter().position(|q| *q == p).expect("point not in dense route")
}

#[test]
fn no_anchors_single_segment() {
    let (dense, total) = dense_east();
    let segments = segment_route(&dense, total, &StationOptions::<f64>::new(100));
    assert_eq!(segments.len(), 1);
    let seg = &segments[0];
    assert_eq!(seg.start_index, 0);
    assert_eq!(seg.end_index(), dense.len() - 1);
    assert_eq!(seg.points.len(), dense.len());
    assert_eq!(seg.start_chainage, 0);
    assert_eq!(seg.end_chainage, total.ceil() as i32);
    assert_eq!(seg.length(), 1731);
}

#[test]
fn no_anchors_reverse() {
    let (dense, total) = dense_east();

    // start beyond the route length counts down
    let seg = whole_route(&dense, total, 5000, true).unwrap();
    assert_eq!(seg.end_chainage, 5000 - 1731);
    assert!(seg.length() < 0);

    // start within the route length still counts up
    let seg = whole_route(&dense, total, 500, true).unwrap();
    assert_eq!(seg.end_chainage, 500 + 1731);

    // reverse flag required
    let seg = whole_route(&dense, total, 5000, false).unwrap();
    assert_eq!(seg.end_chainage, 5000 + 1731);
}

#[test]
fn too_few_dense_points() {
    let p = LngLat::new(116.0, 39.0);
    assert!(whole_route(&[p], 0.0, 0, false).is_none());
    assert!(whole_route::<f64>(&[], 0.0, 0, false).is_none());
    let anchors = [Anchor::new(p, 0), Anchor::new(p, 10)];
    assert!(segment_by_anchors(&[p], &anchors, 0, 0.0, false).is_empty());
}

#[test]
fn single_anchor_ignored() {
    let (dense, total) = dense_east();
    let route = east_route();
    let anchors = [Anchor::new(route[1], 900)];
    let options = StationOptions::new(100).with_anchors(&anchors);
    let segments = segment_route(&dense, total, &options);
    assert_eq!(
        segments,
        segment_route(&dense, total, &StationOptions::<f64>::new(100))
    );
}

#[test]
fn anchors_split_at_located_points() {
    let (dense, total) = dense_east();
    let route = east_route();
    let anchors = [Anchor::new(route[1], 5000), Anchor::new(route[2], 5900)];
    let options = StationOptions::new(100)
        .with_start_chainage(4100)
        .with_anchors(&anchors);
    let segments = segment_route(&dense, total, &options);

    // last anchor sits on the final point so there is no tail
    assert_eq!(segments.len(), 2);
    let (first, second) = (&segments[0], &segments[1]);
    assert_eq!(first.start_index, 0);
    assert_eq!(first.end_index(), index_of(&dense, route[1]));
    assert_eq!((first.start_chainage, first.end_chainage), (4100, 5000));

    // consecutive segments share the boundary point
    assert_eq!(second.start_index, first.end_index());
    assert_eq!(second.points[0], route[1]);
    assert_eq!(second.end_index(), dense.len() - 1);
    assert_eq!((second.start_chainage, second.end_chainage), (5000, 5900));
}

#[test]
fn anchors_off_route_snap_to_nearest() {
    let (dense, total) = dense_east();
    let route = east_route();
    let anchors = [
        Anchor::new(LngLat::new(116.01, 39.0003), 900),
        Anchor::new(LngLat::new(116.02, 38.9998), 1800),
    ];
    let segments = segment_by_anchors(&dense, &anchors, 0, total, false);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].points.last(), Some(&route[1]));
    assert_eq!(segments[1].points.last(), Some(&route[2]));
}

#[test]
fn tail_after_last_anchor() {
    let (dense, total) = dense_east();
    let route = east_route();
    let mid = LngLat::new(116.015, 39.0001);
    let anchors = [Anchor::new(route[1], 900), Anchor::new(mid, 1400)];
    let segments = segment_by_anchors(&dense, &anchors, 0, total, false);

    assert_eq!(segments.len(), 3);
    let tail = &segments[2];
    assert_eq!(tail.start_index, segments[1].end_index());
    assert_eq!(tail.end_index(), dense.len() - 1);
    assert_eq!(tail.start_chainage, 1400);
    assert_eq!(tail.end_chainage, 1400 + path_length(tail.points).ceil() as i32);
}

#[test]
fn tail_follows_first_segment_direction() {
    let (dense, total) = dense_east();
    let route = east_route();
    let mid = LngLat::new(116.015, 39.0);
    let anchors = [Anchor::new(route[1], 9000), Anchor::new(mid, 8500)];
    let segments = segment_by_anchors(&dense, &anchors, 9865, total, false);

    assert_eq!(segments.len(), 3);
    assert!(segments.iter().all(|s| s.length() < 0));
    let tail = &segments[2];
    assert_eq!(tail.end_chainage, 8500 - path_length(tail.points).ceil() as i32);
}

#[test]
fn anchor_at_start_index_skipped() {
    let (dense, total) = dense_east();
    let route = east_route();
    let anchors = [
        Anchor::new(route[0], 50),
        Anchor::new(route[1], 900),
        Anchor::new(route[2], 1800),
    ];
    let segments = segment_by_anchors(&dense, &anchors, 0, total, false);
    assert_eq!(segments.len(), 2);
    // skipped anchor does not change the running chainage
    assert_eq!(segments[0].start_chainage, 0);
    assert_eq!(segments[0].end_chainage, 900);
}

#[test]
fn short_segment_dropped_but_advances() {
    let (dense, total) = dense_east();
    let route = east_route();
    let anchors = [
        Anchor::new(dense[1], 10),
        Anchor::new(route[1], 900),
        Anchor::new(route[2], 1800),
    ];
    let segments = segment_by_anchors(&dense, &anchors, 0, total, false);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].start_index, 1);
    assert_eq!(segments[0].start_chainage, 10);
    assert_eq!(segments[0].points.len(), index_of(&dense, route[1]));
}

#[test]
fn anchors_only_move_forward() {
    let (dense, total) = dense_east();
    let route = east_route();
    // second anchor lies behind the first, the forward search lands on the first anchor's index
    let anchors = [Anchor::new(route[1], 900), Anchor::new(route[0], 0)];
    let segments = segment_by_anchors(&dense, &anchors, 0, total, false);
    assert_eq!(segments.len(), 2);
    assert_eq!((segments[0].start_chainage, segments[0].end_chainage), (0, 900));
    assert_eq!(segments[1].start_chainage, 900);
    assert_eq!(segments[1].end_index(), dense.len() - 1);
    assert!(segments[1].length() > 0);
}

#[test]
fn all_anchors_skipped_uses_whole_route_rule() {
    let (dense, total) = dense_east();
    let route = east_route();
    let anchors = [Anchor::new(route[0], 0), Anchor::new(route[0], 5)];

    let segments = segment_by_anchors(&dense, &anchors, 5000, total, true);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start_index, 0);
    assert_eq!(segments[0].start_chainage, 5000);
    assert!(segments[0].end_chainage < 5000);

    let segments = segment_by_anchors(&dense, &anchors, 0, total, true);
    assert!(segments[0].end_chainage > 0);
}

#[test]
fn every_segment_dropped_falls_back_to_whole_route() {
    let a: LngLat = LngLat::new(116.0, 39.0);
    let dense = [a, a.destination(90.0, 0.4), a.destination(90.0, 0.8)];
    let total = path_length(&dense);
    let anchors = [Anchor::new(dense[1], 10), Anchor::new(dense[2], 20)];
    assert!(segment_by_anchors(&dense, &anchors, 0, total, false).is_empty());

    let options = StationOptions::new(100).with_anchors(&anchors);
    let segments = segment_route(&dense, total, &options);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].start_index, 0);
    assert_eq!(segments[0].end_index(), dense.len() - 1);
    assert_eq!(segments[0].start_chainage, 0);
    assert_eq!(segments[0].end_chainage, 1);
}

#[test]
fn short_route_with_anchor_on_every_point_has_stations() {
    let start: LngLat = LngLat::new(116.0, 39.0);
    let route = [start, start.destination(45.0, 1.2)];
    let dense = densify(&route);
    let anchors: Vec<Anchor> = dense
        .iter()
        .enumerate()
        .map(|(i, p)| Anchor::new(*p, i as i32))
        .collect();
    let options = StationOptions::new(100).with_anchors(&anchors);

    let result = try_stations_opt(&route, &options).unwrap();
    assert_eq!(result.first().map(|s| (s.chainage, s.pos)), Some((0, route[0])));
    assert_eq!(result.last().map(|s| s.pos), Some(route[1]));
}

#[test]
fn anchor_payload_carried() {
    let route = east_route();
    let anchor = Anchor::with_payload(route[1], 900, "bridge");
    assert_eq!(anchor.payload, "bridge");
    let anchors = [anchor, Anchor::with_payload(route[2], 1800, "toll")];
    let (dense, total) = dense_east();
    let options = StationOptions::new(100).with_anchors(&anchors);
    assert_eq!(segment_route(&dense, total, &options).len(), 2);
}
