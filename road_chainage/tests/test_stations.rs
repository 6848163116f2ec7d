mod test_utils;

use road_chainage::{
    ChainageError,
    chainage::{
        Anchor, Station, StationOptions, StationSegment, estimate_chainage,
        internal::emit::StationEmitter, stations, stations_opt, try_stations_opt,
    },
    geodesy::{LngLat, distance},
};
use test_utils::{
    BEIJING_END, BEIJING_START, assert_monotonic, chainages, east_route, to_debug_str,
};

#[test]
fn beijing_scenario() {
    let result = stations(&[BEIJING_START, BEIJING_END], 100);

    assert_eq!(result[0], Station::new(BEIJING_START, 0));
    assert_eq!(*result.last().unwrap(), Station::new(BEIJING_END, 4209));

    let intermediate = &chainages(&result)[1..result.len() - 1];
    let expected: Vec<i32> = (1..=42).map(|i| i * 100).collect();
    assert_eq!(intermediate, expected.as_slice(), "{}", to_debug_str(&result));
    assert_monotonic(&result, true);

    // intermediate stations land about every 100 m
    for w in result[1..result.len() - 1].windows(2) {
        let d = distance(w[0].pos, w[1].pos);
        assert!(d > 95.0 && d < 105.0, "spacing {d}");
    }
}

#[test]
fn identical_inputs_identical_output() {
    let route = east_route();
    let anchors = [Anchor::new(route[1], 1000), Anchor::new(route[2], 1900)];
    let options = StationOptions::new(50).with_anchors(&anchors);
    assert_eq!(stations_opt(&route, &options), stations_opt(&route, &options));
}

#[test]
fn anchored_ascending() {
    let route = east_route();
    let anchors = [Anchor::new(route[1], 5000), Anchor::new(route[2], 5900)];
    let options = StationOptions::new(100)
        .with_start_chainage(4100)
        .with_anchors(&anchors);
    let result = stations_opt(&route, &options);

    assert_eq!(result[0], Station::new(route[0], 4100));
    assert_eq!(*result.last().unwrap(), Station::new(route[2], 5900));
    assert!(result.contains(&Station::new(route[1], 5000)));
    assert_monotonic(&result, true);
    assert!(
        result
            .iter()
            .filter(|s| s.chainage != 5900 && s.chainage != 4100)
            .all(|s| s.chainage % 100 == 0)
    );
}

#[test]
fn anchored_descending() {
    let route = east_route();
    let anchors = [Anchor::new(route[1], 8200), Anchor::new(route[2], 7300)];
    let options = StationOptions::new(100)
        .with_start_chainage(9000)
        .with_anchors(&anchors);
    let result = stations_opt(&route, &options);

    assert_eq!(result[0].chainage, 9000);
    assert_eq!(result.last().unwrap().chainage, 7300);
    assert!(result.contains(&Station::new(route[1], 8200)));
    assert_monotonic(&result, false);
}

#[test]
fn mixed_direction_not_corrected() {
    let route = east_route();
    let anchors = [Anchor::new(route[1], 1000), Anchor::new(route[2], 500)];
    let result = stations_opt(&route, &StationOptions::new(100).with_anchors(&anchors));

    let boundary = result
        .iter()
        .position(|s| *s == Station::new(route[1], 1000))
        .unwrap();
    let second_segment = &result[boundary + 1..result.len() - 1];
    assert!(!second_segment.is_empty());
    // direction comes from the first segment
    assert!(second_segment.iter().all(|s| s.chainage > 1000));
    assert_eq!(*result.last().unwrap(), Station::new(route[2], 500));
}

#[test]
fn reverse_without_anchors() {
    let route = [east_route()[0], east_route()[1]];
    let options = StationOptions::<f64>::new(100)
        .with_start_chainage(2000)
        .with_reverse(true);
    let result = stations_opt(&route, &options);
    assert_eq!(result[0], Station::new(route[0], 2000));
    assert_eq!(*result.last().unwrap(), Station::new(route[1], 2000 - 866));
    assert_monotonic(&result, false);

    // start within the route length ignores the reverse flag
    let result = stations_opt(&route, &options.clone().with_start_chainage(500));
    assert_eq!(result.last().unwrap().chainage, 500 + 866);
    assert_monotonic(&result, true);
}

#[test]
fn non_positive_interval_emits_boundaries_only() {
    let route = east_route();
    let anchors = [Anchor::new(route[1], 1000), Anchor::new(route[2], 1900)];
    let options = StationOptions::new(0).with_anchors(&anchors);
    assert_eq!(chainages(&stations_opt(&route, &options)), vec![0, 1000, 1900]);
    assert_eq!(chainages(&stations(&route, -10)), vec![0, 1731]);

    assert_eq!(
        try_stations_opt(&route, &options),
        Err(ChainageError::InvalidInterval(0))
    );
}

#[test]
fn degenerate_routes_yield_nothing() {
    let p = LngLat::new(116.0, 39.0);
    assert!(stations::<f64>(&[], 100).is_empty());
    assert!(stations(&[p], 100).is_empty());
    assert!(stations(&[p, p, p], 100).is_empty());

    let options = StationOptions::<f64>::new(100);
    assert_eq!(try_stations_opt(&[], &options), Err(ChainageError::EmptyPolyline));
    assert_eq!(try_stations_opt(&[p, p], &options), Err(ChainageError::EmptyPolyline));
    assert_eq!(
        try_stations_opt(&east_route(), &options),
        Ok(stations(&east_route(), 100))
    );
}

#[test]
fn interval_larger_than_route() {
    let route = east_route();
    let result = stations(&route, 5000);
    assert_eq!(result, vec![Station::new(route[0], 0), Station::new(route[2], 1731)]);
}

#[test]
fn emitter_over_manual_segments() {
    let a = LngLat::new(116.0, 39.0);
    let points: Vec<LngLat> = (0..=10).map(|i| a.destination(90.0, i as f64 * 10.0)).collect();
    let segments = vec![
        StationSegment {
            points: &points[..=5],
            start_index: 0,
            start_chainage: 0,
            end_chainage: 50,
        },
        StationSegment {
            points: &points[5..],
            start_index: 5,
            start_chainage: 50,
            end_chainage: 100,
        },
    ];

    let emitter = StationEmitter::new(segments, 25, 0);
    assert!(emitter.ascending());
    let result: Vec<Station> = emitter.collect();
    assert_eq!(chainages(&result), vec![0, 25, 50, 75, 100]);
    assert_eq!(result[1].pos, points[3]);
    assert_eq!(result[2].pos, points[5]);
    assert_eq!(result[4].pos, points[10]);

    assert_eq!(StationEmitter::<f64>::new(Vec::new(), 100, 0).count(), 0);
}

#[test]
fn emitter_is_lazy() {
    let route = [BEIJING_START, BEIJING_END];
    let dense = road_chainage::chainage::internal::resample::densify(&route);
    let segment = StationSegment {
        points: &dense,
        start_index: 0,
        start_chainage: 0,
        end_chainage: 4209,
    };
    let first_three: Vec<i32> = StationEmitter::new(vec![segment], 100, 0)
        .take(3)
        .map(|s| s.chainage)
        .collect();
    assert_eq!(first_three, vec![0, 100, 200]);
}

#[test]
fn estimate_between_stations() {
    let result = stations(&[BEIJING_START, BEIJING_END], 100);
    let target = result[10].pos.destination(result[10].pos.azimuth_to(result[11].pos), 30.0);
    let estimate = estimate_chainage(target, &result).unwrap();
    assert_eq!(estimate.index, 10);
    assert_eq!(estimate.station, result[10]);
    assert!((estimate.chainage - 1030.0).abs() < 1.0, "{:?}", estimate);

    let target = result[10].pos.destination(result[10].pos.azimuth_to(result[9].pos), 20.0);
    let estimate = estimate_chainage(target, &result).unwrap();
    assert!((estimate.chainage - 980.0).abs() < 1.0, "{:?}", estimate);

    assert!(estimate_chainage(target, &result[..1]).is_none());
    assert!(estimate_chainage(target, &[]).is_none());
}

#[test]
fn station_display() {
    let s = Station::new(LngLat::new(116.4074, 39.9042), 1234);
    assert_eq!(s.to_string(), "K1+234 (116.4074,39.9042)");
}
