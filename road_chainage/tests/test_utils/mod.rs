#![allow(dead_code)]

use road_chainage::{
    chainage::Station,
    core::traits::FuzzyEq,
    geodesy::{LngLat, distance},
};

/// Relative slack allowed on dense spacing, `distance` measures with a larger earth radius than
/// `destination` steps with (about 0.11% longer).
pub const SPACING_RATIO: f64 = 2e-3;

/// Route used by the Beijing scenario tests (about 4208.7 m, one straight leg).
pub const BEIJING_START: LngLat = LngLat {
    lng: 116.4074,
    lat: 39.9042,
};
pub const BEIJING_END: LngLat = LngLat {
    lng: 116.4374,
    lat: 39.9342,
};

/// Three vertex east bound route along latitude 39 (two legs of about 865 m each).
pub fn east_route() -> [LngLat; 3] {
    [
        LngLat::new(116.0, 39.0),
        LngLat::new(116.01, 39.0),
        LngLat::new(116.02, 39.0),
    ]
}

/// Largest distance between consecutive points.
pub fn max_spacing(points: &[LngLat]) -> f64 {
    points
        .windows(2)
        .map(|w| distance(w[0], w[1]))
        .fold(0.0, f64::max)
}

/// Assert no two consecutive points are farther apart than `interval` (relative to
/// [SPACING_RATIO]).
pub fn assert_spacing_within(points: &[LngLat], interval: f64) {
    let max = max_spacing(points);
    assert!(
        max <= interval || max.fuzzy_eq_rel(interval, SPACING_RATIO),
        "max spacing {max} exceeds interval {interval}"
    );
}

/// Smallest distance between consecutive points.
pub fn min_spacing(points: &[LngLat]) -> f64 {
    points
        .windows(2)
        .map(|w| distance(w[0], w[1]))
        .fold(f64::INFINITY, f64::min)
}

pub fn chainages(stations: &[Station]) -> Vec<i32> {
    stations.iter().map(|s| s.chainage).collect()
}

/// Assert chainage values strictly increase (or decrease) in traversal order.
pub fn assert_monotonic(stations: &[Station], ascending: bool) {
    for w in stations.windows(2) {
        let ok = if ascending {
            w[0].chainage < w[1].chainage
        } else {
            w[0].chainage > w[1].chainage
        };
        assert!(
            ok,
            "stations not monotonic ({}): {:?}",
            if ascending { "ascending" } else { "descending" },
            chainages(stations)
        );
    }
}

/// Helper function to create a compact string of stations to be used for debugging.
pub fn to_debug_str(stations: &[Station]) -> String {
    stations
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
