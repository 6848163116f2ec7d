use road_chainage::{
    chainage::{Anchor, StationOptions, estimate_chainage},
    geodesy::LngLat,
    polyline,
};

fn main() {
    env_logger::init();

    let route = polyline![(116.0, 39.0), (116.01, 39.0), (116.02, 39.0)];

    // Surveyed markers slightly off the digitized route, carrying their marker ids
    let anchors = [
        Anchor::with_payload(LngLat::new(116.01, 39.0002), 5000, "KM5"),
        Anchor::with_payload(LngLat::new(116.02, 38.9999), 5900, "KM5.9"),
    ];
    let options = StationOptions::new(100)
        .with_start_chainage(4100)
        .with_anchors(&anchors);

    let stations = match route.try_stations_opt(&options) {
        Ok(stations) => stations,
        Err(e) => {
            log::error!("station generation failed: {e}");
            return;
        }
    };

    assert_eq!(stations[0].chainage, 4100);
    assert!(
        stations.iter().any(|s| s.chainage == 5000 && s.pos == route[1]),
        "Anchor snaps to the nearest route point"
    );
    assert_eq!(stations.last().map(|s| s.chainage), Some(5900));

    for anchor in &anchors {
        log::info!("anchor {} at {}", anchor.payload, anchor.pos);
    }

    // Chainage of an arbitrary point near the route
    let point = LngLat::new(116.0153, 39.00003);
    if let Some(estimate) = estimate_chainage(point, &stations) {
        println!(
            "point {point} is near {} (estimated {:.1} m)",
            estimate.station, estimate.chainage
        );
    }
}
