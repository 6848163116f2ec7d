use road_chainage::{
    chainage::{StationOptions, parse_station, station_to_num, station_to_str},
    polyline,
};

fn main() {
    // RUST_LOG=debug shows the pipeline milestones
    env_logger::init();

    default_stations();
    reversed_stations();
    chainage_text();
}

fn default_stations() {
    let route = polyline![(116.4074, 39.9042), (116.4374, 39.9342)];
    let stations = route.stations(100);

    let first = stations.first().expect("route has stations");
    let last = stations.last().expect("route has stations");
    assert_eq!(first.chainage, 0, "Stations start at chainage 0 by default");
    assert_eq!(first.pos, route[0], "First station sits on the route start");
    assert_eq!(last.pos, route[1], "Last station sits on the route end");
    assert_eq!(last.chainage, 4209, "Route is 4208.7 m long, rounded up");

    for s in stations.iter().take(3) {
        println!("{s}");
    }
    log::info!("{} stations along {:.1} m", stations.len(), route.path_length());
}

fn reversed_stations() {
    let route = polyline![(116.0, 39.0), (116.01, 39.0)];
    let options = StationOptions::<f64>::new(100)
        .with_start_chainage(5000)
        .with_reverse(true);
    let stations = route.stations_opt(&options);

    assert!(
        stations.windows(2).all(|w| w[0].chainage > w[1].chainage),
        "Reverse route counts down from the start chainage"
    );
    assert_eq!(stations[0].chainage, 5000);
}

fn chainage_text() {
    assert_eq!(station_to_str(12_345, "+"), "K12+345");
    assert_eq!(station_to_num("K12+345", -1), 12_345);
    assert_eq!(station_to_num("not a station", -1), -1);
    assert!(parse_station("K1+2x").is_err(), "Strict parse reports errors");
}
