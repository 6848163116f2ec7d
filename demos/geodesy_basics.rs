use road_chainage::geodesy::{
    LngLat, azimuth, datum::Datum, datum::is_outside_china, destination, distance, path_length,
};

fn main() {
    measurements();
    datum_conversion();
}

fn measurements() {
    let start: LngLat = LngLat::new(116.4074, 39.9042);
    let end = LngLat::new(116.4374, 39.9342);

    let d = distance(start, end);
    assert!((d - 4208.688).abs() < 1e-3, "Distance should be about 4208.688 m");

    let bearing = azimuth(start, end);
    assert!(
        bearing > 0.0 && bearing < 90.0,
        "North east bearing should be in the first quadrant"
    );

    // Step 1 km along the bearing and measure back
    let stepped = destination(start, bearing, 1000.0);
    let back = distance(start, stepped);
    assert!(
        (back - 1000.0).abs() < 2.0,
        "Destination and distance use slightly different earth radii"
    );

    // Length of a multi leg route
    let via = LngLat::new(116.4374, 39.9042);
    let route = [start, via, end];
    assert!(
        path_length(&route) > d,
        "Route via a corner should be longer than the straight line"
    );

    println!("distance {d:.3} m, bearing {bearing:.3} deg");
}

fn datum_conversion() {
    let wgs: LngLat = LngLat::new(114.304569, 30.593354);
    assert!(!is_outside_china(wgs));

    let gcj = wgs.convert(Datum::Wgs84, Datum::Gcj02);
    let bd = wgs.convert(Datum::Wgs84, Datum::Bd09);
    println!("WGS84 {wgs} -> GCJ02 {gcj} -> BD09 {bd}");

    // Converting back is approximate to a few meters
    let back = bd.convert(Datum::Bd09, Datum::Wgs84);
    assert!(
        distance(wgs, back) < 5.0,
        "Round trip should land within a few meters"
    );

    let datum: Datum = "gcj02".parse().expect("known datum name");
    assert_eq!(datum, Datum::Gcj02);
}
