use road_chainage::{
    geodesy::LngLat,
    polyline,
    region::{coverage, distance_to_polygon, is_in_polygon, point_to_polyline_distance},
};

fn main() {
    env_logger::init();

    off_route_detection();
    buffer_and_containment();
    track_coverage();
}

fn off_route_detection() {
    let route = polyline![(116.0, 39.0), (116.01, 39.0), (116.01, 39.01)];
    let vehicle = LngLat::new(116.005, 39.0003);

    let d = point_to_polyline_distance(vehicle, route.as_slice());
    assert!(d > 30.0 && d < 35.0, "Vehicle is about 33 m off the route");

    let allowed = 50.0;
    println!("vehicle {vehicle} is {d:.1} m off route (on route: {})", d <= allowed);
}

fn buffer_and_containment() {
    let route = polyline![(116.0, 39.0), (116.01, 39.0)];
    let corridor = route.to_region(20.0);
    assert_eq!(corridor.vertex_count(), 4);

    let inside = LngLat::new(116.005, 39.0001);
    let outside = LngLat::new(116.005, 39.001);
    assert!(is_in_polygon(inside, corridor.as_slice()));
    assert!(!corridor.contains_point(outside));

    let d = distance_to_polygon(outside, corridor.as_slice());
    assert!(d > 80.0 && d < 100.0, "Point is about 91 m from the corridor");
}

fn track_coverage() {
    let road = polyline![(116.0, 39.0), (116.001, 39.0), (116.002, 39.0), (116.003, 39.0)];
    let track = [LngLat::new(116.0, 39.00001), LngLat::new(116.0015, 39.00001)];

    let fraction = coverage(road.as_slice(), &track, 5.0);
    assert_eq!(fraction, 0.5, "Track only covers the first half of the road");
    log::info!("coverage {:.0}%", fraction * 100.0);
}
