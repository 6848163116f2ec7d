use road_chainage::geodesy::{LngLat, destination};

/// Winding route of `vertex_count` vertices spaced `spacing` meters apart.
pub fn winding_route(vertex_count: usize, spacing: f64) -> Vec<LngLat> {
    let mut route = Vec::with_capacity(vertex_count);
    let mut p = LngLat::new(116.4074, 39.9042);
    for i in 0..vertex_count {
        route.push(p);
        let bearing = 45.0 + 30.0 * (i as f64 * 0.3).sin();
        p = destination(p, bearing, spacing);
    }
    route
}

/// Anchors every `step` vertices along `route` with chainage equal to the vertex index times
/// `spacing`.
pub fn anchors_every(route: &[LngLat], step: usize, spacing: f64) -> Vec<(LngLat, i32)> {
    route
        .iter()
        .enumerate()
        .step_by(step)
        .map(|(i, p)| (*p, (i as f64 * spacing).round() as i32))
        .collect()
}
