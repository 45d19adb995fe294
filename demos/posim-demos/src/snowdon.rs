//! snowdon — walk the Pyg Track from Pen-y-Pass to the summit of Snowdon.
//!
//! The waypoint list is converted into a piecewise path; the walker moves
//! at 1 m/s until the route is used up, with multiplicative noise on both
//! heading components.
//!
//! Usage: `snowdon [OUTPUT_CSV]` (default `snowdon.csv`).

use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use posim_convert::build_path;
use posim_core::{Ellipsoid, GeoPoint, TimeWindow};
use posim_hooks::{Noise, Velocity};
use posim_sim::{simulate, Entity};

use posim_demos::{init_tracing, parse_time, print_summary, write_csv};

const WALK_SPEED: f64 = 1.0;
const TIMESTEP_SECS: f64 = 30.0;

const PYG_TRACK: [(f64, f64); 10] = [
    (53.080225, -4.020847),
    (53.078237, -4.040373),
    (53.076977, -4.041660),
    (53.072404, -4.054320),
    (53.072212, -4.061455),
    (53.073733, -4.063547),
    (53.072763, -4.077216),
    (53.073356, -4.076379),
    (53.072724, -4.079641),
    (53.068509, -4.076498),
];

fn main() -> Result<()> {
    init_tracing();
    let output = std::env::args().nth(1).map_or_else(|| PathBuf::from("snowdon.csv"), PathBuf::from);

    let wgs84 = Ellipsoid::wgs84();
    let waypoints: Vec<GeoPoint> = PYG_TRACK.iter().copied().map(GeoPoint::from).collect();
    let route = build_path(&waypoints, &wgs84)?;
    let stop_time = route.path().stop_time(WALK_SPEED);
    info!(
        segments = route.path().segment_count(),
        total_distance = route.total_distance,
        stop_time,
        "route converted"
    );
    println!(
        "Route: {:.0} m over {} segments, {:.0} min at {WALK_SPEED} m/s",
        route.total_distance,
        route.path().segment_count(),
        stop_time / 60.0
    );

    let (lat, lon, _) = route.into_parts();
    let hiker = Entity::builder("hiker")
        .start(waypoints[0])
        .seed(1)
        .velocity(Velocity::StopAfter { velocity: WALK_SPEED, stop_time })
        .paths(lat, lon)
        .noise(Noise::Random { min: 0.0, max: 2.0 })
        .build()?;

    let window = TimeWindow::new(parse_time("01/01/21 00:00:00")?, parse_time("01/01/21 01:20:00")?)
        .with_timestep(TIMESTEP_SECS);
    let result = simulate(&hiker, &window, &wgs84)?;

    print_summary(std::slice::from_ref(&result));
    write_csv(&output, &[result])
}
