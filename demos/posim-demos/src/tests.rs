//! Scenario-file tests.

use posim_core::{Ellipsoid, SimTime, TimeKind};
use posim_hooks::Velocity;

use crate::scenario::Scenario;

const TRIO: &str = include_str!("../scenarios/trio.json");
const SNOWDON: &str = include_str!("../scenarios/snowdon.json");

#[test]
fn bundled_scenarios_parse() {
    let trio = Scenario::from_json(TRIO).unwrap();
    assert_eq!(trio.entities.len(), 3);
    assert_eq!(trio.config.num_threads, Some(3));
    assert_eq!(trio.window.kind().unwrap(), TimeKind::Calendar);
    assert_eq!(trio.window.sample_count().unwrap(), 256);
    assert_eq!(trio.entities[1].start.unwrap().lat, 0.001);

    let snowdon = Scenario::from_json(SNOWDON).unwrap();
    assert_eq!(snowdon.window.timestep, 30.0);
    assert_eq!(snowdon.window.sample_count().unwrap(), 160);
}

#[test]
fn defaults_fill_missing_fields() {
    let s = Scenario::from_json(r#"{ "window": { "start": 0, "end": 10 }, "entities": [ {} ] }"#).unwrap();
    assert_eq!(s.window.start, SimTime::Numeric(0.0));
    assert_eq!(s.window.timestep, 1.0);
    assert_eq!(s.entities[0].name, "Character");
    assert_eq!(s.entities[0].velocity, Velocity::default());
    assert!(s.output.is_none());
}

#[test]
fn entity_seeds_derive_from_config() {
    let s = Scenario::from_json(TRIO).unwrap();
    let entities = s.entities(&Ellipsoid::wgs84()).unwrap();
    assert_eq!(entities[0].seed, posim_core::EntityRng::derive_seed(2021, 0));
    assert_ne!(entities[0].seed, entities[1].seed);
    assert_eq!(entities[1].start.lat, 0.001);
}

#[test]
fn waypoint_route_starts_on_first_waypoint() {
    let s = Scenario::from_json(SNOWDON).unwrap();
    let entities = s.entities(&Ellipsoid::wgs84()).unwrap();
    assert_eq!(entities[0].seed, 1);
    assert_eq!(entities[0].start.lat, 53.080225);
    assert_eq!(entities[0].start.lon, -4.020847);
}

#[test]
fn invalid_scenarios_are_rejected() {
    // mixed time bases
    assert!(Scenario::from_json(
        r#"{ "window": { "start": "2021-01-01T00:00:00", "end": 5 }, "entities": [] }"#
    )
    .is_err());
    // unknown field
    assert!(Scenario::from_json(
        r#"{ "window": { "start": 0, "end": 5 }, "entities": [ { "speed": 3 } ] }"#
    )
    .is_err());
    // zero threads
    assert!(Scenario::from_json(
        r#"{ "config": { "num_threads": 0 }, "window": { "start": 0, "end": 5 }, "entities": [] }"#
    )
    .is_err());
}

#[test]
fn stop_at_end_requires_route_and_constant_speed() {
    let no_route = Scenario::from_json(
        r#"{ "window": { "start": 0, "end": 5 }, "entities": [ { "stop_at_end": true } ] }"#,
    )
    .unwrap();
    assert!(no_route.entities(&Ellipsoid::wgs84()).is_err());

    let random_speed = Scenario::from_json(
        r#"{ "window": { "start": 0, "end": 5 }, "entities": [ {
              "velocity": { "kind": "random" }, "stop_at_end": true,
              "waypoints": [ { "lat": 0, "lon": 0 }, { "lat": 0.01, "lon": 0 } ] } ] }"#,
    )
    .unwrap();
    assert!(random_speed.entities(&Ellipsoid::wgs84()).is_err());
}
