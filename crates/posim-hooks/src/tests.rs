//! Unit tests for the built-in hook library.

use posim_core::EntityRng;

fn rng() -> EntityRng {
    EntityRng::new(7)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[cfg(test)]
mod velocity_tests {
    use super::*;
    use crate::{HookResult, Velocity, VelocityFn};

    #[test]
    fn default_is_unit_speed() {
        assert_eq!(Velocity::default().velocity(12.0, &mut rng()).unwrap(), 1.0);
    }

    #[test]
    fn stationary_and_constant() {
        let mut r = rng();
        assert_eq!(Velocity::Stationary.velocity(0.0, &mut r).unwrap(), 0.0);
        assert_eq!(Velocity::constant(2.5).velocity(99.0, &mut r).unwrap(), 2.5);
    }

    #[test]
    fn random_uses_default_bounds() {
        let mut r = rng();
        let v = Velocity::random();
        for t in 0..500 {
            let s = v.velocity(t as f64, &mut r).unwrap();
            assert!((0.1..1.0).contains(&s), "got {s}");
        }
    }

    #[test]
    fn random_is_reproducible_per_seed() {
        let v = Velocity::Random { min: 0.0, max: 10.0 };
        let (mut a, mut b) = (EntityRng::new(3), EntityRng::new(3));
        for t in 0..20 {
            let t = t as f64;
            assert_eq!(v.velocity(t, &mut a).unwrap(), v.velocity(t, &mut b).unwrap());
        }
    }

    #[test]
    fn random_accepts_inverted_bounds() {
        let mut r = rng();
        for t in 0..200 {
            let s = Velocity::Random { min: 2.0, max: 1.0 }.velocity(t as f64, &mut r).unwrap();
            assert!(s > 1.0 && s <= 2.0, "got {s}");
        }
    }

    #[test]
    fn stop_after_halts_at_stop_time() {
        let v = Velocity::StopAfter { velocity: 1.5, stop_time: 10.0 };
        let mut r = rng();
        assert_eq!(v.velocity(9.9, &mut r).unwrap(), 1.5);
        assert_eq!(v.velocity(10.0, &mut r).unwrap(), 0.0);
        assert_eq!(v.velocity(30.0, &mut r).unwrap(), 0.0);
    }

    #[test]
    fn closures_are_velocity_hooks() {
        let hook = |t: f64, _: &mut EntityRng| -> HookResult<f64> { Ok(t * 2.0) };
        assert_eq!(hook.velocity(4.0, &mut rng()).unwrap(), 8.0);
    }
}

#[cfg(test)]
mod path_tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;
    use crate::{ellipse_perimeter, Axis, HookError, Path, PathFn};

    #[test]
    fn simple_shapes() {
        let mut r = rng();
        assert_eq!(Path::default().heading(3.5, &mut r).unwrap(), 3.5);
        assert_eq!(Path::Stationary.heading(3.5, &mut r).unwrap(), 0.0);
        assert_eq!(Path::power().heading(3.0, &mut r).unwrap(), 9.0);
        assert_eq!(Path::Power { power: 3.0 }.heading(2.0, &mut r).unwrap(), 8.0);
        assert!(close(Path::Sine.heading(FRAC_PI_2, &mut r).unwrap(), 1.0));
        assert!(close(Path::Cosine.heading(PI, &mut r).unwrap(), -1.0));
        assert!(close(Path::Tan.heading(PI / 4.0, &mut r).unwrap(), 1.0));
    }

    #[test]
    fn random_defaults_to_full_turn() {
        let mut r = rng();
        for _ in 0..500 {
            let v = Path::random().heading(0.0, &mut r).unwrap();
            assert!((0.0..std::f64::consts::TAU).contains(&v));
        }
    }

    #[test]
    fn linear_pair_components() {
        let mut r = rng();
        let (lat, lon) = Path::linear_pair(90.0);
        assert!(close(lat.heading(10.0, &mut r).unwrap(), 0.0));
        assert!(close(lon.heading(10.0, &mut r).unwrap(), 10.0));

        let (lat, lon) = Path::linear_pair(45.0);
        let (y, x) = (lat.heading(2.0, &mut r).unwrap(), lon.heading(2.0, &mut r).unwrap());
        assert!(close(x, y));
        assert!(close(x, 2.0 * std::f64::consts::FRAC_1_SQRT_2));
    }

    #[test]
    fn meandering_picks_split_range() {
        let mut r = rng();
        let make = |axis| Path::Meandering {
            axis,
            splits: vec![0.0, 10.0, 20.0],
            azimuths_deg: vec![0.0, 90.0],
        };
        let (lat, lon) = (make(Axis::Lat), make(Axis::Lon));

        // first range heads north
        assert!(close(lat.heading(5.0, &mut r).unwrap(), 5.0));
        assert!(close(lon.heading(5.0, &mut r).unwrap(), 0.0));
        // split boundary belongs to the later range
        assert!(close(lat.heading(10.0, &mut r).unwrap(), 0.0));
        assert!(close(lon.heading(10.0, &mut r).unwrap(), 10.0));
        // outside every range falls back to 45°
        let y = lat.heading(25.0, &mut r).unwrap();
        let x = lon.heading(25.0, &mut r).unwrap();
        assert!(close(x, y));
    }

    #[test]
    fn meandering_rejects_missing_azimuths() {
        let p = Path::Meandering {
            axis: Axis::Lat,
            splits: vec![0.0, 1.0, 2.0, 3.0],
            azimuths_deg: vec![0.0],
        };
        assert!(matches!(p.heading(0.5, &mut rng()), Err(HookError::InvalidParams(_))));
    }

    #[test]
    fn circle_components() {
        let mut r = rng();
        let lat = Path::Circle { axis: Axis::Lat, radius: 2.0 };
        let lon = Path::Circle { axis: Axis::Lon, radius: 2.0 };
        assert!(close(lat.heading(0.0, &mut r).unwrap(), 2.0));
        assert!(close(lon.heading(PI, &mut r).unwrap(), 2.0));
        assert!(matches!(
            Path::Circle { axis: Axis::Lat, radius: 0.0 }.heading(1.0, &mut r),
            Err(HookError::InvalidParams(_))
        ));
    }

    #[test]
    fn perimeter_of_circle_is_exact() {
        assert!(close(ellipse_perimeter(1.0, 1.0), 2.0 * PI));
        // 10 × 5 ellipse, reference value 48.4422
        assert!((ellipse_perimeter(10.0, 5.0) - 48.4422).abs() < 1e-3);
    }

    #[test]
    fn ellipse_quarter_lap() {
        let mut r = rng();
        let quarter = ellipse_perimeter(4.0, 2.0) / 4.0;
        let lat = Path::Ellipse { axis: Axis::Lat, major: 4.0, minor: 2.0 };
        let lon = Path::Ellipse { axis: Axis::Lon, major: 4.0, minor: 2.0 };
        assert!(close(lat.heading(0.0, &mut r).unwrap(), 0.0));
        assert!(close(lon.heading(0.0, &mut r).unwrap(), 2.0));
        assert!(close(lat.heading(quarter, &mut r).unwrap(), 4.0));
        assert!(close(lon.heading(quarter, &mut r).unwrap(), 0.0));
        assert!(Path::Ellipse { axis: Axis::Lat, major: 0.0, minor: 0.0 }
            .heading(1.0, &mut r)
            .is_err());
    }

    #[test]
    fn ellipse_rejects_a_negative_semi_axis() {
        let mut r = rng();
        for (major, minor) in [(-1.0, 2.0), (2.0, -1.0), (f64::NAN, 1.0)] {
            let err = Path::Ellipse { axis: Axis::Lon, major, minor }.heading(1.0, &mut r).unwrap_err();
            assert!(matches!(err, HookError::InvalidParams(_)), "{major}, {minor}");
        }
        assert!(Path::Ellipse { axis: Axis::Lat, major: 3.0, minor: 0.0 }.heading(1.0, &mut r).is_ok());
        let (lat, _) = Path::rotated_ellipse_pair((0.0, 0.0), 10.0, -1.0, 2.0);
        assert!(lat.heading(1.0, &mut r).is_err());
    }

    #[test]
    fn random_accepts_inverted_bounds() {
        let mut r = rng();
        for _ in 0..200 {
            let v = Path::Random { min: 5.0, max: 0.0 }.heading(1.0, &mut r).unwrap();
            assert!(v > 0.0 && v <= 5.0, "got {v}");
        }
    }

    #[test]
    fn unrotated_ellipse_matches_plain_ellipse() {
        let mut r = rng();
        let (rot_lat, rot_lon) = Path::rotated_ellipse_pair((0.0, 0.0), 0.0, 30.0, 10.0);
        let lat = Path::Ellipse { axis: Axis::Lat, major: 30.0, minor: 10.0 };
        let lon = Path::Ellipse { axis: Axis::Lon, major: 30.0, minor: 10.0 };
        for d in [0.0, 7.5, 33.0, 120.0] {
            assert!(close(rot_lat.heading(d, &mut r).unwrap(), lat.heading(d, &mut r).unwrap()));
            assert!(close(rot_lon.heading(d, &mut r).unwrap(), lon.heading(d, &mut r).unwrap()));
        }
    }

    #[test]
    fn rotation_preserves_radius() {
        let mut r = rng();
        let (lat, lon) = Path::rotated_ellipse_pair((0.0, 0.0), 37.0, 30.0, 10.0);
        let plain_lat = Path::Ellipse { axis: Axis::Lat, major: 30.0, minor: 10.0 };
        let plain_lon = Path::Ellipse { axis: Axis::Lon, major: 30.0, minor: 10.0 };
        for d in [3.0, 41.0, 90.0] {
            let (y, x) = (lat.heading(d, &mut r).unwrap(), lon.heading(d, &mut r).unwrap());
            let (py, px) = (plain_lat.heading(d, &mut r).unwrap(), plain_lon.heading(d, &mut r).unwrap());
            assert!(close(x.hypot(y), px.hypot(py)));
        }
    }
}

#[cfg(test)]
mod noise_tests {
    use super::*;
    use crate::{Noise, NoiseFn};

    #[test]
    fn none_is_identity() {
        assert_eq!(Noise::default().apply(-3.25, &mut rng()).unwrap(), -3.25);
    }

    #[test]
    fn random_scales_within_bounds() {
        let mut r = rng();
        for _ in 0..500 {
            let v = Noise::random().apply(2.0, &mut r).unwrap();
            assert!((1.0..3.0).contains(&v), "got {v}");
        }
    }

    #[test]
    fn random_accepts_inverted_bounds() {
        let mut r = rng();
        for _ in 0..200 {
            let v = Noise::Random { min: 1.5, max: 0.5 }.apply(2.0, &mut r).unwrap();
            assert!(v > 1.0 && v <= 3.0, "got {v}");
        }
    }

    #[test]
    fn drift_shifts() {
        let mut r = rng();
        assert!(close(Noise::drift().apply(1.0, &mut r).unwrap(), 1.1));
        assert!(close(Noise::Drift { shift: -2.0 }.apply(1.0, &mut r).unwrap(), -1.0));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use crate::{Axis, Noise, Path, Velocity};

    #[test]
    fn missing_fields_take_defaults() {
        let v: Velocity = serde_json::from_str(r#"{"kind":"random"}"#).unwrap();
        assert_eq!(v, Velocity::random());
        let p: Path = serde_json::from_str(r#"{"kind":"linear","axis":"lat"}"#).unwrap();
        assert_eq!(p, Path::linear(Axis::Lat, 45.0));
        let n: Noise = serde_json::from_str(r#"{"kind":"drift"}"#).unwrap();
        assert_eq!(n, Noise::drift());
    }
}
