//! Unit tests for posim-core primitives.

#[cfg(test)]
mod geo {
    use crate::{Ellipsoid, GeoPoint, Geodesy};

    #[test]
    fn direct_north_moves_latitude_only() {
        let wgs = Ellipsoid::wgs84();
        let p = wgs.direct(GeoPoint::new(0.0, 0.0), 0.0, 1_000.0);
        assert!(p.lat > 0.0089 && p.lat < 0.0091, "got {p}");
        assert!(p.lon.abs() < 1e-12, "got {p}");
    }

    #[test]
    fn inverse_one_degree_of_latitude() {
        // ~110.57 km between 0° and 1° N on WGS-84
        let wgs = Ellipsoid::wgs84();
        let (azi, dist) = wgs.inverse(GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 0.0));
        assert!(azi.abs() < 1e-9, "got {azi}");
        assert!((dist - 110_574.4).abs() < 1.0, "got {dist}");
    }

    #[test]
    fn direct_then_inverse_recovers_step() {
        let wgs = Ellipsoid::wgs84();
        let a = GeoPoint::new(53.08, -4.02);
        let b = wgs.direct(a, 250.0, 1_234.5);
        let (azi, dist) = wgs.inverse(a, b);
        assert!((dist - 1_234.5).abs() < 1e-6, "got {dist}");
        assert!((azi.rem_euclid(360.0) - 250.0).abs() < 1e-9, "got {azi}");
    }

    #[test]
    fn custom_ellipsoid_validation() {
        assert!(Ellipsoid::new(6_371_000.0, 0.0).is_ok());
        assert!(Ellipsoid::new(0.0, 0.0).is_err());
        assert!(Ellipsoid::new(6_371_000.0, 1.0).is_err());
        assert!(Ellipsoid::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn point_validity() {
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
        assert!(!GeoPoint::new(90.5, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
        assert_eq!(GeoPoint::from((1.0, 2.0)), GeoPoint::new(1.0, 2.0));
    }
}

#[cfg(test)]
mod time {
    use chrono::{NaiveDate, NaiveDateTime};

    use crate::{CoreError, SimTime, TimeKind, TimeWindow};

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn exact_multiple_excludes_end() {
        let offsets: Vec<f64> = TimeWindow::numeric(3.0).offsets().unwrap().collect();
        assert_eq!(offsets, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn partial_step_keeps_largest_offset_below_end() {
        let w = TimeWindow::numeric(3.5);
        let offsets: Vec<f64> = w.offsets().unwrap().collect();
        assert_eq!(offsets, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(w.sample_count().unwrap(), 4);
    }

    #[test]
    fn fractional_timestep_count() {
        let w = TimeWindow::numeric(1.0).with_timestep(0.1);
        let offsets: Vec<f64> = w.offsets().unwrap().collect();
        assert_eq!(offsets.len(), 10);
        assert!(offsets.iter().all(|&t| t < 1.0));
        assert_eq!(w.offsets().unwrap().len(), 10);
    }

    #[test]
    fn size_hint_matches_iteration() {
        for (duration, step) in [(10.0, 3.0), (7.0, 0.7), (60.0, 30.0), (1.0, 2.0)] {
            let w = TimeWindow::numeric(duration).with_timestep(step);
            let it = w.offsets().unwrap();
            let hinted = it.len();
            assert_eq!(hinted, it.count(), "T={duration} Δ={step}");
        }
    }

    #[test]
    fn calendar_window_is_measured_in_seconds() {
        let w = TimeWindow::new(at(0, 0, 0), at(0, 1, 0));
        assert_eq!(w.duration().unwrap(), 60.0);
        assert_eq!(w.sample_count().unwrap(), 60);
        assert_eq!(w.with_timestep(30.0).sample_count().unwrap(), 2);
    }

    #[test]
    fn mixed_endpoints_are_a_type_mismatch() {
        let w = TimeWindow::new(at(0, 0, 0), 60.0);
        assert_eq!(
            w.duration(),
            Err(CoreError::TypeMismatch { start: TimeKind::Calendar, end: TimeKind::Numeric })
        );
    }

    #[test]
    fn bad_windows_are_rejected() {
        let invalid = |w: TimeWindow| matches!(w.duration(), Err(CoreError::InvalidTimeWindow(_)));
        assert!(invalid(TimeWindow::numeric(10.0).with_timestep(0.0)));
        assert!(invalid(TimeWindow::numeric(10.0).with_timestep(-1.0)));
        assert!(invalid(TimeWindow::numeric(10.0).with_timestep(f64::NAN)));
        assert!(invalid(TimeWindow::new(5.0, 5.0)));
        assert!(invalid(TimeWindow::new(5.0, 1.0)));
        assert!(invalid(TimeWindow::new(0.0, f64::INFINITY)));
        assert!(invalid(TimeWindow::new(at(1, 0, 0), at(0, 0, 0))));
    }

    #[test]
    fn unrepresentable_sample_counts_are_rejected() {
        let invalid = |w: TimeWindow| matches!(w.offsets(), Err(CoreError::InvalidTimeWindow(_)));
        assert!(invalid(TimeWindow::numeric(1.0e6).with_timestep(1.0e-12)));
        assert!(invalid(TimeWindow::numeric(1.0e300).with_timestep(1.0e-300)));
        assert!(invalid(TimeWindow::numeric(f64::MAX).with_timestep(f64::MIN_POSITIVE)));
        assert_eq!(TimeWindow::numeric(1.0e6).with_timestep(0.5).sample_count().unwrap(), 2_000_000);
    }

    #[test]
    fn offsets_in_each_base() {
        assert_eq!(SimTime::Numeric(10.0).offset(2.5).unwrap(), SimTime::Numeric(12.5));

        let t = SimTime::Calendar(at(0, 0, 0)).offset(61.5).unwrap();
        let expected = at(0, 1, 1) + chrono::TimeDelta::milliseconds(500);
        assert_eq!(t, SimTime::Calendar(expected));
    }

    #[test]
    fn display() {
        assert_eq!(SimTime::Calendar(at(0, 0, 30)).to_string(), "2000-01-01 00:00:30");
        assert_eq!(SimTime::Numeric(1.5).to_string(), "1.5");
        assert_eq!(TimeKind::Calendar.to_string(), "calendar");
    }
}

#[cfg(test)]
mod rng {
    use crate::EntityRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = EntityRng::new(12345);
        let mut r2 = EntityRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.uniform(0.0, 1.0), r2.uniform(0.0, 1.0));
        }
    }

    #[test]
    fn different_entities_differ() {
        let mut r0 = EntityRng::new(EntityRng::derive_seed(1, 0));
        let mut r1 = EntityRng::new(EntityRng::derive_seed(1, 1));
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b, "seeds for adjacent entities should diverge");
    }

    #[test]
    fn uniform_in_bounds() {
        let mut rng = EntityRng::new(0);
        for _ in 0..1000 {
            let v = rng.uniform(0.5, 1.5);
            assert!((0.5..1.5).contains(&v));
        }
    }

    #[test]
    fn uniform_degenerate_range() {
        let mut rng = EntityRng::new(0);
        assert_eq!(rng.uniform(2.0, 2.0), 2.0);
        let v = rng.uniform(3.0, 1.0);
        assert!(v > 1.0 && v <= 3.0);
    }
}

#[cfg(test)]
mod config {
    use crate::SimConfig;

    #[test]
    fn default_is_wgs84() {
        let cfg = SimConfig::default();
        assert!(cfg.validate().is_ok());
        let e = cfg.ellipsoid().unwrap();
        assert_eq!(e.semi_major_axis(), 6_378_137.0);
    }

    #[test]
    fn zero_threads_rejected() {
        let cfg = SimConfig { num_threads: Some(0), ..SimConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
