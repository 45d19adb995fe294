//! Plain data row types written by output backends.

use posim_core::SimTime;
use posim_sim::{TrajectoryPoint, TrajectoryResult};

/// One trajectory point flattened for tabular output.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryRow<'a> {
    pub name:     &'a str,
    pub time:     SimTime,
    pub elapsed:  f64,
    pub lat:      f64,
    pub lon:      f64,
    pub y:        f64,
    pub x:        f64,
    pub azimuth:  f64,
    pub distance: f64,
}

impl<'a> TrajectoryRow<'a> {
    pub const HEADER: [&'static str; 9] =
        ["name", "time", "elapsed", "lat", "lon", "y", "x", "azimuth", "distance"];

    pub fn new(name: &'a str, p: &TrajectoryPoint) -> Self {
        Self {
            name,
            time:     p.time,
            elapsed:  p.elapsed,
            lat:      p.lat,
            lon:      p.lon,
            y:        p.y,
            x:        p.x,
            azimuth:  p.azimuth,
            distance: p.distance,
        }
    }

    pub fn to_record(&self) -> [String; 9] {
        [
            self.name.to_owned(),
            self.time.to_string(),
            self.elapsed.to_string(),
            self.lat.to_string(),
            self.lon.to_string(),
            self.y.to_string(),
            self.x.to_string(),
            self.azimuth.to_string(),
            self.distance.to_string(),
        ]
    }
}

/// A trajectory point projected onto the unit sphere, each axis min-max
/// normalized over the whole trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereRow {
    pub time: SimTime,
    pub x:    f64,
    pub y:    f64,
    pub z:    f64,
}

/// Project every fix of `result` onto the unit sphere and rescale each
/// Cartesian axis to `[0, 1]`.
///
/// An axis with no spread (all values equal) maps to `0.0`.
pub fn unit_sphere_rows(result: &TrajectoryResult) -> Vec<SphereRow> {
    let cartesian: Vec<[f64; 3]> = result
        .points
        .iter()
        .map(|p| {
            let (lat, lon) = (p.lat.to_radians(), p.lon.to_radians());
            [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
        })
        .collect();

    let mut lo = [f64::INFINITY; 3];
    let mut hi = [f64::NEG_INFINITY; 3];
    for v in &cartesian {
        for k in 0..3 {
            lo[k] = lo[k].min(v[k]);
            hi[k] = hi[k].max(v[k]);
        }
    }
    let scale = |k: usize, v: f64| {
        let span = hi[k] - lo[k];
        if span > 0.0 { (v - lo[k]) / span } else { 0.0 }
    };

    result
        .points
        .iter()
        .zip(&cartesian)
        .map(|(p, v)| SphereRow {
            time: p.time,
            x:    scale(0, v[0]),
            y:    scale(1, v[1]),
            z:    scale(2, v[2]),
        })
        .collect()
}
