//! Simulation output: one fix per sample.

use posim_core::{GeoPoint, SimTime};

/// One recorded sample of an entity's trajectory.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrajectoryPoint {
    /// Offset from the window start, in the window's native unit.
    pub elapsed:  f64,
    /// `start + elapsed` in the window's time base.
    pub time:     SimTime,
    pub lat:      f64,
    pub lon:      f64,
    /// Longitude heading component after noise.
    pub x:        f64,
    /// Latitude heading component after noise.
    pub y:        f64,
    /// Step bearing derived from `(x, y)`, degrees.
    pub azimuth:  f64,
    /// Cumulative distance travelled up to and including this step.
    pub distance: f64,
}

impl TrajectoryPoint {
    #[inline]
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// The full trajectory of one entity.
///
/// Column accessors return positionally aligned vectors built from the same
/// point list.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrajectoryResult {
    pub name:   String,
    pub points: Vec<TrajectoryPoint>,
}

impl TrajectoryResult {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position after the last step, if any step was taken.
    pub fn final_position(&self) -> Option<GeoPoint> {
        self.points.last().map(TrajectoryPoint::position)
    }

    /// Cumulative distance covered by the whole run.
    pub fn total_distance(&self) -> f64 {
        self.points.last().map_or(0.0, |p| p.distance)
    }

    fn column<T>(&self, f: impl Fn(&TrajectoryPoint) -> T) -> Vec<T> {
        self.points.iter().map(f).collect()
    }

    pub fn elapsed(&self) -> Vec<f64> {
        self.column(|p| p.elapsed)
    }

    pub fn times(&self) -> Vec<SimTime> {
        self.column(|p| p.time)
    }

    pub fn lats(&self) -> Vec<f64> {
        self.column(|p| p.lat)
    }

    pub fn lons(&self) -> Vec<f64> {
        self.column(|p| p.lon)
    }

    pub fn xs(&self) -> Vec<f64> {
        self.column(|p| p.x)
    }

    pub fn ys(&self) -> Vec<f64> {
        self.column(|p| p.y)
    }

    pub fn azimuths(&self) -> Vec<f64> {
        self.column(|p| p.azimuth)
    }
}
