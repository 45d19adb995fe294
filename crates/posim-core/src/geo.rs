//! Geographic coordinates and the ellipsoidal geodesy primitive.
//!
//! `GeoPoint` stores latitude/longitude in `f64` degrees.  Trajectories are
//! built from thousands of small geodesic steps, so single precision would
//! accumulate visible drift over a long run.
//!
//! The direct/inverse geodesic problems are solved by `geographiclib-rs`;
//! everything else in the workspace reaches them through the [`Geodesy`]
//! trait so tests can substitute a flat or recording implementation.

use std::fmt;

use geographiclib_rs::{DirectGeodesic, Geodesic, InverseGeodesic};

use crate::{CoreError, CoreResult};

/// A geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// `true` if both ordinates are finite and latitude lies in `[-90, 90]`.
    pub fn is_valid(self) -> bool {
        self.lat.is_finite() && self.lon.is_finite() && self.lat.abs() <= 90.0
    }
}

impl From<(f64, f64)> for GeoPoint {
    #[inline]
    fn from((lat, lon): (f64, f64)) -> Self {
        Self { lat, lon }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

// ── Geodesy ───────────────────────────────────────────────────────────────────

/// The two geodesic problems on a fixed reference ellipsoid.
///
/// Implementations must be pure: the same inputs always give the same
/// outputs, and a shared reference may be used from many threads at once.
pub trait Geodesy: Send + Sync {
    /// Destination reached by travelling `distance` metres from `from` along
    /// the initial azimuth `azimuth_deg` (clockwise from north).
    fn direct(&self, from: GeoPoint, azimuth_deg: f64, distance: f64) -> GeoPoint;

    /// Initial azimuth (degrees) and distance (metres) of the geodesic from
    /// `from` to `to`.
    fn inverse(&self, from: GeoPoint, to: GeoPoint) -> (f64, f64);
}

// ── Ellipsoid ─────────────────────────────────────────────────────────────────

/// A reference ellipsoid (semi-major axis and flattening).
///
/// Read-only after construction; share one instance by reference across all
/// concurrent entity runs.
pub struct Ellipsoid {
    semi_major_axis: f64,
    flattening:      f64,
    geodesic:        Geodesic,
}

impl Ellipsoid {
    /// WGS-84 semi-major axis in metres.
    pub const WGS84_A: f64 = 6_378_137.0;
    /// WGS-84 flattening.
    pub const WGS84_F: f64 = 1.0 / 298.257_223_563;

    /// The WGS-84 datum.
    pub fn wgs84() -> Self {
        Self {
            semi_major_axis: Self::WGS84_A,
            flattening:      Self::WGS84_F,
            geodesic:        Geodesic::wgs84(),
        }
    }

    /// A custom ellipsoid.
    ///
    /// Returns [`CoreError::Config`] unless `semi_major_axis > 0` and
    /// `0 <= flattening < 1`.
    pub fn new(semi_major_axis: f64, flattening: f64) -> CoreResult<Self> {
        if !(semi_major_axis.is_finite() && semi_major_axis > 0.0) {
            return Err(CoreError::Config(format!(
                "semi-major axis must be positive, got {semi_major_axis}"
            )));
        }
        if !(flattening.is_finite() && (0.0..1.0).contains(&flattening)) {
            return Err(CoreError::Config(format!(
                "flattening must lie in [0, 1), got {flattening}"
            )));
        }
        Ok(Self {
            semi_major_axis,
            flattening,
            geodesic: Geodesic::new(semi_major_axis, flattening),
        })
    }

    #[inline]
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    #[inline]
    pub fn flattening(&self) -> f64 {
        self.flattening
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::wgs84()
    }
}

impl Clone for Ellipsoid {
    fn clone(&self) -> Self {
        Self {
            semi_major_axis: self.semi_major_axis,
            flattening:      self.flattening,
            geodesic:        Geodesic::new(self.semi_major_axis, self.flattening),
        }
    }
}

impl fmt::Debug for Ellipsoid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ellipsoid")
            .field("semi_major_axis", &self.semi_major_axis)
            .field("flattening", &self.flattening)
            .finish()
    }
}

impl Geodesy for Ellipsoid {
    fn direct(&self, from: GeoPoint, azimuth_deg: f64, distance: f64) -> GeoPoint {
        let (lat, lon): (f64, f64) =
            self.geodesic.direct(from.lat, from.lon, azimuth_deg, distance);
        GeoPoint { lat, lon }
    }

    fn inverse(&self, from: GeoPoint, to: GeoPoint) -> (f64, f64) {
        let (s12, azi1, _azi2, _a12): (f64, f64, f64, f64) =
            self.geodesic.inverse(from.lat, from.lon, to.lat, to.lon);
        (azi1, s12)
    }
}
