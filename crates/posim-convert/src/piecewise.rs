//! Piecewise-linear path functions built from waypoint polylines.
//!
//! # Data layout
//!
//! A path over `n + 1` waypoints has `n` segments stored as two parallel
//! arrays, in the style of a CSR row pointer:
//!
//! ```text
//! breakpoints:  [ d_0 = 0, d_1, d_2, …, d_n ]     (length n + 1)
//! azimuths:     [ a_0,     a_1, …, a_{n-1}  ]     (length n)
//! ```
//!
//! Segment `i` covers cumulative distance `[d_i, d_{i+1})` and heads along
//! azimuth `a_i`.  The final segment is closed at `d_n`.  Breakpoints are
//! non-decreasing, so lookup is a binary search; because the ranges are
//! half-open, a distance equal to an interior breakpoint always selects the
//! segment that *starts* there, and a zero-length segment never matches.
//! A distance a few ulps past `d_n` (left over from summing steps) still
//! counts as `d_n`.

use std::sync::Arc;

use tracing::{debug, trace};

use posim_core::{EntityRng, GeoPoint, Geodesy};
use posim_hooks::{Axis, HookResult, PathFn};

use crate::{ConvertError, ConvertResult};

/// Relative slack on the final breakpoint, in units of `f64::EPSILON`.
const END_SLACK_ULPS: f64 = 64.0;

/// One straight stretch of a [`PiecewisePath`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    /// Cumulative distance at which the segment starts.
    pub start: f64,
    /// Cumulative distance at which the segment ends.
    pub end: f64,
    /// Initial geodesic azimuth of the segment, degrees clockwise from north.
    pub azimuth_deg: f64,
}

impl Segment {
    #[inline]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }
}

// ── PiecewisePath ─────────────────────────────────────────────────────────────

/// Breakpoint table mapping cumulative distance to a segment azimuth.
///
/// Immutable once built.  Construct with [`build_path`] or
/// [`PiecewisePath::from_waypoints`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PiecewisePath {
    breakpoints:  Vec<f64>,
    azimuths_deg: Vec<f64>,
}

impl PiecewisePath {
    /// Measure every consecutive waypoint pair with the inverse geodesic.
    ///
    /// # Errors
    /// - [`ConvertError::TooFewWaypoints`] for fewer than two waypoints;
    /// - [`ConvertError::InvalidWaypoint`] for a non-finite coordinate or a
    ///   latitude outside `[-90, 90]`.
    pub fn from_waypoints<G>(waypoints: &[GeoPoint], geodesy: &G) -> ConvertResult<Self>
    where
        G: Geodesy + ?Sized,
    {
        if waypoints.len() < 2 {
            return Err(ConvertError::TooFewWaypoints(waypoints.len()));
        }
        if let Some((index, &point)) = waypoints.iter().enumerate().find(|(_, p)| !p.is_valid()) {
            return Err(ConvertError::InvalidWaypoint { index, point });
        }

        let segments = waypoints.len() - 1;
        let mut breakpoints = Vec::with_capacity(segments + 1);
        let mut azimuths_deg = Vec::with_capacity(segments);

        let mut total = 0.0;
        breakpoints.push(total);
        for (i, pair) in waypoints.windows(2).enumerate() {
            let (azimuth, distance) = geodesy.inverse(pair[0], pair[1]);
            total += distance;
            trace!(segment = i, azimuth, distance, cumulative = total, "path segment");
            breakpoints.push(total);
            azimuths_deg.push(azimuth);
        }

        debug!(waypoints = waypoints.len(), total_distance = total, "built piecewise path");
        Ok(Self { breakpoints, azimuths_deg })
    }

    /// Sum of all segment lengths.
    #[inline]
    pub fn total_distance(&self) -> f64 {
        self.breakpoints.last().copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.azimuths_deg.len()
    }

    /// Cumulative-distance breakpoints `[0, d_1, …, d_n]`.
    #[inline]
    pub fn breakpoints(&self) -> &[f64] {
        &self.breakpoints
    }

    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.breakpoints
            .windows(2)
            .zip(&self.azimuths_deg)
            .map(|(b, &azimuth_deg)| Segment { start: b[0], end: b[1], azimuth_deg })
    }

    /// Index of the segment containing cumulative distance `d`.
    ///
    /// `None` before the start (negative or NaN `d`) and beyond the last
    /// breakpoint.  At `d_n`, or within rounding distance above it, the last
    /// non-empty segment is chosen.
    pub fn segment_index(&self, d: f64) -> Option<usize> {
        let n = self.segment_count();
        let total = self.total_distance();
        if n == 0 || !(d >= 0.0) || d > total * (1.0 + END_SLACK_ULPS * f64::EPSILON) {
            return None;
        }
        if d >= total {
            let last = (0..n)
                .rev()
                .find(|&i| self.breakpoints[i + 1] > self.breakpoints[i])
                .unwrap_or(n - 1);
            return Some(last);
        }
        // d_0 = 0 <= d < d_n, so 1 <= idx <= n.
        let idx = self.breakpoints.partition_point(|&b| b <= d);
        Some(idx - 1)
    }

    pub fn segment_at(&self, d: f64) -> Option<Segment> {
        self.segment_index(d).map(|i| Segment {
            start:       self.breakpoints[i],
            end:         self.breakpoints[i + 1],
            azimuth_deg: self.azimuths_deg[i],
        })
    }

    #[inline]
    pub fn azimuth_at(&self, d: f64) -> Option<f64> {
        self.segment_index(d).map(|i| self.azimuths_deg[i])
    }

    /// Heading component of the path on `axis` at cumulative distance `d`.
    ///
    /// `d · cos(a)` for latitude and `d · sin(a)` for longitude, where `a`
    /// is the azimuth of the segment containing `d`.  Beyond the end of the
    /// path both components are `0.0`.
    pub fn value(&self, d: f64, axis: Axis) -> f64 {
        match self.azimuth_at(d) {
            Some(azimuth) => d * axis.component(azimuth),
            None => 0.0,
        }
    }

    /// Time needed to cover the whole path at a constant `speed`.
    ///
    /// Feed the result to `Velocity::StopAfter` so the entity halts on the
    /// final waypoint.
    pub fn stop_time(&self, speed: f64) -> f64 {
        self.total_distance() / speed
    }

    /// A path-function view of one axis.
    pub fn axis(self: &Arc<Self>, axis: Axis) -> PiecewiseAxis {
        PiecewiseAxis { path: Arc::clone(self), axis }
    }
}

// ── PiecewiseAxis ─────────────────────────────────────────────────────────────

/// One axis of a shared [`PiecewisePath`], usable as an entity's path hook.
#[derive(Clone, Debug)]
pub struct PiecewiseAxis {
    path: Arc<PiecewisePath>,
    axis: Axis,
}

impl PiecewiseAxis {
    #[inline]
    pub fn path(&self) -> &PiecewisePath {
        &self.path
    }

    #[inline]
    pub fn axis_kind(&self) -> Axis {
        self.axis
    }
}

impl PathFn for PiecewiseAxis {
    #[inline]
    fn heading(&self, d: f64, _rng: &mut EntityRng) -> HookResult<f64> {
        Ok(self.path.value(d, self.axis))
    }
}

// ── build_path ────────────────────────────────────────────────────────────────

/// Output of [`build_path`]: latitude and longitude path hooks over the same
/// breakpoint table, plus the total path length.
#[derive(Clone, Debug)]
pub struct BuiltPath {
    pub lat: PiecewiseAxis,
    pub lon: PiecewiseAxis,
    pub total_distance: f64,
}

impl BuiltPath {
    /// The shared breakpoint table.
    pub fn path(&self) -> &PiecewisePath {
        self.lat.path()
    }

    pub fn into_parts(self) -> (PiecewiseAxis, PiecewiseAxis, f64) {
        (self.lat, self.lon, self.total_distance)
    }
}

/// Convert an ordered list of waypoints into a pair of path functions.
///
/// See [`PiecewisePath::from_waypoints`] for the error cases.
pub fn build_path<G>(waypoints: &[GeoPoint], geodesy: &G) -> ConvertResult<BuiltPath>
where
    G: Geodesy + ?Sized,
{
    let path = Arc::new(PiecewisePath::from_waypoints(waypoints, geodesy)?);
    Ok(BuiltPath {
        total_distance: path.total_distance(),
        lat:            path.axis(Axis::Lat),
        lon:            path.axis(Axis::Lon),
    })
}
