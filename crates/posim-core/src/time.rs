//! Simulation time model.
//!
//! # Design
//!
//! A run covers a half-open window `[start, end)` sampled every `timestep`.
//! The window is expressed in one of two time bases:
//!
//! - **calendar**: `chrono::NaiveDateTime` endpoints; elapsed time and the
//!   timestep are measured in seconds;
//! - **numeric**: plain `f64` endpoints in whatever unit the caller chose.
//!
//! Both endpoints must use the same base.  Sample offsets are generated as
//! `i * timestep` rather than by repeated addition so long runs do not drift.

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};

use crate::{CoreError, CoreResult};

// ── SimTime ───────────────────────────────────────────────────────────────────

/// The time base of a [`SimTime`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimeKind {
    Calendar,
    Numeric,
}

impl fmt::Display for TimeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TimeKind::Calendar => "calendar",
            TimeKind::Numeric  => "numeric",
        })
    }
}

/// A point in simulated time.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SimTime {
    Calendar(NaiveDateTime),
    Numeric(f64),
}

impl SimTime {
    #[inline]
    pub fn kind(&self) -> TimeKind {
        match self {
            SimTime::Calendar(_) => TimeKind::Calendar,
            SimTime::Numeric(_)  => TimeKind::Numeric,
        }
    }

    /// The time `elapsed` units after `self` (seconds for calendar time).
    ///
    /// Calendar offsets are rounded to the microsecond.
    pub fn offset(self, elapsed: f64) -> CoreResult<SimTime> {
        match self {
            SimTime::Numeric(t) => Ok(SimTime::Numeric(t + elapsed)),
            SimTime::Calendar(dt) => {
                let micros = (elapsed * 1e6).round();
                if !micros.is_finite() || micros.abs() > i64::MAX as f64 {
                    return Err(CoreError::InvalidTimeWindow(format!(
                        "offset of {elapsed} s cannot be represented"
                    )));
                }
                dt.checked_add_signed(TimeDelta::microseconds(micros as i64))
                    .map(SimTime::Calendar)
                    .ok_or_else(|| {
                        CoreError::InvalidTimeWindow(format!(
                            "{dt} + {elapsed} s is out of the calendar range"
                        ))
                    })
            }
        }
    }
}

impl From<NaiveDateTime> for SimTime {
    fn from(dt: NaiveDateTime) -> Self {
        SimTime::Calendar(dt)
    }
}

impl From<f64> for SimTime {
    fn from(t: f64) -> Self {
        SimTime::Numeric(t)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimTime::Calendar(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S%.f")),
            SimTime::Numeric(t)   => write!(f, "{t}"),
        }
    }
}

// ── TimeWindow ────────────────────────────────────────────────────────────────

/// The sampled interval `[start, end)` of a run.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeWindow {
    pub start: SimTime,
    pub end: SimTime,
    /// Step between samples, in the window's native unit.  Default: 1.
    #[cfg_attr(feature = "serde", serde(default = "TimeWindow::default_timestep"))]
    pub timestep: f64,
}

impl TimeWindow {
    pub const DEFAULT_TIMESTEP: f64 = 1.0;

    /// Largest sample count a window may produce: offsets `i * Δ` stay
    /// exact in the integer part of an `f64` below this.
    pub const MAX_SAMPLES: u64 = 1 << 53;

    /// A window with the default timestep of one unit.
    pub fn new(start: impl Into<SimTime>, end: impl Into<SimTime>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            timestep: Self::DEFAULT_TIMESTEP,
        }
    }

    /// Numeric window `[0, duration)`.
    pub fn numeric(duration: f64) -> Self {
        Self::new(0.0, duration)
    }

    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }

    #[cfg(feature = "serde")]
    fn default_timestep() -> f64 {
        Self::DEFAULT_TIMESTEP
    }

    /// The time base shared by both endpoints.
    pub fn kind(&self) -> CoreResult<TimeKind> {
        let (start, end) = (self.start.kind(), self.end.kind());
        if start != end {
            return Err(CoreError::TypeMismatch { start, end });
        }
        Ok(start)
    }

    /// Check the window and return its total duration `T`.
    ///
    /// # Errors
    /// - [`CoreError::TypeMismatch`] if the endpoints use different bases;
    /// - [`CoreError::InvalidTimeWindow`] if the timestep is not a positive
    ///   finite number, a numeric endpoint is not finite, `end <= start`, or
    ///   `T / Δ` exceeds [`TimeWindow::MAX_SAMPLES`].
    pub fn duration(&self) -> CoreResult<f64> {
        self.kind()?;

        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(CoreError::InvalidTimeWindow(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }

        let duration = match (self.start, self.end) {
            (SimTime::Numeric(start), SimTime::Numeric(end)) => {
                if !(start.is_finite() && end.is_finite()) {
                    return Err(CoreError::InvalidTimeWindow(format!(
                        "numeric endpoints must be finite, got [{start}, {end})"
                    )));
                }
                end - start
            }
            (SimTime::Calendar(start), SimTime::Calendar(end)) => {
                let delta = end - start;
                match delta.num_microseconds() {
                    Some(us) => us as f64 / 1e6,
                    None     => delta.num_seconds() as f64,
                }
            }
            (start, end) => {
                return Err(CoreError::TypeMismatch { start: start.kind(), end: end.kind() });
            }
        };

        if duration <= 0.0 {
            return Err(CoreError::InvalidTimeWindow(format!(
                "end {} is not after start {}",
                self.end, self.start
            )));
        }
        if !(duration / self.timestep < Self::MAX_SAMPLES as f64) {
            return Err(CoreError::InvalidTimeWindow(format!(
                "{duration} / {} yields more than {} samples",
                self.timestep,
                Self::MAX_SAMPLES
            )));
        }
        Ok(duration)
    }

    /// Iterator over sample offsets `0, Δ, 2Δ, …` strictly below `T`.
    pub fn offsets(&self) -> CoreResult<SampleOffsets> {
        let duration = self.duration()?;
        Ok(SampleOffsets {
            timestep: self.timestep,
            duration,
            index: 0,
        })
    }

    /// Number of samples the window produces.
    pub fn sample_count(&self) -> CoreResult<usize> {
        Ok(self.offsets()?.len())
    }
}

// ── SampleOffsets ─────────────────────────────────────────────────────────────

/// Elapsed-time offsets of a [`TimeWindow`], from 0 up to but excluding `T`.
#[derive(Clone, Debug)]
pub struct SampleOffsets {
    timestep: f64,
    duration: f64,
    index:    u64,
}

impl SampleOffsets {
    fn offset_at(&self, index: u64) -> f64 {
        index as f64 * self.timestep
    }
}

impl Iterator for SampleOffsets {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        let t = self.offset_at(self.index);
        if t < self.duration {
            self.index += 1;
            Some(t)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // ceil() can overshoot by one when T/Δ rounds up past an exact
        // multiple; walk back until the last offset is strictly below T.
        // `as` saturates, and the window check bounds the ratio anyway.
        let mut total = (self.duration / self.timestep).ceil() as u64;
        while total > 0 && self.offset_at(total - 1) >= self.duration {
            total -= 1;
        }
        while self.offset_at(total) < self.duration {
            match total.checked_add(1) {
                Some(next) => total = next,
                None => break,
            }
        }
        let remaining = usize::try_from(total.saturating_sub(self.index)).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SampleOffsets {}
