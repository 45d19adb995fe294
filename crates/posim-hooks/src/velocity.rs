//! Built-in velocity functions.

use posim_core::EntityRng;

use crate::{HookResult, VelocityFn};

/// Built-in speed profiles.
///
/// `Velocity::default()` is a constant speed of 1, matching a freshly
/// created entity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Velocity {
    /// Never moves.
    Stationary,

    /// Fixed speed.
    Constant { velocity: f64 },

    /// Uniformly random speed in `[min, max)`, redrawn every step.
    /// Defaults: `min = 0.1`, `max = 1.0`.
    Random {
        #[cfg_attr(feature = "serde", serde(default = "defaults::random_min"))]
        min: f64,
        #[cfg_attr(feature = "serde", serde(default = "defaults::random_max"))]
        max: f64,
    },

    /// `velocity` until `stop_time`, then stationary.
    ///
    /// Pairs with a converted waypoint path: set `stop_time` to the path
    /// length divided by the speed so the entity halts at the last waypoint.
    StopAfter { velocity: f64, stop_time: f64 },
}

mod defaults {
    pub(super) fn random_min() -> f64 {
        0.1
    }

    pub(super) fn random_max() -> f64 {
        1.0
    }
}

impl Velocity {
    pub fn constant(velocity: f64) -> Self {
        Velocity::Constant { velocity }
    }

    /// Random speed with the default bounds.
    pub fn random() -> Self {
        Velocity::Random {
            min: defaults::random_min(),
            max: defaults::random_max(),
        }
    }
}

impl Default for Velocity {
    fn default() -> Self {
        Velocity::constant(1.0)
    }
}

impl VelocityFn for Velocity {
    fn velocity(&self, t: f64, rng: &mut EntityRng) -> HookResult<f64> {
        Ok(match *self {
            Velocity::Stationary => 0.0,
            Velocity::Constant { velocity } => velocity,
            Velocity::Random { min, max } => rng.uniform(min, max),
            Velocity::StopAfter { velocity, stop_time } => {
                if t < stop_time { velocity } else { 0.0 }
            }
        })
    }
}
