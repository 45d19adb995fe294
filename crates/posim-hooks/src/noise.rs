//! Built-in noise functions that distort a heading component.

use posim_core::EntityRng;

use crate::{HookResult, NoiseFn};

/// Built-in noise models.  `Noise::default()` passes values through.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Noise {
    #[default]
    None,

    /// Multiply by a uniform factor in `[min, max)`.
    /// Defaults: `min = 0.5`, `max = 1.5`.
    Random {
        #[cfg_attr(feature = "serde", serde(default = "defaults::random_min"))]
        min: f64,
        #[cfg_attr(feature = "serde", serde(default = "defaults::random_max"))]
        max: f64,
    },

    /// Add a constant `shift`, drifting movement along the axis.
    /// Default: `shift = 0.1`.
    Drift {
        #[cfg_attr(feature = "serde", serde(default = "defaults::drift_shift"))]
        shift: f64,
    },
}

mod defaults {
    pub(super) fn random_min() -> f64 {
        0.5
    }

    pub(super) fn random_max() -> f64 {
        1.5
    }

    pub(super) fn drift_shift() -> f64 {
        0.1
    }
}

impl Noise {
    /// Multiplicative noise with the default bounds.
    pub fn random() -> Self {
        Noise::Random {
            min: defaults::random_min(),
            max: defaults::random_max(),
        }
    }

    /// Additive drift with the default shift.
    pub fn drift() -> Self {
        Noise::Drift { shift: defaults::drift_shift() }
    }
}

impl NoiseFn for Noise {
    fn apply(&self, value: f64, rng: &mut EntityRng) -> HookResult<f64> {
        Ok(match *self {
            Noise::None => value,
            Noise::Random { min, max } => value * rng.uniform(min, max),
            Noise::Drift { shift } => value + shift,
        })
    }
}
