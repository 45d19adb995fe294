//! Top-level simulation configuration.

use crate::{CoreError, CoreResult, Ellipsoid};

/// Run-wide settings shared by every entity.
///
/// Typically loaded from a JSON scenario file by the application crate and
/// passed to the runner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Reference ellipsoid semi-major axis in metres.  Default: WGS-84.
    pub semi_major_axis: f64,

    /// Reference ellipsoid flattening.  Default: WGS-84.
    pub flattening: f64,

    /// Worker thread count for the entity pool.  `None` uses all logical
    /// cores.
    pub num_threads: Option<usize>,

    /// Master seed.  Entities without an explicit seed derive theirs from
    /// this and their position in the population.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            semi_major_axis: Ellipsoid::WGS84_A,
            flattening:      Ellipsoid::WGS84_F,
            num_threads:     None,
            seed:            0,
        }
    }
}

impl SimConfig {
    /// Build the reference ellipsoid described by this config.
    pub fn ellipsoid(&self) -> CoreResult<Ellipsoid> {
        Ellipsoid::new(self.semi_major_axis, self.flattening)
    }

    /// Reject settings that cannot produce a run.
    pub fn validate(&self) -> CoreResult<()> {
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1".into()));
        }
        self.ellipsoid().map(|_| ())
    }
}
