//! Built-in path functions mapping cumulative distance to a heading component.
//!
//! Axis-aware variants follow one convention: the latitude axis takes the
//! cosine-like component and the longitude axis the sine-like component, so
//! a `Linear` pair at azimuth `θ` heads along compass bearing `θ`.  For the
//! ellipse variants the latitude axis follows the major axis and the
//! longitude axis the minor axis.

use std::f64::consts::{PI, TAU};

use posim_core::EntityRng;

use crate::{Axis, HookError, HookResult, PathFn};

/// Built-in path shapes.  `Path::default()` is the identity `d ↦ d`.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Path {
    #[default]
    Identity,

    Stationary,

    /// `d^power`.  Default: `power = 2`.
    Power {
        #[cfg_attr(feature = "serde", serde(default = "defaults::power"))]
        power: f64,
    },

    /// Uniform random component in `[min, max)`, independent of `d`.
    /// Defaults: `[0, 2π)`.
    Random {
        #[cfg_attr(feature = "serde", serde(default = "defaults::random_min"))]
        min: f64,
        #[cfg_attr(feature = "serde", serde(default = "defaults::random_max"))]
        max: f64,
    },

    /// Straight line on bearing `azimuth_deg`.  Default: 45°.
    Linear {
        axis: Axis,
        #[cfg_attr(feature = "serde", serde(default = "defaults::azimuth"))]
        azimuth_deg: f64,
    },

    /// Straight segments whose bearing changes at distance `splits`.
    ///
    /// `azimuths_deg[i]` applies on `[splits[i], splits[i + 1])`; outside
    /// every range the default 45° bearing is used.
    Meandering {
        axis: Axis,
        splits: Vec<f64>,
        azimuths_deg: Vec<f64>,
    },

    Sine,
    Cosine,
    Tan,

    /// Circle of `radius`, travelled at one radian per `radius` of distance.
    Circle { axis: Axis, radius: f64 },

    /// Axis-aligned ellipse with semi-axes `major` and `minor`, one lap per
    /// perimeter of distance.
    Ellipse { axis: Axis, major: f64, minor: f64 },

    /// [`Path::Ellipse`] rotated by `azimuth_deg` about `(origin_x, origin_y)`.
    RotatedEllipse {
        axis: Axis,
        #[cfg_attr(feature = "serde", serde(default))]
        origin_x: f64,
        #[cfg_attr(feature = "serde", serde(default))]
        origin_y: f64,
        azimuth_deg: f64,
        major: f64,
        minor: f64,
    },
}

mod defaults {
    pub(super) fn power() -> f64 {
        2.0
    }

    pub(super) fn random_min() -> f64 {
        0.0
    }

    pub(super) fn random_max() -> f64 {
        std::f64::consts::TAU
    }

    pub(super) fn azimuth() -> f64 {
        45.0
    }
}

impl Path {
    /// `d²`.
    pub fn power() -> Self {
        Path::Power { power: defaults::power() }
    }

    /// Random component in `[0, 2π)`.
    pub fn random() -> Self {
        Path::Random {
            min: defaults::random_min(),
            max: defaults::random_max(),
        }
    }

    pub fn linear(axis: Axis, azimuth_deg: f64) -> Self {
        Path::Linear { axis, azimuth_deg }
    }

    /// Matching latitude/longitude pair of a line on `azimuth_deg`.
    pub fn linear_pair(azimuth_deg: f64) -> (Self, Self) {
        (Path::linear(Axis::Lat, azimuth_deg), Path::linear(Axis::Lon, azimuth_deg))
    }

    /// Matching latitude/longitude pair of a rotated ellipse.
    pub fn rotated_ellipse_pair(
        origin: (f64, f64),
        azimuth_deg: f64,
        major: f64,
        minor: f64,
    ) -> (Self, Self) {
        let make = |axis| Path::RotatedEllipse {
            axis,
            origin_x: origin.0,
            origin_y: origin.1,
            azimuth_deg,
            major,
            minor,
        };
        (make(Axis::Lat), make(Axis::Lon))
    }
}

/// Perimeter estimate for an ellipse with semi-axes `major` and `minor`
/// (Ramanujan's second approximation).
pub fn ellipse_perimeter(major: f64, minor: f64) -> f64 {
    let h = ((major - minor) / (major + minor)).powi(2);
    PI * (major + minor) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
}

/// `(x, y)` on the ellipse after `d` distance: `x` on the minor axis, `y`
/// on the major axis.
fn ellipse_point(d: f64, major: f64, minor: f64) -> HookResult<(f64, f64)> {
    let valid = |axis: f64| axis.is_finite() && axis >= 0.0;
    if !(valid(major) && valid(minor)) || major + minor <= 0.0 {
        return Err(HookError::InvalidParams(format!(
            "ellipse semi-axes must be non-negative and not both zero, got {major} and {minor}"
        )));
    }
    let theta = TAU * d / ellipse_perimeter(major, minor);
    Ok((minor * theta.cos(), major * theta.sin()))
}

impl PathFn for Path {
    fn heading(&self, d: f64, rng: &mut EntityRng) -> HookResult<f64> {
        match self {
            Path::Identity => Ok(d),
            Path::Stationary => Ok(0.0),
            Path::Power { power } => Ok(d.powf(*power)),
            Path::Random { min, max } => Ok(rng.uniform(*min, *max)),
            Path::Linear { axis, azimuth_deg } => Ok(d * axis.component(*azimuth_deg)),

            Path::Meandering { axis, splits, azimuths_deg } => {
                if azimuths_deg.len() + 1 < splits.len() {
                    return Err(HookError::InvalidParams(format!(
                        "{} splits need at least {} azimuths, got {}",
                        splits.len(),
                        splits.len() - 1,
                        azimuths_deg.len()
                    )));
                }
                let azimuth = splits
                    .windows(2)
                    .position(|w| d >= w[0] && d < w[1])
                    .map_or(defaults::azimuth(), |i| azimuths_deg[i]);
                Ok(d * axis.component(azimuth))
            }

            Path::Sine => Ok(d.sin()),
            Path::Cosine => Ok(d.cos()),
            Path::Tan => Ok(d.tan()),

            Path::Circle { axis, radius } => {
                if !(radius.is_finite() && *radius != 0.0) {
                    return Err(HookError::InvalidParams(format!(
                        "circle radius must be non-zero, got {radius}"
                    )));
                }
                let theta = d / radius;
                Ok(match axis {
                    Axis::Lat => radius * theta.cos(),
                    Axis::Lon => radius * theta.sin(),
                })
            }

            Path::Ellipse { axis, major, minor } => {
                let (x, y) = ellipse_point(d, *major, *minor)?;
                Ok(match axis {
                    Axis::Lat => y,
                    Axis::Lon => x,
                })
            }

            Path::RotatedEllipse { axis, origin_x, origin_y, azimuth_deg, major, minor } => {
                let (x, y) = ellipse_point(d, *major, *minor)?;
                let (sin, cos) = (-azimuth_deg.to_radians()).sin_cos();
                let (dx, dy) = (x - origin_x, y - origin_y);
                Ok(match axis {
                    Axis::Lat => sin * dx + cos * dy + origin_y,
                    Axis::Lon => cos * dx - sin * dy + origin_x,
                })
            }
        }
    }
}
