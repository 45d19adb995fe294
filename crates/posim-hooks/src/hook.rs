//! The hook traits: the main extension point for user code.

use std::fmt;

use posim_core::EntityRng;

use crate::HookResult;

/// Which heading component a path function produces.
///
/// `Lat` is the "up" axis of the direction vector (`y`), `Lon` the
/// "across" axis (`x`).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    Lat,
    Lon,
}

impl Axis {
    /// Component of a unit step at `azimuth_deg` along this axis:
    /// `cos` for latitude, `sin` for longitude.
    #[inline]
    pub fn component(self, azimuth_deg: f64) -> f64 {
        let rad = azimuth_deg.to_radians();
        match self {
            Axis::Lat => rad.cos(),
            Axis::Lon => rad.sin(),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Lat => "lat",
            Axis::Lon => "lon",
        })
    }
}

/// Speed as a function of elapsed time.
///
/// The engine multiplies the returned value by the timestep to get the
/// distance covered in one step, so units are "distance per time unit"
/// (metres per second for calendar windows).
///
/// # Thread safety
///
/// The runner evaluates many entities in parallel, so implementations must
/// be `Send + Sync`.  Randomness must come from the supplied `rng`, never
/// from state inside the hook.
pub trait VelocityFn: Send + Sync {
    fn velocity(&self, t: f64, rng: &mut EntityRng) -> HookResult<f64>;
}

/// One heading component as a function of cumulative distance travelled.
///
/// The engine pairs a latitude-axis and a longitude-axis path function and
/// turns the pair into an azimuth, so only the ratio of the two outputs
/// matters for direction.
pub trait PathFn: Send + Sync {
    fn heading(&self, d: f64, rng: &mut EntityRng) -> HookResult<f64>;
}

/// Perturbation applied to a path function's output.
pub trait NoiseFn: Send + Sync {
    fn apply(&self, value: f64, rng: &mut EntityRng) -> HookResult<f64>;
}

// ── Closure impls ─────────────────────────────────────────────────────────────
//
// Closures must annotate the RNG argument (`|t, _: &mut EntityRng| ...`) so
// the compiler infers a higher-ranked signature.

impl<F> VelocityFn for F
where
    F: Fn(f64, &mut EntityRng) -> HookResult<f64> + Send + Sync,
{
    #[inline]
    fn velocity(&self, t: f64, rng: &mut EntityRng) -> HookResult<f64> {
        self(t, rng)
    }
}

impl<F> PathFn for F
where
    F: Fn(f64, &mut EntityRng) -> HookResult<f64> + Send + Sync,
{
    #[inline]
    fn heading(&self, d: f64, rng: &mut EntityRng) -> HookResult<f64> {
        self(d, rng)
    }
}

impl<F> NoiseFn for F
where
    F: Fn(f64, &mut EntityRng) -> HookResult<f64> + Send + Sync,
{
    #[inline]
    fn apply(&self, value: f64, rng: &mut EntityRng) -> HookResult<f64> {
        self(value, rng)
    }
}
