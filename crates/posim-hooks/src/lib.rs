//! `posim-hooks` — the pluggable functions that drive a simulated entity.
//!
//! An entity's motion is described by three roles:
//!
//! | Role     | Trait          | Input                     | Output                    |
//! |----------|----------------|---------------------------|---------------------------|
//! | velocity | [`VelocityFn`] | elapsed time `t`          | speed (distance per unit) |
//! | path     | [`PathFn`]     | cumulative distance `d`   | one heading component     |
//! | noise    | [`NoiseFn`]    | a heading component       | the perturbed component   |
//!
//! Each role has a built-in tagged-variant library ([`Velocity`], [`Path`],
//! [`Noise`]) whose `Default` and parameterless constructors select the
//! documented per-function defaults.  Any closure with the matching
//! signature implements the trait too.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` for `Velocity`, `Path`, `Noise`. |

pub mod error;
pub mod hook;
pub mod noise;
pub mod path;
pub mod velocity;

#[cfg(test)]
mod tests;

pub use error::{HookError, HookResult};
pub use hook::{Axis, NoiseFn, PathFn, VelocityFn};
pub use noise::Noise;
pub use path::{ellipse_perimeter, Path};
pub use velocity::Velocity;
