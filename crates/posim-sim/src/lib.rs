//! `posim-sim` — the position simulation engine and multi-entity runner.
//!
//! # Integration loop
//!
//! ```text
//! D = 0, p = start
//! for t in 0, Δ, 2Δ, … < T:
//!   ① step    = Δ · velocity(t)
//!   ② D      += step
//!   ③ y       = lat_noise(lat_path(D)),  x = lon_noise(lon_path(D))
//!   ④ azimuth = azimuth_deg(x, y)
//!   ⑤ p       = direct(p, azimuth, step)      (ellipsoidal geodesic)
//!   ⑥ record (t, start + t, p, x, y)
//! ```
//!
//! Each step depends on the previous position, so one entity is strictly
//! sequential.  Entities are independent and the [`Runner`] fans them out
//! over a Rayon thread pool.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use posim_core::{Ellipsoid, TimeWindow};
//! use posim_hooks::Velocity;
//! use posim_sim::{simulate, Entity};
//!
//! let walker = Entity::builder("walker").velocity(Velocity::constant(1.4)).build()?;
//! let result = simulate(&walker, &TimeWindow::numeric(600.0), &Ellipsoid::wgs84())?;
//! ```

pub mod engine;
pub mod entity;
pub mod error;
pub mod observer;
pub mod runner;
pub mod trajectory;


pub use engine::{azimuth_deg, simulate, simulate_observed};
pub use entity::{Entity, EntityBuilder};
pub use error::{EntityFailure, HookRole, RunError, SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use runner::{run_many, Runner};
pub use trajectory::{TrajectoryPoint, TrajectoryResult};
