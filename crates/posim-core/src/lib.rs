//! `posim-core` — foundational types for the `posim` trajectory simulator.
//!
//! This crate is a dependency of every other `posim-*` crate.  It has no
//! `posim-*` dependencies and a small external footprint (`chrono`,
//! `geographiclib-rs`, `rand`, `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`geo`]         | `GeoPoint`, `Ellipsoid`, the `Geodesy` trait          |
//! | [`time`]        | `SimTime`, `TimeWindow`, `SampleOffsets`              |
//! | [`rng`]         | `EntityRng` (per-entity, seedable)                    |
//! | [`config`]      | `SimConfig`                                           |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public data types.   |

pub mod config;
pub mod error;
pub mod geo;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::SimConfig;
pub use error::{CoreError, CoreResult};
pub use geo::{Ellipsoid, GeoPoint, Geodesy};
pub use rng::EntityRng;
pub use time::{SampleOffsets, SimTime, TimeKind, TimeWindow};
