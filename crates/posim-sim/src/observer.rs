//! Simulation observer trait for progress reporting and data collection.

use crate::{TrajectoryPoint, TrajectoryResult};

/// Callbacks invoked by [`simulate_observed`][crate::simulate_observed] at
/// key points of an entity run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: collecting positions
///
/// ```rust,ignore
/// struct Tail(Vec<GeoPoint>);
///
/// impl SimObserver for Tail {
///     fn on_step(&mut self, _name: &str, point: &TrajectoryPoint) {
///         self.0.push(point.position());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called once the window is validated, before the first hook call.
    fn on_entity_start(&mut self, _name: &str, _samples: usize) {}

    /// Called after each sample is recorded.
    fn on_step(&mut self, _name: &str, _point: &TrajectoryPoint) {}

    /// Called once after the final sample.  Not called if a hook fails.
    fn on_entity_end(&mut self, _name: &str, _result: &TrajectoryResult) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
