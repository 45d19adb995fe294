//! The `TrajectoryWriter` trait implemented by point-stream writers.

use posim_sim::{TrajectoryPoint, TrajectoryResult};

use crate::OutputResult;

/// A sink for trajectory points, tagged with the entity name.
pub trait TrajectoryWriter {
    /// Write one point of entity `name`.
    fn write_point(&mut self, name: &str, point: &TrajectoryPoint) -> OutputResult<()>;

    /// Write every point of a finished trajectory, in order.
    fn write_trajectory(&mut self, result: &TrajectoryResult) -> OutputResult<()> {
        for point in &result.points {
            self.write_point(&result.name, point)?;
        }
        Ok(())
    }

    /// Flush and close the underlying output.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
