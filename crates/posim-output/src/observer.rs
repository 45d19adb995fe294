//! `OutputObserver<W>` — bridges `SimObserver` to a `TrajectoryWriter`.

use posim_sim::{SimObserver, TrajectoryPoint};

use crate::writer::TrajectoryWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams every recorded point to a
/// [`TrajectoryWriter`] as the simulation produces it.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error], or finish with
/// [`into_writer`][Self::into_writer], which reports the first one.  One
/// observer can follow several entity runs into the same writer.
pub struct OutputObserver<W: TrajectoryWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: TrajectoryWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer and hand it back.
    pub fn into_writer(mut self) -> OutputResult<W> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()?;
        Ok(self.writer)
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: TrajectoryWriter> SimObserver for OutputObserver<W> {
    fn on_step(&mut self, name: &str, point: &TrajectoryPoint) {
        let result = self.writer.write_point(name, point);
        self.store_err(result);
    }
}
