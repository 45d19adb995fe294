//! CSV output backend.
//!
//! One file, one row per trajectory point:
//! `name, time, elapsed, lat, lon, y, x, azimuth, distance`.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use posim_sim::TrajectoryPoint;

use crate::row::TrajectoryRow;
use crate::writer::TrajectoryWriter;
use crate::OutputResult;

/// Writes trajectories of any number of entities to one CSV stream.
pub struct CsvWriter<W: Write = File> {
    inner:    Writer<W>,
    rows:     u64,
    finished: bool,
}

impl CsvWriter<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::from_csv(Writer::from_path(path)?)
    }
}

impl<W: Write> CsvWriter<W> {
    /// Write CSV to an arbitrary stream, starting with the header row.
    pub fn from_writer(out: W) -> OutputResult<Self> {
        Self::from_csv(Writer::from_writer(out))
    }

    fn from_csv(mut inner: Writer<W>) -> OutputResult<Self> {
        inner.write_record(TrajectoryRow::HEADER)?;
        Ok(Self { inner, rows: 0, finished: false })
    }

    /// Number of data rows written so far.
    #[inline]
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Flush and return the underlying stream.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.inner.flush()?;
        self.inner
            .into_inner()
            .map_err(|e| std::io::Error::other(e.error().to_string()).into())
    }
}

impl<W: Write> TrajectoryWriter for CsvWriter<W> {
    fn write_point(&mut self, name: &str, point: &TrajectoryPoint) -> OutputResult<()> {
        self.inner.write_record(TrajectoryRow::new(name, point).to_record())?;
        self.rows += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.flush()?;
        Ok(())
    }
}
