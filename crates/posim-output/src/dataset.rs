//! Labelled sample datasets for shape-classification experiments.
//!
//! Each sample is one trajectory projected onto the unit sphere and written
//! as a header-less `t,x,y,z` CSV (see [`unit_sphere_rows`]).  A
//! `filepaths.csv` manifest in the same directory lists every sample file
//! with its class label:
//!
//! ```text
//! x,y
//! ./sim_0_ellipse.csv,0
//! ./sim_1_linear.csv,1
//! ```

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{Writer, WriterBuilder};

use posim_sim::TrajectoryResult;

use crate::row::unit_sphere_rows;
use crate::OutputResult;

pub const MANIFEST_FILE: &str = "filepaths.csv";

pub struct DatasetWriter {
    dir:      PathBuf,
    manifest: Writer<File>,
    samples:  usize,
    finished: bool,
}

impl DatasetWriter {
    /// Create `dir` if needed and start the manifest.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;
        let mut manifest = Writer::from_path(dir.join(MANIFEST_FILE))?;
        manifest.write_record(["x", "y"])?;
        Ok(Self {
            dir: dir.to_path_buf(),
            manifest,
            samples: 0,
            finished: false,
        })
    }

    /// Write `result` as `<file_stem>.csv` and record it under `label`.
    ///
    /// Returns the path of the sample file.
    pub fn write_sample(
        &mut self,
        file_stem: &str,
        result:    &TrajectoryResult,
        label:     u32,
    ) -> OutputResult<PathBuf> {
        let file_name = format!("{file_stem}.csv");
        let path = self.dir.join(&file_name);

        let mut out = WriterBuilder::new().has_headers(false).from_path(&path)?;
        for row in unit_sphere_rows(result) {
            out.write_record([
                row.time.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.z.to_string(),
            ])?;
        }
        out.flush()?;

        self.manifest.write_record([format!("./{file_name}"), label.to_string()])?;
        self.samples += 1;
        Ok(path)
    }

    #[inline]
    pub fn samples_written(&self) -> usize {
        self.samples
    }

    /// Flush the manifest.  Idempotent.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.manifest.flush()?;
        Ok(())
    }
}
