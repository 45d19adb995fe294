//! `posim-output` — trajectory writers for the posim simulator.
//!
//! | Writer            | Files created                                         |
//! |-------------------|-------------------------------------------------------|
//! | [`CsvWriter`]     | one CSV, one row per trajectory point                 |
//! | [`DatasetWriter`] | one header-less `t,x,y,z` CSV per sample + `filepaths.csv` manifest |
//!
//! [`CsvWriter`] implements [`TrajectoryWriter`] and can be driven either
//! with finished results or live through [`OutputObserver`], which
//! implements `posim_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use posim_output::{CsvWriter, TrajectoryWriter};
//!
//! let mut writer = CsvWriter::create(Path::new("walk.csv"))?;
//! for result in &results {
//!     writer.write_trajectory(result)?;
//! }
//! writer.finish()?;
//! ```

pub mod csv;
pub mod dataset;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use dataset::DatasetWriter;
pub use error::{OutputError, OutputResult};
pub use observer::OutputObserver;
pub use row::{unit_sphere_rows, SphereRow, TrajectoryRow};
pub use writer::TrajectoryWriter;
