//! Shared helpers for the posim demo binaries.
//!
//! | Binary     | What it shows                                                  |
//! |------------|----------------------------------------------------------------|
//! | `trio`     | three differently configured walkers run in parallel           |
//! | `snowdon`  | a real hiking route converted to a path, walked with noise     |
//! | `meander`  | a random-walk heading built from many short straight splits    |
//! | `dataset`  | a labelled ellipse / non-ellipse shape dataset                 |
//! | `scenario` | any of the above described in a JSON file                      |

pub mod scenario;

#[cfg(test)]
mod tests;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing_subscriber::EnvFilter;

use posim_output::{CsvWriter, TrajectoryWriter};
use posim_sim::TrajectoryResult;

/// Install the `fmt` subscriber.  `RUST_LOG` overrides the default `info`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Parse a `dd/mm/yy HH:MM:SS` timestamp.
pub fn parse_time(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%d/%m/%y %H:%M:%S").with_context(|| format!("bad timestamp {s:?}"))
}

/// Write all trajectories to one CSV file.
pub fn write_csv(path: &Path, results: &[TrajectoryResult]) -> Result<()> {
    let mut writer =
        CsvWriter::create(path).with_context(|| format!("creating {}", path.display()))?;
    for result in results {
        writer.write_trajectory(result)?;
    }
    writer.finish()?;
    println!("Wrote {} rows to {}", writer.rows_written(), path.display());
    Ok(())
}

/// Print one summary line per trajectory.
pub fn print_summary(results: &[TrajectoryResult]) {
    println!("{:<12} {:>8} {:>12} {:>26}", "entity", "samples", "distance", "final fix");
    for r in results {
        let fix = r
            .final_position()
            .map_or_else(|| "-".to_owned(), |p| format!("({:.6}, {:.6})", p.lat, p.lon));
        println!("{:<12} {:>8} {:>12.1} {:>26}", r.name, r.len(), r.total_distance(), fix);
    }
}
