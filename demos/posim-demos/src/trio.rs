//! trio — three walkers with different hooks, simulated in parallel.
//!
//! - `char1`: random speed on a straight line due east;
//! - `char2`: all defaults, starting just north of the origin;
//! - `char3`: a 100 × 20 ellipse rotated by 45°.
//!
//! Usage: `trio [OUTPUT_CSV]` (default `trio.csv`).

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;

use posim_core::{SimConfig, TimeWindow};
use posim_hooks::{Path, Velocity};
use posim_sim::{Entity, Runner};

use posim_demos::{init_tracing, parse_time, print_summary, write_csv};

const SEED: u64 = 42;

fn main() -> Result<()> {
    init_tracing();
    let output = std::env::args().nth(1).map_or_else(|| PathBuf::from("trio.csv"), PathBuf::from);

    let config = SimConfig { seed: SEED, ..SimConfig::default() };
    let runner = Runner::new(&config)?;
    println!("=== trio — {} worker threads ===", runner.num_threads());

    let (east_lat, east_lon) = Path::linear_pair(90.0);
    let (ellipse_lat, ellipse_lon) = Path::rotated_ellipse_pair((0.0, 0.0), 45.0, 100.0, 20.0);
    let entities = vec![
        Entity::builder("char1")
            .seed(1)
            .velocity(Velocity::random())
            .paths(east_lat, east_lon)
            .build()?,
        Entity::builder("char2").seed(2).start((0.001, 0.0)).build()?,
        Entity::builder("char3").seed(3).paths(ellipse_lat, ellipse_lon).build()?,
    ];

    let window = TimeWindow::new(parse_time("13/03/21 00:00:00")?, parse_time("13/03/21 00:04:16")?);

    let t0 = Instant::now();
    let results = runner.run(&entities, &window)?;
    println!("Simulated {} entities in {:.1?}", results.len(), t0.elapsed());

    print_summary(&results);
    write_csv(&output, &results)
}
