//! scenario — run a JSON scenario file.
//!
//! Usage: `scenario SCENARIO_JSON [OUTPUT_CSV]`.  The output path on the
//! command line wins over the file's `output` field.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::warn;

use posim_sim::Runner;

use posim_demos::scenario::Scenario;
use posim_demos::{init_tracing, print_summary, write_csv};

fn main() -> Result<()> {
    init_tracing();
    let mut args = std::env::args().skip(1);
    let path = args.next().map(PathBuf::from).context("usage: scenario SCENARIO_JSON [OUTPUT_CSV]")?;
    let scenario = Scenario::load(&path)?;

    let runner = Runner::new(&scenario.config)?;
    let entities = scenario.entities(runner.ellipsoid())?;
    println!(
        "=== {} — {} entities, {} samples each, {} threads ===",
        path.display(),
        entities.len(),
        scenario.window.sample_count()?,
        runner.num_threads()
    );

    let t0 = Instant::now();
    let results = runner.run(&entities, &scenario.window)?;
    println!("Simulated in {:.1?}", t0.elapsed());
    print_summary(&results);

    match args.next().map(PathBuf::from).or(scenario.output) {
        Some(output) => write_csv(&output, &results),
        None => {
            warn!("no output path given; results not written");
            Ok(())
        }
    }
}
