//! meander — a random walk built from 500 one-metre straight splits.
//!
//! The heading of each split differs from the previous one by a random
//! amount within ±`MAX_TURN` degrees.
//!
//! Usage: `meander [SEED] [OUTPUT_CSV]` (defaults `7`, `meander.csv`).

use std::path::PathBuf;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use posim_core::{Ellipsoid, TimeWindow};
use posim_hooks::{Axis, Path};
use posim_sim::{simulate, Entity};

use posim_demos::{init_tracing, parse_time, print_summary, write_csv};

const SPLITS: usize = 500;
const MAX_TURN: f64 = 20.0;

/// Initial heading in `[0, 359)` then a bounded random turn per split.
fn meander_azimuths(rng: &mut SmallRng, count: usize, max_turn: f64) -> Vec<f64> {
    let mut azimuths = Vec::with_capacity(count);
    let mut heading = rng.gen_range(0.0..359.0);
    for _ in 0..count {
        azimuths.push(heading);
        heading += rng.gen_range(-max_turn..=max_turn);
    }
    azimuths
}

fn main() -> Result<()> {
    init_tracing();
    let mut args = std::env::args().skip(1);
    let seed: u64 = match args.next() {
        Some(s) => s.parse().with_context(|| format!("bad seed {s:?}"))?,
        None => 7,
    };
    let output = args.next().map_or_else(|| PathBuf::from("meander.csv"), PathBuf::from);

    let mut rng = SmallRng::seed_from_u64(seed);
    let splits: Vec<f64> = (0..SPLITS).map(|i| i as f64).collect();
    let azimuths_deg = meander_azimuths(&mut rng, SPLITS, MAX_TURN);

    let path = |axis| Path::Meandering { axis, splits: splits.clone(), azimuths_deg: azimuths_deg.clone() };
    let walker = Entity::builder("meander")
        .seed(seed)
        .paths(path(Axis::Lat), path(Axis::Lon))
        .build()?;

    let window = TimeWindow::new(parse_time("01/01/21 00:00:00")?, parse_time("01/01/21 00:02:00")?);
    let result = simulate(&walker, &window, &Ellipsoid::wgs84())?;

    print_summary(std::slice::from_ref(&result));
    write_csv(&output, &[result])
}
