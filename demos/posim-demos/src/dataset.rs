//! dataset — generate a labelled set of trajectory shapes.
//!
//! The first `ELLIPSE_SAMPLES` samples follow a randomly rotated ellipse
//! (label 0); the rest follow a line, sine, cosine, or tangent path
//! (label 1).  Speed and noise bounds are randomised per sample.  Each
//! sample is written as a unit-sphere `t,x,y,z` CSV and listed in
//! `filepaths.csv`.
//!
//! Usage: `dataset [OUTPUT_DIR] [SAMPLES]` (defaults `data`, `100`).

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use posim_core::{EntityRng, SimConfig, TimeWindow};
use posim_hooks::{Noise, Path, Velocity};
use posim_output::DatasetWriter;
use posim_sim::{Entity, Runner};

use posim_demos::{init_tracing, parse_time};

const SEED: u64 = 2021;
const ELLIPSE_SAMPLES: usize = 40;

const ELLIPSE_LABEL: u32 = 0;
const OTHER_LABEL: u32 = 1;

/// One generated sample: the entity plus its file stem and label.
struct Sample {
    entity: Entity,
    stem:   String,
    label:  u32,
}

fn sample(index: usize, rng: &mut SmallRng) -> Result<Sample> {
    let velocity = Velocity::Random {
        min: rng.gen_range(-0.5..0.5),
        max: rng.gen_range(1.5..2.0),
    };
    let noise = Noise::Random {
        min: rng.gen_range(-0.5..0.5),
        max: rng.gen_range(1.5..2.5),
    };

    let (kind, (lat, lon), label) = if index < ELLIPSE_SAMPLES {
        let pair = Path::rotated_ellipse_pair(
            (0.0, 0.0),
            rng.gen_range(0.0..359.0),
            rng.gen_range(15.0..30.0),
            rng.gen_range(5.0..15.0),
        );
        ("ellipse", pair, ELLIPSE_LABEL)
    } else {
        match rng.gen_range(0..4) {
            0 => ("linear", Path::linear_pair(rng.gen_range(0.0..359.0)), OTHER_LABEL),
            1 => ("sine", (Path::Sine, Path::Sine), OTHER_LABEL),
            2 => ("cosine", (Path::Cosine, Path::Cosine), OTHER_LABEL),
            _ => ("tan", (Path::Tan, Path::Tan), OTHER_LABEL),
        }
    };

    let stem = format!("sim_{index}_{kind}");
    let entity = Entity::builder(stem.clone())
        .seed(EntityRng::derive_seed(SEED, index))
        .velocity(velocity)
        .paths(lat, lon)
        .noise(noise)
        .build()?;
    Ok(Sample { entity, stem, label })
}

fn main() -> Result<()> {
    init_tracing();
    let mut args = std::env::args().skip(1);
    let dir = args.next().map_or_else(|| PathBuf::from("data"), PathBuf::from);
    let count: usize = match args.next() {
        Some(s) => s.parse().with_context(|| format!("bad sample count {s:?}"))?,
        None => 100,
    };

    let mut rng = SmallRng::seed_from_u64(SEED);
    let samples = (0..count)
        .map(|i| sample(i, &mut rng))
        .collect::<Result<Vec<_>>>()?;
    let (samples, entities): (Vec<(String, u32)>, Vec<Entity>) = samples
        .into_iter()
        .map(|s| ((s.stem, s.label), s.entity))
        .unzip();

    let runner = Runner::new(&SimConfig { seed: SEED, ..SimConfig::default() })?;
    let window = TimeWindow::new(parse_time("13/03/21 00:00:00")?, parse_time("13/03/21 00:04:16")?);

    let t0 = Instant::now();
    let results = runner.run(&entities, &window)?;
    println!("Simulated {} samples in {:.1?}", results.len(), t0.elapsed());

    let mut writer = DatasetWriter::new(&dir).with_context(|| format!("creating {}", dir.display()))?;
    for ((stem, label), result) in samples.iter().zip(&results) {
        writer.write_sample(stem, result, *label)?;
    }
    writer.finish()?;
    println!("Wrote {} samples to {}", writer.samples_written(), dir.display());
    Ok(())
}
