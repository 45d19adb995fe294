//! Parallel fan-out of independent entity runs.
//!
//! Each entity is one Rayon task.  Results come back through an indexed
//! parallel collect, so the output order always matches the input order no
//! matter which task finishes first.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{info, warn};

use posim_core::{Ellipsoid, Geodesy, SimConfig, TimeWindow};

use crate::{simulate, Entity, EntityFailure, RunError, SimError, SimResult, TrajectoryResult};

/// Owns a bounded worker pool and the earth model shared by every run.
pub struct Runner {
    pool:      ThreadPool,
    ellipsoid: Ellipsoid,
}

impl Runner {
    /// Build the pool (`config.num_threads`, or all logical cores) and the
    /// ellipsoid described by `config`.
    pub fn new(config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        let ellipsoid = config.ellipsoid()?;

        let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("posim-worker-{i}"));
        if let Some(n) = config.num_threads {
            builder = builder.num_threads(n);
        }
        let pool = builder
            .build()
            .map_err(|e| SimError::Config(format!("failed to build worker pool: {e}")))?;

        Ok(Self { pool, ellipsoid })
    }

    #[inline]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    #[inline]
    pub fn num_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Simulate every entity; fail with a [`RunError`] if any of them fails.
    pub fn run(&self, entities: &[Entity], window: &TimeWindow) -> Result<Vec<TrajectoryResult>, RunError> {
        collect_outcomes(entities, self.run_report(entities, window))
    }

    /// Simulate every entity and return each outcome, in input order.
    pub fn run_report(&self, entities: &[Entity], window: &TimeWindow) -> Vec<SimResult<TrajectoryResult>> {
        info!(entities = entities.len(), threads = self.num_threads(), "starting run");
        self.pool
            .install(|| simulate_all(entities, window, &self.ellipsoid))
    }
}

/// Simulate every entity on Rayon's global pool.
///
/// Same ordering and failure policy as [`Runner::run`].
pub fn run_many<G>(entities: &[Entity], window: &TimeWindow, geodesy: &G) -> Result<Vec<TrajectoryResult>, RunError>
where
    G: Geodesy + ?Sized,
{
    info!(entities = entities.len(), "starting run on global pool");
    collect_outcomes(entities, simulate_all(entities, window, geodesy))
}

fn simulate_all<G>(entities: &[Entity], window: &TimeWindow, geodesy: &G) -> Vec<SimResult<TrajectoryResult>>
where
    G: Geodesy + ?Sized,
{
    entities
        .par_iter()
        .map(|entity| simulate(entity, window, geodesy))
        .collect()
}

fn collect_outcomes(
    entities: &[Entity],
    outcomes: Vec<SimResult<TrajectoryResult>>,
) -> Result<Vec<TrajectoryResult>, RunError> {
    let mut completed = Vec::with_capacity(outcomes.len());
    let mut failures = Vec::new();

    for (index, (entity, outcome)) in entities.iter().zip(outcomes).enumerate() {
        match outcome {
            Ok(result) => completed.push(Some(result)),
            Err(error) => {
                warn!(index, entity = %entity.name, %error, "entity failed");
                failures.push(EntityFailure { index, name: entity.name.clone(), error });
                completed.push(None);
            }
        }
    }

    if failures.is_empty() {
        info!(entities = completed.len(), "run finished");
        Ok(completed.into_iter().flatten().collect())
    } else {
        Err(RunError { completed, failures })
    }
}
