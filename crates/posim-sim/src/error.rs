use std::fmt;

use thiserror::Error;

use posim_core::{CoreError, TimeKind};
use posim_hooks::HookError;

use crate::TrajectoryResult;

/// The hook that raised a [`SimError::Hook`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum HookRole {
    Velocity,
    LatPath,
    LonPath,
    LatNoise,
    LonNoise,
}

impl fmt::Display for HookRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HookRole::Velocity => "velocity",
            HookRole::LatPath  => "lat path",
            HookRole::LonPath  => "lon path",
            HookRole::LatNoise => "lat noise",
            HookRole::LonNoise => "lon noise",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("time type mismatch: start is {start}, end is {end}")]
    TypeMismatch { start: TimeKind, end: TimeKind },

    #[error("invalid time window: {0}")]
    InvalidTimeWindow(String),

    /// A velocity, path, or noise hook failed; tagged with the entity and
    /// the sample index at which it happened.
    #[error("entity {entity:?}: {role} hook failed at sample {sample}: {source}")]
    Hook {
        entity: String,
        sample: usize,
        role:   HookRole,
        source: HookError,
    },

    #[error("simulation configuration error: {0}")]
    Config(String),
}

impl From<CoreError> for SimError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::TypeMismatch { start, end } => SimError::TypeMismatch { start, end },
            CoreError::InvalidTimeWindow(msg) => SimError::InvalidTimeWindow(msg),
            CoreError::Config(msg) => SimError::Config(msg),
        }
    }
}

pub type SimResult<T> = Result<T, SimError>;

// ── Runner aggregate ──────────────────────────────────────────────────────────

/// One entity that failed during a multi-entity run.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityFailure {
    /// Position of the entity in the input slice.
    pub index: usize,
    pub name:  String,
    pub error: SimError,
}

/// Aggregate failure of a multi-entity run.
///
/// Every entity is run to completion or failure.  `completed` is aligned
/// with the input order and holds the results of the entities that
/// succeeded (`None` where one failed); `failures` lists the rest in input
/// order.
#[derive(Debug, Clone, Error)]
#[error("{} of {} entities failed; first: {}", .failures.len(), .completed.len(), first_error(.failures))]
pub struct RunError {
    pub completed: Vec<Option<TrajectoryResult>>,
    pub failures:  Vec<EntityFailure>,
}

fn first_error(failures: &[EntityFailure]) -> String {
    failures
        .first()
        .map(|f| f.error.to_string())
        .unwrap_or_default()
}

impl RunError {
    /// Results of the entities that completed, in input order.
    pub fn successes(&self) -> impl Iterator<Item = &TrajectoryResult> {
        self.completed.iter().flatten()
    }

    /// Names of the entities that failed, in input order.
    pub fn failed_names(&self) -> Vec<&str> {
        self.failures.iter().map(|f| f.name.as_str()).collect()
    }
}
