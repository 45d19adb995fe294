//! Conversion error type.

use thiserror::Error;

use posim_core::GeoPoint;

/// Errors produced by `posim-convert`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    #[error("a path needs at least 2 waypoints, got {0}")]
    TooFewWaypoints(usize),

    #[error("waypoint {index} {point} is not a valid coordinate")]
    InvalidWaypoint { index: usize, point: GeoPoint },
}

pub type ConvertResult<T> = Result<T, ConvertError>;
