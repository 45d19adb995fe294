//! The time-stepped integration loop.

use tracing::{debug, trace};

use posim_core::{EntityRng, Geodesy, TimeWindow};
use posim_hooks::HookError;

use crate::{
    Entity, HookRole, NoopObserver, SimError, SimObserver, SimResult, TrajectoryPoint,
    TrajectoryResult,
};

/// Upper bound on the points reserved up front; longer runs grow on demand.
const PREALLOCATE_MAX: usize = 1 << 16;

/// Bearing in degrees of the heading vector with latitude component `y` and
/// longitude component `x`.
///
/// `y == 0` maps to 180 when `x >= 0` and to 0 when `x < 0`; otherwise the
/// result is `atan(x / y)` in degrees, shifted by 180 when `y < 0`.  The
/// output range is `(-90, 270)`.
pub fn azimuth_deg(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        return if x >= 0.0 { 180.0 } else { 0.0 };
    }
    let azimuth = (x / y).atan().to_degrees();
    if y < 0.0 { azimuth + 180.0 } else { azimuth }
}

/// Simulate one entity over `window` on the given earth model.
///
/// # Errors
/// - [`SimError::TypeMismatch`] / [`SimError::InvalidTimeWindow`] from
///   window validation, before any hook is called;
/// - [`SimError::Hook`] for the first hook failure.
pub fn simulate<G>(entity: &Entity, window: &TimeWindow, geodesy: &G) -> SimResult<TrajectoryResult>
where
    G: Geodesy + ?Sized,
{
    simulate_observed(entity, window, geodesy, &mut NoopObserver)
}

/// [`simulate`] with progress callbacks.
pub fn simulate_observed<G, O>(
    entity:   &Entity,
    window:   &TimeWindow,
    geodesy:  &G,
    observer: &mut O,
) -> SimResult<TrajectoryResult>
where
    G: Geodesy + ?Sized,
    O: SimObserver + ?Sized,
{
    let offsets = window.offsets()?;
    let samples = offsets.len();
    debug!(entity = %entity.name, samples, timestep = window.timestep, "simulating entity");
    observer.on_entity_start(&entity.name, samples);

    let mut rng = EntityRng::new(entity.seed);
    let mut position = entity.start;
    let mut distance = 0.0;
    let mut points = Vec::with_capacity(samples.min(PREALLOCATE_MAX));

    for (sample, elapsed) in offsets.enumerate() {
        let hook = |role| hook_error(entity, sample, role);

        let speed = entity.velocity.velocity(elapsed, &mut rng).map_err(hook(HookRole::Velocity))?;
        let step = window.timestep * speed;
        distance += step;

        let y = entity.lat_path.heading(distance, &mut rng).map_err(hook(HookRole::LatPath))?;
        let y = entity.lat_noise.apply(y, &mut rng).map_err(hook(HookRole::LatNoise))?;
        let x = entity.lon_path.heading(distance, &mut rng).map_err(hook(HookRole::LonPath))?;
        let x = entity.lon_noise.apply(x, &mut rng).map_err(hook(HookRole::LonNoise))?;

        let azimuth = azimuth_deg(x, y);
        position = geodesy.direct(position, azimuth, step);

        let point = TrajectoryPoint {
            elapsed,
            time: window.start.offset(elapsed)?,
            lat: position.lat,
            lon: position.lon,
            x,
            y,
            azimuth,
            distance,
        };
        trace!(entity = %entity.name, sample, elapsed, lat = point.lat, lon = point.lon, azimuth, "step");
        observer.on_step(&entity.name, &point);
        points.push(point);
    }

    let result = TrajectoryResult { name: entity.name.clone(), points };
    debug!(entity = %entity.name, samples, distance, "entity finished");
    observer.on_entity_end(&entity.name, &result);
    Ok(result)
}

fn hook_error(entity: &Entity, sample: usize, role: HookRole) -> impl FnOnce(HookError) -> SimError + '_ {
    move |source| SimError::Hook {
        entity: entity.name.clone(),
        sample,
        role,
        source,
    }
}
