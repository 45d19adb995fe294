//! Entity descriptor and its fluent builder.

use std::fmt;

use posim_core::GeoPoint;
use posim_hooks::{Noise, NoiseFn, Path, PathFn, Velocity, VelocityFn};

use crate::{SimError, SimResult};

/// One simulated mover: a name, a start fix, an RNG seed, and the five hooks
/// that drive it.
///
/// Immutable during a run.  `Entity::default()` walks from `(0, 0)` at unit
/// speed along the identity path on both axes, with no noise.
pub struct Entity {
    pub name:      String,
    pub start:     GeoPoint,
    /// Seed of the [`EntityRng`][posim_core::EntityRng] handed to every hook.
    pub seed:      u64,
    pub velocity:  Box<dyn VelocityFn>,
    pub lat_path:  Box<dyn PathFn>,
    pub lon_path:  Box<dyn PathFn>,
    pub lat_noise: Box<dyn NoiseFn>,
    pub lon_noise: Box<dyn NoiseFn>,
}

impl Entity {
    pub const DEFAULT_NAME: &'static str = "Character";

    pub fn builder(name: impl Into<String>) -> EntityBuilder {
        EntityBuilder::new(name)
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            name:      Self::DEFAULT_NAME.to_owned(),
            start:     GeoPoint::new(0.0, 0.0),
            seed:      0,
            velocity:  Box::new(Velocity::default()),
            lat_path:  Box::new(Path::default()),
            lon_path:  Box::new(Path::default()),
            lat_noise: Box::new(Noise::default()),
            lon_noise: Box::new(Noise::default()),
        }
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("name", &self.name)
            .field("start", &self.start)
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

// ── EntityBuilder ─────────────────────────────────────────────────────────────

/// Fluent builder for [`Entity`].
///
/// Every setting is optional and falls back to the [`Entity::default`]
/// value:
///
/// | Method              | Default              |
/// |---------------------|----------------------|
/// | `.start(p)`         | `(0, 0)`             |
/// | `.seed(s)`          | `0`                  |
/// | `.velocity(v)`      | `Velocity::default()` (constant 1) |
/// | `.lat_path(p)`      | `Path::Identity`     |
/// | `.lon_path(p)`      | `Path::Identity`     |
/// | `.lat_noise(n)`     | `Noise::None`        |
/// | `.lon_noise(n)`     | `Noise::None`        |
///
/// # Example
///
/// ```rust,ignore
/// let (lat, lon) = Path::linear_pair(30.0);
/// let walker = Entity::builder("walker")
///     .start(GeoPoint::new(51.5, -0.12))
///     .velocity(Velocity::random())
///     .paths(lat, lon)
///     .noise(Noise::random())
///     .build()?;
/// ```
pub struct EntityBuilder {
    entity: Entity,
}

impl EntityBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            entity: Entity { name: name.into(), ..Entity::default() },
        }
    }

    pub fn start(mut self, start: impl Into<GeoPoint>) -> Self {
        self.entity.start = start.into();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.entity.seed = seed;
        self
    }

    pub fn velocity(mut self, velocity: impl VelocityFn + 'static) -> Self {
        self.entity.velocity = Box::new(velocity);
        self
    }

    pub fn lat_path(mut self, path: impl PathFn + 'static) -> Self {
        self.entity.lat_path = Box::new(path);
        self
    }

    pub fn lon_path(mut self, path: impl PathFn + 'static) -> Self {
        self.entity.lon_path = Box::new(path);
        self
    }

    /// Set both path hooks at once.
    pub fn paths(self, lat: impl PathFn + 'static, lon: impl PathFn + 'static) -> Self {
        self.lat_path(lat).lon_path(lon)
    }

    pub fn lat_noise(mut self, noise: impl NoiseFn + 'static) -> Self {
        self.entity.lat_noise = Box::new(noise);
        self
    }

    pub fn lon_noise(mut self, noise: impl NoiseFn + 'static) -> Self {
        self.entity.lon_noise = Box::new(noise);
        self
    }

    /// Apply the same noise to both axes.
    pub fn noise(self, noise: impl NoiseFn + Clone + 'static) -> Self {
        self.lat_noise(noise.clone()).lon_noise(noise)
    }

    /// Validate and return the entity.
    ///
    /// # Errors
    /// [`SimError::Config`] if the start position is not a valid fix.
    pub fn build(self) -> SimResult<Entity> {
        if !self.entity.start.is_valid() {
            return Err(SimError::Config(format!(
                "entity {:?} has invalid start position {}",
                self.entity.name, self.entity.start
            )));
        }
        Ok(self.entity)
    }
}
