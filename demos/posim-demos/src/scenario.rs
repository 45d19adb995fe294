//! JSON scenario files.
//!
//! ```json
//! {
//!   "config":   { "seed": 7, "num_threads": 4 },
//!   "window":   { "start": "2021-03-13T00:00:00", "end": "2021-03-13T00:04:16", "timestep": 1 },
//!   "output":   "trajectories.csv",
//!   "entities": [
//!     { "name": "east", "velocity": { "kind": "random" },
//!       "lat_path": { "kind": "linear", "axis": "lat", "azimuth_deg": 90 },
//!       "lon_path": { "kind": "linear", "axis": "lon", "azimuth_deg": 90 } },
//!     { "name": "hiker", "waypoints": [ { "lat": 53.080225, "lon": -4.020847 },
//!                                      { "lat": 53.078237, "lon": -4.040373 } ],
//!       "velocity": { "kind": "constant", "velocity": 1.0 }, "stop_at_end": true }
//!   ]
//! }
//! ```
//!
//! Every field except `window` and `entities` is optional.  An entity with
//! `waypoints` follows the converted route and starts on its first waypoint
//! unless `start` is given; `lat_path`/`lon_path` are ignored for it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use posim_convert::build_path;
use posim_core::{Ellipsoid, EntityRng, GeoPoint, SimConfig, TimeWindow};
use posim_hooks::{Noise, Path as PathShape, Velocity};
use posim_sim::Entity;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub config:   SimConfig,
    pub window:   TimeWindow,
    pub entities: Vec<EntitySpec>,
    #[serde(default)]
    pub output:   Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntitySpec {
    #[serde(default = "default_name")]
    pub name:        String,
    #[serde(default)]
    pub start:       Option<GeoPoint>,
    /// Overrides the seed derived from `config.seed`.
    #[serde(default)]
    pub seed:        Option<u64>,
    #[serde(default)]
    pub velocity:    Velocity,
    #[serde(default)]
    pub lat_path:    PathShape,
    #[serde(default)]
    pub lon_path:    PathShape,
    #[serde(default)]
    pub lat_noise:   Noise,
    #[serde(default)]
    pub lon_noise:   Noise,
    #[serde(default)]
    pub waypoints:   Option<Vec<GeoPoint>>,
    /// With `waypoints` and a constant velocity: halt on the last waypoint.
    #[serde(default)]
    pub stop_at_end: bool,
}

fn default_name() -> String {
    Entity::DEFAULT_NAME.to_owned()
}

impl Scenario {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let scenario: Scenario = serde_json::from_str(text)?;
        scenario.config.validate()?;
        scenario.window.duration()?;
        Ok(scenario)
    }

    /// Build the entity population, converting waypoint routes on `geodesy`.
    pub fn entities(&self, geodesy: &Ellipsoid) -> Result<Vec<Entity>> {
        self.entities
            .iter()
            .enumerate()
            .map(|(index, spec)| {
                spec.build(EntityRng::derive_seed(self.config.seed, index), geodesy)
                    .with_context(|| format!("entity #{index} ({:?})", spec.name))
            })
            .collect()
    }
}

impl EntitySpec {
    fn build(&self, derived_seed: u64, geodesy: &Ellipsoid) -> Result<Entity> {
        let builder = Entity::builder(self.name.clone())
            .seed(self.seed.unwrap_or(derived_seed))
            .lat_noise(self.lat_noise.clone())
            .lon_noise(self.lon_noise.clone());

        let builder = match &self.waypoints {
            Some(waypoints) => {
                let (lat, lon, total) = build_path(waypoints, geodesy)?.into_parts();
                let velocity = match (&self.velocity, self.stop_at_end) {
                    (Velocity::Constant { velocity }, true) => {
                        Velocity::StopAfter { velocity: *velocity, stop_time: total / velocity }
                    }
                    (_, true) => bail!("stop_at_end needs a constant velocity"),
                    (v, false) => v.clone(),
                };
                builder
                    .start(self.start.unwrap_or(waypoints[0]))
                    .velocity(velocity)
                    .paths(lat, lon)
            }
            None => {
                if self.stop_at_end {
                    bail!("stop_at_end needs waypoints");
                }
                builder
                    .start(self.start.unwrap_or(GeoPoint::new(0.0, 0.0)))
                    .velocity(self.velocity.clone())
                    .paths(self.lat_path.clone(), self.lon_path.clone())
            }
        };
        Ok(builder.build()?)
    }
}
