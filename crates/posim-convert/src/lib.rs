//! `posim-convert` — turn a real polyline into a synthetic path function.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`piecewise`] | `PiecewisePath`, `PiecewiseAxis`, `BuiltPath`, `build_path` |
//! | [`error`]     | `ConvertError`, `ConvertResult<T>`                        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use posim_convert::build_path;
//! use posim_core::{Ellipsoid, GeoPoint};
//!
//! let route = [GeoPoint::new(53.0802, -4.0208), GeoPoint::new(53.0782, -4.0404)];
//! let (lat_path, lon_path, length) = build_path(&route, &Ellipsoid::wgs84())?.into_parts();
//! ```

pub mod error;
pub mod piecewise;


pub use error::{ConvertError, ConvertResult};
pub use piecewise::{build_path, BuiltPath, PiecewiseAxis, PiecewisePath, Segment};
