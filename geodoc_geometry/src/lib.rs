//! Typed GeoJSON geometries and the codec that converts them to and from generic documents.
//!
//! Geometries are built from `(latitude, longitude)` pairs, either through constructors, the
//! builders, or the functions in [`geojson`]. The [`codec`] turns them into documents of the
//! form `{ "type": ..., "coordinates": ... }` (longitude first, as GeoJSON requires) and back.
//!
//! ```
//! use geodoc_geometry::{Geometry, geojson};
//!
//! let point = geojson::point(3.0, 7.0);
//! let document = Geometry::from(point).to_json();
//! assert_eq!(document.stringify(), r#"{"coordinates":[7,3],"type":"Point"}"#);
//! assert_eq!(Geometry::from_json(&document.into()).unwrap(), Geometry::Point(point));
//! ```

mod builder;
pub mod codec;
mod config;
mod error;
mod geo;
pub mod geojson;

pub use builder::*;
pub use codec::GeometryCodec;
pub use config::*;
pub use error::*;
pub use geo::*;
