//! GeoJSON `Feature` and `FeatureCollection` encoding and decoding (RFC 7946).
//!
//! [`GeoFeature`] and [`GeoCollection`] are plain values; all GeoJSON specifics (the `"type"`
//! discriminator, omission of empty members) live in the [`geojson`] module. Geometries are
//! encoded by the [`geofeature_geometry`] crate, re-exported here.

mod geo;
pub mod geojson;

pub use geo::*;
pub use geofeature_geometry::*;
pub use geojson::*;
