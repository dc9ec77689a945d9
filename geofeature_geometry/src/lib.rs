//! Geometry values for `geofeature`.
//!
//! [`Geometry`] and its component types ([`PointGeometry`], [`PolygonGeometry`], ...) implement
//! `serde::Serialize` and `serde::Deserialize` using the GeoJSON geometry object encoding
//! (RFC 7946, section 3.1), so they can be embedded in any serde document.

mod geometry;
mod types;

pub use geometry::*;
pub use types::*;
