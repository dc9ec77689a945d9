// Geometry value types of the `geofeature_geometry` crate: `Coordinates`, the single geometries
// (`PointGeometry`, `LineStringGeometry`, `PolygonGeometry` built from `RingGeometry`) and their
// multi-geometry counterparts. Every type serializes to the `coordinates` member of a GeoJSON geometry.

mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod point;
mod polygon;
mod ring;
mod traits;

pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
