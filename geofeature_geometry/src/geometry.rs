use crate::*;
use anyhow::{Result, ensure};
use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, MapAccess, Visitor, value::MapAccessDeserializer},
	ser,
};
use std::fmt::{self, Debug};

/// A GeoJSON geometry value.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(Vec<Geometry>),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		PointGeometry: From<T>,
	{
		Self::Point(PointGeometry::from(value))
	}
	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}
	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}
	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}
	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}
	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}
	pub fn new_geometry_collection(geometries: Vec<Geometry>) -> Self {
		Self::GeometryCollection(geometries)
	}

	/// The GeoJSON `type` member of this geometry.
	#[must_use]
	pub fn get_type_name(&self) -> &'static str {
		match self {
			Geometry::Point(_) => "Point",
			Geometry::LineString(_) => "LineString",
			Geometry::Polygon(_) => "Polygon",
			Geometry::MultiPoint(_) => "MultiPoint",
			Geometry::MultiLineString(_) => "MultiLineString",
			Geometry::MultiPolygon(_) => "MultiPolygon",
			Geometry::GeometryCollection(_) => "GeometryCollection",
		}
	}

	pub fn verify(&self) -> Result<()> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::GeometryCollection(geometries) => {
				for geometry in geometries {
					ensure!(
						!matches!(geometry, Geometry::GeometryCollection(_)),
						"GeometryCollection must not contain another GeometryCollection"
					);
					geometry.verify()?;
				}
				Ok(())
			}
		}
	}

	/// Returns a copy with every coordinate rounded to `precision` decimals.
	#[must_use]
	pub fn rounded(&self, precision: u8) -> Self {
		match self {
			Geometry::Point(g) => Geometry::Point(g.rounded(precision)),
			Geometry::LineString(g) => Geometry::LineString(g.rounded(precision)),
			Geometry::Polygon(g) => Geometry::Polygon(g.rounded(precision)),
			Geometry::MultiPoint(g) => Geometry::MultiPoint(g.rounded(precision)),
			Geometry::MultiLineString(g) => Geometry::MultiLineString(g.rounded(precision)),
			Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.rounded(precision)),
			Geometry::GeometryCollection(geometries) => {
				Geometry::GeometryCollection(geometries.iter().map(|g| g.rounded(precision)).collect())
			}
		}
	}

	/// Encodes this geometry as a GeoJSON geometry object.
	pub fn to_json_vec(&self) -> Result<Vec<u8>> {
		Ok(serde_json::to_vec(self)?)
	}

	pub fn to_json_string(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	/// Decodes a GeoJSON geometry object. The result is verified.
	pub fn from_json_slice(json: &[u8]) -> Result<Self> {
		Ok(serde_json::from_slice(json)?)
	}

	pub fn from_json_str(json: &str) -> Result<Self> {
		Ok(serde_json::from_str(json)?)
	}

	pub fn new_example() -> Self {
		Self::new_multi_polygon(vec![
			vec![
				vec![[0.0, 0.0], [5.0, 0.0], [2.5, 4.0], [0.0, 0.0]],
				vec![[2.0, 1.0], [2.5, 2.0], [3.0, 1.0], [2.0, 1.0]],
			],
			vec![
				vec![[6.0, 0.0], [9.0, 0.0], [9.0, 4.0], [6.0, 4.0], [6.0, 0.0]],
				vec![[7.0, 1.0], [7.0, 3.0], [8.0, 3.0], [8.0, 1.0], [7.0, 1.0]],
			],
		])
	}
}

#[derive(Serialize)]
#[serde(tag = "type")]
enum GeometryRef<'a> {
	Point { coordinates: &'a PointGeometry },
	LineString { coordinates: &'a LineStringGeometry },
	Polygon { coordinates: &'a PolygonGeometry },
	MultiPoint { coordinates: &'a MultiPointGeometry },
	MultiLineString { coordinates: &'a MultiLineStringGeometry },
	MultiPolygon { coordinates: &'a MultiPolygonGeometry },
	GeometryCollection { geometries: &'a [Geometry] },
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum GeometryWire {
	Point { coordinates: PointGeometry },
	LineString { coordinates: LineStringGeometry },
	Polygon { coordinates: PolygonGeometry },
	MultiPoint { coordinates: MultiPointGeometry },
	MultiLineString { coordinates: MultiLineStringGeometry },
	MultiPolygon { coordinates: MultiPolygonGeometry },
	GeometryCollection { geometries: Vec<Geometry> },
}

impl<'a> From<&'a Geometry> for GeometryRef<'a> {
	fn from(geometry: &'a Geometry) -> Self {
		match geometry {
			Geometry::Point(coordinates) => GeometryRef::Point { coordinates },
			Geometry::LineString(coordinates) => GeometryRef::LineString { coordinates },
			Geometry::Polygon(coordinates) => GeometryRef::Polygon { coordinates },
			Geometry::MultiPoint(coordinates) => GeometryRef::MultiPoint { coordinates },
			Geometry::MultiLineString(coordinates) => GeometryRef::MultiLineString { coordinates },
			Geometry::MultiPolygon(coordinates) => GeometryRef::MultiPolygon { coordinates },
			Geometry::GeometryCollection(geometries) => GeometryRef::GeometryCollection { geometries },
		}
	}
}

impl From<GeometryWire> for Geometry {
	fn from(wire: GeometryWire) -> Self {
		match wire {
			GeometryWire::Point { coordinates } => Geometry::Point(coordinates),
			GeometryWire::LineString { coordinates } => Geometry::LineString(coordinates),
			GeometryWire::Polygon { coordinates } => Geometry::Polygon(coordinates),
			GeometryWire::MultiPoint { coordinates } => Geometry::MultiPoint(coordinates),
			GeometryWire::MultiLineString { coordinates } => Geometry::MultiLineString(coordinates),
			GeometryWire::MultiPolygon { coordinates } => Geometry::MultiPolygon(coordinates),
			GeometryWire::GeometryCollection { geometries } => Geometry::GeometryCollection(geometries),
		}
	}
}

impl Serialize for Geometry {
	/// Only valid geometries are written, so everything encoded can be decoded again.
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.verify().map_err(ser::Error::custom)?;
		GeometryRef::from(self).serialize(serializer)
	}
}

/// Accepts a map only. The tagged derive would also take a sequence like `["Point",[1,2]]`.
struct GeometryVisitor;

impl<'de> Visitor<'de> for GeometryVisitor {
	type Value = GeometryWire;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a GeoJSON geometry object")
	}

	fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<GeometryWire, A::Error> {
		GeometryWire::deserialize(MapAccessDeserializer::new(map))
	}
}

impl<'de> Deserialize<'de> for Geometry {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let geometry = Geometry::from(deserializer.deserialize_map(GeometryVisitor)?);
		geometry.verify().map_err(de::Error::custom)?;
		Ok(geometry)
	}
}

impl From<geo::Geometry<f64>> for Geometry {
	fn from(geometry: geo::Geometry<f64>) -> Self {
		match geometry {
			geo::Geometry::Point(g) => Geometry::new_point(g),
			geo::Geometry::Line(g) => Geometry::new_line_string(vec![g.start, g.end]),
			geo::Geometry::LineString(g) => Geometry::LineString(g.into()),
			geo::Geometry::Polygon(g) => Geometry::Polygon(g.into()),
			geo::Geometry::MultiPoint(g) => Geometry::MultiPoint(g.into()),
			geo::Geometry::MultiLineString(g) => Geometry::MultiLineString(g.into()),
			geo::Geometry::MultiPolygon(g) => Geometry::MultiPolygon(g.into()),
			geo::Geometry::GeometryCollection(g) => {
				Geometry::GeometryCollection(g.into_iter().map(Geometry::from).collect())
			}
			geo::Geometry::Rect(g) => Geometry::Polygon(g.to_polygon().into()),
			geo::Geometry::Triangle(g) => Geometry::Polygon(g.to_polygon().into()),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.get_type_name()).field(inner).finish()
	}
}
