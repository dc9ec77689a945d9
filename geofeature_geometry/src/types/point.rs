use super::{Coordinates, GeometryTrait};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Represents a single geographic or geometric point defined by x and y coordinates.
///
/// This is the simplest geometric type and is often used as a building block for more complex geometries.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}
	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}
	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}
	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	/// A point is always valid.
	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn rounded(&self, precision: u8) -> Self {
		Self(self.0.rounded(precision))
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	/// Allows creating a `PointGeometry` from any type convertible into `Coordinates`, such as arrays or tuples.
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_and_accessors() {
		let point = PointGeometry::new(Coordinates::new(1.0, 2.0));
		assert_eq!(point.x(), 1.0);
		assert_eq!(point.y(), 2.0);
		assert_eq!(point.as_coord(), &Coordinates::new(1.0, 2.0));
	}

	#[test]
	fn eq_and_ne() {
		assert_eq!(PointGeometry::from(&[1, 2]), PointGeometry::from([1.0, 2.0]));
		assert_ne!(PointGeometry::from(&[1, 2]), PointGeometry::from(&[3, 4]));
	}

	#[test]
	fn debug_format() {
		assert_eq!(format!("{:?}", PointGeometry::from(&[1, 2])), "[1.0, 2.0]");
	}

	#[test]
	fn serializes_as_position() {
		assert_eq!(serde_json::to_string(&PointGeometry::from([1.5, 2.0])).unwrap(), "[1.5,2]");
	}

	#[test]
	fn from_geo_point() {
		assert_eq!(PointGeometry::from(geo::Point::new(3.0, 4.0)), PointGeometry::from(&[3, 4]));
	}
}
