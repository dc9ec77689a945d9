use super::{Coordinates, GeometryTrait};
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Represents a sequence of connected coordinates forming a line, typically used for polylines or paths in 2D space.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl GeometryTrait for LineStringGeometry {
	/// Ensures that the `LineStringGeometry` has at least two points.
	fn verify(&self) -> Result<()> {
		ensure!(self.0.len() >= 2, "LineString must have at least two points");
		Ok(())
	}

	fn rounded(&self, precision: u8) -> Self {
		Self(self.0.iter().map(|c| c.rounded(precision)).collect())
	}
}

crate::impl_composite!(LineStringGeometry, Coordinates);
crate::impl_from_array!(LineStringGeometry, Coordinates);

impl Debug for LineStringGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(geometry: geo::LineString<f64>) -> Self {
		LineStringGeometry(geometry.into_iter().map(Coordinates::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn verify() {
		assert!(LineStringGeometry::from(&[[0, 0], [1, 1]]).verify().is_ok());
		assert!(LineStringGeometry::from(&[[0, 0]]).verify().is_err());
		assert!(LineStringGeometry::new().verify().is_err());
	}

	#[test]
	fn composite_access() {
		let mut line = LineStringGeometry::new();
		assert!(line.is_empty());
		line.push(Coordinates::new(1.0, 2.0));
		line.push(Coordinates::new(3.0, 4.0));
		assert_eq!(line.len(), 2);
		assert_eq!(line.first(), Some(&Coordinates::new(1.0, 2.0)));
		assert_eq!(line.last(), Some(&Coordinates::new(3.0, 4.0)));
	}

	#[test]
	fn serde() {
		let line = LineStringGeometry::from(&[[1, 2], [3, 4]]);
		let json = serde_json::to_string(&line).unwrap();
		assert_eq!(json, "[[1,2],[3,4]]");
		assert_eq!(serde_json::from_str::<LineStringGeometry>(&json).unwrap(), line);
	}

	#[test]
	fn from_geo_linestring() {
		let ls = geo::LineString::from(vec![(0.0, 0.0), (1.0, 1.0)]);
		assert_eq!(LineStringGeometry::from(ls), LineStringGeometry::from(&[[0, 0], [1, 1]]));
	}
}
