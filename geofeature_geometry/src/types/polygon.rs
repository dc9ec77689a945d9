use super::{GeometryTrait, RingGeometry};
use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A polygon: the first ring is the outer boundary, any further rings are holes.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl GeometryTrait for PolygonGeometry {
	fn verify(&self) -> Result<()> {
		ensure!(!self.0.is_empty(), "Polygon must have at least one ring");
		for ring in &self.0 {
			ring.verify()?;
		}
		Ok(())
	}

	fn rounded(&self, precision: u8) -> Self {
		Self(self.0.iter().map(|ring| ring.rounded(precision)).collect())
	}
}

crate::impl_composite!(PolygonGeometry, RingGeometry);
crate::impl_from_array!(PolygonGeometry, RingGeometry);

impl Debug for PolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(geometry: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = geometry.into_inner();
		let mut rings = Vec::with_capacity(interiors.len() + 1);
		rings.push(RingGeometry::from(exterior));
		for interior in interiors {
			rings.push(RingGeometry::from(interior));
		}
		PolygonGeometry(rings)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn verify() {
		let polygon = PolygonGeometry::from(&[[[0, 0], [5, 0], [5, 5], [0, 5], [0, 0]]]);
		assert!(polygon.verify().is_ok());
		assert_eq!(
			PolygonGeometry::new().verify().unwrap_err().to_string(),
			"Polygon must have at least one ring"
		);
		let open = PolygonGeometry::from(&[[[0, 0], [5, 0], [5, 5], [0, 5]]]);
		assert!(open.verify().is_err());
	}

	#[test]
	fn serialize() {
		let polygon = PolygonGeometry::from(&[[[0, 0], [1, 0], [1, 1], [0, 0]]]);
		assert_eq!(serde_json::to_string(&polygon).unwrap(), "[[[0,0],[1,0],[1,1],[0,0]]]");
	}

	#[test]
	fn from_geo_polygon() {
		let exterior = geo::LineString::from(vec![(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 0.0)]);
		let hole = geo::LineString::from(vec![(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 1.0)]);
		let polygon = PolygonGeometry::from(geo::Polygon::new(exterior, vec![hole]));
		assert_eq!(polygon.len(), 2);
		assert!(polygon.verify().is_ok());
	}
}
