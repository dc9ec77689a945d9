use super::{GeometryTrait, PolygonGeometry};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Represents a collection of polygons, each of which may have an outer ring and optional inner holes.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn verify(&self) -> Result<()> {
		for polygon in &self.0 {
			polygon.verify()?;
		}
		Ok(())
	}

	fn rounded(&self, precision: u8) -> Self {
		Self(self.0.iter().map(|polygon| polygon.rounded(precision)).collect())
	}
}

crate::impl_composite!(MultiPolygonGeometry, PolygonGeometry);
crate::impl_from_array!(MultiPolygonGeometry, PolygonGeometry);

impl Debug for MultiPolygonGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(geometry: geo::MultiPolygon<f64>) -> Self {
		MultiPolygonGeometry(geometry.into_iter().map(PolygonGeometry::from).collect())
	}
}
