use super::{GeometryTrait, PointGeometry};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn verify(&self) -> Result<()> {
		Ok(())
	}

	fn rounded(&self, precision: u8) -> Self {
		Self(self.0.iter().map(|point| point.rounded(precision)).collect())
	}
}

crate::impl_composite!(MultiPointGeometry, PointGeometry);
crate::impl_from_array!(MultiPointGeometry, PointGeometry);

impl Debug for MultiPointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.0).finish()
	}
}

impl From<geo::MultiPoint<f64>> for MultiPointGeometry {
	fn from(geometry: geo::MultiPoint<f64>) -> Self {
		MultiPointGeometry(geometry.into_iter().map(PointGeometry::from).collect())
	}
}
