use super::{GeoFeature, GeoProperties};
use crate::geojson::{decode_collection, parse_geojson};
use anyhow::Result;

/// An ordered GeoJSON `FeatureCollection`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeoCollection {
	pub features: Vec<GeoFeature>,
	pub properties: GeoProperties,
}

impl GeoCollection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, feature: GeoFeature) {
		self.features.push(feature);
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	pub fn iter(&self) -> std::slice::Iter<'_, GeoFeature> {
		self.features.iter()
	}

	pub fn to_json_vec(&self) -> Result<Vec<u8>> {
		Ok(serde_json::to_vec(self)?)
	}

	pub fn to_json_string(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	pub fn from_json_slice(json: &[u8]) -> Result<Self> {
		decode_collection(json)
	}

	pub fn from_json_str(json_str: &str) -> Result<Self> {
		parse_geojson(json_str)
	}
}

impl From<Vec<GeoFeature>> for GeoCollection {
	fn from(features: Vec<GeoFeature>) -> Self {
		Self {
			features,
			properties: GeoProperties::new(),
		}
	}
}

impl FromIterator<GeoFeature> for GeoCollection {
	fn from_iter<T: IntoIterator<Item = GeoFeature>>(iter: T) -> Self {
		GeoCollection::from(iter.into_iter().collect::<Vec<_>>())
	}
}

impl IntoIterator for GeoCollection {
	type Item = GeoFeature;
	type IntoIter = std::vec::IntoIter<GeoFeature>;
	fn into_iter(self) -> Self::IntoIter {
		self.features.into_iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoValue, Geometry};
	use pretty_assertions::assert_eq;

	fn point(x: f64, name: &str) -> GeoFeature {
		let mut feature = GeoFeature::new(Geometry::new_point([x, 0.0]));
		feature.set_property("name".to_string(), name);
		feature
	}

	#[test]
	fn empty_collection() -> Result<()> {
		let collection = GeoCollection::new();
		assert!(collection.is_empty());
		let json = collection.to_json_string()?;
		assert_eq!(json, r#"{"type":"FeatureCollection","features":[]}"#);
		assert_eq!(GeoCollection::from_json_str(&json)?, collection);
		Ok(())
	}

	#[test]
	fn preserves_order_and_properties() -> Result<()> {
		let mut collection: GeoCollection = vec![point(1.0, "a"), point(2.0, "b")].into_iter().collect();
		collection.push(point(3.0, "c"));
		collection.properties.insert("source".to_string(), GeoValue::from("test"));
		assert_eq!(collection.len(), 3);

		let json = collection.to_json_string()?;
		assert_eq!(
			json,
			concat!(
				r#"{"type":"FeatureCollection","features":["#,
				r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,0]},"properties":{"name":"a"}},"#,
				r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[2,0]},"properties":{"name":"b"}},"#,
				r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[3,0]},"properties":{"name":"c"}}"#,
				r#"],"properties":{"source":"test"}}"#
			)
		);

		let decoded = GeoCollection::from_json_slice(json.as_bytes())?;
		let names: Vec<String> = decoded
			.iter()
			.map(|f| f.properties.get("name").map(ToString::to_string).unwrap_or_default())
			.collect();
		assert_eq!(names, vec!["a", "b", "c"]);
		assert_eq!(decoded, collection);
		Ok(())
	}

	#[test]
	fn into_iter_yields_features() {
		let collection = GeoCollection::from(vec![point(1.0, "a"), point(2.0, "b")]);
		assert_eq!(collection.into_iter().count(), 2);
	}
}
