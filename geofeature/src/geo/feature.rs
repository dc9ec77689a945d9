use super::{GeoProperties, GeoValue};
use crate::{
	Geometry,
	geojson::{decode_feature, parse_geojson_feature},
};
use anyhow::Result;

/// A single GeoJSON `Feature`: one geometry, its properties and an optional identifier.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<GeoValue>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	pub fn set_id<T>(&mut self, id: T)
	where
		GeoValue: From<T>,
	{
		self.id = Some(GeoValue::from(id));
	}

	pub fn set_properties(&mut self, properties: GeoProperties) {
		self.properties = properties;
	}

	pub fn set_property<T>(&mut self, key: String, value: T)
	where
		GeoValue: From<T>,
	{
		self.properties.insert(key, GeoValue::from(value));
	}

	pub fn to_json_vec(&self) -> Result<Vec<u8>> {
		Ok(serde_json::to_vec(self)?)
	}

	pub fn to_json_string(&self) -> Result<String> {
		Ok(serde_json::to_string(self)?)
	}

	pub fn from_json_slice(json: &[u8]) -> Result<Self> {
		decode_feature(json)
	}

	pub fn from_json_str(json: &str) -> Result<Self> {
		parse_geojson_feature(json)
	}

	#[cfg(test)]
	pub fn new_example() -> Self {
		Self {
			id: Some(GeoValue::from(13)),
			geometry: Geometry::new_example(),
			properties: GeoProperties::from(vec![
				("name", GeoValue::from("Nice")),
				("population", GeoValue::from(348085)),
				("is_nice", GeoValue::from(true)),
			]),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[test]
	fn new_has_no_id_and_no_properties() {
		let feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		assert_eq!(feature.id, None);
		assert!(feature.properties.is_empty());
	}

	#[test]
	fn setters() {
		let mut feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		feature.set_id("abc");
		feature.set_property("a".to_string(), 1);
		feature.set_property("b".to_string(), "x");
		assert_eq!(feature.id, Some(GeoValue::from("abc")));
		assert_eq!(feature.properties.len(), 2);

		feature.set_properties(GeoProperties::new());
		assert!(feature.properties.is_empty());
	}

	#[test]
	fn point_without_id_and_properties() -> Result<()> {
		let feature = GeoFeature::new(Geometry::new_point([1.0, 2.0]));
		assert_eq!(
			feature.to_json_string()?,
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]}}"#
		);
		Ok(())
	}

	#[test]
	fn example_to_json() -> Result<()> {
		let mut feature = GeoFeature::new_example();
		feature.geometry = Geometry::new_line_string(&[[0.5, 1.0], [2.0, 3.25]]);
		assert_eq!(
			feature.to_json_string()?,
			concat!(
				r#"{"id":13,"type":"Feature","#,
				r#""geometry":{"type":"LineString","coordinates":[[0.5,1],[2,3.25]]},"#,
				r#""properties":{"is_nice":true,"name":"Nice","population":348085}}"#
			)
		);
		Ok(())
	}

	#[test]
	fn round_trip_example() -> Result<()> {
		let feature = GeoFeature::new_example();
		assert_eq!(GeoFeature::from_json_slice(&feature.to_json_vec()?)?, feature);
		assert_eq!(GeoFeature::from_json_str(&feature.to_json_string()?)?, feature);
		Ok(())
	}

	#[rstest]
	#[case(GeoValue::from(7), r#"{"id":7,"#)]
	#[case(GeoValue::from(-7), r#"{"id":-7,"#)]
	#[case(GeoValue::from("way/42"), r#"{"id":"way/42","#)]
	#[case(GeoValue::from(1.5), r#"{"id":1.5,"#)]
	fn id_is_written_first(#[case] id: GeoValue, #[case] prefix: &str) -> Result<()> {
		let mut feature = GeoFeature::new(Geometry::new_point([0.0, 0.0]));
		feature.id = Some(id);
		let json = feature.to_json_string()?;
		assert!(json.starts_with(prefix), "{json}");
		assert_eq!(GeoFeature::from_json_str(&json)?, feature);
		Ok(())
	}

	#[test]
	fn non_finite_coordinate_fails_to_encode() {
		let feature = GeoFeature::new(Geometry::new_point([f64::NAN, 0.0]));
		assert!(feature.to_json_vec().is_err());
	}
}
