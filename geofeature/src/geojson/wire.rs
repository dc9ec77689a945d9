use crate::{GeoCollection, GeoFeature, GeoProperties, GeoValue, Geometry};
use anyhow::{Result, anyhow, bail};
use serde::{
	Deserialize, Deserializer, Serialize, Serializer,
	de::{self, MapAccess, Visitor, value::MapAccessDeserializer},
};
use std::{borrow::Cow, fmt, marker::PhantomData};

const FEATURE_TYPE: &str = "Feature";
const FEATURE_COLLECTION_TYPE: &str = "FeatureCollection";

/// Borrowing encode mirror of a feature. Field order is the output order.
#[derive(Serialize)]
pub(super) struct FeatureRef<'a> {
	#[serde(skip_serializing_if = "Option::is_none")]
	id: Option<&'a GeoValue>,
	#[serde(rename = "type")]
	object_type: &'static str,
	geometry: Cow<'a, Geometry>,
	#[serde(skip_serializing_if = "Option::is_none")]
	properties: Option<&'a GeoProperties>,
}

impl<'a> FeatureRef<'a> {
	pub(super) fn new(feature: &'a GeoFeature, precision: Option<u8>) -> Self {
		let geometry = match precision {
			Some(precision) => Cow::Owned(feature.geometry.rounded(precision)),
			None => Cow::Borrowed(&feature.geometry),
		};
		Self {
			id: feature.id.as_ref(),
			object_type: FEATURE_TYPE,
			geometry,
			properties: non_empty(&feature.properties),
		}
	}
}

#[derive(Serialize)]
pub(super) struct CollectionRef<'a> {
	#[serde(rename = "type")]
	object_type: &'static str,
	features: Vec<FeatureRef<'a>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	properties: Option<&'a GeoProperties>,
}

impl<'a> CollectionRef<'a> {
	pub(super) fn new(collection: &'a GeoCollection, precision: Option<u8>) -> Self {
		Self {
			object_type: FEATURE_COLLECTION_TYPE,
			features: collection.features.iter().map(|f| FeatureRef::new(f, precision)).collect(),
			properties: non_empty(&collection.properties),
		}
	}
}

fn non_empty(properties: &GeoProperties) -> Option<&GeoProperties> {
	(!properties.is_empty()).then_some(properties)
}

/// Decodes `T` from a JSON object only. Derived struct impls would also take a positional array.
struct Object<T>(T);

struct ObjectVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ObjectVisitor<T> {
	type Value = T;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a GeoJSON object")
	}

	fn visit_map<A: MapAccess<'de>>(self, map: A) -> std::result::Result<T, A::Error> {
		T::deserialize(MapAccessDeserializer::new(map))
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Object<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		deserializer.deserialize_map(ObjectVisitor(PhantomData)).map(Object)
	}
}

/// Decode mirror of a feature. The geometry stays undecoded until the type has been checked.
#[derive(Deserialize)]
struct WireFeature {
	#[serde(default)]
	id: Option<GeoValue>,
	#[serde(rename = "type", default)]
	object_type: Option<String>,
	#[serde(default)]
	geometry: Option<serde_json::Value>,
	#[serde(default)]
	properties: Option<GeoProperties>,
}

#[derive(Deserialize)]
struct WireCollection {
	#[serde(rename = "type", default)]
	object_type: Option<String>,
	#[serde(default)]
	features: Option<Vec<Object<WireFeature>>>,
	#[serde(default)]
	properties: Option<GeoProperties>,
}

fn check_type(object_type: Option<String>, expected: &str) -> Result<()> {
	let Some(object_type) = object_type else {
		bail!("{expected} must have a type");
	};
	if object_type != expected {
		bail!("not a {expected}: {object_type}");
	}
	Ok(())
}

impl WireFeature {
	fn into_feature(self) -> Result<GeoFeature> {
		check_type(self.object_type, FEATURE_TYPE)?;
		let geometry = self.geometry.ok_or_else(|| anyhow!("Feature is missing 'geometry'"))?;
		Ok(GeoFeature {
			id: self.id,
			geometry: Geometry::deserialize(geometry)?,
			properties: self.properties.unwrap_or_default(),
		})
	}
}

impl WireCollection {
	fn into_collection(self) -> Result<GeoCollection> {
		check_type(self.object_type, FEATURE_COLLECTION_TYPE)?;
		let features = self
			.features
			.unwrap_or_default()
			.into_iter()
			.map(|Object(feature)| feature.into_feature())
			.collect::<Result<Vec<_>>>()?;
		Ok(GeoCollection {
			features,
			properties: self.properties.unwrap_or_default(),
		})
	}
}

pub(crate) fn decode_feature(json: &[u8]) -> Result<GeoFeature> {
	let Object(wire) = serde_json::from_slice::<Object<WireFeature>>(json)?;
	wire.into_feature()
}

pub(crate) fn decode_collection(json: &[u8]) -> Result<GeoCollection> {
	let Object(wire) = serde_json::from_slice::<Object<WireCollection>>(json)?;
	wire.into_collection()
}

impl Serialize for GeoFeature {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		FeatureRef::new(self, None).serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for GeoFeature {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let Object(wire) = Object::<WireFeature>::deserialize(deserializer)?;
		wire.into_feature().map_err(de::Error::custom)
	}
}

impl Serialize for GeoCollection {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		CollectionRef::new(self, None).serialize(serializer)
	}
}

impl<'de> Deserialize<'de> for GeoCollection {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let Object(wire) = Object::<WireCollection>::deserialize(deserializer)?;
		wire.into_collection().map_err(de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(r#"{"type":"Polygon","coordinates":[]}"#, "not a Feature: Polygon")]
	#[case(r#"{"geometry":{"type":"Point","coordinates":[1,2]}}"#, "Feature must have a type")]
	#[case(r#"{"type":"Feature"}"#, "Feature is missing 'geometry'")]
	#[case(r#"{"type":"Feature","geometry":null}"#, "Feature is missing 'geometry'")]
	fn feature_rejects(#[case] json: &str, #[case] message: &str) {
		let error = decode_feature(json.as_bytes()).unwrap_err();
		assert_eq!(error.to_string(), message);
	}

	#[test]
	fn type_is_checked_before_geometry() {
		// the geometry here is invalid too, but the discriminator error wins
		let error = decode_feature(br#"{"type":"Thing","geometry":{"type":"Blob"}}"#).unwrap_err();
		assert_eq!(error.to_string(), "not a Feature: Thing");
	}

	#[rstest]
	#[case(r#"{"type":"Feature","features":[]}"#, "not a FeatureCollection: Feature")]
	#[case(r#"{"features":[]}"#, "FeatureCollection must have a type")]
	#[case(
		r#"{"type":"FeatureCollection","features":[{"type":"Point","coordinates":[1,2]}]}"#,
		"not a Feature: Point"
	)]
	fn collection_rejects(#[case] json: &str, #[case] message: &str) {
		let error = decode_collection(json.as_bytes()).unwrap_err();
		assert_eq!(error.to_string(), message);
	}

	#[rstest]
	#[case(r#"{"type":"FeatureCollection"}"#)]
	#[case(r#"{"type":"FeatureCollection","features":null}"#)]
	#[case(r#"{"type":"FeatureCollection","features":[],"properties":null}"#)]
	fn collection_without_features(#[case] json: &str) {
		let collection = decode_collection(json.as_bytes()).unwrap();
		assert!(collection.features.is_empty());
		assert!(collection.properties.is_empty());
	}

	#[rstest]
	#[case(r#"[null,"Feature",{"type":"Point","coordinates":[1,2]},null]"#)]
	#[case(r#"{"type":"Feature","geometry":["Point",[1,2]]}"#)]
	#[case("null")]
	#[case("42")]
	fn feature_requires_objects(#[case] json: &str) {
		let error = decode_feature(json.as_bytes()).unwrap_err();
		assert!(error.downcast_ref::<serde_json::Error>().is_some(), "{error:?}");
	}

	#[rstest]
	#[case(r#"["FeatureCollection",[]]"#)]
	#[case(r#"["FeatureCollection",[],null]"#)]
	#[case(r#"{"type":"FeatureCollection","features":[[null,"Feature",{"type":"Point","coordinates":[1,2]}]]}"#)]
	#[case(r#"{"type":"FeatureCollection","features":{"type":"Feature"}}"#)]
	fn collection_requires_objects(#[case] json: &str) {
		let error = decode_collection(json.as_bytes()).unwrap_err();
		assert!(error.downcast_ref::<serde_json::Error>().is_some(), "{error:?}");
	}

	#[test]
	fn serde_impls_require_objects() {
		assert!(serde_json::from_str::<GeoFeature>(r#"[null,"Feature",{"type":"Point","coordinates":[1,2]}]"#).is_err());
		assert!(serde_json::from_str::<GeoCollection>(r#"["FeatureCollection",[]]"#).is_err());
		assert!(serde_json::from_str::<Vec<GeoFeature>>(r#"[["Feature"]]"#).is_err());
	}

	#[test]
	fn null_id_and_properties() {
		let json = br#"{"id":null,"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":null}"#;
		let feature = decode_feature(json).unwrap();
		assert_eq!(feature.id, None);
		assert!(feature.properties.is_empty());
	}

	#[test]
	fn unknown_members_are_ignored() {
		let json = br#"{"type":"Feature","bbox":[0,0,1,1],"geometry":{"type":"Point","coordinates":[1,2]},"title":"x"}"#;
		let feature = decode_feature(json).unwrap();
		assert_eq!(feature, GeoFeature::new(Geometry::new_point([1.0, 2.0])));
	}

	#[test]
	fn geometry_errors_pass_through() {
		let error = decode_feature(br#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1]}}"#).unwrap_err();
		assert!(error.downcast_ref::<serde_json::Error>().is_some());
	}

	#[test]
	fn nested_in_foreign_document() {
		#[derive(Debug, Deserialize)]
		struct Layer {
			feature: GeoFeature,
		}
		let layer: Layer =
			serde_json::from_str(r#"{"feature":{"type":"Feature","geometry":{"type":"Point","coordinates":[3,4]}}}"#)
				.unwrap();
		assert_eq!(layer.feature.geometry, Geometry::new_point([3.0, 4.0]));

		let error = serde_json::from_str::<Layer>(r#"{"feature":{"type":"Point","coordinates":[3,4]}}"#).unwrap_err();
		assert!(error.to_string().starts_with("not a Feature: Point"), "{error}");
	}

	#[test]
	fn precision_only_touches_geometry() {
		let mut feature = GeoFeature::new(Geometry::new_point([1.23456, 2.0]));
		feature.set_property("v".to_string(), 1.23456);
		let json = serde_json::to_string(&FeatureRef::new(&feature, Some(2))).unwrap();
		assert_eq!(
			json,
			r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1.23,2]},"properties":{"v":1.23456}}"#
		);
	}
}
