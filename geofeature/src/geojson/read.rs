use super::wire::{decode_collection, decode_feature};
use crate::{GeoCollection, GeoFeature};
use anyhow::Result;
use log::trace;
use std::io::Read;

/// Decodes a GeoJSON `FeatureCollection`.
pub fn parse_geojson(json: &str) -> Result<GeoCollection> {
	let collection = decode_collection(json.as_bytes())?;
	trace!("decoded FeatureCollection with {} features", collection.features.len());
	Ok(collection)
}

/// Decodes a single GeoJSON `Feature`.
pub fn parse_geojson_feature(json: &str) -> Result<GeoFeature> {
	let feature = decode_feature(json.as_bytes())?;
	trace!("decoded {} Feature", feature.geometry.get_type_name());
	Ok(feature)
}

pub fn read_geojson(mut reader: impl Read) -> Result<GeoCollection> {
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;
	trace!("read {} bytes of GeoJSON", buffer.len());
	let collection = decode_collection(&buffer)?;
	trace!("decoded FeatureCollection with {} features", collection.features.len());
	Ok(collection)
}

pub fn read_geojson_feature(mut reader: impl Read) -> Result<GeoFeature> {
	let mut buffer = Vec::new();
	reader.read_to_end(&mut buffer)?;
	trace!("read {} bytes of GeoJSON", buffer.len());
	decode_feature(&buffer)
}
