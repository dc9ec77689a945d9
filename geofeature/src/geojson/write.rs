use super::wire::{CollectionRef, FeatureRef};
use crate::{GeoCollection, GeoFeature};
use anyhow::Result;
use log::trace;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Output settings for [`write_geojson`] and [`write_geojson_feature`].
///
/// Can be embedded in a configuration file:
/// ```yaml
/// pretty: true
/// precision: 6
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct WriteOptions {
	/// Indented multi-line output instead of a single line.
	pub pretty: bool,
	/// Round coordinates to this many decimal places.
	pub precision: Option<u8>,
}

impl WriteOptions {
	#[must_use]
	pub fn pretty() -> Self {
		Self {
			pretty: true,
			precision: None,
		}
	}

	#[must_use]
	pub fn with_precision(mut self, precision: u8) -> Self {
		self.precision = Some(precision);
		self
	}
}

pub fn write_geojson(writer: impl Write, collection: &GeoCollection, options: &WriteOptions) -> Result<()> {
	trace!(
		"writing FeatureCollection with {} features, {options:?}",
		collection.features.len()
	);
	write_json(writer, &CollectionRef::new(collection, options.precision), options)
}

pub fn write_geojson_feature(writer: impl Write, feature: &GeoFeature, options: &WriteOptions) -> Result<()> {
	trace!("writing {} Feature, {options:?}", feature.geometry.get_type_name());
	write_json(writer, &FeatureRef::new(feature, options.precision), options)
}

fn write_json<T: Serialize>(mut writer: impl Write, value: &T, options: &WriteOptions) -> Result<()> {
	if options.pretty {
		serde_json::to_writer_pretty(&mut writer, value)?;
	} else {
		serde_json::to_writer(&mut writer, value)?;
	}
	writer.flush()?;
	Ok(())
}
