//! GeoJSON encoding of features and feature collections.
//!
//! The readers validate the `"type"` discriminator of every object before its geometry is
//! decoded. The writers omit `id` when absent and `properties` when empty.

mod read;
mod wire;
mod write;

pub use read::*;
pub(crate) use wire::{decode_collection, decode_feature};
pub use write::*;
