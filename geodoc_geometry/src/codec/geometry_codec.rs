use super::{decode_geometry, encode_geometry_with_precision};
use crate::{CodecConfig, Geometry, GeometryError};
use geodoc_core::json::{JsonObject, JsonValue};
use log::debug;

/// Encoder and decoder bound to a [`CodecConfig`].
///
/// With the default configuration this behaves exactly like [`encode_geometry`](super::encode_geometry)
/// and [`decode_geometry`]. A `precision` rounds encoded coordinates; `strict` additionally
/// verifies every decoded geometry.
#[derive(Clone, Debug, Default)]
pub struct GeometryCodec {
	config: CodecConfig,
}

impl GeometryCodec {
	#[must_use]
	pub fn new(config: CodecConfig) -> Self {
		debug!("geometry codec config: {config:?}");
		Self { config }
	}

	#[must_use]
	pub fn config(&self) -> &CodecConfig {
		&self.config
	}

	#[must_use]
	pub fn encode(&self, geometry: &Geometry) -> JsonObject {
		encode_geometry_with_precision(geometry, self.config.precision)
	}

	pub fn decode(&self, json: &JsonValue) -> Result<Geometry, GeometryError> {
		let geometry = decode_geometry(json)?;
		if self.config.strict {
			geometry.verify()?;
		}
		Ok(geometry)
	}

	/// Parses JSON text and decodes it.
	pub fn decode_str(&self, text: &str) -> Result<Geometry, GeometryError> {
		let json = JsonValue::parse_str(text).map_err(|e| GeometryError::InvalidJson(format!("{e:#}")))?;
		self.decode(&json)
	}
}
