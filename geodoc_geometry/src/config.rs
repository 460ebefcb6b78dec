use serde::Deserialize;

/// Options for [`GeometryCodec`](crate::GeometryCodec).
///
/// ```yaml
/// precision: 6
/// strict: true
/// ```
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CodecConfig {
	/// Round encoded coordinates to this many decimal places.
	/// Defaults to no rounding.
	#[serde(default)]
	pub precision: Option<u8>,

	/// Reject decoded geometries that are not valid GeoJSON: line strings with fewer than two
	/// positions, and rings that are not closed or have fewer than four positions.
	/// Defaults to `false`.
	#[serde(default)]
	pub strict: bool,
}
