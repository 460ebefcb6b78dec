//! Error type used by the codec.

use thiserror::Error;

/// Everything that can go wrong while turning a document into a geometry.
///
/// Encoding never fails, so all variants describe input that does not follow the GeoJSON
/// geometry layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
	/// The document has no `"type"` member.
	#[error("geometry document has no 'type' member")]
	MissingTypeTag,

	/// The `"type"` member names no known geometry. Matching is exact and case-sensitive.
	#[error("unknown geometry type '{0}'")]
	UnknownGeometryType(String),

	/// Coordinates are missing, nested at the wrong depth, have the wrong arity, or contain
	/// something other than numbers.
	#[error("malformed coordinates: {0}")]
	MalformedCoordinate(String),

	/// The document itself has the wrong shape, e.g. it is not an object or a collection has
	/// no `"geometries"` array.
	#[error("malformed geometry document: {0}")]
	MalformedDocument(String),

	/// Strict mode only: the geometry decoded fine but is not valid GeoJSON.
	#[error("invalid geometry: {0}")]
	InvalidGeometry(String),

	/// The input text is not JSON at all.
	#[error("invalid JSON: {0}")]
	InvalidJson(String),
}
