use super::*;
use crate::{
	GeometryError,
	codec::{decode_geometry, encode_geometry},
};
use geodoc_core::json::{JsonObject, JsonValue};
use std::fmt::Debug;

/// Any of the seven geometry kinds.
///
/// Encoding and decoding match on this enum exhaustively, so adding a kind cannot go unnoticed
/// by the codec.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Geometry {
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
}

impl Geometry {
	#[must_use]
	pub fn geometry_type(&self) -> GeometryType {
		match self {
			Geometry::Point(_) => GeometryType::Point,
			Geometry::LineString(_) => GeometryType::LineString,
			Geometry::Polygon(_) => GeometryType::Polygon,
			Geometry::MultiPoint(_) => GeometryType::MultiPoint,
			Geometry::MultiLineString(_) => GeometryType::MultiLineString,
			Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
			Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
		}
	}

	#[must_use]
	pub fn type_name(&self) -> &'static str {
		self.geometry_type().as_str()
	}

	/// Wraps single geometries into their multi counterpart. Multi geometries and collections
	/// are returned unchanged.
	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			Geometry::MultiPoint(_)
			| Geometry::MultiLineString(_)
			| Geometry::MultiPolygon(_)
			| Geometry::GeometryCollection(_) => self,
		}
	}

	/// Checks the GeoJSON validity rules recursively.
	pub fn verify(&self) -> Result<(), GeometryError> {
		match self {
			Geometry::Point(g) => g.verify(),
			Geometry::LineString(g) => g.verify(),
			Geometry::Polygon(g) => g.verify(),
			Geometry::MultiPoint(g) => g.verify(),
			Geometry::MultiLineString(g) => g.verify(),
			Geometry::MultiPolygon(g) => g.verify(),
			Geometry::GeometryCollection(g) => g.verify(),
		}
	}

	/// Encodes the geometry into a document. See [`encode_geometry`].
	#[must_use]
	pub fn to_json(&self) -> JsonObject {
		encode_geometry(self)
	}

	/// Decodes a geometry from a document. See [`decode_geometry`].
	pub fn from_json(json: &JsonValue) -> Result<Self, GeometryError> {
		decode_geometry(json)
	}

	/// Parses JSON text and decodes it.
	pub fn parse_str(text: &str) -> Result<Self, GeometryError> {
		let json = JsonValue::parse_str(text).map_err(|e| GeometryError::InvalidJson(format!("{e:#}")))?;
		decode_geometry(&json)
	}

	/// Encodes the geometry and returns compact JSON text.
	#[must_use]
	pub fn stringify(&self) -> String {
		self.to_json().stringify()
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner: &dyn Debug = match self {
			Geometry::Point(g) => g,
			Geometry::LineString(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::GeometryCollection(g) => g,
		};
		f.debug_tuple(self.type_name()).field(inner).finish()
	}
}

macro_rules! impl_from_variant {
	($($variant:ident($t:ty)),* $(,)?) => {$(
		impl From<$t> for Geometry {
			fn from(geometry: $t) -> Self {
				Geometry::$variant(geometry)
			}
		}
	)*};
}

impl_from_variant!(
	Point(PointGeometry),
	LineString(LineStringGeometry),
	Polygon(PolygonGeometry),
	MultiPoint(MultiPointGeometry),
	MultiLineString(MultiLineStringGeometry),
	MultiPolygon(MultiPolygonGeometry),
	GeometryCollection(GeometryCollection),
);
