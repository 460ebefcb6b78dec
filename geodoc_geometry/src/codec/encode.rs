use crate::{Geometry, GeometryCollection, GeometryTrait, GeometryType};
use geodoc_core::json::{JsonObject, JsonValue};
use log::trace;

/// Encodes a geometry into a document without rounding.
///
/// ```
/// use geodoc_geometry::{Geometry, LineStringGeometry, codec::encode_geometry};
///
/// let line = LineStringGeometry::new([(1.0, 2.0), (3.0, 5.0), (19.0, 13.0)]);
/// let document = encode_geometry(&Geometry::from(line));
/// assert_eq!(
///     document.stringify(),
///     r#"{"coordinates":[[2,1],[5,3],[13,19]],"type":"LineString"}"#
/// );
/// ```
#[must_use]
pub fn encode_geometry(geometry: &Geometry) -> JsonObject {
	encode_geometry_with_precision(geometry, None)
}

/// Encodes a geometry, rounding every coordinate to `precision` decimal places if given.
/// Collections are encoded recursively with the same precision.
#[must_use]
pub fn encode_geometry_with_precision(geometry: &Geometry, precision: Option<u8>) -> JsonObject {
	trace!("encoding {}", geometry.type_name());
	match geometry {
		Geometry::Point(g) => encode_coordinates(g, precision),
		Geometry::LineString(g) => encode_coordinates(g, precision),
		Geometry::Polygon(g) => encode_coordinates(g, precision),
		Geometry::MultiPoint(g) => encode_coordinates(g, precision),
		Geometry::MultiLineString(g) => encode_coordinates(g, precision),
		Geometry::MultiPolygon(g) => encode_coordinates(g, precision),
		Geometry::GeometryCollection(g) => encode_collection(g, precision),
	}
}

fn encode_coordinates<G: GeometryTrait>(geometry: &G, precision: Option<u8>) -> JsonObject {
	let mut object = JsonObject::new();
	object.set("type", G::TYPE.as_str());
	object.set("coordinates", geometry.to_coord_json(precision));
	object
}

fn encode_collection(collection: &GeometryCollection, precision: Option<u8>) -> JsonObject {
	let geometries = collection
		.into_iter()
		.map(|member| JsonValue::from(encode_geometry_with_precision(member, precision)))
		.collect::<Vec<_>>();

	let mut object = JsonObject::new();
	object.set("type", GeometryType::GeometryCollection.as_str());
	object.set("geometries", geometries);
	object
}
