use crate::{
	Geometry, GeometryCollection, GeometryError, GeometryTrait, GeometryType, LineStringGeometry,
	MultiLineStringGeometry, MultiPointGeometry, MultiPolygonGeometry, PointGeometry, PolygonGeometry,
};
use geodoc_core::json::{JsonObject, JsonValue};
use log::{debug, trace};

/// Turns the members of a geometry object into a geometry of one fixed kind.
type DecodeRule = fn(&JsonObject) -> Result<Geometry, GeometryError>;

/// The dispatch table. One rule per tag, checked for completeness by the compiler.
fn decode_rule(geometry_type: GeometryType) -> DecodeRule {
	match geometry_type {
		GeometryType::Point => decode_coordinates::<PointGeometry>,
		GeometryType::LineString => decode_coordinates::<LineStringGeometry>,
		GeometryType::Polygon => decode_coordinates::<PolygonGeometry>,
		GeometryType::MultiPoint => decode_coordinates::<MultiPointGeometry>,
		GeometryType::MultiLineString => decode_coordinates::<MultiLineStringGeometry>,
		GeometryType::MultiPolygon => decode_coordinates::<MultiPolygonGeometry>,
		GeometryType::GeometryCollection => decode_collection,
	}
}

/// Decodes a geometry from a document.
///
/// The document must be an object whose `"type"` member is one of the seven geometry tags,
/// matched exactly. Members other than `"type"`, `"coordinates"` and `"geometries"` are
/// ignored.
///
/// # Errors
/// - [`GeometryError::MissingTypeTag`] if there is no `"type"` member.
/// - [`GeometryError::UnknownGeometryType`] if the tag is not recognized.
/// - [`GeometryError::MalformedCoordinate`] if `"coordinates"` is missing or has the wrong shape.
/// - [`GeometryError::MalformedDocument`] if the document or a collection member is not an
///   object, `"type"` is not a string, or `"geometries"` is missing or not an array.
///
/// ```
/// use geodoc_geometry::{GeometryError, codec::decode_geometry};
/// use geodoc_core::json::JsonValue;
///
/// let json = JsonValue::parse_str(r#"{"type":"Bogus","coordinates":[0,0]}"#).unwrap();
/// assert_eq!(
///     decode_geometry(&json),
///     Err(GeometryError::UnknownGeometryType("Bogus".to_string()))
/// );
/// ```
pub fn decode_geometry(json: &JsonValue) -> Result<Geometry, GeometryError> {
	match json {
		JsonValue::Object(object) => decode_geometry_object(object),
		other => Err(GeometryError::MalformedDocument(format!(
			"a geometry must be an object, found {}",
			other.type_as_str()
		))),
	}
}

/// Like [`decode_geometry`], for a document that is already known to be an object.
pub fn decode_geometry_object(object: &JsonObject) -> Result<Geometry, GeometryError> {
	let geometry_type: GeometryType = match object.get("type") {
		None => return Err(GeometryError::MissingTypeTag),
		Some(JsonValue::String(tag)) => tag.parse()?,
		Some(other) => {
			return Err(GeometryError::MalformedDocument(format!(
				"'type' must be a string, found {}",
				other.type_as_str()
			)));
		}
	};
	trace!("decoding {geometry_type}");
	decode_rule(geometry_type)(object)
}

fn decode_coordinates<G>(object: &JsonObject) -> Result<Geometry, GeometryError>
where
	G: GeometryTrait + Into<Geometry>,
{
	let coordinates = object
		.get("coordinates")
		.ok_or_else(|| GeometryError::MalformedCoordinate(format!("{} has no 'coordinates' member", G::TYPE)))?;
	G::from_coord_json(coordinates).map(Into::into)
}

fn decode_collection(object: &JsonObject) -> Result<Geometry, GeometryError> {
	let geometries = match object.get("geometries") {
		Some(JsonValue::Array(array)) => array,
		Some(other) => {
			return Err(GeometryError::MalformedDocument(format!(
				"'geometries' must be an array, found {}",
				other.type_as_str()
			)));
		}
		None => {
			return Err(GeometryError::MalformedDocument(
				"GeometryCollection has no 'geometries' member".to_string(),
			));
		}
	};
	debug!("decoding GeometryCollection with {} members", geometries.len());

	geometries
		.iter()
		.map(decode_geometry)
		.collect::<Result<Vec<_>, _>>()
		.map(|members| Geometry::GeometryCollection(GeometryCollection::new(members)))
}
