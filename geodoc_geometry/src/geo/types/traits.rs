use crate::{GeometryError, GeometryType};
use geodoc_core::json::JsonValue;
use std::fmt::Debug;

/// Common interface of the six coordinate-bearing geometry kinds.
///
/// Each kind knows its type tag and how to convert its coordinates to and from the nested
/// arrays stored under `"coordinates"`. The nesting depth is fixed per kind: one level for a
/// point, two for a line string or multi point, three for a polygon or multi line string, and
/// four for a multi polygon.
pub trait GeometryTrait: Debug + Clone + PartialEq + Sized {
	/// Tag written to and read from the `"type"` member.
	const TYPE: GeometryType;

	/// Checks the GeoJSON validity rules, e.g. minimum position counts and closed rings.
	/// Only called in strict mode; plain decoding accepts anything with the right shape.
	fn verify(&self) -> Result<(), GeometryError>;

	/// Converts the coordinates into nested JSON arrays in wire order.
	/// Optionally rounds coordinate values to the given precision.
	fn to_coord_json(&self, precision: Option<u8>) -> JsonValue;

	/// Reads the coordinates from nested JSON arrays in wire order.
	///
	/// Fails with [`GeometryError::MalformedCoordinate`] on wrong nesting, wrong arity or
	/// non-numeric entries.
	fn from_coord_json(json: &JsonValue) -> Result<Self, GeometryError>;
}

/// Represents geometries that can be wrapped into a corresponding multi-geometry.
/// For example, a single `PointGeometry` can be converted into a `MultiPointGeometry`.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	/// Converts the single geometry into its multi-geometry equivalent.
	fn into_multi(self) -> Multi;
}

/// Read access to geometries that are ordered sequences of simpler elements.
/// For example, a ring is made of coordinates, and a multi line string is made of lines.
///
/// There are no mutators: composite geometries are fixed once built.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	/// Returns the elements in insertion order.
	fn as_slice(&self) -> &[Item];

	/// Consumes the composite geometry and returns the inner collection of elements.
	fn into_inner(self) -> Vec<Item>;

	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_slice().iter()
	}

	fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	fn len(&self) -> usize {
		self.as_slice().len()
	}

	fn first(&self) -> Option<&Item> {
		self.as_slice().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_slice().last()
	}
}
