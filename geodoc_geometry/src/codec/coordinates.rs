//! Conversion between user-order coordinates and GeoJSON positions.
//!
//! Users give positions as `(latitude, longitude)`. GeoJSON stores them as
//! `[longitude, latitude]`. [`to_wire`] and [`from_wire`] are the only two places where that
//! swap happens; everything else in the codec goes through them.

use crate::{Coordinates, GeometryError};
use geodoc_core::json::JsonValue;

/// Converts a user-order position into its wire order `[longitude, latitude]`.
#[must_use]
pub fn to_wire(latitude: f64, longitude: f64) -> [f64; 2] {
	[longitude, latitude]
}

/// Converts a wire-order position `[longitude, latitude]` back into user order.
///
/// Fails with [`GeometryError::MalformedCoordinate`] unless the position has exactly two
/// components.
pub fn from_wire(position: &[f64]) -> Result<Coordinates, GeometryError> {
	match position {
		[longitude, latitude] => Ok(Coordinates::new(*latitude, *longitude)),
		_ => Err(GeometryError::MalformedCoordinate(format!(
			"a position needs exactly 2 numbers, found {}",
			position.len()
		))),
	}
}

/// Encodes one position, rounding both components to `precision` decimal places if given.
pub(crate) fn encode_position(coordinates: &Coordinates, precision: Option<u8>) -> JsonValue {
	let wire = to_wire(coordinates.latitude(), coordinates.longitude());
	match precision {
		Some(precision) => JsonValue::from(wire.map(|value| round(value, precision))),
		None => JsonValue::from(wire),
	}
}

/// Decodes one position, which must be an array of two finite numbers.
pub(crate) fn decode_position(json: &JsonValue) -> Result<Coordinates, GeometryError> {
	let array = match json {
		JsonValue::Array(array) => array,
		other => return Err(unexpected("a position array", other)),
	};
	let numbers = array
		.iter()
		.map(|value| match value {
			JsonValue::Number(number) if number.is_finite() => Ok(*number),
			JsonValue::Number(number) => Err(GeometryError::MalformedCoordinate(format!(
				"expected a finite number, found {number}"
			))),
			other => Err(unexpected("a number", other)),
		})
		.collect::<Result<Vec<f64>, GeometryError>>()?;
	from_wire(&numbers)
}

/// Encodes a sequence of items as a JSON array, keeping their order.
pub(crate) fn encode_sequence<'a, T: 'a>(
	items: impl IntoIterator<Item = &'a T>,
	encode_item: impl Fn(&'a T) -> JsonValue,
) -> JsonValue {
	JsonValue::from(items.into_iter().map(encode_item).collect::<Vec<_>>())
}

/// Decodes a JSON array item by item, keeping their order.
pub(crate) fn decode_sequence<T>(
	json: &JsonValue,
	decode_item: impl Fn(&JsonValue) -> Result<T, GeometryError>,
) -> Result<Vec<T>, GeometryError> {
	match json {
		JsonValue::Array(array) => array.iter().map(decode_item).collect(),
		other => Err(unexpected("an array", other)),
	}
}

fn unexpected(expected: &str, found: &JsonValue) -> GeometryError {
	let found = found.type_as_str();
	let article = if found.starts_with(['a', 'o']) { "an" } else { "a" };
	GeometryError::MalformedCoordinate(format!("expected {expected}, found {article} {found}"))
}

fn round(value: f64, precision: u8) -> f64 {
	let factor = 10f64.powi(i32::from(precision));
	(value * factor).round() / factor
}
