//! The `JsonValue` enum: one node of a generic document.

use crate::json::{JsonArray, JsonObject, parse_json_str, stringify, stringify_pretty_multi_line};
use anyhow::{Result, bail};

/// Any JSON data: arrays, objects, numbers, strings, booleans, and null.
///
/// Numbers are always stored as `f64`, which is all a GeoJSON coordinate needs.
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
	Array(JsonArray),
	Boolean(bool),
	Null,
	Number(f64),
	Object(JsonObject),
	String(String),
}

impl JsonValue {
	/// Parse JSON text into a `JsonValue`.
	///
	/// # Errors
	/// Returns an error if the text is not valid JSON.
	pub fn parse_str(json: &str) -> Result<JsonValue> {
		parse_json_str(json)
	}

	/// The JSON type as a lowercase name (`"array"`, `"object"`, ...).
	#[must_use]
	pub fn type_as_str(&self) -> &'static str {
		use JsonValue::*;
		match self {
			Array(_) => "array",
			Boolean(_) => "boolean",
			Null => "null",
			Number(_) => "number",
			Object(_) => "object",
			String(_) => "string",
		}
	}

	/// Compact JSON text without whitespace.
	#[must_use]
	pub fn stringify(&self) -> String {
		stringify(self)
	}

	/// Indented JSON text. Containers that fit into `max_width` stay on one line.
	#[must_use]
	pub fn stringify_pretty(&self, max_width: usize) -> String {
		stringify_pretty_multi_line(self, max_width, 0, 0)
	}

	#[must_use]
	pub fn new_array() -> JsonValue {
		JsonValue::Array(JsonArray::default())
	}

	#[must_use]
	pub fn new_object() -> JsonValue {
		JsonValue::Object(JsonObject::default())
	}

	/// Borrow the `JsonArray` if this value is an array.
	///
	/// # Errors
	/// Returns an error if not an array.
	pub fn as_array(&self) -> Result<&JsonArray> {
		match self {
			JsonValue::Array(array) => Ok(array),
			_ => bail!("expected an array, found a {}", self.type_as_str()),
		}
	}

	/// Borrow the `JsonObject` if this value is an object.
	///
	/// # Errors
	/// Returns an error if not an object.
	pub fn as_object(&self) -> Result<&JsonObject> {
		match self {
			JsonValue::Object(object) => Ok(object),
			_ => bail!("expected an object, found a {}", self.type_as_str()),
		}
	}

	/// # Errors
	/// Returns an error if the value is not a string.
	pub fn as_str(&self) -> Result<&str> {
		match self {
			JsonValue::String(text) => Ok(text),
			_ => bail!("expected a string, found a {}", self.type_as_str()),
		}
	}

	/// # Errors
	/// Returns an error if the value is not a number.
	pub fn as_number(&self) -> Result<f64> {
		match self {
			JsonValue::Number(value) => Ok(*value),
			_ => bail!("expected a number, found a {}", self.type_as_str()),
		}
	}
}

impl From<&str> for JsonValue {
	fn from(input: &str) -> Self {
		JsonValue::String(input.to_string())
	}
}

impl From<String> for JsonValue {
	fn from(input: String) -> Self {
		JsonValue::String(input)
	}
}

impl From<bool> for JsonValue {
	fn from(input: bool) -> Self {
		JsonValue::Boolean(input)
	}
}

impl<I> From<I> for JsonValue
where
	JsonArray: From<I>,
{
	fn from(input: I) -> Self {
		JsonValue::Array(input.into())
	}
}

impl From<JsonObject> for JsonValue {
	fn from(input: JsonObject) -> Self {
		JsonValue::Object(input)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_primitives() {
		assert_eq!(JsonValue::from("hello"), JsonValue::String("hello".to_string()));
		assert_eq!(JsonValue::from(String::from("hi")), JsonValue::String("hi".to_string()));
		assert_eq!(JsonValue::from(true), JsonValue::Boolean(true));
		assert_eq!(JsonValue::from(23.42), JsonValue::Number(23.42));
		assert_eq!(JsonValue::from(42), JsonValue::Number(42.0));
	}

	#[test]
	fn from_vec_builds_array() {
		assert_eq!(
			JsonValue::from(vec![JsonValue::from("a"), JsonValue::from(1.5)]),
			JsonValue::Array(JsonArray(vec![
				JsonValue::String("a".to_string()),
				JsonValue::Number(1.5)
			]))
		);
		assert_eq!(
			JsonValue::from(vec![[7.0, 3.0], [2.0, 1.0]]).stringify(),
			"[[7,3],[2,1]]"
		);
	}

	#[test]
	fn type_as_str() {
		assert_eq!(JsonValue::from("value").type_as_str(), "string");
		assert_eq!(JsonValue::Number(42.0).type_as_str(), "number");
		assert_eq!(JsonValue::Boolean(true).type_as_str(), "boolean");
		assert_eq!(JsonValue::Null.type_as_str(), "null");
		assert_eq!(JsonValue::new_array().type_as_str(), "array");
		assert_eq!(JsonValue::new_object().type_as_str(), "object");
	}

	#[test]
	fn accessors() {
		let array = JsonValue::new_array();
		assert!(array.as_array().is_ok());
		assert!(array.as_object().is_err());

		let object = JsonValue::new_object();
		assert!(object.as_object().is_ok());
		assert!(object.as_array().is_err());

		let text = JsonValue::from("value");
		assert_eq!(text.as_str().unwrap(), "value");
		assert_eq!(
			text.as_number().unwrap_err().to_string(),
			"expected a number, found a string"
		);

		assert_eq!(JsonValue::Number(4.5).as_number().unwrap(), 4.5);
		assert_eq!(
			JsonValue::Null.as_str().unwrap_err().to_string(),
			"expected a string, found a null"
		);
	}

	#[test]
	fn parse_and_stringify() {
		let value = JsonValue::parse_str(r#"{ "type": "Point", "coordinates": [7, 3.5] }"#).unwrap();
		assert_eq!(value.stringify(), r#"{"coordinates":[7,3.5],"type":"Point"}"#);
		assert!(JsonValue::parse_str(r#"{"key":}"#).is_err());
	}

	#[test]
	fn stringify_pretty() {
		let value = JsonValue::from(vec![("a", 1), ("b", 2)]);
		assert_eq!(value.stringify_pretty(80), r#"{ "a": 1, "b": 2 }"#);
		assert_eq!(value.stringify_pretty(5), "{\n  \"a\": 1,\n  \"b\": 2\n}");
	}
}
