//! JSON object type.
use crate::json::{
	JsonArray, JsonValue, escape_json_string, stringify, stringify_pretty_multi_line,
	stringify_pretty_single_line,
};
use anyhow::Result;
use std::{
	collections::BTreeMap,
	fmt::{Debug, Display},
};

/// A JSON object backed by a `BTreeMap<String, JsonValue>`, so keys serialize in sorted order.
#[derive(Clone, Default, PartialEq)]
pub struct JsonObject(pub BTreeMap<String, JsonValue>);

impl JsonObject {
	#[must_use]
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&JsonValue> {
		self.0.get(key)
	}

	/// Returns the string at `key`, `None` if missing, or an error if it is not a string.
	pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
		self.get(key).map(JsonValue::as_str).transpose()
	}

	pub fn get_array(&self, key: &str) -> Result<Option<&JsonArray>> {
		self.get(key).map(JsonValue::as_array).transpose()
	}

	/// Set `key` to `value`, converting it into a `JsonValue`.
	pub fn set<T>(&mut self, key: &str, value: T)
	where
		JsonValue: From<T>,
	{
		self.0.insert(key.to_owned(), JsonValue::from(value));
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| format!("\"{}\":{}", escape_json_string(key), stringify(value)))
			.collect::<Vec<_>>();
		format!("{{{}}}", items.join(","))
	}

	#[must_use]
	pub fn stringify_pretty_single_line(&self) -> String {
		let items = self
			.0
			.iter()
			.map(|(key, value)| {
				format!(
					"\"{}\": {}",
					escape_json_string(key),
					stringify_pretty_single_line(value)
				)
			})
			.collect::<Vec<_>>();
		format!("{{ {} }}", items.join(", "))
	}

	/// One entry per line, indented by `depth` levels.
	#[must_use]
	pub fn stringify_pretty_multi_line(&self, max_width: usize, depth: usize) -> String {
		let indent = "  ".repeat(depth);
		let items = self
			.0
			.iter()
			.map(|(key, value)| {
				let key_string = format!("{}  \"{}\": ", indent, escape_json_string(key));
				format!(
					"{key_string}{}",
					stringify_pretty_multi_line(value, max_width, depth + 1, key_string.len())
				)
			})
			.collect::<Vec<_>>();
		format!("{{\n{}\n{}}}", items.join(",\n"), indent)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &JsonValue)> {
		self.0.iter()
	}
}

impl Debug for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl Display for JsonObject {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.stringify())
	}
}

impl FromIterator<(String, JsonValue)> for JsonObject {
	fn from_iter<I: IntoIterator<Item = (String, JsonValue)>>(iter: I) -> Self {
		JsonObject(iter.into_iter().collect())
	}
}

impl<T> From<Vec<(&str, T)>> for JsonValue
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonValue::Object(JsonObject::from(input))
	}
}

impl<T> From<Vec<(&str, T)>> for JsonObject
where
	JsonValue: From<T>,
{
	fn from(input: Vec<(&str, T)>) -> Self {
		JsonObject(
			input
				.into_iter()
				.map(|(key, value)| (key.to_string(), JsonValue::from(value)))
				.collect(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn typed_getters() {
		let obj = JsonObject::from(vec![
			("name", JsonValue::from("Point")),
			("count", JsonValue::from(3)),
			("list", JsonValue::from(vec![1, 2])),
			("child", JsonValue::new_object()),
		]);

		assert_eq!(obj.get_str("name").unwrap(), Some("Point"));
		assert_eq!(obj.get_str("missing").unwrap(), None);
		assert!(obj.get_str("count").is_err());
		assert_eq!(obj.get_array("list").unwrap().map(JsonArray::len), Some(2));
		assert!(obj.get_array("child").is_err());
		assert_eq!(obj.len(), 4);
	}

	#[test]
	fn set_overwrites() {
		let mut obj = JsonObject::new();
		obj.set("key1", 42);
		obj.set("key2", "x");

		assert_eq!(obj.stringify(), r#"{"key1":42,"key2":"x"}"#);
		obj.set("key1", true);
		assert_eq!(obj.to_string(), r#"{"key1":true,"key2":"x"}"#);
	}

	#[test]
	fn stringify_pretty() {
		let obj = JsonObject::from(vec![("key1", JsonValue::from("value1")), ("key2", JsonValue::from(2))]);
		assert_eq!(obj.stringify_pretty_single_line(), "{ \"key1\": \"value1\", \"key2\": 2 }");
		assert_eq!(
			obj.stringify_pretty_multi_line(80, 0),
			"{\n  \"key1\": \"value1\",\n  \"key2\": 2\n}"
		);
	}

	#[test]
	fn parsed_keys_are_sorted() {
		let parsed = JsonValue::parse_str(r#"{"b":[1,2],"a":"x"}"#).unwrap();
		let keys: Vec<&String> = parsed.as_object().unwrap().iter().map(|(k, _)| k).collect();
		assert_eq!(keys, vec!["a", "b"]);
	}
}
