//! JSON array type.
use crate::json::{JsonValue, stringify, stringify_pretty_multi_line, stringify_pretty_single_line};
use anyhow::{Result, anyhow};
use std::fmt::Debug;

/// A JSON array, backed by a `Vec<JsonValue>`.
#[derive(Clone, Default, PartialEq)]
pub struct JsonArray(pub Vec<JsonValue>);

impl JsonArray {
	/// Compact JSON text, e.g. `[1,2]`.
	#[must_use]
	pub fn stringify(&self) -> String {
		let items = self.0.iter().map(stringify).collect::<Vec<_>>();
		format!("[{}]", items.join(","))
	}

	/// Single line with spaces, e.g. `[ 1, 2, 3 ]`.
	#[must_use]
	pub fn stringify_pretty_single_line(&self) -> String {
		let items = self.0.iter().map(stringify_pretty_single_line).collect::<Vec<_>>();
		format!("[ {} ]", items.join(", "))
	}

	/// One element per line, indented by `depth` levels. Nested containers that fit into
	/// `max_width` stay on a single line.
	#[must_use]
	pub fn stringify_pretty_multi_line(&self, max_width: usize, depth: usize) -> String {
		let indent = "  ".repeat(depth);
		let items = self
			.0
			.iter()
			.map(|value| {
				format!(
					"{indent}  {}",
					stringify_pretty_multi_line(value, max_width, depth + 1, depth * 2 + 2)
				)
			})
			.collect::<Vec<_>>();
		format!("[\n{}\n{}]", items.join(",\n"), indent)
	}

	#[must_use]
	pub fn as_vec(&self) -> &Vec<JsonValue> {
		&self.0
	}

	pub fn iter(&self) -> std::slice::Iter<'_, JsonValue> {
		self.0.iter()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Converts all elements to numbers, failing on the first element that is not numeric.
	pub fn as_number_vec(&self) -> Result<Vec<f64>> {
		self.0.iter().map(JsonValue::as_number).collect()
	}

	/// Converts the elements into a fixed-size array of numbers.
	pub fn as_number_array<const N: usize>(&self) -> Result<[f64; N]> {
		self
			.as_number_vec()?
			.try_into()
			.map_err(|e: Vec<f64>| anyhow!("vector length mismatch {} != {}", e.len(), N))
	}
}

impl Debug for JsonArray {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.0)
	}
}

impl<'a> IntoIterator for &'a JsonArray {
	type Item = &'a JsonValue;
	type IntoIter = std::slice::Iter<'a, JsonValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<T> From<Vec<T>> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: Vec<T>) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl<T, const N: usize> From<[T; N]> for JsonArray
where
	JsonValue: From<T>,
{
	fn from(input: [T; N]) -> Self {
		JsonArray(input.into_iter().map(JsonValue::from).collect())
	}
}

impl FromIterator<JsonValue> for JsonArray {
	fn from_iter<I: IntoIterator<Item = JsonValue>>(iter: I) -> Self {
		JsonArray(iter.into_iter().collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stringify() {
		let array = JsonArray(vec![
			JsonValue::from("hello"),
			JsonValue::from(42.0),
			JsonValue::from(true),
		]);
		assert_eq!(array.stringify(), r#"["hello",42,true]"#);
		assert_eq!(array.stringify_pretty_single_line(), r#"[ "hello", 42, true ]"#);
	}

	#[test]
	fn stringify_pretty_multi_line() {
		let array = JsonArray::from(vec![[2.0, 1.1], [3.5, 2.3]]);
		assert_eq!(array.stringify_pretty_multi_line(80, 0), "[\n  [ 2, 1.1 ],\n  [ 3.5, 2.3 ]\n]");
	}

	#[test]
	fn as_number_vec() {
		let array = JsonArray::from(vec![1.2, 3.4, 5.6]);
		assert_eq!(array.as_number_vec().unwrap(), vec![1.2, 3.4, 5.6]);
		assert_eq!(
			JsonArray::from(vec!["a"]).as_number_vec().unwrap_err().to_string(),
			"expected a number, found a string"
		);
	}

	#[test]
	fn as_number_array() {
		let array = JsonArray::from(vec![1.2, 3.4, 5.6]);
		assert_eq!(array.as_number_array::<3>().unwrap(), [1.2, 3.4, 5.6]);
		assert_eq!(
			array.as_number_array::<2>().unwrap_err().to_string(),
			"vector length mismatch 3 != 2"
		);
	}

	#[test]
	fn conversions() {
		assert_eq!(JsonArray::from([4, 5]).0, vec![JsonValue::from(4), JsonValue::from(5)]);
		let collected: JsonArray = (0..3).map(JsonValue::from).collect();
		assert_eq!(collected.len(), 3);
		assert!(JsonArray::default().is_empty());
	}

	#[test]
	fn debug_impl() {
		let array = JsonArray(vec![JsonValue::from("debug"), JsonValue::from(42.0)]);
		assert_eq!(format!("{array:?}"), r#"[String("debug"), Number(42.0)]"#);
	}
}
