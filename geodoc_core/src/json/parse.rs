use super::{JsonArray, JsonObject, JsonValue};
use crate::byte_iterator::{
	ByteIterator, parse_array_entries, parse_number_as, parse_object_entries, parse_quoted_json_string, parse_tag,
};
use anyhow::{Context, Result};

/// Parses a complete JSON text. Anything but whitespace after the value is an error.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let mut iter = ByteIterator::from_text(json, true);
	parse_json_iter(&mut iter)
		.and_then(|value| iter.expect_end().map(|()| value))
		.with_context(|| format!("while parsing JSON '{json}'"))
}

/// Containers nested deeper than this are rejected instead of recursing further.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Parses one JSON value and leaves the iterator right after it.
///
/// Fails if arrays and objects are nested deeper than [`MAX_NESTING_DEPTH`].
pub fn parse_json_iter(iter: &mut ByteIterator) -> Result<JsonValue> {
	parse_json_value(iter, 0)
}

fn parse_json_value(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	iter.skip_whitespace();
	match iter.expect_peeked_byte()? {
		b'[' | b'{' if depth >= MAX_NESTING_DEPTH => Err(iter.format_error(&format!(
			"nesting depth exceeds {MAX_NESTING_DEPTH}"
		))),
		b'[' => parse_array_entries(iter, |iter2| parse_json_value(iter2, depth + 1))
			.map(|i| JsonValue::Array(JsonArray(i))),
		b'{' => parse_json_object(iter, depth + 1),
		b'"' => parse_quoted_json_string(iter).map(JsonValue::String),
		d if d.is_ascii_digit() || d == b'-' => parse_number_as::<f64>(iter).map(JsonValue::Number),
		b't' => parse_tag(iter, "true").map(|()| JsonValue::Boolean(true)),
		b'f' => parse_tag(iter, "false").map(|()| JsonValue::Boolean(false)),
		b'n' => parse_tag(iter, "null").map(|()| JsonValue::Null),
		c => Err(iter.format_error(&format!("unexpected character '{}'", c as char))),
	}
}

fn parse_json_object(iter: &mut ByteIterator, depth: usize) -> Result<JsonValue> {
	let mut object = JsonObject::new();
	parse_object_entries(iter, |key, iter2| {
		object.0.insert(key, parse_json_value(iter2, depth)?);
		Ok(())
	})?;
	Ok(JsonValue::Object(object))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn v<T>(input: T) -> JsonValue
	where
		JsonValue: From<T>,
	{
		JsonValue::from(input)
	}

	fn last_error(json: &str) -> String {
		parse_json_str(json).unwrap_err().chain().last().unwrap().to_string()
	}

	#[test]
	fn geometry_document() {
		let json = parse_json_str(
			r#"{"type":"GeometryCollection","geometries":[{"type":"Point","coordinates":[7.0,3.0]}]}"#,
		)
		.unwrap();
		assert_eq!(
			json,
			v(vec![
				("type", v("GeometryCollection")),
				(
					"geometries",
					v(vec![v(vec![("type", v("Point")), ("coordinates", v(vec![7.0, 3.0]))])])
				),
			])
		);
	}

	#[test]
	fn whitespace_everywhere() {
		let expected = v(vec![(
			"a",
			v(vec![
				v(vec![("b", v(7)), ("c", v(true))]),
				v(vec![("d", v(false)), ("e", JsonValue::Null), ("f", v("g"))]),
			]),
		)]);

		let data = r#"_{_"a"_:_[_{_"b"_:_7_,_"c"_:_true_}_,_{_"d"_:_false_,_"e"_:_null_,_"f"_:_"g"_}_]_}_"#;

		for ws in ["", " ", "\t", "\n", "\r"] {
			assert_eq!(parse_json_str(&data.replace('_', ws)).unwrap(), expected);
		}
	}

	#[test]
	fn nested_arrays() {
		assert_eq!(
			parse_json_str("[[[-1.5e1, 2]]]").unwrap(),
			v(vec![v(vec![v(vec![v(-15.0), v(2.0)])])])
		);
		assert_eq!(parse_json_str("[]").unwrap(), JsonValue::new_array());
		assert_eq!(parse_json_str("{}").unwrap(), JsonValue::new_object());
	}

	#[test]
	fn errors() {
		assert_eq!(last_error(r#"{"key" "value"}"#), "expected ':' at position 8: {\"key\" \"");
		assert_eq!(last_error(r#"{"key": "value""#), "unexpected end at position 15: {\"key\": \"value\"<EOF>");
		assert_eq!(last_error("[1] x"), "unexpected trailing characters at position 4: [1] ");
		assert!(parse_json_str("not json").is_err());
		assert!(parse_json_str(".5").is_err());
	}

	#[test]
	fn nesting_depth_limit() {
		let nested = |depth: usize| format!("{}{}", "[".repeat(depth), "]".repeat(depth));
		assert!(parse_json_str(&nested(MAX_NESTING_DEPTH)).is_ok());
		assert!(last_error(&nested(MAX_NESTING_DEPTH + 1)).starts_with("nesting depth exceeds 256 at position"));
		assert!(parse_json_str(&nested(200_000)).is_err());

		let objects = format!("{}1{}", r#"{"a":"#.repeat(300), "}".repeat(300));
		assert!(last_error(&objects).starts_with("nesting depth exceeds 256"));
	}
}
