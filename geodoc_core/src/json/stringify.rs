use super::JsonValue;

/// Compact JSON text. Non-finite numbers have no JSON form and become `null`.
#[must_use]
pub fn stringify(json: &JsonValue) -> String {
	match json {
		JsonValue::String(s) => format!("\"{}\"", escape_json_string(s)),
		JsonValue::Number(n) if n.is_finite() => n.to_string(),
		JsonValue::Number(_) | JsonValue::Null => String::from("null"),
		JsonValue::Boolean(b) => b.to_string(),
		JsonValue::Array(arr) => arr.stringify(),
		JsonValue::Object(obj) => obj.stringify(),
	}
}

#[must_use]
pub fn stringify_pretty_single_line(json: &JsonValue) -> String {
	match json {
		JsonValue::Array(arr) => arr.stringify_pretty_single_line(),
		JsonValue::Object(obj) => obj.stringify_pretty_single_line(),
		_ => stringify(json),
	}
}

/// `indention` is the number of characters already used on the current line.
#[must_use]
pub fn stringify_pretty_multi_line(json: &JsonValue, max_width: usize, depth: usize, indention: usize) -> String {
	match json {
		JsonValue::Array(arr) => {
			let single_line = arr.stringify_pretty_single_line();
			if single_line.len() + indention <= max_width {
				return single_line;
			}
			arr.stringify_pretty_multi_line(max_width, depth)
		}
		JsonValue::Object(obj) => {
			let single_line = obj.stringify_pretty_single_line();
			if single_line.len() + indention <= max_width {
				return single_line;
			}
			obj.stringify_pretty_multi_line(max_width, depth)
		}
		_ => stringify(json),
	}
}

#[must_use]
pub fn escape_json_string(input: &str) -> String {
	let mut result = String::with_capacity(input.len());
	for c in input.chars() {
		match c {
			'"' => result.push_str("\\\""),
			'\\' => result.push_str("\\\\"),
			'\n' => result.push_str("\\n"),
			'\r' => result.push_str("\\r"),
			'\t' => result.push_str("\\t"),
			'\u{08}' => result.push_str("\\b"),
			'\u{0c}' => result.push_str("\\f"),
			c if c.is_control() => result.push_str(&format!("\\u{:04x}", c as u32)),
			c => result.push(c),
		}
	}
	result
}
