//! Reading newline-delimited JSON (NDJSON).
use super::JsonValue;
use anyhow::{Context, Result, anyhow};
use std::io::BufRead;

/// Parses one NDJSON line. Blank lines yield `None`.
fn process_line(line: std::io::Result<String>, index: usize) -> Option<Result<JsonValue>> {
	match line {
		Ok(line) if line.trim().is_empty() => None,
		Ok(line) => Some(JsonValue::parse_str(&line).with_context(|| format!("error in line {}", index + 1))),
		Err(e) => Some(Err(anyhow!("line {}: {}", index + 1, e))),
	}
}

/// Iterates over the JSON values of an NDJSON reader, one per non-empty line.
///
/// ```
/// use std::io::Cursor;
/// use geodoc_core::json::read_ndjson_iter;
/// let data = "{\"type\":\"Point\"}\n\n{\"type\":\"LineString\"}\n";
/// assert_eq!(read_ndjson_iter(Cursor::new(data)).count(), 2);
/// ```
pub fn read_ndjson_iter(reader: impl BufRead) -> impl Iterator<Item = Result<JsonValue>> {
	reader
		.lines()
		.enumerate()
		.filter_map(|(index, line)| process_line(line, index))
}
