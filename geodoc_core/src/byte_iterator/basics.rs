//! Small parsing helpers built on top of [`ByteIterator`].
//!
//! - `parse_tag` matches fixed ASCII words like `null`
//! - `parse_quoted_json_string` reads a JSON string literal including escapes
//! - `parse_number_as_string` and `parse_number_as` read JSON numbers
//! - `parse_object_entries` and `parse_array_entries` walk over containers
//!
//! Every function leaves the iterator on the first byte after the parsed token.

use super::ByteIterator;
use anyhow::{Context, Result};
use std::str::FromStr;

/// Matches the fixed ASCII `tag` at the current position.
pub fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> {
	for expected in tag.bytes() {
		if iter.expect_next_byte()? != expected {
			return Err(iter.format_error(&format!("unexpected character while parsing tag '{tag}'")));
		}
	}
	Ok(())
}

fn parse_hex4(iter: &mut ByteIterator) -> Result<u32> {
	let mut code = 0u32;
	for _ in 0..4 {
		let digit = char::from(iter.expect_next_byte()?)
			.to_digit(16)
			.ok_or_else(|| iter.format_error("invalid hex digit in unicode escape"))?;
		code = code * 16 + digit;
	}
	Ok(code)
}

fn parse_unicode_escape(iter: &mut ByteIterator) -> Result<char> {
	let high = parse_hex4(iter)?;
	let code = if (0xD800..0xDC00).contains(&high) {
		if iter.expect_next_byte()? != b'\\' || iter.expect_next_byte()? != b'u' {
			return Err(iter.format_error("expected low surrogate"));
		}
		let low = parse_hex4(iter)?;
		if !(0xDC00..0xE000).contains(&low) {
			return Err(iter.format_error("invalid low surrogate"));
		}
		0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00)
	} else {
		high
	};
	char::from_u32(code).ok_or_else(|| iter.format_error("invalid unicode code point"))
}

/// Parses a JSON string literal, starting at the opening quote.
pub fn parse_quoted_json_string(iter: &mut ByteIterator) -> Result<String> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'"' {
		return Err(iter.format_error("expected '\"' while parsing a string"));
	}

	let mut bytes = Vec::with_capacity(32);
	loop {
		match iter.expect_next_byte()? {
			b'"' => break,
			b'\\' => match iter.expect_next_byte()? {
				b'"' => bytes.push(b'"'),
				b'\\' => bytes.push(b'\\'),
				b'/' => bytes.push(b'/'),
				b'b' => bytes.push(b'\x08'),
				b'f' => bytes.push(b'\x0C'),
				b'n' => bytes.push(b'\n'),
				b'r' => bytes.push(b'\r'),
				b't' => bytes.push(b'\t'),
				b'u' => {
					let mut buffer = [0u8; 4];
					bytes.extend_from_slice(parse_unicode_escape(iter)?.encode_utf8(&mut buffer).as_bytes());
				}
				_ => return Err(iter.format_error("invalid escape sequence")),
			},
			c => bytes.push(c),
		}
	}
	String::from_utf8(bytes).context("while parsing a quoted JSON string")
}

/// Reads the JSON number at the current position and returns its text.
///
/// Accepts an optional sign, integer digits, an optional fraction and an optional exponent.
pub fn parse_number_as_string(iter: &mut ByteIterator) -> Result<String> {
	fn push_digits(iter: &mut ByteIterator, number: &mut String) -> bool {
		let mut has_digits = false;
		while let Some(byte @ b'0'..=b'9') = iter.peek() {
			number.push(char::from(byte));
			iter.advance();
			has_digits = true;
		}
		has_digits
	}

	let mut number = String::with_capacity(16);

	if let Some(sign @ (b'+' | b'-')) = iter.peek() {
		number.push(char::from(sign));
		iter.advance();
	}

	if !push_digits(iter, &mut number) {
		return Err(iter.format_error("expected digits in number"));
	}

	if iter.peek() == Some(b'.') {
		number.push('.');
		iter.advance();
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after decimal point"));
		}
		if iter.peek() == Some(b'.') {
			return Err(iter.format_error("unexpected '.' in number"));
		}
	}

	if let Some(e @ (b'e' | b'E')) = iter.peek() {
		number.push(char::from(e));
		iter.advance();
		if let Some(sign @ (b'+' | b'-')) = iter.peek() {
			number.push(char::from(sign));
			iter.advance();
		}
		if !push_digits(iter, &mut number) {
			return Err(iter.format_error("expected digits after exponent"));
		}
	}

	Ok(number)
}

/// Reads a JSON number and converts it with `R::from_str`.
pub fn parse_number_as<R: FromStr>(iter: &mut ByteIterator) -> Result<R> {
	parse_number_as_string(iter)?
		.parse::<R>()
		.map_err(|_| iter.format_error("invalid number"))
}

/// Walks over the entries of a JSON object.
///
/// `parse_value` receives each key together with the iterator positioned at the value and
/// must consume exactly that value.
pub fn parse_object_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(String, &mut ByteIterator) -> Result<R>,
) -> Result<()> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'{' {
		return Err(iter.format_error("expected '{' while parsing an object"));
	}

	iter.skip_whitespace();
	if iter.peek() == Some(b'}') {
		iter.advance();
		return Ok(());
	}

	loop {
		iter.skip_whitespace();
		if iter.expect_peeked_byte()? != b'"' {
			return Err(iter.format_error("parsing object, expected '\"'"));
		}
		let key = parse_quoted_json_string(iter)?;

		iter.skip_whitespace();
		if iter.expect_next_byte()? != b':' {
			return Err(iter.format_error("expected ':'"));
		}

		iter.skip_whitespace();
		parse_value(key, iter)?;

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b'}' => return Ok(()),
			_ => return Err(iter.format_error("expected ',' or '}'")),
		}
	}
}

/// Walks over the entries of a JSON array and collects whatever `parse_value` returns.
pub fn parse_array_entries<R>(
	iter: &mut ByteIterator,
	mut parse_value: impl FnMut(&mut ByteIterator) -> Result<R>,
) -> Result<Vec<R>> {
	iter.skip_whitespace();
	if iter.expect_next_byte()? != b'[' {
		return Err(iter.format_error("expected '[' while parsing an array"));
	}

	let mut result = Vec::new();

	iter.skip_whitespace();
	if iter.peek() == Some(b']') {
		iter.advance();
		return Ok(result);
	}

	loop {
		iter.skip_whitespace();
		result.push(parse_value(iter)?);

		iter.skip_whitespace();
		match iter.expect_next_byte()? {
			b',' => {}
			b']' => return Ok(result),
			_ => return Err(iter.format_error("parsing array, expected ',' or ']'")),
		}
	}
}
