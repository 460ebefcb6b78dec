use anyhow::{Context, Result};
use geodoc_core::json::{JsonValue, read_ndjson_iter};
use log::debug;
use std::{
	fs::File,
	io::{BufRead, BufReader, Read, stdin},
};

/// Opens a file for reading, or stdin if `input` is `-`.
fn open_input(input: &str) -> Result<Box<dyn BufRead>> {
	if input == "-" {
		debug!("reading from stdin");
		return Ok(Box::new(BufReader::new(stdin())));
	}
	let file = File::open(input).with_context(|| format!("failed to open input file {input:?}"))?;
	Ok(Box::new(BufReader::new(file)))
}

/// Reads all documents from `input`: one per non-empty line for NDJSON, otherwise a single one.
pub fn read_documents(input: &str, ndjson: bool) -> Result<Vec<JsonValue>> {
	let mut reader = open_input(input)?;

	let documents = if ndjson {
		read_ndjson_iter(reader).collect::<Result<Vec<_>>>()?
	} else {
		let mut text = String::new();
		reader
			.read_to_string(&mut text)
			.with_context(|| format!("failed to read {input:?}"))?;
		vec![JsonValue::parse_str(&text)?]
	};

	debug!("read {} documents from {input:?}", documents.len());
	Ok(documents)
}
