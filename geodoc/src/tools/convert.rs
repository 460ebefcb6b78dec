use super::input::read_documents;
use crate::config::Config;
use anyhow::{Context, Result};
use geodoc_core::json::JsonValue;
use geodoc_geometry::GeometryCodec;
use log::{info, warn};
use std::{
	fs::File,
	io::{BufWriter, Write, stdout},
	path::PathBuf,
};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON geometry file, or "-" for stdin
	#[arg()]
	input_file: String,

	/// output file, defaults to stdout
	#[arg()]
	output_file: Option<PathBuf>,

	/// read and write newline-delimited JSON, one geometry per line
	#[arg(long, display_order = 1)]
	ndjson: bool,

	/// round coordinates to this many decimal places
	#[arg(long, short, value_name = "int", display_order = 2)]
	precision: Option<u8>,

	/// reject geometries that are not valid GeoJSON, e.g. unclosed polygon rings
	#[arg(long, short, display_order = 2)]
	strict: bool,

	/// indent the output
	#[arg(long, display_order = 3)]
	pretty: bool,

	/// YAML config file; command line flags take precedence
	#[arg(long, short, value_name = "FILE", display_order = 4)]
	config: Option<PathBuf>,
}

impl Subcommand {
	fn config(&self) -> Result<Config> {
		let mut config = match &self.config {
			Some(path) => Config::from_path(path)?,
			None => Config::default(),
		};
		if self.precision.is_some() {
			config.codec.precision = self.precision;
		}
		config.codec.strict |= self.strict;
		config.output.pretty |= self.pretty;
		Ok(config)
	}
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	info!("convert {:?}", arguments.input_file);

	let config = arguments.config()?;
	if config.output.pretty && arguments.ndjson {
		warn!("ignoring pretty printing for NDJSON output");
	}
	let codec = GeometryCodec::new(config.codec.clone());

	let documents = read_documents(&arguments.input_file, arguments.ndjson)?;
	let mut lines = Vec::with_capacity(documents.len());
	for (index, document) in documents.iter().enumerate() {
		let geometry = codec
			.decode(document)
			.with_context(|| format!("failed to decode geometry {}", index + 1))?;
		let encoded = codec.encode(&geometry);
		lines.push(if config.output.pretty && !arguments.ndjson {
			JsonValue::from(encoded).stringify_pretty(config.output.max_width)
		} else {
			encoded.stringify()
		});
	}

	let mut writer: Box<dyn Write> = match &arguments.output_file {
		Some(path) => Box::new(BufWriter::new(
			File::create(path).with_context(|| format!("failed to create output file {path:?}"))?,
		)),
		None => Box::new(stdout().lock()),
	};
	for line in &lines {
		writeln!(writer, "{line}")?;
	}
	writer.flush()?;

	info!("converted {} geometries", lines.len());
	Ok(())
}
