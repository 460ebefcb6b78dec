//! YAML configuration for the command line tool.
//!
//! ```yaml
//! codec:
//!   precision: 6
//!   strict: false
//! output:
//!   pretty: true
//!   max_width: 100
//! ```

use anyhow::{Context, Result};
use geodoc_geometry::CodecConfig;
use log::debug;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Rounding and validation of geometries
	#[serde(default)]
	pub codec: CodecConfig,

	/// Formatting of written JSON
	#[serde(default)]
	pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
	/// Indent the output. Ignored for NDJSON, which is always one compact line per geometry.
	#[serde(default)]
	pub pretty: bool,

	/// Containers that fit into this width stay on one line when pretty printing.
	#[serde(default = "default_max_width")]
	pub max_width: usize,
}

fn default_max_width() -> usize {
	100
}

impl Default for OutputConfig {
	fn default() -> Self {
		Self {
			pretty: false,
			max_width: default_max_width(),
		}
	}
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("failed to open config file {path:?}"))?;
		let config =
			Config::from_reader(BufReader::new(file)).with_context(|| format!("failed to parse config file {path:?}"))?;
		debug!("loaded config from {path:?}: {config:?}");
		Ok(config)
	}
}
