use super::{SourceConfig, StorageConfig, TilerConfig};
use anyhow::Result;
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};
use tilepress_derive::context;

/// Static options of a run. Every section is optional; omitted values fall back
/// to the built-in defaults.
#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Where the article rows are read from
	#[serde(default)]
	pub source: SourceConfig,

	/// Where the compiled archive is published to
	#[serde(default)]
	pub storage: StorageConfig,

	/// How the tiling tool is invoked
	#[serde(default)]
	pub tiler: TilerConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	#[context("reading config file {:?}", path)]
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path)?;
		Config::from_reader(BufReader::new(file))
	}
}
