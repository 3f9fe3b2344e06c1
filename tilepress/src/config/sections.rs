use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_VIEW: &str = "external_articles_geojson";
pub const DEFAULT_BUCKET: &str = "tiles";
pub const DEFAULT_OBJECT_PATH: &str = "articles.pmtiles";
pub const DEFAULT_CACHE_MAX_AGE: u32 = 3600;
pub const DEFAULT_TILER_BINARY: &str = "tippecanoe";

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
	/// View or table queried for article rows.
	#[serde()]
	pub view: Option<String>,
}

impl SourceConfig {
	pub fn view(&self) -> &str {
		self.view.as_deref().unwrap_or(DEFAULT_VIEW)
	}
	pub fn override_optional_view(&mut self, view: &Option<String>) {
		if view.is_some() {
			self.view = view.clone();
		}
	}
}

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
	/// Bucket receiving the archive.
	#[serde()]
	pub bucket: Option<String>,

	/// Object path of the archive inside the bucket.
	#[serde()]
	pub object_path: Option<String>,

	/// `Cache-Control: max-age` of the uploaded object, in seconds.
	#[serde()]
	pub cache_max_age: Option<u32>,
}

impl StorageConfig {
	pub fn bucket(&self) -> &str {
		self.bucket.as_deref().unwrap_or(DEFAULT_BUCKET)
	}
	pub fn object_path(&self) -> &str {
		self.object_path.as_deref().unwrap_or(DEFAULT_OBJECT_PATH)
	}
	pub fn cache_max_age(&self) -> u32 {
		self.cache_max_age.unwrap_or(DEFAULT_CACHE_MAX_AGE)
	}
	pub fn override_optional_bucket(&mut self, bucket: &Option<String>) {
		if bucket.is_some() {
			self.bucket = bucket.clone();
		}
	}
}

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TilerConfig {
	/// Path or name of the tippecanoe executable.
	#[serde()]
	pub binary: Option<PathBuf>,
}

impl TilerConfig {
	pub fn binary(&self) -> &Path {
		self.binary.as_deref().unwrap_or(Path::new(DEFAULT_TILER_BINARY))
	}
	pub fn override_optional_binary(&mut self, binary: &Option<PathBuf>) {
		if binary.is_some() {
			self.binary = binary.clone();
		}
	}
}
