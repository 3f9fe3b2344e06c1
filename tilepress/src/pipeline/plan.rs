use crate::{config::Config, service::UploadOptions};
use std::path::{Path, PathBuf};

pub const GEOJSON_FILE_NAME: &str = "articles.geojson";
pub const ARCHIVE_FILE_NAME: &str = "articles.pmtiles";

/// The two transient files of a run. Their names are fixed; only the directory varies.
#[derive(Clone, Debug, PartialEq)]
pub struct RunFiles {
	pub geojson: PathBuf,
	pub archive: PathBuf,
}

impl RunFiles {
	pub fn in_dir(dir: &Path) -> Self {
		Self {
			geojson: dir.join(GEOJSON_FILE_NAME),
			archive: dir.join(ARCHIVE_FILE_NAME),
		}
	}
}

/// Destination of the compiled archive.
#[derive(Clone, Debug, PartialEq)]
pub struct PublishTarget {
	pub bucket: String,
	pub object_path: String,
	pub options: UploadOptions,
}

/// Everything a run needs apart from its collaborators.
#[derive(Clone, Debug, PartialEq)]
pub struct PipelinePlan {
	pub view: String,
	pub files: RunFiles,
	pub target: PublishTarget,
}

impl PipelinePlan {
	pub fn new(config: &Config, workdir: &Path) -> Self {
		Self {
			view: config.source.view().to_string(),
			files: RunFiles::in_dir(workdir),
			target: PublishTarget {
				bucket: config.storage.bucket().to_string(),
				object_path: config.storage.object_path().to_string(),
				options: UploadOptions::for_archive(config.storage.cache_max_age()),
			},
		}
	}
}
