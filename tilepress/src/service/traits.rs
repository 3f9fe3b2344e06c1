use anyhow::Result;
use async_trait::async_trait;
use tilepress_core::ArticleRecord;

/// Reads article rows from a datastore.
#[async_trait]
pub trait ArticleSource: Send + Sync {
	/// Returns all rows of `view` in the order the datastore returns them.
	async fn fetch_articles(&self, view: &str) -> Result<Vec<ArticleRecord>>;
}

/// Metadata sent along with an uploaded object.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadOptions {
	pub content_type: String,
	/// Seconds for `Cache-Control: max-age`.
	pub cache_max_age: u32,
	/// Replace the object if it already exists.
	pub upsert: bool,
}

impl UploadOptions {
	/// Options for a tile archive read by clients with range requests.
	pub fn for_archive(cache_max_age: u32) -> Self {
		Self {
			content_type: "application/octet-stream".to_string(),
			cache_max_age,
			upsert: true,
		}
	}

	pub fn cache_control(&self) -> String {
		format!("max-age={}", self.cache_max_age)
	}
}

/// Writes objects into a bucket of an object storage.
#[async_trait]
pub trait TileStore: Send + Sync {
	async fn upload(&self, bucket: &str, object_path: &str, data: Vec<u8>, options: &UploadOptions) -> Result<()>;
}
