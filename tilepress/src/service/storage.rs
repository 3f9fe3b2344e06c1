use super::{ServiceClient, TileStore, UploadOptions};
use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::{
	Request,
	header::{CACHE_CONTROL, CONTENT_TYPE},
};
use tilepress_derive::context;

impl ServiceClient {
	/// `POST {endpoint}/storage/v1/object/{bucket}/{object_path}`
	pub fn upload_request(
		&self,
		bucket: &str,
		object_path: &str,
		data: Vec<u8>,
		options: &UploadOptions,
	) -> Result<Request> {
		let mut segments = vec!["storage", "v1", "object", bucket];
		segments.extend(object_path.split('/').filter(|s| !s.is_empty()));
		let url = self.url(&segments)?;

		Ok(self
			.authorize(self.client.post(url))
			.header(CONTENT_TYPE, &options.content_type)
			.header(CACHE_CONTROL, options.cache_control())
			.header("x-upsert", options.upsert.to_string())
			.body(data)
			.build()?)
	}

	#[context("uploading '{}' to bucket '{}'", object_path, bucket)]
	pub async fn upload_object(
		&self,
		bucket: &str,
		object_path: &str,
		data: Vec<u8>,
		options: &UploadOptions,
	) -> Result<()> {
		let size = data.len();
		let request = self.upload_request(bucket, object_path, data, options)?;
		log::debug!("POST {} ({size} bytes)", request.url());

		let response = self.client.execute(request).await?;
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			bail!("storage responded with {status}: {body}");
		}

		Ok(())
	}
}

#[async_trait]
impl TileStore for ServiceClient {
	async fn upload(&self, bucket: &str, object_path: &str, data: Vec<u8>, options: &UploadOptions) -> Result<()> {
		self.upload_object(bucket, object_path, data, options).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::Credentials;
	use pretty_assertions::assert_eq;
	use reqwest::Method;

	fn client() -> ServiceClient {
		ServiceClient::new(Credentials::new("https://project.supabase.co", "key").unwrap()).unwrap()
	}

	#[test]
	fn upload_request() {
		let request = client()
			.upload_request(
				"tiles",
				"articles.pmtiles",
				b"PMTiles\x03".to_vec(),
				&UploadOptions::for_archive(3600),
			)
			.unwrap();

		assert_eq!(request.method(), &Method::POST);
		assert_eq!(
			request.url().as_str(),
			"https://project.supabase.co/storage/v1/object/tiles/articles.pmtiles"
		);
		let headers = request.headers();
		assert_eq!(headers["content-type"], "application/octet-stream");
		assert_eq!(headers["cache-control"], "max-age=3600");
		assert_eq!(headers["x-upsert"], "true");
		assert_eq!(headers["authorization"], "Bearer key");
		assert_eq!(
			request.body().and_then(|b| b.as_bytes()),
			Some(b"PMTiles\x03".as_slice())
		);
	}

	#[test]
	fn nested_object_path_keeps_slashes() {
		let request = client()
			.upload_request(
				"tiles",
				"/news/2024/articles.pmtiles",
				vec![],
				&UploadOptions {
					content_type: "application/octet-stream".to_string(),
					cache_max_age: 60,
					upsert: false,
				},
			)
			.unwrap();

		assert_eq!(request.url().path(), "/storage/v1/object/tiles/news/2024/articles.pmtiles");
		assert_eq!(request.headers()["cache-control"], "max-age=60");
		assert_eq!(request.headers()["x-upsert"], "false");
	}
}
