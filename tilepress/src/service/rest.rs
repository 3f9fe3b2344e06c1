use super::{ArticleSource, ServiceClient};
use anyhow::{Result, bail};
use async_trait::async_trait;
use reqwest::{Request, header::ACCEPT};
use tilepress_core::ArticleRecord;
use tilepress_derive::context;

impl ServiceClient {
	/// `GET {endpoint}/rest/v1/{view}?select=<columns>`
	pub fn select_request(&self, view: &str, columns: &[&str]) -> Result<Request> {
		let mut url = self.url(&["rest", "v1", view])?;
		url.query_pairs_mut().append_pair("select", &columns.join(","));

		Ok(self
			.authorize(self.client.get(url))
			.header(ACCEPT, "application/json")
			.build()?)
	}

	/// Fetches the article columns of every row of `view`.
	#[context("fetching articles from '{}'", view)]
	pub async fn select_articles(&self, view: &str) -> Result<Vec<ArticleRecord>> {
		let request = self.select_request(view, &ArticleRecord::COLUMNS)?;
		log::debug!("GET {}", request.url());

		let response = self.client.execute(request).await?;
		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			bail!("datastore responded with {status}: {body}");
		}

		let rows: Vec<ArticleRecord> = response.json().await?;
		log::debug!("received {} rows", rows.len());
		Ok(rows)
	}
}

#[async_trait]
impl ArticleSource for ServiceClient {
	async fn fetch_articles(&self, view: &str) -> Result<Vec<ArticleRecord>> {
		self.select_articles(view).await
	}
}
