use crate::config::Credentials;
use anyhow::{Result, anyhow};
use reqwest::{Client, RequestBuilder, Url};

/// HTTP client bound to one service endpoint and secret.
#[derive(Debug)]
pub struct ServiceClient {
	pub(super) client: Client,
	credentials: Credentials,
}

impl ServiceClient {
	pub fn new(credentials: Credentials) -> Result<Self> {
		let client = Client::builder().use_rustls_tls().build()?;
		log::debug!("service client for {}", credentials.endpoint());
		Ok(Self { client, credentials })
	}

	/// Appends `segments` to the endpoint path. Each segment is percent-encoded.
	pub(super) fn url(&self, segments: &[&str]) -> Result<Url> {
		let mut url = self.credentials.endpoint().clone();
		url.path_segments_mut()
			.map_err(|()| anyhow!("service endpoint cannot be used as a base URL"))?
			.pop_if_empty()
			.extend(segments);
		Ok(url)
	}

	/// Adds the secret both as `apikey` header and as bearer token.
	pub(super) fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
		let secret = self.credentials.secret();
		builder.header("apikey", secret).bearer_auth(secret)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("https://project.supabase.co", "https://project.supabase.co/rest/v1/view")]
	#[case("https://project.supabase.co/", "https://project.supabase.co/rest/v1/view")]
	#[case("http://localhost:54321/proxy/", "http://localhost:54321/proxy/rest/v1/view")]
	#[case("http://localhost:54321/proxy", "http://localhost:54321/proxy/rest/v1/view")]
	fn url_joins_segments(#[case] endpoint: &str, #[case] expected: &str) {
		let client = ServiceClient::new(Credentials::new(endpoint, "k").unwrap()).unwrap();
		assert_eq!(client.url(&["rest", "v1", "view"]).unwrap().as_str(), expected);
	}

	#[test]
	fn url_encodes_segments() {
		let client = ServiceClient::new(Credentials::new("http://localhost", "k").unwrap()).unwrap();
		assert_eq!(
			client.url(&["a b", "c?d"]).unwrap().as_str(),
			"http://localhost/a%20b/c%3Fd"
		);
	}

	#[test]
	fn authorize_sets_both_headers() {
		let client = ServiceClient::new(Credentials::new("http://localhost", "s3cr3t").unwrap()).unwrap();
		let request = client
			.authorize(client.client.get("http://localhost/"))
			.build()
			.unwrap();

		assert_eq!(request.headers()["apikey"], "s3cr3t");
		assert_eq!(request.headers()["authorization"], "Bearer s3cr3t");
	}
}
