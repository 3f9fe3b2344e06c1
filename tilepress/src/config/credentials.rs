use anyhow::{Context, Result, bail, ensure};
use reqwest::Url;
use std::{fmt, path::Path};

pub const ENDPOINT_VAR: &str = "SUPABASE_URL";
pub const SECRET_VAR: &str = "SUPABASE_SECRET_KEY";

/// Endpoint and secret of the remote service, shared by the datastore and the object storage.
#[derive(Clone, PartialEq)]
pub struct Credentials {
	endpoint: Url,
	secret: String,
}

impl Credentials {
	pub fn new(endpoint: &str, secret: &str) -> Result<Self> {
		let endpoint = Url::parse(endpoint).with_context(|| format!("{ENDPOINT_VAR} is not a valid URL: {endpoint:?}"))?;

		match endpoint.scheme() {
			"http" | "https" => (),
			other => bail!("unsupported URL scheme '{other}' in {ENDPOINT_VAR}, expected 'http' or 'https'"),
		}
		ensure!(!endpoint.cannot_be_a_base(), "{ENDPOINT_VAR} must be a base URL");

		Ok(Self {
			endpoint,
			secret: secret.to_string(),
		})
	}

	/// Loads the `.env` file (the given one, or the default lookup) into the
	/// process environment, then reads both variables.
	pub fn from_env(env_file: Option<&Path>) -> Result<Self> {
		load_env_file(env_file)?;
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Reads both variables through `lookup`. Empty values count as missing.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

		match (read(ENDPOINT_VAR), read(SECRET_VAR)) {
			(Some(endpoint), Some(secret)) => Self::new(endpoint.trim(), &secret),
			(endpoint, secret) => {
				let missing = [(ENDPOINT_VAR, endpoint), (SECRET_VAR, secret)]
					.into_iter()
					.filter(|(_, value)| value.is_none())
					.map(|(key, _)| key)
					.collect::<Vec<_>>()
					.join(", ");
				bail!("{ENDPOINT_VAR} and {SECRET_VAR} environment variables must be set (missing: {missing})")
			}
		}
	}

	pub fn endpoint(&self) -> &Url {
		&self.endpoint
	}

	pub fn secret(&self) -> &str {
		&self.secret
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("endpoint", &self.endpoint.as_str())
			.field("secret", &"***")
			.finish()
	}
}

fn load_env_file(env_file: Option<&Path>) -> Result<()> {
	if let Some(path) = env_file {
		dotenvy::from_path(path).with_context(|| format!("loading env file {path:?}"))?;
		log::debug!("loaded environment from {path:?}");
		return Ok(());
	}

	match dotenvy::dotenv() {
		Ok(path) => log::debug!("loaded environment from {path:?}"),
		Err(err) if err.not_found() => log::debug!("no .env file found"),
		Err(err) => return Err(err).context("loading .env file"),
	}
	Ok(())
}
