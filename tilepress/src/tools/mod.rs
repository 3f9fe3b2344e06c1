pub mod export;
pub mod print_args;
pub mod publish;

use anyhow::Result;
use std::path::PathBuf;
use tilepress::config::{Config, Credentials};

/// Options shared by every command that talks to the datastore.
#[derive(clap::Args, Debug)]
pub struct ServiceArgs {
	/// Path to a configuration file (YAML) with source, storage and tiler settings.
	/// Command line arguments override configuration file settings.
	#[arg(short = 'c', long, value_name = "FILE", display_order = 0)]
	pub config: Option<PathBuf>,

	/// Read SUPABASE_URL and SUPABASE_SECRET_KEY from this file instead of ./.env
	#[arg(long, value_name = "FILE", display_order = 0)]
	pub env_file: Option<PathBuf>,

	/// View or table to read the articles from. Default: external_articles_geojson
	#[arg(long, value_name = "NAME", display_order = 1)]
	pub view: Option<String>,
}

impl ServiceArgs {
	pub fn load_config(&self) -> Result<Config> {
		let mut config = match &self.config {
			Some(path) => Config::from_path(path)?,
			None => Config::default(),
		};
		config.source.override_optional_view(&self.view);
		Ok(config)
	}

	pub fn load_credentials(&self) -> Result<Credentials> {
		Credentials::from_env(self.env_file.as_deref())
	}
}
