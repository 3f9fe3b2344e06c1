use super::ServiceArgs;
use anyhow::Result;
use std::path::PathBuf;
use tilepress::{pipeline::fetch_collection, service::ServiceClient};

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// GeoJSON file to write. It is kept after the command finishes.
	#[arg()]
	pub output: PathBuf,

	#[command(flatten)]
	pub service: ServiceArgs,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = arguments.service.load_config()?;
	let client = ServiceClient::new(arguments.service.load_credentials()?)?;

	let collection = fetch_collection(&client, config.source.view()).await?;
	collection.write_to_path(&arguments.output)?;

	log::info!("wrote {} features to {:?}", collection.len(), arguments.output);
	Ok(())
}
