use super::ServiceArgs;
use anyhow::Result;
use std::path::PathBuf;
use tilepress::{
	pipeline::{PipelinePlan, RunOutcome, run_pipeline},
	service::ServiceClient,
	tiler::Tippecanoe,
};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	#[command(flatten)]
	pub service: ServiceArgs,

	/// Directory for the transient articles.geojson and articles.pmtiles. Default: current directory
	#[arg(short = 'w', long, value_name = "DIR", display_order = 1)]
	pub workdir: Option<PathBuf>,

	/// tippecanoe executable. Default: tippecanoe
	#[arg(long, value_name = "BIN", display_order = 2)]
	pub tippecanoe: Option<PathBuf>,

	/// Bucket receiving the archive. Default: tiles
	#[arg(long, value_name = "NAME", display_order = 2)]
	pub bucket: Option<String>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let mut config = arguments.service.load_config()?;
	config.tiler.override_optional_binary(&arguments.tippecanoe);
	config.storage.override_optional_bucket(&arguments.bucket);

	let client = ServiceClient::new(arguments.service.load_credentials()?)?;
	let tiler = Tippecanoe::new(config.tiler.binary());
	let workdir = arguments.workdir.clone().unwrap_or_else(|| PathBuf::from("."));
	let plan = PipelinePlan::new(&config, &workdir);

	match run_pipeline(&plan, &client, &tiler, &client).await? {
		RunOutcome::NoFeatures => {}
		RunOutcome::Published {
			features,
			archive_bytes,
		} => {
			log::info!(
				"PMTiles generation and upload complete: {features} features, {archive_bytes} bytes in '{}/{}'",
				plan.target.bucket,
				plan.target.object_path
			);
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn missing_env_file_fails_before_running() {
		let err = run_command(vec![
			"tilepress",
			"publish",
			"--env-file",
			"/does/not/exist/.env",
			"--workdir",
			"/does/not/exist",
		])
		.unwrap_err();
		assert!(err.to_string().starts_with("loading env file"), "{err}");
	}

	#[test]
	fn missing_config_file_fails() {
		let err = run_command(vec!["tilepress", "publish", "--config", "/does/not/exist.yml"]).unwrap_err();
		assert!(err.to_string().starts_with("reading config file"), "{err}");
	}
}
