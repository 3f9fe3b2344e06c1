use anyhow::Result;
use std::path::PathBuf;
use tilepress::{
	config::Config,
	pipeline::RunFiles,
	tiler::{Tippecanoe, tippecanoe_args},
};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true)]
pub struct Subcommand {
	/// Directory the files would be placed in. Default: current directory
	#[arg(short = 'w', long, value_name = "DIR")]
	pub workdir: Option<PathBuf>,

	/// Path to a configuration file (YAML), used for the tippecanoe executable.
	#[arg(short = 'c', long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// tippecanoe executable, as given to "publish". Default: tippecanoe
	#[arg(long, value_name = "BIN")]
	pub tippecanoe: Option<PathBuf>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let mut config = match &arguments.config {
		Some(path) => Config::from_path(path)?,
		None => Config::default(),
	};
	config.tiler.override_optional_binary(&arguments.tippecanoe);
	let workdir = arguments.workdir.clone().unwrap_or_else(|| PathBuf::from("."));
	let files = RunFiles::in_dir(&workdir);
	let tiler = Tippecanoe::new(config.tiler.binary());

	println!("{}", tiler.binary().display());
	for arg in tippecanoe_args(&files.geojson, &files.archive) {
		println!("{}", arg.to_string_lossy());
	}
	Ok(())
}
