use super::TileCompiler;
use anyhow::{Context, Result, ensure};
use async_trait::async_trait;
use std::{
	ffi::OsString,
	path::{Path, PathBuf},
};
use tilepress_derive::context;
use tokio::process::Command;

/// Name of the single vector layer inside the archive.
pub const LAYER_NAME: &str = "articles";
pub const MIN_ZOOM: u8 = 0;
pub const MAX_ZOOM: u8 = 19;

/// The full tippecanoe argument list.
///
/// Features are kept in input order and are never clustered; at low zooms only
/// the densest ones are dropped, and only when a tile would exceed its size limit.
/// If features are still being dropped at the maximum zoom, tippecanoe adds zoom levels.
pub fn tippecanoe_args(input: &Path, output: &Path) -> Vec<OsString> {
	let min_zoom = MIN_ZOOM.to_string();
	let max_zoom = MAX_ZOOM.to_string();
	let options = [
		"-l",
		LAYER_NAME,
		"--minimum-zoom",
		min_zoom.as_str(),
		"--maximum-zoom",
		max_zoom.as_str(),
		"--force",
		"--preserve-input-order",
		"--drop-rate=0",
		"--cluster-distance=0",
		"--drop-densest-as-needed",
		"--gamma=1",
		"--extend-zooms-if-still-dropping",
	];

	let mut args: Vec<OsString> = vec!["-o".into(), output.into()];
	args.extend(options.into_iter().map(OsString::from));
	args.push(input.into());
	args
}

/// Runs the tippecanoe executable.
#[derive(Clone, Debug)]
pub struct Tippecanoe {
	binary: PathBuf,
}

impl Tippecanoe {
	pub fn new(binary: &Path) -> Self {
		Self {
			binary: binary.to_path_buf(),
		}
	}

	pub fn binary(&self) -> &Path {
		&self.binary
	}

	/// The command line as it would be typed into a shell, for logging.
	pub fn command_line(&self, input: &Path, output: &Path) -> String {
		std::iter::once(self.binary.as_os_str().to_os_string())
			.chain(tippecanoe_args(input, output))
			.map(|arg| arg.to_string_lossy().into_owned())
			.collect::<Vec<_>>()
			.join(" ")
	}

	/// Runs tippecanoe and waits for it to exit. Its output is passed through to the terminal.
	#[context("generating tiles from {:?}", input)]
	pub async fn run(&self, input: &Path, output: &Path) -> Result<()> {
		log::info!("running command: {}", self.command_line(input, output));

		let status = Command::new(&self.binary)
			.args(tippecanoe_args(input, output))
			.kill_on_drop(true)
			.status()
			.await
			.with_context(|| format!("failed to start {:?}", self.binary))?;

		ensure!(status.success(), "{:?} failed with {status}", self.binary);
		Ok(())
	}
}

#[async_trait]
impl TileCompiler for Tippecanoe {
	async fn compile(&self, input: &Path, output: &Path) -> Result<()> {
		self.run(input, output).await
	}
}
