//! Compilation of the GeoJSON interchange file into a PMTiles archive.
//!
//! The tiling itself is done by tippecanoe, run as a child process with a fixed
//! argument list. [`TileCompiler`] is the seam used by the pipeline.

mod tippecanoe;

pub use tippecanoe::*;

use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait TileCompiler: Send + Sync {
	/// Reads the feature collection at `input` and writes a tiled archive to `output`.
	async fn compile(&self, input: &Path, output: &Path) -> Result<()>;
}
