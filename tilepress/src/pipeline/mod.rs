//! The run itself: fetch → build → serialize → compile → publish, with the
//! transient files removed on every exit path.

mod plan;

pub use plan::*;

use crate::{
	service::{ArticleSource, TileStore},
	tiler::TileCompiler,
};
use anyhow::{Context, Result};
use tilepress_core::{FeatureCollection, ScratchFiles};

/// How a successful run ended.
#[derive(Clone, Debug, PartialEq)]
pub enum RunOutcome {
	/// The datastore returned no rows; nothing was written, compiled or uploaded.
	NoFeatures,
	Published { features: usize, archive_bytes: usize },
}

/// Fetches all rows of `view` and turns them into a feature collection.
pub async fn fetch_collection(source: &dyn ArticleSource, view: &str) -> Result<FeatureCollection> {
	log::info!("fetching data from '{view}'");
	let articles = source.fetch_articles(view).await?;
	let collection = FeatureCollection::from_articles(&articles);
	log::info!("built {} features", collection.len());
	Ok(collection)
}

/// Runs the whole pipeline described by `plan`.
///
/// Both files of [`RunFiles`] are removed before this returns, whichever step failed.
pub async fn run_pipeline(
	plan: &PipelinePlan,
	source: &dyn ArticleSource,
	compiler: &dyn TileCompiler,
	store: &dyn TileStore,
) -> Result<RunOutcome> {
	let files = &plan.files;
	let _scratch = ScratchFiles::new([&files.geojson, &files.archive]);

	let collection = fetch_collection(source, &plan.view).await?;
	if collection.is_empty() {
		log::info!("no features to process, exiting");
		return Ok(RunOutcome::NoFeatures);
	}

	log::info!("saving GeoJSON to {:?}", files.geojson);
	collection.write_to_path(&files.geojson)?;

	log::info!("generating PMTiles");
	compiler.compile(&files.geojson, &files.archive).await?;

	let archive_bytes = publish(plan, store).await?;

	Ok(RunOutcome::Published {
		features: collection.len(),
		archive_bytes,
	})
}

async fn publish(plan: &PipelinePlan, store: &dyn TileStore) -> Result<usize> {
	let target = &plan.target;
	log::info!("uploading {:?} to bucket '{}'", plan.files.archive, target.bucket);

	let result = async {
		let data = tokio::fs::read(&plan.files.archive)
			.await
			.with_context(|| format!("reading archive {:?}", plan.files.archive))?;
		let size = data.len();
		store
			.upload(&target.bucket, &target.object_path, data, &target.options)
			.await?;
		Ok::<_, anyhow::Error>(size)
	}
	.await;

	match result {
		Ok(size) => {
			log::info!("upload successful ({size} bytes)");
			Ok(size)
		}
		Err(err) => {
			log::error!("error uploading to storage: {err:#}");
			Err(err)
		}
	}
}
