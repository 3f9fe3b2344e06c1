use super::Feature;
use crate::ArticleRecord;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
	fs::File,
	io::{BufWriter, Write},
	path::Path,
};
use tilepress_derive::context;

/// An ordered GeoJSON `FeatureCollection`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
	pub features: Vec<Feature>,
}

impl FeatureCollection {
	pub fn new(features: Vec<Feature>) -> Self {
		Self { features }
	}

	/// Builds one feature per article, in order, with `id` set to the article's position.
	///
	/// Never fails: a row with an unusable location becomes a feature without geometry.
	pub fn from_articles(articles: &[ArticleRecord]) -> Self {
		let features = articles
			.iter()
			.enumerate()
			.map(|(index, article)| Feature::from_article(index as u64, article))
			.collect::<Vec<_>>();

		let missing = features.iter().filter(|f| !f.has_geometry()).count();
		if missing > 0 {
			log::debug!("{missing} of {} features have no geometry", features.len());
		}

		Self { features }
	}

	pub fn len(&self) -> usize {
		self.features.len()
	}

	pub fn is_empty(&self) -> bool {
		self.features.is_empty()
	}

	/// Writes the collection as compact JSON, replacing any existing file at `path`.
	#[context("writing feature collection to {:?}", path)]
	pub fn write_to_path(&self, path: &Path) -> Result<()> {
		let mut writer = BufWriter::new(File::create(path)?);
		serde_json::to_writer(&mut writer, self)?;
		writer.flush()?;
		log::debug!("wrote {} features to {path:?}", self.len());
		Ok(())
	}

	#[context("reading feature collection from {:?}", path)]
	pub fn read_from_path(path: &Path) -> Result<Self> {
		let file = File::open(path)?;
		Ok(serde_json::from_reader(std::io::BufReader::new(file))?)
	}
}
