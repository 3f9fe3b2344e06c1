use super::parse_location;
use crate::ArticleRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The flat property bag copied verbatim from an [`ArticleRecord`].
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct FeatureProperties {
	pub url: Option<Value>,
	pub title: Option<Value>,
	pub marker: Option<Value>,
}

/// A GeoJSON feature. Serializes as `{"type":"Feature","id":..,"geometry":..,"properties":..}`.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
	pub id: u64,
	pub geometry: Option<Value>,
	pub properties: FeatureProperties,
}

impl Feature {
	/// Builds the feature for the row at position `id` of a fetch.
	pub fn from_article(id: u64, article: &ArticleRecord) -> Self {
		Self {
			id,
			geometry: parse_location(id, article.location.as_ref()),
			properties: FeatureProperties {
				url: article.url.clone(),
				title: article.title.clone(),
				marker: article.marker.clone(),
			},
		}
	}

	pub fn has_geometry(&self) -> bool {
		self.geometry.is_some()
	}
}
