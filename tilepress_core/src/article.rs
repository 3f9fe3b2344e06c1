use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A geotagged article as stored in the remote datastore.
///
/// Missing keys and explicit `null`s both deserialize to `None`. The property
/// columns are kept as raw JSON so that a value of an unexpected type is carried
/// through as it is instead of rejecting the whole batch.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ArticleRecord {
	#[serde(default)]
	pub url: Option<Value>,
	#[serde(default)]
	pub title: Option<Value>,
	/// Either a string holding serialized GeoJSON geometry or an already structured geometry.
	#[serde(default)]
	pub location: Option<Value>,
	#[serde(default)]
	pub marker: Option<Value>,
}

impl ArticleRecord {
	/// The columns requested from the datastore.
	pub const COLUMNS: [&'static str; 4] = ["url", "title", "location", "marker"];

	pub fn new(url: &str, title: &str, location: Option<Value>, marker: &str) -> Self {
		Self {
			url: Some(Value::from(url)),
			title: Some(Value::from(title)),
			location,
			marker: Some(Value::from(marker)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use serde_json::json;

	#[test]
	fn deserialize_full_row() {
		let row: ArticleRecord = serde_json::from_value(json!({
			"url": "http://a",
			"title": "A",
			"location": "{\"type\":\"Point\",\"coordinates\":[1,2]}",
			"marker": "x"
		}))
		.unwrap();

		assert_eq!(
			row,
			ArticleRecord::new(
				"http://a",
				"A",
				Some(json!("{\"type\":\"Point\",\"coordinates\":[1,2]}")),
				"x"
			)
		);
	}

	#[test]
	fn deserialize_missing_and_null_fields() {
		let row: ArticleRecord = serde_json::from_value(json!({ "url": null, "marker": "x" })).unwrap();
		assert_eq!(
			row,
			ArticleRecord {
				marker: Some(json!("x")),
				..ArticleRecord::default()
			}
		);
	}

	#[test]
	fn non_string_properties_do_not_reject_the_batch() {
		let rows: Vec<ArticleRecord> = serde_json::from_value(json!([
			{ "url": "http://a", "title": "A", "location": null, "marker": "x" },
			{ "url": "http://b", "title": 42, "location": null, "marker": true }
		]))
		.unwrap();

		assert_eq!(rows.len(), 2);
		assert_eq!(rows[1].title, Some(json!(42)));
		assert_eq!(rows[1].marker, Some(json!(true)));
	}

	#[test]
	fn structured_location_is_kept() {
		let row: ArticleRecord =
			serde_json::from_value(json!({ "location": { "type": "Point", "coordinates": [3, 4] } })).unwrap();
		assert_eq!(row.location, Some(json!({ "type": "Point", "coordinates": [3, 4] })));
	}

	#[test]
	fn columns() {
		assert_eq!(ArticleRecord::COLUMNS.join(","), "url,title,location,marker");
	}
}
