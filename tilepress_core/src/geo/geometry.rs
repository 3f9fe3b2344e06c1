use serde_json::Value;

/// Turns the `location` column of a row into a GeoJSON geometry.
///
/// Strings are parsed as JSON; structured values are passed through as they are.
/// Absent values, blank strings and strings that fail to parse all yield `None`;
/// the last case is reported with a warning that names the feature `id`.
pub fn parse_location(id: u64, location: Option<&Value>) -> Option<Value> {
	match location? {
		Value::Null => None,
		Value::String(text) if text.trim().is_empty() => None,
		Value::String(text) => match serde_json::from_str::<Value>(text) {
			Ok(Value::Null) => None,
			Ok(geometry) => Some(geometry),
			Err(err) => {
				log::warn!("feature {id}: could not parse location as JSON ({err}), keeping it without geometry");
				None
			}
		},
		structured => Some(structured.clone()),
	}
}
