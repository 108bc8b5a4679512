//! JSON payloads returned by the search service.
//!
//! Decoding is forgiving: absent, `null` or wrongly typed fields fall back to
//! their empty defaults, and collection entries that cannot be read are
//! skipped. Only a body that is not a JSON document is an error.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of `GET /api/status`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatusReport {
	#[serde(deserialize_with = "or_default")]
	pub document_count: u64,
}

/// Body of `GET /api/suggestions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionsPayload {
	#[serde(deserialize_with = "readable_entries")]
	pub suggestions: Vec<String>,
}

/// Body of `GET /api/search`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchPayload {
	#[serde(deserialize_with = "readable_entries")]
	pub results: Vec<ResultItem>,
}

/// Body of `GET /api/document`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentPayload {
	#[serde(deserialize_with = "or_default")]
	pub content: String,
}

/// One ranked search hit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultItem {
	#[serde(deserialize_with = "or_default")]
	pub file_name: String,
	#[serde(deserialize_with = "or_default")]
	pub file_path: String,
	#[serde(deserialize_with = "or_default")]
	pub score: f64,
}

impl ResultItem {
	#[must_use]
	pub fn new(file_name: impl Into<String>, file_path: impl Into<String>, score: f64) -> Self {
		Self {
			file_name: file_name.into(),
			file_path: file_path.into(),
			score,
		}
	}
}

fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: Default + DeserializeOwned,
{
	let value = Value::deserialize(deserializer)?;
	Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Entries of a JSON array that decode as `T`; anything else is empty.
fn readable_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let Value::Array(items) = Value::deserialize(deserializer)? else {
		return Ok(Vec::new());
	};
	let total = items.len();
	let entries: Vec<T> = items
		.into_iter()
		.filter_map(|item| serde_json::from_value(item).ok())
		.collect();
	if entries.len() < total {
		tracing::debug!(skipped = total - entries.len(), "ignored unreadable entries");
	}
	Ok(entries)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn status_reads_camel_case_count() {
		let report: StatusReport = serde_json::from_str(r#"{"documentCount":12}"#).unwrap();
		assert_eq!(report.document_count, 12);
	}

	#[test]
	fn missing_fields_default_to_empty() {
		let status: StatusReport = serde_json::from_str("{}").unwrap();
		assert_eq!(status.document_count, 0);

		let suggestions: SuggestionsPayload = serde_json::from_str("{}").unwrap();
		assert!(suggestions.suggestions.is_empty());

		let search: SearchPayload = serde_json::from_str(r#"{"other":true}"#).unwrap();
		assert!(search.results.is_empty());

		let document: DocumentPayload = serde_json::from_str("{}").unwrap();
		assert!(document.content.is_empty());
	}

	#[test]
	fn null_collections_decode_as_empty() {
		let suggestions: SuggestionsPayload =
			serde_json::from_str(r#"{"suggestions":null}"#).unwrap();
		assert!(suggestions.suggestions.is_empty());

		let search: SearchPayload = serde_json::from_str(r#"{"results":null}"#).unwrap();
		assert!(search.results.is_empty());
	}

	#[test]
	fn result_items_keep_server_order_and_fields() {
		let body = r#"{"results":[
			{"fileName":"b.txt","filePath":"data/b.txt","score":0.9},
			{"fileName":"a.txt","filePath":"data/a.txt","score":0.1234}
		]}"#;
		let search: SearchPayload = serde_json::from_str(body).unwrap();
		assert_eq!(
			search.results,
			vec![
				ResultItem::new("b.txt", "data/b.txt", 0.9),
				ResultItem::new("a.txt", "data/a.txt", 0.1234),
			]
		);
	}

	#[test]
	fn partial_result_item_fills_defaults() {
		let search: SearchPayload =
			serde_json::from_str(r#"{"results":[{"fileName":"only-name"}]}"#).unwrap();
		assert_eq!(search.results[0].file_name, "only-name");
		assert_eq!(search.results[0].file_path, "");
		assert_eq!(search.results[0].score, 0.0);
	}

	#[test]
	fn wrongly_typed_collections_decode_as_empty() {
		let suggestions: SuggestionsPayload =
			serde_json::from_str(r#"{"suggestions":"abc"}"#).unwrap();
		assert!(suggestions.suggestions.is_empty());

		let search: SearchPayload = serde_json::from_str(r#"{"results":5}"#).unwrap();
		assert!(search.results.is_empty());

		let status: StatusReport = serde_json::from_str(r#"{"documentCount":"many"}"#).unwrap();
		assert_eq!(status.document_count, 0);
	}

	#[test]
	fn bad_field_in_one_result_keeps_the_others() {
		let body = r#"{"results":[
			{"fileName":"a.txt","filePath":"data/a.txt","score":0.5},
			{"fileName":"b.txt","filePath":"data/b.txt","score":"0.4"},
			7
		]}"#;
		let search: SearchPayload = serde_json::from_str(body).unwrap();
		assert_eq!(
			search.results,
			vec![
				ResultItem::new("a.txt", "data/a.txt", 0.5),
				ResultItem::new("b.txt", "data/b.txt", 0.0),
			]
		);
	}

	#[test]
	fn unreadable_suggestions_are_skipped() {
		let suggestions: SuggestionsPayload =
			serde_json::from_str(r#"{"suggestions":["ocean",3,null,"oak"]}"#).unwrap();
		assert_eq!(suggestions.suggestions, ["ocean", "oak"]);
	}

	#[test]
	fn non_json_body_is_an_error() {
		assert!(serde_json::from_str::<SearchPayload>("Not Found").is_err());
	}
}
