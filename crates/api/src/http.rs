use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

use crate::backend::SearchBackend;
use crate::error::ApiError;
use crate::types::{
	DocumentPayload, ResultItem, SearchPayload, StatusReport, SuggestionsPayload,
};

/// Service address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

pub const STATUS_PATH: &str = "/api/status";
pub const SUGGESTIONS_PATH: &str = "/api/suggestions";
pub const SEARCH_PATH: &str = "/api/search";
pub const DOCUMENT_PATH: &str = "/api/document";

/// Connection settings for [`HttpBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
	/// Scheme, host and optional prefix; a trailing slash is ignored.
	pub base_url: String,
	/// Per-request timeout. `None` waits indefinitely.
	pub timeout: Option<Duration>,
}

impl Default for HttpOptions {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: None,
		}
	}
}

/// [`SearchBackend`] speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
	client: Client,
	base_url: String,
}

impl HttpBackend {
	pub fn new(options: HttpOptions) -> Result<Self, ApiError> {
		// The blocking client otherwise applies its own 30 second default.
		let client = Client::builder()
			.timeout(options.timeout)
			.build()
			.map_err(ApiError::Client)?;
		Ok(Self {
			client,
			base_url: normalize_base_url(&options.base_url),
		})
	}

	/// Base URL every endpoint path is appended to.
	#[must_use]
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	fn get<T: DeserializeOwned>(&self, endpoint: &'static str, url: String) -> Result<T, ApiError> {
		tracing::debug!(%url, "GET");
		let response = self
			.client
			.get(&url)
			.send()
			.map_err(|source| ApiError::Transport { endpoint, source })?;

		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status {
				endpoint,
				status: status.as_u16(),
			});
		}

		let body = response
			.text()
			.map_err(|source| ApiError::Transport { endpoint, source })?;
		serde_json::from_str(&body).map_err(|source| ApiError::Decode { endpoint, source })
	}
}

impl SearchBackend for HttpBackend {
	fn status(&self) -> Result<StatusReport, ApiError> {
		self.get(STATUS_PATH, endpoint_url(&self.base_url, STATUS_PATH, None))
	}

	fn suggestions(&self, query: &str) -> Result<Vec<String>, ApiError> {
		let url = endpoint_url(&self.base_url, SUGGESTIONS_PATH, Some(("q", query)));
		let payload: SuggestionsPayload = self.get(SUGGESTIONS_PATH, url)?;
		Ok(payload.suggestions)
	}

	fn search(&self, query: &str) -> Result<Vec<ResultItem>, ApiError> {
		let url = endpoint_url(&self.base_url, SEARCH_PATH, Some(("q", query)));
		let payload: SearchPayload = self.get(SEARCH_PATH, url)?;
		Ok(payload.results)
	}

	fn document(&self, path: &str) -> Result<String, ApiError> {
		let url = endpoint_url(&self.base_url, DOCUMENT_PATH, Some(("path", path)));
		let payload: DocumentPayload = self.get(DOCUMENT_PATH, url)?;
		Ok(payload.content)
	}
}

fn normalize_base_url(raw: &str) -> String {
	let trimmed = raw.trim();
	if trimmed.is_empty() {
		return DEFAULT_BASE_URL.to_string();
	}

	let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
		trimmed.to_string()
	} else {
		format!("http://{trimmed}")
	};

	normalized.trim_end_matches('/').to_string()
}

/// Join the base URL, the endpoint path and one percent-encoded parameter.
fn endpoint_url(base: &str, path: &str, param: Option<(&str, &str)>) -> String {
	match param {
		Some((name, value)) => format!("{base}{path}?{name}={}", urlencoding::encode(value)),
		None => format!("{base}{path}"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn base_url_gains_scheme_and_loses_trailing_slash() {
		assert_eq!(normalize_base_url("localhost:9000/"), "http://localhost:9000");
		assert_eq!(normalize_base_url("https://search.example/"), "https://search.example");
		assert_eq!(normalize_base_url("   "), DEFAULT_BASE_URL);
	}

	#[test]
	fn query_parameters_are_percent_encoded() {
		let url = endpoint_url("http://h", SEARCH_PATH, Some(("q", "rust & c++ #1")));
		assert_eq!(url, "http://h/api/search?q=rust%20%26%20c%2B%2B%20%231");
	}

	#[test]
	fn document_paths_are_encoded_as_a_single_parameter() {
		let url = endpoint_url("http://h", DOCUMENT_PATH, Some(("path", "/data/a b/report.txt")));
		assert_eq!(url, "http://h/api/document?path=%2Fdata%2Fa%20b%2Freport.txt");
	}

	#[test]
	fn status_endpoint_has_no_parameters() {
		assert_eq!(endpoint_url("http://h", STATUS_PATH, None), "http://h/api/status");
	}

	#[test]
	fn backend_keeps_normalized_base() {
		let backend = HttpBackend::new(HttpOptions {
			base_url: "127.0.0.1:8080/".into(),
			timeout: Some(Duration::from_secs(2)),
		})
		.expect("client builds");
		assert_eq!(backend.base_url(), "http://127.0.0.1:8080");
	}

	#[test]
	fn unreachable_service_is_a_transport_error() {
		// Port 9 (discard) on localhost is closed on CI machines.
		let backend = HttpBackend::new(HttpOptions {
			base_url: "http://127.0.0.1:9".into(),
			timeout: Some(Duration::from_secs(2)),
		})
		.expect("client builds");
		let err = backend.status().expect_err("nothing listens on port 9");
		assert!(matches!(err, ApiError::Transport { endpoint: STATUS_PATH, .. }));
	}
}
