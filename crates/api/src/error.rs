use thiserror::Error;

/// Failures raised while talking to the search service.
///
/// Every variant is treated the same way by the controller (a quiet,
/// locally handled network failure); the split only exists for logs.
#[derive(Debug, Error)]
pub enum ApiError {
	/// The HTTP client could not be constructed.
	#[error("failed to build http client: {0}")]
	Client(#[source] reqwest::Error),

	/// The request never produced a response (connection refused, reset, timeout).
	#[error("request to {endpoint} failed: {source}")]
	Transport {
		endpoint: &'static str,
		#[source]
		source: reqwest::Error,
	},

	/// The service answered with a non-success status code.
	#[error("{endpoint} answered with status {status}")]
	Status { endpoint: &'static str, status: u16 },

	/// The response body was not the JSON document we expected.
	#[error("{endpoint} returned a malformed body: {source}")]
	Decode {
		endpoint: &'static str,
		#[source]
		source: serde_json::Error,
	},
}

impl ApiError {
	/// Endpoint path the failure is attributed to, if any.
	#[must_use]
	pub fn endpoint(&self) -> Option<&'static str> {
		match self {
			Self::Client(_) => None,
			Self::Transport { endpoint, .. }
			| Self::Status { endpoint, .. }
			| Self::Decode { endpoint, .. } => Some(endpoint),
		}
	}
}
