use crate::error::ApiError;
use crate::types::{ResultItem, StatusReport};

/// Request/response access to the search service.
///
/// Implementations must be callable from several threads at once: the fetch
/// worker runs every request on its own thread so a slow search never holds
/// up a suggestion lookup.
pub trait SearchBackend: Send + Sync {
	/// `GET /api/status`.
	fn status(&self) -> Result<StatusReport, ApiError>;

	/// `GET /api/suggestions?q=<query>`, in server relevance order.
	fn suggestions(&self, query: &str) -> Result<Vec<String>, ApiError>;

	/// `GET /api/search?q=<query>`, in server ranking order.
	fn search(&self, query: &str) -> Result<Vec<ResultItem>, ApiError>;

	/// `GET /api/document?path=<path>`, returning the raw document text.
	fn document(&self, path: &str) -> Result<String, ApiError>;
}
