//! Wire-level contract between the docseek front-end and the remote search
//! service.
//!
//! The service exposes four read-only JSON endpoints. This crate owns their
//! payload shapes, the [`SearchBackend`] seam the controller talks through,
//! and the blocking [`HttpBackend`] used by the terminal application.

mod backend;
mod error;
mod http;
pub mod types;

pub use backend::SearchBackend;
pub use error::ApiError;
pub use http::{
	DEFAULT_BASE_URL, DOCUMENT_PATH, HttpBackend, HttpOptions, SEARCH_PATH, STATUS_PATH,
	SUGGESTIONS_PATH,
};
pub use types::{DocumentPayload, ResultItem, SearchPayload, StatusReport, SuggestionsPayload};
