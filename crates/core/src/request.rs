//! Messages exchanged between the controller and the fetch worker.

use docseek_api::{ApiError, ResultItem, StatusReport};

use crate::tokens::Token;

/// Work the controller wants done against the search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
	Status { token: Token },
	Suggestions { token: Token, query: String },
	Search { token: Token, query: String },
	Document { token: Token, path: String },
}

impl Request {
	#[must_use]
	pub fn token(&self) -> Token {
		match self {
			Self::Status { token }
			| Self::Suggestions { token, .. }
			| Self::Search { token, .. }
			| Self::Document { token, .. } => *token,
		}
	}
}

/// Outcome of a [`Request`], tagged with the token it was issued under.
///
/// `query` and `path` echo the request so the controller can render results
/// against the query that produced them.
#[derive(Debug)]
pub enum Response {
	Status {
		token: Token,
		result: Result<StatusReport, ApiError>,
	},
	Suggestions {
		token: Token,
		query: String,
		result: Result<Vec<String>, ApiError>,
	},
	Search {
		token: Token,
		query: String,
		result: Result<Vec<ResultItem>, ApiError>,
	},
	Document {
		token: Token,
		path: String,
		result: Result<String, ApiError>,
	},
}

impl Response {
	#[must_use]
	pub fn token(&self) -> Token {
		match self {
			Self::Status { token, .. }
			| Self::Suggestions { token, .. }
			| Self::Search { token, .. }
			| Self::Document { token, .. } => *token,
		}
	}
}
