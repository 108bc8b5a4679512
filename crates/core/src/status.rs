//! Single-line status reflection of the controller.

/// What the status region currently says.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
	/// Nothing reported yet (before the status check returns).
	#[default]
	Idle,
	/// Status check succeeded with at least one document.
	Indexed(u64),
	/// Status check succeeded but the index is empty.
	EmptyIndex,
	/// The status check itself failed.
	Unavailable,
	/// A search is in flight.
	Searching,
	/// A search returned hits; the count lives in the results header.
	Cleared,
	/// A search returned nothing for this query.
	NoResults(String),
	/// The search request failed.
	SearchFailed,
}

impl Status {
	#[must_use]
	pub fn from_document_count(count: u64) -> Self {
		if count > 0 {
			Self::Indexed(count)
		} else {
			Self::EmptyIndex
		}
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		matches!(self, Self::Searching)
	}

	#[must_use]
	pub fn is_error(&self) -> bool {
		matches!(self, Self::Unavailable | Self::SearchFailed)
	}

	#[must_use]
	pub fn text(&self) -> String {
		match self {
			Self::Idle | Self::Cleared => String::new(),
			Self::Indexed(1) => "Indexed 1 document".to_string(),
			Self::Indexed(count) => format!("Indexed {count} documents"),
			Self::EmptyIndex => {
				"No documents indexed. Please add documents to the data folder.".to_string()
			}
			Self::Unavailable => "Unable to reach the search service.".to_string(),
			Self::Searching => "Searching".to_string(),
			Self::NoResults(query) => format!("No results found for \"{query}\""),
			Self::SearchFailed => "Error performing search. Please try again.".to_string(),
		}
	}
}
