//! Text shown by the UI and the options a session starts with.

use std::time::Duration;

use docseek_core::{ControllerOptions, DEFAULT_DEBOUNCE};

use crate::style::Theme;

/// Fixed wording of the interface.
#[derive(Debug, Clone)]
pub struct UiLabels {
	/// Application name shown above the search box.
	pub brand: String,
	pub tagline: String,
	/// Placeholder displayed while the search box is empty.
	pub placeholder: String,
	/// Paragraphs of the About modal.
	pub about: Vec<String>,
	/// Paragraphs of the Terms modal, shown under the "last updated" line.
	pub terms: Vec<String>,
}

impl Default for UiLabels {
	fn default() -> Self {
		Self {
			brand: "DocSeek".to_string(),
			tagline: "Full-text search over your document collection".to_string(),
			placeholder: "Search documents".to_string(),
			about: vec![
				"DocSeek searches a folder of plain-text documents indexed by a \
				 companion search service."
					.to_string(),
				"Results are ranked by TF-IDF relevance. Suggestions come from the \
				 terms in the index."
					.to_string(),
				"This client only displays what the service returns; it keeps no \
				 history and stores nothing on disk besides its log."
					.to_string(),
			],
			terms: vec![
				"Documents are served as-is from the data folder of the search \
				 service. You are responsible for the content you index."
					.to_string(),
				"The service is provided without warranty of any kind.".to_string(),
			],
		}
	}
}

/// Everything needed to start an interactive session.
#[derive(Debug, Clone)]
pub struct TuiOptions {
	/// Query placed in the search box at start-up.
	pub initial_query: String,
	pub theme: Theme,
	pub debounce: Duration,
	pub labels: UiLabels,
}

impl Default for TuiOptions {
	fn default() -> Self {
		Self {
			initial_query: String::new(),
			theme: Theme::default(),
			debounce: DEFAULT_DEBOUNCE,
			labels: UiLabels::default(),
		}
	}
}

impl TuiOptions {
	pub(crate) fn controller_options(&self) -> ControllerOptions {
		ControllerOptions {
			debounce: self.debounce,
		}
	}
}
