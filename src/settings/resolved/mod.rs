use std::time::Duration;

use docseek_api::HttpOptions;
use docseek_tui::{Theme, TuiOptions};

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
	pub(crate) base_url: String,
	/// Per-request timeout; `None` waits indefinitely.
	pub(crate) timeout: Option<Duration>,
	pub(crate) initial_query: String,
	pub(crate) theme: Option<String>,
	pub(crate) debounce: Duration,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub(crate) fn print_summary(&self) {
		summary::print_summary(self);
	}

	pub(crate) fn http_options(&self) -> HttpOptions {
		HttpOptions {
			base_url: self.base_url.clone(),
			timeout: self.timeout,
		}
	}

	/// Options for the interactive front-end. The theme name was checked
	/// during validation; an unknown name falls back to the default.
	pub(crate) fn tui_options(&self) -> TuiOptions {
		let theme = self
			.theme
			.as_deref()
			.and_then(docseek_tui::by_name)
			.unwrap_or_else(Theme::default);
		TuiOptions {
			initial_query: self.initial_query.clone(),
			theme,
			debounce: self.debounce,
			..TuiOptions::default()
		}
	}
}
