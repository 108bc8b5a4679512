use serde::Deserialize;

use crate::cli::CliArgs;

/// `[ui]`: start-up query, colours and suggestion timing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) debounce_ms: Option<u64>,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(millis) = cli.debounce_ms {
			self.debounce_ms = Some(millis);
		}
	}
}
