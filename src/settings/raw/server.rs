use serde::Deserialize;

use crate::cli::CliArgs;

/// `[server]`: where the search service lives and how long to wait for it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ServerSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

impl ServerSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.server.clone() {
			self.base_url = Some(url);
		}
		if let Some(secs) = cli.timeout_secs {
			self.timeout_secs = Some(secs);
		}
	}
}
