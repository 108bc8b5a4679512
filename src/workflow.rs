use std::sync::Arc;

use anyhow::{Context, Result};
use docseek_api::{HttpBackend, SearchBackend};
use tracing::info;

use crate::cli::{OutputFormat, print_results};
use crate::settings::ResolvedConfig;

/// Coordinates building the backend and running either the interactive
/// interface or a single search.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	backend: Arc<dyn SearchBackend>,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let backend = HttpBackend::new(config.http_options())
			.context("failed to build the search service client")?;
		info!(server = backend.base_url(), "search backend ready");
		Ok(Self {
			config,
			backend: Arc::new(backend),
		})
	}

	/// Run the terminal interface until the user quits.
	pub(crate) fn run_interactive(self) -> Result<()> {
		docseek_tui::run(self.backend, self.config.tui_options())
	}

	/// Search once without the interface and print the results.
	pub(crate) fn run_once(self, query: &str, format: OutputFormat) -> Result<()> {
		let query = query.trim();
		anyhow::ensure!(!query.is_empty(), "--once needs a non-blank query");
		let results = self
			.backend
			.search(query)
			.with_context(|| format!("search for \"{query}\" failed"))?;
		info!(query, count = results.len(), "one-shot search finished");
		print_results(format, query, &results)
	}
}
