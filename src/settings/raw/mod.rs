use std::env;
use std::time::Duration;

use anyhow::{Error, Result};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod server;
mod ui;

use server::ServerSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	server: ServerSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.server.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			base_url: detect_source(
				cli.server.is_some(),
				self.server.base_url.is_some(),
				"DOCSEEK__SERVER__BASE_URL",
				"--server",
				"server.base_url",
			),
			timeout_secs: detect_source(
				cli.timeout_secs.is_some(),
				self.server.timeout_secs.is_some(),
				"DOCSEEK__SERVER__TIMEOUT_SECS",
				"--timeout-secs",
				"server.timeout_secs",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"DOCSEEK__UI__THEME",
				"--theme",
				"ui.theme",
			),
			debounce_ms: detect_source(
				cli.debounce_ms.is_some(),
				self.ui.debounce_ms.is_some(),
				"DOCSEEK__UI__DEBOUNCE_MS",
				"--debounce-ms",
				"ui.debounce_ms",
			),
		};

		let config = ResolvedConfig {
			base_url: self
				.server
				.base_url
				.map(|url| url.trim().to_string())
				.unwrap_or_else(|| docseek_api::DEFAULT_BASE_URL.to_string()),
			timeout: self.server.timeout_secs.map(Duration::from_secs),
			initial_query: self.ui.initial_query.unwrap_or_default(),
			theme: self.ui.theme,
			debounce: self
				.ui
				.debounce_ms
				.map_or(docseek_core::DEFAULT_DEBOUNCE, Duration::from_millis),
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
