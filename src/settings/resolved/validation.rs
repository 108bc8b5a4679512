use std::time::Duration;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Longest accepted suggestion delay.
const MAX_DEBOUNCE: Duration = Duration::from_secs(10);

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.base_url.is_empty() {
		return Err(ConfigError::invalid(
			"server.base_url",
			config.base_url.clone(),
			sources.source_for_base_url(),
			"must not be empty",
		));
	}

	if let Some(timeout) = config.timeout
		&& timeout.is_zero()
	{
		return Err(ConfigError::invalid(
			"server.timeout_secs",
			timeout.as_secs().to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if config.debounce > MAX_DEBOUNCE {
		return Err(ConfigError::invalid(
			"ui.debounce_ms",
			config.debounce.as_millis().to_string(),
			sources.source_for_debounce(),
			format!("must not exceed {}", MAX_DEBOUNCE.as_millis()),
		));
	}

	if let Some(theme) = &config.theme
		&& docseek_tui::by_name(theme).is_none()
	{
		return Err(ConfigError::invalid(
			"ui.theme",
			theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme (available: {})", docseek_tui::theme_names().join(", ")),
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			base_url: "http://127.0.0.1:8080".into(),
			timeout: None,
			initial_query: String::new(),
			theme: None,
			debounce: Duration::from_millis(200),
		}
	}

	#[test]
	fn defaults_are_valid() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout: Some(Duration::ZERO),
			..config()
		};
		let sources = ConfigSources {
			timeout_secs: Some(SettingSource::CliFlag("--timeout-secs")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "server.timeout_secs");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn validation_rejects_unknown_theme() {
		let config = ResolvedConfig {
			theme: Some("neon".into()),
			..config()
		};
		let sources = ConfigSources {
			theme: Some(SettingSource::Environment("DOCSEEK__UI__THEME")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "ui.theme");
		let message = err.to_string();
		assert!(message.contains("environment variable"));
		assert!(message.contains("dark"));
	}

	#[test]
	fn theme_aliases_are_accepted() {
		let config = ResolvedConfig {
			theme: Some("Night".into()),
			..config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_empty_base_url() {
		let config = ResolvedConfig {
			base_url: String::new(),
			..config()
		};
		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "server.base_url");
		assert!(err.to_string().contains("configuration key"));
	}
}
