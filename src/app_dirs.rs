//! Resolve configuration and data directories for `docseek`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "docseek";

const CONFIG_DIR_ENV: &str = "DOCSEEK_CONFIG_DIR";
const DATA_DIR_ENV: &str = "DOCSEEK_DATA_DIR";

/// Return the platform-specific directory layout for the application.
fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for docseek"))
}

/// Resolve an override directory from an environment variable.
///
/// An empty string is treated the same as an unset value.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the data directory, home of the diagnostic log.
pub fn get_data_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(DATA_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.data_local_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unset_override_is_ignored() {
		assert_eq!(dir_from_env("DOCSEEK_TEST_UNSET_DIRECTORY_OVERRIDE"), None);
	}

	#[test]
	fn directories_resolve_to_distinct_paths() {
		let (Ok(config), Ok(data)) = (get_config_dir(), get_data_dir()) else {
			return;
		};
		assert!(!config.as_os_str().is_empty());
		assert!(!data.as_os_str().is_empty());
	}
}
