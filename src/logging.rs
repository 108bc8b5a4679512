//! Diagnostic log set-up.
//!
//! The terminal belongs to the interface, so diagnostics go to a file:
//! `docseek.log` in the data directory unless another path is given. The
//! filter is read from `DOCSEEK_LOG` and defaults to `info`.

use std::env;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "DOCSEEK_LOG";
const LOG_FILE_NAME: &str = "docseek.log";
const DEFAULT_FILTER: &str = "info";

/// Location of the log when `--log-file` is not given.
pub fn default_log_file() -> Result<PathBuf> {
	Ok(app_dirs::get_data_dir()?.join(LOG_FILE_NAME))
}

/// Install the global subscriber, appending to `path` or the default log
/// file. Returns the file in use.
pub fn initialize(path: Option<&Path>) -> Result<PathBuf> {
	let path = match path {
		Some(path) => path.to_path_buf(),
		None => default_log_file()?,
	};
	if let Some(parent) = path.parent()
		&& !parent.as_os_str().is_empty()
	{
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	let file = OpenOptions::new()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	tracing_subscriber::fmt()
		.with_env_filter(env_filter(env::var(LOG_ENV).ok()))
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init()
		.map_err(|err| anyhow!("failed to install log subscriber: {err}"))?;

	Ok(path)
}

/// Filter from user directives, falling back to the default when they are
/// absent or do not parse.
fn env_filter(directives: Option<String>) -> EnvFilter {
	directives
		.and_then(|directives| EnvFilter::try_new(directives).ok())
		.unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}
