use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `docseek` binary.
#[derive(Parser, Debug)]
#[command(
	name = "docseek",
	version,
	long_version = long_version(),
	about = "Search a document collection from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "DOCSEEK_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 's',
		long = "server",
		value_name = "URL",
		help = "Base URL of the search service (default: http://127.0.0.1:8080)"
	)]
	pub(crate) server: Option<String>,
	#[arg(
		long = "timeout-secs",
		value_name = "SECONDS",
		help = "Give up on a request after this many seconds (default: wait indefinitely)"
	)]
	pub(crate) timeout_secs: Option<u64>,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "QUERY",
		help = "Search for this query as soon as the interface starts (default: empty)"
	)]
	pub(crate) initial_query: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: dark)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "debounce-ms",
		value_name = "MILLIS",
		help = "Quiet period before suggestions are fetched (default: 200)"
	)]
	pub(crate) debounce_ms: Option<u64>,
	#[arg(
		long = "once",
		value_name = "QUERY",
		help = "Run a single search, print the results and exit (default: interactive)"
	)]
	pub(crate) once: Option<String>,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		default_value_t = OutputFormat::Plain,
		help = "Choose how `--once` prints its results"
	)]
	pub(crate) output: OutputFormat,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write diagnostics to this file (default: docseek.log in the data directory)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
}
