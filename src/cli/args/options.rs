use clap::ValueEnum;

/// Output formats for a one-shot search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	/// One result per line: title, path and score.
	Plain,
	/// The raw result list as pretty-printed JSON.
	Json,
	/// The HTML fragment the results view corresponds to.
	Html,
}
