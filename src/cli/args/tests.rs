use std::path::PathBuf;

use clap::{CommandFactory, FromArgMatches, Parser};

use super::{CliArgs, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let command = CliArgs::command();
	let mut matches = command.get_matches_from(vec!["docseek"]);
	let parsed = CliArgs::from_arg_matches_mut(&mut matches).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.once.is_none());
	assert!(!parsed.no_config);
}

#[test]
fn one_shot_flags_parse() {
	let parsed = CliArgs::parse_from([
		"docseek",
		"--once",
		"tf idf",
		"--output",
		"html",
		"--server",
		"search.local:9000",
		"--timeout-secs",
		"5",
	]);
	assert_eq!(parsed.once.as_deref(), Some("tf idf"));
	assert_eq!(parsed.output, OutputFormat::Html);
	assert_eq!(parsed.server.as_deref(), Some("search.local:9000"));
	assert_eq!(parsed.timeout_secs, Some(5));
}

#[test]
fn config_files_accumulate() {
	let parsed = CliArgs::parse_from(["docseek", "-c", "a.toml", "--config", "b.toml"]);
	assert_eq!(parsed.config, vec![PathBuf::from("a.toml"), PathBuf::from("b.toml")]);
}
