mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::parse_cli;
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();
	docseek_tui::check_builtin_themes()?;

	if cli.list_themes {
		for name in docseek_tui::theme_names() {
			println!("{name}");
		}
		return Ok(());
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	docseek::logging::initialize(cli.log_file.as_deref())?;

	let workflow = SearchWorkflow::from_config(resolved)?;
	match cli.once.as_deref() {
		Some(query) => workflow.run_once(query, cli.output),
		None => workflow.run_interactive(),
	}
}
