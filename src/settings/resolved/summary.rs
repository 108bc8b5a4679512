use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	print!("{}", render_summary(config));
}

fn render_summary(config: &ResolvedConfig) -> String {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Server: {}", config.base_url),
	];
	match config.timeout {
		Some(timeout) => lines.push(format!("  Request timeout: {}s", timeout.as_secs())),
		None => lines.push("  Request timeout: none".to_string()),
	}
	lines.push(format!("  Suggestion delay: {}ms", config.debounce.as_millis()));
	lines.push(format!(
		"  UI theme: {}",
		config.theme.as_deref().unwrap_or("(use the library default)")
	));
	if !config.initial_query.is_empty() {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines.join("\n") + "\n"
}
