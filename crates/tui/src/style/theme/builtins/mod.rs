mod loader;

use std::sync::OnceLock;

use anyhow::{Result, anyhow};
use include_dir::{Dir, include_dir};
use loader::{BuiltinThemes, load_builtin_themes};
use ratatui::style::Style;

use crate::style::theme::types::{Theme, ThemeRegistration};

const BUILTIN_THEME_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/style/theme/builtins/themes");

/// Unstyled theme used when the bundled themes cannot be read.
const PLAIN: Theme = Theme {
	title: Style::new(),
	prompt: Style::new(),
	placeholder: Style::new(),
	border: Style::new(),
	suggestion: Style::new(),
	selected: Style::new(),
	matched: Style::new(),
	link: Style::new(),
	path: Style::new(),
	muted: Style::new(),
	status: Style::new(),
	error: Style::new(),
	backdrop: Style::new(),
};

/// Parse the bundled themes, reporting why they could not be loaded.
pub fn check_builtin_themes() -> Result<()> {
	builtin_themes().map(|_| ())
}

/// The default bundled theme, or an unstyled one if the bundle is broken.
pub fn default_theme() -> Theme {
	builtin_themes().map_or(PLAIN, |themes| themes.default_theme)
}

pub(super) fn registrations() -> Vec<ThemeRegistration> {
	builtin_themes()
		.map(|themes| themes.registrations.clone())
		.unwrap_or_default()
}

fn builtin_themes() -> Result<&'static BuiltinThemes> {
	static BUILTINS: OnceLock<Result<BuiltinThemes, String>> = OnceLock::new();
	BUILTINS
		.get_or_init(|| load_builtin_themes(&BUILTIN_THEME_DIR).map_err(|error| format!("{error:#}")))
		.as_ref()
		.map_err(|error| anyhow!("failed to load built-in themes: {error}"))
}
