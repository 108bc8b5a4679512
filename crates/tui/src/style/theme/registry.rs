use std::sync::{OnceLock, RwLock};

use super::builtins;
use super::types::{Theme, ThemeRegistration};

fn registry() -> &'static RwLock<Vec<ThemeRegistration>> {
	static REGISTRY: OnceLock<RwLock<Vec<ThemeRegistration>>> = OnceLock::new();
	REGISTRY.get_or_init(|| RwLock::new(builtins::registrations()))
}

/// Look a theme up by name or alias, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let themes = registry().read().ok()?;
	themes
		.iter()
		.find(|registration| registration.answers_to(name))
		.map(|registration| registration.theme)
}

/// Names of every registered theme, in registration order.
#[must_use]
pub fn names() -> Vec<String> {
	registry()
		.read()
		.map(|themes| themes.iter().map(|r| r.name.clone()).collect())
		.unwrap_or_default()
}

/// Register extra themes. A registration whose name is already taken
/// replaces the existing theme. Returns the names that were replaced.
pub fn register_additional<I>(registrations: I) -> Vec<String>
where
	I: IntoIterator<Item = ThemeRegistration>,
{
	let Ok(mut themes) = registry().write() else {
		return Vec::new();
	};
	let mut replaced = Vec::new();
	for registration in registrations {
		match themes
			.iter_mut()
			.find(|existing| existing.name.eq_ignore_ascii_case(&registration.name))
		{
			Some(existing) => {
				replaced.push(existing.name.clone());
				*existing = registration;
			}
			None => themes.push(registration),
		}
	}
	replaced
}

#[cfg(test)]
mod tests {
	use ratatui::style::{Color, Style};

	use super::*;

	#[test]
	fn bundled_themes_are_registered() {
		let names = names();
		assert!(names.iter().any(|name| name == "dark"));
		assert!(names.iter().any(|name| name == "light"));
	}

	#[test]
	fn lookup_ignores_case_and_accepts_aliases() {
		assert!(by_name("DARK").is_some());
		assert_eq!(by_name("day"), by_name("light"));
		assert!(by_name("no-such-theme").is_none());
	}

	#[test]
	fn additional_theme_can_be_selected() {
		let mut theme = Theme::default();
		theme.title = Style::new().fg(Color::Red);
		let replaced = register_additional([ThemeRegistration::new("test-red", theme)]);
		assert!(replaced.is_empty());
		assert_eq!(by_name("test-red").map(|t| t.title), Some(theme.title));
	}
}
