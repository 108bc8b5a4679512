mod builtins;
mod registry;
mod types;

pub use builtins::{check_builtin_themes, default_theme};
pub use registry::{by_name, names, register_additional};
pub use types::{Theme, ThemeRegistration};

/// Return the built-in themes bundled with the application.
#[must_use]
pub fn builtin_themes() -> Vec<ThemeRegistration> {
	builtins::registrations()
}

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
