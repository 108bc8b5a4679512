//! Visual styling.
//!
//! Themes are colour schemes for the terminal UI. Two are bundled; more can
//! be registered at start-up.

pub mod theme;

pub use theme::{
	Theme, ThemeRegistration, by_name, check_builtin_themes, default_theme, names,
	register_additional,
};
