//! Interactive terminal front-end for `docseek`.
//!
//! This crate wraps the interaction controller in a ratatui application: the
//! event loop, key and mouse routing, rendering of both views and every
//! overlay, the overlay animator, and the built-in colour themes.

mod app;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::{App, Flow};
pub use config::{TuiOptions, UiLabels};
pub use runtime::run;

pub use crate::input::QueryInput;
pub use crate::style::{
	Theme, ThemeRegistration, by_name, check_builtin_themes, default_theme, names as theme_names,
};
