use ratatui::style::{Modifier, Style};

/// Styles for every element the UI draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Application title on the search view.
	pub title: Style,
	/// Text typed into the search input.
	pub prompt: Style,
	/// Placeholder shown while the input is empty.
	pub placeholder: Style,
	/// Borders of the input, panel and overlays.
	pub border: Style,
	/// Unselected suggestion rows.
	pub suggestion: Style,
	/// Highlighted suggestion or result.
	pub selected: Style,
	/// The part of a suggestion that matches the query.
	pub matched: Style,
	/// Result titles.
	pub link: Style,
	/// Result paths.
	pub path: Style,
	/// Counts, scores, hints and other secondary text.
	pub muted: Style,
	/// Status line.
	pub status: Style,
	/// Error status and the alert box.
	pub error: Style,
	/// Dimmed background behind an overlay.
	pub backdrop: Style,
}

impl Theme {
	/// `matched` layered on top of the row's own style.
	#[must_use]
	pub fn matched_on(&self, row: Style) -> Style {
		row.patch(self.matched).add_modifier(Modifier::BOLD)
	}
}

/// A named theme that can be selected from configuration.
#[derive(Debug, Clone)]
pub struct ThemeRegistration {
	pub name: String,
	pub theme: Theme,
	/// Alternate names for the theme.
	pub aliases: Vec<String>,
}

impl ThemeRegistration {
	pub fn new(name: impl Into<String>, theme: Theme) -> Self {
		Self {
			name: name.into(),
			theme,
			aliases: Vec::new(),
		}
	}

	/// Adds a single alias to this theme registration.
	pub fn alias(mut self, alias: impl Into<String>) -> Self {
		self.aliases.push(alias.into());
		self
	}

	/// Whether `name` is this theme's name or one of its aliases.
	pub(crate) fn answers_to(&self, name: &str) -> bool {
		let name = name.trim();
		self.name.eq_ignore_ascii_case(name)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(name))
	}
}
