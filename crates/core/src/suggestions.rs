//! Autocomplete panel contents and the keyboard/pointer selection machine.
//!
//! The panel is visible exactly when it holds at least one suggestion, so
//! visibility is derived from the item list rather than stored beside it.

use std::ops::Range;

use crate::escape;

/// Current suggestion set plus the highlighted entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionPanel {
	items: Vec<String>,
	selected: Option<usize>,
	/// Query the items were fetched for, used for match highlighting.
	query: String,
}

impl SuggestionPanel {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the whole set with a fresh server response.
	///
	/// Selection always resets: a new set never inherits a highlighted index.
	pub fn replace(&mut self, query: impl Into<String>, items: Vec<String>) {
		self.items = items;
		self.query = query.into();
		self.selected = None;
	}

	/// Hide the panel: clear the set and the selection.
	pub fn dismiss(&mut self) {
		self.items.clear();
		self.query.clear();
		self.selected = None;
	}

	#[must_use]
	pub fn is_visible(&self) -> bool {
		!self.items.is_empty()
	}

	#[must_use]
	pub fn items(&self) -> &[String] {
		&self.items
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Highlighted entry; `None` means nothing is highlighted.
	#[must_use]
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	#[must_use]
	pub fn selected_text(&self) -> Option<&str> {
		self.selected
			.and_then(|index| self.items.get(index))
			.map(String::as_str)
	}

	#[must_use]
	pub fn is_selected(&self, index: usize) -> bool {
		self.selected == Some(index)
	}

	/// Move the highlight down one entry, stopping at the last one.
	pub fn select_next(&mut self) {
		if self.items.is_empty() {
			return;
		}
		let last = self.items.len() - 1;
		self.selected = Some(match self.selected {
			None => 0,
			Some(index) => (index + 1).min(last),
		});
	}

	/// Move the highlight up one entry; moving past the first clears it.
	pub fn select_previous(&mut self) {
		if self.items.is_empty() {
			return;
		}
		self.selected = match self.selected {
			None | Some(0) => None,
			Some(index) => Some(index - 1),
		};
	}

	/// Pointer entered entry `index`.
	pub fn hover(&mut self, index: usize) {
		if index < self.items.len() {
			self.selected = Some(index);
		}
	}

	/// Split entry `index` around the first case-insensitive match of the
	/// query it was fetched for.
	#[must_use]
	pub fn highlight(&self, index: usize) -> Option<Highlight<'_>> {
		let text = self.items.get(index)?;
		Some(Highlight::new(text, &self.query))
	}

	/// Markup for the whole panel, one entry per line, matched text in
	/// `<strong>` and the highlighted entry marked `selected`.
	#[must_use]
	pub fn to_markup(&self) -> String {
		let mut out = String::new();
		for index in 0..self.items.len() {
			let Some(highlight) = self.highlight(index) else {
				continue;
			};
			let class = if self.is_selected(index) {
				"suggestion-item selected"
			} else {
				"suggestion-item"
			};
			out.push_str(&format!(
				"<div class=\"{class}\" data-index=\"{index}\">{}</div>\n",
				highlight.to_markup()
			));
		}
		out
	}
}

/// One suggestion split around the matched part of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight<'a> {
	pub before: &'a str,
	pub matched: &'a str,
	pub after: &'a str,
}

impl<'a> Highlight<'a> {
	#[must_use]
	pub fn new(text: &'a str, query: &str) -> Self {
		match find_case_insensitive(text, query) {
			Some(range) => Self {
				before: &text[..range.start],
				matched: &text[range.clone()],
				after: &text[range.end..],
			},
			None => Self {
				before: text,
				matched: "",
				after: "",
			},
		}
	}

	#[must_use]
	pub fn to_markup(&self) -> String {
		if self.matched.is_empty() {
			return escape::markup(self.before);
		}
		format!(
			"{}<strong>{}</strong>{}",
			escape::markup(self.before),
			escape::markup(self.matched),
			escape::markup(self.after)
		)
	}
}

/// Byte range of the first occurrence of `needle` in `haystack`, comparing
/// characters by their lowercase forms.
fn find_case_insensitive(haystack: &str, needle: &str) -> Option<Range<usize>> {
	if needle.is_empty() {
		return None;
	}
	let needle: Vec<char> = needle.chars().collect();
	for (start, _) in haystack.char_indices() {
		let mut candidate = haystack[start..].char_indices();
		let mut end = start;
		let mut matched = true;
		for expected in &needle {
			match candidate.next() {
				Some((offset, actual)) if chars_eq_ignore_case(actual, *expected) => {
					end = start + offset + actual.len_utf8();
				}
				_ => {
					matched = false;
					break;
				}
			}
		}
		if matched {
			return Some(start..end);
		}
	}
	None
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
	a == b || a.to_lowercase().eq(b.to_lowercase())
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	fn panel(items: &[&str]) -> SuggestionPanel {
		let mut panel = SuggestionPanel::new();
		panel.replace("qu", items.iter().map(|s| s.to_string()).collect());
		panel
	}

	#[test]
	fn visibility_tracks_contents() {
		let mut panel = panel(&["query", "quest"]);
		assert!(panel.is_visible());
		panel.dismiss();
		assert!(!panel.is_visible());
		assert_eq!(panel.selected(), None);
	}

	#[test]
	fn down_clamps_at_last_entry() {
		let mut panel = panel(&["a", "b"]);
		panel.select_next();
		assert_eq!(panel.selected(), Some(0));
		panel.select_next();
		panel.select_next();
		assert_eq!(panel.selected(), Some(1));
	}

	#[test]
	fn up_from_first_entry_clears_selection() {
		let mut panel = panel(&["a", "b"]);
		panel.hover(1);
		panel.select_previous();
		assert_eq!(panel.selected(), Some(0));
		panel.select_previous();
		assert_eq!(panel.selected(), None);
		panel.select_previous();
		assert_eq!(panel.selected(), None);
	}

	#[test]
	fn navigation_on_hidden_panel_is_ignored() {
		let mut panel = SuggestionPanel::new();
		panel.select_next();
		panel.hover(0);
		assert_eq!(panel.selected(), None);
	}

	#[test]
	fn hover_out_of_range_is_ignored() {
		let mut panel = panel(&["a"]);
		panel.hover(3);
		assert_eq!(panel.selected(), None);
	}

	#[test]
	fn replace_resets_selection() {
		let mut panel = panel(&["a", "b"]);
		panel.hover(1);
		panel.replace("b", vec!["b".into(), "bb".into()]);
		assert_eq!(panel.selected(), None);
		assert_eq!(panel.query(), "b");
	}

	#[test]
	fn highlight_splits_case_insensitively() {
		let highlight = Highlight::new("Quantum Query", "QUERY");
		assert_eq!(highlight.before, "Quantum ");
		assert_eq!(highlight.matched, "Query");
		assert_eq!(highlight.after, "");
	}

	#[test]
	fn highlight_without_match_is_plain() {
		let highlight = Highlight::new("report", "xyz");
		assert_eq!(highlight.before, "report");
		assert!(highlight.matched.is_empty());
		assert_eq!(highlight.to_markup(), "report");
	}

	#[test]
	fn highlight_handles_multibyte_text() {
		let highlight = Highlight::new("Über café", "CAFÉ");
		assert_eq!(highlight.before, "Über ");
		assert_eq!(highlight.matched, "café");
	}

	#[test]
	fn markup_escapes_and_marks_selection() {
		let mut panel = SuggestionPanel::new();
		panel.replace("a", vec!["<a>".into(), "b".into()]);
		panel.hover(0);
		let markup = panel.to_markup();
		assert!(markup.contains(
			"<div class=\"suggestion-item selected\" data-index=\"0\">&lt;<strong>a</strong>&gt;</div>"
		));
		assert!(markup.contains("<div class=\"suggestion-item\" data-index=\"1\">b</div>"));
		assert_eq!(markup.matches("selected").count(), 1);
	}

	#[derive(Debug, Clone)]
	enum Step {
		Down,
		Up,
		Hover(usize),
	}

	fn step() -> impl Strategy<Value = Step> {
		prop_oneof![
			Just(Step::Down),
			Just(Step::Up),
			(0usize..12).prop_map(Step::Hover),
		]
	}

	proptest! {
		#[test]
		fn selection_never_leaves_valid_range(
			len in 0usize..8,
			steps in proptest::collection::vec(step(), 0..64),
		) {
			let mut panel = SuggestionPanel::new();
			panel.replace("q", (0..len).map(|i| format!("q{i}")).collect());
			for step in steps {
				match step {
					Step::Down => panel.select_next(),
					Step::Up => panel.select_previous(),
					Step::Hover(index) => panel.hover(index),
				}
				if let Some(index) = panel.selected() {
					prop_assert!(index < panel.len());
				}
			}
		}
	}
}
