//! Single-line query editor built on `tui-textarea`.

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

/// The search box. Newlines never enter the buffer.
#[derive(Debug, Clone)]
pub struct QueryInput<'a> {
	textarea: TextArea<'a>,
}

impl Default for QueryInput<'_> {
	fn default() -> Self {
		Self::new("")
	}
}

impl<'a> QueryInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let initial: String = initial.into();
		let mut textarea = TextArea::new(vec![single_line(&initial)]);
		textarea.set_cursor_line_style(Style::default());
		textarea.move_cursor(CursorMove::End);
		Self { textarea }
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key press to the editor. Returns `true` when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		if matches!(key.code, KeyCode::Enter | KeyCode::Tab | KeyCode::BackTab) {
			return false;
		}
		self.textarea.input(key)
	}

	/// Insert pasted text at the cursor, folding line breaks into spaces.
	pub fn paste(&mut self, text: &str) -> bool {
		let text = single_line(text);
		!text.is_empty() && self.textarea.insert_str(text)
	}

	/// Replace the whole buffer and park the cursor at the end.
	pub fn set_text(&mut self, text: &str) {
		if self.text() == text {
			return;
		}
		self.textarea.move_cursor(CursorMove::Head);
		self.textarea.delete_line_by_end();
		self.textarea.insert_str(single_line(text));
	}

	pub fn clear(&mut self) {
		self.set_text("");
	}

	pub fn set_styles(&mut self, text: Style, placeholder: Style, hint: &str) {
		self.textarea.set_style(text);
		self.textarea.set_placeholder_style(placeholder);
		self.textarea.set_placeholder_text(hint.to_string());
	}

	pub fn widget(&self) -> &TextArea<'a> {
		&self.textarea
	}

	/// Cursor column in characters.
	#[must_use]
	pub fn cursor_column(&self) -> usize {
		self.textarea.cursor().1
	}
}

fn single_line(text: &str) -> String {
	text.replace(['\r', '\n'], " ")
}
