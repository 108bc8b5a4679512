//! Content shown by the document overlay.

use crate::escape;

/// The single document currently loaded into the viewer overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentViewer {
	path: String,
	title: String,
	content: String,
	/// First visible line of the preformatted body.
	pub scroll: usize,
}

impl DocumentViewer {
	#[must_use]
	pub fn new(path: impl Into<String>, content: &str) -> Self {
		let path = path.into();
		Self {
			title: file_name(&path).to_string(),
			content: escape::terminal(content, true),
			path,
			scroll: 0,
		}
	}

	#[must_use]
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Last path segment, shown in the overlay header.
	#[must_use]
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Raw body with control characters neutralized; lines are not reflowed.
	#[must_use]
	pub fn content(&self) -> &str {
		&self.content
	}

	#[must_use]
	pub fn line_count(&self) -> usize {
		self.content.lines().count()
	}

	pub fn scroll_up(&mut self, lines: usize) {
		self.scroll = self.scroll.saturating_sub(lines);
	}

	pub fn scroll_down(&mut self, lines: usize, viewport: usize) {
		let max_scroll = self.line_count().saturating_sub(viewport.max(1));
		self.scroll = (self.scroll + lines).min(max_scroll);
	}
}

/// Last segment of a path using either separator style.
#[must_use]
pub fn file_name(path: &str) -> &str {
	path.rsplit(['/', '\\']).next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn header_is_last_path_segment() {
		assert_eq!(DocumentViewer::new("/a/b/report.txt", "").title(), "report.txt");
		assert_eq!(file_name(r"C:\docs\notes.md"), "notes.md");
		assert_eq!(file_name("plain.txt"), "plain.txt");
		assert_eq!(file_name("dir/"), "");
	}

	#[test]
	fn content_keeps_preformatted_layout() {
		let viewer = DocumentViewer::new("a", "  indented\n\tcolumns\x1b[2J");
		assert_eq!(viewer.content(), "  indented\n\tcolumns\u{fffd}[2J");
		assert_eq!(viewer.line_count(), 2);
	}

	#[test]
	fn scrolling_stays_within_content() {
		let body = (0..10).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
		let mut viewer = DocumentViewer::new("a", &body);
		viewer.scroll_down(100, 4);
		assert_eq!(viewer.scroll, 6);
		viewer.scroll_up(2);
		assert_eq!(viewer.scroll, 4);
		viewer.scroll_up(100);
		assert_eq!(viewer.scroll, 0);
	}
}
