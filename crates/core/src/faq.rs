//! Question/answer accordion shown in the Help modal.

/// One collapsible help entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaqEntry {
	pub question: &'static str,
	pub answer: &'static str,
}

const ENTRIES: &[FaqEntry] = &[
	FaqEntry {
		question: "How do I search?",
		answer: "Type a few words and press Enter. Results are ranked by TF-IDF relevance.",
	},
	FaqEntry {
		question: "What are the suggestions under the search box?",
		answer: "Terms from the index that start with what you typed. Use Up/Down to pick one and Enter to search for it.",
	},
	FaqEntry {
		question: "How do I read a document?",
		answer: "Select a result and press Enter, or click its title. Esc closes the viewer.",
	},
	FaqEntry {
		question: "Why are there no results?",
		answer: "Either nothing matched your words or the server has no documents indexed. The status line shows the document count.",
	},
	FaqEntry {
		question: "Which keys are available?",
		answer: "Ctrl+K focuses the search box, Ctrl+L clears it, F1 opens help, F2 about, F3 terms, Ctrl+C quits.",
	},
];

/// Accordion over the help entries: at most one entry is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HelpFaq {
	expanded: Option<usize>,
	focused: usize,
}

impl HelpFaq {
	#[must_use]
	pub fn entries(&self) -> &'static [FaqEntry] {
		ENTRIES
	}

	#[must_use]
	pub fn expanded(&self) -> Option<usize> {
		self.expanded
	}

	#[must_use]
	pub fn is_expanded(&self, index: usize) -> bool {
		self.expanded == Some(index)
	}

	#[must_use]
	pub fn focused(&self) -> usize {
		self.focused
	}

	/// Expand `index` and collapse every other entry; toggling the expanded
	/// entry collapses it.
	pub fn toggle(&mut self, index: usize) {
		if index >= ENTRIES.len() {
			return;
		}
		self.focused = index;
		self.expanded = if self.expanded == Some(index) {
			None
		} else {
			Some(index)
		};
	}

	pub fn toggle_focused(&mut self) {
		self.toggle(self.focused);
	}

	pub fn focus_next(&mut self) {
		self.focused = (self.focused + 1).min(ENTRIES.len() - 1);
	}

	pub fn focus_previous(&mut self) {
		self.focused = self.focused.saturating_sub(1);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opening_one_entry_closes_the_others() {
		let mut faq = HelpFaq::default();
		faq.toggle(0);
		faq.toggle(2);
		assert_eq!(faq.expanded(), Some(2));
		assert!(!faq.is_expanded(0));
	}

	#[test]
	fn toggling_the_open_entry_collapses_it() {
		let mut faq = HelpFaq::default();
		faq.toggle(1);
		faq.toggle(1);
		assert_eq!(faq.expanded(), None);
	}

	#[test]
	fn focus_moves_within_bounds() {
		let mut faq = HelpFaq::default();
		faq.focus_previous();
		assert_eq!(faq.focused(), 0);
		for _ in 0..20 {
			faq.focus_next();
		}
		assert_eq!(faq.focused(), faq.entries().len() - 1);
		faq.toggle_focused();
		assert_eq!(faq.expanded(), Some(faq.entries().len() - 1));
	}

	#[test]
	fn out_of_range_toggle_is_ignored() {
		let mut faq = HelpFaq::default();
		faq.toggle(99);
		assert_eq!(faq.expanded(), None);
	}
}
