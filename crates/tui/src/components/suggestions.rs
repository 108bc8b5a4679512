//! Autocomplete panel drawn under the search box.

use docseek_core::escape;
use docseek_core::{Highlight, SuggestionPanel};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::style::Theme;

/// Rows shown before the panel starts scrolling.
pub const MAX_VISIBLE_SUGGESTIONS: usize = 8;

/// Panel rectangle hanging below the input box, clipped to `bounds`.
#[must_use]
pub fn panel_area(input: Rect, len: usize, bounds: Rect) -> Rect {
	let rows = len.min(MAX_VISIBLE_SUGGESTIONS) as u16;
	Rect {
		x: input.x,
		y: input.y.saturating_add(input.height.saturating_sub(1)),
		width: input.width,
		height: rows + 2,
	}
	.intersection(bounds)
}

/// First entry shown so the highlighted one stays within `rows` rows.
#[must_use]
pub fn scroll_offset(panel: &SuggestionPanel, rows: usize) -> usize {
	panel
		.selected()
		.map_or(0, |index| (index + 1).saturating_sub(rows.max(1)))
}

/// Draw the panel and return one hit box per visible entry, paired with the
/// entry index.
pub fn render_suggestions(
	frame: &mut Frame,
	area: Rect,
	panel: &SuggestionPanel,
	theme: &Theme,
) -> Vec<(usize, Rect)> {
	if !panel.is_visible() || area.height < 3 {
		return Vec::new();
	}

	frame.render_widget(Clear, area);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let offset = scroll_offset(panel, usize::from(inner.height));
	let mut hits = Vec::new();
	for (row, index) in (offset..panel.len()).enumerate() {
		let Ok(row) = u16::try_from(row) else {
			break;
		};
		if row >= inner.height {
			break;
		}
		let Some(highlight) = panel.highlight(index) else {
			continue;
		};
		let row_area = Rect::new(inner.x, inner.y + row, inner.width, 1);
		let selected = panel.is_selected(index);
		let base = if selected {
			theme.selected
		} else {
			theme.suggestion
		};
		let line = suggestion_line(highlight, selected, base, theme);
		frame.render_widget(Paragraph::new(line).style(base), row_area);
		hits.push((index, row_area));
	}
	hits
}

fn suggestion_line<'a>(
	highlight: Highlight<'_>,
	selected: bool,
	base: Style,
	theme: &Theme,
) -> Line<'a> {
	let marker = if selected { "› " } else { "  " };
	let mut spans = vec![Span::styled(marker, base)];
	spans.push(Span::styled(escape::terminal(highlight.before, false), base));
	if !highlight.matched.is_empty() {
		spans.push(Span::styled(
			escape::terminal(highlight.matched, false),
			theme.matched_on(base),
		));
		spans.push(Span::styled(escape::terminal(highlight.after, false), base));
	}
	Line::from(spans)
}

#[cfg(test)]
mod tests {
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;

	fn panel(len: usize) -> SuggestionPanel {
		let mut panel = SuggestionPanel::new();
		panel.replace("q", (0..len).map(|i| format!("q{i}")).collect());
		panel
	}

	#[test]
	fn panel_overlaps_input_bottom_border() {
		let input = Rect::new(10, 5, 40, 3);
		let area = panel_area(input, 3, Rect::new(0, 0, 80, 24));
		assert_eq!(area, Rect::new(10, 7, 40, 5));
	}

	#[test]
	fn panel_height_is_capped() {
		let input = Rect::new(0, 0, 40, 3);
		let area = panel_area(input, 30, Rect::new(0, 0, 80, 40));
		assert_eq!(area.height, MAX_VISIBLE_SUGGESTIONS as u16 + 2);
	}

	#[test]
	fn selection_past_visible_rows_scrolls() {
		let mut panel = panel(12);
		assert_eq!(scroll_offset(&panel, MAX_VISIBLE_SUGGESTIONS), 0);
		for _ in 0..10 {
			panel.select_next();
		}
		assert_eq!(panel.selected(), Some(9));
		assert_eq!(scroll_offset(&panel, MAX_VISIBLE_SUGGESTIONS), 2);
		assert_eq!(scroll_offset(&panel, 3), 7);
	}

	#[test]
	fn clipped_panel_still_draws_the_selected_entry() {
		let mut panel = panel(8);
		for _ in 0..6 {
			panel.select_next();
		}
		let bounds = Rect::new(0, 0, 40, 8);
		let area = panel_area(Rect::new(0, 0, 40, 3), panel.len(), bounds);
		assert_eq!(area.height, 6);

		let mut terminal = Terminal::new(TestBackend::new(40, 8)).expect("terminal");
		let mut hits = Vec::new();
		terminal
			.draw(|frame| hits = render_suggestions(frame, area, &panel, &Theme::default()))
			.expect("draw");
		assert_eq!(hits.last().map(|(index, _)| *index), Some(5));

		let buffer = terminal.backend().buffer();
		let marked = (0..buffer.area.height)
			.filter(|&y| buffer[(1, y)].symbol() == "›")
			.count();
		assert_eq!(marked, 1);
	}
}
