//! Result list for the Results view.

use docseek_core::{ResultCard, ResultsView, escape};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::style::Theme;

/// Lines per card: title, path, snippet, score and a spacer.
pub const CARD_HEIGHT: u16 = 5;

/// Cards that fit into a list of `height` rows.
#[must_use]
pub fn visible_cards(height: u16) -> usize {
	usize::from(height / CARD_HEIGHT).max(1)
}

/// Smallest change to `offset` that keeps `selected` on screen.
#[must_use]
pub fn follow_selection(offset: usize, selected: Option<usize>, visible: usize) -> usize {
	let Some(selected) = selected else {
		return 0;
	};
	if selected < offset {
		selected
	} else if selected >= offset + visible {
		selected + 1 - visible
	} else {
		offset
	}
}

/// Inputs required to render the list.
pub struct ResultsContext<'a> {
	pub view: &'a ResultsView,
	/// Index of the first card on screen.
	pub offset: usize,
	pub theme: &'a Theme,
}

/// Draw the count line and the cards; returns each visible title's hit box
/// paired with the card index.
pub fn render_results(frame: &mut Frame, area: Rect, ctx: ResultsContext<'_>) -> Vec<(usize, Rect)> {
	if area.height == 0 {
		return Vec::new();
	}
	let theme = ctx.theme;

	let count = Rect { height: 1, ..area };
	frame.render_widget(
		Paragraph::new(Span::styled(ctx.view.count_text(), theme.muted)),
		count,
	);

	let list = Rect {
		y: area.y + 1,
		height: area.height - 1,
		..area
	};
	let visible = visible_cards(list.height);
	let metrics = ScrollMetrics::compute(ctx.view.len(), visible);
	let list = render_scrollbar(frame, list, metrics, ctx.offset, theme);

	let mut hits = Vec::new();
	let mut y = list.y;
	for (index, card) in ctx.view.cards().iter().enumerate().skip(ctx.offset) {
		if y + 4 > list.y + list.height {
			break;
		}
		let selected = ctx.view.selected() == Some(index);
		let card_area = Rect::new(list.x, y, list.width, 4);
		hits.push((index, Rect { height: 1, ..card_area }));
		frame.render_widget(Paragraph::new(card_lines(card, selected, theme)), card_area);
		y += CARD_HEIGHT;
	}
	hits
}

fn card_lines<'a>(card: &ResultCard, selected: bool, theme: &Theme) -> Vec<Line<'a>> {
	let (marker, title_style) = if selected {
		("▌ ", theme.selected.patch(theme.link))
	} else {
		("  ", theme.link)
	};
	vec![
		Line::from(vec![
			Span::styled(marker, theme.link),
			Span::styled(escape::terminal(&card.title, false), title_style),
		]),
		Line::from(vec![
			Span::raw("  "),
			Span::styled(escape::terminal(&card.path, false), theme.path),
		]),
		Line::from(vec![
			Span::raw("  "),
			Span::styled(card.snippet.clone(), theme.muted),
		]),
		Line::from(vec![
			Span::raw("  "),
			Span::styled(card.score.clone(), theme.muted),
		]),
	]
}
