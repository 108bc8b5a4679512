//! Modal overlays: About, Help, Terms and the document viewer.
//!
//! Each renderer receives the panel rectangle for the current animation
//! frame and returns the hit boxes the event handlers need.

use docseek_core::{DocumentViewer, HelpFaq, OverlayKind, escape};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use super::scrollbar::{ScrollMetrics, render_scrollbar};
use crate::config::UiLabels;
use crate::style::Theme;

const CLOSE_GLYPH: &str = " ✕ ";
const TAB_WIDTH: usize = 4;

/// Hit boxes shared by every overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayAreas {
	/// The whole panel; clicks outside it land on the backdrop.
	pub panel: Rect,
	pub close: Rect,
}

/// A `width` x `height` rectangle centred in `bounds`, clipped to it.
#[must_use]
pub fn centered(bounds: Rect, width: u16, height: u16) -> Rect {
	let width = width.min(bounds.width);
	let height = height.min(bounds.height);
	Rect {
		x: bounds.x + (bounds.width - width) / 2,
		y: bounds.y + (bounds.height - height) / 2,
		width,
		height,
	}
}

/// Fully open panel size for `kind`.
#[must_use]
pub fn full_area(kind: OverlayKind, bounds: Rect) -> Rect {
	match kind {
		OverlayKind::Document => centered(
			bounds,
			bounds.width.saturating_sub(4),
			bounds.height.saturating_sub(2),
		),
		OverlayKind::About | OverlayKind::Help | OverlayKind::Terms => {
			centered(bounds, 72, bounds.height.saturating_sub(4).min(22))
		}
	}
}

/// Panel for one animation frame: the full panel scaled vertically by
/// `progress` (0.0 closed, 1.0 open) around its centre.
#[must_use]
pub fn animated_area(kind: OverlayKind, bounds: Rect, progress: f32) -> Rect {
	let full = full_area(kind, bounds);
	let scaled = (f32::from(full.height) * progress.clamp(0.0, 1.0)).round() as u16;
	let height = scaled.clamp(full.height.min(3), full.height);
	centered(full, full.width, height)
}

/// Dim whatever is already drawn in `area`.
pub fn dim_background(frame: &mut Frame, area: Rect, theme: &Theme) {
	frame
		.buffer_mut()
		.set_style(area, theme.backdrop.add_modifier(Modifier::DIM));
}

fn panel_block<'a>(title: String, theme: &Theme) -> Block<'a> {
	Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border)
		.title(Span::styled(format!(" {title} "), theme.title))
		.title(Line::from(Span::styled(CLOSE_GLYPH, theme.muted)).right_aligned())
}

fn open_panel(frame: &mut Frame, area: Rect, title: String, theme: &Theme) -> (Rect, OverlayAreas) {
	frame.render_widget(Clear, area);
	let block = panel_block(title, theme);
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let close_width = CLOSE_GLYPH.width() as u16;
	let close = Rect {
		x: area.right().saturating_sub(close_width + 1),
		y: area.y,
		width: close_width,
		height: 1,
	}
	.intersection(area);
	(inner, OverlayAreas { panel: area, close })
}

fn paragraph_lines<'a>(paragraphs: &'a [String], theme: &Theme) -> Vec<Line<'a>> {
	let mut lines = Vec::new();
	for (index, text) in paragraphs.iter().enumerate() {
		if index > 0 {
			lines.push(Line::default());
		}
		lines.push(Line::from(Span::styled(text.as_str(), theme.prompt)));
	}
	lines
}

pub fn render_about(frame: &mut Frame, area: Rect, labels: &UiLabels, theme: &Theme) -> OverlayAreas {
	let (inner, areas) = open_panel(frame, area, format!("About {}", labels.brand), theme);
	frame.render_widget(
		Paragraph::new(paragraph_lines(&labels.about, theme)).wrap(Wrap { trim: true }),
		inner,
	);
	areas
}

/// `updated` is the already formatted "last updated" date.
pub fn render_terms(
	frame: &mut Frame,
	area: Rect,
	labels: &UiLabels,
	updated: &str,
	theme: &Theme,
) -> OverlayAreas {
	let (inner, areas) = open_panel(frame, area, OverlayKind::Terms.title().to_string(), theme);
	let mut lines = vec![
		Line::from(Span::styled(format!("Last updated: {updated}"), theme.muted)),
		Line::default(),
	];
	lines.extend(paragraph_lines(&labels.terms, theme));
	frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
	areas
}

/// Draw the FAQ accordion. Returns the panel areas plus one hit box per
/// visible question, paired with the entry index.
pub fn render_help(
	frame: &mut Frame,
	area: Rect,
	faq: &HelpFaq,
	theme: &Theme,
) -> (OverlayAreas, Vec<(usize, Rect)>) {
	let (inner, areas) = open_panel(frame, area, OverlayKind::Help.title().to_string(), theme);
	let mut hits = Vec::new();
	let mut lines: Vec<Line<'_>> = Vec::new();
	let answer_width = usize::from(inner.width.saturating_sub(4)).max(1);

	for (index, entry) in faq.entries().iter().enumerate() {
		let row = u16::try_from(lines.len()).unwrap_or(u16::MAX);
		if row >= inner.height {
			break;
		}
		let expanded = faq.is_expanded(index);
		let marker = if expanded { "▾ " } else { "▸ " };
		let style = if faq.focused() == index {
			theme.selected
		} else {
			theme.prompt
		};
		lines.push(Line::from(vec![
			Span::styled(marker, theme.muted),
			Span::styled(entry.question, style),
		]));
		hits.push((index, Rect::new(inner.x, inner.y + row, inner.width, 1)));

		if expanded {
			for chunk in wrap_words(entry.answer, answer_width) {
				lines.push(Line::from(vec![
					Span::raw("    "),
					Span::styled(chunk, theme.muted),
				]));
			}
		}
	}

	frame.render_widget(Paragraph::new(lines), inner);
	(areas, hits)
}

/// Draw the document viewer. Returns the panel areas and the number of
/// content rows visible, which bounds scrolling.
pub fn render_document(
	frame: &mut Frame,
	area: Rect,
	document: &DocumentViewer,
	theme: &Theme,
) -> (OverlayAreas, usize) {
	let title = escape::terminal(document.title(), false);
	let (inner, areas) = open_panel(frame, area, title, theme);
	if inner.height == 0 {
		return (areas, 0);
	}

	let path = Rect { height: 1, ..inner };
	frame.render_widget(
		Paragraph::new(Span::styled(escape::terminal(document.path(), false), theme.path)),
		path,
	);

	let body = Rect {
		y: inner.y + 1,
		height: inner.height - 1,
		..inner
	};
	let viewport = usize::from(body.height);
	let metrics = ScrollMetrics::compute(document.line_count(), viewport);
	let body = render_scrollbar(frame, body, metrics, document.scroll, theme);

	let lines: Vec<Line<'_>> = document
		.content()
		.lines()
		.skip(document.scroll)
		.take(viewport)
		.map(|line| Line::from(Span::styled(expand_tabs(line), theme.prompt)))
		.collect();
	frame.render_widget(Paragraph::new(lines), body);
	(areas, viewport)
}

fn expand_tabs(line: &str) -> String {
	if !line.contains('\t') {
		return line.to_string();
	}
	let mut out = String::with_capacity(line.len() + TAB_WIDTH);
	let mut column = 0;
	for ch in line.chars() {
		if ch == '\t' {
			let pad = TAB_WIDTH - column % TAB_WIDTH;
			out.extend(std::iter::repeat_n(' ', pad));
			column += pad;
		} else {
			out.push(ch);
			column += 1;
		}
	}
	out
}

/// Greedy word wrap on display width. Words wider than `width` get a line
/// of their own.
fn wrap_words(text: &str, width: usize) -> Vec<String> {
	let mut lines = Vec::new();
	let mut current = String::new();
	for word in text.split_whitespace() {
		if !current.is_empty() && current.width() + 1 + word.width() > width {
			lines.push(std::mem::take(&mut current));
		}
		if !current.is_empty() {
			current.push(' ');
		}
		current.push_str(word);
	}
	if !current.is_empty() {
		lines.push(current);
	}
	lines
}
