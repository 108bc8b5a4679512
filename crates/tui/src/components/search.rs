//! Search box, title block and footer links.

use docseek_core::OverlayKind;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::config::UiLabels;
use crate::input::QueryInput;
use crate::style::Theme;

const CLEAR_GLYPH: &str = " ✕ ";

/// Footer entries, in display order.
pub const FOOTER_LINKS: [(OverlayKind, &str); 3] = [
	(OverlayKind::Help, "F1 Help"),
	(OverlayKind::About, "F2 About"),
	(OverlayKind::Terms, "F3 Terms"),
];

/// Inputs required to render the search box.
pub struct InputContext<'a, 'b> {
	pub input: &'a QueryInput<'b>,
	pub area: Rect,
	pub theme: &'a Theme,
}

/// Where the search box ended up on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputAreas {
	/// The bordered box, used to anchor the suggestion panel.
	pub frame: Rect,
	/// Clear control; only present while there is text to clear.
	pub clear: Option<Rect>,
}

pub fn render_title(frame: &mut Frame, area: Rect, labels: &UiLabels, theme: &Theme) {
	let lines = vec![
		Line::from(Span::styled(labels.brand.as_str(), theme.title)),
		Line::from(Span::styled(labels.tagline.as_str(), theme.muted)),
	];
	frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

pub fn render_input(frame: &mut Frame, ctx: InputContext<'_, '_>) -> InputAreas {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(ctx.theme.border);
	let inner = block.inner(ctx.area);
	frame.render_widget(block, ctx.area);

	let clear_width = CLEAR_GLYPH.width() as u16;
	let clear = if ctx.input.text().is_empty() || inner.width <= clear_width {
		None
	} else {
		Some(Rect {
			x: inner.x + inner.width - clear_width,
			y: inner.y,
			width: clear_width,
			height: 1,
		})
	};

	let text_area = Rect {
		width: inner.width - clear.map_or(0, |r| r.width),
		height: inner.height.min(1),
		..inner
	};
	frame.render_widget(ctx.input.widget(), text_area);

	if let Some(area) = clear {
		frame.render_widget(Span::styled(CLEAR_GLYPH, ctx.theme.muted), area);
	}

	InputAreas {
		frame: ctx.area,
		clear,
	}
}

/// Render the footer links centred in `area` and return their hit boxes.
pub fn render_footer(frame: &mut Frame, area: Rect, theme: &Theme) -> Vec<(OverlayKind, Rect)> {
	const SEPARATOR: &str = "  ·  ";
	let total: usize = FOOTER_LINKS
		.iter()
		.map(|(_, label)| label.width())
		.sum::<usize>()
		+ SEPARATOR.width() * (FOOTER_LINKS.len() - 1);
	let total = u16::try_from(total).unwrap_or(u16::MAX);

	let mut x = area.x + area.width.saturating_sub(total) / 2;
	let mut spans = Vec::new();
	let mut hits = Vec::new();
	for (index, (kind, label)) in FOOTER_LINKS.iter().enumerate() {
		if index > 0 {
			spans.push(Span::styled(SEPARATOR, theme.muted));
			x = x.saturating_add(SEPARATOR.width() as u16);
		}
		let width = label.width() as u16;
		hits.push((*kind, Rect::new(x, area.y, width, 1).intersection(area)));
		spans.push(Span::styled(*label, theme.muted));
		x = x.saturating_add(width);
	}

	frame.render_widget(
		Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
		area,
	);
	hits
}
