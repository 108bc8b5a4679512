//! Blocking message box that must be acknowledged.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::overlay::centered;
use crate::style::Theme;

const ACKNOWLEDGE: &str = "Press Enter or Esc";

pub fn render_alert(frame: &mut Frame, bounds: Rect, message: &str, theme: &Theme) -> Rect {
	let width = (message.chars().count() as u16 + 6).clamp(ACKNOWLEDGE.len() as u16 + 6, 60);
	let area = centered(bounds, width, 6);
	frame.render_widget(Clear, area);

	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.error)
		.title(Span::styled(" Alert ", theme.error));
	let lines = vec![
		Line::from(Span::styled(message, theme.error)),
		Line::default(),
		Line::from(Span::styled(ACKNOWLEDGE, theme.muted)),
	];
	frame.render_widget(
		Paragraph::new(lines)
			.block(block)
			.alignment(Alignment::Center)
			.wrap(Wrap { trim: true }),
		area,
	);
	area
}
