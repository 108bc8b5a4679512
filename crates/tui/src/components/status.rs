//! Single-line status region.

use docseek_core::Status;
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use throbber_widgets_tui::{Throbber, ThrobberState};

use crate::style::Theme;

/// Draw `status` centred in `area`, with a spinner while it is loading.
pub fn render_status(
	frame: &mut Frame,
	area: Rect,
	status: &Status,
	throbber_state: &ThrobberState,
	theme: &Theme,
) {
	let text = status.text();
	if area.width == 0 || area.height == 0 || text.is_empty() {
		return;
	}

	let style = if status.is_error() {
		theme.error
	} else {
		theme.status
	};
	let mut line = Line::default();
	if status.is_loading() {
		let spinner = Throbber::default().style(style).throbber_style(style);
		line.spans.push(spinner.to_symbol_span(throbber_state));
	}
	line.spans.push(Span::styled(text, style));

	frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
