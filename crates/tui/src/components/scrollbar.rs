//! Scrollbar and hit-testing helpers shared by the scrollable regions.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::style::Theme;

/// Precomputed scrolling metrics for a scrollable viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollMetrics {
	/// Total number of lines (or cards) in the content.
	pub content_length: usize,
	/// Number of them visible at once.
	pub viewport_len: usize,
	pub max_scroll: usize,
	pub needs_scrollbar: bool,
}

impl ScrollMetrics {
	/// Returns default (empty) metrics if either value is zero.
	#[must_use]
	pub fn compute(content_length: usize, viewport_height: usize) -> Self {
		if content_length == 0 || viewport_height == 0 {
			return Self::default();
		}

		let viewport_len = viewport_height.min(content_length).max(1);
		Self {
			content_length,
			viewport_len,
			max_scroll: content_length.saturating_sub(viewport_len),
			needs_scrollbar: content_length > viewport_len,
		}
	}
}

/// Check if a point (column, row) is inside a rectangle.
#[must_use]
pub fn point_in_rect(column: u16, row: u16, area: Rect) -> bool {
	if area.width == 0 || area.height == 0 {
		return false;
	}
	let inside_x = column >= area.x && column < area.x.saturating_add(area.width);
	let inside_y = row >= area.y && row < area.y.saturating_add(area.height);
	inside_x && inside_y
}

/// Render a vertical scrollbar on the right edge of `area` when the content
/// overflows. Returns the area left for the content itself.
pub fn render_scrollbar(
	frame: &mut Frame,
	area: Rect,
	metrics: ScrollMetrics,
	position: usize,
	theme: &Theme,
) -> Rect {
	if !metrics.needs_scrollbar || area.width < 2 {
		return area;
	}

	let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
		.begin_symbol(None)
		.end_symbol(None)
		.track_symbol(Some("│"))
		.style(theme.border);
	let mut state = ScrollbarState::new(metrics.max_scroll.saturating_add(1))
		.viewport_content_length(metrics.viewport_len)
		.position(position.min(metrics.max_scroll));

	let bar = Rect {
		x: area.x + area.width - 1,
		y: area.y,
		width: 1,
		height: area.height,
	};
	frame.render_stateful_widget(scrollbar, bar, &mut state);

	Rect {
		width: area.width - 1,
		..area
	}
}
