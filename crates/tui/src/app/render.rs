use docseek_core::{OverlayKind, ViewState, escape};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use super::App;
use crate::components::{
	InputContext, ResultsContext, animated_area, dim_background, follow_selection, panel_area,
	render_about, render_alert, render_document, render_footer, render_help, render_input,
	render_results, render_status, render_suggestions, render_terms, render_title, visible_cards,
};

const BACK_LABEL: &str = "← Back";
const INPUT_WIDTH: u16 = 72;

impl App<'_> {
	/// Draw one frame and record where everything clickable ended up.
	pub fn draw(&mut self, frame: &mut Frame) {
		self.hits.reset();
		let bounds = frame.area();
		let area = bounds.inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		match self.controller.view() {
			ViewState::Search => self.draw_search(frame, area),
			ViewState::Results => self.draw_results(frame, area),
		}

		self.draw_overlays(frame, bounds);

		if let Some(message) = self.controller.alert() {
			self.hits.alert = Some(render_alert(frame, bounds, message, &self.theme));
		}
	}

	fn draw_search(&mut self, frame: &mut Frame, area: Rect) {
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(2),
				Constraint::Length(1),
				Constraint::Length(3),
				Constraint::Length(1),
				Constraint::Min(0),
				Constraint::Length(1),
			])
			.split(area);

		render_title(frame, layout[1], &self.labels, &self.theme);

		let input_area = centre_column(layout[3], INPUT_WIDTH);
		let input = render_input(
			frame,
			InputContext {
				input: &self.search_input,
				area: input_area,
				theme: &self.theme,
			},
		);
		self.hits.input = Some(input.frame);
		self.hits.clear = input.clear;

		render_status(
			frame,
			layout[4],
			self.controller.status(),
			&self.throbber_state,
			&self.theme,
		);
		self.hits.footer = render_footer(frame, layout[6], &self.theme);

		// The panel floats over the status line and body.
		let panel = self.controller.suggestions();
		if panel.is_visible() {
			let panel_bounds = Rect {
				height: layout[6].y.saturating_sub(area.y),
				..area
			};
			let panel_rect = panel_area(input.frame, panel.len(), panel_bounds);
			self.hits.suggestions = render_suggestions(frame, panel_rect, panel, &self.theme);
			self.hits.panel = Some(panel_rect);
		}
	}

	fn draw_results(&mut self, frame: &mut Frame, area: Rect) {
		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(0),
				Constraint::Length(1),
				Constraint::Length(1),
			])
			.split(area);

		let header = layout[0];
		let back_width = u16::try_from(BACK_LABEL.width()).unwrap_or(u16::MAX);
		self.hits.back = Some(Rect {
			width: back_width.min(header.width),
			..header
		});
		let query = self.controller.committed_query().unwrap_or_default();
		let heading = Line::from(vec![
			Span::styled(BACK_LABEL, self.theme.link),
			Span::raw("   "),
			Span::styled(
				format!("Results for \"{}\"", escape::terminal(query, false)),
				self.theme.title,
			),
		]);
		frame.render_widget(Paragraph::new(heading), header);

		let list = layout[2];
		if let Some(view) = self.controller.results() {
			let visible = visible_cards(list.height.saturating_sub(1));
			self.results_offset = follow_selection(self.results_offset, view.selected(), visible);
			self.hits.results = render_results(
				frame,
				list,
				ResultsContext {
					view,
					offset: self.results_offset,
					theme: &self.theme,
				},
			);
			self.hits.results_list = Some(list);
		}

		render_status(
			frame,
			layout[3],
			self.controller.status(),
			&self.throbber_state,
			&self.theme,
		);
		self.hits.footer = render_footer(frame, layout[4], &self.theme);
	}

	fn draw_overlays(&mut self, frame: &mut Frame, bounds: Rect) {
		let visible: Vec<OverlayKind> = self.controller.overlays().visible().collect();
		if visible.is_empty() {
			return;
		}
		dim_background(frame, bounds, &self.theme);

		for kind in visible {
			let phase = self.controller.overlays().phase(kind);
			let progress = self.animator.progress(kind, phase, self.now);
			let area = animated_area(kind, bounds, progress);
			let areas = match kind {
				OverlayKind::About => render_about(frame, area, &self.labels, &self.theme),
				OverlayKind::Terms => {
					render_terms(frame, area, &self.labels, &self.terms_date, &self.theme)
				}
				OverlayKind::Help => {
					let (areas, faq) = render_help(frame, area, self.controller.faq(), &self.theme);
					self.hits.faq = faq;
					areas
				}
				OverlayKind::Document => {
					let Some(document) = self.controller.document() else {
						continue;
					};
					let (areas, viewport) = render_document(frame, area, document, &self.theme);
					self.document_viewport = viewport;
					areas
				}
			};
			self.hits.overlays.push((kind, areas));
		}
	}
}

/// `area` narrowed to at most `width` columns, horizontally centred.
fn centre_column(area: Rect, width: u16) -> Rect {
	let width = width.min(area.width);
	Rect {
		x: area.x + (area.width - width) / 2,
		width,
		..area
	}
}
