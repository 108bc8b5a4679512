use std::time::Instant;

use docseek_core::{EscapeOutcome, OverlayKind, ViewState};
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use super::hits::{contains, find};
use crate::components::{point_in_rect, visible_cards};

const WHEEL_LINES: usize = 3;

/// What the event loop should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
	Continue,
	Quit,
}

impl App<'_> {
	/// Process a key press.
	pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> Flow {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		if ctrl && key.code == KeyCode::Char('c') {
			return Flow::Quit;
		}

		if self.controller.alert().is_some() {
			if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
				self.controller.dismiss_alert();
			}
			return Flow::Continue;
		}

		match key.code {
			KeyCode::Esc => {
				// A modal still closing swallows the key.
				if self.controller.escape() == EscapeOutcome::Nothing
					&& !self.controller.overlays().any_visible()
				{
					if self.controller.view() == ViewState::Search {
						return Flow::Quit;
					}
					self.controller.back();
				}
			}
			KeyCode::F(1) => self.controller.show_modal(OverlayKind::Help),
			KeyCode::F(2) => self.controller.show_modal(OverlayKind::About),
			KeyCode::F(3) => self.controller.show_modal(OverlayKind::Terms),
			_ => match self.controller.overlays().topmost_active() {
				Some(kind) => self.handle_overlay_key(kind, key),
				None => match self.controller.view() {
					ViewState::Search => self.handle_search_key(key, now),
					ViewState::Results => self.handle_results_key(key, now),
				},
			},
		}

		self.sync_input();
		self.flush_requests();
		Flow::Continue
	}

	/// Bracketed paste into the search box.
	pub fn handle_paste(&mut self, text: &str, now: Instant) {
		if self.controller.alert().is_some() || self.controller.overlays().topmost_active().is_some()
		{
			return;
		}
		self.controller.focus_search();
		if self.search_input.paste(text) {
			self.controller
				.set_input(self.search_input.text().to_string(), now);
		}
	}

	fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('k') if ctrl => self.controller.focus_search(),
			KeyCode::Char('l') if ctrl => self.controller.clear_input(),
			KeyCode::Up => self.controller.select_previous_suggestion(),
			KeyCode::Down => self.controller.select_next_suggestion(),
			KeyCode::Enter => {
				self.controller.commit();
			}
			_ => {
				if self.search_input.input(key) {
					self.controller
						.set_input(self.search_input.text().to_string(), now);
				}
			}
		}
	}

	fn handle_results_key(&mut self, key: KeyEvent, now: Instant) {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		let page = self.results_page();
		match key.code {
			KeyCode::Char('k') if ctrl => self.controller.focus_search(),
			KeyCode::Char('l') if ctrl => {
				self.controller.focus_search();
				self.controller.clear_input();
			}
			KeyCode::Up => self.move_result_selection(-1),
			KeyCode::Down => self.move_result_selection(1),
			KeyCode::PageUp => self.move_result_selection(-page),
			KeyCode::PageDown => self.move_result_selection(page),
			KeyCode::Enter => {
				self.controller.open_selected_result();
			}
			KeyCode::Char(_) | KeyCode::Backspace if !ctrl => {
				// Typing in the results list goes back to the search box.
				self.controller.focus_search();
				self.handle_search_key(key, now);
			}
			_ => {}
		}
	}

	fn handle_overlay_key(&mut self, kind: OverlayKind, key: KeyEvent) {
		match kind {
			OverlayKind::Document => {
				let viewport = self.document_viewport.max(1);
				let Some(document) = self.controller.document_mut() else {
					return;
				};
				match key.code {
					KeyCode::Up => document.scroll_up(1),
					KeyCode::Down => document.scroll_down(1, viewport),
					KeyCode::PageUp => document.scroll_up(viewport),
					KeyCode::PageDown | KeyCode::Char(' ') => document.scroll_down(viewport, viewport),
					KeyCode::Home => document.scroll = 0,
					KeyCode::End => document.scroll_down(usize::MAX, viewport),
					_ => {}
				}
			}
			OverlayKind::Help => {
				let faq = self.controller.faq_mut();
				match key.code {
					KeyCode::Up => faq.focus_previous(),
					KeyCode::Down => faq.focus_next(),
					KeyCode::Enter | KeyCode::Char(' ') => faq.toggle_focused(),
					_ => {}
				}
			}
			OverlayKind::About | OverlayKind::Terms => {}
		}
	}

	/// Process a mouse event.
	pub fn handle_mouse(&mut self, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);

		if self.controller.alert().is_some() {
			if mouse.kind == MouseEventKind::Down(MouseButton::Left)
				&& contains(self.hits.alert, column, row)
			{
				self.controller.dismiss_alert();
			}
			return;
		}

		if let Some(kind) = self.controller.overlays().topmost_active() {
			self.handle_overlay_mouse(kind, mouse);
			return;
		}

		match mouse.kind {
			MouseEventKind::Moved => {
				if let Some(index) = find(&self.hits.suggestions, column, row) {
					self.controller.hover_suggestion(index);
				}
			}
			MouseEventKind::Down(MouseButton::Left) => self.handle_click(column, row),
			MouseEventKind::ScrollUp if !self.controller.scroll_locked() => {
				self.scroll_results(-1, column, row);
			}
			MouseEventKind::ScrollDown if !self.controller.scroll_locked() => {
				self.scroll_results(1, column, row);
			}
			_ => {}
		}

		self.sync_input();
		self.flush_requests();
	}

	fn handle_click(&mut self, column: u16, row: u16) {
		if let Some(kind) = find(&self.hits.footer, column, row) {
			self.controller.show_modal(kind);
			return;
		}

		match self.controller.view() {
			ViewState::Search => {
				if let Some(index) = find(&self.hits.suggestions, column, row) {
					self.controller.click_suggestion(index);
				} else if contains(self.hits.clear, column, row) {
					self.controller.clear_input();
				} else if contains(self.hits.panel, column, row)
					|| contains(self.hits.input, column, row)
				{
					// Clicks on the box itself or the panel frame keep the panel.
				} else {
					self.controller.click_outside();
				}
			}
			ViewState::Results => {
				if contains(self.hits.back, column, row) {
					self.controller.back();
				} else if let Some(index) = find(&self.hits.results, column, row) {
					self.open_result(index);
				}
			}
		}
	}

	fn handle_overlay_mouse(&mut self, kind: OverlayKind, mouse: MouseEvent) {
		let (column, row) = (mouse.column, mouse.row);
		let Some(areas) = self.hits.overlay(kind) else {
			return;
		};
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if point_in_rect(column, row, areas.close)
					|| !point_in_rect(column, row, areas.panel)
				{
					self.controller.hide_overlay(kind);
				} else if kind == OverlayKind::Help
					&& let Some(index) = find(&self.hits.faq, column, row)
				{
					self.controller.faq_mut().toggle(index);
				}
			}
			MouseEventKind::ScrollUp if kind == OverlayKind::Document => {
				if let Some(document) = self.controller.document_mut() {
					document.scroll_up(WHEEL_LINES);
				}
			}
			MouseEventKind::ScrollDown if kind == OverlayKind::Document => {
				let viewport = self.document_viewport.max(1);
				if let Some(document) = self.controller.document_mut() {
					document.scroll_down(WHEEL_LINES, viewport);
				}
			}
			_ => {}
		}
	}

	fn open_result(&mut self, index: usize) {
		let Some(results) = self.controller.results_mut() else {
			return;
		};
		results.select(index);
		self.controller.open_selected_result();
	}

	fn scroll_results(&mut self, delta: isize, column: u16, row: u16) {
		if self.controller.view() != ViewState::Results
			|| !contains(self.hits.results_list, column, row)
		{
			return;
		}
		self.move_result_selection(delta);
	}

	fn results_page(&self) -> isize {
		let height = self.hits.results_list.map_or(0, |area| area.height);
		visible_cards(height) as isize
	}

	fn move_result_selection(&mut self, delta: isize) {
		let Some(results) = self.controller.results_mut() else {
			return;
		};
		let Some(current) = results.selected() else {
			return;
		};
		let target = current
			.saturating_add_signed(delta)
			.min(results.len().saturating_sub(1));
		results.select(target);
	}
}
