//! Core state container for the terminal front-end.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use docseek_api::SearchBackend;
use docseek_core::Controller;
use throbber_widgets_tui::ThrobberState;

use super::{Animator, FetchRuntime, HitMap};
use crate::config::{TuiOptions, UiLabels};
use crate::input::QueryInput;
use crate::style::Theme;

impl Drop for App<'_> {
	fn drop(&mut self) {
		self.fetch.shutdown();
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub(crate) controller: Controller,
	/// Text input widget for the query.
	pub search_input: QueryInput<'a>,
	pub(crate) labels: UiLabels,
	pub(crate) theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) fetch: FetchRuntime,
	pub(crate) animator: Animator,
	pub(crate) hits: HitMap,
	/// First result card on screen.
	pub(crate) results_offset: usize,
	/// Rows of document text visible in the last frame.
	pub(crate) document_viewport: usize,
	/// "Last updated" date shown in the Terms modal.
	pub(crate) terms_date: String,
	/// Clock reading of the last pump; drawing uses it for animation.
	pub(crate) now: Instant,
}

impl App<'_> {
	/// Build the UI state, start the fetch worker and queue the start-up
	/// requests (status check, plus a search for a non-blank initial query).
	pub fn new(backend: Arc<dyn SearchBackend>, options: TuiOptions) -> Result<Self> {
		let fetch = FetchRuntime::spawn(backend).context("failed to start fetch worker")?;
		let mut controller = Controller::new(options.controller_options());
		controller.start();

		let now = Instant::now();
		let mut search_input = QueryInput::new(options.initial_query.as_str());
		search_input.set_styles(
			options.theme.prompt,
			options.theme.placeholder,
			&options.labels.placeholder,
		);
		if !options.initial_query.trim().is_empty() {
			controller.set_input(options.initial_query.as_str(), now);
			controller.commit();
		}

		let mut app = Self {
			controller,
			search_input,
			labels: options.labels,
			theme: options.theme,
			throbber_state: ThrobberState::default(),
			fetch,
			animator: Animator::default(),
			hits: HitMap::default(),
			results_offset: 0,
			document_viewport: 0,
			terms_date: chrono::Local::now().format("%B %-d, %Y").to_string(),
			now,
		};
		app.flush_requests();
		Ok(app)
	}

	/// Apply a new theme to every widget.
	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
		self.search_input
			.set_styles(theme.prompt, theme.placeholder, &self.labels.placeholder);
	}

	#[must_use]
	pub fn controller(&self) -> &Controller {
		&self.controller
	}

	/// Advance everything that depends on time or on the worker: apply
	/// arrived responses, fire the debounce, finish overlay transitions and
	/// send whatever the controller queued.
	pub fn pump(&mut self, now: Instant) {
		self.now = now;
		for response in self.fetch.drain() {
			self.controller.handle_response(response);
		}
		self.controller.tick(now);

		self.animator.sync(self.controller.overlays(), now);
		for kind in self.animator.finished(now) {
			self.controller.overlay_transition_ended(kind);
		}
		self.animator.sync(self.controller.overlays(), now);

		self.sync_input();
		self.flush_requests();
	}

	/// Mirror controller-side edits (suggestion commit, clear) into the
	/// editor.
	pub(crate) fn sync_input(&mut self) {
		if self.search_input.text() != self.controller.input() {
			let text = self.controller.input().to_string();
			self.search_input.set_text(&text);
		}
	}

	pub(crate) fn flush_requests(&mut self) {
		self.fetch.dispatch(self.controller.drain_requests());
	}
}
