//! The interaction controller.
//!
//! One [`Controller`] exists per session. Front-ends feed it user events and
//! clock ticks, forward the [`Request`]s it queues to a worker, and hand the
//! resulting [`Response`]s back. All state transitions happen inside these
//! calls; nothing here blocks or performs I/O.

use std::time::{Duration, Instant};

use docseek_api::ResultItem;
use tracing::{debug, error, warn};

use crate::debounce::{DEFAULT_DEBOUNCE, Debouncer};
use crate::document::DocumentViewer;
use crate::faq::HelpFaq;
use crate::overlay::{OverlayKind, OverlayPhase, Overlays};
use crate::request::{Request, Response};
use crate::results::ResultsView;
use crate::status::Status;
use crate::suggestions::SuggestionPanel;
use crate::tokens::{RequestKind, RequestTokens};


/// Message shown when a document cannot be loaded.
pub const DOCUMENT_ERROR: &str = "Error loading document content";

/// Top-level view; exactly one is visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewState {
	#[default]
	Search,
	Results,
}

/// What a press of Escape ended up closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeOutcome {
	DismissedAlert,
	ClosedOverlay(OverlayKind),
	DismissedSuggestions,
	/// Nothing was open; the front-end decides what Escape means.
	Nothing,
}

/// Tunables for a controller session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
	/// Quiet period before a suggestion lookup is sent.
	pub debounce: Duration,
}

impl Default for ControllerOptions {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
		}
	}
}

/// Session state for the search front-end.
#[derive(Debug)]
pub struct Controller {
	/// Live input text, untrimmed, exactly as typed.
	input: String,
	/// Query of the most recently executed search.
	committed: Option<String>,
	debouncer: Debouncer,
	suggestions: SuggestionPanel,
	view: ViewState,
	results: Option<ResultsView>,
	status: Status,
	overlays: Overlays,
	document: Option<DocumentViewer>,
	faq: HelpFaq,
	alert: Option<String>,
	tokens: RequestTokens,
	outbox: Vec<Request>,
}

impl Default for Controller {
	fn default() -> Self {
		Self::new(ControllerOptions::default())
	}
}

impl Controller {
	#[must_use]
	pub fn new(options: ControllerOptions) -> Self {
		Self {
			input: String::new(),
			committed: None,
			debouncer: Debouncer::new(options.debounce),
			suggestions: SuggestionPanel::new(),
			view: ViewState::Search,
			results: None,
			status: Status::Idle,
			overlays: Overlays::default(),
			document: None,
			faq: HelpFaq::default(),
			alert: None,
			tokens: RequestTokens::default(),
			outbox: Vec::new(),
		}
	}

	/// Queue the one-off status check made when a session begins.
	pub fn start(&mut self) {
		let token = self.tokens.issue(RequestKind::Status);
		self.outbox.push(Request::Status { token });
	}

	/// Take every request queued since the last call.
	pub fn drain_requests(&mut self) -> Vec<Request> {
		std::mem::take(&mut self.outbox)
	}

	/// Advance timers. Fires the debounced suggestion lookup when due.
	pub fn tick(&mut self, now: Instant) {
		if let Some(query) = self.debouncer.poll(now) {
			debug!(%query, "debounce elapsed");
			self.request_suggestions(&query);
		}
	}

	// Input and suggestions.

	#[must_use]
	pub fn input(&self) -> &str {
		&self.input
	}

	/// The input text changed (one keystroke, paste, or programmatic set).
	pub fn set_input(&mut self, text: impl Into<String>, now: Instant) {
		self.input = text.into();
		let query = self.input.trim();
		if query.is_empty() {
			self.dismiss_suggestions();
		} else {
			let query = query.to_string();
			self.debouncer.schedule(query, now);
		}
	}

	/// Empty the input and hide the panel.
	pub fn clear_input(&mut self) {
		self.input.clear();
		self.dismiss_suggestions();
	}

	fn request_suggestions(&mut self, query: &str) {
		if query.is_empty() {
			self.dismiss_suggestions();
			return;
		}
		let token = self.tokens.issue(RequestKind::Suggestions);
		self.outbox.push(Request::Suggestions {
			token,
			query: query.to_string(),
		});
	}

	#[must_use]
	pub fn suggestions(&self) -> &SuggestionPanel {
		&self.suggestions
	}

	pub fn select_next_suggestion(&mut self) {
		self.suggestions.select_next();
	}

	pub fn select_previous_suggestion(&mut self) {
		self.suggestions.select_previous();
	}

	pub fn hover_suggestion(&mut self, index: usize) {
		self.suggestions.hover(index);
	}

	/// Hide the panel and make sure nothing pending can bring it back.
	pub fn dismiss_suggestions(&mut self) {
		self.debouncer.cancel();
		self.tokens.invalidate(RequestKind::Suggestions);
		self.suggestions.dismiss();
	}

	/// Pointer pressed somewhere other than the input or the panel.
	pub fn click_outside(&mut self) {
		self.dismiss_suggestions();
	}

	/// Enter: search for the highlighted suggestion if there is one,
	/// otherwise for the live input.
	pub fn commit(&mut self) -> bool {
		match self.suggestions.selected_text().map(str::to_string) {
			Some(text) => {
				self.input = text;
				self.dismiss_suggestions();
				let query = self.input.clone();
				self.execute_search(&query)
			}
			None => {
				let query = self.input.clone();
				self.execute_search(&query)
			}
		}
	}

	/// Pointer click on suggestion `index`.
	pub fn click_suggestion(&mut self, index: usize) -> bool {
		if index >= self.suggestions.len() {
			return false;
		}
		self.suggestions.hover(index);
		self.commit()
	}

	// Search and results.

	/// Issue a search for `query`. Blank queries do nothing at all.
	pub fn execute_search(&mut self, query: &str) -> bool {
		let query = query.trim();
		if query.is_empty() {
			return false;
		}
		self.committed = Some(query.to_string());
		self.status = Status::Searching;
		self.dismiss_suggestions();
		let token = self.tokens.issue(RequestKind::Search);
		self.outbox.push(Request::Search {
			token,
			query: query.to_string(),
		});
		true
	}

	/// Show `results` for `query` in the Results view.
	pub fn render(&mut self, results: &[ResultItem], query: &str) {
		self.view = ViewState::Results;
		let view = ResultsView::new(results, query);
		self.status = if view.is_empty() {
			Status::NoResults(query.to_string())
		} else {
			Status::Cleared
		};
		self.results = Some(view);
	}

	/// Back to the Search view; input and last results are kept.
	pub fn back(&mut self) {
		self.view = ViewState::Search;
	}

	/// Bring the search input into focus.
	pub fn focus_search(&mut self) {
		self.back();
	}

	#[must_use]
	pub fn committed_query(&self) -> Option<&str> {
		self.committed.as_deref()
	}

	#[must_use]
	pub fn view(&self) -> ViewState {
		self.view
	}

	#[must_use]
	pub fn results(&self) -> Option<&ResultsView> {
		self.results.as_ref()
	}

	pub fn results_mut(&mut self) -> Option<&mut ResultsView> {
		self.results.as_mut()
	}

	#[must_use]
	pub fn status(&self) -> &Status {
		&self.status
	}

	// Document viewer.

	/// Request the content of `path` for the viewer overlay.
	pub fn open_document(&mut self, path: &str) {
		let token = self.tokens.issue(RequestKind::Document);
		self.outbox.push(Request::Document {
			token,
			path: path.to_string(),
		});
	}

	/// Open the highlighted result, if the Results view has one.
	pub fn open_selected_result(&mut self) -> bool {
		if self.view != ViewState::Results {
			return false;
		}
		let Some(path) = self
			.results
			.as_ref()
			.and_then(ResultsView::selected_card)
			.map(|card| card.document_path.clone())
		else {
			return false;
		};
		self.open_document(&path);
		true
	}

	/// Close control, backdrop click and Escape all end up here.
	pub fn close_document(&mut self) {
		self.overlays.hide(OverlayKind::Document);
	}

	#[must_use]
	pub fn document(&self) -> Option<&DocumentViewer> {
		self.document.as_ref()
	}

	pub fn document_mut(&mut self) -> Option<&mut DocumentViewer> {
		self.document.as_mut()
	}

	// Informational modals.

	pub fn show_modal(&mut self, kind: OverlayKind) {
		if kind == OverlayKind::Document {
			return;
		}
		self.overlays.show(kind);
	}

	pub fn hide_overlay(&mut self, kind: OverlayKind) {
		self.overlays.hide(kind);
	}

	/// The front-end finished animating `kind` into its current phase.
	pub fn overlay_transition_ended(&mut self, kind: OverlayKind) {
		self.overlays.transition_ended(kind);
		if kind == OverlayKind::Document && self.overlays.phase(kind) == OverlayPhase::Closed {
			self.document = None;
		}
	}

	#[must_use]
	pub fn overlays(&self) -> &Overlays {
		&self.overlays
	}

	/// Background scrolling is suppressed while an overlay is on screen.
	#[must_use]
	pub fn scroll_locked(&self) -> bool {
		self.overlays.any_visible()
	}

	#[must_use]
	pub fn faq(&self) -> &HelpFaq {
		&self.faq
	}

	pub fn faq_mut(&mut self) -> &mut HelpFaq {
		&mut self.faq
	}

	// Alert and escape routing.

	#[must_use]
	pub fn alert(&self) -> Option<&str> {
		self.alert.as_deref()
	}

	pub fn dismiss_alert(&mut self) {
		self.alert = None;
	}

	/// Close the single topmost thing that Escape applies to.
	pub fn escape(&mut self) -> EscapeOutcome {
		if self.alert.take().is_some() {
			return EscapeOutcome::DismissedAlert;
		}
		if let Some(kind) = self.overlays.topmost_active() {
			self.overlays.hide(kind);
			return EscapeOutcome::ClosedOverlay(kind);
		}
		if self.suggestions.is_visible() {
			self.dismiss_suggestions();
			return EscapeOutcome::DismissedSuggestions;
		}
		EscapeOutcome::Nothing
	}

	// Responses.

	/// Apply a worker response if it answers the newest request of its kind.
	pub fn handle_response(&mut self, response: Response) {
		let token = response.token();
		if !self.tokens.is_latest(token) {
			debug!(?token, "discarding superseded response");
			return;
		}

		match response {
			Response::Status { result, .. } => self.apply_status(result.map(|r| r.document_count)),
			Response::Suggestions { query, result, .. } => match result {
				Ok(items) => self.suggestions.replace(query, items),
				Err(err) => {
					warn!(%query, error = %err, "suggestion lookup failed");
					self.suggestions.dismiss();
				}
			},
			Response::Search { query, result, .. } => match result {
				Ok(items) => self.render(&items, &query),
				Err(err) => {
					error!(%query, error = %err, "search failed");
					self.status = Status::SearchFailed;
				}
			},
			Response::Document { path, result, .. } => match result {
				Ok(content) => self.show_document(&path, &content),
				Err(err) => {
					error!(%path, error = %err, "document load failed");
					self.alert = Some(DOCUMENT_ERROR.to_string());
				}
			},
		}
	}

	fn apply_status(&mut self, result: Result<u64, docseek_api::ApiError>) {
		// A search issued before the check returned owns the status line.
		if self.committed.is_some() {
			return;
		}
		self.status = match result {
			Ok(count) => Status::from_document_count(count),
			Err(err) => {
				warn!(error = %err, "status check failed");
				Status::Unavailable
			}
		};
	}

	fn show_document(&mut self, path: &str, content: &str) {
		self.document = Some(DocumentViewer::new(path, content));
		self.overlays.show(OverlayKind::Document);
	}
}
