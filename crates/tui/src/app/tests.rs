use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use docseek_api::{ApiError, ResultItem, SearchBackend, StatusReport};
use docseek_core::{DOCUMENT_ERROR, OverlayKind, OverlayPhase, ViewState};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::{App, Flow};
use crate::config::TuiOptions;

struct FakeBackend;

impl SearchBackend for FakeBackend {
	fn status(&self) -> Result<StatusReport, ApiError> {
		Ok(StatusReport { document_count: 3 })
	}

	fn suggestions(&self, query: &str) -> Result<Vec<String>, ApiError> {
		Ok(vec![format!("{query}acean"), format!("{query}y")])
	}

	fn search(&self, query: &str) -> Result<Vec<ResultItem>, ApiError> {
		if query == "nothing" {
			return Ok(Vec::new());
		}
		Ok(vec![
			ResultItem::new("guide.txt", "docs/guide.txt", 0.5),
			ResultItem::new("notes.txt", "docs/notes.txt", 0.25),
		])
	}

	fn document(&self, path: &str) -> Result<String, ApiError> {
		if path.contains("missing") {
			return Err(ApiError::Status {
				endpoint: "/api/document",
				status: 404,
			});
		}
		Ok("line one\nline two".to_string())
	}
}

fn app() -> App<'static> {
	app_with(TuiOptions::default())
}

fn app_with(options: TuiOptions) -> App<'static> {
	App::new(Arc::new(FakeBackend), options).expect("app starts")
}

fn key(code: KeyCode) -> KeyEvent {
	KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut App<'_>, text: &str) {
	for ch in text.chars() {
		app.handle_key(key(KeyCode::Char(ch)), Instant::now());
	}
}

fn click(column: u16, row: u16) -> MouseEvent {
	MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	}
}

/// Pump the app until `done` holds, failing after a generous deadline.
fn pump_until(app: &mut App<'_>, done: impl Fn(&App<'_>) -> bool) {
	let deadline = Instant::now() + Duration::from_secs(5);
	while !done(app) {
		assert!(Instant::now() < deadline, "timed out waiting for the worker");
		app.pump(Instant::now());
		thread::sleep(Duration::from_millis(5));
	}
}

/// Let every running overlay transition finish.
fn settle_overlays(app: &mut App<'_>) {
	let now = Instant::now();
	app.pump(now);
	app.pump(now + Duration::from_millis(400));
}

fn render(app: &mut App<'_>) -> String {
	let backend = TestBackend::new(100, 30);
	let mut terminal = Terminal::new(backend).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw frame");
	buffer_to_string(terminal.backend().buffer())
}

fn buffer_to_string(buf: &Buffer) -> String {
	let mut lines = Vec::new();
	for y in 0..buf.area.height {
		let mut line = String::new();
		for x in 0..buf.area.width {
			line.push_str(buf[(x, y)].symbol());
		}
		lines.push(line);
	}
	lines.join("\n")
}

fn search_for(app: &mut App<'_>, query: &str) {
	type_text(app, query);
	app.handle_key(key(KeyCode::Enter), Instant::now());
	pump_until(app, |app| app.controller().results().is_some());
}

#[test]
fn search_view_shows_brand_placeholder_and_footer() {
	let mut app = app();
	let screen = render(&mut app);
	assert!(screen.contains("DocSeek"));
	assert!(screen.contains("Search documents"));
	assert!(screen.contains("F1 Help"));
	assert!(screen.contains("F3 Terms"));
}

#[test]
fn status_line_reports_document_count() {
	let mut app = app();
	pump_until(&mut app, |app| !app.controller().status().text().is_empty());
	let screen = render(&mut app);
	assert!(screen.contains("Indexed 3 documents"));
}

#[test]
fn typing_then_enter_renders_result_cards() {
	let mut app = app();
	search_for(&mut app, "rust");

	assert_eq!(app.controller().view(), ViewState::Results);
	let screen = render(&mut app);
	assert!(screen.contains("← Back"));
	assert!(screen.contains("Results for \"rust\""));
	assert!(screen.contains("2 results"));
	assert!(screen.contains("guide.txt"));
	assert!(screen.contains("docs/notes.txt"));
	assert!(screen.contains("Relevance score: 0.5000"));
	assert!(screen.contains("TF-IDF Score: 0.250000"));
}

#[test]
fn empty_search_reports_no_results() {
	let mut app = app();
	search_for(&mut app, "nothing");
	let screen = render(&mut app);
	assert!(screen.contains("No results found for \"nothing\""));
}

#[test]
fn initial_query_is_searched_at_start_up() {
	let mut app = app_with(TuiOptions {
		initial_query: "rust".to_string(),
		..TuiOptions::default()
	});
	assert_eq!(app.search_input.text(), "rust");
	pump_until(&mut app, |app| app.controller().results().is_some());
	assert_eq!(app.controller().committed_query(), Some("rust"));
}

#[test]
fn suggestions_appear_after_debounce_and_follow_arrow_keys() {
	let mut app = app();
	type_text(&mut app, "oc");
	pump_until(&mut app, |app| app.controller().suggestions().is_visible());

	app.handle_key(key(KeyCode::Down), Instant::now());
	let screen = render(&mut app);
	assert!(screen.contains("› ocacean"));
	assert!(screen.contains("ocy"));

	app.handle_key(key(KeyCode::Enter), Instant::now());
	assert_eq!(app.search_input.text(), "ocacean");
	assert_eq!(app.controller().committed_query(), Some("ocacean"));
}

#[test]
fn escape_quits_from_an_idle_search_view() {
	let mut app = app();
	assert_eq!(app.handle_key(key(KeyCode::Esc), Instant::now()), Flow::Quit);
}

#[test]
fn escape_in_results_goes_back_first() {
	let mut app = app();
	search_for(&mut app, "rust");
	assert_eq!(app.handle_key(key(KeyCode::Esc), Instant::now()), Flow::Continue);
	assert_eq!(app.controller().view(), ViewState::Search);
	assert_eq!(app.handle_key(key(KeyCode::Esc), Instant::now()), Flow::Quit);
}

#[test]
fn escape_during_modal_close_keeps_running() {
	let mut app = app();
	app.handle_key(key(KeyCode::F(2)), Instant::now());
	settle_overlays(&mut app);

	assert_eq!(app.handle_key(key(KeyCode::Esc), Instant::now()), Flow::Continue);
	assert_eq!(app.controller().overlays().phase(OverlayKind::About), OverlayPhase::Closing);
	assert_eq!(app.handle_key(key(KeyCode::Esc), Instant::now()), Flow::Continue);

	settle_overlays(&mut app);
	assert_eq!(app.controller().overlays().phase(OverlayKind::About), OverlayPhase::Closed);
	assert_eq!(app.handle_key(key(KeyCode::Esc), Instant::now()), Flow::Quit);
}

#[test]
fn escape_during_modal_close_stays_on_results() {
	let mut app = app();
	search_for(&mut app, "rust");
	app.handle_key(key(KeyCode::F(1)), Instant::now());
	settle_overlays(&mut app);

	app.handle_key(key(KeyCode::Esc), Instant::now());
	app.handle_key(key(KeyCode::Esc), Instant::now());
	assert_eq!(app.controller().view(), ViewState::Results);
}

#[test]
fn ctrl_c_always_quits() {
	let mut app = app();
	app.handle_key(key(KeyCode::F(1)), Instant::now());
	let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
	assert_eq!(app.handle_key(ctrl_c, Instant::now()), Flow::Quit);
}

#[test]
fn help_modal_opens_and_toggles_faq() {
	let mut app = app();
	app.handle_key(key(KeyCode::F(1)), Instant::now());
	settle_overlays(&mut app);
	assert_eq!(app.controller().overlays().phase(OverlayKind::Help), OverlayPhase::Open);

	app.handle_key(key(KeyCode::Enter), Instant::now());
	let screen = render(&mut app);
	assert!(screen.contains("Help"));
	assert!(screen.contains("How do I search?"));
	assert!(screen.contains("Type a few words"));
}

#[test]
fn footer_click_opens_modal_and_backdrop_click_closes_it() {
	let mut app = app();
	render(&mut app);
	let (_, about) = app
		.hits
		.footer
		.iter()
		.copied()
		.find(|(kind, _)| *kind == OverlayKind::About)
		.expect("about link drawn");
	app.handle_mouse(click(about.x, about.y));
	assert_eq!(app.controller().overlays().phase(OverlayKind::About), OverlayPhase::Opening);

	settle_overlays(&mut app);
	let screen = render(&mut app);
	assert!(screen.contains("About DocSeek"));

	app.handle_mouse(click(0, 0));
	assert_eq!(app.controller().overlays().phase(OverlayKind::About), OverlayPhase::Closing);
	settle_overlays(&mut app);
	assert_eq!(app.controller().overlays().phase(OverlayKind::About), OverlayPhase::Closed);
}

#[test]
fn enter_on_result_opens_document_viewer() {
	let mut app = app();
	search_for(&mut app, "rust");
	app.handle_key(key(KeyCode::Enter), Instant::now());
	pump_until(&mut app, |app| app.controller().document().is_some());
	settle_overlays(&mut app);

	let screen = render(&mut app);
	assert!(screen.contains("guide.txt"));
	assert!(screen.contains("docs/guide.txt"));
	assert!(screen.contains("line one"));
	assert!(screen.contains("line two"));

	app.handle_key(key(KeyCode::Esc), Instant::now());
	settle_overlays(&mut app);
	assert!(app.controller().document().is_none());
	assert_eq!(app.controller().view(), ViewState::Results);
}

#[test]
fn document_failure_shows_alert_until_acknowledged() {
	let mut app = app();
	app.controller.open_document("docs/missing.txt");
	app.flush_requests();
	pump_until(&mut app, |app| app.controller().alert().is_some());

	let screen = render(&mut app);
	assert!(screen.contains(DOCUMENT_ERROR));
	assert_eq!(app.controller().overlays().phase(OverlayKind::Document), OverlayPhase::Closed);

	type_text(&mut app, "x");
	assert_eq!(app.search_input.text(), "");
	app.handle_key(key(KeyCode::Enter), Instant::now());
	assert!(app.controller().alert().is_none());
}

#[test]
fn clear_control_empties_the_search_box() {
	let mut app = app();
	type_text(&mut app, "rust");
	render(&mut app);
	let clear = app.hits.clear.expect("clear control drawn");
	app.handle_mouse(click(clear.x, clear.y));
	assert_eq!(app.search_input.text(), "");
	assert_eq!(app.controller().input(), "");
}
