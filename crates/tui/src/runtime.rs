//! Application runtime and event loop.

use std::collections::VecDeque;
use std::io::stdout;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use docseek_api::SearchBackend;
use ratatui::crossterm::event::{
	self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
	Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::app::{App, Flow};
use crate::config::TuiOptions;

/// Construct an [`App`] talking to `backend` and run it until the user quits.
pub fn run(backend: Arc<dyn SearchBackend>, options: TuiOptions) -> Result<()> {
	let mut app = App::new(backend, options)?;
	app.run()
}

impl App<'_> {
	/// Pump the terminal event loop until the user quits.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		terminal.clear()?;
		execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<()> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			let mut quit = false;
			while let Some(event) = pending_events.pop_front() {
				let now = Instant::now();
				match event {
					Event::Key(key) if key.kind == KeyEventKind::Press => {
						if self.handle_key(key, now) == Flow::Quit {
							quit = true;
							break;
						}
					}
					Event::Mouse(mouse) => self.handle_mouse(mouse),
					Event::Paste(text) => self.handle_paste(&text, now),
					_ => {}
				}
			}

			if quit {
				break Ok(());
			}

			self.pump(Instant::now());
			self.throbber_state.calc_next();

			terminal.draw(|frame| self.draw(frame))?;

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();
		execute!(stdout(), DisableBracketedPaste, DisableMouseCapture)?;

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
