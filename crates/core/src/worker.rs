//! Background fetch worker.
//!
//! Each request runs on its own short-lived thread, so a slow search never
//! holds up a suggestion lookup and responses may arrive in any order. The
//! controller's tokens decide which ones are still wanted.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use docseek_api::SearchBackend;

use crate::request::{Request, Response};

/// Commands sent to the fetch worker.
#[derive(Debug)]
pub enum WorkerCommand {
	Fetch(Request),
	/// Stop accepting work. Fetches already running still report back.
	Shutdown,
}

/// Launch the dispatcher thread and return its communication channels.
pub fn spawn(
	backend: Arc<dyn SearchBackend>,
) -> io::Result<(Sender<WorkerCommand>, Receiver<Response>)> {
	let (command_tx, command_rx) = mpsc::channel();
	let (response_tx, response_rx) = mpsc::channel();

	thread::Builder::new()
		.name("docseek-dispatch".into())
		.spawn(move || dispatch_loop(&backend, &command_rx, &response_tx))?;

	Ok((command_tx, response_rx))
}

fn dispatch_loop(
	backend: &Arc<dyn SearchBackend>,
	command_rx: &Receiver<WorkerCommand>,
	response_tx: &Sender<Response>,
) {
	while let Ok(command) = command_rx.recv() {
		match command {
			WorkerCommand::Fetch(request) => dispatch(backend, request, response_tx),
			WorkerCommand::Shutdown => break,
		}
	}
	tracing::debug!("fetch dispatcher stopped");
}

fn dispatch(backend: &Arc<dyn SearchBackend>, request: Request, response_tx: &Sender<Response>) {
	let backend = Arc::clone(backend);
	let tx = response_tx.clone();
	let spawned = thread::Builder::new()
		.name("docseek-fetch".into())
		.spawn(move || {
			let _ = tx.send(execute(backend.as_ref(), request));
		});
	if let Err(err) = spawned {
		tracing::error!(error = %err, "failed to spawn fetch thread");
	}
}

/// Run one request to completion on the calling thread.
pub fn execute(backend: &dyn SearchBackend, request: Request) -> Response {
	match request {
		Request::Status { token } => Response::Status {
			token,
			result: backend.status(),
		},
		Request::Suggestions { token, query } => {
			let result = backend.suggestions(&query);
			Response::Suggestions {
				token,
				query,
				result,
			}
		}
		Request::Search { token, query } => {
			let result = backend.search(&query);
			Response::Search {
				token,
				query,
				result,
			}
		}
		Request::Document { token, path } => {
			let result = backend.document(&path);
			Response::Document {
				token,
				path,
				result,
			}
		}
	}
}
