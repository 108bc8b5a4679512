//! Channels between the UI thread and the fetch worker.

use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use docseek_api::SearchBackend;
use docseek_core::worker::{self, WorkerCommand};
use docseek_core::{Request, Response};

pub(crate) struct FetchRuntime {
	tx: Sender<WorkerCommand>,
	rx: Receiver<Response>,
}

impl FetchRuntime {
	pub(crate) fn spawn(backend: Arc<dyn SearchBackend>) -> io::Result<Self> {
		let (tx, rx) = worker::spawn(backend)?;
		Ok(Self { tx, rx })
	}

	/// Hand queued requests to the worker.
	pub(crate) fn dispatch(&self, requests: Vec<Request>) {
		for request in requests {
			if self.tx.send(WorkerCommand::Fetch(request)).is_err() {
				tracing::warn!("fetch worker is no longer running");
				break;
			}
		}
	}

	/// Responses that arrived since the last call, in arrival order.
	pub(crate) fn drain(&self) -> Vec<Response> {
		let mut responses = Vec::new();
		loop {
			match self.rx.try_recv() {
				Ok(response) => responses.push(response),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
		responses
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(WorkerCommand::Shutdown);
	}
}
