//! Quiet-period scheduling for suggestion lookups.

use std::time::{Duration, Instant};

/// Delay between the last keystroke and the suggestion request.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(200);

/// Holds at most one pending query and releases it once no newer query has
/// been scheduled for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer {
	delay: Duration,
	pending: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
	query: String,
	due: Instant,
}

impl Default for Debouncer {
	fn default() -> Self {
		Self::new(DEFAULT_DEBOUNCE)
	}
}

impl Debouncer {
	#[must_use]
	pub fn new(delay: Duration) -> Self {
		Self {
			delay,
			pending: None,
		}
	}

	#[must_use]
	pub fn delay(&self) -> Duration {
		self.delay
	}

	/// Replace whatever is pending with `query`, restarting the quiet period.
	pub fn schedule(&mut self, query: impl Into<String>, now: Instant) {
		self.pending = Some(Pending {
			query: query.into(),
			due: now + self.delay,
		});
	}

	/// Drop the pending query, if any, without firing it.
	pub fn cancel(&mut self) {
		self.pending = None;
	}

	#[must_use]
	pub fn is_pending(&self) -> bool {
		self.pending.is_some()
	}

	/// Release the pending query once its quiet period has elapsed.
	pub fn poll(&mut self, now: Instant) -> Option<String> {
		match &self.pending {
			Some(pending) if now >= pending.due => self.pending.take().map(|p| p.query),
			_ => None,
		}
	}
}
