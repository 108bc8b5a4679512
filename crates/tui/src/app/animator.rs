//! Timed overlay transitions.
//!
//! The controller moves an overlay into `Opening` or `Closing`; the animator
//! times that transition and reports when it has run its course, which is
//! the only way an overlay reaches `Open` or `Closed`.

use std::time::{Duration, Instant};

use docseek_core::{OverlayKind, OverlayPhase, Overlays};

pub(crate) const OPEN_DURATION: Duration = Duration::from_millis(300);
pub(crate) const MODAL_CLOSE_DURATION: Duration = Duration::from_millis(300);
pub(crate) const DOCUMENT_CLOSE_DURATION: Duration = Duration::from_millis(200);

fn duration(kind: OverlayKind, phase: OverlayPhase) -> Duration {
	match (kind, phase) {
		(_, OverlayPhase::Opening) => OPEN_DURATION,
		(OverlayKind::Document, _) => DOCUMENT_CLOSE_DURATION,
		_ => MODAL_CLOSE_DURATION,
	}
}

#[derive(Debug, Clone, Copy)]
struct Transition {
	kind: OverlayKind,
	phase: OverlayPhase,
	started: Instant,
}

impl Transition {
	fn fraction(&self, now: Instant) -> f32 {
		let total = duration(self.kind, self.phase).as_secs_f32();
		if total <= 0.0 {
			return 1.0;
		}
		(now.saturating_duration_since(self.started).as_secs_f32() / total).min(1.0)
	}

	fn finished(&self, now: Instant) -> bool {
		now.saturating_duration_since(self.started) >= duration(self.kind, self.phase)
	}
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Animator {
	running: Vec<Transition>,
}

impl Animator {
	/// Start, restart or drop transitions to match the overlays' phases.
	///
	/// A reversal mid-way (closing an overlay that is still opening, or the
	/// other way round) continues from the current size.
	pub(crate) fn sync(&mut self, overlays: &Overlays, now: Instant) {
		for kind in OverlayKind::ESCAPE_ORDER {
			let phase = overlays.phase(kind);
			let position = self.running.iter().position(|t| t.kind == kind);
			match phase {
				OverlayPhase::Opening | OverlayPhase::Closing => {
					let visible = position.map(|index| self.visible_fraction(index, now));
					match position {
						Some(index) if self.running[index].phase == phase => {}
						Some(index) => {
							self.running[index] = start(kind, phase, visible.unwrap_or(0.0), now);
						}
						None => {
							let visible = if phase == OverlayPhase::Closing { 1.0 } else { 0.0 };
							self.running.push(start(kind, phase, visible, now));
						}
					}
				}
				OverlayPhase::Open | OverlayPhase::Closed => {
					if let Some(index) = position {
						self.running.remove(index);
					}
				}
			}
		}
	}

	/// Remove and return every transition that has run its course.
	pub(crate) fn finished(&mut self, now: Instant) -> Vec<OverlayKind> {
		let mut done = Vec::new();
		self.running.retain(|transition| {
			if transition.finished(now) {
				done.push(transition.kind);
				false
			} else {
				true
			}
		});
		done
	}

	/// How much of the panel is shown: 0.0 closed, 1.0 fully open.
	pub(crate) fn progress(&self, kind: OverlayKind, phase: OverlayPhase, now: Instant) -> f32 {
		match self.running.iter().position(|t| t.kind == kind) {
			Some(index) => self.visible_fraction(index, now),
			None => match phase {
				OverlayPhase::Closed | OverlayPhase::Opening => 0.0,
				OverlayPhase::Open | OverlayPhase::Closing => 1.0,
			},
		}
	}

	#[cfg(test)]
	pub(crate) fn is_idle(&self) -> bool {
		self.running.is_empty()
	}

	fn visible_fraction(&self, index: usize, now: Instant) -> f32 {
		let transition = &self.running[index];
		let fraction = transition.fraction(now);
		match transition.phase {
			OverlayPhase::Closing => 1.0 - fraction,
			_ => fraction,
		}
	}
}

/// A transition whose panel is currently `visible` shown.
fn start(kind: OverlayKind, phase: OverlayPhase, visible: f32, now: Instant) -> Transition {
	let done = match phase {
		OverlayPhase::Closing => 1.0 - visible,
		_ => visible,
	};
	let elapsed = duration(kind, phase).mul_f32(done.clamp(0.0, 1.0));
	Transition {
		kind,
		phase,
		started: now.checked_sub(elapsed).unwrap_or(now),
	}
}
