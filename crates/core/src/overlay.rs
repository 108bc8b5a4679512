//! Overlay lifecycle shared by the informational modals and the document
//! viewer.
//!
//! Each overlay walks `Closed -> Opening -> Open -> Closing -> Closed`.
//! Phase changes caused by the user are immediate; the `Opening -> Open` and
//! `Closing -> Closed` steps only happen when the front-end reports that the
//! matching transition has finished, so a quick re-open during `Closing`
//! simply turns the overlay around instead of racing a delayed teardown.

/// Every overlay the controller manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
	About,
	Help,
	Terms,
	Document,
}

impl OverlayKind {
	/// Escape priority: the document viewer sits on top, then the modals in
	/// their fixed order.
	pub const ESCAPE_ORDER: [Self; 4] = [Self::Document, Self::About, Self::Help, Self::Terms];

	#[must_use]
	pub fn title(self) -> &'static str {
		match self {
			Self::About => "About",
			Self::Help => "Help",
			Self::Terms => "Terms",
			Self::Document => "Document",
		}
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OverlayPhase {
	#[default]
	Closed,
	Opening,
	Open,
	Closing,
}

/// Lifecycle state of one overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlay {
	phase: OverlayPhase,
}

impl Overlay {
	#[must_use]
	pub fn phase(&self) -> OverlayPhase {
		self.phase
	}

	/// Whether the overlay occupies the screen at all.
	#[must_use]
	pub fn is_visible(&self) -> bool {
		self.phase != OverlayPhase::Closed
	}

	/// Whether the overlay is showing or on its way to showing.
	#[must_use]
	pub fn is_active(&self) -> bool {
		matches!(self.phase, OverlayPhase::Opening | OverlayPhase::Open)
	}

	/// Returns `true` when the phase changed.
	pub fn show(&mut self) -> bool {
		match self.phase {
			OverlayPhase::Closed | OverlayPhase::Closing => {
				self.phase = OverlayPhase::Opening;
				true
			}
			OverlayPhase::Opening | OverlayPhase::Open => false,
		}
	}

	/// Returns `true` when the phase changed.
	pub fn hide(&mut self) -> bool {
		match self.phase {
			OverlayPhase::Opening | OverlayPhase::Open => {
				self.phase = OverlayPhase::Closing;
				true
			}
			OverlayPhase::Closed | OverlayPhase::Closing => false,
		}
	}

	/// The running transition completed. Signals that arrive when no
	/// transition is running are ignored.
	pub fn transition_ended(&mut self) -> bool {
		match self.phase {
			OverlayPhase::Opening => {
				self.phase = OverlayPhase::Open;
				true
			}
			OverlayPhase::Closing => {
				self.phase = OverlayPhase::Closed;
				true
			}
			OverlayPhase::Closed | OverlayPhase::Open => false,
		}
	}
}

/// The set of overlays, enforcing that at most one is active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlays {
	about: Overlay,
	help: Overlay,
	terms: Overlay,
	document: Overlay,
}

impl Overlays {
	#[must_use]
	pub fn get(&self, kind: OverlayKind) -> Overlay {
		match kind {
			OverlayKind::About => self.about,
			OverlayKind::Help => self.help,
			OverlayKind::Terms => self.terms,
			OverlayKind::Document => self.document,
		}
	}

	fn get_mut(&mut self, kind: OverlayKind) -> &mut Overlay {
		match kind {
			OverlayKind::About => &mut self.about,
			OverlayKind::Help => &mut self.help,
			OverlayKind::Terms => &mut self.terms,
			OverlayKind::Document => &mut self.document,
		}
	}

	#[must_use]
	pub fn phase(&self, kind: OverlayKind) -> OverlayPhase {
		self.get(kind).phase()
	}

	/// Show `kind`, closing whichever other overlay is active.
	pub fn show(&mut self, kind: OverlayKind) -> bool {
		for other in OverlayKind::ESCAPE_ORDER {
			if other != kind {
				self.get_mut(other).hide();
			}
		}
		self.get_mut(kind).show()
	}

	pub fn hide(&mut self, kind: OverlayKind) -> bool {
		self.get_mut(kind).hide()
	}

	pub fn transition_ended(&mut self, kind: OverlayKind) -> bool {
		self.get_mut(kind).transition_ended()
	}

	/// Topmost active overlay in escape order.
	#[must_use]
	pub fn topmost_active(&self) -> Option<OverlayKind> {
		OverlayKind::ESCAPE_ORDER
			.into_iter()
			.find(|kind| self.get(*kind).is_active())
	}

	/// Overlays currently on screen, in draw order (bottom first).
	pub fn visible(&self) -> impl Iterator<Item = OverlayKind> + '_ {
		OverlayKind::ESCAPE_ORDER
			.into_iter()
			.rev()
			.filter(|kind| self.get(*kind).is_visible())
	}

	/// Background scrolling is suppressed while anything is on screen.
	#[must_use]
	pub fn any_visible(&self) -> bool {
		self.visible().next().is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn full_lifecycle_is_signal_driven() {
		let mut overlay = Overlay::default();
		assert!(overlay.show());
		assert_eq!(overlay.phase(), OverlayPhase::Opening);
		assert!(overlay.transition_ended());
		assert_eq!(overlay.phase(), OverlayPhase::Open);
		assert!(overlay.hide());
		assert_eq!(overlay.phase(), OverlayPhase::Closing);
		assert!(overlay.is_visible());
		assert!(overlay.transition_ended());
		assert_eq!(overlay.phase(), OverlayPhase::Closed);
	}

	#[test]
	fn reopen_during_close_turns_around() {
		let mut overlay = Overlay::default();
		overlay.show();
		overlay.transition_ended();
		overlay.hide();
		assert!(overlay.show());
		assert_eq!(overlay.phase(), OverlayPhase::Opening);
		overlay.transition_ended();
		assert_eq!(overlay.phase(), OverlayPhase::Open);
	}

	#[test]
	fn stray_signals_are_ignored() {
		let mut overlay = Overlay::default();
		assert!(!overlay.transition_ended());
		assert!(!overlay.hide());
		overlay.show();
		overlay.transition_ended();
		assert!(!overlay.transition_ended());
		assert_eq!(overlay.phase(), OverlayPhase::Open);
	}

	#[test]
	fn showing_one_overlay_closes_the_other() {
		let mut overlays = Overlays::default();
		overlays.show(OverlayKind::About);
		overlays.transition_ended(OverlayKind::About);
		overlays.show(OverlayKind::Help);
		assert_eq!(overlays.phase(OverlayKind::About), OverlayPhase::Closing);
		assert_eq!(overlays.phase(OverlayKind::Help), OverlayPhase::Opening);
		assert_eq!(overlays.topmost_active(), Some(OverlayKind::Help));
	}

	#[test]
	fn document_is_topmost() {
		let mut overlays = Overlays::default();
		overlays.show(OverlayKind::Terms);
		overlays.show(OverlayKind::Document);
		assert_eq!(overlays.topmost_active(), Some(OverlayKind::Document));
		let drawn: Vec<_> = overlays.visible().collect();
		assert_eq!(drawn, [OverlayKind::Terms, OverlayKind::Document]);
	}

	#[test]
	fn scroll_lock_follows_visibility() {
		let mut overlays = Overlays::default();
		assert!(!overlays.any_visible());
		overlays.show(OverlayKind::Help);
		assert!(overlays.any_visible());
		overlays.hide(OverlayKind::Help);
		assert!(overlays.any_visible());
		overlays.transition_ended(OverlayKind::Help);
		assert!(!overlays.any_visible());
	}
}
