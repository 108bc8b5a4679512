//! Hit boxes recorded during the last draw.
//!
//! Pointer handling never recomputes layout; it asks where things were
//! actually drawn.

use docseek_core::OverlayKind;
use ratatui::layout::Rect;

use crate::components::{OverlayAreas, point_in_rect};

#[derive(Debug, Clone, Default)]
pub(crate) struct HitMap {
	pub(crate) input: Option<Rect>,
	pub(crate) clear: Option<Rect>,
	pub(crate) panel: Option<Rect>,
	pub(crate) suggestions: Vec<(usize, Rect)>,
	pub(crate) back: Option<Rect>,
	pub(crate) results: Vec<(usize, Rect)>,
	pub(crate) results_list: Option<Rect>,
	pub(crate) footer: Vec<(OverlayKind, Rect)>,
	pub(crate) overlays: Vec<(OverlayKind, OverlayAreas)>,
	pub(crate) faq: Vec<(usize, Rect)>,
	pub(crate) alert: Option<Rect>,
}

impl HitMap {
	pub(crate) fn reset(&mut self) {
		*self = Self::default();
	}

	pub(crate) fn overlay(&self, kind: OverlayKind) -> Option<OverlayAreas> {
		self.overlays
			.iter()
			.find(|(drawn, _)| *drawn == kind)
			.map(|(_, areas)| *areas)
	}
}

pub(crate) fn contains(area: Option<Rect>, column: u16, row: u16) -> bool {
	area.is_some_and(|area| point_in_rect(column, row, area))
}

/// First entry in `entries` whose box holds the point.
pub(crate) fn find<T: Copy>(entries: &[(T, Rect)], column: u16, row: u16) -> Option<T> {
	entries
		.iter()
		.find(|(_, area)| point_in_rect(column, row, *area))
		.map(|(value, _)| *value)
}
