//! Widgets drawn by the application, one module per screen region.

pub mod alert;
pub mod overlay;
pub mod results;
pub mod scrollbar;
pub mod search;
pub mod status;
pub mod suggestions;

pub use alert::render_alert;
pub use overlay::{
	OverlayAreas, animated_area, dim_background, render_about, render_document, render_help,
	render_terms,
};
pub use results::{ResultsContext, follow_selection, render_results, visible_cards};
pub use scrollbar::{ScrollMetrics, point_in_rect, render_scrollbar};
pub use search::{InputAreas, InputContext, render_footer, render_input, render_title};
pub use status::render_status;
pub use suggestions::{panel_area, render_suggestions};
