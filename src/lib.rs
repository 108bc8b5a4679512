//! `docseek`: a terminal client for a full-text document search service.
//!
//! The binary layers configuration, sets up logging and hands an HTTP
//! backend to the interactive front-end. The library half exposes the
//! directory and logging helpers plus the pieces embedders need to run the
//! interface against their own [`SearchBackend`].

pub mod app_dirs;
pub mod logging;

pub use docseek_api::{HttpBackend, HttpOptions, SearchBackend};
pub use docseek_core::{Controller, ControllerOptions};
pub use docseek_tui::{App, TuiOptions, UiLabels, run};
