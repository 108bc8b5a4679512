//! Interaction controller for the docseek search front-end.
//!
//! Everything with state or timing semantics lives here: the debounced
//! suggestion fetcher, the keyboard selection machine, search execution and
//! result rendering, the document viewer, overlay lifecycles and the status
//! line. The crate performs no I/O of its own; the [`Controller`] queues
//! [`Request`]s and consumes [`Response`]s, and [`worker::spawn`] executes
//! them against a [`docseek_api::SearchBackend`].

mod controller;
pub mod debounce;
pub mod document;
pub mod escape;
pub mod faq;
pub mod overlay;
pub mod request;
pub mod results;
pub mod status;
pub mod suggestions;
pub mod tokens;
pub mod worker;

pub use controller::{Controller, ControllerOptions, DOCUMENT_ERROR, EscapeOutcome, ViewState};
pub use debounce::{DEFAULT_DEBOUNCE, Debouncer};
pub use document::DocumentViewer;
pub use faq::{FaqEntry, HelpFaq};
pub use overlay::{Overlay, OverlayKind, OverlayPhase, Overlays};
pub use request::{Request, Response};
pub use results::{ResultCard, ResultsView};
pub use status::Status;
pub use suggestions::{Highlight, SuggestionPanel};
pub use tokens::{RequestKind, RequestTokens, Token};
pub use worker::WorkerCommand;
