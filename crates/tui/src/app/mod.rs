//! Application state and behaviour for the interactive front-end.
//!
//! The [`App`] wraps the interaction controller and adds what only a
//! terminal needs: the text editor, hit boxes recorded while drawing, the
//! overlay animator and the channels to the fetch worker. Supporting modules
//! split input handling, rendering and worker plumbing.

mod actions;
mod animator;
mod fetch;
mod hits;
mod render;
mod state;

#[cfg(test)]
mod tests;

pub(crate) use animator::Animator;
pub(crate) use fetch::FetchRuntime;
pub(crate) use hits::HitMap;
pub use actions::Flow;
pub use state::App;
