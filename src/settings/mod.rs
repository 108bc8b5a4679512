//! Configuration loading and resolution utilities.
//!
//! Sources are layered with the `config` crate: the platform config file,
//! then `./.docseek.toml` and `./docseek.toml`, then every `--config` file,
//! then `DOCSEEK__SECTION__KEY` environment variables, and finally the CLI
//! flags. `load` is the entry point and returns a validated
//! [`ResolvedConfig`].

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::ResolvedConfig;
