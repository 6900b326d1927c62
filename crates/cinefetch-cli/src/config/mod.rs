//! Application configuration module.
//!
//! Manages the TOML config file holding API keys, timeouts and locale
//! settings, with environment variable overrides for the key lists.

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::{AppConfig, OMDB_KEYS_ENV, OmdbConfig, TMDB_KEYS_ENV, TmdbConfig};
pub use paths::resolve_config_path;
