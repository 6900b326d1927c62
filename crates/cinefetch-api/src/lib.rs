//! Movie metadata clients for cinefetch.
//!
//! Provides a credential-rotating JSON fetch core and the OMDb and TMDB
//! clients built on top of it, plus a bundled accident hotspot dataset.

/// Bundled Taichung accident hotspots and keyword search.
pub mod accidents;

/// Normalized movie record shared by all providers.
pub mod movie;

/// OMDb API client, search service and local fallback data.
pub mod omdb;

/// Credential rotation, per-attempt timeouts and response classification.
pub mod resilient;

/// TMDB API client.
pub mod tmdb;

pub use movie::MovieRecord;
