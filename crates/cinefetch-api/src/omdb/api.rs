//! `OmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use super::types::{OmdbMovie, OmdbSearchResponse};
use crate::resilient::{FetchError, Reply};

/// OMDb API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(OmdbApi: Send)]
pub trait LocalOmdbApi {
    /// Searches movies by title keyword (`s`, `type=movie`, `page`).
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Exhausted` when no API key produced an answer.
    async fn search(&self, query: &str, page: u32)
    -> Result<Reply<OmdbSearchResponse>, FetchError>;

    /// Fetches full details for an IMDb ID (`i`, `plot=full`).
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Exhausted` when no API key produced an answer.
    async fn details(&self, imdb_id: &str) -> Result<Reply<OmdbMovie>, FetchError>;
}
