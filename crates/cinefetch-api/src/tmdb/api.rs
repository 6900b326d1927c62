//! `TmdbApi` trait definition.
#![allow(clippy::future_not_send)]

use super::types::{ListParams, SearchMovieParams, TmdbMovieDetails, TmdbMovieListResponse};
use crate::resilient::{FetchError, Reply};

/// TMDB API trait.
///
/// Abstracts API operations for mock substitution in tests.
/// Uses `trait_variant::make` to generate a `Send`-bound async trait.
#[allow(clippy::module_name_repetitions)]
#[trait_variant::make(TmdbApi: Send)]
pub trait LocalTmdbApi {
    /// Fetches this week's trending movies.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Exhausted` when no API key produced an answer.
    async fn trending(&self, params: &ListParams)
    -> Result<Reply<TmdbMovieListResponse>, FetchError>;

    /// Fetches popular movies.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Exhausted` when no API key produced an answer.
    async fn popular(&self, params: &ListParams)
    -> Result<Reply<TmdbMovieListResponse>, FetchError>;

    /// Fetches upcoming releases.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Exhausted` when no API key produced an answer.
    async fn upcoming(&self, params: &ListParams)
    -> Result<Reply<TmdbMovieListResponse>, FetchError>;

    /// Searches for movies.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Exhausted` when no API key produced an answer.
    async fn search_movie(
        &self,
        params: &SearchMovieParams,
    ) -> Result<Reply<TmdbMovieListResponse>, FetchError>;

    /// Fetches movie details with credits.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Exhausted` when no API key produced an answer.
    async fn movie_details(
        &self,
        movie_id: u64,
        language: Option<&str>,
    ) -> Result<Reply<TmdbMovieDetails>, FetchError>;
}
