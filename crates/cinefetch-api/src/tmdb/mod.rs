//! TMDB API client module.
//!
//! Fetches movie lists, searches and details from TMDB API v3 using
//! `api_key` credentials rotated by the resilient core.

mod api;
mod client;
mod service;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalTmdbApi, TmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{TmdbClient, TmdbProvider};
pub use service::{LOCALIZED_FANOUT_LIMIT, MovieList, movie_details, movie_list, search_movies};
pub use types::{
    IMAGE_BASE_URL, ListParams, SearchMovieParams, TmdbCastMember, TmdbCountry, TmdbCredits,
    TmdbCrewMember, TmdbErrorResponse, TmdbGenre, TmdbMovieDetails, TmdbMovieListResponse,
    TmdbMovieResult, TmdbSpokenLanguage,
};
