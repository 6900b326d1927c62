//! OMDb API client module.
//!
//! Searches titles and fetches details from `www.omdbapi.com`, rotating
//! through API keys and serving bundled movies when every key fails.

mod api;
mod client;
pub mod fallback;
mod service;
mod types;

#[allow(clippy::module_name_repetitions)]
pub use api::{LocalOmdbApi, OmdbApi};
#[allow(clippy::module_name_repetitions)]
pub use client::{OmdbClient, OmdbProvider};
pub use service::{
    DETAIL_FANOUT_LIMIT, SearchPage, TOP_RATED_IDS, fetch_with_fallback, movie_details,
    search_page, top_rated,
};
#[allow(clippy::module_name_repetitions)]
pub use types::{OmdbMovie, OmdbSearchItem, OmdbSearchResponse};
