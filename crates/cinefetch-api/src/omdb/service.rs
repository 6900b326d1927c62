//! Movie lookups that combine search, detail fan-out and local fallback.

use anyhow::{Context, Result, bail};
use futures::future::join_all;
use tracing::instrument;

use super::api::LocalOmdbApi;
use super::fallback;
use super::types::OmdbSearchItem;
use crate::movie::MovieRecord;
use crate::resilient::Reply;

/// Maximum number of search hits enriched with a detail lookup.
pub const DETAIL_FANOUT_LIMIT: usize = 10;

/// Minimum size of the top-rated list before local entries are mixed in.
const MIN_TOP_RATED: usize = 5;

/// IMDb IDs of the curated top-rated list.
pub const TOP_RATED_IDS: [&str; 10] = [
    "tt0111161",
    "tt0068646",
    "tt0071562",
    "tt0468569",
    "tt0050083",
    "tt0108052",
    "tt0167260",
    "tt0110912",
    "tt0060196",
    "tt0120737",
];

/// One page of search results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    /// Movies on this page (abbreviated records).
    pub movies: Vec<MovieRecord>,
    /// Total number of results reported upstream.
    pub total_results: usize,
    /// Page number (1-based).
    pub page: u32,
}

impl SearchPage {
    const fn empty(page: u32) -> Self {
        Self {
            movies: Vec::new(),
            total_results: 0,
            page,
        }
    }
}

/// Searches movies and never fails.
///
/// - Blank query: empty list, no request.
/// - Upstream "no results": empty list (not the fallback set).
/// - Hits: the first `DETAIL_FANOUT_LIMIT` are enriched concurrently,
///   output keeps search order; a failed detail lookup keeps the
///   abbreviated record.
/// - Any error (all keys exhausted, bad request): local fallback movies
///   matching `query`.
#[instrument(skip_all, fields(query = query))]
pub async fn fetch_with_fallback(api: &(impl LocalOmdbApi + Sync), query: &str) -> Vec<MovieRecord> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    match api.search(query, 1).await {
        Ok(Reply::Hit(response)) => {
            let items = response.search.unwrap_or_default();
            tracing::info!(found = items.len(), "OMDb search completed");
            with_details(api, &items).await
        }
        Ok(Reply::Miss(reason)) => {
            tracing::info!(reason = %reason, "OMDb search returned no results");
            Vec::new()
        }
        Err(err) => {
            tracing::warn!(error = %err, "OMDb search failed, using local fallback data");
            fallback::matching(query)
        }
    }
}

/// Enriches search hits with detail lookups, preserving input order.
async fn with_details(
    api: &(impl LocalOmdbApi + Sync),
    items: &[OmdbSearchItem],
) -> Vec<MovieRecord> {
    let lookups = items.iter().take(DETAIL_FANOUT_LIMIT).map(|item| async move {
        if item.imdb_id.trim().is_empty() {
            return item.to_record();
        }
        match api.details(&item.imdb_id).await {
            Ok(Reply::Hit(movie)) => movie.to_record(),
            Ok(Reply::Miss(reason)) => {
                tracing::debug!(imdb_id = %item.imdb_id, reason = %reason, "no details, using search data");
                item.to_record()
            }
            Err(err) => {
                tracing::warn!(imdb_id = %item.imdb_id, error = %err, "detail lookup failed, using search data");
                item.to_record()
            }
        }
    });

    join_all(lookups).await
}

/// Fetches one search page without detail enrichment.
///
/// # Errors
///
/// Returns an error if every API key failed.
#[instrument(skip_all, fields(query = query, page = page))]
pub async fn search_page(
    api: &(impl LocalOmdbApi + Sync),
    query: &str,
    page: u32,
) -> Result<SearchPage> {
    let page = page.max(1);
    let query = query.trim();
    if query.is_empty() {
        return Ok(SearchPage::empty(page));
    }

    let reply = api
        .search(query, page)
        .await
        .with_context(|| format!("OMDb search failed: {query}"))?;

    match reply {
        Reply::Hit(response) => {
            let total_results = response.total();
            let movies = response
                .search
                .unwrap_or_default()
                .iter()
                .map(OmdbSearchItem::to_record)
                .collect();
            Ok(SearchPage {
                movies,
                total_results,
                page,
            })
        }
        Reply::Miss(reason) => {
            tracing::info!(reason = %reason, "OMDb search returned no results");
            Ok(SearchPage::empty(page))
        }
    }
}

/// Fetches full details for one IMDb ID.
///
/// # Errors
///
/// Returns an error if the ID is blank, OMDb has no such title, or every
/// API key failed.
#[instrument(skip_all, fields(imdb_id = imdb_id))]
pub async fn movie_details(api: &(impl LocalOmdbApi + Sync), imdb_id: &str) -> Result<MovieRecord> {
    let imdb_id = imdb_id.trim();
    if imdb_id.is_empty() {
        bail!("a valid IMDb ID is required");
    }

    let reply = api
        .details(imdb_id)
        .await
        .with_context(|| format!("OMDb detail lookup failed: {imdb_id}"))?;

    match reply {
        Reply::Hit(movie) => Ok(movie.to_record()),
        Reply::Miss(reason) => bail!("OMDb has no details for {imdb_id}: {reason}"),
    }
}

/// Fetches the curated top-rated list and never fails.
///
/// Failed lookups are replaced by the bundled entry with the same ID when
/// one exists. When fewer than five movies remain, the rest of the bundled
/// set fills the list.
#[instrument(skip_all)]
pub async fn top_rated(api: &(impl LocalOmdbApi + Sync)) -> Vec<MovieRecord> {
    let lookups = TOP_RATED_IDS.iter().map(|imdb_id| async move {
        match api.details(imdb_id).await {
            Ok(Reply::Hit(movie)) => Some(movie.to_record()),
            Ok(Reply::Miss(reason)) => {
                tracing::warn!(imdb_id, reason = %reason, "top-rated lookup returned nothing");
                fallback::by_imdb_id(imdb_id)
            }
            Err(err) => {
                tracing::warn!(imdb_id, error = %err, "top-rated lookup failed");
                fallback::by_imdb_id(imdb_id)
            }
        }
    });

    let mut movies: Vec<MovieRecord> = join_all(lookups).await.into_iter().flatten().collect();

    if movies.len() < MIN_TOP_RATED {
        tracing::info!(
            fetched = movies.len(),
            "Not enough top-rated movies, filling with local data"
        );
        for local in fallback::movies() {
            if !movies.iter().any(|m| m.imdb_id == local.imdb_id) {
                movies.push(local);
            }
        }
        movies.truncate(TOP_RATED_IDS.len());
    }

    movies
}
