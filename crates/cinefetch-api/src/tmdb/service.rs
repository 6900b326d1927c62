//! TMDB lookups mapped to `MovieRecord`.

use anyhow::{Context, Result, bail};
use futures::future::join_all;
use tracing::instrument;

use super::api::LocalTmdbApi;
use super::types::{ListParams, SearchMovieParams, TmdbMovieListResponse, TmdbMovieResult};
use crate::movie::MovieRecord;
use crate::resilient::Reply;

/// Maximum number of unlocalized hits re-fetched in the requested language.
pub const LOCALIZED_FANOUT_LIMIT: usize = 10;

/// Which movie list to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieList {
    /// `trending/movie/week`.
    Trending,
    /// `movie/popular`.
    Popular,
    /// `movie/upcoming`.
    Upcoming,
}

fn records(reply: Reply<TmdbMovieListResponse>) -> Vec<MovieRecord> {
    match reply {
        Reply::Hit(response) => response.results.iter().map(TmdbMovieResult::to_record).collect(),
        Reply::Miss(reason) => {
            tracing::info!(reason = %reason, "TMDB returned no movies");
            Vec::new()
        }
    }
}

/// Fetches a movie list.
///
/// # Errors
///
/// Returns an error if every API key failed.
#[instrument(skip_all, fields(list = ?list))]
pub async fn movie_list(
    api: &(impl LocalTmdbApi + Sync),
    list: MovieList,
    params: &ListParams,
) -> Result<Vec<MovieRecord>> {
    let reply = match list {
        MovieList::Trending => api.trending(params).await,
        MovieList::Popular => api.popular(params).await,
        MovieList::Upcoming => api.upcoming(params).await,
    }
    .with_context(|| format!("failed to fetch TMDB {list:?} movies"))?;

    let movies = records(reply);
    tracing::info!(count = movies.len(), "TMDB list fetched");
    Ok(movies)
}

/// Searches movies in the requested language.
///
/// When a localized search finds nothing, the search is repeated once
/// without language and region. Hits from that search are re-fetched in
/// the requested language (first `LOCALIZED_FANOUT_LIMIT`, input order);
/// hits whose detail lookup fails are dropped.
///
/// # Errors
///
/// Returns an error if every API key failed.
#[instrument(skip_all, fields(query = %params.query))]
pub async fn search_movies(
    api: &(impl LocalTmdbApi + Sync),
    params: &SearchMovieParams,
) -> Result<Vec<MovieRecord>> {
    if params.query.trim().is_empty() {
        return Ok(Vec::new());
    }

    let reply = api
        .search_movie(params)
        .await
        .with_context(|| format!("TMDB search failed: {}", params.query))?;
    let movies = records(reply);
    tracing::info!(count = movies.len(), "TMDB search completed");

    if !movies.is_empty() || !params.is_localized() {
        return Ok(movies);
    }

    tracing::info!("Retrying TMDB search without language and region");
    let reply = api
        .search_movie(&params.without_locale())
        .await
        .with_context(|| format!("TMDB multi-language search failed: {}", params.query))?;
    let hits = match reply {
        Reply::Hit(response) => response.results,
        Reply::Miss(_) => Vec::new(),
    };
    tracing::info!(count = hits.len(), "TMDB multi-language search completed");

    let language = params.language.as_deref();
    let lookups = hits.iter().take(LOCALIZED_FANOUT_LIMIT).map(|hit| async move {
        match api.movie_details(hit.id, language).await {
            Ok(Reply::Hit(details)) => Some(fill_missing(details.to_record(), hit.to_record())),
            Ok(Reply::Miss(reason)) => {
                tracing::debug!(movie_id = hit.id, reason = %reason, "localized details missing");
                None
            }
            Err(err) => {
                tracing::warn!(movie_id = hit.id, error = %err, "localized detail lookup failed");
                None
            }
        }
    });

    Ok(join_all(lookups).await.into_iter().flatten().collect())
}

/// Fills fields the localized record lacks from the search hit.
fn fill_missing(localized: MovieRecord, hit: MovieRecord) -> MovieRecord {
    MovieRecord {
        year: localized.year.or(hit.year),
        plot: localized.plot.or(hit.plot),
        poster_url: localized.poster_url.or(hit.poster_url),
        ..localized
    }
}

/// Fetches full details for one TMDB movie.
///
/// # Errors
///
/// Returns an error if TMDB has no such movie or every API key failed.
#[instrument(skip_all, fields(movie_id = movie_id))]
pub async fn movie_details(
    api: &(impl LocalTmdbApi + Sync),
    movie_id: u64,
    language: Option<&str>,
) -> Result<MovieRecord> {
    let reply = api
        .movie_details(movie_id, language)
        .await
        .with_context(|| format!("TMDB detail lookup failed: {movie_id}"))?;

    match reply {
        Reply::Hit(details) => Ok(details.to_record()),
        Reply::Miss(reason) => bail!("TMDB has no details for movie {movie_id}: {reason}"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::time::Duration;

    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::tmdb::client::{TmdbClient, TmdbProvider};

    const EMPTY: &str = include_str!("../../../../fixtures/tmdb/search_movie_empty.json");
    const FIGHT_CLUB: &str = include_str!("../../../../fixtures/tmdb/search_movie_fight_club.json");
    const DETAILS: &str = include_str!("../../../../fixtures/tmdb/movie_details_550.json");
    const NOT_FOUND: &str = include_str!("../../../../fixtures/tmdb/not_found.json");
    const TRENDING: &str = include_str!("../../../../fixtures/tmdb/trending_movie_week.json");

    fn client(server: &MockServer) -> TmdbClient {
        TmdbClient::builder(TmdbProvider)
            .base_url(format!("{}/3/", server.uri()).parse().unwrap())
            .credentials(["k1"])
            .user_agent("test/0.0.0")
            .min_interval(Duration::ZERO)
            .build()
            .unwrap()
    }

    fn localized(query: &str) -> SearchMovieParams {
        SearchMovieParams::new(query).language("zh-TW").region("TW")
    }

    #[tokio::test]
    async fn test_localized_hits_are_returned_directly() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param("language", "zh-TW"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FIGHT_CLUB))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let movies = search_movies(&client, &localized("fight club")).await.unwrap();

        // Assert
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].id, "tmdb-550");
        assert_eq!(movies[1].id, "tmdb-51021");
    }

    #[tokio::test]
    async fn test_empty_localized_search_retries_and_localizes_details() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param("language", "zh-TW"))
            .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .and(query_param_is_missing("language"))
            .and(query_param_is_missing("region"))
            .respond_with(ResponseTemplate::new(200).set_body_string(FIGHT_CLUB))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/movie/550"))
            .and(query_param("language", "zh-TW"))
            .respond_with(ResponseTemplate::new(200).set_body_string(DETAILS))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/3/movie/51021"))
            .respond_with(ResponseTemplate::new(404).set_body_string(NOT_FOUND))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let movies = search_movies(&client, &localized("鬥陣俱樂部")).await.unwrap();

        // Assert
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "鬥陣俱樂部");
        assert_eq!(movies[0].director.as_deref(), Some("David Fincher"));
    }

    #[tokio::test]
    async fn test_unlocalized_empty_search_does_not_retry() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/search/movie"))
            .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let movies = search_movies(&client, &SearchMovieParams::new("zzzz"))
            .await
            .unwrap();

        // Assert
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_blank_search_makes_no_request() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY))
            .expect(0)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let movies = search_movies(&client, &localized("  ")).await.unwrap();

        // Assert
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_movie_list_maps_results() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/upcoming"))
            .respond_with(ResponseTemplate::new(200).set_body_string(TRENDING))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let movies = movie_list(&client, MovieList::Upcoming, &ListParams::new())
            .await
            .unwrap();

        // Assert
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "鬥陣俱樂部");
    }

    #[tokio::test]
    async fn test_movie_list_propagates_exhaustion() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let result = movie_list(&client, MovieList::Trending, &ListParams::new()).await;

        // Assert
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("failed to fetch TMDB Trending movies"));
        assert!(message.contains("all API keys failed"));
    }

    #[tokio::test]
    async fn test_movie_details_not_found_is_error() {
        // Arrange
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/3/movie/1"))
            .respond_with(ResponseTemplate::new(404).set_body_string(NOT_FOUND))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server);

        // Act
        let result = movie_details(&client, 1, None).await;

        // Assert
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("TMDB has no details for movie 1")
        );
    }
}
