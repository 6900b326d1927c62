//! `TmdbClient` - TMDB provider rules on top of `ResilientClient`.

use reqwest::StatusCode;
use serde_json::Value;
use tracing::instrument;

use super::api::LocalTmdbApi;
use super::types::{
    ListParams, SearchMovieParams, TmdbErrorResponse, TmdbMovieDetails, TmdbMovieListResponse,
};
use crate::resilient::{FetchError, Provider, Reply, ResilientClient, Verdict};

/// Invalid API key.
const CODE_INVALID_KEY: u32 = 7;
/// Suspended API key.
const CODE_SUSPENDED_KEY: u32 = 10;
/// Request count over the allowed limit.
const CODE_OVER_LIMIT: u32 = 25;
/// Resource not found.
const CODE_NOT_FOUND: u32 = 34;

/// TMDB response rules.
#[derive(Debug, Clone, Copy, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct TmdbProvider;

impl Provider for TmdbProvider {
    const NAME: &'static str = "TMDB";
    const CREDENTIAL_PARAM: &'static str = "api_key";
    const DEFAULT_BASE_URL: &'static str = "https://api.themoviedb.org/3/";

    fn classify(&self, status: StatusCode, body: &Value) -> Verdict {
        let Some(envelope) = error_envelope(status, body) else {
            return Verdict::Accept;
        };

        let reason = format!(
            "code={}, message={}",
            envelope.status_code, envelope.status_message
        );
        match envelope.status_code {
            CODE_INVALID_KEY | CODE_SUSPENDED_KEY | CODE_OVER_LIMIT => Verdict::Rotate(reason),
            CODE_NOT_FOUND => Verdict::Negative(reason),
            _ if !status.is_success() => Verdict::Rotate(format!("HTTP {status}: {reason}")),
            _ => Verdict::Negative(reason),
        }
    }
}

/// Parses the `{status_code, status_message, success}` envelope, if the
/// body is one.
fn error_envelope(status: StatusCode, body: &Value) -> Option<TmdbErrorResponse> {
    let flagged = body.get("success").and_then(Value::as_bool) == Some(false);
    let coded = !status.is_success() && body.get("status_code").is_some();
    if !flagged && !coded {
        return None;
    }
    serde_json::from_value(body.clone()).ok()
}

/// TMDB API client.
#[allow(clippy::module_name_repetitions)]
pub type TmdbClient = ResilientClient<TmdbProvider>;

/// Appends the optional language and region parameters.
fn push_locale(query: &mut Vec<(&'static str, String)>, language: Option<&str>, region: Option<&str>) {
    if let Some(language) = language {
        query.push(("language", String::from(language)));
    }
    if let Some(region) = region {
        query.push(("region", String::from(region)));
    }
}

impl TmdbClient {
    /// Fetches one of the movie list endpoints.
    async fn movie_list(
        &self,
        path: &str,
        params: &ListParams,
    ) -> Result<Reply<TmdbMovieListResponse>, FetchError> {
        let mut query = vec![("page", params.page.max(1).to_string())];
        push_locale(&mut query, params.language.as_deref(), params.region.as_deref());
        self.fetch_with_rotation(path, &query, None).await
    }
}

impl LocalTmdbApi for TmdbClient {
    #[instrument(skip_all)]
    async fn trending(
        &self,
        params: &ListParams,
    ) -> Result<Reply<TmdbMovieListResponse>, FetchError> {
        self.movie_list("trending/movie/week", params).await
    }

    #[instrument(skip_all)]
    async fn popular(
        &self,
        params: &ListParams,
    ) -> Result<Reply<TmdbMovieListResponse>, FetchError> {
        self.movie_list("movie/popular", params).await
    }

    #[instrument(skip_all)]
    async fn upcoming(
        &self,
        params: &ListParams,
    ) -> Result<Reply<TmdbMovieListResponse>, FetchError> {
        self.movie_list("movie/upcoming", params).await
    }

    #[instrument(skip_all)]
    async fn search_movie(
        &self,
        params: &SearchMovieParams,
    ) -> Result<Reply<TmdbMovieListResponse>, FetchError> {
        let mut query = vec![
            ("query", String::from(params.query.trim())),
            ("page", params.page.max(1).to_string()),
            ("include_adult", params.include_adult.to_string()),
        ];
        if let Some(year) = params.year {
            query.push(("year", year.to_string()));
        }
        push_locale(&mut query, params.language.as_deref(), params.region.as_deref());

        self.fetch_with_rotation("search/movie", &query, None).await
    }

    #[instrument(skip_all)]
    async fn movie_details(
        &self,
        movie_id: u64,
        language: Option<&str>,
    ) -> Result<Reply<TmdbMovieDetails>, FetchError> {
        let path = format!("movie/{movie_id}");
        let mut query = vec![("append_to_response", String::from("credits"))];
        push_locale(&mut query, language, None);
        self.fetch_with_rotation(&path, &query, None).await
    }
}
