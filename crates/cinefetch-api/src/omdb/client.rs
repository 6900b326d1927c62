//! `OmdbClient` - OMDb provider rules on top of `ResilientClient`.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::instrument;

use super::api::LocalOmdbApi;
use super::types::{OmdbMovie, OmdbSearchResponse};
use crate::resilient::{FetchError, Provider, Reply, ResilientClient, Verdict};

/// Error texts that mean "this key is unusable right now".
#[allow(clippy::expect_used)]
static CREDENTIAL_ERROR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)invalid api key|request limit reached|no api key provided")
        .expect("failed to compile OMDb credential error regex")
});

/// OMDb response rules.
///
/// OMDb answers with HTTP 200 and `"Response": "False"` for both
/// "no match" and key problems; only the `Error` text tells them apart.
#[derive(Debug, Clone, Copy, Default)]
#[allow(clippy::module_name_repetitions)]
pub struct OmdbProvider;

impl Provider for OmdbProvider {
    const NAME: &'static str = "OMDb";
    const CREDENTIAL_PARAM: &'static str = "apikey";
    const DEFAULT_BASE_URL: &'static str = "https://www.omdbapi.com/";

    fn classify(&self, status: StatusCode, body: &Value) -> Verdict {
        let failed = body
            .get("Response")
            .and_then(Value::as_str)
            .is_some_and(|r| r.eq_ignore_ascii_case("false"));
        if !failed {
            return Verdict::Accept;
        }

        let error = body
            .get("Error")
            .and_then(Value::as_str)
            .unwrap_or("unknown error");

        if CREDENTIAL_ERROR_RE.is_match(error) {
            Verdict::Rotate(String::from(error))
        } else if !status.is_success() {
            Verdict::Rotate(format!("HTTP {status}: {error}"))
        } else {
            Verdict::Negative(String::from(error))
        }
    }
}

/// OMDb API client.
#[allow(clippy::module_name_repetitions)]
pub type OmdbClient = ResilientClient<OmdbProvider>;

impl LocalOmdbApi for OmdbClient {
    #[instrument(skip_all)]
    async fn search(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Reply<OmdbSearchResponse>, FetchError> {
        let query = [
            ("s", String::from(query.trim())),
            ("type", String::from("movie")),
            ("page", page.max(1).to_string()),
        ];
        self.fetch_with_rotation("", &query, None).await
    }

    #[instrument(skip_all)]
    async fn details(&self, imdb_id: &str) -> Result<Reply<OmdbMovie>, FetchError> {
        let query = [
            ("i", String::from(imdb_id.trim())),
            ("plot", String::from("full")),
        ];
        self.fetch_with_rotation("", &query, None).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use std::time::Duration;

    use serde_json::json;
    use wiremock::matchers::{method, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client(server: &MockServer, keys: &[&str]) -> OmdbClient {
        OmdbClient::builder(OmdbProvider)
            .base_url(format!("{}/", server.uri()).parse().unwrap())
            .credentials(keys.iter().copied())
            .user_agent("test/0.0.0")
            .min_interval(Duration::ZERO)
            .build()
            .unwrap()
    }

    #[test]
    fn test_classify_invalid_key_rotates() {
        // Arrange
        let body = json!({"Response": "False", "Error": "Invalid API key!"});

        // Act
        let verdict = OmdbProvider.classify(StatusCode::UNAUTHORIZED, &body);

        // Assert
        assert_eq!(verdict, Verdict::Rotate(String::from("Invalid API key!")));
    }

    #[test]
    fn test_classify_limit_reached_rotates() {
        // Arrange
        let body = json!({"Response": "False", "Error": "Request limit reached!"});

        // Act
        let verdict = OmdbProvider.classify(StatusCode::OK, &body);

        // Assert
        assert!(matches!(verdict, Verdict::Rotate(_)));
    }

    #[test]
    fn test_classify_not_found_is_negative() {
        // Arrange
        let body = json!({"Response": "False", "Error": "Movie not found!"});

        // Act
        let verdict = OmdbProvider.classify(StatusCode::OK, &body);

        // Assert
        assert_eq!(verdict, Verdict::Negative(String::from("Movie not found!")));
    }

    #[test]
    fn test_classify_server_failure_rotates() {
        // Arrange
        let body = json!({"Response": "False", "Error": "Something went wrong."});

        // Act
        let verdict = OmdbProvider.classify(StatusCode::INTERNAL_SERVER_ERROR, &body);

        // Assert
        assert!(matches!(verdict, Verdict::Rotate(_)));
    }

    #[test]
    fn test_classify_success_is_accepted() {
        // Arrange
        let body = json!({"Response": "True", "Title": "Heat"});

        // Act & Assert
        assert_eq!(OmdbProvider.classify(StatusCode::OK, &body), Verdict::Accept);
    }

    #[tokio::test]
    async fn test_search_sends_expected_query() {
        // Arrange
        let server = MockServer::start().await;
        let body = include_str!("../../../../fixtures/omdb/search_godfather.json");
        Mock::given(method("GET"))
            .and(query_param("s", "godfather"))
            .and(query_param("type", "movie"))
            .and(query_param("page", "1"))
            .and(query_param("apikey", "k1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server, &["k1"]);

        // Act
        let reply = client.search("  godfather ", 0).await.unwrap();

        // Assert
        let response = reply.hit().unwrap();
        assert_eq!(response.search.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_details_rotates_past_invalid_keys() {
        // Arrange
        let server = MockServer::start().await;
        let invalid = include_str!("../../../../fixtures/omdb/invalid_key.json");
        let details = include_str!("../../../../fixtures/omdb/details_tt0068646.json");
        for key in ["k1", "k2"] {
            Mock::given(method("GET"))
                .and(query_param("apikey", key))
                .respond_with(ResponseTemplate::new(401).set_body_string(invalid))
                .expect(1)
                .mount(&server)
                .await;
        }
        Mock::given(method("GET"))
            .and(query_param("apikey", "k3"))
            .and(query_param("i", "tt0068646"))
            .and(query_param("plot", "full"))
            .respond_with(ResponseTemplate::new(200).set_body_string(details))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server, &["k1", "k2", "k3"]);

        // Act
        let movie = client.details("tt0068646").await.unwrap().hit().unwrap();

        // Assert
        assert_eq!(movie.title.as_deref(), Some("The Godfather"));
    }

    #[tokio::test]
    async fn test_not_found_makes_single_attempt() {
        // Arrange
        let server = MockServer::start().await;
        let body = include_str!("../../../../fixtures/omdb/not_found.json");
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .expect(1)
            .mount(&server)
            .await;
        let client = client(&server, &["k1", "k2", "k3", "k4", "k5"]);

        // Act
        let reply = client.search("zzzzzz", 1).await.unwrap();

        // Assert
        assert_eq!(reply.map(|_| ()), Reply::Miss(String::from("Movie not found!")));
    }
}
