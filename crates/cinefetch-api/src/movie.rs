//! `MovieRecord` and boundary normalization helpers.

use serde::{Deserialize, Serialize};

/// Placeholder value OMDb uses for missing fields.
const MISSING_SENTINEL: &str = "N/A";

/// A movie as presented to callers, independent of the upstream provider.
///
/// Only `id` and `title` are guaranteed; upstream data is sparsely
/// populated, so everything else is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Provider-prefixed identifier (`omdb-tt0111161`, `tmdb-550`, `local-1`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// IMDb ID, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imdb_id: Option<String>,
    /// TMDB movie ID, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tmdb_id: Option<u64>,
    /// Release year or release date label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Director name(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    /// Plot summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plot: Option<String>,
    /// Poster image URL (always HTTPS when present).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    /// Provider detail page URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<String>,
    /// Rating label (e.g. IMDb rating).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    /// Comma-separated genres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Spoken languages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Production countries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Runtime label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub runtime: Option<String>,
    /// Main cast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actors: Option<String>,
    /// Awards summary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub awards: Option<String>,
    /// Box office label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_office: Option<String>,
    /// Metacritic score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metascore: Option<String>,
}

impl MovieRecord {
    /// Creates a record with only the required fields set.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            imdb_id: None,
            tmdb_id: None,
            year: None,
            director: None,
            plot: None,
            poster_url: None,
            detail_url: None,
            rating: None,
            genre: None,
            language: None,
            country: None,
            runtime: None,
            actors: None,
            awards: None,
            box_office: None,
            metascore: None,
        }
    }
}

/// Drops upstream placeholders: `"N/A"` and blank strings become `None`.
#[must_use]
pub fn present(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() || trimmed == MISSING_SENTINEL {
        None
    } else {
        Some(String::from(trimmed))
    }
}

/// Rewrites a leading `http:` scheme (any case) to `https:`.
#[must_use]
pub fn secure_url(url: &str) -> String {
    match url.get(..5) {
        Some(scheme) if scheme.eq_ignore_ascii_case("http:") => {
            format!("https:{}", url.get(5..).unwrap_or_default())
        }
        _ => String::from(url),
    }
}

/// Normalizes an optional poster reference: placeholder removal plus HTTPS upgrade.
#[must_use]
pub fn poster(value: Option<&str>) -> Option<String> {
    present(value).map(|url| secure_url(&url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_drops_sentinel() {
        // Arrange & Act & Assert
        assert_eq!(present(Some("N/A")), None);
        assert_eq!(present(Some("  ")), None);
        assert_eq!(present(None), None);
    }

    #[test]
    fn test_present_keeps_value() {
        // Arrange & Act
        let value = present(Some(" Frank Darabont "));

        // Assert
        assert_eq!(value.as_deref(), Some("Frank Darabont"));
    }

    #[test]
    fn test_secure_url_upgrades_http() {
        // Arrange & Act
        let url = secure_url("HTTP://m.media-amazon.com/images/M/poster.jpg");

        // Assert
        assert_eq!(url, "https://m.media-amazon.com/images/M/poster.jpg");
    }

    #[test]
    fn test_secure_url_leaves_https_and_relative() {
        // Arrange & Act & Assert
        assert_eq!(secure_url("https://a/b.jpg"), "https://a/b.jpg");
        assert_eq!(secure_url("/b.jpg"), "/b.jpg");
        assert_eq!(secure_url("http"), "http");
    }

    #[test]
    fn test_poster_sentinel_is_none() {
        // Arrange & Act & Assert
        assert_eq!(poster(Some("N/A")), None);
        assert_eq!(
            poster(Some("http://img/p.jpg")).as_deref(),
            Some("https://img/p.jpg")
        );
    }

    #[test]
    fn test_movie_record_serialization_skips_empty_fields() {
        // Arrange
        let record = MovieRecord::new("local-1", "Heat");

        // Act
        let json = serde_json::to_string(&record).unwrap_or_default();

        // Assert
        assert_eq!(json, r#"{"id":"local-1","title":"Heat"}"#);
    }
}
