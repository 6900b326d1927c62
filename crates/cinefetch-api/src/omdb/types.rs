//! OMDb API response types and their mapping to `MovieRecord`.

use serde::Deserialize;

use crate::movie::{MovieRecord, poster, present};

/// IMDb title page prefix.
const IMDB_TITLE_URL: &str = "https://www.imdb.com/title/";

// --- Search ---

/// Response from `?s=` (search) requests.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchResponse {
    /// Matching titles (absent when there are none).
    #[serde(rename = "Search", default)]
    pub search: Option<Vec<OmdbSearchItem>>,
    /// Total number of results across all pages, as a decimal string.
    #[serde(rename = "totalResults", default)]
    pub total_results: Option<String>,
}

impl OmdbSearchResponse {
    /// Total result count; unparseable or missing counts as the page size.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total_results
            .as_deref()
            .and_then(|t| t.trim().parse().ok())
            .unwrap_or_else(|| self.search.as_ref().map_or(0, Vec::len))
    }
}

/// A single search hit (abbreviated record).
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchItem {
    /// IMDb ID.
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    /// Title.
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    /// Year label (e.g. "1972", "2019–").
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    /// Kind ("movie", "series", "episode").
    #[serde(rename = "Type", default)]
    pub kind: Option<String>,
    /// Poster URL or "N/A".
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

impl OmdbSearchItem {
    /// Maps the abbreviated record; used when the detail lookup fails.
    #[must_use]
    pub fn to_record(&self) -> MovieRecord {
        MovieRecord {
            year: present(self.year.as_deref()),
            poster_url: poster(self.poster.as_deref()),
            ..base_record(&self.imdb_id, self.title.as_deref())
        }
    }
}

// --- Details ---

/// Response from `?i=` (detail) requests.
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbMovie {
    /// IMDb ID.
    #[serde(rename = "imdbID", default)]
    pub imdb_id: String,
    /// Title.
    #[serde(rename = "Title", default)]
    pub title: Option<String>,
    /// Year label.
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    /// Release date ("24 Mar 1972").
    #[serde(rename = "Released", default)]
    pub released: Option<String>,
    /// Runtime ("175 min").
    #[serde(rename = "Runtime", default)]
    pub runtime: Option<String>,
    /// Comma-separated genres.
    #[serde(rename = "Genre", default)]
    pub genre: Option<String>,
    /// Director(s).
    #[serde(rename = "Director", default)]
    pub director: Option<String>,
    /// Main cast.
    #[serde(rename = "Actors", default)]
    pub actors: Option<String>,
    /// Plot text.
    #[serde(rename = "Plot", default)]
    pub plot: Option<String>,
    /// Languages.
    #[serde(rename = "Language", default)]
    pub language: Option<String>,
    /// Countries.
    #[serde(rename = "Country", default)]
    pub country: Option<String>,
    /// Awards summary.
    #[serde(rename = "Awards", default)]
    pub awards: Option<String>,
    /// Poster URL or "N/A".
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
    /// Metacritic score.
    #[serde(rename = "Metascore", default)]
    pub metascore: Option<String>,
    /// IMDb rating.
    #[serde(rename = "imdbRating", default)]
    pub imdb_rating: Option<String>,
    /// Box office gross.
    #[serde(rename = "BoxOffice", default)]
    pub box_office: Option<String>,
}

impl OmdbMovie {
    /// Maps the full record, dropping "N/A" placeholders.
    #[must_use]
    pub fn to_record(&self) -> MovieRecord {
        MovieRecord {
            year: present(self.year.as_deref()),
            director: present(self.director.as_deref()),
            plot: present(self.plot.as_deref()),
            poster_url: poster(self.poster.as_deref()),
            rating: present(self.imdb_rating.as_deref()),
            genre: present(self.genre.as_deref()),
            language: present(self.language.as_deref()),
            country: present(self.country.as_deref()),
            runtime: present(self.runtime.as_deref()),
            actors: present(self.actors.as_deref()),
            awards: present(self.awards.as_deref()),
            box_office: present(self.box_office.as_deref()),
            metascore: present(self.metascore.as_deref()),
            ..base_record(&self.imdb_id, self.title.as_deref())
        }
    }
}

/// Fields shared by both mappings.
fn base_record(imdb_id: &str, title: Option<&str>) -> MovieRecord {
    let imdb_id = imdb_id.trim();
    let mut record = MovieRecord::new(
        format!("omdb-{imdb_id}"),
        present(title).unwrap_or_else(|| String::from("Untitled")),
    );
    if !imdb_id.is_empty() {
        record.imdb_id = Some(String::from(imdb_id));
        record.detail_url = Some(format!("{IMDB_TITLE_URL}{imdb_id}/"));
    }
    record
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_parse_search_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/omdb/search_godfather.json");

        // Act
        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();

        // Assert
        let items = response.search.as_ref().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].imdb_id, "tt0068646");
        assert_eq!(response.total(), 2);
    }

    #[test]
    fn test_parse_not_found_has_no_results() {
        // Arrange
        let json = include_str!("../../../../fixtures/omdb/not_found.json");

        // Act
        let response: OmdbSearchResponse = serde_json::from_str(json).unwrap();

        // Assert
        assert!(response.search.is_none());
        assert_eq!(response.total(), 0);
    }

    #[test]
    fn test_details_mapping_upgrades_poster_and_keeps_fields() {
        // Arrange
        let json = include_str!("../../../../fixtures/omdb/details_tt0068646.json");
        let movie: OmdbMovie = serde_json::from_str(json).unwrap();

        // Act
        let record = movie.to_record();

        // Assert
        assert_eq!(record.id, "omdb-tt0068646");
        assert_eq!(record.title, "The Godfather");
        assert_eq!(record.director.as_deref(), Some("Francis Ford Coppola"));
        assert_eq!(record.rating.as_deref(), Some("9.2"));
        assert!(record.poster_url.unwrap().starts_with("https://"));
        assert_eq!(
            record.detail_url.as_deref(),
            Some("https://www.imdb.com/title/tt0068646/")
        );
    }

    #[test]
    fn test_details_mapping_drops_sentinels() {
        // Arrange
        let json = include_str!("../../../../fixtures/omdb/details_tt0071562.json");
        let movie: OmdbMovie = serde_json::from_str(json).unwrap();

        // Act
        let record = movie.to_record();

        // Assert
        assert_eq!(record.poster_url, None);
        assert_eq!(record.box_office, None);
        assert_eq!(record.metascore.as_deref(), Some("90"));
    }

    #[test]
    fn test_mapping_is_idempotent() {
        // Arrange
        let json = include_str!("../../../../fixtures/omdb/details_tt0068646.json");
        let movie: OmdbMovie = serde_json::from_str(json).unwrap();

        // Act
        let first = movie.to_record();
        let second = movie.to_record();

        // Assert
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_item_mapping_without_title() {
        // Arrange
        let item: OmdbSearchItem =
            serde_json::from_str(r#"{"imdbID":"tt1","Title":"N/A","Poster":"N/A"}"#).unwrap();

        // Act
        let record = item.to_record();

        // Assert
        assert_eq!(record.title, "Untitled");
        assert_eq!(record.poster_url, None);
        assert_eq!(record.imdb_id.as_deref(), Some("tt1"));
    }
}
