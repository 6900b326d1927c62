//! TMDB API response types, request parameters and `MovieRecord` mapping.

use serde::Deserialize;

use crate::movie::{MovieRecord, present};

/// Poster image base (w500 rendition).
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Public movie page prefix.
const MOVIE_PAGE_URL: &str = "https://www.themoviedb.org/movie/";

/// Number of cast members kept in `MovieRecord::actors`.
const MAX_ACTORS: usize = 5;

// --- Movie lists ---

/// Response from `trending/movie/week`, `movie/popular`, `movie/upcoming`
/// and `search/movie`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieListResponse {
    /// Current page number.
    #[serde(default)]
    pub page: u32,
    /// Movies on this page.
    #[serde(default)]
    pub results: Vec<TmdbMovieResult>,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of results.
    #[serde(default)]
    pub total_results: u32,
}

/// A single movie in a list or search response.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieResult {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    #[serde(default)]
    pub title: Option<String>,
    /// Original title.
    #[serde(default)]
    pub original_title: Option<String>,
    /// Original language (ISO 639-1).
    #[serde(default)]
    pub original_language: Option<String>,
    /// Release date (YYYY-MM-DD or empty).
    #[serde(default)]
    pub release_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Popularity score.
    #[serde(default)]
    pub popularity: f64,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Genre IDs.
    #[serde(default)]
    pub genre_ids: Vec<u32>,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl TmdbMovieResult {
    /// Maps a list entry; director and genres need a detail lookup.
    #[must_use]
    pub fn to_record(&self) -> MovieRecord {
        MovieRecord {
            year: present(self.release_date.as_deref()),
            plot: present(self.overview.as_deref()),
            poster_url: image_url(self.poster_path.as_deref()),
            rating: rating(self.vote_average, self.vote_count),
            ..base_record(self.id, self.title.as_deref(), self.original_title.as_deref())
        }
    }
}

// --- Movie details ---

/// Response from `movie/{id}?append_to_response=credits`.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// IMDb ID.
    #[serde(default)]
    pub imdb_id: Option<String>,
    /// Localized title.
    #[serde(default)]
    pub title: Option<String>,
    /// Original title.
    #[serde(default)]
    pub original_title: Option<String>,
    /// Release date.
    #[serde(default)]
    pub release_date: Option<String>,
    /// Overview text.
    #[serde(default)]
    pub overview: Option<String>,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,
    /// Genres.
    #[serde(default)]
    pub genres: Vec<TmdbGenre>,
    /// Spoken languages.
    #[serde(default)]
    pub spoken_languages: Vec<TmdbSpokenLanguage>,
    /// Production countries.
    #[serde(default)]
    pub production_countries: Vec<TmdbCountry>,
    /// Vote average.
    #[serde(default)]
    pub vote_average: f64,
    /// Vote count.
    #[serde(default)]
    pub vote_count: u32,
    /// Revenue in USD (0 when unknown).
    #[serde(default)]
    pub revenue: u64,
    /// Poster image path.
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Cast and crew (present with `append_to_response=credits`).
    #[serde(default)]
    pub credits: Option<TmdbCredits>,
}

impl TmdbMovieDetails {
    /// Director names from the crew list, joined with ", ".
    #[must_use]
    pub fn director(&self) -> Option<String> {
        let crew = &self.credits.as_ref()?.crew;
        let names: Vec<&str> = crew
            .iter()
            .filter(|member| member.job.as_deref() == Some("Director"))
            .map(|member| member.name.as_str())
            .collect();
        join_names(&names)
    }

    /// Maps the full record.
    #[must_use]
    pub fn to_record(&self) -> MovieRecord {
        let genres: Vec<&str> = self.genres.iter().map(|g| g.name.as_str()).collect();
        let languages: Vec<&str> = self
            .spoken_languages
            .iter()
            .map(|l| l.english_name.as_deref().unwrap_or(l.name.as_str()))
            .collect();
        let countries: Vec<&str> = self
            .production_countries
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        let actors: Vec<&str> = self
            .credits
            .iter()
            .flat_map(|credits| credits.cast.iter())
            .take(MAX_ACTORS)
            .map(|member| member.name.as_str())
            .collect();

        MovieRecord {
            imdb_id: present(self.imdb_id.as_deref()),
            year: present(self.release_date.as_deref()),
            director: self.director(),
            plot: present(self.overview.as_deref()),
            poster_url: image_url(self.poster_path.as_deref()),
            rating: rating(self.vote_average, self.vote_count),
            genre: join_names(&genres),
            language: join_names(&languages),
            country: join_names(&countries),
            runtime: self
                .runtime
                .filter(|minutes| *minutes > 0)
                .map(|minutes| format!("{minutes} min")),
            actors: join_names(&actors),
            box_office: (self.revenue > 0).then(|| format!("${}", self.revenue)),
            ..base_record(self.id, self.title.as_deref(), self.original_title.as_deref())
        }
    }
}

/// Genre entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbGenre {
    /// Genre ID.
    pub id: u32,
    /// Genre name.
    pub name: String,
}

/// Spoken language entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSpokenLanguage {
    /// ISO 639-1 code.
    #[serde(default)]
    pub iso_639_1: String,
    /// English name.
    #[serde(default)]
    pub english_name: Option<String>,
    /// Native name.
    #[serde(default)]
    pub name: String,
}

/// Production country entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCountry {
    /// ISO 3166-1 code.
    #[serde(default)]
    pub iso_3166_1: String,
    /// Country name.
    #[serde(default)]
    pub name: String,
}

/// `credits` block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TmdbCredits {
    /// Cast in billing order.
    #[serde(default)]
    pub cast: Vec<TmdbCastMember>,
    /// Crew.
    #[serde(default)]
    pub crew: Vec<TmdbCrewMember>,
}

/// Cast entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCastMember {
    /// Person name.
    pub name: String,
    /// Character played.
    #[serde(default)]
    pub character: Option<String>,
}

/// Crew entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbCrewMember {
    /// Person name.
    pub name: String,
    /// Job title ("Director", "Screenplay", ...).
    #[serde(default)]
    pub job: Option<String>,
    /// Department.
    #[serde(default)]
    pub department: Option<String>,
}

// --- Error Response ---

/// TMDB API error envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbErrorResponse {
    /// TMDB error code.
    #[serde(default)]
    pub status_code: u32,
    /// Error message.
    #[serde(default)]
    pub status_message: String,
    /// Success flag (false for errors).
    #[serde(default)]
    pub success: Option<bool>,
}

// --- Parameters ---

/// Parameters for `search/movie`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMovieParams {
    /// Search query (required).
    pub query: String,
    /// Response language (e.g. "zh-TW"); `None` lets TMDB pick.
    pub language: Option<String>,
    /// Region filter (ISO 3166-1).
    pub region: Option<String>,
    /// Result page (1-500, default: 1).
    pub page: u32,
    /// Filter by year.
    pub year: Option<u32>,
    /// Include adult content.
    pub include_adult: bool,
}

impl SearchMovieParams {
    /// Creates new search params with the given query.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            language: None,
            region: None,
            page: 1,
            year: None,
            include_adult: false,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the year filter.
    #[must_use]
    pub const fn year(mut self, year: u32) -> Self {
        self.year = Some(year);
        self
    }

    /// Same search with language and region removed.
    #[must_use]
    pub fn without_locale(&self) -> Self {
        Self {
            language: None,
            region: None,
            ..self.clone()
        }
    }

    /// Whether a language or region is set.
    #[must_use]
    pub const fn is_localized(&self) -> bool {
        self.language.is_some() || self.region.is_some()
    }
}

/// Parameters for the trending, popular and upcoming lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Response language.
    pub language: Option<String>,
    /// Region filter.
    pub region: Option<String>,
    /// Result page (default: 1).
    pub page: u32,
}

impl ListParams {
    /// Creates list params for the first page.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            language: None,
            region: None,
            page: 1,
        }
    }

    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the region filter.
    #[must_use]
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }
}

// --- Mapping helpers ---

fn base_record(id: u64, title: Option<&str>, original_title: Option<&str>) -> MovieRecord {
    let title = present(title)
        .or_else(|| present(original_title))
        .unwrap_or_else(|| String::from("Untitled"));
    MovieRecord {
        tmdb_id: Some(id),
        detail_url: Some(format!("{MOVIE_PAGE_URL}{id}")),
        ..MovieRecord::new(format!("tmdb-{id}"), title)
    }
}

/// Absolute poster URL for a TMDB image path.
fn image_url(path: Option<&str>) -> Option<String> {
    present(path).map(|p| {
        if p.starts_with('/') {
            format!("{IMAGE_BASE_URL}{p}")
        } else {
            format!("{IMAGE_BASE_URL}/{p}")
        }
    })
}

/// One-decimal rating label; unrated movies have none.
fn rating(vote_average: f64, vote_count: u32) -> Option<String> {
    (vote_count > 0 && vote_average > 0.0).then(|| format!("{vote_average:.1}"))
}

fn join_names(names: &[&str]) -> Option<String> {
    let joined = names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    (!joined.is_empty()).then_some(joined)
}
