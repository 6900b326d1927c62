//! Movie collection CRUD operations.

use anyhow::{Context, Result};
use rusqlite::{Connection, Row};

use super::prefix;

/// A stored movie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieDoc {
    /// Store-assigned ID (empty until saved).
    pub id: String,
    /// Title.
    pub title: String,
    /// Director (nullable).
    pub director: Option<String>,
    /// Release year or date label (nullable).
    pub year: Option<String>,
    /// IMDb ID (nullable).
    pub imdb_id: Option<String>,
    /// TMDB movie ID (nullable).
    pub tmdb_id: Option<u64>,
    /// Plot summary (nullable).
    pub plot: Option<String>,
    /// Poster URL (nullable).
    pub poster_url: Option<String>,
    /// Detail page URL (nullable).
    pub detail_url: Option<String>,
    /// Rating label (nullable).
    pub rating: Option<String>,
    /// Genres (nullable).
    pub genre: Option<String>,
}

const SELECT_COLUMNS: &str = "SELECT id, title, director, year, imdb_id, tmdb_id, plot,
        poster_url, detail_url, rating, genre
 FROM movies";

fn from_row(row: &Row<'_>) -> rusqlite::Result<MovieDoc> {
    let id: i64 = row.get(0)?;
    Ok(MovieDoc {
        id: id.to_string(),
        title: row.get(1)?,
        director: row.get(2)?,
        year: row.get(3)?,
        imdb_id: row.get(4)?,
        tmdb_id: row.get(5)?,
        plot: row.get(6)?,
        poster_url: row.get(7)?,
        detail_url: row.get(8)?,
        rating: row.get(9)?,
        genre: row.get(10)?,
    })
}

/// Stores a movie and returns its new ID. `movie.id` is ignored.
///
/// # Errors
///
/// Returns an error if the database operation fails.
pub fn add_movie(conn: &Connection, movie: &MovieDoc) -> Result<String> {
    conn.execute(
        "INSERT INTO movies (
            title, director, year, imdb_id, tmdb_id, plot,
            poster_url, detail_url, rating, genre, created_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        rusqlite::params![
            movie.title,
            movie.director,
            movie.year,
            movie.imdb_id,
            movie.tmdb_id,
            movie.plot,
            movie.poster_url,
            movie.detail_url,
            movie.rating,
            movie.genre,
            chrono::Utc::now().to_rfc3339(),
        ],
    )
    .with_context(|| format!("failed to add movie {}", movie.title))?;

    let id = conn.last_insert_rowid().to_string();
    tracing::debug!(id = %id, title = %movie.title, "Stored movie");
    Ok(id)
}

/// Stores several movies in one transaction and returns their new IDs.
///
/// Nothing is stored if any insert fails.
///
/// # Errors
///
/// Returns an error if the transaction or any insert fails.
pub fn add_movies(conn: &Connection, movies: &[MovieDoc]) -> Result<Vec<String>> {
    let tx = conn
        .unchecked_transaction()
        .context("failed to begin movies transaction")?;
    let ids = movies
        .iter()
        .map(|movie| add_movie(&tx, movie))
        .collect::<Result<Vec<_>>>()?;
    tx.commit().context("failed to commit movies")?;
    Ok(ids)
}

/// Loads all movies in insertion order.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn load_movies(conn: &Connection) -> Result<Vec<MovieDoc>> {
    let sql = format!("{SELECT_COLUMNS} ORDER BY id");
    let mut stmt = conn
        .prepare(&sql)
        .context("failed to prepare movies query")?;

    let rows = stmt
        .query_map([], from_row)
        .context("failed to query movies")?;

    rows.collect::<std::result::Result<Vec<_>, _>>()
        .context("failed to read movies rows")
}

/// Movies whose title or director starts with `keyword`.
///
/// Title matches come first, then director matches; each movie appears
/// once. A blank keyword lists every movie.
///
/// # Errors
///
/// Returns an error if the database query fails.
pub fn search_movies(conn: &Connection, keyword: &str) -> Result<Vec<MovieDoc>> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return load_movies(conn);
    }

    let (lower, upper) = prefix::bounds(keyword);
    let mut found: Vec<MovieDoc> = Vec::new();

    for field in ["title", "director"] {
        let sql = format!("{SELECT_COLUMNS} WHERE {field} >= ?1 AND {field} <= ?2 ORDER BY {field}, id");
        let mut stmt = conn
            .prepare(&sql)
            .with_context(|| format!("failed to prepare movies {field} search"))?;
        let rows = stmt
            .query_map([&lower, &upper], from_row)
            .with_context(|| format!("failed to search movies by {field}"))?;

        for row in rows {
            let movie = row.context("failed to read movies rows")?;
            if !found.iter().any(|m| m.id == movie.id) {
                found.push(movie);
            }
        }
    }

    tracing::debug!(keyword, count = found.len(), "Searched movies");
    Ok(found)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;
    use crate::migrations::run_migrations;

    fn setup_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn movie(title: &str, director: Option<&str>) -> MovieDoc {
        MovieDoc {
            title: String::from(title),
            director: director.map(String::from),
            ..MovieDoc::default()
        }
    }

    #[test]
    fn test_add_and_load_roundtrip() {
        // Arrange
        let conn = setup_db();
        let doc = MovieDoc {
            imdb_id: Some(String::from("tt0068646")),
            tmdb_id: Some(238),
            year: Some(String::from("1972")),
            ..movie("The Godfather", Some("Francis Ford Coppola"))
        };

        // Act
        let id = add_movie(&conn, &doc).unwrap();
        let loaded = load_movies(&conn).unwrap();

        // Assert
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], MovieDoc { id, ..doc });
    }

    #[test]
    fn test_add_assigns_distinct_ids() {
        // Arrange
        let conn = setup_db();

        // Act
        let first = add_movie(&conn, &movie("Heat", None)).unwrap();
        let second = add_movie(&conn, &movie("Heat", None)).unwrap();

        // Assert
        assert_ne!(first, second);
    }

    #[test]
    fn test_add_movies_stores_batch() {
        // Arrange
        let conn = setup_db();
        let batch = [movie("Heat", None), movie("Ronin", None)];

        // Act
        let ids = add_movies(&conn, &batch).unwrap();

        // Assert
        assert_eq!(ids.len(), 2);
        assert_eq!(load_movies(&conn).unwrap().len(), 2);
    }

    #[test]
    fn test_add_movies_rolls_back_on_failure() {
        // Arrange
        let conn = setup_db();
        conn.execute_batch(
            "CREATE TRIGGER reject_bad BEFORE INSERT ON movies
             WHEN NEW.title = 'Bad'
             BEGIN SELECT RAISE(ABORT, 'rejected'); END;",
        )
        .unwrap();
        let batch = [movie("Heat", None), movie("Bad", None), movie("Ronin", None)];

        // Act
        let result = add_movies(&conn, &batch);

        // Assert
        assert!(result.is_err());
        assert!(load_movies(&conn).unwrap().is_empty());
    }

    #[test]
    fn test_search_matches_title_prefix_only() {
        // Arrange
        let conn = setup_db();
        add_movie(&conn, &movie("The Godfather", None)).unwrap();
        add_movie(&conn, &movie("Godfather Returns", None)).unwrap();

        // Act
        let found = search_movies(&conn, "The").unwrap();

        // Assert
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "The Godfather");
    }

    #[test]
    fn test_search_merges_title_then_director_without_duplicates() {
        // Arrange
        let conn = setup_db();
        add_movie(&conn, &movie("Nolan's Film", Some("Nolan Smith"))).unwrap();
        add_movie(&conn, &movie("Inception", Some("Nolan"))).unwrap();
        add_movie(&conn, &movie("Heat", Some("Michael Mann"))).unwrap();

        // Act
        let found = search_movies(&conn, "Nolan").unwrap();

        // Assert
        let titles: Vec<&str> = found.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Nolan's Film", "Inception"]);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        // Arrange
        let conn = setup_db();
        add_movie(&conn, &movie("Titanic", None)).unwrap();

        // Act & Assert
        assert!(search_movies(&conn, "titanic").unwrap().is_empty());
        assert_eq!(search_movies(&conn, "Tita").unwrap().len(), 1);
    }

    #[test]
    fn test_search_cjk_prefix() {
        // Arrange
        let conn = setup_db();
        add_movie(&conn, &movie("鬥陣俱樂部", Some("大衛芬奇"))).unwrap();

        // Act
        let found = search_movies(&conn, "鬥陣").unwrap();

        // Assert
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_blank_keyword_lists_all() {
        // Arrange
        let conn = setup_db();
        add_movie(&conn, &movie("A", None)).unwrap();
        add_movie(&conn, &movie("B", None)).unwrap();

        // Act
        let found = search_movies(&conn, "  ").unwrap();

        // Assert
        assert_eq!(found.len(), 2);
    }
}
