//! Bundled movies served when no API key works.

use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;

use crate::movie::MovieRecord;

/// Static fallback set, in display order.
static LOCAL_MOVIES: LazyLock<Vec<MovieRecord>> = LazyLock::new(|| {
    vec![
        local(
            1,
            "tt0111161",
            "The Shawshank Redemption",
            "1994",
            "Frank Darabont",
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
            "9.3",
            "Drama",
        ),
        local(
            2,
            "tt0068646",
            "The Godfather",
            "1972",
            "Francis Ford Coppola",
            "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
            "9.2",
            "Crime, Drama",
        ),
        local(
            3,
            "tt0468569",
            "The Dark Knight",
            "2008",
            "Christopher Nolan",
            "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
            "9.0",
            "Action, Crime, Drama",
        ),
        local(
            4,
            "tt0109830",
            "Forrest Gump",
            "1994",
            "Robert Zemeckis",
            "The history of the United States from the 1950s to the '70s unfolds from the perspective of an Alabama man with an IQ of 75.",
            "8.8",
            "Drama, Romance",
        ),
        local(
            5,
            "tt0120338",
            "Titanic",
            "1997",
            "James Cameron",
            "A seventeen-year-old aristocrat falls in love with a kind but poor artist aboard the luxurious, ill-fated R.M.S. Titanic.",
            "7.9",
            "Drama, Romance",
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn local(
    n: u32,
    imdb_id: &str,
    title: &str,
    year: &str,
    director: &str,
    plot: &str,
    rating: &str,
    genre: &str,
) -> MovieRecord {
    MovieRecord {
        imdb_id: Some(String::from(imdb_id)),
        year: Some(String::from(year)),
        director: Some(String::from(director)),
        plot: Some(String::from(plot)),
        detail_url: Some(format!("https://www.imdb.com/title/{imdb_id}/")),
        rating: Some(String::from(rating)),
        genre: Some(String::from(genre)),
        ..MovieRecord::new(format!("local-{n}"), title)
    }
}

/// The full fallback set.
#[must_use]
pub fn movies() -> Vec<MovieRecord> {
    LOCAL_MOVIES.clone()
}

/// The fallback entry for an IMDb ID, if bundled.
#[must_use]
pub fn by_imdb_id(imdb_id: &str) -> Option<MovieRecord> {
    LOCAL_MOVIES
        .iter()
        .find(|m| m.imdb_id.as_deref() == Some(imdb_id))
        .cloned()
}

/// Fallback entries matching `query` on title, director or genre.
///
/// Matching is case-insensitive after NFKC normalization. A blank query,
/// or one that matches nothing, yields the whole set.
#[must_use]
pub fn matching(query: &str) -> Vec<MovieRecord> {
    let needle = fold(query.trim());
    let total = LOCAL_MOVIES.len();

    let matched: Vec<MovieRecord> = if needle.is_empty() {
        Vec::new()
    } else {
        LOCAL_MOVIES
            .iter()
            .filter(|m| {
                [Some(m.title.as_str()), m.director.as_deref(), m.genre.as_deref()]
                    .into_iter()
                    .flatten()
                    .any(|field| fold(field).contains(&needle))
            })
            .cloned()
            .collect()
    };

    if matched.is_empty() {
        tracing::info!(
            "Serving all {} local fallback movie(s) for {:?}",
            total,
            query
        );
        movies()
    } else {
        tracing::info!(
            "Serving {} of {} local fallback movie(s) for {:?}",
            matched.len(),
            total,
            query
        );
        matched
    }
}

/// Case- and width-insensitive comparison key.
fn fold(value: &str) -> String {
    value.nfkc().collect::<String>().to_lowercase()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::indexing_slicing)]

    use tracing::subscriber::with_default;
    use tracing_mock::{expect, subscriber};

    use super::*;

    #[test]
    fn test_fallback_set_has_five_movies() {
        // Arrange & Act
        let all = movies();

        // Assert
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].id, "local-1");
        assert_eq!(all[4].title, "Titanic");
    }

    #[test]
    fn test_matching_filters_by_title() {
        // Arrange & Act
        let found = matching("godfather");

        // Assert
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].imdb_id.as_deref(), Some("tt0068646"));
    }

    #[test]
    fn test_matching_filters_by_genre_and_director() {
        // Arrange & Act
        let romance = matching("Romance");
        let nolan = matching("nolan");

        // Assert
        assert_eq!(romance.len(), 2);
        assert_eq!(nolan.len(), 1);
        assert_eq!(nolan[0].title, "The Dark Knight");
    }

    #[test]
    fn test_matching_is_width_insensitive() {
        // Arrange & Act (full-width "TITANIC")
        let found = matching("ＴＩＴＡＮＩＣ");

        // Assert
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn test_matching_without_hits_returns_everything() {
        // Arrange & Act & Assert
        assert_eq!(matching("zzzz").len(), 5);
        assert_eq!(matching("   ").len(), 5);
    }

    #[test]
    fn test_by_imdb_id() {
        // Arrange & Act & Assert
        assert_eq!(
            by_imdb_id("tt0109830").map(|m| m.title),
            Some(String::from("Forrest Gump"))
        );
        assert!(by_imdb_id("tt9999999").is_none());
    }

    #[test]
    fn test_matching_logs_served_count() {
        // Arrange
        let (subscriber, handle) = subscriber::mock()
            .event(expect::event().with_fields(expect::msg(
                "Serving 1 of 5 local fallback movie(s) for \"godfather\"",
            )))
            .only()
            .run_with_handle();

        // Act
        with_default(subscriber, || {
            let _served = matching("godfather");
        });

        // Assert
        handle.assert_finished();
    }
}
