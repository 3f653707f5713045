//! Core domain types for the movie table.
//!
//! A `Movie` is one row of the IMDB top-1000 CSV. The `MovieTable` owns
//! every row plus the derived genre catalog and is never mutated once
//! loading finishes.

use crate::index::build_genre_catalog;

/// Position of a movie in the loaded table (0-based, file order)
pub type MovieId = usize;

// =============================================================================
// Movie
// =============================================================================

/// One movie record.
///
/// Optional fields are `None` when the CSV cell was empty (or, for the
/// rating, not a number).
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: Option<String>,
    /// Comma-separated genre tags, e.g. "Action, Adventure, Sci-Fi"
    pub genre: Option<String>,
    pub overview: Option<String>,
    /// IMDB rating on a 0-10 scale
    pub rating: Option<f32>,
    /// Genre and overview joined by a space; input text for the TF-IDF index
    pub combined_features: String,
}

impl Movie {
    /// Build a movie and derive its `combined_features` text.
    pub fn new(
        id: MovieId,
        title: Option<String>,
        genre: Option<String>,
        overview: Option<String>,
        rating: Option<f32>,
    ) -> Self {
        let combined_features = format!(
            "{} {}",
            genre.as_deref().unwrap_or(""),
            overview.as_deref().unwrap_or("")
        );

        Self {
            id,
            title,
            genre,
            overview,
            rating,
            combined_features,
        }
    }

    /// Individual genre tags, trimmed, empty tags skipped.
    pub fn genre_tags(&self) -> impl Iterator<Item = &str> {
        self.genre
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }

    /// Case-insensitive substring match against the raw genre field.
    ///
    /// `needle_lower` must already be lowercase. Movies without a genre
    /// never match.
    pub fn genre_contains(&self, needle_lower: &str) -> bool {
        self.genre
            .as_deref()
            .is_some_and(|genre| genre.to_lowercase().contains(needle_lower))
    }
}

// =============================================================================
// MovieTable - the in-memory table
// =============================================================================

/// All movies in file order, plus the sorted genre catalog.
#[derive(Debug, Default)]
pub struct MovieTable {
    pub(crate) movies: Vec<Movie>,
    pub(crate) genres: Vec<String>,
}

impl MovieTable {
    /// Creates a new, empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from already-parsed movies.
    ///
    /// Ids are reassigned to row positions so `get_movie(id)` is an index.
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        let movies: Vec<Movie> = movies
            .into_iter()
            .enumerate()
            .map(|(id, movie)| Movie { id, ..movie })
            .collect();
        let genres = build_genre_catalog(&movies);

        Self { movies, genres }
    }

    /// Get a movie by id
    pub fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    /// All movies in file order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Every movie id, in file order
    pub fn all_movie_ids(&self) -> Vec<MovieId> {
        (0..self.movies.len()).collect()
    }

    /// Sorted, deduplicated genre tags
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}
