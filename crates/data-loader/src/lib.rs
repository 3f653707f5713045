//! # Data Loader Crate
//!
//! This crate loads the IMDB top-1000 movie CSV into memory.
//!
//! ## Main Components
//!
//! - **types**: `Movie` and the read-only `MovieTable`
//! - **parser**: CSV decoding into `Movie` records
//! - **index**: file loading and the genre catalog
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieTable;
//! use std::path::Path;
//!
//! let table = MovieTable::load_from_file(Path::new("imdb_top_1000.csv"))?;
//! println!("{} movies, {} genres", table.len(), table.genres().len());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::build_genre_catalog;
pub use types::{Movie, MovieId, MovieTable};

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_movie(title: &str, genre: &str, overview: &str, rating: f32) -> Movie {
        Movie::new(
            0,
            Some(title.to_string()),
            Some(genre.to_string()),
            Some(overview.to_string()),
            Some(rating),
        )
    }

    #[test]
    fn test_table_creation() {
        let table = MovieTable::new();
        assert!(table.is_empty());
        assert!(table.genres().is_empty());
    }

    #[test]
    fn test_from_movies_assigns_row_ids() {
        let mut stray = sample_movie("B", "Drama", "A sad story", 7.0);
        stray.id = 42;
        let table = MovieTable::from_movies(vec![
            sample_movie("A", "Comedy", "A happy story", 8.0),
            stray,
        ]);

        assert_eq!(table.len(), 2);
        assert_eq!(table.get_movie(1).unwrap().title.as_deref(), Some("B"));
        assert_eq!(table.get_movie(1).unwrap().id, 1);
        assert_eq!(table.all_movie_ids(), vec![0, 1]);
        assert_eq!(table.genres(), ["Comedy", "Drama"]);
    }

    #[test]
    fn test_genre_contains_is_case_insensitive() {
        let movie = sample_movie("A", "Action, Sci-Fi", "Robots", 8.0);
        assert!(movie.genre_contains("sci-fi"));
        assert!(movie.genre_contains("act"));
        assert!(!movie.genre_contains("drama"));

        let untagged = Movie::new(0, Some("B".to_string()), None, None, None);
        assert!(!untagged.genre_contains("drama"));
    }

    #[test]
    fn test_empty_queries() {
        let table = MovieTable::new();
        assert!(table.get_movie(999).is_none());
        assert!(table.all_movie_ids().is_empty());
    }
}
