//! Building a `MovieTable` from disk and deriving the genre catalog.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;
use tracing::info;

impl MovieTable {
    /// Load the movie CSV at `path`.
    ///
    /// A missing file is reported as `DataLoadError::FileNotFound` so callers
    /// can tell it apart from malformed content.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => DataLoadError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DataLoadError::IoError(e),
        })?;

        let movies = parser::parse_movies(BufReader::new(file))?;
        let table = Self::from_movies(movies);

        info!(
            movies = table.len(),
            genres = table.genres().len(),
            "Loaded movie table from {}",
            path.display()
        );
        Ok(table)
    }
}

/// Flatten every movie's genre tags into a sorted, deduplicated list.
///
/// Movies without a genre contribute nothing and empty tags are skipped.
pub fn build_genre_catalog(movies: &[Movie]) -> Vec<String> {
    movies
        .iter()
        .flat_map(|movie| movie.genre_tags())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(genre: Option<&str>) -> Movie {
        Movie::new(0, Some("T".to_string()), genre.map(str::to_string), None, None)
    }

    #[test]
    fn test_catalog_sorted_and_deduplicated() {
        let movies = vec![
            movie(Some("Drama, Crime")),
            movie(Some("Crime,Drama ,  Action")),
            movie(None),
            movie(Some("Comedy, , ")),
        ];

        let catalog = build_genre_catalog(&movies);
        assert_eq!(catalog, vec!["Action", "Comedy", "Crime", "Drama"]);
        assert!(catalog.iter().all(|g| !g.is_empty()));
    }

    #[test]
    fn test_empty_catalog() {
        assert!(build_genre_catalog(&[]).is_empty());
        assert!(build_genre_catalog(&[movie(None)]).is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let err = MovieTable::load_from_file(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    }

    #[test]
    fn test_load_dataset() {
        // Runs only when the IMDB dataset is placed at the workspace root
        let path = Path::new("../../imdb_top_1000.csv");

        if path.exists() {
            let table = MovieTable::load_from_file(path).unwrap();
            assert_eq!(table.len(), 1000);
            assert!(table.genres().contains(&"Drama".to_string()));
        }
    }
}
