//! Filter to keep only movies tagged with a requested genre.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{MovieId, MovieTable};
use std::sync::Arc;

/// Keeps candidates whose genre field contains a substring.
///
/// The match is case-insensitive and runs against the raw comma-separated
/// field, so "sci" matches "Action, Sci-Fi". Movies without a genre are
/// dropped.
pub struct GenreFilter {
    table: Arc<MovieTable>,
    needle: String,
}

impl GenreFilter {
    /// Create a new GenreFilter.
    ///
    /// # Arguments
    /// * `table` - Shared reference to the movie table for lookups
    /// * `genre` - Genre text to look for, any case
    pub fn new(table: Arc<MovieTable>, genre: impl AsRef<str>) -> Self {
        Self {
            table,
            needle: genre.as_ref().to_lowercase(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, candidates: Vec<MovieId>) -> Result<Vec<MovieId>> {
        let filtered: Vec<MovieId> = candidates
            .into_iter()
            .filter(|&id| {
                self.table
                    .get_movie(id)
                    .is_some_and(|movie| movie.genre_contains(&self.needle))
            })
            .collect();
        Ok(filtered)
    }
}
