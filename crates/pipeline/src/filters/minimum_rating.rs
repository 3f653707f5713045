//! Filter to ensure a minimum IMDB rating.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::{MovieId, MovieTable};
use std::sync::Arc;

/// Removes candidates rated below a threshold.
///
/// Movies with no rating never pass.
pub struct MinimumRatingFilter {
    table: Arc<MovieTable>,
    min_rating: f32,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `table` - Shared reference to the movie table for lookups
    /// * `min_rating` - Inclusive lower bound on the IMDB rating
    pub fn new(table: Arc<MovieTable>, min_rating: f32) -> Self {
        Self { table, min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, candidates: Vec<MovieId>) -> Result<Vec<MovieId>> {
        let filtered: Vec<MovieId> = candidates
            .into_iter()
            .filter(|&id| {
                self.table
                    .get_movie(id)
                    .and_then(|movie| movie.rating)
                    .is_some_and(|rating| rating >= self.min_rating)
            })
            .collect();

        Ok(filtered)
    }
}
