//! The FilterPipeline orchestrates multiple filters.

use crate::traits::Filter;
use anyhow::Result;
use data_loader::MovieId;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new(table.clone(), "drama"))
///     .add_filter(MinimumRatingFilter::new(table.clone(), 8.0));
///
/// let pool = pipeline.apply(table.all_movie_ids())?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the pipeline
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the candidates.
    ///
    /// An empty pipeline returns the input unchanged.
    pub fn apply(&self, candidates: Vec<MovieId>) -> Result<Vec<MovieId>> {
        let mut current = candidates;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::MinimumRatingFilter;
    use data_loader::{Movie, MovieTable};
    use std::sync::Arc;

    fn rated(title: &str, rating: Option<f32>) -> Movie {
        Movie::new(0, Some(title.to_string()), Some("Drama".to_string()), None, rating)
    }

    #[test]
    fn test_empty_pipeline() {
        let pipeline = FilterPipeline::new();
        assert!(pipeline.is_empty());

        let filtered = pipeline.apply(vec![0, 1, 2]).unwrap();
        assert_eq!(filtered, vec![0, 1, 2]);
    }

    #[test]
    fn test_single_filter() {
        let table = Arc::new(MovieTable::from_movies(vec![
            rated("Low", Some(7.7)),
            rated("High", Some(8.9)),
        ]));

        let pipeline = FilterPipeline::new()
            .add_filter(MinimumRatingFilter::new(table.clone(), 8.0));
        assert_eq!(pipeline.len(), 1);

        let filtered = pipeline.apply(table.all_movie_ids()).unwrap();
        assert_eq!(filtered, vec![1]);
    }
}
