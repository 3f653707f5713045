//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a candidate pool.

use anyhow::Result;
use data_loader::MovieId;

/// Core trait for narrowing down a candidate pool.
///
/// Filters take ownership of the pool and hand back the survivors in the
/// same relative order.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of candidate movie ids.
    fn apply(&self, candidates: Vec<MovieId>) -> Result<Vec<MovieId>>;
}
