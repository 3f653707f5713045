//! Application-wide state built once at startup.

use data_loader::MovieTable;
use pipeline::TfIdfIndex;
use sentiment::PolarityScorer;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Everything a recommendation request reads from.
///
/// Nothing in here changes after construction; the context is shared
/// behind an `Arc` by the recommender and the interactive driver.
pub struct AppContext {
    pub table: Arc<MovieTable>,
    pub scorer: Arc<dyn PolarityScorer>,
    pub tfidf: TfIdfIndex,
}

impl AppContext {
    /// Wrap a loaded table and fit the TF-IDF index over it.
    pub fn new(table: MovieTable, scorer: Arc<dyn PolarityScorer>) -> Self {
        let start = Instant::now();
        let tfidf = TfIdfIndex::fit(&table);
        info!(
            scorer = scorer.name(),
            "Application context ready in {:.2?}",
            start.elapsed()
        );

        Self {
            table: Arc::new(table),
            scorer,
            tfidf,
        }
    }

    /// Sorted genre catalog of the loaded table
    pub fn genres(&self) -> &[String] {
        self.table.genres()
    }
}
