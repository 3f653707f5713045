//! Candidate filtering and text indexing for movie recommendations.
//!
//! This crate provides:
//! - Filter trait and implementations for narrowing the candidate pool
//! - FilterPipeline for composing filters
//! - TfIdfIndex for content similarity over genre and overview text
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterPipeline, TfIdfIndex};
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(GenreFilter::new(table.clone(), "comedy"))
//!     .add_filter(MinimumRatingFilter::new(table.clone(), 8.0));
//! let pool = pipeline.apply(table.all_movie_ids())?;
//!
//! let index = TfIdfIndex::fit(&table);
//! let similar = index.similar_to(pool[0], 5);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod tfidf;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use tfidf::TfIdfIndex;
