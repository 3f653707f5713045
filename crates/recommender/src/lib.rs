//! Recommendation logic for the movie mood assistant.
//!
//! This crate ties the loaded table, the sentiment scorer and the TF-IDF
//! index together in an [`AppContext`], and exposes the three ways of
//! picking movies through [`Recommender`]:
//! - filtered, mood-aware recommendations
//! - random picks
//! - content-similar movies

pub mod context;
pub mod recommender;

pub use context::AppContext;
pub use recommender::{
    mood_allows, RecommendOutcome, Recommendation, RecommendationQuery, Recommender, SimilarMovie,
    NO_RECOMMENDATION_MESSAGE,
};
