//! Sentiment polarity scoring.
//!
//! The recommender only needs one number per text: a polarity in
//! `[-1.0, 1.0]` where negative means negative sentiment and `0.0` is
//! neutral. This crate exposes that through the [`PolarityScorer`] trait so
//! the backend can be swapped, and ships a lexicon-based implementation.

use std::fmt;
use thiserror::Error;

pub mod lexicon;

pub use lexicon::LexiconScorer;

/// Errors raised while building a scorer
#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("Failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Polarity for '{word}' must be within [-1, 1], got {value}")]
    InvalidPolarity { word: String, value: f32 },
}

pub type Result<T> = std::result::Result<T, SentimentError>;

/// Anything that can turn text into a polarity.
///
/// `Send + Sync` so a single scorer can sit behind an `Arc` in the
/// application context.
pub trait PolarityScorer: Send + Sync {
    /// Returns the name of this scorer (for logging/debugging)
    fn name(&self) -> &str;

    /// Polarity of `text`, always within `[-1.0, 1.0]`.
    fn polarity(&self, text: &str) -> f32;
}

/// Coarse sentiment bucket used when printing results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    pub fn from_polarity(polarity: f32) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SentimentLabel::Positive => "Positive 😄",
            SentimentLabel::Negative => "Negative 😔",
            SentimentLabel::Neutral => "neutral 😐",
        };
        f.write_str(text)
    }
}
