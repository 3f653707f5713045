//! # Recommender
//!
//! Turns a query (genre, mood, minimum rating) into a short list of movies:
//! 1. Build the candidate pool with the filter pipeline
//! 2. Shuffle it
//! 3. Score each overview's polarity and apply the mood rule
//! 4. Stop once enough movies qualify
//!
//! Randomness always comes from the caller's RNG so runs can be seeded.

use std::sync::Arc;

use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use tracing::debug;

use crate::context::AppContext;
use data_loader::{Movie, MovieId};
use pipeline::FilterPipeline;
use pipeline::filters::{GenreFilter, MinimumRatingFilter};
use sentiment::SentimentLabel;

/// Message shown when a query produces nothing
pub const NO_RECOMMENDATION_MESSAGE: &str = "No suitable movie recommendation found.";

/// Overview text scored by the random picker when a movie has none
const MISSING_OVERVIEW_TEXT: &str = "None";

/// What the user asked for
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationQuery {
    pub genre: Option<String>,
    pub mood: Option<String>,
    pub min_rating: Option<f32>,
    pub count: usize,
}

impl RecommendationQuery {
    /// Unfiltered query for `count` movies
    pub fn new(count: usize) -> Self {
        Self {
            genre: None,
            mood: None,
            min_rating: None,
            count,
        }
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = Some(mood.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f32) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    /// Genre, unless empty
    fn genre(&self) -> Option<&str> {
        self.genre.as_deref().filter(|g| !g.is_empty())
    }

    /// Mood, unless empty. Whitespace still counts as a mood.
    fn mood(&self) -> Option<&str> {
        self.mood.as_deref().filter(|m| !m.is_empty())
    }
}

/// One recommended movie
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub polarity: f32,
    pub label: SentimentLabel,
}

impl Recommendation {
    fn new(movie_id: MovieId, title: &str, polarity: f32) -> Self {
        Self {
            movie_id,
            title: title.to_string(),
            polarity,
            label: SentimentLabel::from_polarity(polarity),
        }
    }
}

/// Result of a filtered recommendation request
#[derive(Debug, Clone, PartialEq)]
pub enum RecommendOutcome {
    Found(Vec<Recommendation>),
    /// Nothing in the candidate pool qualified
    NoneFound,
}

impl RecommendOutcome {
    /// Recommendations, empty for `NoneFound`
    pub fn recommendations(&self) -> &[Recommendation] {
        match self {
            RecommendOutcome::Found(recs) => recs,
            RecommendOutcome::NoneFound => &[],
        }
    }

    pub fn is_none_found(&self) -> bool {
        matches!(self, RecommendOutcome::NoneFound)
    }
}

/// A movie close to another one in TF-IDF space
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarMovie {
    pub movie_id: MovieId,
    pub title: String,
    pub score: f32,
}

/// Mood compatibility rule.
///
/// Without a mood every scored movie qualifies. With one, a movie qualifies
/// when the mood is negative and the movie is positive, or when the movie is
/// not negative.
pub fn mood_allows(mood_polarity: Option<f32>, polarity: f32) -> bool {
    match mood_polarity {
        None => true,
        Some(mood) => (mood < 0.0 && polarity > 0.0) || polarity >= 0.0,
    }
}

/// Picks movies out of the shared context
#[derive(Clone)]
pub struct Recommender {
    context: Arc<AppContext>,
}

impl Recommender {
    pub fn new(context: Arc<AppContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    /// Filtered, mood-aware recommendations.
    ///
    /// Returns at most `query.count` movies, or `NoneFound` when nothing in
    /// the candidate pool qualifies.
    pub fn recommend<R: Rng + ?Sized>(
        &self,
        query: &RecommendationQuery,
        rng: &mut R,
    ) -> Result<RecommendOutcome> {
        let table = &self.context.table;
        let scorer = &self.context.scorer;

        let mut pool = self
            .build_pipeline(query)
            .apply(table.all_movie_ids())
            .context("Failed to filter candidate pool")?;
        pool.shuffle(rng);

        let mood_polarity = query.mood().map(|mood| scorer.polarity(mood));
        debug!(
            pool = pool.len(),
            ?mood_polarity,
            "Scoring candidates for {:?}",
            query
        );

        let mut recommendations = Vec::with_capacity(query.count);
        for movie_id in pool {
            if recommendations.len() >= query.count {
                break;
            }

            let Some(movie) = table.get_movie(movie_id) else {
                continue;
            };
            let (Some(title), Some(overview)) = (&movie.title, &movie.overview) else {
                continue;
            };

            let polarity = scorer.polarity(overview);
            if mood_allows(mood_polarity, polarity) {
                recommendations.push(Recommendation::new(movie_id, title, polarity));
            }
        }

        debug!(found = recommendations.len(), "Recommendation request done");
        if recommendations.is_empty() {
            Ok(RecommendOutcome::NoneFound)
        } else {
            Ok(RecommendOutcome::Found(recommendations))
        }
    }

    /// Uniformly sample titled movies, ignoring every filter.
    ///
    /// Returns `min(count, titled movies)` picks. A missing overview is
    /// scored as the text "None".
    pub fn random_picks<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<Recommendation> {
        let titled: Vec<&Movie> = self
            .context
            .table
            .movies()
            .iter()
            .filter(|movie| movie.title.is_some())
            .collect();

        titled
            .choose_multiple(rng, count)
            .filter_map(|movie| {
                let title = movie.title.as_deref()?;
                let overview = movie.overview.as_deref().unwrap_or(MISSING_OVERVIEW_TEXT);
                let polarity = self.context.scorer.polarity(overview);
                Some(Recommendation::new(movie.id, title, polarity))
            })
            .collect()
    }

    /// Titled movies most similar to `movie_id` by genre and overview text.
    pub fn similar_to(&self, movie_id: MovieId, count: usize) -> Vec<SimilarMovie> {
        let table = &self.context.table;

        self.context
            .tfidf
            .similar_to(movie_id, table.len())
            .into_iter()
            .filter_map(|(id, score)| {
                let title = table.get_movie(id)?.title.clone()?;
                Some(SimilarMovie {
                    movie_id: id,
                    title,
                    score,
                })
            })
            .take(count)
            .collect()
    }

    fn build_pipeline(&self, query: &RecommendationQuery) -> FilterPipeline {
        let table = &self.context.table;
        let mut pipeline = FilterPipeline::new();

        if let Some(genre) = query.genre() {
            pipeline = pipeline.add_filter(GenreFilter::new(table.clone(), genre));
        }
        if let Some(min_rating) = query.min_rating {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(table.clone(), min_rating));
        }
        pipeline
    }
}
