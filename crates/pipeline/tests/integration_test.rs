//! Integration tests for the pipeline.
//!
//! These tests verify that filters and the TF-IDF index work together
//! on a small but realistic table.

use data_loader::{Movie, MovieTable};
use pipeline::filters::*;
use pipeline::{FilterPipeline, TfIdfIndex};
use std::sync::Arc;

fn create_test_table() -> Arc<MovieTable> {
    let movie = |title: &str, genre: &str, overview: &str, rating: Option<f32>| {
        Movie::new(
            0,
            Some(title.to_string()),
            Some(genre.to_string()),
            Some(overview.to_string()),
            rating,
        )
    };

    Arc::new(MovieTable::from_movies(vec![
        movie("Space Saga", "Action, Sci-Fi", "Rebels fight an empire across the galaxy.", Some(8.7)),
        movie("Quiet Farm", "Drama", "A farmer struggles through a long drought.", Some(7.9)),
        movie("Galaxy Rebels", "Adventure, Sci-Fi", "Rebels steal plans from the galactic empire.", Some(8.1)),
        movie("Wedding Chaos", "Comedy, Romance", "Two families collide at a wedding.", Some(7.7)),
        movie("Lost Reel", "Sci-Fi", "A film nobody rated.", None),
    ]))
}

#[test]
fn test_full_pipeline_filters_correctly() {
    let table = create_test_table();

    let pipeline = FilterPipeline::new()
        .add_filter(GenreFilter::new(table.clone(), "sci-fi"))
        .add_filter(MinimumRatingFilter::new(table.clone(), 8.0));

    let filtered = pipeline.apply(table.all_movie_ids()).unwrap();

    // Drama and comedy dropped by genre, the unrated sci-fi by rating
    assert_eq!(filtered, vec![0, 2]);
}

#[test]
fn test_filters_can_empty_the_pool() {
    let table = create_test_table();

    let pipeline = FilterPipeline::new()
        .add_filter(GenreFilter::new(table.clone(), "comedy"))
        .add_filter(MinimumRatingFilter::new(table.clone(), 9.0));

    assert!(pipeline.apply(table.all_movie_ids()).unwrap().is_empty());
}

#[test]
fn test_tfidf_over_filtered_pool() {
    let table = create_test_table();
    let index = TfIdfIndex::fit(&table);
    assert_eq!(index.len(), table.len());

    let pool = FilterPipeline::new()
        .add_filter(GenreFilter::new(table.clone(), "sci-fi"))
        .apply(table.all_movie_ids())
        .unwrap();

    let similar = index.similar_to(pool[0], 3);
    assert_eq!(similar[0].0, 2, "Galaxy Rebels shares the most terms with Space Saga");

    for (_, score) in &similar {
        assert!(*score > 0.0 && *score <= 1.0 + 1e-5);
    }
}
