//! TF-IDF index over each movie's `combined_features` text.
//!
//! Fitting follows the usual smoothed formulation:
//! - tokens are lowercase alphanumeric runs of at least two characters
//! - common English stop words are dropped (a compact subset of the usual
//!   English list, not the full one)
//! - `idf(t) = ln((1 + n) / (1 + df(t))) + 1`
//! - weights are raw term counts times idf, L2-normalised per document
//!
//! Because every vector has unit length, cosine similarity is a plain dot
//! product. No all-pairs matrix is kept; `similar_to` scores one query
//! against the whole corpus on demand.

use data_loader::{MovieId, MovieTable};
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::info;

/// Subset of the common English stop word list
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "alone", "along",
    "already", "also", "although", "always", "am", "among", "an", "and", "another", "any",
    "anyone", "anything", "are", "around", "as", "at", "be", "became", "because", "become",
    "becomes", "been", "before", "behind", "being", "between", "both", "but", "by", "can",
    "could", "do", "does", "down", "during", "each", "either", "else", "enough", "even",
    "ever", "every", "few", "find", "first", "for", "from", "further", "get", "give", "go",
    "had", "has", "have", "he", "her", "here", "hers", "herself", "him", "himself", "his",
    "how", "however", "if", "in", "into", "is", "it", "its", "itself", "just", "last",
    "least", "less", "made", "many", "may", "me", "might", "more", "most", "much", "must",
    "my", "myself", "neither", "never", "no", "nor", "not", "now", "of", "off", "often",
    "on", "once", "one", "only", "or", "other", "others", "our", "ours", "ourselves", "out",
    "over", "own", "per", "rather", "same", "see", "seem", "seems", "she", "should", "since",
    "so", "some", "something", "still", "such", "take", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "though", "through", "thus", "to", "together", "too", "toward", "towards", "two",
    "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "where", "whether", "which", "while", "who", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Sparse unit-length document vector, sorted by term id
type SparseVector = Vec<(usize, f32)>;

/// Fitted TF-IDF model plus one vector per movie.
#[derive(Debug, Clone, Default)]
pub struct TfIdfIndex {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    documents: Vec<SparseVector>,
}

impl TfIdfIndex {
    /// Fit the vectorizer over every movie in the table.
    ///
    /// Document `i` corresponds to `MovieId` `i`.
    pub fn fit(table: &MovieTable) -> Self {
        let texts: Vec<&str> = table
            .movies()
            .iter()
            .map(|m| m.combined_features.as_str())
            .collect();
        let index = Self::fit_texts(&texts);

        info!(
            documents = index.len(),
            vocabulary = index.vocabulary_len(),
            "Fitted TF-IDF index"
        );
        index
    }

    /// Fit over raw texts.
    pub fn fit_texts(texts: &[&str]) -> Self {
        // Term counts per document, tokenised in parallel
        let term_counts: Vec<HashMap<String, u32>> = texts
            .par_iter()
            .map(|text| {
                let mut counts = HashMap::new();
                for token in tokenize(text) {
                    *counts.entry(token).or_insert(0) += 1;
                }
                counts
            })
            .collect();

        // Sorted vocabulary keeps term ids stable between runs
        let mut terms: Vec<&String> = term_counts.iter().flat_map(|c| c.keys()).collect();
        terms.sort();
        terms.dedup();
        let vocabulary: HashMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(id, term)| (term.clone(), id))
            .collect();

        let mut document_frequency = vec![0u32; vocabulary.len()];
        for counts in &term_counts {
            for term in counts.keys() {
                document_frequency[vocabulary[term]] += 1;
            }
        }

        let n = texts.len() as f32;
        let idf: Vec<f32> = document_frequency
            .iter()
            .map(|&df| ((1.0 + n) / (1.0 + df as f32)).ln() + 1.0)
            .collect();

        let documents = term_counts
            .par_iter()
            .map(|counts| {
                let weights = counts
                    .iter()
                    .map(|(term, &count)| {
                        let id = vocabulary[term];
                        (id, count as f32 * idf[id])
                    })
                    .collect();
                normalize(weights)
            })
            .collect();

        Self {
            vocabulary,
            idf,
            documents,
        }
    }

    /// Number of indexed documents
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Number of distinct terms after stop word removal
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse document frequency of a term, if it is in the vocabulary
    #[cfg(test)]
    fn idf(&self, term: &str) -> Option<f32> {
        self.vocabulary.get(term).map(|&id| self.idf[id])
    }

    /// Cosine similarity between two indexed documents
    pub fn similarity(&self, a: MovieId, b: MovieId) -> f32 {
        match (self.documents.get(a), self.documents.get(b)) {
            (Some(a), Some(b)) => dot(a, b),
            _ => 0.0,
        }
    }

    /// Documents most similar to `movie_id`, best first.
    ///
    /// The movie itself and documents sharing no terms are left out. Ties
    /// keep file order.
    pub fn similar_to(&self, movie_id: MovieId, top_n: usize) -> Vec<(MovieId, f32)> {
        if movie_id >= self.documents.len() {
            return Vec::new();
        }

        let mut scored: Vec<(MovieId, f32)> = (0..self.documents.len())
            .filter(|&id| id != movie_id)
            .map(|id| (id, self.similarity(movie_id, id)))
            .filter(|&(_, score)| score > 0.0)
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(top_n);
        scored
    }
}

/// Lowercase tokens of 2+ alphanumeric characters, stop words removed
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|t| !STOP_WORDS.contains(&t.as_str()))
}

fn normalize(mut weights: SparseVector) -> SparseVector {
    weights.sort_by_key(|&(id, _)| id);
    let norm = weights.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
    if norm > 0.0 {
        for (_, w) in &mut weights {
            *w /= norm;
        }
    }
    weights
}

/// Dot product of two term-sorted sparse vectors
fn dot(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let (mut i, mut j) = (0, 0);
    let mut sum = 0.0;
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                sum += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    sum
}
