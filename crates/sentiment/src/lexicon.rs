//! Lexicon-based polarity scorer.
//!
//! Scoring rules:
//! 1. Lowercase the text and split it into word tokens (apostrophes kept)
//! 2. Intensifiers ("very", "really", ...) scale the next sentiment word
//! 3. Negators ("not", "never", ...) flip and halve the next sentiment word
//!    if it follows within a few tokens ("don't feel sad")
//! 4. Articles do not break a pending modifier ("not a good film")
//! 5. The polarity is the mean over all scored words, clamped to `[-1, 1]`

use crate::{PolarityScorer, Result, SentimentError};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Multiplier applied to a negated sentiment word
const NEGATION_FACTOR: f32 = -0.5;

/// How many plain words a negator reaches across
const NEGATION_WINDOW: usize = 3;

const NEGATORS: &[&str] = &[
    "not", "no", "never", "nor", "cannot", "can't", "don't", "doesn't", "didn't",
    "isn't", "wasn't", "aren't", "weren't", "won't", "wouldn't", "hardly",
];

const ARTICLES: &[&str] = &["a", "an", "the"];

const INTENSIFIERS: &[(&str, f32)] = &[
    ("very", 1.3),
    ("really", 1.3),
    ("so", 1.2),
    ("too", 1.2),
    ("extremely", 1.5),
    ("incredibly", 1.5),
    ("truly", 1.3),
    ("deeply", 1.3),
    ("utterly", 1.5),
    ("quite", 1.1),
    ("pretty", 1.1),
    ("somewhat", 0.7),
    ("slightly", 0.6),
];

/// Built-in word polarities, tuned for moods and plot summaries
const DEFAULT_LEXICON: &[(&str, f32)] = &[
    // positive
    ("happy", 0.8),
    ("happiness", 0.8),
    ("joy", 0.8),
    ("joyful", 0.8),
    ("glad", 0.5),
    ("cheerful", 0.8),
    ("good", 0.7),
    ("great", 0.8),
    ("excellent", 1.0),
    ("amazing", 0.6),
    ("awesome", 1.0),
    ("wonderful", 1.0),
    ("fantastic", 0.4),
    ("beautiful", 0.85),
    ("brilliant", 0.9),
    ("best", 1.0),
    ("better", 0.5),
    ("love", 0.5),
    ("loving", 0.6),
    ("lovely", 0.5),
    ("loved", 0.7),
    ("fun", 0.3),
    ("funny", 0.25),
    ("hilarious", 0.5),
    ("excited", 0.4),
    ("exciting", 0.3),
    ("calm", 0.3),
    ("relaxed", 0.4),
    ("peaceful", 0.5),
    ("hope", 0.3),
    ("hopeful", 0.4),
    ("inspiring", 0.6),
    ("inspired", 0.5),
    ("friendly", 0.4),
    ("friendship", 0.3),
    ("kind", 0.6),
    ("gentle", 0.4),
    ("brave", 0.6),
    ("heroic", 0.5),
    ("hero", 0.4),
    ("romantic", 0.4),
    ("free", 0.4),
    ("freedom", 0.4),
    ("win", 0.8),
    ("wins", 0.8),
    ("victory", 0.6),
    ("success", 0.3),
    ("successful", 0.75),
    ("triumph", 0.6),
    ("rich", 0.4),
    ("famous", 0.5),
    ("young", 0.1),
    ("new", 0.14),
    ("true", 0.35),
    ("real", 0.2),
    ("important", 0.4),
    ("powerful", 0.3),
    ("special", 0.36),
    ("perfect", 1.0),
    ("nice", 0.6),
    ("fine", 0.4),
    ("positive", 0.23),
    ("energetic", 0.4),
    ("adventurous", 0.4),
    ("curious", 0.2),
    ("grateful", 0.6),
    ("proud", 0.8),
    ("fresh", 0.3),
    ("warm", 0.6),
    ("sweet", 0.35),
    ("magical", 0.5),
    ("legendary", 0.5),
    ("unlikely", 0.1),
    ("unique", 0.375),
    ("epic", 0.4),
    ("content", 0.3),
    ("optimistic", 0.5),
    ("rescue", 0.2),
    ("saves", 0.3),
    ("save", 0.3),
    // negative
    ("sad", -0.5),
    ("sadness", -0.5),
    ("unhappy", -0.6),
    ("depressed", -0.6),
    ("depressing", -0.6),
    ("lonely", -0.5),
    ("alone", -0.2),
    ("bad", -0.7),
    ("worse", -0.4),
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("boring", -1.0),
    ("bored", -0.5),
    ("tired", -0.4),
    ("angry", -0.5),
    ("anger", -0.5),
    ("mad", -0.6),
    ("upset", -0.5),
    ("stressed", -0.5),
    ("anxious", -0.4),
    ("afraid", -0.6),
    ("scared", -0.5),
    ("fear", -0.4),
    ("hate", -0.8),
    ("hated", -0.8),
    ("cruel", -1.0),
    ("evil", -1.0),
    ("dark", -0.15),
    ("dead", -0.2),
    ("death", -0.3),
    ("die", -0.3),
    ("dies", -0.3),
    ("killed", -0.2),
    ("kill", -0.2),
    ("murder", -0.5),
    ("brutal", -0.875),
    ("violent", -0.8),
    ("dangerous", -0.6),
    ("desperate", -0.6),
    ("tragic", -0.75),
    ("tragedy", -0.6),
    ("broken", -0.4),
    ("poor", -0.4),
    ("lost", -0.2),
    ("wrong", -0.5),
    ("corrupt", -0.5),
    ("criminal", -0.4),
    ("guilty", -0.5),
    ("war", -0.3),
    ("painful", -0.7),
    ("pain", -0.5),
    ("miserable", -1.0),
    ("hopeless", -0.7),
    ("grief", -0.6),
    ("cry", -0.3),
    ("crying", -0.3),
    ("sick", -0.7),
    ("ill", -0.5),
    ("disturbing", -0.6),
    ("mysterious", -0.1),
    ("strange", -0.05),
    ("difficult", -0.5),
    ("hard", -0.29),
    ("negative", -0.3),
    ("meh", -0.2),
    ("gloomy", -0.6),
    ("frustrated", -0.6),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
];

/// Polarity scorer backed by a word list.
pub struct LexiconScorer {
    words: HashMap<String, f32>,
    intensifiers: HashMap<&'static str, f32>,
}

impl LexiconScorer {
    /// Scorer with the built-in lexicon
    pub fn new() -> Self {
        let words = DEFAULT_LEXICON
            .iter()
            .map(|&(word, polarity)| (word.to_string(), polarity))
            .collect();
        let intensifiers = INTENSIFIERS.iter().copied().collect();

        Self {
            words,
            intensifiers,
        }
    }

    /// Built-in lexicon with entries from a JSON object merged on top.
    ///
    /// The file holds `{ "word": polarity, ... }`; later entries replace
    /// built-in ones.
    pub fn with_overrides_from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let overrides: HashMap<String, f32> = serde_json::from_str(&raw)?;

        let mut scorer = Self::new();
        scorer.extend(overrides)?;
        info!(
            words = scorer.len(),
            "Loaded lexicon overrides from {}",
            path.display()
        );
        Ok(scorer)
    }

    /// Merge word polarities into the lexicon.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = (String, f32)>) -> Result<()> {
        for (word, value) in entries {
            if !(-1.0..=1.0).contains(&value) {
                return Err(SentimentError::InvalidPolarity { word, value });
            }
            self.words.insert(word.to_lowercase(), value);
        }
        Ok(())
    }

    /// Number of words with a polarity
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityScorer for LexiconScorer {
    fn name(&self) -> &str {
        "lexicon"
    }

    fn polarity(&self, text: &str) -> f32 {
        let mut scores = Vec::new();
        let mut negation_left = 0usize;
        let mut intensity = 1.0_f32;

        for token in tokenize(text) {
            let token = token.as_str();

            if NEGATORS.contains(&token) {
                negation_left = NEGATION_WINDOW;
                continue;
            }
            if let Some(&factor) = self.intensifiers.get(token) {
                intensity *= factor;
                continue;
            }
            if ARTICLES.contains(&token) {
                continue;
            }

            match self.words.get(token) {
                Some(&base) => {
                    let mut score = base * intensity;
                    if negation_left > 0 {
                        score *= NEGATION_FACTOR;
                    }
                    scores.push(score.clamp(-1.0, 1.0));
                    negation_left = 0;
                }
                None => negation_left = negation_left.saturating_sub(1),
            }
            intensity = 1.0;
        }

        if scores.is_empty() {
            return 0.0;
        }

        let polarity = scores.iter().sum::<f32>() / scores.len() as f32;
        debug!(scored_words = scores.len(), polarity, "Scored text");
        polarity.clamp(-1.0, 1.0)
    }
}

/// Lowercase word tokens; apostrophes stay inside words ("isn't")
fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|t| t.trim_matches('\''))
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_simple_polarity() {
        let scorer = LexiconScorer::new();
        assert!(scorer.polarity("A happy story") > 0.0);
        assert!(scorer.polarity("A sad story") < 0.0);
        assert_eq!(scorer.polarity("A story about a table"), 0.0);
    }

    #[test]
    fn test_empty_and_none_text_are_neutral() {
        let scorer = LexiconScorer::new();
        assert_eq!(scorer.polarity(""), 0.0);
        assert_eq!(scorer.polarity("None"), 0.0);
    }

    #[test]
    fn test_negation_flips_and_damps() {
        let scorer = LexiconScorer::new();
        assert!(approx(scorer.polarity("good"), 0.7));
        assert!(approx(scorer.polarity("not good"), -0.35));
        assert!(approx(scorer.polarity("not a good film"), -0.35));
        assert!(scorer.polarity("I don't feel sad") > 0.0);
    }

    #[test]
    fn test_intensifier_scales_and_clamps() {
        let scorer = LexiconScorer::new();
        assert!(approx(scorer.polarity("very good"), 0.91));
        assert!(approx(scorer.polarity("extremely excellent"), 1.0));
        assert!(approx(scorer.polarity("really really terrible"), -1.0));
    }

    #[test]
    fn test_mean_over_scored_words() {
        let scorer = LexiconScorer::new();
        // good 0.7, sad -0.5
        assert!(approx(scorer.polarity("Good day, sad night."), 0.1));
    }

    #[test]
    fn test_case_and_punctuation_ignored() {
        let scorer = LexiconScorer::new();
        assert!(approx(scorer.polarity("HAPPY!!!"), scorer.polarity("happy")));
    }

    #[test]
    fn test_extend_rejects_out_of_range() {
        let mut scorer = LexiconScorer::new();
        let err = scorer.extend([("ecstatic".to_string(), 1.5)]).unwrap_err();
        assert!(matches!(err, SentimentError::InvalidPolarity { .. }));

        scorer.extend([("Ecstatic".to_string(), 0.9)]).unwrap();
        assert!(approx(scorer.polarity("ecstatic"), 0.9));
    }

    #[test]
    fn test_overrides_file_missing() {
        let err = LexiconScorer::with_overrides_from_file(Path::new("no/such/lexicon.json"));
        assert!(matches!(err, Err(SentimentError::Io(_))));
    }
}
