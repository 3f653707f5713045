//! The interactive question-and-answer session.
//!
//! The session walks through a fixed sequence of steps:
//! name, genre, mood, rating, first results, then a menu loop that runs
//! until the user stops or input ends.

use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use recommender::{
    RecommendOutcome, RecommendationQuery, Recommender, NO_RECOMMENDATION_MESSAGE,
};
use sentiment::SentimentLabel;
use std::io::Write;
use std::time::Duration;
use tracing::debug;

use crate::display;
use crate::input::{self, MenuAction, RatingChoice, RatingInputError};
use crate::line_source::LineSource;

/// Genre context shown next to random picks
const RANDOM_GENRE_CONTEXT: &str = "Random Genre";
/// Genre context shown when no genre filter is active
const ANY_GENRE_CONTEXT: &str = "Any Genre";

/// Knobs taken from the command line
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Movies per round
    pub count: usize,
    /// Pause between animation dots
    pub animation_delay: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            count: 5,
            animation_delay: Duration::from_millis(500),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    CollectName,
    CollectGenre,
    CollectMood,
    CollectRating,
    ShowResults,
    Menu,
    Done,
}

/// One user's session, reading answers from `input` and writing to `out`.
pub struct Session<I, O, R> {
    recommender: Recommender,
    input: I,
    out: O,
    rng: R,
    options: SessionOptions,

    name: String,
    genre: Option<String>,
    mood: String,
    min_rating: Option<f32>,
    /// Movies from the most recent list, for the "similar" action
    last_shown: Vec<(usize, String)>,
}

impl<I: LineSource, O: Write, R: Rng> Session<I, O, R> {
    pub fn new(recommender: Recommender, input: I, out: O, rng: R, options: SessionOptions) -> Self {
        Self {
            recommender,
            input,
            out,
            rng,
            options,
            name: String::new(),
            genre: None,
            mood: String::new(),
            min_rating: None,
            last_shown: Vec::new(),
        }
    }

    /// Run the session until the user stops or input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "{}", "🍿Welcome to your movie assistant! 🎥".blue())?;

        let mut step = Step::CollectName;
        while step != Step::Done {
            debug!(?step, "Session step");
            step = match step {
                Step::CollectName => self.collect_name()?,
                Step::CollectGenre => self.collect_genre()?,
                Step::CollectMood => self.collect_mood()?,
                Step::CollectRating => self.collect_rating()?,
                Step::ShowResults => {
                    write!(self.out, "{}", format!("Finding movies for {}: ", self.name).blue())?;
                    self.animate()?;
                    self.show_recommendations()?;
                    Step::Menu
                }
                Step::Menu => self.menu()?,
                Step::Done => Step::Done,
            };
        }

        self.out.flush()?;
        Ok(())
    }

    /// Ask `message` and read one answer; `None` once input ends.
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        self.out.flush()?;

        let answer = self.input.read_line(message)?;
        if answer.is_none() {
            writeln!(self.out)?;
        }
        Ok(answer)
    }

    fn animate(&mut self) -> Result<()> {
        display::animate(&mut self.out, self.options.animation_delay)?;
        Ok(())
    }

    fn collect_name(&mut self) -> Result<Step> {
        let Some(name) = self.prompt("What is your name: ")? else {
            return Ok(Step::Done);
        };
        self.name = name.trim().to_string();
        writeln!(self.out, "\n{}", format!("Greetings {}", self.name).green())?;

        writeln!(self.out, "{}", "🔍Let's find the perfect movie for you".cyan())?;
        for (idx, genre) in self.recommender.context().genres().iter().enumerate() {
            writeln!(self.out, "{}", format!("{}. {}", idx + 1, genre).cyan())?;
        }
        writeln!(self.out)?;

        Ok(Step::CollectGenre)
    }

    fn collect_genre(&mut self) -> Result<Step> {
        if self.recommender.context().genres().is_empty() {
            writeln!(self.out, "{}", "No genres available, searching all movies.".red())?;
            self.genre = None;
            return Ok(Step::CollectMood);
        }

        let Some(answer) = self.prompt("Enter genre name or number: ")? else {
            return Ok(Step::Done);
        };

        match input::parse_genre_choice(&answer, self.recommender.context().genres()) {
            Some(genre) => {
                self.genre = Some(genre);
                Ok(Step::CollectMood)
            }
            None => {
                writeln!(self.out, "{}", "Invalid input. Please enter again.".red())?;
                Ok(Step::CollectGenre)
            }
        }
    }

    fn collect_mood(&mut self) -> Result<Step> {
        let Some(mood) = self.prompt("How do you feel today? (Describe your mood): ")? else {
            return Ok(Step::Done);
        };
        self.mood = mood;

        write!(self.out, "{}", "Analyzing mood".blue())?;
        self.animate()?;

        let polarity = self.recommender.context().scorer.polarity(&self.mood);
        writeln!(
            self.out,
            "{}",
            format!(
                "Your mood is {} (Polarity: {:.2})",
                SentimentLabel::from_polarity(polarity),
                polarity
            )
            .green()
        )?;

        Ok(Step::CollectRating)
    }

    fn collect_rating(&mut self) -> Result<Step> {
        let message = format!(
            "Enter minimum IMDB rating ({} - {}) or '{}': ",
            input::MIN_RATING_BOUND,
            input::MAX_RATING_BOUND,
            input::SKIP_KEYWORD
        );
        let Some(answer) = self.prompt(&message)? else {
            return Ok(Step::Done);
        };

        match input::parse_rating_choice(&answer) {
            Ok(RatingChoice::Skip) => {
                self.min_rating = None;
                Ok(Step::ShowResults)
            }
            Ok(RatingChoice::Minimum(rating)) => {
                self.min_rating = Some(rating);
                Ok(Step::ShowResults)
            }
            Err(RatingInputError::OutOfRange) => {
                writeln!(self.out, "{}", "Value out of range. Try Again.".red())?;
                Ok(Step::CollectRating)
            }
            Err(RatingInputError::NotANumber) => {
                writeln!(self.out, "{}", "Invalid input. Try Again".red())?;
                Ok(Step::CollectRating)
            }
        }
    }

    fn menu(&mut self) -> Result<Step> {
        let Some(answer) =
            self.prompt("Would you like some more recommendations🎥(yes/random/similar/no): ")?
        else {
            return Ok(Step::Done);
        };

        match input::parse_menu_action(&answer) {
            Some(MenuAction::More) => self.show_recommendations()?,
            Some(MenuAction::Random) => self.show_random()?,
            Some(MenuAction::Similar) => self.show_similar()?,
            Some(MenuAction::Stop) => {
                writeln!(
                    self.out,
                    "{}",
                    format!("Enjoy your movie picks, {}!", self.name).green()
                )?;
                return Ok(Step::Done);
            }
            None => writeln!(self.out, "{}", "Invalid choice. Try Again \n".red())?,
        }
        Ok(Step::Menu)
    }

    fn query(&self) -> RecommendationQuery {
        RecommendationQuery {
            genre: self.genre.clone(),
            mood: Some(self.mood.clone()),
            min_rating: self.min_rating,
            count: self.options.count,
        }
    }

    fn show_recommendations(&mut self) -> Result<()> {
        let query = self.query();
        let outcome = self.recommender.recommend(&query, &mut self.rng)?;

        match outcome {
            RecommendOutcome::NoneFound => {
                writeln!(self.out, "{}\n", NO_RECOMMENDATION_MESSAGE.red())?;
            }
            RecommendOutcome::Found(recs) => {
                let genre_context = self.genre.as_deref().unwrap_or(ANY_GENRE_CONTEXT);
                display::print_recommendations(&mut self.out, &recs, &self.name, genre_context)?;
                self.last_shown = recs.into_iter().map(|r| (r.movie_id, r.title)).collect();
            }
        }
        Ok(())
    }

    fn show_random(&mut self) -> Result<()> {
        write!(self.out, "{}", "🎲 Picking random recommendations".blue())?;
        self.animate()?;

        let picks = self.recommender.random_picks(self.options.count, &mut self.rng);
        display::print_recommendations(&mut self.out, &picks, &self.name, RANDOM_GENRE_CONTEXT)?;
        self.last_shown = picks.into_iter().map(|r| (r.movie_id, r.title)).collect();
        Ok(())
    }

    fn show_similar(&mut self) -> Result<()> {
        let Some((movie_id, title)) = self.last_shown.first().cloned() else {
            writeln!(
                self.out,
                "{}",
                "Nothing to compare yet. Ask for more recommendations first.".red()
            )?;
            return Ok(());
        };

        let similar = self.recommender.similar_to(movie_id, self.options.count);
        if similar.is_empty() {
            writeln!(self.out, "{}", format!("No movies similar to {} found.", title).red())?;
        } else {
            display::print_similar(&mut self.out, &title, &similar)?;
        }
        Ok(())
    }
}
