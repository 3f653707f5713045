//! Colorized output helpers.

use colored::Colorize;
use recommender::{Recommendation, SimilarMovie};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;

/// One result line, without color
pub fn recommendation_line(rank: usize, rec: &Recommendation, genre_context: &str) -> String {
    format!(
        "{}. 🎥 {} (Polarity: {:.2}, {}, {})",
        rank, rec.title, rec.polarity, rec.label, genre_context
    )
}

/// Print a ranked list of recommendations
pub fn print_recommendations<W: Write>(
    out: &mut W,
    recommendations: &[Recommendation],
    name: &str,
    genre_context: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("🎥🍿AI Analyzed movie recommendations for {}:", name).yellow()
    )?;
    for (idx, rec) in recommendations.iter().enumerate() {
        writeln!(out, "{}", recommendation_line(idx + 1, rec, genre_context).cyan())?;
    }
    Ok(())
}

/// Print movies similar to `source_title`
pub fn print_similar<W: Write>(
    out: &mut W,
    source_title: &str,
    similar: &[SimilarMovie],
) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("🎬 Movies similar to {}:", source_title).yellow()
    )?;
    for (idx, movie) in similar.iter().enumerate() {
        writeln!(
            out,
            "{}",
            format!("{}. 🎥 {} (Similarity: {:.2})", idx + 1, movie.title, movie.score).cyan()
        )?;
    }
    Ok(())
}

/// Three dots, one per `delay`
pub fn animate<W: Write>(out: &mut W, delay: Duration) -> io::Result<()> {
    for _ in 0..3 {
        write!(out, "{}", ".".yellow())?;
        out.flush()?;
        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentiment::SentimentLabel;

    fn rec(title: &str, polarity: f32) -> Recommendation {
        Recommendation {
            movie_id: 0,
            title: title.to_string(),
            polarity,
            label: SentimentLabel::from_polarity(polarity),
        }
    }

    #[test]
    fn test_recommendation_line() {
        assert_eq!(
            recommendation_line(1, &rec("Up", 0.456), "Animation"),
            "1. 🎥 Up (Polarity: 0.46, Positive 😄, Animation)"
        );
        assert_eq!(
            recommendation_line(3, &rec("Se7en", -0.25), "Random Genre"),
            "3. 🎥 Se7en (Polarity: -0.25, Negative 😔, Random Genre)"
        );
        assert_eq!(
            recommendation_line(2, &rec("Heat", 0.0), "Crime"),
            "2. 🎥 Heat (Polarity: 0.00, neutral 😐, Crime)"
        );
    }

    #[test]
    fn test_print_recommendations_lists_every_title() {
        let mut out = Vec::new();
        print_recommendations(&mut out, &[rec("Up", 0.5), rec("Heat", 0.0)], "Sam", "Drama").unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("recommendations for Sam:"));
        assert!(text.contains("1. 🎥 Up"));
        assert!(text.contains("2. 🎥 Heat"));
    }

    #[test]
    fn test_animate_without_delay() {
        let mut out = Vec::new();
        animate(&mut out, Duration::ZERO).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches('.').count(), 3);
        assert!(text.ends_with('\n'));
    }
}
