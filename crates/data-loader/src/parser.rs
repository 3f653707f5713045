//! Parser for the IMDB top-1000 CSV.
//!
//! Only four columns are read:
//! - `Series_Title`: movie title
//! - `Genre`: comma-separated tags ("Crime, Drama")
//! - `Overview`: one-paragraph plot summary
//! - `IMDB_Rating`: decimal rating
//!
//! Every other column in the file is ignored.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use std::io::Read;

/// Columns that must be present in the header row
pub const REQUIRED_COLUMNS: [&str; 4] = ["Series_Title", "Genre", "Overview", "IMDB_Rating"];

/// Raw CSV row before normalisation
#[derive(Debug, Deserialize)]
struct MovieRow {
    #[serde(rename = "Series_Title")]
    title: Option<String>,
    #[serde(rename = "Genre")]
    genre: Option<String>,
    #[serde(rename = "Overview")]
    overview: Option<String>,
    /// Non-numeric ratings are treated as missing rather than failing the load
    #[serde(rename = "IMDB_Rating", deserialize_with = "csv::invalid_option")]
    rating: Option<f32>,
}

impl MovieRow {
    fn into_movie(self, id: MovieId) -> Movie {
        Movie::new(
            id,
            non_blank(self.title),
            non_blank(self.genre),
            non_blank(self.overview),
            self.rating,
        )
    }
}

/// Treat whitespace-only cells the same as empty ones
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn check_columns(headers: &csv::StringRecord) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h.trim() == column) {
            return Err(DataLoadError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// Parse movies from any CSV source with a header row.
///
/// Movies get ids in row order, starting at 0.
pub fn parse_movies<R: Read>(reader: R) -> Result<Vec<Movie>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    check_columns(&headers)?;

    let mut movies = Vec::new();
    for (idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(idx as u64 + 2);

        let row: MovieRow =
            record
                .deserialize(Some(&headers))
                .map_err(|e| DataLoadError::ParseError {
                    line,
                    reason: e.to_string(),
                })?;

        movies.push(row.into_movie(idx));
    }

    Ok(movies)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Poster_Link,Series_Title,Released_Year,Genre,IMDB_Rating,Overview
x,The Godfather,1972,\"Crime, Drama\",9.2,\"An organized crime dynasty's aging patriarch transfers control.\"
x,Nameless,2001,,n/a,
x,,1999,Comedy,7.8,A happy story
";

    #[test]
    fn test_parse_sample() {
        let movies = parse_movies(SAMPLE.as_bytes()).unwrap();
        assert_eq!(movies.len(), 3);

        let godfather = &movies[0];
        assert_eq!(godfather.id, 0);
        assert_eq!(godfather.title.as_deref(), Some("The Godfather"));
        assert_eq!(godfather.genre.as_deref(), Some("Crime, Drama"));
        assert_eq!(godfather.rating, Some(9.2));
        assert!(godfather.combined_features.starts_with("Crime, Drama An organized"));
    }

    #[test]
    fn test_missing_values_become_none() {
        let movies = parse_movies(SAMPLE.as_bytes()).unwrap();

        let nameless = &movies[1];
        assert_eq!(nameless.genre, None);
        assert_eq!(nameless.overview, None);
        assert_eq!(nameless.rating, None);
        assert_eq!(nameless.combined_features, " ");

        assert_eq!(movies[2].title, None);
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let csv = "Series_Title,Genre,Overview\nA,Comedy,Fun\n";
        let err = parse_movies(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DataLoadError::MissingColumn { ref column } if column == "IMDB_Rating"
        ));
    }

    #[test]
    fn test_header_only_file() {
        let csv = "Series_Title,Genre,Overview,IMDB_Rating\n";
        let movies = parse_movies(csv.as_bytes()).unwrap();
        assert!(movies.is_empty());
    }
}
