//! Parsing of the answers typed at each prompt.

/// Lowest minimum rating accepted at the rating prompt
pub const MIN_RATING_BOUND: f32 = 7.6;
/// Highest minimum rating accepted at the rating prompt
pub const MAX_RATING_BOUND: f32 = 9.3;

/// Keyword that skips the rating filter
pub const SKIP_KEYWORD: &str = "skip";

/// Answer to the rating prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingChoice {
    Skip,
    Minimum(f32),
}

/// Why a rating answer was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingInputError {
    OutOfRange,
    NotANumber,
}

/// Actions offered after results are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    More,
    Random,
    Similar,
    Stop,
}

/// Resolve the genre prompt answer against the catalog.
///
/// Accepts a 1-based position in the catalog, or a genre name that matches
/// a catalog entry once title-cased ("sci-fi" -> "Sci-Fi").
pub fn parse_genre_choice(input: &str, catalog: &[String]) -> Option<String> {
    let input = input.trim();

    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        if let Ok(position) = input.parse::<usize>() {
            if (1..=catalog.len()).contains(&position) {
                return Some(catalog[position - 1].clone());
            }
        }
    }

    let name = title_case(input);
    catalog.iter().find(|genre| **genre == name).cloned()
}

/// Uppercase the first letter of every word and lowercase the rest.
///
/// A word starts after any non-alphabetic character, so hyphenated names
/// come out as "Film-Noir".
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut previous_is_letter = false;

    for c in input.chars() {
        if previous_is_letter {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }
    result
}

/// Parse the rating prompt answer.
pub fn parse_rating_choice(input: &str) -> Result<RatingChoice, RatingInputError> {
    let input = input.trim();
    if input.eq_ignore_ascii_case(SKIP_KEYWORD) {
        return Ok(RatingChoice::Skip);
    }

    let rating: f32 = input.parse().map_err(|_| RatingInputError::NotANumber)?;
    if (MIN_RATING_BOUND..=MAX_RATING_BOUND).contains(&rating) {
        Ok(RatingChoice::Minimum(rating))
    } else {
        Err(RatingInputError::OutOfRange)
    }
}

/// Parse the menu answer; `None` for anything unrecognised.
pub fn parse_menu_action(input: &str) -> Option<MenuAction> {
    match input.trim().to_lowercase().as_str() {
        "yes" | "more" => Some(MenuAction::More),
        "random" => Some(MenuAction::Random),
        "similar" => Some(MenuAction::Similar),
        "no" | "stop" => Some(MenuAction::Stop),
        _ => None,
    }
}
