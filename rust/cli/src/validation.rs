//! Input parsing and validation for the front end.
//!
//! This module turns user text into engine values. It handles:
//! - Card tokens such as `KD` or `1H` (ten of hearts)
//! - Lists of card tokens for the `score` and `peg` commands
//! - Index selections typed at the interactive prompt
//!
//! ## Error Handling
//!
//! Parsers return `Result<_, String>` or [`ParseResult`] so callers can print
//! the message and ask again.

use std::collections::HashSet;

use cribbage_engine::cards::{Card, Rank, Suit};

/// Keyword that abandons the match from any prompt.
pub const EXIT_KEYWORD: &str = "exit";

/// Outcome of reading one index selection from the player.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid, distinct, in-range indices
    Indices(Vec<usize>),
    /// The player typed `exit`
    Exit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse a two-character card token: rank letter then suit letter.
///
/// Ranks are `A 2-9 1 J Q K` (`1` is the ten; `10` is also accepted), suits
/// are `S H D C`. Case-insensitive.
///
/// # Example
///
/// ```rust
/// # use cribbage_cli::validation::parse_card;
/// use cribbage_engine::cards::{Card, Rank, Suit};
///
/// assert_eq!(parse_card("kd"), Ok(Card::new(Rank::King, Suit::Diamonds)));
/// assert_eq!(parse_card("1H"), Ok(Card::new(Rank::Ten, Suit::Hearts)));
/// assert!(parse_card("ZZ").is_err());
/// ```
pub fn parse_card(token: &str) -> Result<Card, String> {
    let upper = token.trim().to_ascii_uppercase();
    let rank_part = upper.strip_prefix("10").map(|rest| ("1", rest));
    let (rank_str, suit_str) = match rank_part {
        Some(split) => split,
        None if upper.len() == 2 && upper.is_ascii() => upper.split_at(1),
        None => {
            return Err(format!(
                "Invalid card '{}': expected rank and suit, e.g. KD or 1H",
                token.trim()
            ));
        }
    };

    let rank = match rank_str {
        "A" => Rank::Ace,
        "1" => Rank::Ten,
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        digit => match digit.parse::<u8>().ok().filter(|d| (2..=9).contains(d)) {
            Some(d) => Rank::from_u8(d).ok_or_else(|| format!("Invalid rank '{}'", digit))?,
            None => {
                return Err(format!(
                    "Invalid rank '{}' in '{}': use A, 2-9, 1 (ten), J, Q or K",
                    digit,
                    token.trim()
                ));
            }
        },
    };
    let suit = match suit_str {
        "S" => Suit::Spades,
        "H" => Suit::Hearts,
        "D" => Suit::Diamonds,
        "C" => Suit::Clubs,
        other => {
            return Err(format!(
                "Invalid suit '{}' in '{}': use S, H, D or C",
                other,
                token.trim()
            ));
        }
    };
    Ok(Card::new(rank, suit))
}

/// Parse a list of card tokens separated by whitespace or commas.
/// Duplicate cards are rejected.
pub fn parse_cards(input: &str) -> Result<Vec<Card>, String> {
    let mut seen = HashSet::new();
    let mut cards = Vec::new();
    for token in input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        let card = parse_card(token)?;
        if !seen.insert(card) {
            return Err(format!("Duplicate card '{}'", card));
        }
        cards.push(card);
    }
    Ok(cards)
}

/// Split prompt input on runs of whitespace.
pub fn split_input(input: &str) -> Vec<String> {
    input.split_whitespace().map(str::to_string).collect()
}

/// Convert tokens to integers, failing on the first that is not a number.
pub fn convert_indices(tokens: &[String]) -> Result<Vec<i64>, String> {
    tokens
        .iter()
        .map(|t| {
            t.parse::<i64>()
                .map_err(|_| format!("'{}' is not a number", t))
        })
        .collect()
}

/// Check that `indices` names exactly `count` distinct positions in `0..len`.
///
/// # Example
///
/// ```rust
/// # use cribbage_cli::validation::validate_indices;
///
/// assert_eq!(validate_indices(&[0, 2], 3, 2), Ok(vec![0, 2]));
/// assert!(validate_indices(&[1, 3], 3, 2).is_err());
/// assert!(validate_indices(&[-1], 3, 1).is_err());
/// ```
pub fn validate_indices(indices: &[i64], len: usize, count: usize) -> Result<Vec<usize>, String> {
    if indices.len() != count {
        return Err(format!(
            "Choose exactly {} card{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
    }
    let mut out = Vec::with_capacity(count);
    for &i in indices {
        let idx = usize::try_from(i)
            .ok()
            .filter(|&idx| idx < len)
            .ok_or_else(|| format!("Index {} is out of range 0..{}", i, len.saturating_sub(1)))?;
        if out.contains(&idx) {
            return Err(format!("Index {} chosen twice", idx));
        }
        out.push(idx);
    }
    Ok(out)
}

/// Parse one prompt answer. `exit` anywhere in the line wins over any other
/// problem with the input.
///
/// # Example
///
/// ```rust
/// # use cribbage_cli::validation::{parse_selection, ParseResult};
///
/// assert_eq!(parse_selection("2 5", 6, 2), ParseResult::Indices(vec![2, 5]));
/// assert_eq!(parse_selection("9 exit", 6, 2), ParseResult::Exit);
/// assert!(matches!(parse_selection("2", 6, 2), ParseResult::Invalid(_)));
/// ```
pub fn parse_selection(input: &str, len: usize, count: usize) -> ParseResult {
    let tokens = split_input(input);
    if tokens.iter().any(|t| t.eq_ignore_ascii_case(EXIT_KEYWORD)) {
        return ParseResult::Exit;
    }
    let numbers = match convert_indices(&tokens) {
        Ok(numbers) => numbers,
        Err(msg) => return ParseResult::Invalid(msg),
    };
    match validate_indices(&numbers, len, count) {
        Ok(indices) => ParseResult::Indices(indices),
        Err(msg) => ParseResult::Invalid(msg),
    }
}
