//! Card, standing, and score formatters for terminal display.
//!
//! Pure functions that render engine values for people. Suits use Unicode
//! symbols with an ASCII fallback for terminals that can't render them.
//!
//! - **Unicode mode**: `K♦`, `10♥`
//! - **ASCII mode**: `KD`, `1H` (the same notation the parsers accept)
//!
//! ## Example
//!
//! ```rust
//! use cribbage_engine::cards::{Card, Rank, Suit};
//! use cribbage_cli::formatters::{format_card, format_cards};
//!
//! let king = Card::new(Rank::King, Suit::Diamonds);
//! assert!(format_card(&king) == "K♦" || format_card(&king) == "KD");
//! assert!(format_cards(&[king]).starts_with("[K"));
//! ```

use cribbage_engine::cards::{Card, Rank, Suit};
use cribbage_engine::round::{RoundSummary, Standing};
use cribbage_engine::scoring::{ScoreKind, ScoreTrace};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.letter().to_string()
    }
}

/// Rank as printed next to a suit symbol. Tens print as `10` in Unicode
/// mode and as the token letter `1` otherwise.
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ten if supports_unicode() => "10".to_string(),
        other => other.letter().to_string(),
    }
}

/// Format a Card as a string combining rank and suit.
///
/// # Example
///
/// ```rust
/// use cribbage_engine::cards::{Card, Rank, Suit};
/// # use cribbage_cli::formatters::format_card;
///
/// let ace_spades = Card::new(Rank::Ace, Suit::Spades);
/// let formatted = format_card(&ace_spades);
/// assert!(formatted == "A♠" || formatted == "AS");
/// ```
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Cards in bracket notation, `[]` when empty.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Cards with their 0-based selection index, e.g. `0:K♦ 1:Q♦`.
pub fn format_indexed(cards: &[Card]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}:{}", i, format_card(c)))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn format_kind(kind: ScoreKind) -> &'static str {
    match kind {
        ScoreKind::Fifteen => "fifteen",
        ScoreKind::Pair => "pair",
        ScoreKind::Run => "run",
        ScoreKind::Flush => "flush",
        ScoreKind::Nobs => "his nobs",
        ScoreKind::PairRoyal => "pairs",
        ScoreKind::ThirtyOne => "thirty-one",
        ScoreKind::Go => "go",
        ScoreKind::Heels => "his heels",
    }
}

/// One line per scoring combination followed by the total.
///
/// ```rust
/// use cribbage_cli::formatters::format_trace;
/// use cribbage_cli::validation::parse_cards;
/// use cribbage_engine::pegging::explain_pegs;
///
/// let text = format_trace(&explain_pegs(&parse_cards("7S 8H").unwrap()));
/// assert!(text.contains("fifteen"));
/// assert!(text.ends_with("total 2"));
/// ```
pub fn format_trace(trace: &ScoreTrace) -> String {
    let mut lines: Vec<String> = trace
        .items
        .iter()
        .map(|item| {
            format!(
                "  {:<10} {:<20} {}",
                format_kind(item.kind),
                format_cards(&item.cards),
                item.points
            )
        })
        .collect();
    lines.push(format!("total {}", trace.total()));
    lines.join("\n")
}

pub fn format_standings(standings: &[Standing]) -> String {
    standings
        .iter()
        .map(|s| format!("Player {}: {}", s.name, s.score))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_round(summary: &RoundSummary) -> String {
    let cut = summary
        .cut
        .as_ref()
        .map(format_card)
        .unwrap_or_else(|| "-".to_string());
    let points: Vec<String> = summary.points.iter().map(|p| p.to_string()).collect();
    format!(
        "Round {} | dealer {} | cut {} | crib {} | points {}",
        summary.round,
        summary.dealer,
        cut,
        format_cards(&summary.crib),
        points.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cribbage_engine::scoring::explain_hand;

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "H");

        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "S");
    }

    #[test]
    fn test_format_ten() {
        let ten = format_card(&Card::new(Rank::Ten, Suit::Clubs));
        assert!(ten == "10♣" || ten == "1C");
    }

    #[test]
    fn test_format_cards_empty() {
        assert_eq!(format_cards(&[]), "[]");
    }

    #[test]
    fn test_format_indexed() {
        let cards = [
            Card::new(Rank::King, Suit::Diamonds),
            Card::new(Rank::Ace, Suit::Clubs),
        ];
        let text = format_indexed(&cards);
        assert!(text.starts_with("0:K"));
        assert!(text.contains(" 1:A"));
    }

    #[test]
    fn test_format_trace_lists_items() {
        let hand = [
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Jack, Suit::Clubs),
        ];
        let text = format_trace(&explain_hand(&hand, Some(Card::new(Rank::Five, Suit::Clubs))));
        assert!(text.contains("his nobs"));
        assert!(text.contains("fifteen"));
        assert!(text.ends_with("total 29"));
    }

    #[test]
    fn test_format_round() {
        let summary = RoundSummary {
            round: 2,
            dealer: "1".into(),
            cut: None,
            crib: vec![],
            points: vec![4, 7],
        };
        assert_eq!(
            format_round(&summary),
            "Round 2 | dealer 1 | cut - | crib [] | points 4 7"
        );
    }

    #[test]
    fn test_format_standings() {
        let standings = vec![
            Standing {
                name: "1".into(),
                score: 121,
            },
            Standing {
                name: "2".into(),
                score: 98,
            },
        ];
        assert_eq!(format_standings(&standings), "Player 1: 121\nPlayer 2: 98");
    }
}
