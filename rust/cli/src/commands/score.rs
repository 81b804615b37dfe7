//! Hand counting command.
//!
//! Scores 4 or 5 cards with an optional cut, the way a hand or crib is
//! counted at the end of a round.

use std::io::Write;

use cribbage_engine::scoring::explain_hand;

use crate::error::CliError;
use crate::formatters::{format_card, format_cards, format_trace};
use crate::ui;
use crate::validation::{parse_card, parse_cards};

/// Handle the score command.
///
/// Prints `Score: N`; with `explain`, every fifteen, pair, run, flush and
/// his nobs is listed first.
pub fn handle_score_command(
    hand: String,
    cut: Option<String>,
    explain: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_cards(&hand).and_then(|cards| {
        if (4..=5).contains(&cards.len()) {
            Ok(cards)
        } else {
            Err(format!("a hand has 4 or 5 cards, got {}", cards.len()))
        }
    });
    let cards = match cards {
        Ok(cards) => cards,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };
    let cut = match cut.as_deref().map(parse_card).transpose() {
        Ok(Some(card)) if cards.contains(&card) => {
            let msg = format!("cut {} is already in the hand", card);
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
        Ok(cut) => cut,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };

    let trace = explain_hand(&cards, cut);
    if explain {
        let cut_text = cut.as_ref().map(format_card).unwrap_or_else(|| "-".into());
        writeln!(out, "Hand: {} cut {}", format_cards(&cards), cut_text)?;
        writeln!(out, "{}", format_trace(&trace))?;
    }
    writeln!(out, "Score: {}", trace.total())?;
    Ok(())
}
