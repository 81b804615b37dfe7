//! Pegging command: points for the newest card on a stack.

use std::io::Write;

use cribbage_engine::cards::total_value;
use cribbage_engine::pegging::{STACK_MAX, explain_pegs};

use crate::error::CliError;
use crate::formatters::format_trace;
use crate::ui;
use crate::validation::parse_cards;

/// Handle the peg command. The last card given is the one just played.
pub fn handle_peg_command(
    stack: String,
    explain: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_cards(&stack).and_then(|cards| {
        let total = total_value(&cards);
        if cards.is_empty() {
            Err("the stack is empty".to_string())
        } else if total > STACK_MAX {
            Err(format!("the stack totals {}, more than {}", total, STACK_MAX))
        } else {
            Ok(cards)
        }
    });
    let cards = match cards {
        Ok(cards) => cards,
        Err(msg) => {
            ui::write_error(err, &msg)?;
            return Err(CliError::InvalidInput(msg));
        }
    };

    let trace = explain_pegs(&cards);
    if explain {
        writeln!(out, "{}", format_trace(&trace))?;
    }
    writeln!(out, "Total: {} Points: {}", total_value(&cards), trace.total())?;
    Ok(())
}
