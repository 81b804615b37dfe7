//! Interactive strategy driven by a person at the terminal.

use std::io::{BufRead, Write};

use cribbage_engine::cards::{Card, total_value};
use cribbage_engine::errors::StrategyError;
use cribbage_engine::strategy::Strategy;

use crate::formatters::{format_card, format_indexed};
use crate::io_utils::read_stdin_line;
use crate::validation::{ParseResult, parse_selection};

/// Asks for 0-based card indices on `output` and reads answers from `input`.
/// Invalid answers are explained and asked again; `exit` or end of input
/// abandons the match.
pub struct HumanStrategy {
    input: Box<dyn BufRead + Send>,
    output: Box<dyn Write + Send>,
}

impl HumanStrategy {
    pub fn new(input: Box<dyn BufRead + Send>, output: Box<dyn Write + Send>) -> Self {
        Self { input, output }
    }

    fn ask(
        &mut self,
        prompt: &str,
        cards: &[Card],
        count: usize,
    ) -> Result<Vec<usize>, StrategyError> {
        loop {
            writeln!(self.output, "{}", format_indexed(cards)).map_err(io_failure)?;
            write!(self.output, "{} ", prompt).map_err(io_failure)?;
            self.output.flush().map_err(io_failure)?;

            let Some(line) = read_stdin_line(self.input.as_mut()) else {
                return Err(StrategyError::Abandoned);
            };
            match parse_selection(&line, cards.len(), count) {
                ParseResult::Indices(indices) => return Ok(indices),
                ParseResult::Exit => return Err(StrategyError::Abandoned),
                ParseResult::Invalid(msg) => {
                    writeln!(self.output, "{}", msg).map_err(io_failure)?;
                }
            }
        }
    }
}

fn io_failure(e: std::io::Error) -> StrategyError {
    StrategyError::Io(e.to_string())
}

impl Strategy for HumanStrategy {
    fn name(&self) -> &str {
        "human"
    }

    fn discard(
        &mut self,
        hand: &[Card],
        _seen: &[Card],
        count: usize,
    ) -> Result<Vec<Card>, StrategyError> {
        let prompt = format!(
            "Pick {} card{} for the crib (indices, or 'exit'):",
            count,
            if count == 1 { "" } else { "s" }
        );
        let indices = self.ask(&prompt, hand, count)?;
        Ok(indices.into_iter().map(|i| hand[i]).collect())
    }

    fn play(
        &mut self,
        legal: &[Card],
        _seen: &[Card],
        stack: &[Card],
    ) -> Result<Option<Card>, StrategyError> {
        let shown: Vec<String> = stack.iter().map(format_card).collect();
        writeln!(
            self.output,
            "Stack: [{}] total {}",
            shown.join(" "),
            total_value(stack)
        )
        .map_err(io_failure)?;
        let indices = self.ask("Play a card (index, or 'exit'):", legal, 1)?;
        Ok(indices.first().map(|&i| legal[i]))
    }
}
