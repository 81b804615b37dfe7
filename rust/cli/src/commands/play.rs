//! # Play Command
//!
//! Plays one full match in the terminal, either among automated players or
//! with you in the first seat.
//!
//! - **Human**: seat 1 is driven by [`HumanStrategy`], which asks for card
//!   indices; type `exit` to leave the match
//! - **AI**: every seat uses the configured strategy
//!
//! After each round the command prints the round summary and the scores;
//! at the end it prints the winner and the final standings.

use std::io::{BufRead, Write};

use cribbage_engine::game::{Match, MatchConfig};
use cribbage_engine::player::Player;
use cribbage_engine::round::{Flow, Standing};

use super::{MatchFlags, build_strategy};
use crate::Vs;
use crate::error::CliError;
use crate::formatters::{format_round, format_standings};
use crate::human::HumanStrategy;

/// Name shown for the human seat.
pub const HUMAN_NAME: &str = "You";

/// Handle the play command.
///
/// `input` and `prompt` are only used when `vs` is [`Vs::Human`]; prompts go
/// to `prompt` while round results go to `out`.
///
/// # Returns
///
/// * `Ok(())` when the match finishes
/// * `Err(CliError::Interrupted)` when the human leaves; scores so far are printed
/// * `Err(CliError)` for invalid settings or engine errors
pub fn handle_play_command(
    flags: MatchFlags,
    vs: Vs,
    out: &mut dyn Write,
    err: &mut dyn Write,
    input: Box<dyn BufRead + Send>,
    prompt: Box<dyn Write + Send>,
) -> Result<(), CliError> {
    let cfg = flags.resolve(err)?;
    let seed = cfg.seed.unwrap_or_else(rand::random::<u64>);

    let mut human = match vs {
        Vs::Human => Some(HumanStrategy::new(input, prompt)),
        Vs::Ai => None,
    };
    let mut players = Vec::with_capacity(cfg.players);
    for seat in 0..cfg.players {
        if seat == 0
            && let Some(strategy) = human.take()
        {
            players.push(Player::new(HUMAN_NAME, Box::new(strategy)));
            continue;
        }
        let strategy = build_strategy(&cfg.strategy, seed.wrapping_add(seat as u64))?;
        players.push(Player::new((seat + 1).to_string(), strategy));
    }

    writeln!(
        out,
        "play: vs={} players={} win={} seed={} strategy={}",
        vs.as_str(),
        cfg.players,
        cfg.win,
        seed,
        cfg.strategy
    )?;

    let config = MatchConfig {
        win: cfg.win,
        seed: Some(seed),
        deck_order: None,
    };
    let mut game = Match::new(players, config)?;
    loop {
        let flow = match game.play_round() {
            Ok(flow) => flow,
            Err(e) => {
                let e = CliError::from(e);
                if matches!(e, CliError::Interrupted(_)) {
                    writeln!(out, "Match abandoned in round {}", game.rounds())?;
                    writeln!(out, "{}", format_standings(&current_standings(&game)))?;
                }
                return Err(e);
            }
        };
        if let Some(summary) = game.history().last() {
            writeln!(out, "{}", format_round(summary))?;
        }
        match flow {
            Flow::Continue => {
                writeln!(out, "{}", format_standings(&current_standings(&game)))?;
                game.advance();
            }
            Flow::MatchOver(standings) => {
                let result = game.finish(standings);
                writeln!(out, "{}", winner_line(&result.winner, result.rounds))?;
                writeln!(out, "{}", format_standings(&result.players))?;
                return Ok(());
            }
        }
    }
}

fn winner_line(winner: &str, rounds: u32) -> String {
    if winner == HUMAN_NAME {
        format!("Winner: {} after {} rounds", winner, rounds)
    } else {
        format!("Winner: Player {} after {} rounds", winner, rounds)
    }
}

fn current_standings(game: &Match) -> Vec<Standing> {
    game.players()
        .iter()
        .map(|p| Standing {
            name: p.name().to_string(),
            score: p.score(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::{Cursor, sink};

    fn flags(players: usize, win: u32, seed: u64) -> MatchFlags {
        MatchFlags {
            players: Some(players),
            win: Some(win),
            seed: Some(seed),
            strategy: Some("greedy".into()),
        }
    }

    fn no_input() -> (Box<dyn BufRead + Send>, Box<dyn Write + Send>) {
        (Box::new(Cursor::new(Vec::new())), Box::new(sink()))
    }

    #[test]
    #[serial]
    fn ai_match_runs_to_a_winner() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let (input, prompt) = no_input();
        handle_play_command(flags(3, 61, 7), Vs::Ai, &mut out, &mut err, input, prompt).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("play: vs=ai players=3 win=61 seed=7"));
        assert!(text.contains("Round 1 |"));
        assert!(text.contains("Winner: Player "));
        assert!(err.is_empty());
    }

    #[test]
    fn human_winner_is_named_without_a_seat_prefix() {
        assert_eq!(winner_line(HUMAN_NAME, 4), "Winner: You after 4 rounds");
        assert_eq!(winner_line("2", 7), "Winner: Player 2 after 7 rounds");
    }

    #[test]
    #[serial]
    fn same_seed_same_match() {
        let run = || {
            let mut out = Vec::new();
            let (input, prompt) = no_input();
            handle_play_command(flags(2, 121, 99), Vs::Ai, &mut out, &mut sink(), input, prompt)
                .unwrap();
            out
        };
        assert_eq!(run(), run());
    }

    #[test]
    #[serial]
    fn human_exit_abandons_the_match() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let input: Box<dyn BufRead + Send> = Box::new(Cursor::new(b"exit\n".to_vec()));
        let result = handle_play_command(
            flags(2, 121, 1),
            Vs::Human,
            &mut out,
            &mut err,
            input,
            Box::new(sink()),
        );
        assert!(matches!(result, Err(CliError::Interrupted(_))));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Match abandoned in round 1"));
        assert!(text.contains("Player You: 0"));
    }

    #[test]
    #[serial]
    fn bad_settings_are_reported() {
        let mut err = Vec::new();
        let (input, prompt) = no_input();
        let result = handle_play_command(
            flags(11, 121, 1),
            Vs::Ai,
            &mut Vec::new(),
            &mut err,
            input,
            prompt,
        );
        assert!(matches!(result, Err(CliError::Config(_))));
        assert!(String::from_utf8(err).unwrap().contains("players must be between"));
    }
}
