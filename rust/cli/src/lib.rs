//! # Cribbage CLI Library
//!
//! Command-line front end for the cribbage engine: play a match at the
//! terminal, simulate batches of automated matches, and score hands or
//! pegging stacks written in card notation (`KD`, `1H` for the ten of hearts).
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["cribbage", "play", "--vs", "human", "--players", "3"];
//! let code = cribbage_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play a match against automated players, or watch them play
//! - `sim`: Play many automated matches and record them as JSONL
//! - `stats`: Aggregate wins and match lengths from recorded matches
//! - `score`: Count a hand with an optional cut
//! - `peg`: Score the newest card of a pegging stack
//! - `deal`: Deal one round for inspection
//! - `cfg`: Display current configuration settings

use clap::{Parser, ValueEnum};
use std::io::{BufReader, Write};
#[macro_use]
mod macros;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod human;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, CribbageCli};

use commands::{
    MatchFlags, handle_cfg_command, handle_deal_command, handle_peg_command, handle_play_command,
    handle_score_command, handle_sim_command, handle_stats_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// `play --vs human` reads moves from the process's stdin and prompts on stdout.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` when a match is
/// abandoned or a simulation is interrupted
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let args = ["cribbage", "score", "--hand", "5H 5D 5S JC", "--cut", "5C"];
/// let code = cribbage_cli::run(args, &mut out, &mut std::io::stderr());
/// assert_eq!(code, 0);
/// assert_eq!(String::from_utf8(out).unwrap(), "Score: 29\n");
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["play", "sim", "stats", "score", "peg", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = CribbageCli::try_parse_from(&argv);
    let cli = match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Cribbage CLI");
                    write_or_exit!(err, "Usage: cribbage <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: cribbage --help");
                    exit_code::ERROR
                }
            };
        }
        Ok(cli) => cli,
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Play {
            players,
            win,
            seed,
            vs,
            strategy,
        } => {
            let flags = MatchFlags {
                players,
                win,
                seed,
                strategy,
            };
            // Use stdin for real input (supports both TTY and piped stdin)
            let input = Box::new(BufReader::new(std::io::stdin()));
            let prompt = Box::new(std::io::stdout());
            handle_play_command(flags, vs, out, err, input, prompt)
        }
        Commands::Sim {
            matches,
            output,
            seed,
            players,
            strategy,
        } => {
            let flags = MatchFlags {
                players,
                win: None,
                seed,
                strategy,
            };
            handle_sim_command(matches, output, flags, out, err)
        }
        Commands::Stats { input } => handle_stats_command(input, out, err),
        Commands::Score { hand, cut, explain } => {
            handle_score_command(hand, cut, explain, out, err)
        }
        Commands::Peg { stack, explain } => handle_peg_command(stack, explain, out, err),
        Commands::Deal { players, seed } => handle_deal_command(players, seed, out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            tracing::info!(reason = %msg, "run interrupted");
            exit_code::INTERRUPTED
        }
        // handlers report bad input and configuration themselves
        Err(e @ (CliError::Engine(_) | CliError::Io(_))) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            exit_code::ERROR
        }
    }
}

/// Who sits in seat 1 for the `play` command.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum Vs {
    /// You play seat 1 by typing card indices
    Human,
    /// Every seat is an automated player
    Ai,
}

impl Vs {
    /// Returns the string representation of the opponent type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cribbage_cli::Vs;
    /// let opponent = Vs::Ai;
    /// assert_eq!(opponent.as_str(), "ai");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Vs::Human => "human",
            Vs::Ai => "ai",
        }
    }
}
