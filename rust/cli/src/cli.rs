//! Command-line argument definitions.

use clap::{Parser, Subcommand};

use crate::Vs;

#[derive(Parser, Debug)]
#[command(
    name = "cribbage",
    version,
    about = "Cribbage for two to ten players: play, simulate, and score hands"
)]
pub struct CribbageCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Flags left unset fall back to the resolved configuration.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a full match in the terminal
    Play {
        #[arg(long)]
        players: Option<usize>,
        /// Score that ends the match
        #[arg(long)]
        win: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Whether seat 1 is you or another automated player
        #[arg(long, value_enum, default_value_t = Vs::Ai)]
        vs: Vs,
        /// Strategy for the automated players
        #[arg(long)]
        strategy: Option<String>,
    },
    /// Play automated matches and record them as JSONL
    Sim {
        #[arg(long, default_value_t = 1)]
        matches: u32,
        /// Output file; a `.zst` suffix compresses it
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        strategy: Option<String>,
    },
    /// Summarize recorded matches
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Count a hand, e.g. --hand "5H 5D 5S JC" --cut 5C
    Score {
        #[arg(long)]
        hand: String,
        #[arg(long)]
        cut: Option<String>,
        /// List every scoring combination
        #[arg(long)]
        explain: bool,
    },
    /// Score the newest card of a pegging stack, e.g. --stack "7S 8H"
    Peg {
        #[arg(long)]
        stack: String,
        #[arg(long)]
        explain: bool,
    },
    /// Deal and collect one round, then show hands, crib and cut
    Deal {
        #[arg(long)]
        players: Option<usize>,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
