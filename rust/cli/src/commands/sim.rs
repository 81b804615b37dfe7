//! Simulation command handler for batches of automated matches.
//!
//! Plays N matches among automated players and optionally records one
//! [`MatchRecord`] per match as JSONL. An output path ending in `.zst` is
//! Zstandard-compressed as it is written.
//!
//! # Environment Variables
//!
//! - `CRIBBAGE_SIM_BREAK_AFTER`: Stop after N matches (for testing the
//!   interrupted path)
//!
//! # Examples
//!
//! ```no_run
//! use std::io;
//!
//! let args = [
//!     "cribbage", "sim", "--matches", "100", "--output", "data/sim.jsonl.zst", "--seed", "42",
//! ];
//! let code = cribbage_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use cribbage_engine::game::{Match, MatchConfig};
use cribbage_engine::logger::{MatchLogger, MatchRecord};
use cribbage_engine::player::Player;

use super::{MatchFlags, build_strategy};
use crate::config::Config;
use crate::error::CliError;
use crate::io_utils::ensure_parent_dir;
use crate::ui;

/// Handle the sim command.
///
/// Match `i` (0-based) is seeded with `seed + i`, and the strategy at seat
/// `s` with `seed + i + s`, so a run is reproducible from its base seed.
///
/// # Returns
///
/// * `Ok(())` once every match is played and recorded
/// * `Err(CliError::Interrupted)` when stopped early; finished matches stay recorded
pub fn handle_sim_command(
    matches: u32,
    output: Option<String>,
    flags: MatchFlags,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if matches == 0 {
        ui::write_error(err, "matches must be >= 1")?;
        return Err(CliError::InvalidInput("matches must be >= 1".to_string()));
    }
    let cfg = flags.resolve(err)?;
    let base_seed = cfg.seed.unwrap_or_else(rand::random::<u64>);

    let mut logger = match output.as_deref() {
        Some(path) => match open_logger(Path::new(path)) {
            Ok(logger) => Some(logger),
            Err(e) => {
                ui::write_error(err, &format!("Failed to open output file: {}", e))?;
                return Err(e);
            }
        },
        None => None,
    };

    let break_after = std::env::var("CRIBBAGE_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<u32>().ok());

    let mut wins: BTreeMap<String, u32> = BTreeMap::new();
    let mut total_rounds = 0u64;
    let mut completed = 0u32;
    for i in 0..matches {
        let seed = base_seed.wrapping_add(i as u64);
        let (players, strategies) = seat_players(&cfg, seed)?;
        let config = MatchConfig {
            win: cfg.win,
            seed: Some(seed),
            deck_order: None,
        };
        let result = Match::new(players, config)?.play()?;

        *wins.entry(result.winner.clone()).or_default() += 1;
        total_rounds += result.rounds as u64;
        if let Some(logger) = logger.as_mut() {
            let id = logger.next_id();
            let record = MatchRecord::from_result(id, Some(seed), cfg.win, strategies, result);
            logger.write(&record)?;
        }
        completed += 1;

        if let Some(b) = break_after
            && completed == b
            && completed < matches
        {
            writeln!(out, "Interrupted: saved {}/{}", completed, matches)?;
            return Err(CliError::Interrupted(format!(
                "Interrupted: saved {}/{}",
                completed, matches
            )));
        }
    }

    writeln!(out, "Simulated: {} matches", completed)?;
    let summary = serde_json::json!({
        "matches": completed,
        "seed": base_seed,
        "wins": wins,
        "average_rounds": total_rounds as f64 / completed as f64,
    });
    let json = serde_json::to_string_pretty(&summary).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json)?;
    Ok(())
}

fn seat_players(cfg: &Config, seed: u64) -> Result<(Vec<Player>, Vec<String>), CliError> {
    let mut players = Vec::with_capacity(cfg.players);
    for seat in 0..cfg.players {
        let strategy = build_strategy(&cfg.strategy, seed.wrapping_add(seat as u64))?;
        players.push(Player::new((seat + 1).to_string(), strategy));
    }
    let strategies = players
        .iter()
        .map(|p| p.strategy_name().to_string())
        .collect();
    Ok((players, strategies))
}

fn open_logger(path: &Path) -> Result<MatchLogger, CliError> {
    let is_zst = path.extension().is_some_and(|ext| ext == "zst");
    if !is_zst {
        return Ok(MatchLogger::create(path)?);
    }
    ensure_parent_dir(path).map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    let file = std::fs::File::create(path)?;
    let encoder = zstd::stream::write::Encoder::new(file, 0)?.auto_finish();
    Ok(MatchLogger::from_writer(Box::new(encoder)))
}
