//! Statistics aggregation over recorded matches.
//!
//! Reads JSONL match records (plain or `.jsonl.zst`, a single file or a
//! directory tree of them) and reports the number of matches, wins per
//! player and the average match length. Each record is also checked: the
//! winner must be a listed player at or past the win threshold, and the
//! per-round points must add up to the final scores.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use cribbage_engine::logger::MatchRecord;

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;

/// Aggregates statistics from JSONL match files.
///
/// # Returns
///
/// `Ok(())` when every readable record is consistent. An `Err` maps to exit
/// code `2`; the summary is still printed when records were readable.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    run_stats(&input, out, err)
}

#[derive(Default)]
struct StatsState {
    matches: u64,
    rounds: u64,
    wins: BTreeMap<String, u64>,
    skipped: u64,
    corrupted: u64,
    stats_ok: bool,
}

fn consume_stats_content(
    content: String,
    state: &mut StatsState,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let has_trailing_nl = content.ends_with('\n');
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    for (i, line) in lines.iter().enumerate() {
        if i == lines.len() - 1
            && !has_trailing_nl
            && serde_json::from_str::<serde_json::Value>(line).is_err()
        {
            state.skipped += 1;
            continue;
        }
        let rec: MatchRecord = parse_json_or_continue!(line, state.corrupted);

        if let Some(problem) = check_record(&rec) {
            state.stats_ok = false;
            ui::write_error(err, &format!("{} at match {}", problem, rec.match_id))?;
            continue;
        }

        state.matches += 1;
        state.rounds += rec.rounds as u64;
        *state.wins.entry(rec.winner).or_default() += 1;
    }
    Ok(())
}

fn check_record(rec: &MatchRecord) -> Option<String> {
    let Some(winner) = rec.players.iter().find(|p| p.name == rec.winner) else {
        return Some(format!("Unknown winner {}", rec.winner));
    };
    if winner.score < rec.win {
        return Some(format!(
            "Winner {} has {} of {} points",
            rec.winner, winner.score, rec.win
        ));
    }
    if !rec.history.is_empty() {
        let earned: u64 = rec
            .history
            .iter()
            .flat_map(|r| r.points.iter())
            .map(|&p| p as u64)
            .sum();
        let scored: u64 = rec.players.iter().map(|p| p.score as u64).sum();
        if earned != scored {
            return Some(format!(
                "Round points ({}) do not match final scores ({})",
                earned, scored
            ));
        }
    }
    None
}

fn run_stats(input: &str, out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let path = Path::new(input);
    let mut state = StatsState {
        stats_ok: true,
        ..StatsState::default()
    };

    if path.is_dir() {
        let mut files = 0usize;
        let mut stack = vec![path.to_path_buf()];
        while let Some(d) = stack.pop() {
            let rd = match std::fs::read_dir(&d) {
                Ok(v) => v,
                Err(_) => continue,
            };
            for e in rd.filter_map(Result::ok) {
                let p = e.path();
                if p.is_dir() {
                    stack.push(p);
                } else if let Some(fname) = p.file_name().and_then(|f| f.to_str())
                    && (fname.ends_with(".jsonl") || fname.ends_with(".jsonl.zst"))
                {
                    files += 1;
                    match read_text_auto(&p.to_string_lossy()) {
                        Ok(content) => consume_stats_content(content, &mut state, err)?,
                        Err(_) => state.corrupted += 1,
                    }
                }
            }
        }
        if files == 0 {
            ui::display_warning(err, &format!("No match files found under {}", input))?;
        }
    } else {
        match read_text_auto(input) {
            Ok(s) => consume_stats_content(s, &mut state, err)?,
            Err(e) => {
                ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
                return Err(CliError::Config(format!("Failed to read {}: {}", input, e)));
            }
        }
    }

    if state.corrupted > 0 {
        ui::write_error(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    if state.skipped > 0 {
        ui::write_error(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if !path.is_dir() && state.matches == 0 && (state.corrupted > 0 || state.skipped > 0) {
        ui::write_error(err, "Invalid record")?;
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let average_rounds = if state.matches == 0 {
        0.0
    } else {
        state.rounds as f64 / state.matches as f64
    };
    let summary = serde_json::json!({
        "matches": state.matches,
        "wins": state.wins,
        "average_rounds": average_rounds,
        "corrupted": state.corrupted,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    if state.stats_ok {
        Ok(())
    } else {
        Err(CliError::InvalidInput(
            "Statistics validation failed".to_string(),
        ))
    }
}
