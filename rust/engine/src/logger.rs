use serde::{Deserialize, Serialize};

use crate::game::MatchResult;
use crate::round::{RoundSummary, Standing};

/// One finished match, serialized as a single JSONL line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Unique identifier for this match (format: YYYYMMDD-NNNNNN)
    pub match_id: String,
    /// RNG seed used for shuffling and cutting
    pub seed: Option<u64>,
    /// Score that ended the match
    pub win: u32,
    /// Strategy name per seat, in the initial turn order
    pub strategies: Vec<String>,
    pub players: Vec<Standing>,
    pub winner: String,
    pub rounds: u32,
    #[serde(default)]
    pub history: Vec<RoundSummary>,
    /// Timestamp when the match finished (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl MatchRecord {
    pub fn from_result(
        match_id: String,
        seed: Option<u64>,
        win: u32,
        strategies: Vec<String>,
        result: MatchResult,
    ) -> Self {
        Self {
            match_id,
            seed,
            win,
            strategies,
            players: result.players,
            winner: result.winner,
            rounds: result.rounds,
            history: result.history,
            ts: None,
            meta: None,
        }
    }
}

pub fn format_match_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes one [`MatchRecord`] per line and hands out match ids for today.
pub struct MatchLogger {
    writer: Option<Box<dyn Write>>,
    date: String,
    seq: u32,
}

impl MatchLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self::from_writer(Box::new(BufWriter::new(f))))
    }

    /// Logger over any sink, e.g. a compressing encoder.
    pub fn from_writer(writer: Box<dyn Write>) -> Self {
        Self {
            writer: Some(writer),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        }
    }

    /// Logger that only hands out ids; nothing is written.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_match_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &MatchRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
