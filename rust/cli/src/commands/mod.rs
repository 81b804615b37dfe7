//! Command handler modules for the cribbage CLI.
//!
//! Each command is implemented in its own module file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Module-private helpers: Helper functions specific to that command
//! - Dependency injection: Output streams (`&mut dyn Write`) passed as parameters
//! - Error propagation: All errors propagated via `CliError` enum

pub mod cfg;
pub mod deal;
pub mod peg;
pub mod play;
pub mod score;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use peg::handle_peg_command;
pub use play::handle_play_command;
pub use score::handle_score_command;
pub use sim::handle_sim_command;
pub use stats::handle_stats_command;

use std::io::Write;

use cribbage_ai::create_strategy;
use cribbage_engine::strategy::Strategy;

use crate::config::{self, Config};
use crate::error::CliError;
use crate::ui;

/// Match settings given as flags. Unset values come from the configuration.
#[derive(Debug, Clone, Default)]
pub struct MatchFlags {
    pub players: Option<usize>,
    pub win: Option<u32>,
    pub seed: Option<u64>,
    pub strategy: Option<String>,
}

impl MatchFlags {
    pub(crate) fn resolve(self, err: &mut dyn Write) -> Result<Config, CliError> {
        let resolved = config::load()
            .and_then(|cfg| cfg.with_overrides(self.players, self.win, self.seed, self.strategy));
        match resolved {
            Ok(cfg) => Ok(cfg),
            Err(e) => {
                ui::write_error(err, &e.to_string())?;
                Err(e.into())
            }
        }
    }
}

pub(crate) fn build_strategy(name: &str, seed: u64) -> Result<Box<dyn Strategy>, CliError> {
    create_strategy(name, seed)
        .ok_or_else(|| CliError::Config(format!("unknown strategy '{}'", name)))
}
