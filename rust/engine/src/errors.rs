use thiserror::Error;

use crate::cards::Card;
use crate::round::RoundPhase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("A match needs at least one player")]
    NoPlayers,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Too many players: {count}, the deck supports at most {max}")]
    TooManyPlayers { count: usize, max: usize },
    #[error("Deck exhausted")]
    DeckExhausted,
    #[error("Player {player} returned an invalid discard: {reason}")]
    InvalidDiscard { player: String, reason: String },
    #[error("Player {player} played {card}, which is not a legal play")]
    IllegalPlay { player: String, card: Card },
    #[error("Round is in the {actual:?} phase (expected {expected:?})")]
    OutOfPhase {
        expected: RoundPhase,
        actual: RoundPhase,
    },
    #[error("Every player passed on an empty stack while cards remain")]
    PeggingStalled,
    #[error("Player {player} abandoned the match")]
    Abandoned { player: String },
    #[error("Strategy for player {player} failed: {message}")]
    Strategy { player: String, message: String },
}

/// Failures reported by a [`crate::strategy::Strategy`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// The decision maker asked to stop the match (e.g. a human typed `exit`).
    #[error("match abandoned")]
    Abandoned,
    /// The strategy could not reach its input or output.
    #[error("strategy I/O failed: {0}")]
    Io(String),
}
