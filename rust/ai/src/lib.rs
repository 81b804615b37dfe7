//! # cribbage-ai: Automated Cribbage Players
//!
//! Provides [`Strategy`] implementations that can sit at any seat of a
//! cribbage match, plus a factory that builds them by name.
//!
//! ## Core Components
//!
//! - [`random`] - Random discards and random legal plays
//! - [`greedy`] - Keeps the best-scoring hand and pegs for immediate points
//! - [`create_strategy`] - Factory function for creating strategies
//!
//! ## Quick Start
//!
//! ```rust
//! use cribbage_ai::create_strategy;
//! use cribbage_engine::game::{Match, MatchConfig};
//! use cribbage_engine::player::Player;
//!
//! let players = vec![
//!     Player::new("greedy", create_strategy("greedy", 1).expect("known strategy")),
//!     Player::new("random", create_strategy("random", 2).expect("known strategy")),
//! ];
//! let config = MatchConfig { seed: Some(42), ..MatchConfig::default() };
//! let result = Match::new(players, config).unwrap().play().unwrap();
//! println!("{} wins after {} rounds", result.winner, result.rounds);
//! ```
//!
//! ## Strategy Types
//!
//! - `"sequential"` - First cards to the crib, first legal card to the stack
//! - `"random"` - Uniformly random choices from a seeded RNG
//! - `"greedy"` - One-step lookahead on hand value and pegging points

use cribbage_engine::strategy::{Sequential, Strategy};

pub mod greedy;
pub mod random;

/// Names accepted by [`create_strategy`].
pub const STRATEGY_NAMES: [&str; 3] = ["sequential", "random", "greedy"];

/// Factory function to create strategies by name.
///
/// `seed` only matters for strategies that make random choices. Returns
/// `None` for an unknown name.
///
/// # Example
///
/// ```rust
/// use cribbage_ai::create_strategy;
///
/// let strategy = create_strategy("random", 7).unwrap();
/// assert_eq!(strategy.name(), "random");
/// assert!(create_strategy("psychic", 7).is_none());
/// ```
pub fn create_strategy(name: &str, seed: u64) -> Option<Box<dyn Strategy>> {
    match name {
        "sequential" => Some(Box::new(Sequential::new())),
        "random" => Some(Box::new(random::RandomStrategy::new(seed))),
        "greedy" => Some(Box::new(greedy::GreedyStrategy::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_name_builds() {
        for name in STRATEGY_NAMES {
            let strategy = create_strategy(name, 0).expect(name);
            assert_eq!(strategy.name(), name);
        }
    }

    #[test]
    fn unknown_name_is_none() {
        assert!(create_strategy("baseline", 0).is_none());
    }
}
