//! # cribbage-engine: Cribbage Rules and Play Engine
//!
//! Models a standard deck, deals and plays cribbage rounds among two to ten
//! players, and scores both the pegging and the count. Decisions are made by
//! pluggable [`strategy::Strategy`] implementations; everything else (turn
//! order, legality, scoring, the win threshold) is enforced here.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Seeded shuffling and the cut, with ChaCha20 RNG
//! - [`scoring`] - The count: fifteens, pairs, runs, flush and his nobs
//! - [`pegging`] - Points for the newest card on the pegging stack
//! - [`player`] - Player state and strategy contract enforcement
//! - [`strategy`] - The decision-making trait and the sequential strategy
//! - [`round`] - One deal: crib, cut, tricks and count
//! - [`game`] - The match loop and dealer rotation
//! - [`logger`] - MatchRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use cribbage_engine::cards::{Card, Rank, Suit};
//! use cribbage_engine::pegging::score_pegs;
//! use cribbage_engine::scoring::score_hand;
//!
//! let hand = [
//!     Card::new(Rank::Nine, Suit::Spades),
//!     Card::new(Rank::Ten, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//! ];
//! assert_eq!(score_hand(&hand, None), 4);
//! assert_eq!(score_hand(&hand, Some(Card::new(Rank::Two, Suit::Spades))), 5);
//!
//! let stack = [Card::new(Rank::Seven, Suit::Spades), Card::new(Rank::Eight, Suit::Hearts)];
//! assert_eq!(score_pegs(&stack), 2);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Matches are reproducible from a seed:
//!
//! ```rust
//! use cribbage_engine::game::{Match, MatchConfig};
//!
//! let config = MatchConfig { seed: Some(42), ..MatchConfig::default() };
//! let a = Match::with_players(3, config.clone()).unwrap().play().unwrap();
//! let b = Match::with_players(3, config).unwrap().play().unwrap();
//! assert_eq!(a, b);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod game;
pub mod logger;
pub mod pegging;
pub mod player;
pub mod round;
pub mod scoring;
pub mod strategy;
