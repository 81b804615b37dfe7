use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::player::Player;
use crate::round::{Flow, Round, RoundSummary, Standing, DECK_SIZE};

pub const MIN_PLAYERS: usize = 2;
/// Most players a single deck can serve: everyone's four cards, the crib
/// and a cut taken clear of the deck's edges.
pub const MAX_PLAYERS: usize = 10;
pub const DEFAULT_WIN: u32 = 121;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct MatchConfig {
    /// Score that ends the match
    pub win: u32,
    /// Seed for shuffling and cutting; random when absent
    pub seed: Option<u64>,
    /// Fixed deck ordering reused every round instead of shuffling
    pub deck_order: Option<Vec<Card>>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            win: DEFAULT_WIN,
            seed: None,
            deck_order: None,
        }
    }
}

/// Final standings of a finished match.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub players: Vec<Standing>,
    pub rounds: u32,
    pub winner: String,
    pub history: Vec<RoundSummary>,
}

/// Plays rounds until somebody reaches the win threshold.
///
/// # Examples
///
/// ```
/// use cribbage_engine::game::{Match, MatchConfig};
///
/// let config = MatchConfig { seed: Some(7), ..MatchConfig::default() };
/// let mut game = Match::with_players(2, config).unwrap();
/// let result = game.play().unwrap();
/// assert!(result.players.iter().any(|p| p.score >= 121));
/// assert_eq!(result.history.len() as u32, result.rounds);
/// ```
#[derive(Debug)]
pub struct Match {
    players: Vec<Player>,
    deck: Deck,
    win: u32,
    seed: u64,
    rounds: u32,
    history: Vec<RoundSummary>,
}

impl Match {
    pub fn new(players: Vec<Player>, config: MatchConfig) -> Result<Self, EngineError> {
        if players.is_empty() {
            return Err(EngineError::NoPlayers);
        }
        if players.len() < MIN_PLAYERS {
            return Err(EngineError::InvalidConfig(format!(
                "a match needs at least {} players",
                MIN_PLAYERS
            )));
        }
        if players.len() > MAX_PLAYERS {
            return Err(EngineError::TooManyPlayers {
                count: players.len(),
                max: MAX_PLAYERS,
            });
        }
        if config.win == 0 {
            return Err(EngineError::InvalidConfig(
                "win threshold must be positive".to_string(),
            ));
        }
        let seed = config.seed.unwrap_or_else(rand::random::<u64>);
        let deck = match config.deck_order {
            Some(order) => {
                check_deck_order(&order)?;
                Deck::from_order(order, seed)
            }
            None => Deck::new_with_seed(seed),
        };
        Ok(Self {
            players,
            deck,
            win: config.win,
            seed,
            rounds: 0,
            history: Vec::new(),
        })
    }

    /// `n` players named "1".."n", all using the sequential strategy.
    pub fn with_players(n: usize, config: MatchConfig) -> Result<Self, EngineError> {
        if n == 0 {
            return Err(EngineError::NoPlayers);
        }
        let players = (1..=n).map(|i| Player::sequential(i.to_string())).collect();
        Self::new(players, config)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }
    pub fn seed(&self) -> u64 {
        self.seed
    }
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
    pub fn win(&self) -> u32 {
        self.win
    }
    pub fn history(&self) -> &[RoundSummary] {
        &self.history
    }

    /// Rotates the turn order right by one: the dealer leads the next round
    /// and the player before them deals.
    pub fn advance(&mut self) {
        self.players.rotate_right(1);
    }

    /// Plays one round and records its summary.
    pub fn play_round(&mut self) -> Result<Flow, EngineError> {
        self.rounds += 1;
        for player in self.players.iter_mut() {
            player.reshuffle();
        }
        self.deck.shuffle();
        debug!(round = self.rounds, dealer = self.dealer_name(), "round start");

        let (flow, summary) = {
            let mut round = Round::new(&mut self.players, &mut self.deck, self.win)?;
            let flow = round.play()?;
            (flow, round.summary(self.rounds))
        };
        self.history.push(summary);
        Ok(flow)
    }

    /// Plays rounds, rotating the deal after each, until the win threshold
    /// is reached.
    pub fn play(&mut self) -> Result<MatchResult, EngineError> {
        loop {
            if let Flow::MatchOver(standings) = self.play_round()? {
                return Ok(self.finish(standings));
            }
            self.advance();
        }
    }

    /// Result for final `standings`, as returned with [`Flow::MatchOver`].
    /// Front ends that drive [`Match::play_round`] themselves call this once
    /// the match is over.
    pub fn finish(&self, standings: Vec<Standing>) -> MatchResult {
        let winner = standings
            .iter()
            .filter(|s| s.score >= self.win)
            .map(|s| s.name.clone())
            .next()
            .unwrap_or_default();
        info!(winner = %winner, rounds = self.rounds, "match over");
        MatchResult {
            players: standings,
            rounds: self.rounds,
            winner,
            history: self.history.clone(),
        }
    }

    fn dealer_name(&self) -> &str {
        self.players.last().map(|p| p.name()).unwrap_or_default()
    }
}

fn check_deck_order(order: &[Card]) -> Result<(), EngineError> {
    let distinct: HashSet<&Card> = order.iter().collect();
    if order.len() != DECK_SIZE || distinct.len() != DECK_SIZE {
        return Err(EngineError::InvalidConfig(format!(
            "deck order must hold {} distinct cards",
            DECK_SIZE
        )));
    }
    Ok(())
}
