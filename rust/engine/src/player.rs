use std::fmt;

use tracing::warn;

use crate::cards::{total_value, Card};
use crate::errors::{EngineError, StrategyError};
use crate::pegging::STACK_MAX;
use crate::strategy::{Sequential, Strategy};

/// A cribbage player: the cards held, the cards observed this round, a
/// running score and the strategy that makes their decisions.
///
/// `hand` shrinks as cards go to the crib and to the pegging stack, while
/// `count_hand` keeps the four cards retained after discarding so they can
/// be counted once pegging is over.
pub struct Player {
    name: String,
    score: u32,
    hand: Vec<Card>,
    count_hand: Vec<Card>,
    seen: Vec<Card>,
    strategy: Box<dyn Strategy>,
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("score", &self.score)
            .field("hand", &self.hand)
            .field("count_hand", &self.count_hand)
            .field("seen", &self.seen)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl Player {
    pub fn new(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            hand: Vec::new(),
            count_hand: Vec::new(),
            seen: Vec::new(),
            strategy,
        }
    }

    /// Player using the [`Sequential`] strategy.
    pub fn sequential(name: impl Into<String>) -> Self {
        Self::new(name, Box::new(Sequential::new()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }
    pub fn count_hand(&self) -> &[Card] {
        &self.count_hand
    }
    pub fn seen(&self) -> &[Card] {
        &self.seen
    }
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    /// Replaces the held cards; every card is also marked as seen.
    pub fn set_hand(&mut self, cards: Vec<Card>) {
        for &card in &cards {
            self.see(card);
        }
        self.hand = cards;
    }

    pub fn set_count_hand(&mut self, cards: Vec<Card>) {
        self.count_hand = cards;
    }

    pub fn give_card(&mut self, card: Card) {
        self.see(card);
        self.hand.push(card);
    }

    pub fn see(&mut self, card: Card) {
        if !self.seen.contains(&card) {
            self.seen.push(card);
        }
    }

    /// Forgets the previous round: cards held, counted and seen.
    pub fn reshuffle(&mut self) {
        self.hand.clear();
        self.count_hand.clear();
        self.seen.clear();
    }

    pub fn add_points(&mut self, points: u32) -> u32 {
        self.score = self.score.saturating_add(points);
        self.score
    }

    /// Moves `count` cards chosen by the strategy out of the hand and
    /// freezes the remaining cards as the hand to be counted.
    pub fn toss(&mut self, count: usize) -> Result<Vec<Card>, EngineError> {
        let discards = if count == 0 {
            Vec::new()
        } else {
            self.strategy
                .discard(&self.hand, &self.seen, count)
                .map_err(|e| self.strategy_failure(e))?
        };
        self.check_discards(&discards, count)?;
        self.hand.retain(|card| !discards.contains(card));
        self.count_hand = self.hand.clone();
        Ok(discards)
    }

    /// Cards whose value fits in `room` points.
    pub fn legal_plays(&self, room: u32) -> Vec<Card> {
        self.hand
            .iter()
            .copied()
            .filter(|c| c.value() as u32 <= room)
            .collect()
    }

    /// Asks the strategy for a card to add to `stack`. Returns `None` when
    /// nothing fits or the strategy passes; the strategy is not consulted
    /// when no card fits.
    pub fn play(&mut self, stack: &[Card]) -> Result<Option<Card>, EngineError> {
        let room = STACK_MAX.saturating_sub(total_value(stack));
        let legal = self.legal_plays(room);
        if legal.is_empty() {
            return Ok(None);
        }
        let choice = self
            .strategy
            .play(&legal, &self.seen, stack)
            .map_err(|e| self.strategy_failure(e))?;
        let Some(card) = choice else {
            return Ok(None);
        };
        if !legal.contains(&card) {
            warn!(player = %self.name, card = %card, "strategy chose an illegal card");
            return Err(EngineError::IllegalPlay {
                player: self.name.clone(),
                card,
            });
        }
        self.hand.retain(|c| *c != card);
        Ok(Some(card))
    }

    fn check_discards(&self, discards: &[Card], count: usize) -> Result<(), EngineError> {
        let reason = if discards.len() != count {
            Some(format!("expected {} cards, got {}", count, discards.len()))
        } else if let Some(card) = discards.iter().find(|c| !self.hand.contains(c)) {
            Some(format!("{} is not in the hand", card))
        } else if discards
            .iter()
            .enumerate()
            .any(|(i, c)| discards[i + 1..].contains(c))
        {
            Some("the same card was discarded twice".to_string())
        } else {
            None
        };
        match reason {
            Some(reason) => {
                warn!(player = %self.name, %reason, "strategy returned an invalid discard");
                Err(EngineError::InvalidDiscard {
                    player: self.name.clone(),
                    reason,
                })
            }
            None => Ok(()),
        }
    }

    fn strategy_failure(&self, error: StrategyError) -> EngineError {
        match error {
            StrategyError::Abandoned => EngineError::Abandoned {
                player: self.name.clone(),
            },
            StrategyError::Io(message) => EngineError::Strategy {
                player: self.name.clone(),
                message,
            },
        }
    }
}
