//! Random strategy: every decision is a uniform pick from the allowed cards.
//!
//! Useful as a floor when comparing strategies and for shaking out rule
//! edge cases in long simulations.

use cribbage_engine::cards::Card;
use cribbage_engine::errors::StrategyError;
use cribbage_engine::strategy::Strategy;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha20Rng;

/// Discards and plays at random from a seeded RNG, so a seeded match is
/// reproducible.
///
/// # Example
///
/// ```rust
/// use cribbage_ai::random::RandomStrategy;
/// use cribbage_engine::cards::{Card, Rank, Suit};
/// use cribbage_engine::strategy::Strategy;
///
/// let mut strategy = RandomStrategy::new(3);
/// let legal = [Card::new(Rank::Four, Suit::Clubs)];
/// assert_eq!(strategy.play(&legal, &[], &[]).unwrap(), Some(legal[0]));
/// ```
#[derive(Debug, Clone)]
pub struct RandomStrategy {
    rng: ChaCha20Rng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn discard(
        &mut self,
        hand: &[Card],
        _seen: &[Card],
        count: usize,
    ) -> Result<Vec<Card>, StrategyError> {
        Ok(hand.choose_multiple(&mut self.rng, count).copied().collect())
    }

    fn play(
        &mut self,
        legal: &[Card],
        _seen: &[Card],
        _stack: &[Card],
    ) -> Result<Option<Card>, StrategyError> {
        Ok(legal.choose(&mut self.rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cribbage_engine::cards::full_deck;

    #[test]
    fn discards_are_distinct_cards_from_the_hand() {
        let hand: Vec<Card> = full_deck().into_iter().take(6).collect();
        let mut strategy = RandomStrategy::new(11);
        for _ in 0..50 {
            let picked = strategy.discard(&hand, &hand, 2).unwrap();
            assert_eq!(picked.len(), 2);
            assert_ne!(picked[0], picked[1]);
            assert!(picked.iter().all(|c| hand.contains(c)));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let legal: Vec<Card> = full_deck().into_iter().take(4).collect();
        let mut a = RandomStrategy::new(5);
        let mut b = RandomStrategy::new(5);
        for _ in 0..20 {
            assert_eq!(
                a.play(&legal, &[], &[]).unwrap(),
                b.play(&legal, &[], &[]).unwrap()
            );
        }
    }

    #[test]
    fn plays_only_legal_cards() {
        let legal: Vec<Card> = full_deck().into_iter().skip(10).take(3).collect();
        let mut strategy = RandomStrategy::new(9);
        for _ in 0..30 {
            let card = strategy.play(&legal, &[], &[]).unwrap().unwrap();
            assert!(legal.contains(&card));
        }
    }
}
