use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;

/// Cards at each end of the deck that the cut never reaches.
pub const CUT_MARGIN: usize = 3;

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    // fixed ordering that bypasses shuffling
    order: Option<Vec<Card>>,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            order: None,
            rng,
        }
    }

    /// Builds a deck whose ordering is fixed: `shuffle` and `reset` restore
    /// `cards` as given. The first card in `cards` is the first one dealt.
    pub fn from_order(cards: Vec<Card>, seed: u64) -> Self {
        Self {
            cards: top_last(&cards),
            order: Some(cards),
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn shuffle(&mut self) {
        self.reset();
        if self.order.is_none() {
            self.cards.shuffle(&mut self.rng);
        }
    }

    /// Draws the top card.
    pub fn deal_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Removes one card from a random position at least `margin` cards away
    /// from either end of the deck.
    pub fn cut(&mut self, margin: usize) -> Result<Card, EngineError> {
        let len = self.cards.len();
        if len <= margin * 2 {
            return Err(EngineError::DeckExhausted);
        }
        let index = self.rng.random_range(margin..len - margin);
        Ok(self.cards.remove(index))
    }

    pub fn reset(&mut self) {
        self.cards = match &self.order {
            Some(order) => top_last(order),
            None => full_deck(),
        };
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn is_fixed(&self) -> bool {
        self.order.is_some()
    }
}

// cards are popped from the end, so store the dealing order reversed
fn top_last(cards: &[Card]) -> Vec<Card> {
    cards.iter().rev().copied().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use std::collections::HashSet;

    #[test]
    fn fixed_order_deals_front_to_back_and_ignores_shuffle() {
        let order = full_deck();
        let mut deck = Deck::from_order(order.clone(), 1);
        deck.shuffle();
        assert!(deck.is_fixed());
        let first: Vec<Card> = (0..3).filter_map(|_| deck.deal_card()).collect();
        assert_eq!(first, order[..3].to_vec());
    }

    #[test]
    fn cut_stays_away_from_the_ends() {
        let order: Vec<Card> = full_deck().into_iter().take(7).collect();
        for seed in 0..32 {
            let mut deck = Deck::from_order(order.clone(), seed);
            let card = deck.cut(CUT_MARGIN).unwrap();
            // only the middle card of seven is reachable with a margin of three
            assert_eq!(card, order[3]);
            assert_eq!(deck.remaining(), 6);
        }
    }

    #[test]
    fn cut_from_too_small_deck_is_exhausted() {
        let order = vec![
            Card::new(Rank::Jack, Suit::Hearts),
            Card::new(Rank::Two, Suit::Hearts),
        ];
        let mut deck = Deck::from_order(order, 1);
        assert_eq!(deck.cut(CUT_MARGIN), Err(EngineError::DeckExhausted));
    }

    #[test]
    fn reset_restores_all_cards_after_dealing() {
        let mut deck = Deck::new_with_seed(9);
        deck.shuffle();
        for _ in 0..10 {
            deck.deal_card();
        }
        deck.cut(CUT_MARGIN).unwrap();
        deck.reset();
        let mut set = HashSet::new();
        while let Some(card) = deck.deal_card() {
            assert!(set.insert(card));
        }
        assert_eq!(set.len(), 52);
    }
}
