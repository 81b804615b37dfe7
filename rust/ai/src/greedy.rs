//! Greedy strategy: one-step lookahead on both decisions.
//!
//! **Discard:** try every way of sending `count` cards to the crib and keep
//! the remaining cards with the highest count score (the cut is unknown, so
//! it is left out).
//!
//! **Play:** take the legal card that pegs the most points right now. Ties go
//! to the card with the higher point value, which keeps low cards back for
//! squeezing in near 31.

use cribbage_engine::cards::Card;
use cribbage_engine::errors::StrategyError;
use cribbage_engine::pegging::score_pegs;
use cribbage_engine::scoring::score_hand;
use cribbage_engine::strategy::Strategy;

/// Deterministic one-step greedy player.
///
/// # Example
///
/// ```rust
/// use cribbage_ai::greedy::GreedyStrategy;
/// use cribbage_engine::cards::{Card, Rank, Suit};
/// use cribbage_engine::strategy::Strategy;
///
/// let mut strategy = GreedyStrategy::new();
/// let stack = [Card::new(Rank::Seven, Suit::Spades)];
/// let legal = [Card::new(Rank::King, Suit::Hearts), Card::new(Rank::Eight, Suit::Clubs)];
/// // the eight makes fifteen
/// assert_eq!(strategy.play(&legal, &[], &stack).unwrap(), Some(legal[1]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyStrategy;

impl GreedyStrategy {
    pub fn new() -> Self {
        Self
    }

    /// Index sets of size `count` drawn from `0..n`, in lexicographic order.
    fn combinations(n: usize, count: usize) -> Vec<Vec<usize>> {
        fn extend(
            start: usize,
            n: usize,
            left: usize,
            current: &mut Vec<usize>,
            out: &mut Vec<Vec<usize>>,
        ) {
            if left == 0 {
                out.push(current.clone());
                return;
            }
            for i in start..n {
                if n - i < left {
                    break;
                }
                current.push(i);
                extend(i + 1, n, left - 1, current, out);
                current.pop();
            }
        }
        let mut out = Vec::new();
        extend(0, n, count, &mut Vec::with_capacity(count), &mut out);
        out
    }
}

impl Strategy for GreedyStrategy {
    fn name(&self) -> &str {
        "greedy"
    }

    fn discard(
        &mut self,
        hand: &[Card],
        _seen: &[Card],
        count: usize,
    ) -> Result<Vec<Card>, StrategyError> {
        let mut best: Option<(u32, Vec<usize>)> = None;
        for picked in Self::combinations(hand.len(), count) {
            let kept: Vec<Card> = hand
                .iter()
                .enumerate()
                .filter(|(i, _)| !picked.contains(i))
                .map(|(_, c)| *c)
                .collect();
            let value = score_hand(&kept, None);
            if best.as_ref().is_none_or(|(top, _)| value > *top) {
                best = Some((value, picked));
            }
        }
        Ok(best
            .map(|(_, picked)| picked.into_iter().map(|i| hand[i]).collect())
            .unwrap_or_default())
    }

    fn play(
        &mut self,
        legal: &[Card],
        _seen: &[Card],
        stack: &[Card],
    ) -> Result<Option<Card>, StrategyError> {
        let mut best: Option<((u32, u8), Card)> = None;
        let mut next = stack.to_vec();
        for &card in legal {
            next.push(card);
            let key = (score_pegs(&next), card.value());
            next.pop();
            if best.is_none_or(|(top, _)| key > top) {
                best = Some((key, card));
            }
        }
        Ok(best.map(|(_, card)| card))
    }
}
