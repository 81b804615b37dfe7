//! Hand scoring for "the count".
//!
//! A finished hand (or the crib) is scored together with the cut card:
//! fifteens, pairs and runs are taken over the combined cards, while the
//! flush and his nobs look at the hand cards and compare against the cut.
//!
//! ```rust
//! use cribbage_engine::cards::{Card, Rank, Suit};
//! use cribbage_engine::scoring::score_hand;
//!
//! let hand = [
//!     Card::new(Rank::Five, Suit::Hearts),
//!     Card::new(Rank::Five, Suit::Diamonds),
//!     Card::new(Rank::Five, Suit::Spades),
//!     Card::new(Rank::Jack, Suit::Clubs),
//! ];
//! let cut = Card::new(Rank::Five, Suit::Clubs);
//! assert_eq!(score_hand(&hand, Some(cut)), 29);
//! ```

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Smallest hand that can score a flush.
pub const MIN_FLUSH: usize = 4;

/// Category of a single scoring combination.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ScoreKind {
    Fifteen,
    Pair,
    Run,
    Flush,
    Nobs,
    /// Trailing cards of one rank on the pegging stack (pair, pair royal, double pair royal)
    PairRoyal,
    ThirtyOne,
    Go,
    Heels,
}

/// One combination and the points it earned.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreItem {
    pub kind: ScoreKind,
    pub cards: Vec<Card>,
    pub points: u32,
}

/// Structured explanation of a score. `total()` always equals the integer
/// returned by the matching scoring function.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ScoreTrace {
    pub items: Vec<ScoreItem>,
}

impl ScoreTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, kind: ScoreKind, cards: Vec<Card>, points: u32) {
        if points > 0 {
            self.items.push(ScoreItem {
                kind,
                cards,
                points,
            });
        }
    }

    pub fn total(&self) -> u32 {
        self.items.iter().map(|item| item.points).sum()
    }

    pub fn points_for(&self, kind: ScoreKind) -> u32 {
        self.items
            .iter()
            .filter(|item| item.kind == kind)
            .map(|item| item.points)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Scores a hand (usually four cards) with an optional cut card.
pub fn score_hand(hand: &[Card], cut: Option<Card>) -> u32 {
    explain_hand(hand, cut).total()
}

/// Scores a hand and reports every combination that contributed.
pub fn explain_hand(hand: &[Card], cut: Option<Card>) -> ScoreTrace {
    let mut combined: Vec<Card> = hand.to_vec();
    combined.extend(cut);

    let mut trace = ScoreTrace::new();
    fifteens(&combined, &mut trace);
    pairs(&combined, &mut trace);
    runs(&combined, &mut trace);
    flush(hand, cut, &mut trace);
    if let Some(cut) = cut {
        nobs(hand, cut, &mut trace);
    }
    trace
}

fn fifteens(cards: &[Card], trace: &mut ScoreTrace) {
    let n = cards.len();
    for mask in 1u32..(1 << n) {
        let subset: Vec<Card> = (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .map(|i| cards[i])
            .collect();
        let sum: u32 = subset.iter().map(|c| c.value() as u32).sum();
        if sum == 15 {
            trace.push(ScoreKind::Fifteen, subset, 2);
        }
    }
}

fn pairs(cards: &[Card], trace: &mut ScoreTrace) {
    for (i, a) in cards.iter().enumerate() {
        for b in &cards[i + 1..] {
            if a.rank == b.rank {
                trace.push(ScoreKind::Pair, vec![*a, *b], 2);
            }
        }
    }
}

// Runs are found by rank multiplicity: every maximal window of consecutive
// ranks that is at least three long scores its length once per way of
// choosing one physical card for each rank in the window.
fn runs(cards: &[Card], trace: &mut ScoreTrace) {
    let mut by_rank: [Vec<Card>; 14] = Default::default();
    for &card in cards {
        by_rank[card.order() as usize].push(card);
    }

    let mut order = 1usize;
    while order <= 13 {
        if by_rank[order].is_empty() {
            order += 1;
            continue;
        }
        let start = order;
        while order <= 13 && !by_rank[order].is_empty() {
            order += 1;
        }
        let window = &by_rank[start..order];
        if window.len() >= 3 {
            for run in run_combinations(window) {
                let points = run.len() as u32;
                trace.push(ScoreKind::Run, run, points);
            }
        }
    }
}

// Cartesian product of one card per rank, lowest rank first.
fn run_combinations(window: &[Vec<Card>]) -> Vec<Vec<Card>> {
    let mut runs: Vec<Vec<Card>> = vec![Vec::with_capacity(window.len())];
    for cards in window {
        runs = runs
            .into_iter()
            .flat_map(|prefix| {
                cards.iter().map(move |&card| {
                    let mut run = prefix.clone();
                    run.push(card);
                    run
                })
            })
            .collect();
    }
    runs
}

fn flush(hand: &[Card], cut: Option<Card>, trace: &mut ScoreTrace) {
    let Some(first) = hand.first() else {
        return;
    };
    if hand.len() < MIN_FLUSH || hand.iter().any(|c| c.suit != first.suit) {
        return;
    }
    match cut {
        Some(cut) if cut.suit == first.suit => {
            let mut cards = hand.to_vec();
            cards.push(cut);
            let points = cards.len() as u32;
            trace.push(ScoreKind::Flush, cards, points);
        }
        _ => trace.push(ScoreKind::Flush, hand.to_vec(), hand.len() as u32),
    }
}

fn nobs(hand: &[Card], cut: Card, trace: &mut ScoreTrace) {
    if let Some(jack) = hand
        .iter()
        .find(|c| c.rank == Rank::Jack && c.suit == cut.suit)
    {
        trace.push(ScoreKind::Nobs, vec![*jack, cut], 1);
    }
}
