//! Pegging scores for a stack that was just extended by one card.
//!
//! Same-rank runs and sequences are looked for only in contiguous suffixes
//! of the stack that end with the newest card, so combinations already
//! scored by earlier plays are never counted again; for each of the two
//! kinds the best qualifying suffix wins. Fifteen and thirty-one are judged
//! on the running total of the whole stack.

use crate::cards::{total_value, Card};
use crate::scoring::{ScoreKind, ScoreTrace};

/// Highest running total allowed on the stack.
pub const STACK_MAX: u32 = 31;

/// Points for the newest card on `stack`.
pub fn score_pegs(stack: &[Card]) -> u32 {
    explain_pegs(stack).total()
}

pub fn explain_pegs(stack: &[Card]) -> ScoreTrace {
    let mut trace = ScoreTrace::new();
    let packs = suffixes(stack);

    trace.push(ScoreKind::Fifteen, stack.to_vec(), peg_fifteen(stack));
    best(&packs, peg_pairs, ScoreKind::PairRoyal, &mut trace);
    best(&packs, peg_run, ScoreKind::Run, &mut trace);

    if !stack.is_empty() && total_value(stack) == STACK_MAX {
        trace.push(ScoreKind::ThirtyOne, stack.to_vec(), 1);
    }
    trace
}

/// Suffixes of `stack` from the whole stack down to the last two cards,
/// searched for same-rank runs and sequences.
pub fn suffixes(stack: &[Card]) -> Vec<&[Card]> {
    if stack.len() < 2 {
        return Vec::new();
    }
    (0..=stack.len() - 2).map(|start| &stack[start..]).collect()
}

fn best(
    packs: &[&[Card]],
    check: fn(&[Card]) -> u32,
    kind: ScoreKind,
    trace: &mut ScoreTrace,
) {
    let winner = packs
        .iter()
        .map(|pack| (check(pack), *pack))
        .filter(|(points, _)| *points > 0)
        .max_by_key(|(points, _)| *points);
    if let Some((points, pack)) = winner {
        trace.push(kind, pack.to_vec(), points);
    }
}

/// 2 points when the stack's running total is fifteen.
pub fn peg_fifteen(cards: &[Card]) -> u32 {
    if total_value(cards) == 15 {
        2
    } else {
        0
    }
}

/// `n * (n - 1)` points when every card shares one rank (n >= 2).
pub fn peg_pairs(cards: &[Card]) -> u32 {
    let n = cards.len() as u32;
    match cards.first() {
        Some(first) if n >= 2 && cards.iter().all(|c| c.rank == first.rank) => n * (n - 1),
        _ => 0,
    }
}

/// Length points when the cards, in any order, form a gap-free sequence of
/// distinct ranks at least three long.
pub fn peg_run(cards: &[Card]) -> u32 {
    if cards.len() < 3 {
        return 0;
    }
    let mut orders: Vec<u8> = cards.iter().map(|c| c.order()).collect();
    orders.sort_unstable();
    if orders.windows(2).all(|w| w[1] == w[0] + 1) {
        orders.len() as u32
    } else {
        0
    }
}
