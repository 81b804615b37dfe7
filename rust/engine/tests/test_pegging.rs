use cribbage_engine::cards::{Card, Rank as R, Suit as S};
use cribbage_engine::pegging::{explain_pegs, score_pegs};
use cribbage_engine::scoring::ScoreKind;

fn c(rank: R, suit: S) -> Card {
    Card::new(rank, suit)
}

#[test]
fn fifteen_pegs_two() {
    assert_eq!(score_pegs(&[c(R::Seven, S::Spades), c(R::Eight, S::Hearts)]), 2);
}

#[test]
fn three_of_a_rank_pegs_six() {
    let stack = [c(R::Seven, S::Spades), c(R::Seven, S::Hearts), c(R::Seven, S::Diamonds)];
    // 21 total, no fifteen
    assert_eq!(score_pegs(&stack), 6);
}

#[test]
fn runs_peg_their_full_length() {
    let three = [c(R::Six, S::Spades), c(R::Eight, S::Hearts), c(R::Seven, S::Diamonds)];
    assert_eq!(score_pegs(&three), 3);
    let four = [
        c(R::Six, S::Spades),
        c(R::Eight, S::Hearts),
        c(R::Seven, S::Diamonds),
        c(R::Nine, S::Clubs),
    ];
    assert_eq!(score_pegs(&four), 4);
    let shuffled = [
        c(R::Seven, S::Spades),
        c(R::Eight, S::Hearts),
        c(R::Six, S::Diamonds),
        c(R::Nine, S::Clubs),
    ];
    assert_eq!(score_pegs(&shuffled), 4);
}

#[test]
fn fifteen_is_judged_on_the_running_total() {
    // 6-7-8 totals 21, so the trailing 7-8 is not a fifteen
    let stack = [c(R::Six, S::Spades), c(R::Seven, S::Hearts), c(R::Eight, S::Diamonds)];
    assert_eq!(score_pegs(&stack), 3);
    assert_eq!(explain_pegs(&stack).points_for(ScoreKind::Fifteen), 0);
    let stack = [c(R::Ten, S::Spades), c(R::Five, S::Diamonds)];
    assert_eq!(score_pegs(&stack), 2);
}

#[test]
fn thirty_one_pegs_one() {
    let stack = [
        c(R::Seven, S::Spades),
        c(R::Eight, S::Hearts),
        c(R::Six, S::Diamonds),
        c(R::Jack, S::Clubs),
    ];
    assert_eq!(score_pegs(&stack), 1);
}

#[test]
fn thirty_one_stacks_with_a_pair() {
    let stack = [
        c(R::Ten, S::Spades),
        c(R::Ten, S::Hearts),
        c(R::Four, S::Diamonds),
        c(R::Seven, S::Clubs),
    ];
    assert_eq!(score_pegs(&stack), 1);
    let stack = [
        c(R::King, S::Spades),
        c(R::Queen, S::Hearts),
        c(R::Ace, S::Diamonds),
        c(R::Five, S::Clubs),
        c(R::Five, S::Hearts),
    ];
    let trace = explain_pegs(&stack);
    assert_eq!(trace.points_for(ScoreKind::PairRoyal), 2);
    assert_eq!(trace.points_for(ScoreKind::ThirtyOne), 1);
    assert_eq!(trace.total(), 3);
}

#[test]
fn fifteen_found_over_a_longer_suffix() {
    let stack = [c(R::Seven, S::Spades), c(R::Seven, S::Diamonds), c(R::Ace, S::Hearts)];
    assert_eq!(score_pegs(&stack), 2);
}

#[test]
fn only_combinations_ending_at_the_newest_card_count() {
    // the earlier 7-8 fifteen is not scored again
    let stack = [c(R::Seven, S::Spades), c(R::Eight, S::Hearts), c(R::King, S::Diamonds)];
    assert_eq!(score_pegs(&stack), 0);
}
