use cribbage_engine::cards::{Card, Rank as R, Suit as S};
use cribbage_engine::scoring::{explain_hand, score_hand, ScoreKind};

fn c(rank: R, suit: S) -> Card {
    Card::new(rank, suit)
}

#[test]
fn hand_without_combinations_scores_zero() {
    let hand = [
        c(R::Two, S::Spades),
        c(R::Four, S::Hearts),
        c(R::Six, S::Diamonds),
        c(R::Eight, S::Clubs),
    ];
    assert_eq!(score_hand(&hand, Some(c(R::King, S::Clubs))), 0);
}

#[test]
fn one_fifteen_scores_two() {
    let hand = [
        c(R::Seven, S::Spades),
        c(R::Eight, S::Hearts),
        c(R::Two, S::Diamonds),
        c(R::Queen, S::Clubs),
    ];
    assert_eq!(score_hand(&hand, None), 2);
}

#[test]
fn pairs_grow_with_each_matching_rank() {
    let pair = [
        c(R::Nine, S::Spades),
        c(R::Nine, S::Hearts),
        c(R::Ace, S::Diamonds),
        c(R::Queen, S::Clubs),
    ];
    assert_eq!(score_hand(&pair, None), 2);

    let three = [
        c(R::Two, S::Spades),
        c(R::Two, S::Hearts),
        c(R::Two, S::Diamonds),
        c(R::Queen, S::Clubs),
    ];
    assert_eq!(explain_hand(&three, None).points_for(ScoreKind::Pair), 6);

    let four = [
        c(R::Two, S::Spades),
        c(R::Two, S::Hearts),
        c(R::Two, S::Diamonds),
        c(R::Two, S::Clubs),
    ];
    assert_eq!(score_hand(&four, None), 12);
}

#[test]
fn runs_score_their_length() {
    let three = [
        c(R::Ace, S::Spades),
        c(R::Two, S::Hearts),
        c(R::Three, S::Diamonds),
        c(R::Nine, S::Clubs),
    ];
    assert_eq!(explain_hand(&three, None).points_for(ScoreKind::Run), 3);

    let four = [
        c(R::Ace, S::Spades),
        c(R::Two, S::Hearts),
        c(R::Three, S::Diamonds),
        c(R::Four, S::Clubs),
    ];
    assert_eq!(explain_hand(&four, None).points_for(ScoreKind::Run), 4);

    let five = explain_hand(&four, Some(c(R::Five, S::Clubs)));
    assert_eq!(five.points_for(ScoreKind::Run), 5);
}

#[test]
fn ace_is_low_only() {
    let hand = [
        c(R::Queen, S::Spades),
        c(R::King, S::Hearts),
        c(R::Ace, S::Diamonds),
        c(R::Six, S::Clubs),
    ];
    assert_eq!(explain_hand(&hand, None).points_for(ScoreKind::Run), 0);
}

#[test]
fn four_card_flush_and_the_cut() {
    let hand = [
        c(R::Nine, S::Spades),
        c(R::Ten, S::Spades),
        c(R::Queen, S::Spades),
        c(R::King, S::Spades),
    ];
    assert_eq!(score_hand(&hand, None), 4);
    assert_eq!(score_hand(&hand, Some(c(R::Two, S::Spades))), 5);
    assert_eq!(score_hand(&hand, Some(c(R::Two, S::Hearts))), 4);
}

#[test]
fn nobs_is_independent_of_other_categories() {
    let hand = [
        c(R::Jack, S::Hearts),
        c(R::Two, S::Spades),
        c(R::Four, S::Clubs),
        c(R::Six, S::Diamonds),
    ];
    let trace = explain_hand(&hand, Some(c(R::Eight, S::Hearts)));
    assert_eq!(trace.points_for(ScoreKind::Nobs), 1);
    assert_eq!(trace.total(), 1);
}

#[test]
fn reordering_the_hand_never_changes_the_score() {
    let hand = [
        c(R::Three, S::Spades),
        c(R::Four, S::Hearts),
        c(R::Four, S::Diamonds),
        c(R::Five, S::Clubs),
    ];
    let cut = Some(c(R::Six, S::Spades));
    let expected = score_hand(&hand, cut);
    assert_eq!(expected, 14);

    let mut orders = 0;
    for a in 0..4 {
        for b in 0..4 {
            for d in 0..4 {
                for e in 0..4 {
                    let idx = [a, b, d, e];
                    if (0..4).any(|i| idx[i + 1..].contains(&idx[i])) {
                        continue;
                    }
                    let perm: Vec<Card> = idx.iter().map(|&i| hand[i]).collect();
                    assert_eq!(score_hand(&perm, cut), expected, "{:?}", perm);
                    orders += 1;
                }
            }
        }
    }
    assert_eq!(orders, 24);
}

#[test]
fn trace_total_matches_score() {
    let hand = [
        c(R::Five, S::Hearts),
        c(R::Five, S::Diamonds),
        c(R::Four, S::Spades),
        c(R::Six, S::Clubs),
    ];
    let cut = Some(c(R::Jack, S::Clubs));
    let trace = explain_hand(&hand, cut);
    assert_eq!(trace.total(), score_hand(&hand, cut));
    assert!(trace.items.iter().all(|item| item.points > 0));
}

fn parse(hand: &str) -> Vec<Card> {
    hand.split_whitespace()
        .map(|token| {
            let mut chars = token.chars();
            let rank = match chars.next() {
                Some('A') => R::Ace,
                Some('1') => R::Ten,
                Some('J') => R::Jack,
                Some('Q') => R::Queen,
                Some('K') => R::King,
                Some(d) => R::from_u8(d.to_digit(10).unwrap() as u8).unwrap(),
                None => unreachable!(),
            };
            let suit = match chars.next() {
                Some('S') => S::Spades,
                Some('H') => S::Hearts,
                Some('D') => S::Diamonds,
                Some('C') => S::Clubs,
                other => panic!("bad suit {:?}", other),
            };
            c(rank, suit)
        })
        .collect()
}

#[test]
fn five_card_hands_without_a_cut() {
    let cases = [
        ("KD 8C AH QS 3C", 0),
        ("8H 7H KS QH 1H", 2),
        ("AH 1D 1H 6H 2C", 2),
        ("1S 1D 1H 6H 2C", 6),
        ("1S 1D 1H 6H 1C", 12),
        ("4S 8D JH QH KC", 3),
        ("7S 1D JH QH KC", 4),
        ("9S 1D JH QH KC", 5),
    ];
    for (cards, expected) in cases {
        assert_eq!(score_hand(&parse(cards), None), expected, "{}", cards);
    }
}
