//! Deal command handler for inspecting one round's setup.
//!
//! Shuffles, deals, collects the crib and reveals the cut, then prints each
//! player's kept hand with its count, the crib and the cut. Discards come
//! from the configured strategy. The same seed always prints the same deal.

use std::io::Write;

use cribbage_engine::deck::Deck;
use cribbage_engine::player::Player;
use cribbage_engine::round::{Flow, Round};
use cribbage_engine::scoring::{ScoreKind, score_hand};

use super::{MatchFlags, build_strategy};
use crate::error::CliError;
use crate::formatters::{format_card, format_cards};

/// Handle the deal command.
pub fn handle_deal_command(
    players: Option<usize>,
    seed: Option<u64>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let flags = MatchFlags {
        players,
        seed,
        ..MatchFlags::default()
    };
    let cfg = flags.resolve(err)?;
    let seed = cfg.seed.unwrap_or_else(rand::random::<u64>);

    let mut table = Vec::with_capacity(cfg.players);
    for seat in 0..cfg.players {
        let strategy = build_strategy(&cfg.strategy, seed.wrapping_add(seat as u64))?;
        table.push(Player::new((seat + 1).to_string(), strategy));
    }
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();

    let mut round = Round::new(&mut table, &mut deck, cfg.win)?;
    round.deal()?;
    round.collect()?;
    let flow = round.reveal_cut()?;

    writeln!(out, "deal: players={} seed={}", cfg.players, seed)?;
    write_deal(&round, &flow, out)
}

/// Prints the hands, crib and cut of a round whose cut has been revealed.
fn write_deal(round: &Round, flow: &Flow, out: &mut dyn Write) -> Result<(), CliError> {
    let cut = round.cut();
    for (seat, player) in round.players().iter().enumerate() {
        let role = if seat == round.dealer() { " (dealer)" } else { "" };
        writeln!(
            out,
            "Player {}{}: {} count {}",
            player.name(),
            role,
            format_cards(player.count_hand()),
            score_hand(player.count_hand(), cut)
        )?;
    }
    writeln!(
        out,
        "Crib: {} count {}",
        format_cards(round.crib()),
        score_hand(round.crib(), cut)
    )?;
    let cut_text = cut.as_ref().map(format_card).unwrap_or_else(|| "-".into());
    writeln!(out, "Cut: {}", cut_text)?;
    let dealer = &round.players()[round.dealer()];
    for item in round.scored(round.dealer()) {
        if item.kind == ScoreKind::Heels {
            writeln!(out, "Player {} pegs {} for his heels", dealer.name(), item.points)?;
        }
    }
    let leader = match flow {
        Flow::Continue => None,
        Flow::MatchOver(standings) => standings.iter().max_by_key(|s| s.score),
    };
    if let Some(best) = leader {
        writeln!(out, "Match over: Player {} reaches {}", best.name, best.score)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cribbage_engine::cards::{Card, Rank, Suit, full_deck};
    use serial_test::serial;

    fn deal(players: usize, seed: u64) -> String {
        let mut out = Vec::new();
        handle_deal_command(Some(players), Some(seed), &mut out, &mut Vec::new()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    #[serial]
    fn lists_every_player_then_crib_and_cut() {
        let text = deal(3, 42);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "deal: players=3 seed=42");
        assert!(lines[1].starts_with("Player 1: ["));
        assert!(lines[3].starts_with("Player 3 (dealer): ["));
        assert!(lines[4].starts_with("Crib: ["));
        assert!(lines[5].starts_with("Cut: "));
    }

    #[test]
    #[serial]
    fn same_seed_same_deal() {
        assert_eq!(deal(2, 12345), deal(2, 12345));
    }

    #[test]
    #[serial]
    fn rejects_too_many_players() {
        let mut err = Vec::new();
        let result = handle_deal_command(Some(11), Some(1), &mut Vec::new(), &mut err);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn jack_cut_at_a_tiny_threshold_ends_the_match() {
        // twelve cards for the hands, then nothing but jacks to cut from
        let mut order: Vec<Card> = full_deck()
            .into_iter()
            .filter(|c| c.rank != Rank::Jack)
            .take(12)
            .collect();
        order.extend(vec![Card::new(Rank::Jack, Suit::Hearts); 28]);
        let mut deck = Deck::from_order(order, 3);
        let mut table = vec![Player::sequential("1"), Player::sequential("2")];
        let mut round = Round::new(&mut table, &mut deck, 2).unwrap();
        round.deal().unwrap();
        round.collect().unwrap();
        let flow = round.reveal_cut().unwrap();
        assert!(matches!(flow, Flow::MatchOver(_)));

        let mut out = Vec::new();
        write_deal(&round, &flow, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Player 2 pegs 2 for his heels\n"));
        assert!(text.ends_with("Match over: Player 2 reaches 2\n"));
    }
}
