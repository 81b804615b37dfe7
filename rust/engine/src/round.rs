//! One deal of cribbage: dealing, the crib, the cut, the pegging tricks and
//! the count.
//!
//! A [`Round`] borrows the players and the deck for the length of a deal and
//! moves strictly forward through [`RoundPhase`]. Every award is checked
//! against the win threshold; reaching it stops the round on the spot and
//! hands the standings back as [`Flow::MatchOver`].

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::cards::{format_cards, total_value, Card, Rank};
use crate::deck::{Deck, CUT_MARGIN};
use crate::errors::EngineError;
use crate::pegging::explain_pegs;
use crate::player::Player;
use crate::scoring::{explain_hand, ScoreItem, ScoreKind, ScoreTrace};

/// Cards each player keeps for the count.
pub const HAND_SIZE: usize = 4;
/// Cards in the crib.
pub const CRIB_SIZE: usize = 4;
pub const DECK_SIZE: usize = 52;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundPhase {
    Dealing,
    Collecting,
    Cutting,
    Pegging,
    Counting,
    Done,
}

/// A player's name and score at a point in time.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub score: u32,
}

/// Whether the round may keep awarding points.
#[must_use]
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Flow {
    Continue,
    /// A player reached the win threshold; carries the final standings.
    MatchOver(Vec<Standing>),
}

/// What happened in one round, in turn order.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub round: u32,
    pub dealer: String,
    pub cut: Option<Card>,
    pub crib: Vec<Card>,
    /// Points each player earned this round
    pub points: Vec<u32>,
}

macro_rules! halt_on_win {
    ($flow:expr) => {
        if let Flow::MatchOver(standings) = $flow {
            return Ok(Flow::MatchOver(standings));
        }
    };
}

#[derive(Debug)]
pub struct Round<'a> {
    players: &'a mut [Player],
    deck: &'a mut Deck,
    win: u32,
    phase: RoundPhase,
    crib: Vec<Card>,
    cut: Option<Card>,
    stack: Vec<Card>,
    /// every card played to a stack this round
    pegged: Vec<Card>,
    go: usize,
    turn_number: u32,
    next_turn: usize,
    points: Vec<u32>,
    /// combinations behind every award, per seat
    scored: Vec<Vec<ScoreItem>>,
}

impl<'a> Round<'a> {
    /// Starts a round. Players are in turn order; the last one deals.
    pub fn new(
        players: &'a mut [Player],
        deck: &'a mut Deck,
        win: u32,
    ) -> Result<Self, EngineError> {
        if players.is_empty() {
            return Err(EngineError::NoPlayers);
        }
        let points = vec![0; players.len()];
        let scored = vec![Vec::new(); players.len()];
        Ok(Self {
            players,
            deck,
            win,
            phase: RoundPhase::Dealing,
            crib: Vec::with_capacity(CRIB_SIZE),
            cut: None,
            stack: Vec::new(),
            pegged: Vec::new(),
            go: 0,
            turn_number: 0,
            next_turn: 0,
            points,
            scored,
        })
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }
    pub fn players(&self) -> &[Player] {
        self.players
    }
    pub fn dealer(&self) -> usize {
        self.players.len() - 1
    }
    pub fn crib(&self) -> &[Card] {
        &self.crib
    }
    pub fn cut(&self) -> Option<Card> {
        self.cut
    }
    pub fn stack(&self) -> &[Card] {
        &self.stack
    }
    pub fn stack_total(&self) -> u32 {
        total_value(&self.stack)
    }
    /// Everything `seat` has scored this round, in award order.
    pub fn scored(&self, seat: usize) -> &[ScoreItem] {
        &self.scored[seat]
    }
    pub fn go_count(&self) -> usize {
        self.go
    }
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Cards in the deck, in hands, in the crib, cut, or already pegged.
    /// Always 52 for a round dealt from a full deck.
    pub fn accounted_cards(&self) -> usize {
        self.deck.remaining()
            + self.players.iter().map(|p| p.hand().len()).sum::<usize>()
            + self.crib.len()
            + usize::from(self.cut.is_some())
            + self.pegged.len()
    }

    /// Runs every phase in order.
    pub fn play(&mut self) -> Result<Flow, EngineError> {
        self.deal()?;
        self.collect()?;
        halt_on_win!(self.reveal_cut()?);
        halt_on_win!(self.tricks()?);
        halt_on_win!(self.count()?);
        Ok(Flow::Continue)
    }

    /// Deals `4 + 4 / players` cards to each player, one at a time.
    pub fn deal(&mut self) -> Result<(), EngineError> {
        self.expect_phase(RoundPhase::Dealing)?;
        let size = HAND_SIZE + CRIB_SIZE / self.players.len();
        for _ in 0..size {
            for player in self.players.iter_mut() {
                let card = self.deck.deal_card().ok_or(EngineError::DeckExhausted)?;
                player.give_card(card);
            }
        }
        for player in self.players.iter() {
            debug!(player = player.name(), hand = %format_cards(player.hand()), "dealt");
        }
        self.phase = RoundPhase::Collecting;
        Ok(())
    }

    /// Moves each player's discards into the crib and tops it up from the
    /// deck when the discards fall short.
    pub fn collect(&mut self) -> Result<(), EngineError> {
        self.expect_phase(RoundPhase::Collecting)?;
        for player in self.players.iter_mut() {
            let extra = player.hand().len().saturating_sub(HAND_SIZE);
            let discards = player.toss(extra)?;
            self.crib.extend(discards);
        }
        while self.crib.len() < CRIB_SIZE {
            let card = self.deck.deal_card().ok_or(EngineError::DeckExhausted)?;
            self.crib.push(card);
        }
        debug!(crib = %format_cards(&self.crib), "crib collected");
        self.phase = RoundPhase::Cutting;
        Ok(())
    }

    /// Cuts the deck and shows the card to everyone. A jack earns the
    /// dealer two points (his heels).
    pub fn reveal_cut(&mut self) -> Result<Flow, EngineError> {
        self.expect_phase(RoundPhase::Cutting)?;
        let card = self.deck.cut(CUT_MARGIN)?;
        self.cut = Some(card);
        self.show(card);
        debug!(cut = %card, "cut revealed");
        self.phase = RoundPhase::Pegging;
        if card.rank == Rank::Jack {
            let dealer = self.dealer();
            let mut trace = ScoreTrace::new();
            trace.push(ScoreKind::Heels, vec![card], 2);
            halt_on_win!(self.credit(dealer, trace, "his heels"));
        }
        Ok(Flow::Continue)
    }

    pub fn show(&mut self, card: Card) {
        for player in self.players.iter_mut() {
            player.see(card);
        }
    }

    /// Plays tricks until every hand is empty.
    pub fn tricks(&mut self) -> Result<Flow, EngineError> {
        self.expect_phase(RoundPhase::Pegging)?;
        while self.players.iter().any(|p| !p.hand().is_empty()) {
            halt_on_win!(self.trick()?);
        }
        self.phase = RoundPhase::Counting;
        Ok(Flow::Continue)
    }

    /// Plays one trick: turns rotate until every player has passed in
    /// succession. The stack starts empty.
    pub fn trick(&mut self) -> Result<Flow, EngineError> {
        self.expect_phase(RoundPhase::Pegging)?;
        self.stack.clear();
        self.go = 0;
        let n = self.players.len();
        while self.go < n {
            let seat = self.next_turn;
            self.next_turn = (seat + 1) % n;
            halt_on_win!(self.turn(seat)?);
        }
        if self.stack.is_empty() && self.players.iter().any(|p| !p.hand().is_empty()) {
            return Err(EngineError::PeggingStalled);
        }
        Ok(Flow::Continue)
    }

    /// One turn for `seat`: play a card and peg, or pass. The pass that
    /// completes a full lap of passes earns the go point.
    pub fn turn(&mut self, seat: usize) -> Result<Flow, EngineError> {
        self.expect_phase(RoundPhase::Pegging)?;
        self.turn_number += 1;
        match self.players[seat].play(&self.stack)? {
            Some(card) => {
                self.stack.push(card);
                self.pegged.push(card);
                self.go = 0;
                for (i, player) in self.players.iter_mut().enumerate() {
                    if i != seat {
                        player.see(card);
                    }
                }
                let trace = explain_pegs(&self.stack);
                debug!(
                    player = self.players[seat].name(),
                    card = %card,
                    stack = %format_cards(&self.stack),
                    stack_total = self.stack_total(),
                    "played"
                );
                halt_on_win!(self.credit(seat, trace, "pegs"));
            }
            None => {
                self.go += 1;
                debug!(player = self.players[seat].name(), go = self.go, "pass");
                if self.go >= self.players.len() && !self.stack.is_empty() {
                    let mut trace = ScoreTrace::new();
                    trace.push(ScoreKind::Go, self.stack.clone(), 1);
                    halt_on_win!(self.credit(seat, trace, "go"));
                }
            }
        }
        Ok(Flow::Continue)
    }

    /// Scores every retained hand with the cut, then the crib for the dealer.
    pub fn count(&mut self) -> Result<Flow, EngineError> {
        self.expect_phase(RoundPhase::Counting)?;
        for seat in 0..self.players.len() {
            let trace = explain_hand(self.players[seat].count_hand(), self.cut);
            halt_on_win!(self.credit(seat, trace, "hand"));
        }
        let crib = explain_hand(&self.crib, self.cut);
        let dealer = self.dealer();
        halt_on_win!(self.credit(dealer, crib, "crib"));
        self.phase = RoundPhase::Done;
        Ok(Flow::Continue)
    }

    fn credit(&mut self, seat: usize, trace: ScoreTrace, reason: &str) -> Flow {
        let points = trace.total();
        self.scored[seat].extend(trace.items);
        self.award(seat, points, reason)
    }

    /// Adds points to a player. Once anyone reaches the win threshold the
    /// round is finished and no further awards are made.
    pub fn award(&mut self, seat: usize, points: u32, reason: &str) -> Flow {
        if points == 0 {
            return Flow::Continue;
        }
        let stack_total = total_value(&self.stack);
        let player = &mut self.players[seat];
        let score = player.add_points(points);
        self.points[seat] += points;
        info!(
            target: "cribbage::award",
            player = player.name(),
            points,
            reason,
            turn = self.turn_number,
            stack_total,
            score,
            "award"
        );
        if score >= self.win {
            self.phase = RoundPhase::Done;
            info!(winner = self.players[seat].name(), score, "win threshold reached");
            return Flow::MatchOver(self.standings());
        }
        Flow::Continue
    }

    pub fn standings(&self) -> Vec<Standing> {
        self.players
            .iter()
            .map(|p| Standing {
                name: p.name().to_string(),
                score: p.score(),
            })
            .collect()
    }

    pub fn summary(&self, round: u32) -> RoundSummary {
        RoundSummary {
            round,
            dealer: self.players[self.dealer()].name().to_string(),
            cut: self.cut,
            crib: self.crib.clone(),
            points: self.points.clone(),
        }
    }

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), EngineError> {
        if self.phase != expected {
            return Err(EngineError::OutOfPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }
}
