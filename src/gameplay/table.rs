use super::action::Action;
use super::result::MoveResult;
use super::seat::Seat;
use super::status::Status;
use crate::ANTE;
use crate::Chips;
use crate::FOLD_PENALTY;
use crate::GameError;
use crate::PENALTY_RANK;
use crate::ROUND_LIMIT;
use crate::cards::Card;
use crate::cards::Deck;
use std::cmp::Ordering;

/// Lifecycle of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Active,
    Settled,
}

/// What happened to the match after a round resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Next round dealt, antes posted, dealer swapped.
    Dealt,
    /// Round limit or stack threshold reached; the match is over.
    Settled,
}

/// Complete state of one heads-up match.
///
/// Pure and synchronous: it knows nothing about connections, timers or
/// persistence. Callers must serialize access to it; see `gameroom::Session`.
///
/// A round starts with both seats having posted the ante. The dealer acts
/// first, then the turn alternates until a fold, a call, or a second check
/// resolves the round.
#[derive(Debug, Clone)]
pub struct Table {
    deck: Deck,
    round: usize,
    dealer: Seat,
    actor: Seat,
    phase: Phase,
    cards: [Card; 2],
    stacks: [Chips; 2],
    bets: [Chips; 2],
}

impl Table {
    /// Seats two players with their buy-in stacks and posts the first antes.
    pub fn new(deck: Deck, stacks: [Chips; 2]) -> Self {
        let (a, b) = deck.pair(0).expect("deck holds every round");
        Self {
            deck,
            round: 0,
            dealer: Seat::One,
            actor: Seat::One,
            phase: Phase::Active,
            cards: [a, b],
            stacks: stacks.map(|s| s - ANTE),
            bets: [ANTE; 2],
        }
    }

    /// Applies a move by `seat`. Rejected moves leave the table untouched.
    pub fn apply(&mut self, seat: Seat, action: Action) -> Result<MoveResult, GameError> {
        if self.is_settled() {
            return Err(GameError::Stale(format!("{} moved after settlement", seat)));
        }
        if seat != self.actor {
            return Err(GameError::Validation(format!(
                "{} moved out of turn, {} to act",
                seat, self.actor
            )));
        }
        let status = match action {
            Action::Fold => self.fold(seat),
            Action::Call => self.call(seat),
            Action::Check if seat == self.dealer => self.pass(seat),
            Action::Check => self.showdown(),
            Action::Raise(amount) => self.raise(seat, amount)?,
        };
        if status.is_resolved() {
            self.round += 1;
        }
        Ok(self.result(seat, status))
    }

    /// Called after a round resolves: either deals the next round
    /// or closes the match for good.
    pub fn advance(&mut self) -> Advance {
        match self.is_concluded() {
            true => self.settle(),
            false => match self.deck.pair(self.round) {
                Some(pair) => self.deal(pair),
                None => self.settle(),
            },
        }
    }

    /// Round limit reached or someone can no longer cover an ante.
    pub fn is_concluded(&self) -> bool {
        self.round >= ROUND_LIMIT || self.stacks.iter().any(|&s| s <= ANTE)
    }
    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }
}

impl Table {
    fn fold(&mut self, seat: Seat) -> Status {
        let winner = seat.other();
        self.stacks[winner.index()] += self.pot();
        if self.card(seat).rank() == PENALTY_RANK {
            let penalty = FOLD_PENALTY.min(self.stack(seat));
            self.stacks[seat.index()] -= penalty;
            self.stacks[winner.index()] += penalty;
        }
        self.bets = [0; 2];
        Status::won(winner)
    }

    /// A short call only contests what it covers; the uncalled part of
    /// the opponent's bet goes back to the opponent before showdown.
    fn call(&mut self, seat: Seat) -> Status {
        let other = seat.other();
        let owed = (self.bet(other) - self.bet(seat))
            .max(0)
            .min(self.stack(seat));
        self.stacks[seat.index()] -= owed;
        self.bets[seat.index()] += owed;
        let excess = self.bet(other) - self.bet(seat);
        if excess > 0 {
            self.stacks[other.index()] += excess;
            self.bets[other.index()] -= excess;
        }
        self.showdown()
    }

    fn pass(&mut self, seat: Seat) -> Status {
        self.actor = seat.other();
        Status::Pending
    }

    fn raise(&mut self, seat: Seat, amount: Chips) -> Result<Status, GameError> {
        let bet = self.bet(seat);
        if amount <= bet {
            return Err(GameError::Validation(format!(
                "raise to {} does not exceed current bet {}",
                amount, bet
            )));
        }
        if amount - bet > self.stack(seat) {
            return Err(GameError::Validation(format!(
                "raise to {} exceeds stack {} plus bet {}",
                amount,
                self.stack(seat),
                bet
            )));
        }
        self.stacks[seat.index()] -= amount - bet;
        self.bets[seat.index()] = amount;
        self.actor = seat.other();
        Ok(Status::Pending)
    }

    /// Suits never break ties.
    fn showdown(&mut self) -> Status {
        let pot = self.pot();
        let status = match self.card(Seat::One).rank().cmp(&self.card(Seat::Two).rank()) {
            Ordering::Greater => {
                self.stacks[Seat::One.index()] += pot;
                Status::OneWins
            }
            Ordering::Less => {
                self.stacks[Seat::Two.index()] += pot;
                Status::TwoWins
            }
            Ordering::Equal => {
                self.stacks[0] += self.bets[0];
                self.stacks[1] += self.bets[1];
                Status::Draw
            }
        };
        self.bets = [0; 2];
        status
    }

    fn deal(&mut self, (a, b): (Card, Card)) -> Advance {
        self.dealer = self.dealer.other();
        self.actor = self.dealer;
        self.cards = [a, b];
        self.stacks = self.stacks.map(|s| s - ANTE);
        self.bets = [ANTE; 2];
        Advance::Dealt
    }

    fn settle(&mut self) -> Advance {
        self.phase = Phase::Settled;
        Advance::Settled
    }

    fn result(&self, player: Seat, status: Status) -> MoveResult {
        MoveResult {
            player,
            status,
            stack1: self.stacks[0],
            bet1: self.bets[0],
            stack2: self.stacks[1],
            bet2: self.bets[1],
        }
    }
}

impl Table {
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn dealer(&self) -> Seat {
        self.dealer
    }
    pub fn actor(&self) -> Seat {
        self.actor
    }
    pub fn card(&self, seat: Seat) -> Card {
        self.cards[seat.index()]
    }
    pub fn stack(&self, seat: Seat) -> Chips {
        self.stacks[seat.index()]
    }
    pub fn bet(&self, seat: Seat) -> Chips {
        self.bets[seat.index()]
    }
    pub fn pot(&self) -> Chips {
        self.bets.iter().sum()
    }
}
