use super::*;
use crate::Chips;
use crate::GameError;
use crate::ID;
use crate::cards::Deck;
use crate::gameplay::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Final stacks of a settled match, keyed by participant name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub game: ID<Session>,
    pub stacks: [(String, Chips); 2],
}

/// Where a match stands after a move was accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Betting continues in the same round.
    Betting,
    /// Round resolved and the next one was dealt.
    Dealt,
    /// Round resolved and the match is over.
    Settled(Settlement),
}

/// Live match between two participants.
///
/// Both connections may push moves at the same time, so every mutation of
/// the table happens behind one mutex. Turn order is checked inside that
/// critical section and all notifications are built from the state it
/// leaves behind. Delayed notifications go through the scheduler and never
/// touch the lock.
pub struct Session {
    id: ID<Self>,
    seats: [Participant; 2],
    table: Mutex<Table>,
    scheduler: Arc<dyn Scheduler>,
    delay: Duration,
}

impl Session {
    pub fn new(
        id: ID<Self>,
        seats: [Participant; 2],
        deck: Deck,
        scheduler: Arc<dyn Scheduler>,
        delay: Duration,
    ) -> Self {
        let table = Table::new(deck, [seats[0].stack(), seats[1].stack()]);
        Self {
            id,
            seats,
            table: Mutex::new(table),
            scheduler,
            delay,
        }
    }

    /// Introduces the seats to each other with their first cards.
    pub async fn greet(&self) {
        let table = self.table.lock().await;
        for seat in Seat::BOTH {
            self.unicast(
                seat,
                &ServerMessage::game_start(
                    &self.id.to_string(),
                    seat,
                    &table,
                    self.participant(seat.other()).name(),
                ),
            );
        }
    }

    /// Applies one move atomically.
    ///
    /// Every accepted move is broadcast immediately. A resolved round then
    /// either deals the next one or settles the match, with the matching
    /// notification deferred by the presentation delay.
    pub async fn play(&self, seat: Seat, action: Action) -> Result<Verdict, GameError> {
        let mut table = self.table.lock().await;
        if table.is_settled() {
            return Err(GameError::Stale(self.id.to_string()));
        }
        let result = table
            .apply(seat, action)
            .inspect_err(|e| log::warn!("[session {}] {} {} rejected: {}", self.id, seat, action, e))?;
        log::debug!("[session {}] {} {}", self.id, seat, action);
        self.broadcast(&ServerMessage::move_result(result));
        if !result.status.is_resolved() {
            return Ok(Verdict::Betting);
        }
        match table.advance() {
            Advance::Dealt => {
                for seat in Seat::BOTH {
                    self.defer(seat, ServerMessage::new_game(seat, &table));
                }
                Ok(Verdict::Dealt)
            }
            Advance::Settled => {
                for seat in Seat::BOTH {
                    self.defer(seat, ServerMessage::Exit);
                }
                Ok(Verdict::Settled(self.settlement(&table)))
            }
        }
    }

    /// Copy of the current table state.
    pub async fn snapshot(&self) -> Table {
        self.table.lock().await.clone()
    }
    pub fn id(&self) -> ID<Self> {
        self.id
    }
    pub fn participant(&self, seat: Seat) -> &Participant {
        &self.seats[seat.index()]
    }
}

impl Session {
    fn settlement(&self, table: &Table) -> Settlement {
        Settlement {
            game: self.id,
            stacks: Seat::BOTH.map(|s| (self.participant(s).name().to_string(), table.stack(s))),
        }
    }
    fn unicast(&self, seat: Seat, message: &ServerMessage) {
        self.participant(seat).outbox().send(message);
    }
    fn broadcast(&self, message: &ServerMessage) {
        Seat::BOTH
            .iter()
            .for_each(|&seat| self.unicast(seat, message));
    }
    fn defer(&self, seat: Seat, message: ServerMessage) {
        let outbox = self.participant(seat).outbox().clone();
        self.scheduler
            .defer(self.delay, Box::new(move || outbox.send(&message)));
    }
}
