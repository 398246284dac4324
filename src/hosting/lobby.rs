use crate::gameroom::Participant;
use std::collections::VecDeque;

/// FIFO of participants waiting for an opponent.
/// Not synchronized itself; the casino guards it with a mutex so that
/// enqueue and pairing happen as one step.
#[derive(Debug, Default)]
pub struct Lobby {
    queue: VecDeque<Participant>,
}

impl Lobby {
    pub fn push(&mut self, participant: Participant) {
        self.queue.push_back(participant);
    }
    /// Dequeues the two longest-waiting participants, if there are two.
    pub fn pair(&mut self) -> Option<[Participant; 2]> {
        match self.queue.len() >= 2 {
            true => self
                .queue
                .pop_front()
                .zip(self.queue.pop_front())
                .map(|(a, b)| [a, b]),
            false => None,
        }
    }
    /// Drops every waiting entry under this name. Returns whether any was found.
    pub fn leave(&mut self, name: &str) -> bool {
        let before = self.queue.len();
        self.queue.retain(|p| p.name() != name);
        self.queue.len() < before
    }
    pub fn len(&self) -> usize {
        self.queue.len()
    }
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
