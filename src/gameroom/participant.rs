use super::outbox::Outbox;
use crate::Chips;

/// Someone who joined with a name and a buy-in.
/// The name correlates the participant with the player store.
#[derive(Debug, Clone)]
pub struct Participant {
    name: String,
    stack: Chips,
    outbox: Outbox,
}

impl Participant {
    pub fn new(name: &str, stack: Chips, outbox: Outbox) -> Self {
        Self {
            name: name.to_string(),
            stack,
            outbox,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    pub fn outbox(&self) -> &Outbox {
        &self.outbox
    }
}
