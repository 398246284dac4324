use super::seat::Seat;
use super::status::Status;
use crate::Chips;
use serde::Deserialize;
use serde::Serialize;

/// Public state after one processed move, broadcast to both seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    pub player: Seat,
    pub status: Status,
    pub stack1: Chips,
    pub bet1: Chips,
    pub stack2: Chips,
    pub bet2: Chips,
}
