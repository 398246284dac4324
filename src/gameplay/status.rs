use super::seat::Seat;
use crate::GameError;
use serde::Deserialize;
use serde::Serialize;

/// Where the round stands after a move.
/// Encoded as 0..=3 on the wire.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Status {
    Pending = 0,
    OneWins = 1,
    TwoWins = 2,
    Draw = 3,
}

impl Status {
    pub fn won(seat: Seat) -> Self {
        match seat {
            Seat::One => Status::OneWins,
            Seat::Two => Status::TwoWins,
        }
    }
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Status::Pending)
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> u8 {
        status as u8
    }
}
impl TryFrom<u8> for Status {
    type Error = GameError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Status::Pending),
            1 => Ok(Status::OneWins),
            2 => Ok(Status::TwoWins),
            3 => Ok(Status::Draw),
            _ => Err(GameError::Parse(format!("invalid status {}", n))),
        }
    }
}
