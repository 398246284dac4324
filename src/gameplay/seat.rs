use crate::GameError;
use serde::Deserialize;
use serde::Serialize;

/// One of the two chairs at a match.
/// Travels over the wire as the integers 1 and 2.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Seat {
    One = 1,
    Two = 2,
}

impl Seat {
    pub const BOTH: [Seat; 2] = [Seat::One, Seat::Two];
    pub fn other(&self) -> Self {
        match self {
            Seat::One => Seat::Two,
            Seat::Two => Seat::One,
        }
    }
    /// Zero-based slot for per-seat arrays.
    pub fn index(&self) -> usize {
        match self {
            Seat::One => 0,
            Seat::Two => 1,
        }
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> u8 {
        seat as u8
    }
}
impl TryFrom<u8> for Seat {
    type Error = GameError;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Seat::One),
            2 => Ok(Seat::Two),
            _ => Err(GameError::Parse(format!("invalid seat {}", n))),
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "P{}", u8::from(*self))
    }
}
