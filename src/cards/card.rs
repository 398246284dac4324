#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    pub fn rank(&self) -> Rank {
        self.rank
    }
    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl From<(Rank, Suit)> for Card {
    fn from((rank, suit): (Rank, Suit)) -> Self {
        Self { rank, suit }
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-19
/// 7H
/// 13
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        (u8::from(c.rank) - 1) * 2 + u8::from(c.suit)
    }
}
impl TryFrom<u8> for Card {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Ok(Self {
            rank: Rank::try_from(n / 2 + 1)?,
            suit: Suit::try_from(n % 2)?,
        })
    }
}

/// str isomorphism
/// "<rank>-<suit>", e.g. "10-H"
impl TryFrom<&str> for Card {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (rank, suit) = s
            .split_once('-')
            .ok_or_else(|| anyhow::anyhow!("invalid card str: {}", s))?;
        Ok(Self {
            rank: Rank::try_from(rank)?,
            suit: Suit::try_from(suit)?,
        })
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.rank, self.suit)
    }
}

use super::rank::Rank;
use super::suit::Suit;
use std::fmt::Display;
use std::fmt::Formatter;
