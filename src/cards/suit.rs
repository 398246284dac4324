/// The two suits of the short deck.
/// Suits never break ties; they only make the 20 cards distinct.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Spade = 0,
    Heart = 1,
}

impl Suit {
    pub const COUNT: usize = 2;
}

impl TryFrom<u8> for Suit {
    type Error = anyhow::Error;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Suit::Spade),
            1 => Ok(Suit::Heart),
            _ => Err(anyhow::anyhow!("invalid suit u8: {}", n)),
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

impl TryFrom<&str> for Suit {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "S" => Ok(Suit::Spade),
            "H" => Ok(Suit::Heart),
            _ => Err(anyhow::anyhow!("invalid suit str: {}", s)),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Spade => "S",
                Suit::Heart => "H",
            }
        )
    }
}
