use super::card::Card;
use rand::seq::SliceRandom;

/// Number of cards in the short deck: ten ranks in two suits.
pub const DECK_SIZE: usize = 20;

/// A fixed ordering of all 20 cards.
/// Shuffled once per match and never mutated; rounds read it pairwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck([Card; DECK_SIZE]);

impl Deck {
    /// Fresh uniformly random permutation of the full deck.
    pub fn new() -> Self {
        let mut deck = Self::sorted();
        deck.0.shuffle(&mut rand::rng());
        deck
    }

    /// Every card in ascending u8 order.
    pub fn sorted() -> Self {
        Self(std::array::from_fn(|i| {
            Card::try_from(i as u8).expect("index within deck size")
        }))
    }

    /// The two cards for a given round: seat one's, then seat two's.
    pub fn pair(&self, round: usize) -> Option<(Card, Card)> {
        self.0
            .get(2 * round)
            .copied()
            .zip(self.0.get(2 * round + 1).copied())
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl From<[Card; DECK_SIZE]> for Deck {
    fn from(cards: [Card; DECK_SIZE]) -> Self {
        Self(cards)
    }
}
