use crate::GameError;
use crate::gameplay::Action;
use crate::gameplay::Seat;
use serde::Deserialize;

/// A parsed inbound move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub game: String,
    pub seat: Seat,
    pub action: Action,
}

/// Raw inbound move as it arrives on the wire.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "gameId")]
    game: String,
    player: Seat,
    action: String,
}

/// Parses client frames into moves.
/// Centralizes the protocol layer between wire format and the session.
pub struct Protocol;

impl Protocol {
    pub fn decode(s: &str) -> Result<Move, GameError> {
        let envelope = serde_json::from_str::<Envelope>(s)
            .map_err(|e| GameError::Parse(e.to_string()))?;
        Ok(Move {
            action: Action::try_from(envelope.action.as_str())?,
            game: envelope.game,
            seat: envelope.player,
        })
    }
}
