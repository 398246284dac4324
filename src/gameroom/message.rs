use crate::Chips;
use crate::GameError;
use crate::gameplay::MoveResult;
use crate::gameplay::Seat;
use crate::gameplay::Table;
use serde::Serialize;

/// Messages sent from server to client over WebSocket.
/// This is the only place outbound JSON is produced.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ServerMessage {
    /// Joined the queue, no opponent yet.
    Waiting,
    /// Paired into a match; first round dealt.
    GameStart {
        #[serde(rename = "gameId")]
        game_id: String,
        player: Seat,
        dealer: Seat,
        card: String,
        opponent: Opponent,
    },
    /// A move was processed.
    MoveResult {
        #[serde(rename = "moveResult")]
        result: MoveResult,
    },
    /// A new round was dealt.
    NewGame {
        dealer: Seat,
        card: String,
        stack: Chips,
        bet: Chips,
        opponent: Across,
    },
    /// The match is over.
    Exit,
    /// The last inbound message was rejected.
    Error { kind: String, message: String },
}

/// Opponent as introduced at match start.
#[derive(Clone, Debug, Serialize)]
pub struct Opponent {
    pub name: String,
    pub stack: Chips,
    pub card: String,
}

/// Opponent as seen at the start of a later round.
#[derive(Clone, Debug, Serialize)]
pub struct Across {
    pub stack: Chips,
    pub card: String,
    pub bet: Chips,
}

impl ServerMessage {
    pub fn game_start(game: &str, seat: Seat, table: &Table, rival: &str) -> Self {
        let other = seat.other();
        Self::GameStart {
            game_id: game.to_string(),
            player: seat,
            dealer: table.dealer(),
            card: table.card(seat).to_string(),
            opponent: Opponent {
                name: rival.to_string(),
                stack: table.stack(other),
                card: table.card(other).to_string(),
            },
        }
    }
    pub fn move_result(result: MoveResult) -> Self {
        Self::MoveResult { result }
    }
    pub fn new_game(seat: Seat, table: &Table) -> Self {
        let other = seat.other();
        Self::NewGame {
            dealer: table.dealer(),
            card: table.card(seat).to_string(),
            stack: table.stack(seat),
            bet: table.bet(seat),
            opponent: Across {
                stack: table.stack(other),
                card: table.card(other).to_string(),
                bet: table.bet(other),
            },
        }
    }
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).expect("serialize server message")
    }
}

impl From<&GameError> for ServerMessage {
    fn from(e: &GameError) -> Self {
        Self::Error {
            kind: e.kind().to_string(),
            message: e.to_string(),
        }
    }
}
