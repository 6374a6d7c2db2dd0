//! Wire events exchanged with clients.
//!
//! Every frame is a JSON text message of the form
//! `{"event": "<name>", "data": <payload>}`. Event and field names keep the
//! camelCase spelling clients already speak.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use tictac_rules::{Board, GameState, Marker, Outcome};
use tracing::instrument;

/// Wire spelling of a draw in `gameOver.winner`.
pub const DRAW_MARKER: &str = "Empate";

/// Events a client may send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    /// Attempt to place a marker.
    Play(PlayRequest),
    /// Abandon the current game and start over. Any payload is ignored.
    NewGame,
}

/// Payload of a `play` event.
///
/// `index` stays a raw integer here so out-of-range values reach the
/// authority's bounds check instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, derive_new::new)]
pub struct PlayRequest {
    /// Target cell, expected in 0-8.
    pub index: i64,
    /// Marker the client claims to play.
    pub player: Marker,
}

/// Frame envelope before the payload is interpreted.
#[derive(Debug, Deserialize)]
struct Envelope {
    event: String,
    #[serde(default)]
    data: serde_json::Value,
}

impl ClientEvent {
    /// Parses one text frame.
    #[instrument(level = "trace", skip(text), fields(len = text.len()))]
    pub fn parse(text: &str) -> Result<Self, ProtocolError> {
        let envelope: Envelope = serde_json::from_str(text)?;
        match envelope.event.as_str() {
            "play" => Ok(ClientEvent::Play(serde_json::from_value(envelope.data)?)),
            "newGame" => Ok(ClientEvent::NewGame),
            _ => Err(ProtocolError::UnknownEvent(envelope.event)),
        }
    }
}

/// Events the server sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Current board and turn pointer.
    UpdateBoard(BoardUpdate),
    /// A game just ended.
    GameOver(GameOverNotice),
}

/// Snapshot of the board and who moves next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardUpdate {
    /// All nine squares, `null` when empty.
    pub new_board: Board,
    /// Marker allowed to move next.
    pub next_player: Marker,
}

impl From<&GameState> for BoardUpdate {
    fn from(state: &GameState) -> Self {
        Self {
            new_board: state.board().clone(),
            next_player: state.next_player(),
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameOverNotice {
    /// Winning marker or the draw marker.
    pub winner: Verdict,
    /// Indices of the winning line; empty on a draw.
    pub winning_cells: Vec<usize>,
}

impl From<&Outcome> for GameOverNotice {
    fn from(outcome: &Outcome) -> Self {
        let winner = match outcome.winner() {
            Some(marker) => Verdict::Won(marker),
            None => Verdict::Draw,
        };
        Self {
            winner,
            winning_cells: outcome.winning_cells(),
        }
    }
}

/// Who took the game. Serialized as `"X"`, `"O"` or `"Empate"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Verdict {
    /// A marker completed a line.
    #[display("{_0}")]
    Won(Marker),
    /// Nobody did.
    #[display("Empate")]
    Draw,
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Verdict::Won(marker) => marker.serialize(serializer),
            Verdict::Draw => serializer.serialize_str(DRAW_MARKER),
        }
    }
}

impl<'de> Deserialize<'de> for Verdict {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.as_str() {
            "X" => Ok(Verdict::Won(Marker::X)),
            "O" => Ok(Verdict::Won(Marker::O)),
            DRAW_MARKER => Ok(Verdict::Draw),
            other => Err(de::Error::unknown_variant(other, &["X", "O", DRAW_MARKER])),
        }
    }
}

/// A frame that could not be understood.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum ProtocolError {
    /// Not valid JSON, unknown event, or payload of the wrong shape.
    #[display("Malformed event: {_0}")]
    Malformed(#[error(source)] serde_json::Error),

    /// An event name this server does not handle.
    #[display("Unknown event {_0:?}")]
    #[from(ignore)]
    UnknownEvent(#[error(not(source))] String),

    /// A frame type that never carries events.
    #[display("Unsupported {_0} frame")]
    #[from(ignore)]
    UnsupportedFrame(#[error(not(source))] &'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_display_matches_wire() {
        assert_eq!(Verdict::Won(Marker::O).to_string(), "O");
        assert_eq!(Verdict::Draw.to_string(), "Empate");
    }

    #[test]
    fn test_unknown_event_message() {
        let err = ClientEvent::parse(r#"{"event":"cheat","data":{}}"#).unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownEvent(ref name) if name == "cheat"));
    }

    #[test]
    fn test_unsupported_frame_message() {
        let err = ProtocolError::UnsupportedFrame("binary");
        assert_eq!(err.to_string(), "Unsupported binary frame");
    }
}
