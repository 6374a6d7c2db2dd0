//! Wire format of client and server events.

use serde_json::json;
use tictac_rules::{GameState, Marker, Move, Outcome, Position};
use tictac_server::{BoardUpdate, ClientEvent, GameOverNotice, PlayRequest, ServerEvent};

#[test]
fn test_parse_play() {
    let event = ClientEvent::parse(r#"{"event":"play","data":{"index":4,"player":"X"}}"#).unwrap();
    assert_eq!(event, ClientEvent::Play(PlayRequest::new(4, Marker::X)));
}

#[test]
fn test_parse_play_keeps_out_of_range_index() {
    let event = ClientEvent::parse(r#"{"event":"play","data":{"index":-3,"player":"O"}}"#).unwrap();
    assert_eq!(event, ClientEvent::Play(PlayRequest::new(-3, Marker::O)));
}

#[test]
fn test_parse_new_game() {
    assert_eq!(ClientEvent::parse(r#"{"event":"newGame"}"#).unwrap(), ClientEvent::NewGame);
    for text in [
        r#"{"event":"newGame","data":null}"#,
        r#"{"event":"newGame","data":{}}"#,
        r#"{"event":"newGame","data":[]}"#,
        r#"{"event":"newGame","data":{"reason":"rematch"}}"#,
    ] {
        assert_eq!(ClientEvent::parse(text).unwrap(), ClientEvent::NewGame, "{text}");
    }
}

#[test]
fn test_malformed_frames_fail_closed() {
    for text in [
        "",
        "not json",
        r#"{"event":"play"}"#,
        r#"{"event":"play","data":{"index":4}}"#,
        r#"{"event":"play","data":{"player":"X"}}"#,
        r#"{"event":"play","data":{"index":"4","player":"X"}}"#,
        r#"{"event":"play","data":{"index":4.5,"player":"X"}}"#,
        r#"{"event":"play","data":{"index":4,"player":"Z"}}"#,
        r#"{"event":"play","data":{"index":4,"player":null}}"#,
        r#"{"event":"cheat","data":{}}"#,
        r#"[1,2,3]"#,
    ] {
        assert!(ClientEvent::parse(text).is_err(), "accepted {text:?}");
    }
}

#[test]
fn test_update_board_shape() {
    let mut state = GameState::new();
    state.place(Move::new(Marker::X, Position::Center)).unwrap();
    let event = ServerEvent::UpdateBoard(BoardUpdate::from(&state));

    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({
            "event": "updateBoard",
            "data": {
                "newBoard": [null, null, null, null, "X", null, null, null, null],
                "nextPlayer": "O"
            }
        })
    );
}

#[test]
fn test_game_over_win_shape() {
    let mut state = GameState::new();
    for (player, position) in [
        (Marker::X, Position::TopLeft),
        (Marker::O, Position::MiddleLeft),
        (Marker::X, Position::TopCenter),
        (Marker::O, Position::Center),
        (Marker::X, Position::TopRight),
    ] {
        state.place(Move::new(player, position)).unwrap();
    }
    let outcome = state.outcome().unwrap();
    let event = ServerEvent::GameOver(GameOverNotice::from(&outcome));

    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({"event": "gameOver", "data": {"winner": "X", "winningCells": [0, 1, 2]}})
    );
}

#[test]
fn test_game_over_draw_shape() {
    let event = ServerEvent::GameOver(GameOverNotice::from(&Outcome::Draw));
    assert_eq!(
        serde_json::to_value(&event).unwrap(),
        json!({"event": "gameOver", "data": {"winner": "Empate", "winningCells": []}})
    );
}

#[test]
fn test_server_events_parse_back() {
    let text = r#"{"event":"gameOver","data":{"winner":"Empate","winningCells":[]}}"#;
    let event: ServerEvent = serde_json::from_str(text).unwrap();
    assert_eq!(event, ServerEvent::GameOver(GameOverNotice::from(&Outcome::Draw)));
}
