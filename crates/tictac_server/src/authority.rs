//! The game state authority: sole owner of the shared board.

use crate::protocol::{BoardUpdate, ClientEvent, GameOverNotice, ServerEvent};
use crate::substrate::{PartyId, Substrate};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tictac_rules::{
    GameState, InvariantViolation, Marker, Move, MoveError, Outcome, Position, invariants,
};
use tracing::{debug, info, instrument, warn};

/// Owns the one board and turn pointer shared by every connected party.
///
/// Every operation runs under a single lock covering the full
/// validate, apply, broadcast, detect and reset sequence, so two moves can
/// never interleave and the terminal check always sees the board the move
/// just produced. Outbound sends happen while the lock is held, which also
/// keeps broadcasts in the same order as the state changes behind them.
pub struct GameAuthority<S> {
    state: Mutex<GameState>,
    substrate: S,
}

impl<S: Substrate> GameAuthority<S> {
    /// Creates an authority with a fresh game.
    #[instrument(skip(substrate))]
    pub fn new(substrate: S) -> Self {
        info!("Creating game authority");
        Self {
            state: Mutex::new(GameState::new()),
            substrate,
        }
    }

    /// Creates an authority starting from an existing position.
    ///
    /// Used to resume a staged game. Invariant violations are logged, not refused.
    #[instrument(skip(substrate))]
    pub fn with_state(substrate: S, state: GameState) -> Self {
        info!(
            board = %state.board().display(),
            next = %state.next_player(),
            "Creating game authority from state"
        );
        Self::check_invariants(&state);
        Self {
            state: Mutex::new(state),
            substrate,
        }
    }

    /// The substrate this authority emits through.
    pub fn substrate(&self) -> &S {
        &self.substrate
    }

    /// Current board and turn pointer.
    pub fn snapshot(&self) -> BoardUpdate {
        BoardUpdate::from(&*self.lock())
    }

    /// Checks the current state against every game invariant.
    pub fn audit(&self) -> Result<(), Vec<InvariantViolation>> {
        invariants::check(&self.lock())
    }

    /// Sends the current state to a newly joined party only.
    #[instrument(skip(self))]
    pub fn on_connect(&self, party: PartyId) {
        let state = self.lock();
        debug!(board = %state.board().display(), next = %state.next_player(), "Sending snapshot");
        self.substrate
            .emit_to(party, &ServerEvent::UpdateBoard(BoardUpdate::from(&*state)));
    }

    /// Notes a departed party. The game itself is unaffected.
    #[instrument(skip(self))]
    pub fn on_disconnect(&self, party: PartyId) {
        debug!("Party left; game state unchanged");
    }

    /// Validates and applies a move, broadcasting the result.
    ///
    /// A rejected move changes nothing and sends nothing; the error is only
    /// returned to the caller for logging. When the move ends the game the
    /// outcome is broadcast and the board is reset silently, so the next
    /// broadcast or snapshot reveals the fresh board.
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: i64, claimed: Marker) -> Result<Option<Outcome>, MoveError> {
        let position = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        let mut state = self.lock();

        state.place(Move::new(claimed, position))?;
        Self::check_invariants(&state);
        self.substrate
            .emit_all(&ServerEvent::UpdateBoard(BoardUpdate::from(&*state)));

        let outcome = state.outcome();
        if let Some(outcome) = &outcome {
            info!(%outcome, board = %state.board().display(), "Game over");
            self.substrate
                .emit_all(&ServerEvent::GameOver(GameOverNotice::from(outcome)));
            state.reset();
            Self::check_invariants(&state);
        }

        Ok(outcome)
    }

    /// Resets the game unconditionally and broadcasts the empty board.
    #[instrument(skip(self))]
    pub fn request_new_game(&self) {
        let mut state = self.lock();
        state.reset();
        Self::check_invariants(&state);
        info!("New game requested");
        self.substrate
            .emit_all(&ServerEvent::UpdateBoard(BoardUpdate::from(&*state)));
    }

    /// Routes a parsed client event to the matching operation.
    ///
    /// Rejected moves are logged and dropped; the sender hears nothing.
    #[instrument(skip(self))]
    pub fn dispatch(&self, party: PartyId, event: ClientEvent) {
        match event {
            ClientEvent::Play(req) => {
                if let Err(e) = self.apply_move(req.index, req.player) {
                    debug!(error = %e, "Move ignored");
                }
            }
            ClientEvent::NewGame => self.request_new_game(),
        }
    }

    fn lock(&self) -> MutexGuard<'_, GameState> {
        self.state.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("Game state lock poisoned; continuing with last state");
            poisoned.into_inner()
        })
    }

    /// Logs violations without failing: a staged state may start anywhere.
    fn check_invariants(state: &GameState) {
        if let Err(violations) = invariants::check(state) {
            warn!(?violations, board = %state.board().display(), "Invariant violated");
        }
    }
}
