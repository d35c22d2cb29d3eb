//! Session controller - the Init/Playing/Won/Lost/Exiting state machine
//!
//! The controller owns the current [`SessionState`] and drives a [`GameField`]
//! with actions from an [`ActionSource`]. Before every blocking read it hands a
//! fresh [`FieldSnapshot`] to a [`SnapshotSink`], so the player always sees the
//! board as of the latest move.
//!
//! All transitions go through [`transition`], one function over the state enum.

use anyhow::Result;
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::{debug, info};

use crate::field::GameField;
use crate::snapshot::FieldSnapshot;
use crate::types::{GameAction, SessionState};

/// Blocking source of player actions.
///
/// Implementations discard anything that is not an action and keep waiting.
pub trait ActionSource {
    fn next_action(&mut self) -> Result<GameAction>;
}

/// Consumer of frames. Receives a read-only copy, so it cannot touch the engine.
pub trait SnapshotSink {
    fn render(&mut self, snap: &FieldSnapshot) -> Result<()>;
}

/// Compute the next state for `action`, applying its side effects to `field`.
///
/// - `Init` resets the field and moves to `Playing`; the action is ignored.
/// - `Exit` and `Restart` act from every interactive state.
/// - Moves only act while `Playing`; `Won` and `Lost` stay frozen.
/// - `Exiting` is terminal.
pub fn transition<R: Rng>(
    state: SessionState,
    action: GameAction,
    field: &mut GameField<R>,
) -> SessionState {
    match (state, action) {
        (SessionState::Exiting, _) => SessionState::Exiting,
        (SessionState::Init, _) => enter_init(field),
        (_, GameAction::Exit) => SessionState::Exiting,
        (_, GameAction::Restart) => SessionState::Init,
        (SessionState::Playing, GameAction::Move(dir)) => {
            if !field.move_in(dir) {
                SessionState::Playing
            } else if field.is_win() {
                SessionState::Won
            } else if field.is_gameover() {
                SessionState::Lost
            } else {
                SessionState::Playing
            }
        }
        (SessionState::Won, GameAction::Move(_)) => SessionState::Won,
        (SessionState::Lost, GameAction::Move(_)) => SessionState::Lost,
    }
}

/// Init's entry action: reset the field and start playing
pub fn enter_init<R: Rng>(field: &mut GameField<R>) -> SessionState {
    field.reset();
    SessionState::Playing
}

/// One play-through loop around a [`GameField`]
#[derive(Debug)]
pub struct Session<R = ThreadRng> {
    field: GameField<R>,
    state: SessionState,
    frame: FieldSnapshot,
}

impl<R: Rng> Session<R> {
    /// Wrap a field; the session starts in `Init`
    pub fn new(field: GameField<R>) -> Self {
        Self {
            field,
            state: SessionState::Init,
            frame: FieldSnapshot::default(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn field(&self) -> &GameField<R> {
        &self.field
    }

    pub fn is_exiting(&self) -> bool {
        self.state == SessionState::Exiting
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        self.field.snapshot(self.state)
    }

    /// Run Init's entry action if the session is in `Init`
    pub fn settle(&mut self) -> SessionState {
        if self.state == SessionState::Init {
            let next = enter_init(&mut self.field);
            self.set_state(next);
        }
        self.state
    }

    /// Apply one action and return the new state
    pub fn step(&mut self, action: GameAction) -> SessionState {
        debug!(state = self.state.as_str(), action = action.as_str(), "step");
        let next = transition(self.state, action, &mut self.field);
        self.set_state(next);
        next
    }

    /// Render, await one action, apply it. Init is handled without reading input.
    pub fn advance(
        &mut self,
        input: &mut impl ActionSource,
        sink: &mut impl SnapshotSink,
    ) -> Result<SessionState> {
        if self.state.awaits_input() {
            self.field.snapshot_into(&mut self.frame, self.state);
            sink.render(&self.frame)?;
            let action = input.next_action()?;
            self.step(action);
        } else {
            self.settle();
        }
        Ok(self.state)
    }

    /// Drive the state machine until `Exiting` is reached
    pub fn run(
        &mut self,
        input: &mut impl ActionSource,
        sink: &mut impl SnapshotSink,
    ) -> Result<()> {
        while !self.is_exiting() {
            self.advance(input, sink)?;
        }
        info!(
            score = self.field.score(),
            highscore = self.field.highscore(),
            "session exited"
        );
        Ok(())
    }

    fn set_state(&mut self, next: SessionState) {
        if next != self.state {
            info!(from = self.state.as_str(), to = next.as_str(), "session state");
            self.state = next;
        }
    }
}
