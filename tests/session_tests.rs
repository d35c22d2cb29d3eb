//! Session tests - the state machine driven end to end through key events

use std::collections::VecDeque;
use std::io;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_2048::core::{FieldSnapshot, GameConfig, GameField, Session, SnapshotSink};
use tui_2048::input::TerminalInput;
use tui_2048::types::{Direction, GameAction, SessionState};

#[derive(Default)]
struct Frames(Vec<FieldSnapshot>);

impl SnapshotSink for Frames {
    fn render(&mut self, snap: &FieldSnapshot) -> Result<()> {
        self.0.push(snap.clone());
        Ok(())
    }
}

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::from(code))
}

fn keys(events: Vec<Event>) -> TerminalInput<impl FnMut() -> io::Result<Event>> {
    let mut queue = VecDeque::from(events);
    TerminalInput::with_reader(move || {
        queue
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
    })
}

fn session(height: usize, width: usize, win_value: u32, seed: u64) -> Session<StdRng> {
    let config = GameConfig::new(height, width, win_value);
    let field = GameField::with_rng(config, StdRng::seed_from_u64(seed)).unwrap();
    Session::new(field)
}

/// Cycle through the directions until the game leaves `Playing`.
fn play_out(session: &mut Session<StdRng>) -> SessionState {
    session.settle();
    for turn in 0..10_000 {
        let state = session.step(GameAction::Move(Direction::ALL[turn % 4]));
        if state != SessionState::Playing {
            return state;
        }
    }
    panic!("game never ended");
}

#[test]
fn test_run_renders_once_per_read_and_exits() {
    let mut s = session(4, 4, 2048, 1);
    let mut input = keys(vec![
        press(KeyCode::Left),
        press(KeyCode::Char('x')),
        press(KeyCode::Char('k')),
        press(KeyCode::Char('Q')),
    ]);
    let mut frames = Frames::default();

    s.run(&mut input, &mut frames).unwrap();

    assert_eq!(s.state(), SessionState::Exiting);
    assert_eq!(frames.0.len(), 3);
    assert_eq!(input.discarded(), 1);
    for frame in &frames.0 {
        assert_eq!(frame.state, SessionState::Playing);
        assert_eq!((frame.height, frame.width), (4, 4));
        assert_eq!(frame.cells.len(), 16);
    }
    // Init ran before the first frame.
    assert_eq!(frames.0[0].cells.iter().filter(|&&v| v != 0).count(), 2);
}

#[test]
fn test_restart_key_shows_highscore_in_next_frame() {
    let mut s = session(4, 4, 2048, 3);
    let mut script = Vec::new();
    for _ in 0..8 {
        script.extend([
            press(KeyCode::Left),
            press(KeyCode::Down),
            press(KeyCode::Right),
            press(KeyCode::Up),
        ]);
    }
    script.push(press(KeyCode::Char('r')));
    script.push(press(KeyCode::Esc));
    let mut input = keys(script);
    let mut frames = Frames::default();

    s.run(&mut input, &mut frames).unwrap();

    // 32 moves, then restart, then the frame read by Esc.
    assert_eq!(frames.0.len(), 34);
    let before = &frames.0[32];
    let after = &frames.0[33];
    assert!(before.score > 0);
    assert_eq!(after.score, 0);
    assert_eq!(after.highscore, before.score);
    assert_eq!(after.state, SessionState::Playing);
}

#[test]
fn test_ctrl_c_exits_from_first_frame() {
    let mut s = session(3, 5, 2048, 9);
    let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    let mut input = keys(vec![ctrl_c]);
    let mut frames = Frames::default();

    s.run(&mut input, &mut frames).unwrap();

    assert_eq!(frames.0.len(), 1);
    assert_eq!((frames.0[0].height, frames.0[0].width), (3, 5));
}

#[test]
fn test_key_releases_are_ignored() {
    let mut s = session(4, 4, 2048, 4);
    let mut release = KeyEvent::from(KeyCode::Char('q'));
    release.kind = KeyEventKind::Release;
    let mut input = keys(vec![Event::Key(release), press(KeyCode::Char('q'))]);
    let mut frames = Frames::default();

    s.run(&mut input, &mut frames).unwrap();
    assert_eq!(input.discarded(), 1);
    assert!(s.is_exiting());
}

#[test]
fn test_exhausted_input_is_an_error() {
    let mut s = session(4, 4, 2048, 5);
    let mut input = keys(vec![press(KeyCode::Left)]);
    let mut frames = Frames::default();

    let err = s.run(&mut input, &mut frames).unwrap_err();
    assert!(err.to_string().contains("script exhausted"));
    assert_eq!(s.state(), SessionState::Playing);
}

#[test]
fn test_small_win_value_wins_and_freezes() {
    let mut s = session(4, 4, 8, 11);
    assert_eq!(play_out(&mut s), SessionState::Won);
    assert!(s.field().max_tile() >= 8);

    let grid = s.field().grid().clone();
    for dir in Direction::ALL {
        assert_eq!(s.step(GameAction::Move(dir)), SessionState::Won);
    }
    assert_eq!(s.field().grid(), &grid);
    assert_eq!(s.snapshot().state, SessionState::Won);
}

#[test]
fn test_tiny_board_loses_then_restarts() {
    let mut s = session(2, 2, 2048, 12);
    assert_eq!(play_out(&mut s), SessionState::Lost);
    assert!(s.field().is_gameover());
    let final_score = s.field().score();

    assert_eq!(s.step(GameAction::Move(Direction::Left)), SessionState::Lost);
    assert_eq!(s.step(GameAction::Restart), SessionState::Init);
    assert_eq!(s.settle(), SessionState::Playing);
    assert_eq!(s.field().score(), 0);
    assert_eq!(s.field().highscore(), final_score);
    assert_eq!(s.field().grid().count_tiles(), 2);
}

#[test]
fn test_exit_from_finished_state() {
    let mut s = session(2, 2, 2048, 13);
    play_out(&mut s);
    assert_eq!(s.step(GameAction::Exit), SessionState::Exiting);
    assert_eq!(s.step(GameAction::Restart), SessionState::Exiting);
}
