//! Terminal 2048 runner (default binary).
//!
//! Board size and win value come from `TUI_2048_HEIGHT`, `TUI_2048_WIDTH` and
//! `TUI_2048_WIN`. Set `TUI_2048_LOG=<file>` to write tracing output there
//! (filtered by `RUST_LOG`, default `info`); the terminal itself belongs to the game.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_2048::core::{GameConfig, GameField, Session};
use tui_2048::input::TerminalInput;
use tui_2048::term::{GameView, TerminalRenderer, TerminalSink};

const LOG_ENV: &str = "TUI_2048_LOG";

fn main() -> Result<()> {
    init_tracing()?;

    let config = GameConfig::from_env().context("reading board configuration")?;
    let field = GameField::new(config)?;
    let mut session = Session::new(field);
    info!(
        height = config.height,
        width = config.width,
        win_value = config.win_value,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut session, &mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(session: &mut Session, term: &mut TerminalRenderer) -> Result<()> {
    let mut input = TerminalInput::new();
    let mut sink = TerminalSink::new(GameView::default(), term);
    session.run(&mut input, &mut sink)
}

fn init_tracing() -> Result<()> {
    let Some(path) = std::env::var_os(LOG_ENV) else {
        return Ok(());
    };
    let file = File::create(&path)
        .with_context(|| format!("creating log file {}", path.to_string_lossy()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow!(err))?;
    Ok(())
}
