//! Terminal UI for tic-tac-toe.
//!
//! The shell owns the terminal and the event loop. Each key is mapped to
//! an [`Event`](crate::Event), reduced, and the result rendered.

pub mod input;
pub mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as TermEvent, KeyEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tracing::{debug, error, info, instrument};

use crate::session::{Session, SessionSettings, reduce};

/// Restores the terminal when dropped, so every exit path leaves the
/// shell usable.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    #[instrument]
    fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e).context("Failed to enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(e) => {
                let _ = disable_raw_mode();
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                return Err(e).context("Failed to create terminal");
            }
        };
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Sends log output to `path` so it never lands on the game screen.
///
/// `RUST_LOG` overrides the default `info` filter. Calling this twice is
/// harmless; the second subscriber is discarded.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Runs the game in the real terminal until the players quit.
#[instrument(skip(settings))]
pub fn run_tui(settings: SessionSettings) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    let mut guard = TerminalGuard::enter()?;
    let res = run_app(&mut guard.terminal, Session::new(settings), read_key);
    drop(guard);

    match res {
        Ok(session) => {
            info!(phase = %session.phase_kind(), "Session ended");
            Ok(())
        }
        Err(err) => {
            error!(error = ?err, "Game loop error");
            Err(err)
        }
    }
}

/// Blocks for the next terminal event; non-key events yield `None`.
fn read_key() -> io::Result<Option<KeyEvent>> {
    match event::read()? {
        TermEvent::Key(key) => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Render, wait for a key, reduce; repeat until a quit event.
///
/// `next_key` supplies input; `None` means "nothing to reduce, just
/// redraw" (e.g. a resize). Returns the final session.
pub fn run_app<B, F>(
    terminal: &mut Terminal<B>,
    mut session: Session,
    mut next_key: F,
) -> Result<Session>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    F: FnMut() -> io::Result<Option<KeyEvent>>,
{
    loop {
        terminal.draw(|f| ui::draw(f, &session.snapshot()))?;

        let Some(key) = next_key()? else {
            continue;
        };
        let Some(event) = input::map_key(key, session.phase_kind()) else {
            continue;
        };

        debug!(?event, "Dispatching event");
        let step = reduce(session, event);
        if step.is_quit() {
            return Ok(step.into_session());
        }
        session = step.into_session();
    }
}
