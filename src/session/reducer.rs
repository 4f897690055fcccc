//! Pure transition function: `(session, event) -> session`.
//!
//! The reducer performs no I/O. Events that make no sense in the current
//! phase return the session unchanged.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use super::event::Event;
use super::name_entry::{Confirmation, NameEntry};
use super::settings::SessionSettings;
use super::state::{Phase, Session};
use crate::games::tictactoe::GameState;

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    /// Render and wait for the next event.
    Continue,
    /// The players asked to leave; the shell should exit.
    Quit,
}

/// The session after one event, plus what the shell should do next.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Step {
    /// The next session value.
    session: Session,
    /// Continue or stop.
    flow: Flow,
}

impl Step {
    fn next(session: Session) -> Self {
        Self {
            session,
            flow: Flow::Continue,
        }
    }

    fn quit(session: Session) -> Self {
        Self {
            session,
            flow: Flow::Quit,
        }
    }

    /// Returns true if the session should end.
    pub fn is_quit(&self) -> bool {
        self.flow == Flow::Quit
    }

    /// Takes the session out of the step.
    pub fn into_session(self) -> Session {
        self.session
    }
}

/// Applies one event to a session.
#[instrument(skip(session), fields(phase = %session.phase_kind()))]
pub fn reduce(session: Session, event: Event) -> Step {
    if event == Event::Quit {
        info!("Quit requested");
        return Step::quit(session);
    }

    let (phase, game, settings) = session.into_parts();
    let next = match phase {
        Phase::NameEntry(entry) => reduce_name_entry(entry, game, settings, event),
        Phase::Playing => reduce_playing(game, settings, event),
    };
    Step::next(next)
}

fn reduce_name_entry(
    entry: NameEntry,
    game: GameState,
    settings: SessionSettings,
    event: Event,
) -> Session {
    let entry = match event {
        Event::NavigateFocus(direction) => entry.navigate(direction),
        Event::EditField(edit) => entry.edit(edit),
        Event::Confirm => match entry.confirm() {
            Confirmation::Advance(entry) => entry,
            Confirmation::Commit(players) => {
                info!("Starting play");
                return Session::playing(GameState::new(players), settings);
            }
        },
        Event::HardReset => {
            info!("Hard reset");
            return Session::new(settings);
        }
        Event::MoveCursor(_) | Event::SoftReset | Event::Quit => {
            debug!(?event, "Event ignored during name entry");
            entry
        }
    };
    Session::from_parts(Phase::NameEntry(entry), game, settings)
}

fn reduce_playing(game: GameState, settings: SessionSettings, event: Event) -> Session {
    let game = match event {
        Event::MoveCursor(direction) => game.move_cursor(direction),
        Event::Confirm if game.outcome().is_over() => {
            debug!("Confirm after game end starts a new round");
            game.reset_soft()
        }
        Event::Confirm => game.place_at_cursor(),
        Event::SoftReset => game.reset_soft(),
        Event::HardReset => {
            info!("Hard reset");
            return Session::new(settings);
        }
        Event::NavigateFocus(_) | Event::EditField(_) | Event::Quit => {
            debug!(?event, "Event ignored during play");
            game
        }
    };
    Session::from_parts(Phase::Playing, game, settings)
}
