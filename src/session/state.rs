//! The session: which phase we are in plus the game it wraps.

use derive_getters::Getters;
use derive_more::Display;
use tracing::instrument;

use super::name_entry::NameEntry;
use super::settings::SessionSettings;
use crate::games::tictactoe::GameState;

/// Session phase, with the data only that phase needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Collecting player names.
    NameEntry(NameEntry),
    /// Playing rounds until a hard reset or quit.
    Playing,
}

/// Data-free tag for [`Phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PhaseKind {
    /// Collecting player names.
    #[display("name entry")]
    NameEntry,
    /// Playing.
    #[display("playing")]
    Playing,
}

impl Phase {
    /// Returns the tag for this phase.
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::NameEntry(_) => PhaseKind::NameEntry,
            Phase::Playing => PhaseKind::Playing,
        }
    }
}

/// The single process-wide state value threaded through the event loop.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Session {
    /// Current phase.
    phase: Phase,
    /// Board, turn, outcome and roster.
    game: GameState,
    /// Defaults used at start-up and restored by a hard reset.
    settings: SessionSettings,
}

impl Session {
    /// Creates a session in name entry with an empty board and zero scores.
    #[instrument]
    pub fn new(settings: SessionSettings) -> Self {
        Self {
            phase: Phase::NameEntry(NameEntry::new(&settings)),
            game: GameState::new(settings.default_players()),
            settings,
        }
    }

    /// Creates a session already in play around `game`.
    #[instrument]
    pub fn playing(game: GameState, settings: SessionSettings) -> Self {
        Self {
            phase: Phase::Playing,
            game,
            settings,
        }
    }

    /// Tag of the current phase.
    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    /// Splits the session into its parts.
    pub(super) fn into_parts(self) -> (Phase, GameState, SessionSettings) {
        (self.phase, self.game, self.settings)
    }

    /// Reassembles a session from its parts.
    pub(super) fn from_parts(phase: Phase, game: GameState, settings: SessionSettings) -> Self {
        Self {
            phase,
            game,
            settings,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionSettings::default())
    }
}
