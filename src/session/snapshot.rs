//! Read-only view of a session for the renderer.

use super::name_entry::NameEntry;
use super::state::{Phase, PhaseKind, Session};
use crate::games::tictactoe::{Board, Outcome, Player, Players, Position};

/// Everything the renderer needs, borrowed from a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Current phase.
    pub phase: PhaseKind,
    /// Board cells.
    pub board: &'a Board,
    /// Highlighted cell.
    pub cursor: Position,
    /// Player to move.
    pub active_player: Player,
    /// Current outcome, with the winning line on a win.
    pub outcome: &'a Outcome,
    /// Names and scores.
    pub players: &'a Players,
    /// Name-entry fields and focus; `None` while playing.
    pub name_entry: Option<&'a NameEntry>,
}

impl Session {
    /// Borrows a render-ready view of the session.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let game = self.game();
        Snapshot {
            phase: self.phase_kind(),
            board: game.board(),
            cursor: *game.cursor(),
            active_player: *game.active_player(),
            outcome: game.outcome(),
            players: game.players(),
            name_entry: match self.phase() {
                Phase::NameEntry(entry) => Some(entry),
                Phase::Playing => None,
            },
        }
    }
}

impl Snapshot<'_> {
    /// Name of the player to move.
    pub fn active_name(&self) -> &str {
        self.players.name(self.active_player)
    }
}
