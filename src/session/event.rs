//! Input events consumed by the reducer.
//!
//! Events are already decoded from key presses; which key produces which
//! event is decided by the terminal layer.

use crate::games::tictactoe::Direction;

/// An edit to the focused name-entry field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edit {
    /// Append a character.
    Insert(char),
    /// Remove the last character.
    Backspace,
}

/// A discrete input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Move the board cursor one cell.
    MoveCursor(Direction),
    /// Place a marker, advance a name field, or start the next game.
    Confirm,
    /// Move focus between the name-entry fields.
    NavigateFocus(Direction),
    /// Change the text of the focused name-entry field.
    EditField(Edit),
    /// Clear the board, keeping names and scores.
    SoftReset,
    /// Start over from name entry with zero scores.
    HardReset,
    /// End the session.
    Quit,
}
