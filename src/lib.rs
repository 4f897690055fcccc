//! Two-player tic-tac-toe for the terminal.
//!
//! # Architecture
//!
//! - **Games**: board, rules and [`GameState`] (win/draw detection, move
//!   legality, turn switching, scores)
//! - **Session**: the name-entry/play state machine and the pure
//!   [`reduce`] function that applies one [`Event`] at a time
//! - **TUI**: key mapping, a renderer driven by [`Snapshot`], and the
//!   event loop that owns the terminal
//!
//! # Example
//!
//! ```
//! use tictactoe_tui::{Event, Session, reduce};
//!
//! let session = Session::default();
//! // Accept the placeholder names and start playing.
//! let session = reduce(session, Event::Confirm).into_session();
//! let session = reduce(session, Event::Confirm).into_session();
//! // X takes the top-left corner.
//! let session = reduce(session, Event::Confirm).into_session();
//! assert_eq!(session.game().board().occupied_count(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;

pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Direction, GameState, Outcome, Player, Players, Position, Square,
    WinningLine, rules,
};

// Crate-level exports - Session state machine
pub use session::{
    Confirmation, DEFAULT_NAME_CHAR_LIMIT, Edit, Event, Flow, LAST_FIELD, NameEntry, Phase,
    PhaseKind, Session, SessionSettings, Snapshot, Step, reduce,
};
