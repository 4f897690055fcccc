//! Tic-tac-toe: board, rules and game state.

mod position;
mod state;
mod types;
pub mod rules;

pub use position::{Direction, Position};
pub use state::{GameState, Players};
pub use types::{Board, BoardParseError, Outcome, Player, Square, WinningLine};
