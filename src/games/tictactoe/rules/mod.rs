//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board); they never touch
//! turn order, cursor, or scores.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, evaluate_outcome};
