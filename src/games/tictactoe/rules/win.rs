//! Win detection logic for tic-tac-toe.

use super::super::{Board, Outcome, Player, Position, Square, WinningLine};
use super::draw::is_full;
use tracing::instrument;

const fn cell(row: usize, col: usize) -> Position {
    Position::ALL[row * 3 + col]
}

/// The 8 lines in checking order: rows, then columns, then the main
/// diagonal and the anti-diagonal.
///
/// When a constructed board completes several lines at once, the first
/// one in this order is the one reported.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [cell(0, 0), cell(0, 1), cell(0, 2)],
    [cell(1, 0), cell(1, 1), cell(1, 2)],
    [cell(2, 0), cell(2, 1), cell(2, 2)],
    // Columns
    [cell(0, 0), cell(1, 0), cell(2, 0)],
    [cell(0, 1), cell(1, 1), cell(2, 1)],
    [cell(0, 2), cell(1, 2), cell(2, 2)],
    // Diagonals
    [cell(0, 0), cell(1, 1), cell(2, 2)],
    [cell(0, 2), cell(1, 1), cell(2, 0)],
];

/// Finds the first line fully held by `player`.
///
/// Only `player`'s lines are considered; a line held by the opponent
/// is ignored.
#[instrument]
pub fn check_winner(board: &Board, player: Player) -> Option<WinningLine> {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .find(|line| line.iter().all(|pos| board.get(*pos) == mark))
        .map(|line| WinningLine(*line))
}

/// Classifies the board after `last_player` has moved.
///
/// Returns `Win` for the first completed line of the mover, `Draw` if the
/// board is full otherwise, and `InProgress` in every other case.
#[instrument]
pub fn evaluate_outcome(board: &Board, last_player: Player) -> Outcome {
    if let Some(line) = check_winner(board, last_player) {
        Outcome::Win {
            player: last_player,
            line,
        }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
