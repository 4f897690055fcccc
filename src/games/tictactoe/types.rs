//! Core domain types for tic-tac-toe.

use std::str::FromStr;

use derive_more::{Display, Error};
use tracing::instrument;

use super::position::Position;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player's marker.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Single-character symbol used by the compact board form.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of non-empty squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Returns the board with `pos` set to `square`.
    pub fn with(mut self, pos: Position, square: Square) -> Self {
        self.set(pos, square);
        self
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based number so the output doubles
    /// as a move reference.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    occupied => occupied.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.squares.chunks(3).enumerate() {
            if row > 0 {
                write!(f, "/")?;
            }
            for square in chunk {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

/// Error returned when a compact board string cannot be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses the compact form `"XOX/XOO/OX."`.
    ///
    /// Rows are separated by `/`; `.` or a space marks an empty square.
    /// Markers are case-insensitive.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.split('/').collect();
        if rows.len() != 3 {
            return Err(BoardParseError::new(format!(
                "expected 3 rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().collect();
            if cells.len() != 3 {
                return Err(BoardParseError::new(format!(
                    "row {} has {} cells, expected 3",
                    row,
                    cells.len()
                )));
            }
            for (col, c) in cells.into_iter().enumerate() {
                let square = match c {
                    '.' | ' ' => Square::Empty,
                    'x' | 'X' => Square::Occupied(Player::X),
                    'o' | 'O' => Square::Occupied(Player::O),
                    other => {
                        return Err(BoardParseError::new(format!(
                            "unexpected character {:?} at row {}, col {}",
                            other, row, col
                        )));
                    }
                };
                if let Some(pos) = Position::new(row, col) {
                    board.set(pos, square);
                }
            }
        }
        Ok(board)
    }
}

/// The three cells that completed a win, in checking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine(
    /// Cells of the line.
    pub [Position; 3],
);

impl WinningLine {
    /// Returns the cells of the line.
    pub fn cells(&self) -> &[Position; 3] {
        &self.0
    }

    /// Checks whether the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Classification of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// Game ended in a win.
    Win {
        /// The winning player.
        player: Player,
        /// The line that completed the win.
        line: WinningLine,
    },
    /// All squares filled with no winner.
    Draw,
}

impl Outcome {
    /// Returns true once the game has a terminal outcome.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(line),
            _ => None,
        }
    }
}
