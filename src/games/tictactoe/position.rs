//! Board coordinates and cursor movement.

use tracing::instrument;

use super::types::Board;

/// A cardinal direction for cursor and focus navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

/// A cell on the board, addressed by `(row, col)` with both in `0..3`.
///
/// The only way to obtain a `Position` is through a bounds-checked
/// constructor, so every value addresses a real cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

const LABELS: [&str; 9] = [
    "Top-left",
    "Top-center",
    "Top-right",
    "Middle-left",
    "Center",
    "Middle-right",
    "Bottom-left",
    "Bottom-center",
    "Bottom-right",
];

impl Position {
    /// Top-left cell, where the cursor starts.
    pub const ORIGIN: Position = Position::at(0, 0);

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::at(0, 0),
        Position::at(0, 1),
        Position::at(0, 2),
        Position::at(1, 0),
        Position::at(1, 1),
        Position::at(1, 2),
        Position::at(2, 0),
        Position::at(2, 1),
        Position::at(2, 2),
    ];

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a position, or `None` if either coordinate is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Row index (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Converts position to board index (0-8, row-major).
    pub fn to_index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        LABELS[self.to_index()]
    }

    /// Moves one cell in `direction`, clamping at the board edge.
    #[instrument]
    pub fn step(self, direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::at(self.row.saturating_sub(1), self.col),
            Direction::Down => Self::at((self.row + 1).min(2), self.col),
            Direction::Left => Self::at(self.row, self.col.saturating_sub(1)),
            Direction::Right => Self::at(self.row, (self.col + 1).min(2)),
        }
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_out_of_bounds() {
        assert!(Position::new(2, 2).is_some());
        assert!(Position::new(3, 0).is_none());
        assert!(Position::new(0, 3).is_none());
    }

    #[test]
    fn test_step_clamps_at_edges() {
        let origin = Position::ORIGIN;
        assert_eq!(origin.step(Direction::Up), origin);
        assert_eq!(origin.step(Direction::Left), origin);

        let corner = Position::new(2, 2).unwrap();
        assert_eq!(corner.step(Direction::Down), corner);
        assert_eq!(corner.step(Direction::Right), corner);
    }

    #[test]
    fn test_step_moves_one_cell() {
        let center = Position::new(1, 1).unwrap();
        assert_eq!(center.step(Direction::Up), Position::new(0, 1).unwrap());
        assert_eq!(center.step(Direction::Down), Position::new(2, 1).unwrap());
        assert_eq!(center.step(Direction::Left), Position::new(1, 0).unwrap());
        assert_eq!(center.step(Direction::Right), Position::new(1, 2).unwrap());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Position::ORIGIN.label(), "Top-left");
        assert_eq!(Position::new(1, 1).unwrap().to_string(), "Center");
    }
}
