//! Game state and the rules that drive it.
//!
//! Every operation takes the state by value and returns the next one.
//! Invalid requests hand back the state untouched.

use derive_getters::Getters;
use tracing::{debug, info, instrument};

use super::position::{Direction, Position};
use super::rules::{check_winner, evaluate_outcome};
use super::types::{Board, Outcome, Player, Square};

/// Names and win tallies for both players.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Players {
    /// Display name for X.
    x_name: String,
    /// Display name for O.
    o_name: String,
    /// Games won by X since the last hard reset.
    x_score: u32,
    /// Games won by O since the last hard reset.
    o_score: u32,
}

impl Players {
    /// Creates a roster with zeroed scores.
    pub fn new(x_name: impl Into<String>, o_name: impl Into<String>) -> Self {
        Self {
            x_name: x_name.into(),
            o_name: o_name.into(),
            x_score: 0,
            o_score: 0,
        }
    }

    /// Display name for `player`.
    pub fn name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.x_name,
            Player::O => &self.o_name,
        }
    }

    /// Win count for `player`.
    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_score,
            Player::O => self.o_score,
        }
    }

    fn increment(&mut self, player: Player) {
        match player {
            Player::X => self.x_score += 1,
            Player::O => self.o_score += 1,
        }
    }
}

impl Default for Players {
    fn default() -> Self {
        Self::new("Player X", "Player O")
    }
}

/// Complete state of a match: the current board plus the roster.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player whose marker the next placement uses.
    active_player: Player,
    /// Highlighted cell; the next placement target.
    cursor: Position,
    /// Current classification of the game.
    outcome: Outcome,
    /// Names and scores.
    players: Players,
}

impl GameState {
    /// Creates a fresh game for the given roster.
    #[instrument]
    pub fn new(players: Players) -> Self {
        Self {
            board: Board::new(),
            active_player: Player::X,
            cursor: Position::ORIGIN,
            outcome: Outcome::InProgress,
            players,
        }
    }

    /// Builds a state around an arbitrary board.
    ///
    /// The outcome is derived from the board, treating the opponent of
    /// `active_player` as the last mover. A line held by `active_player`
    /// still counts, so a won board never accepts further moves. Scores
    /// are left untouched.
    #[instrument]
    pub fn from_board(board: Board, active_player: Player, players: Players) -> Self {
        let outcome = match evaluate_outcome(&board, active_player.opponent()) {
            win @ Outcome::Win { .. } => win,
            other => check_winner(&board, active_player)
                .map(|line| Outcome::Win {
                    player: active_player,
                    line,
                })
                .unwrap_or(other),
        };
        Self {
            board,
            active_player,
            cursor: Position::ORIGIN,
            outcome,
            players,
        }
    }

    /// Returns the state with the cursor placed at `cursor`.
    pub fn with_cursor(mut self, cursor: Position) -> Self {
        self.cursor = cursor;
        self
    }

    /// Places the active player's marker at `(row, col)`.
    ///
    /// No-op if the game is already decided, the coordinates are off the
    /// board, or the square is taken. A win is recorded on the roster the
    /// moment it happens; the turn only passes while the game continues.
    #[instrument(skip(self), fields(player = %self.active_player))]
    pub fn place_marker(mut self, row: usize, col: usize) -> Self {
        if self.outcome.is_over() {
            debug!("Placement ignored: game is already over");
            return self;
        }

        let Some(pos) = Position::new(row, col) else {
            debug!("Placement ignored: out of bounds");
            return self;
        };

        if !self.board.is_empty(pos) {
            debug!(position = %pos, "Placement ignored: square occupied");
            return self;
        }

        let player = self.active_player;
        self.board.set(pos, Square::Occupied(player));
        self.outcome = evaluate_outcome(&self.board, player);
        debug!(position = %pos, outcome = ?self.outcome, "Marker placed");

        match self.outcome {
            Outcome::InProgress => {
                self.active_player = player.opponent();
                self
            }
            Outcome::Win { .. } => {
                info!(winner = %player, "Game won");
                self.record_win(player)
            }
            Outcome::Draw => {
                info!("Game drawn");
                self
            }
        }
    }

    /// Places a marker at the cursor.
    pub fn place_at_cursor(self) -> Self {
        let (row, col) = (self.cursor.row(), self.cursor.col());
        self.place_marker(row, col)
    }

    /// Moves the cursor one cell, clamped to the board.
    #[instrument(skip(self))]
    pub fn move_cursor(mut self, direction: Direction) -> Self {
        self.cursor = self.cursor.step(direction);
        self
    }

    /// Clears board, outcome, cursor and turn; keeps names and scores.
    #[instrument(skip(self))]
    pub fn reset_soft(self) -> Self {
        debug!("Soft reset");
        Self::new(self.players)
    }

    /// Starts over from nothing: default names, zero scores.
    #[instrument]
    pub fn reset_hard() -> Self {
        debug!("Hard reset");
        Self::new(Players::default())
    }

    /// Credits `player` with one win.
    #[instrument(skip(self))]
    pub fn record_win(mut self, player: Player) -> Self {
        self.players.increment(player);
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Players::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(board: &str, active: Player) -> GameState {
        GameState::from_board(board.parse().unwrap(), active, Players::default())
    }

    #[test]
    fn test_new_game_defaults() {
        let state = GameState::default();
        assert_eq!(*state.active_player(), Player::X);
        assert_eq!(*state.cursor(), Position::ORIGIN);
        assert_eq!(*state.outcome(), Outcome::InProgress);
        assert_eq!(state.board().occupied_count(), 0);
        assert_eq!(state.players().score(Player::X), 0);
    }

    #[test]
    fn test_placement_switches_player() {
        let state = GameState::default().place_marker(0, 0);
        assert_eq!(
            state.board().get(Position::ORIGIN),
            Square::Occupied(Player::X)
        );
        assert_eq!(*state.active_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_noop() {
        let state = GameState::default().place_marker(0, 0);
        let again = state.clone().place_marker(0, 0);
        assert_eq!(again, state);
    }

    #[test]
    fn test_out_of_bounds_is_noop() {
        let state = GameState::default();
        assert_eq!(state.clone().place_marker(3, 0), state);
        assert_eq!(state.clone().place_marker(0, 7), state);
    }

    #[test]
    fn test_win_records_score_and_keeps_player() {
        let state = state_with("XX./OO./...", Player::X).place_marker(0, 2);
        assert_eq!(state.outcome().winner(), Some(Player::X));
        assert_eq!(*state.active_player(), Player::X);
        assert_eq!(state.players().score(Player::X), 1);
        assert_eq!(state.players().score(Player::O), 0);
    }

    #[test]
    fn test_no_placement_after_win() {
        let won = state_with("XX./OO./...", Player::X).place_marker(0, 2);
        assert_eq!(won.clone().place_marker(2, 2), won);
    }

    #[test]
    fn test_draw_keeps_player() {
        let state = state_with("XOX/XOO/OX.", Player::X).place_marker(2, 2);
        assert_eq!(*state.outcome(), Outcome::Draw);
        assert_eq!(*state.active_player(), Player::X);
    }

    #[test]
    fn test_soft_reset_keeps_roster() {
        let won = state_with("XX./OO./...", Player::X)
            .with_cursor(Position::new(0, 2).unwrap())
            .place_at_cursor();
        let reset = won.clone().reset_soft();
        assert_eq!(reset.board().occupied_count(), 0);
        assert_eq!(*reset.outcome(), Outcome::InProgress);
        assert_eq!(*reset.cursor(), Position::ORIGIN);
        assert_eq!(*reset.active_player(), Player::X);
        assert_eq!(reset.players(), won.players());
    }

    #[test]
    fn test_from_board_derives_outcome() {
        assert_eq!(*state_with("XOX/XOO/OXO", Player::X).outcome(), Outcome::Draw);

        let won = state_with("XXX/OO./...", Player::O);
        assert_eq!(won.outcome().winner(), Some(Player::X));
        assert_eq!(won.clone().place_marker(1, 2), won);

        let held_by_active = state_with("XXX/OO./...", Player::X);
        assert_eq!(held_by_active.outcome().winner(), Some(Player::X));

        assert_eq!(
            *state_with("XX./OO./...", Player::X).outcome(),
            Outcome::InProgress
        );
    }

    #[test]
    fn test_hard_reset_clears_roster() {
        let state = GameState::reset_hard();
        assert_eq!(state.players(), &Players::default());
    }

    #[test]
    fn test_cursor_never_touches_board() {
        let state = GameState::default()
            .move_cursor(Direction::Down)
            .move_cursor(Direction::Right)
            .move_cursor(Direction::Right)
            .move_cursor(Direction::Right);
        assert_eq!(*state.cursor(), Position::new(1, 2).unwrap());
        assert_eq!(state.board().occupied_count(), 0);
        assert_eq!(*state.active_player(), Player::X);
    }
}
