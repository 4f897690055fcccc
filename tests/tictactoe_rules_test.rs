//! Scenario tests for placement, win/draw detection and resets.

use tictactoe_tui::{
    Board, GameState, Outcome, Player, Players, Position, WinningLine, rules,
};

fn pos(row: usize, col: usize) -> Position {
    Position::new(row, col).unwrap()
}

fn play(state: GameState, moves: &[(usize, usize)]) -> GameState {
    moves
        .iter()
        .fold(state, |s, (row, col)| s.place_marker(*row, *col))
}

#[test]
fn test_x_wins_top_row() {
    let state = play(
        GameState::new(Players::new("Alice", "Bob")),
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
    );

    assert_eq!(
        *state.outcome(),
        Outcome::Win {
            player: Player::X,
            line: WinningLine([pos(0, 0), pos(0, 1), pos(0, 2)]),
        }
    );
    assert_eq!(state.players().score(Player::X), 1);
    assert_eq!(state.players().score(Player::O), 0);
}

#[test]
fn test_last_mark_draws() {
    let board: Board = "XOX/XOO/OX.".parse().unwrap();
    let state = GameState::from_board(board, Player::X, Players::default()).place_marker(2, 2);

    assert_eq!(*state.outcome(), Outcome::Draw);
    assert_eq!(state.players().score(Player::X), 0);
    assert_eq!(state.players().score(Player::O), 0);
}

#[test]
fn test_o_wins_anti_diagonal() {
    let state = play(
        GameState::default(),
        &[(0, 0), (0, 2), (0, 1), (1, 1), (2, 2), (2, 0)],
    );
    assert_eq!(
        state.outcome().winning_line(),
        Some(&WinningLine([pos(0, 2), pos(1, 1), pos(2, 0)]))
    );
    assert_eq!(state.players().score(Player::O), 1);
}

#[test]
fn test_score_recorded_once_per_win() {
    let won = play(
        GameState::default(),
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
    );
    // Further placements are refused, so the score cannot move again.
    let after = play(won.clone(), &[(2, 2), (2, 1)]);
    assert_eq!(after, won);
    assert_eq!(after.players().score(Player::X), 1);
}

#[test]
fn test_scores_accumulate_across_soft_resets() {
    let x_wins = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)];
    let state = play(GameState::default(), &x_wins).reset_soft();
    let state = play(state, &x_wins);
    assert_eq!(state.players().score(Player::X), 2);

    let state = state.reset_soft();
    assert_eq!(state.board().occupied_count(), 0);
    assert_eq!(*state.active_player(), Player::X);
    assert_eq!(state.players().score(Player::X), 2);
}

#[test]
fn test_record_win_increments_only_that_player() {
    let state = GameState::default().record_win(Player::O).record_win(Player::O);
    assert_eq!(state.players().score(Player::O), 2);
    assert_eq!(state.players().score(Player::X), 0);
}

#[test]
fn test_evaluate_outcome_checks_mover_only() {
    let board: Board = "OOO/XX./X..".parse().unwrap();
    assert_eq!(rules::evaluate_outcome(&board, Player::X), Outcome::InProgress);
    assert_eq!(
        rules::evaluate_outcome(&board, Player::O).winner(),
        Some(Player::O)
    );
}

#[test]
fn test_fixed_order_prefers_column_over_diagonal() {
    // Left column and main diagonal both complete; columns come first.
    let board: Board = "XO./XXO/X.X".parse().unwrap();
    assert_eq!(
        rules::check_winner(&board, Player::X),
        Some(WinningLine([pos(0, 0), pos(1, 0), pos(2, 0)]))
    );
}

#[test]
fn test_lines_order() {
    assert_eq!(rules::LINES.len(), 8);
    assert_eq!(rules::LINES[0], [pos(0, 0), pos(0, 1), pos(0, 2)]);
    assert_eq!(rules::LINES[3], [pos(0, 0), pos(1, 0), pos(2, 0)]);
    assert_eq!(rules::LINES[6], [pos(0, 0), pos(1, 1), pos(2, 2)]);
    assert_eq!(rules::LINES[7], [pos(0, 2), pos(1, 1), pos(2, 0)]);
}
