//! Fixed positions with known best moves.

use playzone_tictactoe::{
    computer_move, new_game, player_move, rules, Board, BoardState, GameError, GameStatus,
    MoveError, MoveSelector, NoLegalMove, Player, Pruning, WIN,
};

/// Wraps a hand-built board so that the computer is the side to move.
fn computer_to_move(board: &str) -> BoardState {
    let board: Board = board.parse().expect("valid board");
    let opening = if board.occupied_count() % 2 == 0 {
        Player::Computer
    } else {
        Player::Human
    };
    let state = BoardState::from_board(board, opening);
    assert_eq!(state.turn(), Some(Player::Computer));
    state
}

#[test]
fn test_empty_board_picks_first_square() {
    let state = BoardState::with_opening(Player::Computer);
    let selector = MoveSelector::default();
    assert_eq!(selector.select(&state), Ok(0));
}

#[test]
fn test_blocks_imminent_win() {
    let state = computer_to_move("XX./.../...");
    assert_eq!(MoveSelector::default().select(&state), Ok(2));
}

#[test]
fn test_takes_win_over_block() {
    let state = computer_to_move("OO./XX./...");
    let outcome = MoveSelector::default().search(&state).unwrap();
    assert_eq!(outcome.index, 2);
    assert_eq!(outcome.score, WIN);

    let next = computer_move(&state).unwrap();
    assert_eq!(next.status(), GameStatus::Won(Player::Computer));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let board: Board = "XOX/XOO/OXX".parse().unwrap();
    assert_eq!(rules::evaluate(&board), GameStatus::Draw);
    assert!(rules::is_draw(&board));

    let state = BoardState::from_board(board, Player::Human);
    assert_eq!(
        computer_move(&state),
        Err(GameError::NoLegalMove(NoLegalMove))
    );
}

#[test]
fn test_repeated_square_rejected() {
    let state = player_move(&new_game(), 0).unwrap();
    let snapshot = state;

    let result = player_move(&state, 0);
    assert_eq!(result, Err(MoveError::SquareOccupied { index: 0 }));
    assert_eq!(state, snapshot);
    assert_eq!(state.board().occupied_count(), 1);
}

#[test]
fn test_slow_win_ranks_with_fast_win() {
    // Square 7 wins on the spot, square 3 forces a win two moves later.
    // Both score +1, so the lower index is chosen.
    let state = computer_to_move("XOX/.O./X..");
    let selector = MoveSelector::new(Pruning::Exhaustive);
    let scores = selector.evaluate_moves(&state).unwrap();
    let score_of = |i: usize| scores.iter().find(|m| m.index == i).unwrap().score;

    assert_eq!(score_of(3), WIN);
    assert_eq!(score_of(7), WIN);
    assert_eq!(selector.select(&state), Ok(3));
}

#[test]
fn test_player_move_out_of_turn() {
    let state = BoardState::with_opening(Player::Computer);
    assert_eq!(
        player_move(&state, 4),
        Err(MoveError::WrongTurn(Player::Human))
    );
}

#[test]
fn test_computer_move_out_of_turn() {
    assert_eq!(
        computer_move(&new_game()),
        Err(GameError::IllegalMove(MoveError::WrongTurn(Player::Computer)))
    );
}

#[test]
fn test_moves_after_game_over_rejected() {
    let board: Board = "XXX/OO./...".parse().unwrap();
    let state = BoardState::from_board(board, Player::Human);
    assert_eq!(state.status(), GameStatus::Won(Player::Human));
    assert_eq!(player_move(&state, 5), Err(MoveError::GameOver));
    assert_eq!(
        computer_move(&state),
        Err(GameError::NoLegalMove(NoLegalMove))
    );
}

#[test]
fn test_out_of_range_rejected() {
    assert_eq!(
        player_move(&new_game(), 9),
        Err(MoveError::OutOfBounds { index: 9 })
    );
}

#[test]
fn test_full_game_flow() {
    // Human opens in a corner; the computer answers in the center.
    let state = player_move(&new_game(), 0).unwrap();
    let state = computer_move(&state).unwrap();
    assert_eq!(state.last_move(), Some(4));
    assert_eq!(state.turn(), Some(Player::Human));

    let state = state.reset();
    assert_eq!(state, new_game());
}
