//! Behavioral properties of the board across whole games.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_tictactoe::invariants::{BoardInvariants, InvariantSet, WriteOnceContract};
use strictly_tictactoe::{Board, Cell, GameStatus, Mark, Player, PlayError, RandomPlayer};

/// Plays a random game, handing every intermediate board to `check`.
fn random_game(seed: u64, mut check: impl FnMut(&Board, &Board)) -> Board {
    let mut board = Board::with_rng(&mut StdRng::seed_from_u64(seed));
    let mut player = RandomPlayer::seeded("Bot", seed);
    while !board.is_game_over() {
        let before = board.clone();
        let at = player.choose(&board).expect("Legal move available");
        board.play_at(at).expect("Random player picks empty cells");
        check(&before, &board);
    }
    board
}

#[test]
fn test_cells_are_write_once() {
    for seed in 0..200 {
        random_game(seed, |before, after| {
            assert!(WriteOnceContract::holds(before, after));
            assert!(BoardInvariants::check_all(after).is_ok());
        });
    }
}

#[test]
fn test_turn_strictly_alternates() {
    for seed in 0..200 {
        random_game(seed, |before, after| {
            assert_eq!(after.to_move(), before.to_move().opponent());
            let last = *after.log().last().expect("Move logged");
            assert_eq!(after.grid().get(last), Cell::Occupied(before.to_move()));
        });
    }
}

#[test]
fn test_occupied_cell_never_changes_state() {
    for seed in 0..50 {
        random_game(seed, |_, after| {
            if after.is_game_over() {
                return;
            }
            let mut probe = after.clone();
            let taken = *after.log().last().expect("Move logged");
            let err = probe.play_at(taken).unwrap_err();
            assert!(matches!(err, PlayError::CellOccupied { .. }));
            assert_eq!(&probe, after);
        });
    }
}

#[test]
fn test_every_game_ends_won_or_drawn() {
    for seed in 0..200 {
        let board = random_game(seed, |_, _| {});
        match board.status() {
            GameStatus::Won(mark) => {
                // Winner made the last move.
                assert_eq!(board.to_move(), mark.opponent());
            }
            GameStatus::Draw => assert_eq!(board.log().len(), 9),
            GameStatus::InProgress => panic!("Game loop exited while in progress"),
        }
    }
}

#[test]
fn test_row_win_blocks_further_moves() {
    // X X X
    // . O .
    // . . O
    let mut board = Board::with_first_mover(Mark::X);
    board.play(0, 0).unwrap();
    board.play(1, 1).unwrap();
    board.play(0, 1).unwrap();
    board.play(2, 2).unwrap();
    assert_eq!(board.play(0, 2), Ok(GameStatus::Won(Mark::X)));

    assert_eq!(board.winner(), Some(Mark::X));
    assert!(board.is_game_over());

    let frozen = board.clone();
    for (row, col) in [(1, 0), (2, 0), (2, 1), (1, 2)] {
        assert_eq!(
            board.play(row, col),
            Err(PlayError::GameOver(GameStatus::Won(Mark::X)))
        );
    }
    assert_eq!(board, frozen);
}

#[test]
fn test_off_diagonal_moves_do_not_win() {
    // X holds the center; its off-diagonal moves must not be scored
    // against the diagonals.
    let mut board = Board::with_first_mover(Mark::X);
    for (row, col) in [(1, 1), (0, 0), (0, 1), (2, 1), (1, 0), (1, 2)] {
        assert_eq!(board.play(row, col), Ok(GameStatus::InProgress));
    }
    assert_eq!(board.winner(), None);
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X
    // X O O
    // O X X
    let mut board = Board::with_first_mover(Mark::X);
    let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0)];
    for (row, col) in moves {
        assert_eq!(board.play(row, col), Ok(GameStatus::InProgress));
    }
    assert_eq!(board.play(2, 2), Ok(GameStatus::Draw));
    assert_eq!(board.winner(), None);
    assert_eq!(board.play(0, 0), Err(PlayError::GameOver(GameStatus::Draw)));
}

#[test]
fn test_invalid_coordinate_leaves_board_unchanged() {
    let mut board = Board::with_first_mover(Mark::O);
    board.play(1, 1).unwrap();
    let snapshot = board.clone();

    assert_eq!(
        board.play(5, 0),
        Err(PlayError::InvalidCoordinate { row: 5, col: 0 })
    );
    assert_eq!(
        board.play(0, 3),
        Err(PlayError::InvalidCoordinate { row: 0, col: 3 })
    );
    assert_eq!(board, snapshot);
    assert_eq!(board.to_move(), Mark::X);
}

#[test]
fn test_empty_board_renders_blank_cells() {
    let board = Board::with_first_mover(Mark::X);
    let rendered = board.to_string();
    for row in 0..3 {
        assert!(rendered.contains(&format!("{row}. |   |   |   |")));
    }
    assert!(rendered.starts_with("   | 0 | 1 | 2 |\n"));
}

#[test]
fn test_replaying_log_reproduces_game() {
    for seed in 0..50 {
        let board = random_game(seed, |_, _| {});
        let replayed = Board::replay(board.first_mover(), board.log()).unwrap();
        assert_eq!(replayed, board);
    }
}
