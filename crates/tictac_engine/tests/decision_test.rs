//! Tests for the computer opponent's move selection.

use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;
use tictac_engine::decision::minimax;
use tictac_engine::{Board, Difficulty, GameStatus, Player, Position, apply_move, select_move};

/// Plays one game to the end and returns the final status.
fn play_out(x: Difficulty, o: Difficulty, rng: &mut ChaCha8Rng) -> GameStatus {
    let mut board = Board::new();
    let mut mover = Player::X;
    loop {
        let difficulty = if mover == Player::X { x } else { o };
        let pos = select_move(&board, mover, difficulty, rng).expect("game not over");
        let status =
            apply_move(&mut board, pos.to_index(), mover).expect("engine picks legal squares");
        if status.is_terminal() {
            return status;
        }
        mover = mover.opponent();
    }
}

#[test]
fn test_blocks_diagonal_threat() {
    let board: Board = "____X___X".parse().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let choice = select_move(&board, Player::O, Difficulty::Hard, &mut rng).unwrap();
    assert_eq!(choice.to_index(), 0);
}

#[test]
fn test_search_leaves_board_untouched() {
    let board: Board = "X___O___X".parse().unwrap();
    let before = board;
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    select_move(&board, Player::O, Difficulty::Hard, &mut rng).unwrap();
    minimax::score_moves(&board, Player::O);
    assert_eq!(board, before);
}

#[test]
fn test_hard_vs_hard_always_draws() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let status = play_out(Difficulty::Hard, Difficulty::Hard, &mut rng);
    assert_eq!(status, GameStatus::Drawn);
}

#[test]
fn test_hard_as_o_never_loses_to_random() {
    for seed in 0..40 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let status = play_out(Difficulty::Easy, Difficulty::Hard, &mut rng);
        assert_ne!(status.winner(), Some(Player::X), "seed {seed}: {status:?}");
    }
}

#[test]
fn test_hard_as_o_never_loses_to_medium() {
    for seed in 0..10 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let status = play_out(Difficulty::Medium, Difficulty::Hard, &mut rng);
        assert_ne!(status.winner(), Some(Player::X), "seed {seed}: {status:?}");
    }
}

#[test]
fn test_hard_as_x_never_loses_from_any_reply() {
    // Hard opens; try every possible O reply and then random play for O.
    let mut opening = Board::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let first = select_move(&opening, Player::X, Difficulty::Hard, &mut rng).unwrap();
    apply_move(&mut opening, first.to_index(), Player::X).unwrap();

    for reply in opening.empty_positions().collect::<Vec<_>>() {
        for seed in 0..3 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let mut board = opening;
            let mut status = apply_move(&mut board, reply.to_index(), Player::O).unwrap();
            let mut mover = Player::X;
            while !status.is_terminal() {
                let pos = if mover == Player::X {
                    select_move(&board, Player::X, Difficulty::Hard, &mut rng).unwrap()
                } else {
                    *Position::valid_moves(&board).choose(&mut rng).unwrap()
                };
                status = apply_move(&mut board, pos.to_index(), mover).unwrap();
                mover = mover.opponent();
            }
            assert_ne!(status.winner(), Some(Player::O), "reply {reply}, seed {seed}");
        }
    }
}

#[test]
fn test_seeded_easy_and_medium_are_reproducible() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium] {
        let a = play_out(difficulty, difficulty, &mut ChaCha8Rng::seed_from_u64(99));
        let b = play_out(difficulty, difficulty, &mut ChaCha8Rng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}

#[test]
fn test_easy_picks_only_empty_squares() {
    let board: Board = "XOX OXO _X_".parse().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    for _ in 0..50 {
        let pos = select_move(&board, Player::O, Difficulty::Easy, &mut rng).unwrap();
        assert!(matches!(pos, Position::BottomLeft | Position::BottomRight));
    }
}

#[test]
fn test_hard_prefers_win_over_block() {
    // O can win on 5 or block X on 2; winning scores higher.
    let board: Board = "XX_ OO_ X__".parse().unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let choice = select_move(&board, Player::O, Difficulty::Hard, &mut rng).unwrap();
    assert_eq!(choice, Position::MiddleRight);
}
