//! Hard policy: exhaustive minimax over the remaining game tree.
//!
//! Utility is measured only at terminal positions: [`WIN`] when the
//! searching side owns a line, [`LOSS`] when the opponent does, [`DRAW`] for a
//! full board. There is no depth limit, pruning or caching; from the empty
//! board the whole tree is a little over half a million nodes.
//!
//! Marks are placed on a private scratch board and removed again on the way
//! back up, so the caller's board is never touched.

use super::super::rules::evaluate_status;
use super::super::{Board, GameStatus, Player, Position};
use tracing::debug;

/// Minimax value of a position.
pub type Score = i8;

/// The searching side has won.
pub const WIN: Score = 1;
/// Neither side can win.
pub const DRAW: Score = 0;
/// The opponent has won.
pub const LOSS: Score = -1;

/// Best square for `me`, or `None` on a full board.
///
/// Ties go to the lowest index: a later square replaces the current best only
/// when it scores strictly higher.
pub fn best_move(board: &Board, me: Player) -> Option<Position> {
    let mut best: Option<(Position, Score)> = None;
    for (pos, score) in score_moves(board, me) {
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Minimax value of every empty square for `me`, in ascending index order.
pub fn score_moves(board: &Board, me: Player) -> Vec<(Position, Score)> {
    let mut scratch = *board;
    let mut nodes = 0u64;

    let scores: Vec<(Position, Score)> = Position::ALL
        .into_iter()
        .filter(|&pos| board.is_empty(pos))
        .map(|pos| {
            scratch.place(pos, me);
            let score = search(&mut scratch, me, me, &mut nodes);
            scratch.clear(pos);
            (pos, score)
        })
        .collect();

    debug!(%me, nodes, candidates = scores.len(), "Minimax search finished");
    scores
}

/// Value for `me` of `board`, where `last_mover` placed the most recent mark.
pub fn minimax(board: &Board, me: Player, last_mover: Player) -> Score {
    let mut scratch = *board;
    let mut nodes = 0u64;
    search(&mut scratch, me, last_mover, &mut nodes)
}

fn search(board: &mut Board, me: Player, last_mover: Player, nodes: &mut u64) -> Score {
    *nodes += 1;

    match evaluate_status(board, last_mover) {
        GameStatus::Won { winner, .. } if winner == me => return WIN,
        GameStatus::Won { .. } => return LOSS,
        GameStatus::Drawn => return DRAW,
        GameStatus::InProgress => {}
    }

    let mover = last_mover.opponent();
    let maximizing = mover == me;
    let mut best = if maximizing { Score::MIN } else { Score::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.place(pos, mover);
        let score = search(board, me, mover, nodes);
        board.clear(pos);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        let board: Board = "OO_ XX_ X__".parse().unwrap();
        assert_eq!(best_move(&board, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_blocks_diagonal() {
        let board: Board = "____X___X".parse().unwrap();
        assert_eq!(best_move(&board, Player::O), Some(Position::TopLeft));
    }

    #[test]
    fn test_lost_position_still_picks_lowest_index() {
        // X has a double threat; every reply loses, so the first empty square wins the tie.
        let board: Board = "XX_ XO_ __O".parse().unwrap();
        let scores = score_moves(&board, Player::O);
        assert!(scores.iter().all(|&(_, s)| s == LOSS));
        assert_eq!(best_move(&board, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let scores = score_moves(&Board::new(), Player::X);
        assert_eq!(scores.len(), 9);
        assert!(scores.iter().all(|&(_, s)| s == DRAW));
        assert_eq!(best_move(&Board::new(), Player::X), Some(Position::TopLeft));
    }

    #[test]
    fn test_terminal_values() {
        let won: Board = "XXX_OO___".parse().unwrap();
        assert_eq!(minimax(&won, Player::X, Player::X), WIN);
        assert_eq!(minimax(&won, Player::O, Player::X), LOSS);
        let drawn: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(minimax(&drawn, Player::O, Player::X), DRAW);
    }

    #[test]
    fn test_full_board_has_no_best_move() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(best_move(&board, Player::O), None);
        assert!(score_moves(&board, Player::O).is_empty());
    }
}
