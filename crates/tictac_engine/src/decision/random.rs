//! Easy policy: any empty square, uniformly.

use super::super::{Board, Position};
use rand::Rng;
use rand::seq::IndexedRandom;

/// A uniformly random empty square, or `None` on a full board.
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<Position> {
    let moves = Position::valid_moves(board);
    moves.choose(rng).copied()
}
