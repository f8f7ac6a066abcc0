//! Move selection for the computer opponent.
//!
//! Three policies, picked by [`Difficulty`]:
//!
//! - **Easy**: a uniformly random empty square ([`random::random_move`]).
//! - **Medium**: the Hard answer with probability
//!   [`MEDIUM_OPTIMAL_PROBABILITY`], otherwise the Easy answer. A fresh draw
//!   is made on every call.
//! - **Hard**: exhaustive minimax ([`minimax::best_move`]).
//!
//! Randomness always comes from the caller's generator, so a seeded
//! generator replays the same games.

pub mod minimax;
pub mod random;

use super::rules::check_winner;
use super::{Board, Difficulty, Player, Position};
use derive_more::Display;
use rand::Rng;
use tracing::{debug, instrument};

/// Chance that a Medium opponent plays the optimal move.
pub const MEDIUM_OPTIMAL_PROBABILITY: f64 = 0.7;

/// The board offers nothing to choose from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DecisionError {
    /// Someone has already completed a line.
    #[display("Game is already won by {}", _0)]
    GameOver(Player),

    /// Every square is taken.
    #[display("No empty squares left")]
    NoMovesAvailable,
}

impl std::error::Error for DecisionError {}

/// Chooses a square for `me` according to `difficulty`.
///
/// The board is only read; the search works on its own copy.
///
/// # Errors
///
/// Returns [`DecisionError`] when the board is already decided, since there
/// is no meaningful move to offer.
#[instrument(skip(board, rng), fields(empty = board.empty_positions().count()))]
pub fn select_move<R: Rng>(
    board: &Board,
    me: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Position, DecisionError> {
    if let Some((winner, _)) = check_winner(board) {
        return Err(DecisionError::GameOver(winner));
    }

    let chosen = match difficulty {
        Difficulty::Easy => random::random_move(board, rng),
        Difficulty::Medium => {
            if rng.random_bool(MEDIUM_OPTIMAL_PROBABILITY) {
                debug!("Medium opponent playing optimally");
                minimax::best_move(board, me)
            } else {
                debug!("Medium opponent playing randomly");
                random::random_move(board, rng)
            }
        }
        Difficulty::Hard => minimax::best_move(board, me),
    };

    let chosen = chosen.ok_or(DecisionError::NoMovesAvailable)?;
    debug!(position = %chosen, "Computer chose move");
    Ok(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_full_board_has_no_moves() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(
                select_move(&board, Player::O, difficulty, &mut rng),
                Err(DecisionError::NoMovesAvailable)
            );
        }
    }

    #[test]
    fn test_won_board_is_rejected() {
        let board: Board = "XXX_OO___".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            select_move(&board, Player::O, Difficulty::Hard, &mut rng),
            Err(DecisionError::GameOver(Player::X))
        );
    }

    #[test]
    fn test_medium_mixes_policies() {
        // O can win at once on square 2; the random branch usually misses it.
        let board: Board = "OO_ XX_ X__".parse().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut optimal = 0;
        let trials = 400;
        for _ in 0..trials {
            if select_move(&board, Player::O, Difficulty::Medium, &mut rng).unwrap()
                == Position::TopRight
            {
                optimal += 1;
            }
        }
        // Expected share: 0.7 + 0.3 / 4 = 0.775.
        assert!(optimal > trials * 65 / 100, "optimal picks: {optimal}");
        assert!(optimal < trials * 90 / 100, "optimal picks: {optimal}");
    }
}
