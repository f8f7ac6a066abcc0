//! Computer player backed by the decision engine.

use super::{Action, Player};
use anyhow::Result;
use rand::Rng;
use tictac_engine::{Difficulty, GameSession, select_move};
use tracing::debug;

/// Computer player with its own random source.
///
/// Plays at a fixed difficulty, or at whatever difficulty the session it is
/// handed currently has.
pub struct ComputerPlayer<R> {
    name: String,
    difficulty: Option<Difficulty>,
    rng: R,
}

impl<R: Rng> ComputerPlayer<R> {
    /// Creates a computer player pinned to `difficulty`.
    pub fn new(name: impl Into<String>, difficulty: Difficulty, rng: R) -> Self {
        Self {
            name: name.into(),
            difficulty: Some(difficulty),
            rng,
        }
    }

    /// Creates a computer player that reads the difficulty from the session.
    pub fn following_session(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            difficulty: None,
            rng,
        }
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    fn next_action(&mut self, session: &GameSession) -> Result<Action> {
        let me = *session.to_move();
        let difficulty = self.difficulty.unwrap_or(*session.difficulty());
        let position = select_move(session.board(), me, difficulty, &mut self.rng)?;
        debug!(ai = %self.name, %difficulty, %position, "AI chose position");
        Ok(Action::Place(position))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_computer(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use tictac_engine::{GameMode, Position};

    #[test]
    fn test_hard_computer_blocks() {
        let mut session = GameSession::default();
        for index in [4, 1, 8] {
            session.play(index).unwrap();
        }
        let mut ai = ComputerPlayer::new("CPU", Difficulty::Hard, ChaCha8Rng::seed_from_u64(0));
        assert_eq!(
            ai.next_action(&session).unwrap(),
            Action::Place(Position::TopLeft)
        );
        assert!(ai.is_computer());
    }

    #[test]
    fn test_session_difficulty_is_followed() {
        // Only the optimal policy answers a double threat the same way every time.
        for seed in 0..8 {
            let mut session = GameSession::new(GameMode::PlayerVsComputer, Difficulty::Easy);
            session.set_difficulty(Difficulty::Hard);
            for index in [4, 1, 8] {
                session.play(index).unwrap();
            }
            let mut ai = ComputerPlayer::following_session("CPU", ChaCha8Rng::seed_from_u64(seed));
            assert_eq!(
                ai.next_action(&session).unwrap(),
                Action::Place(Position::TopLeft),
                "seed {seed}"
            );
        }
    }

    #[test]
    fn test_pinned_difficulty_overrides_session() {
        let mut session = GameSession::new(GameMode::PlayerVsComputer, Difficulty::Easy);
        for index in [4, 1, 8] {
            session.play(index).unwrap();
        }
        let mut ai = ComputerPlayer::new("CPU", Difficulty::Hard, ChaCha8Rng::seed_from_u64(3));
        assert_eq!(
            ai.next_action(&session).unwrap(),
            Action::Place(Position::TopLeft)
        );
    }
}
