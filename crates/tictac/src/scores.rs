//! Running tally of finished games.

use serde::{Deserialize, Serialize};
use tictac_engine::{GameStatus, Player};
use tracing::{debug, instrument};

/// Wins per side and draws, kept for as long as the host runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished game. In-progress statuses are ignored.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: &GameStatus) {
        match status {
            GameStatus::Won {
                winner: Player::X, ..
            } => self.x_wins += 1,
            GameStatus::Won {
                winner: Player::O, ..
            } => self.o_wins += 1,
            GameStatus::Drawn => self.draws += 1,
            GameStatus::InProgress => return,
        }
        debug!(scores = %self, "Score updated");
    }

    /// Zeroes every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X: {}  O: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_engine::WinningLine;

    #[test]
    fn test_record_and_reset() {
        let mut scores = Scoreboard::new();
        scores.record(&GameStatus::Won {
            winner: Player::O,
            line: WinningLine::ALL[6],
        });
        scores.record(&GameStatus::Drawn);
        scores.record(&GameStatus::InProgress);
        assert_eq!(
            scores,
            Scoreboard {
                x_wins: 0,
                o_wins: 1,
                draws: 1
            }
        );
        assert_eq!(scores.games(), 2);
        assert_eq!(scores.to_string(), "X: 0  O: 1  Draws: 1");

        scores.reset();
        assert_eq!(scores.games(), 0);
    }

    #[test]
    fn test_scores_persist_as_json() {
        let scores = Scoreboard {
            x_wins: 3,
            o_wins: 1,
            draws: 7,
        };
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"x_wins":3,"o_wins":1,"draws":7}"#);
        let back: Scoreboard = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scores);
    }
}
