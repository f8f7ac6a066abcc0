//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, parse_action};

use anyhow::Result;
use tictac_engine::{GameSession, Position};

/// What a player wants to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Place a mark.
    Place(Position),
    /// Abandon the current game and start a new one.
    Restart,
    /// Print the scoreboard.
    ShowScores,
    /// Zero the scoreboard.
    ResetScores,
    /// Leave the program.
    Quit,
    /// Input that could not be understood.
    Invalid(String),
}

/// Trait for players that can make moves.
pub trait Player {
    /// Gets the next action from this player.
    fn next_action(&mut self, session: &GameSession) -> Result<Action>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Whether the host should pause before asking this player.
    fn is_computer(&self) -> bool {
        false
    }
}
