//! Moves and the single mutating rule: placing a mark.

use super::rules::{evaluate_status, is_terminal};
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// A move the rules refuse. The board is left unmodified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// Index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),
}

impl std::error::Error for IllegalMove {}

/// Places `player`'s mark at `index` and returns the resulting status.
///
/// # Errors
///
/// Fails without touching the board if the game is already decided, the
/// index is outside 0-8, or the square is taken.
#[instrument(skip(board))]
pub fn apply_move(
    board: &mut Board,
    index: usize,
    player: Player,
) -> Result<GameStatus, IllegalMove> {
    if is_terminal(board) {
        return Err(IllegalMove::GameOver);
    }

    let pos = Position::from_index(index).ok_or(IllegalMove::OutOfRange(index))?;

    if !board.is_empty(pos) {
        return Err(IllegalMove::Occupied(pos));
    }

    board.place(pos, player);
    let status = evaluate_status(board, player);
    debug!(%player, position = %pos, ?status, "Mark placed");
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_center() {
        let mut board = Board::new();
        let status = apply_move(&mut board, 4, Player::X).unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert!(!board.is_empty(Position::Center));
    }

    #[test]
    fn test_out_of_range_leaves_board() {
        let mut board = Board::new();
        assert_eq!(
            apply_move(&mut board, 9, Player::X),
            Err(IllegalMove::OutOfRange(9))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupied_leaves_board() {
        let mut board: Board = "____X____".parse().unwrap();
        let before = board;
        assert_eq!(
            apply_move(&mut board, 4, Player::O),
            Err(IllegalMove::Occupied(Position::Center))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_terminal_board_rejects_moves() {
        let mut board: Board = "XXX_OO___".parse().unwrap();
        let before = board;
        assert_eq!(
            apply_move(&mut board, 3, Player::O),
            Err(IllegalMove::GameOver)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_error_messages() {
        assert!(IllegalMove::Occupied(Position::Center)
            .to_string()
            .contains("occupied"));
        assert_eq!(IllegalMove::GameOver.to_string(), "Game is already over");
    }
}
