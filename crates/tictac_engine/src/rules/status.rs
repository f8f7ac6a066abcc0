//! Terminal-state evaluation.

use super::super::{Board, GameStatus, Player};
use super::draw::is_full;
use super::win::{check_winner, winning_line};

/// Status of the board right after `last_player` placed a mark.
///
/// Only `last_player`'s lines are scanned: a legal game can only be won by
/// the player who just moved. The first owned line in
/// [`WinningLine::ALL`](super::WinningLine::ALL) order is reported.
/// A full board whose only line belongs to the other player therefore
/// reads as `Drawn`; use [`is_terminal`] or `check_winner` for either side.
pub fn evaluate_status(board: &Board, last_player: Player) -> GameStatus {
    if let Some(line) = winning_line(board, last_player) {
        GameStatus::Won {
            winner: last_player,
            line,
        }
    } else if is_full(board) {
        GameStatus::Drawn
    } else {
        GameStatus::InProgress
    }
}

/// True if either player owns a line or the board is full.
pub fn is_terminal(board: &Board) -> bool {
    check_winner(board).is_some() || is_full(board)
}
