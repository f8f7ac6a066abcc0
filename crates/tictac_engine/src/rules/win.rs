//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// Three cells whose uniform occupation ends the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([Position; 3]);

/// Shape of a winning line, for hosts that draw a strike-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineOrientation {
    /// Horizontal line.
    Row,
    /// Vertical line.
    Column,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl WinningLine {
    /// Every line, in the order they are checked: rows, columns, diagonals.
    pub const ALL: [WinningLine; 8] = [
        // Rows
        WinningLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        WinningLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        WinningLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        WinningLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        WinningLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
        WinningLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        WinningLine([Position::TopLeft, Position::Center, Position::BottomRight]),
        WinningLine([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether all three cells hold the player's mark.
    pub fn is_owned_by(&self, board: &Board, player: Player) -> bool {
        self.0
            .iter()
            .all(|&pos| board.at(pos) == Square::Occupied(player))
    }

    /// Row, column or one of the two diagonals.
    pub fn orientation(&self) -> LineOrientation {
        let [a, _, c] = self.0;
        if a.row() == c.row() {
            LineOrientation::Row
        } else if a.col() == c.col() {
            LineOrientation::Column
        } else if a == Position::TopLeft {
            LineOrientation::Diagonal
        } else {
            LineOrientation::AntiDiagonal
        }
    }
}

/// First line in table order that `player` fully occupies.
pub fn winning_line(board: &Board, player: Player) -> Option<WinningLine> {
    WinningLine::ALL
        .into_iter()
        .find(|line| line.is_owned_by(board, player))
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in table order, or `None`.
pub fn check_winner(board: &Board) -> Option<(Player, WinningLine)> {
    for line in WinningLine::ALL {
        let [a, b, c] = line.positions();
        let sq = board.at(a);
        if let Square::Occupied(player) = sq
            && sq == board.at(b)
            && sq == board.at(c)
        {
            return Some((player, line));
        }
    }
    None
}
