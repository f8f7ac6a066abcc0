//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The search in
//! [`crate::decision`] calls the same predicates the game loop does, so play
//! and search can never disagree about who has won.

pub mod draw;
pub mod status;
pub mod win;

pub use draw::{is_draw, is_full};
pub use status::{evaluate_status, is_terminal};
pub use win::{LineOrientation, WinningLine, check_winner, winning_line};
