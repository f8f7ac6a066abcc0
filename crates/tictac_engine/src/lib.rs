//! Tic-tac-toe rules and a tiered computer opponent.
//!
//! The crate has two halves:
//!
//! - **Rules** ([`rules`], [`apply_move`]): board state, legality, win and
//!   draw detection. This is the only place that decides whether a game is
//!   over.
//! - **Decision** ([`decision`], [`select_move`]): chooses the computer's
//!   square by difficulty, from a coin toss up to full minimax. The search
//!   reuses [`rules::evaluate_status`] for its terminal test.
//!
//! [`GameSession`] ties them together for hosts that want turn tracking and
//! history without writing it themselves.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Board, Difficulty, Player, Position, select_move};
//! use rand::SeedableRng;
//!
//! let board: Board = "____X___X".parse()?;
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let choice = select_move(&board, Player::O, Difficulty::Hard, &mut rng)?;
//! assert_eq!(choice, Position::TopLeft);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod decision;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::{IllegalMove, Move, apply_move};
pub use decision::{DecisionError, MEDIUM_OPTIMAL_PROBABILITY, select_move};
pub use position::Position;
pub use rules::{LineOrientation, WinningLine, evaluate_status, is_terminal};
pub use session::{COMPUTER, GameSession, SessionError};
pub use types::{Board, BoardParseError, Difficulty, GameMode, GameStatus, Player, Square};
