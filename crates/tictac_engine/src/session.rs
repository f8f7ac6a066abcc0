//! One game's worth of state, owned by the caller.
//!
//! A [`GameSession`] bundles the board with whose turn it is, the selected
//! mode and difficulty, the derived status and the move history. Nothing in
//! the engine is global: hosts create as many sessions as they like and pass
//! them around by value or reference.

use super::action::{IllegalMove, Move, apply_move};
use super::decision::{DecisionError, select_move};
use super::rules::check_winner;
use super::{Board, Difficulty, GameMode, GameStatus, Player, Position};
use derive_getters::Getters;
use derive_more::{Display, From};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The side the computer plays in [`GameMode::PlayerVsComputer`].
pub const COMPUTER: Player = Player::O;

/// Why a session refused to make a computer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, From)]
pub enum SessionError {
    /// The rules rejected the move.
    #[display("{}", _0)]
    Illegal(IllegalMove),

    /// The decision engine had nothing to choose.
    #[display("{}", _0)]
    Decision(DecisionError),

    /// The session is player-vs-player.
    #[display("No computer opponent in player-vs-player mode")]
    #[from(ignore)]
    NoComputerOpponent,
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Illegal(e) => Some(e),
            SessionError::Decision(e) => Some(e),
            SessionError::NoComputerOpponent => None,
        }
    }
}

/// A single game plus the settings it is played under.
///
/// The stored status is not trusted on load: deserializing recomputes it
/// from the board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(from = "SavedSession")]
pub struct GameSession {
    /// The board.
    board: Board,
    /// Player to move next.
    to_move: Player,
    /// Who plays O.
    mode: GameMode,
    /// Policy used when the computer moves.
    difficulty: Difficulty,
    /// Status after the latest move.
    status: GameStatus,
    /// Moves in the order they were played.
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a fresh game with X to move.
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        info!(%mode, %difficulty, "Creating new game session");
        Self {
            board: Board::new(),
            to_move: Player::X,
            mode,
            difficulty,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Places the mark of the player to move at `index` (0-8).
    ///
    /// # Errors
    ///
    /// [`IllegalMove`] if the game is over, the index is out of range or the
    /// square is taken. The session is unchanged on error.
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(&mut self, index: usize) -> Result<GameStatus, IllegalMove> {
        self.place(index, self.to_move)
    }

    /// Applies a move, checking that it is the mover's turn.
    ///
    /// # Errors
    ///
    /// [`IllegalMove::WrongPlayer`] when `mv.player` is not to move, plus
    /// everything [`GameSession::play`] can return.
    #[instrument(skip(self))]
    pub fn apply(&mut self, mv: Move) -> Result<GameStatus, IllegalMove> {
        if self.status.is_terminal() {
            return Err(IllegalMove::GameOver);
        }
        if mv.player != self.to_move {
            return Err(IllegalMove::WrongPlayer(mv.player));
        }
        self.place(mv.position.to_index(), mv.player)
    }

    /// Whether the computer should move now.
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::PlayerVsComputer
            && self.to_move == COMPUTER
            && !self.status.is_terminal()
    }

    /// Lets the computer choose and play its move.
    ///
    /// # Errors
    ///
    /// [`SessionError`] if the session has no computer opponent, the game is
    /// over, or it is X's turn.
    #[instrument(skip(self, rng), fields(difficulty = %self.difficulty))]
    pub fn computer_move<R: Rng>(&mut self, rng: &mut R) -> Result<Move, SessionError> {
        if self.mode != GameMode::PlayerVsComputer {
            return Err(SessionError::NoComputerOpponent);
        }
        if self.status.is_terminal() {
            return Err(IllegalMove::GameOver.into());
        }
        if self.to_move != COMPUTER {
            return Err(IllegalMove::WrongPlayer(COMPUTER).into());
        }

        let position = select_move(&self.board, COMPUTER, self.difficulty, rng)?;
        self.place(position.to_index(), COMPUTER)?;
        Ok(Move::new(COMPUTER, position))
    }

    /// Clears the board for a new game. Mode and difficulty are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(moves = self.history.len(), "Resetting game");
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Switches mode and starts over. Selecting the current mode is a no-op.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.reset();
    }

    /// Switches difficulty and starts over. Selecting the current difficulty is a no-op.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty == self.difficulty {
            return;
        }
        self.difficulty = difficulty;
        self.reset();
    }

    fn place(&mut self, index: usize, player: Player) -> Result<GameStatus, IllegalMove> {
        if self.status.is_terminal() {
            return Err(IllegalMove::GameOver);
        }

        let status = apply_move(&mut self.board, index, player)?;
        let position = Position::from_index(index).ok_or(IllegalMove::OutOfRange(index))?;
        self.history.push(Move::new(player, position));
        self.status = status;

        if status.is_terminal() {
            info!(%status, moves = self.history.len(), "Game finished");
        } else {
            self.to_move = player.opponent();
            debug!(next = %self.to_move, "Turn passes");
        }
        Ok(status)
    }
}

/// Serialized form of a session, without the derived status.
#[derive(Deserialize)]
struct SavedSession {
    board: Board,
    to_move: Player,
    mode: GameMode,
    difficulty: Difficulty,
    history: Vec<Move>,
}

impl From<SavedSession> for GameSession {
    fn from(saved: SavedSession) -> Self {
        let status = match check_winner(&saved.board) {
            Some((winner, line)) => GameStatus::Won { winner, line },
            None if saved.board.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        };
        debug!(%status, "Status recomputed for loaded session");
        Self {
            board: saved.board,
            to_move: saved.to_move,
            mode: saved.mode,
            difficulty: saved.difficulty,
            status,
            history: saved.history,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default())
    }
}
