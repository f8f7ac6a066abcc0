//! Game orchestration between players.

use crate::players::{Action, Player};
use crate::scores::Scoreboard;
use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use tictac_engine::{GameSession, GameStatus, Player as Mark};
use tracing::{debug, info, instrument};

/// Drives a [`GameSession`] between two seats, game after game.
///
/// X always sits in seat 0. In hot-seat play both marks are driven by the
/// same player, so a single reader serves both humans.
///
/// The seats decide who is a computer; the session's mode is not consulted.
/// A [`ComputerPlayer`](crate::players::ComputerPlayer) built with
/// `following_session` plays at the session's difficulty.
pub struct Orchestrator<W> {
    session: GameSession,
    players: Vec<Box<dyn Player>>,
    seat_o: usize,
    scores: Scoreboard,
    think_delay: Duration,
    out: W,
}

impl<W: Write> Orchestrator<W> {
    /// Two distinct players: `player_x` moves first.
    pub fn versus(
        session: GameSession,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        out: W,
    ) -> Self {
        Self {
            session,
            players: vec![player_x, player_o],
            seat_o: 1,
            scores: Scoreboard::new(),
            think_delay: Duration::ZERO,
            out,
        }
    }

    /// One player entering moves for both marks.
    pub fn hot_seat(session: GameSession, player: Box<dyn Player>, out: W) -> Self {
        Self {
            session,
            players: vec![player],
            seat_o: 0,
            scores: Scoreboard::new(),
            think_delay: Duration::ZERO,
            out,
        }
    }

    /// Pause before each computer move.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Current tally.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Runs games until a player quits and returns the final tally.
    #[instrument(
        skip(self),
        fields(mode = %self.session.mode(), difficulty = %self.session.difficulty())
    )]
    pub fn run(&mut self) -> Result<Scoreboard> {
        info!("Starting game orchestration");
        self.render()?;

        loop {
            let mark = *self.session.to_move();
            let seat = if self.session.status().is_terminal() || mark == Mark::X {
                0
            } else {
                self.seat_o
            };
            let player = &mut self.players[seat];

            if self.session.status().is_terminal() && player.is_computer() {
                info!(games = self.scores.games(), "No human seat to continue");
                return Ok(self.scores);
            }

            if player.is_computer() {
                writeln!(self.out, "{} is thinking...", player.name())?;
                self.out.flush()?;
                if !self.think_delay.is_zero() {
                    std::thread::sleep(self.think_delay);
                }
            } else {
                write!(self.out, "> ")?;
                self.out.flush()?;
            }

            let action = player.next_action(&self.session)?;
            debug!(?action, seat, "Player acted");

            match action {
                Action::Place(position) => {
                    match self.session.play(position.to_index()) {
                        Ok(status) => {
                            if status.is_terminal() {
                                self.scores.record(&status);
                            }
                            self.render()?;
                        }
                        Err(e) => writeln!(self.out, "Illegal move: {}", e)?,
                    }
                }
                Action::Restart => {
                    self.session.reset();
                    self.render()?;
                }
                Action::ShowScores => writeln!(self.out, "{}", self.scores)?,
                Action::ResetScores => {
                    self.scores.reset();
                    writeln!(self.out, "Scores reset. {}", self.scores)?;
                }
                Action::Quit => {
                    info!(games = self.scores.games(), "Player quit");
                    writeln!(self.out, "Final score: {}", self.scores)?;
                    return Ok(self.scores);
                }
                Action::Invalid(input) => writeln!(
                    self.out,
                    "Unrecognized input {:?}. Enter 1-9, r (restart), s (scores) or q (quit).",
                    input
                )?,
            }
        }
    }

    fn render(&mut self) -> Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "{}", self.session.board())?;
        let status = *self.session.status();
        match status {
            GameStatus::InProgress => {
                let mark = *self.session.to_move();
                let seat = if mark == Mark::X { 0 } else { self.seat_o };
                writeln!(self.out, "{}'s turn ({})", mark, self.players[seat].name())?;
            }
            GameStatus::Won { line, .. } => {
                let cells: Vec<String> = line
                    .indices()
                    .iter()
                    .map(|i| (i + 1).to_string())
                    .collect();
                writeln!(self.out, "{} Line: {}", status, cells.join("-"))?;
                writeln!(self.out, "{}", self.scores)?;
                writeln!(self.out, "Type r to play again or q to quit.")?;
            }
            GameStatus::Drawn => {
                writeln!(self.out, "{}", status)?;
                writeln!(self.out, "{}", self.scores)?;
                writeln!(self.out, "Type r to play again or q to quit.")?;
            }
        }
        Ok(())
    }
}
