//! Human player reading commands line by line.

use super::{Action, Player};
use anyhow::Result;
use std::io::BufRead;
use tictac_engine::{GameSession, Position};
use tracing::debug;

/// Human player typing into a line-based reader, usually stdin.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

/// Parses one line of input.
///
/// Squares are numbered 1-9 as on the printed board, or named ("center",
/// "top-left"). Commands: `r`/`restart`, `s`/`scores`, `reset-scores`,
/// `q`/`quit`.
pub fn parse_action(line: &str) -> Action {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "r" | "restart" => return Action::Restart,
        "s" | "scores" => return Action::ShowScores,
        "reset-scores" => return Action::ResetScores,
        "q" | "quit" | "exit" => return Action::Quit,
        _ => {}
    }

    if let Ok(number) = trimmed.parse::<usize>() {
        return match number.checked_sub(1).and_then(Position::from_index) {
            Some(pos) => Action::Place(pos),
            None => Action::Invalid(trimmed.to_string()),
        };
    }

    match Position::from_label_or_number(trimmed) {
        Some(pos) => Action::Place(pos),
        None => Action::Invalid(trimmed.to_string()),
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn next_action(&mut self, _session: &GameSession) -> Result<Action> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                debug!(player = %self.name, "Input closed");
                return Ok(Action::Quit);
            }
            if !line.trim().is_empty() {
                break;
            }
        }

        let action = parse_action(&line);
        debug!(player = %self.name, ?action, "Human input");
        Ok(action)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
