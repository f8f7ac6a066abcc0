//! Terminal host for the tic-tac-toe engine.
//!
//! Everything here is glue around [`tictac_engine`]: reading settings,
//! reading moves, printing boards and keeping score.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Players**: humans on a line reader, computers on the decision engine
//! - **Orchestrator**: alternates players over a [`tictac_engine::GameSession`]
//! - **Simulate**: computer-vs-computer tallies

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
pub mod players;
mod scores;
mod simulate;

pub use config::{ConfigError, TictacConfig};
pub use orchestrator::Orchestrator;
pub use scores::Scoreboard;
pub use simulate::simulate;
