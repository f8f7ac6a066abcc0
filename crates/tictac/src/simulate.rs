//! Computer-vs-computer matches.

use crate::players::{Action, ComputerPlayer, Player};
use crate::scores::Scoreboard;
use anyhow::{Result, bail};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictac_engine::{Difficulty, GameMode, GameSession, Player as Mark};
use tracing::{debug, info, instrument};

/// Plays `games` full games between two computer players and tallies them.
///
/// X and O draw from separate generators derived from `seed`, so the same
/// arguments always produce the same tally.
#[instrument]
pub fn simulate(games: u32, x: Difficulty, o: Difficulty, seed: u64) -> Result<Scoreboard> {
    let mut player_x = ComputerPlayer::new("X", x, StdRng::seed_from_u64(seed));
    let mut player_o = ComputerPlayer::new("O", o, StdRng::seed_from_u64(seed.wrapping_add(1)));
    let mut session = GameSession::new(GameMode::PlayerVsPlayer, Difficulty::default());
    let mut scores = Scoreboard::new();

    for game in 0..games {
        session.reset();
        while !session.status().is_terminal() {
            let player: &mut dyn Player = match session.to_move() {
                Mark::X => &mut player_x,
                Mark::O => &mut player_o,
            };
            match player.next_action(&session)? {
                Action::Place(position) => {
                    session.play(position.to_index())?;
                }
                other => bail!("Computer player returned {:?}", other),
            }
        }
        debug!(game, status = %session.status(), "Simulated game finished");
        scores.record(session.status());
    }

    info!(%scores, "Simulation complete");
    Ok(scores)
}
