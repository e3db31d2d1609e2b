//! Deterministic re-execution of a recorded run against a headless surface.

use crate::game::Game;
use crate::journal::{InputJournal, InputPayload};
use crate::scenario::{Scenario, ScenarioError};
use crate::surface::HeadlessSurface;

#[derive(Debug, PartialEq, Eq)]
pub enum ReplayError {
    Scenario(ScenarioError),
    /// A record's tick lies before the simulation's current tick; the
    /// journal is not ordered the way live play produced it.
    OutOfOrderInput { seq: u64 },
    /// The simulation refused an input it accepted during live play; the
    /// journal does not belong to this seed/scenario pair.
    RejectedInput { seq: u64 },
    /// A record's tick lies beyond the requested end of the replay.
    InputBeyondEnd { seq: u64 },
}

#[derive(Debug, PartialEq, Eq)]
pub struct ReplayResult {
    pub final_snapshot_hash: u64,
    pub final_tick: u64,
}

/// Re-run a journal to `end_tick`, applying each input at the tick boundary
/// it was recorded at, and return the final snapshot hash.
pub fn replay_to_end(
    scenario: &Scenario,
    journal: &InputJournal,
    end_tick: u64,
) -> Result<ReplayResult, ReplayError> {
    let mut game = Game::new(journal.seed, scenario).map_err(ReplayError::Scenario)?;
    let mut surface = HeadlessSurface::new();
    let mut pending = journal.inputs.iter().peekable();

    loop {
        while let Some(record) = pending.peek() {
            if record.tick > game.current_tick() {
                break;
            }
            if record.tick < game.current_tick() {
                return Err(ReplayError::OutOfOrderInput { seq: record.seq });
            }
            let record = pending.next().expect("peeked record");
            let accepted = match &record.payload {
                InputPayload::StartChoice { choices, variable, trigger } => {
                    game.start_choice(choices.clone(), *variable, *trigger)
                }
                InputPayload::Commit { index } => game.commit_selection(&mut surface, *index),
                InputPayload::Force { code } => game.force_selection(*code),
                InputPayload::MovePlayer { dir } => game.move_player(*dir),
            };
            if !accepted {
                return Err(ReplayError::RejectedInput { seq: record.seq });
            }
        }

        if game.current_tick() >= end_tick {
            break;
        }
        game.advance(&mut surface, 1);
    }

    if let Some(record) = pending.next() {
        return Err(ReplayError::InputBeyondEnd { seq: record.seq });
    }

    Ok(ReplayResult { final_snapshot_hash: game.snapshot_hash(), final_tick: game.current_tick() })
}
