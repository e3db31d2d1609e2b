use serde::{Deserialize, Serialize};

use crate::session::DistanceTrigger;
use crate::types::Dir;

/// Ordered record of every input the simulation accepted, with the tick it
/// was applied at. Replaying the journal against the same seed and scenario
/// reproduces the run tick for tick.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputJournal {
    pub format_version: u16,
    pub build_id: String,
    pub scenario_name: String,
    pub seed: u64,
    pub inputs: Vec<InputRecord>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputRecord {
    pub seq: u64,
    /// Simulation tick the input was applied at, after that tick ran.
    pub tick: u64,
    pub payload: InputPayload,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum InputPayload {
    StartChoice { choices: Vec<String>, variable: i32, trigger: Option<DistanceTrigger> },
    Commit { index: i32 },
    Force { code: i32 },
    MovePlayer { dir: Dir },
}

impl InputJournal {
    pub fn new(seed: u64, scenario_name: &str) -> Self {
        Self {
            format_version: 1,
            build_id: "dev".to_string(),
            scenario_name: scenario_name.to_string(),
            seed,
            inputs: Vec::new(),
        }
    }

    pub fn append(&mut self, tick: u64, payload: InputPayload) {
        let seq = self.inputs.len() as u64;
        self.inputs.push(InputRecord { seq, tick, payload });
    }

    /// Tick of the last recorded input, or 0 for an empty journal.
    pub fn last_input_tick(&self) -> u64 {
        self.inputs.last().map_or(0, |record| record.tick)
    }
}
