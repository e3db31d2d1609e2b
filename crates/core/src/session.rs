//! Pending choice-session state. Pure data plus construction; all behavior
//! lives in the `game` submodules that own the lifecycle.

use serde::{Deserialize, Serialize};

use crate::types::EntityId;

/// Standing condition that resolves a pending choice on its own once a
/// tracked actor comes within a Manhattan-distance threshold of the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceTrigger {
    pub entity: EntityId,
    pub radius: u32,
    /// Written verbatim to the destination variable when the trigger fires.
    /// A configured result value, not a choice index.
    pub result: i32,
}

/// One in-flight choice episode, from start until exactly one resolution.
/// At most one exists at a time; the game owns it as `Option<ChoiceSession>`
/// and `None` is the idle state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceSession {
    /// Ordered display labels. Non-empty; enforced at session start.
    pub choices: Vec<String>,
    /// Destination variable id; zero or below means no storage writes for this session.
    pub variable: i32,
    /// Pending forced result code. Opaque: drained through the commit path
    /// without being bounds-checked against `choices`.
    pub forced: Option<i32>,
    pub trigger: Option<DistanceTrigger>,
    /// Session identity, carried through log events and snapshot hashes.
    pub seq: u64,
}

impl ChoiceSession {
    pub fn new(
        choices: Vec<String>,
        variable: i32,
        trigger: Option<DistanceTrigger>,
        seq: u64,
    ) -> Self {
        Self { choices, variable, forced: None, trigger, seq }
    }
}
