//! Authored world descriptions shared by the app, the headless tools, and
//! tests. A scenario is plain data; `Game::new` validates it while building
//! the live state.

use serde::{Deserialize, Serialize};

use crate::state::MoveBehavior;
use crate::types::{ActorKind, Pos};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub map_width: usize,
    pub map_height: usize,
    #[serde(default)]
    pub walls: Vec<Pos>,
    pub player_start: Pos,
    #[serde(default)]
    pub npcs: Vec<NpcSpec>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpcSpec {
    pub kind: ActorKind,
    pub start: Pos,
    pub behavior: MoveBehavior,
    pub speed: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ScenarioError {
    MapTooSmall { width: usize, height: usize },
    StartNotWalkable { pos: Pos },
    StartOccupied { pos: Pos },
    ZeroSpeed { pos: Pos },
}

impl Scenario {
    /// The town courtyard the desktop app boots into: a herald standing by
    /// for script-driven offers, a guard that walks straight at the courier,
    /// and a villager drifting on the seeded RNG so runs diverge by seed.
    pub fn demo() -> Self {
        Self {
            name: "courtyard".to_string(),
            map_width: 18,
            map_height: 12,
            walls: vec![
                Pos { y: 4, x: 8 },
                Pos { y: 5, x: 8 },
                Pos { y: 6, x: 8 },
                Pos { y: 8, x: 3 },
                Pos { y: 8, x: 4 },
            ],
            player_start: Pos { y: 5, x: 4 },
            npcs: vec![
                NpcSpec {
                    kind: ActorKind::Villager,
                    start: Pos { y: 3, x: 4 },
                    behavior: MoveBehavior::Hold,
                    speed: 10,
                },
                NpcSpec {
                    kind: ActorKind::Guard,
                    start: Pos { y: 9, x: 14 },
                    behavior: MoveBehavior::Pursue,
                    speed: 12,
                },
                NpcSpec {
                    kind: ActorKind::Villager,
                    start: Pos { y: 2, x: 14 },
                    behavior: MoveBehavior::Wander,
                    speed: 8,
                },
            ],
        }
    }
}
