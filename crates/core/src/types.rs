use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    Wall,
    Floor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Villager,
    Guard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub fn step(self, from: Pos) -> Pos {
        match self {
            Self::Up => Pos { y: from.y - 1, x: from.x },
            Self::Down => Pos { y: from.y + 1, x: from.x },
            Self::Left => Pos { y: from.y, x: from.x - 1 },
            Self::Right => Pos { y: from.y, x: from.x + 1 },
        }
    }
}

/// Simulation rate of the fixed tick loop, in ticks per second.
pub const TICK_HZ: u32 = 60;

/// Value a destination variable holds from session start until resolution.
pub const UNRESOLVED_SENTINEL: i32 = -1;

/// Value a destination variable settles back to once the grace window ends.
pub const IDLE_SENTINEL: i32 = 0;

/// Ticks a resolved result stays readable before the idle reset.
/// 100 ms at the fixed tick rate; long enough for a script running on the
/// same loop to observe the non-zero result before it is cleared.
pub const RESULT_GRACE_TICKS: u64 = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    ChoiceOpened { seq: u64, variable: i32 },
    ChoicePresented { seq: u64 },
    ChoiceForced { seq: u64, code: i32 },
    ChoiceCommitted { seq: u64, index: i32 },
    ProximityOverride { seq: u64, entity: EntityId, value: i32 },
    ResultCleared { variable: i32 },
    ResetSuperseded { variable: i32 },
}
