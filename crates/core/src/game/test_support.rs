//! Shared fixtures for the `game` submodule test suites.

use super::*;
use crate::scenario::Scenario;

/// Open 14x11 room with the player at (5, 4) and no NPCs.
pub(super) fn lane_game() -> Game {
    lane_game_with_seed(7)
}

pub(super) fn lane_game_with_seed(seed: u64) -> Game {
    let scenario = Scenario {
        name: "lane".to_string(),
        map_width: 14,
        map_height: 11,
        walls: Vec::new(),
        player_start: Pos { y: 5, x: 4 },
        npcs: Vec::new(),
    };
    Game::new(seed, &scenario).expect("fixture scenario should build")
}

pub(super) fn labels(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| entry.to_string()).collect()
}

pub(super) fn spawn_npc(
    game: &mut Game,
    kind: ActorKind,
    pos: Pos,
    behavior: MoveBehavior,
    speed: u32,
) -> EntityId {
    let actor = Actor {
        id: EntityId::default(),
        kind,
        pos,
        behavior,
        waypoint_index: 0,
        next_action_tick: u64::from(speed),
        speed,
    };
    let id = game.state.actors.insert(actor);
    game.state.actors[id].id = id;
    id
}
