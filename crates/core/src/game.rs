use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::Key;

use crate::scenario::{Scenario, ScenarioError};
use crate::session::ChoiceSession;
use crate::state::{Actor, GameState, Map, MoveBehavior};
use crate::surface::ChoiceSurface;
use crate::types::*;
use crate::vars::Variables;

mod movement;
mod proximity;
mod selection;

#[cfg(test)]
mod test_support;

pub struct Game {
    seed: u64,
    tick: u64,
    rng: ChaCha8Rng,
    state: GameState,
    vars: Variables,
    session: Option<ChoiceSession>,
    log: Vec<LogEvent>,
    next_session_seq: u64,
}

impl Game {
    pub fn new(seed: u64, scenario: &Scenario) -> Result<Self, ScenarioError> {
        if scenario.map_width < 3 || scenario.map_height < 3 {
            return Err(ScenarioError::MapTooSmall {
                width: scenario.map_width,
                height: scenario.map_height,
            });
        }

        let mut map = Map::new(scenario.map_width, scenario.map_height);
        for &wall in &scenario.walls {
            map.set_tile(wall, TileKind::Wall);
        }

        fn place(map: &Map, taken: &mut Vec<Pos>, pos: Pos) -> Result<(), ScenarioError> {
            if !map.is_walkable(pos) {
                return Err(ScenarioError::StartNotWalkable { pos });
            }
            if taken.contains(&pos) {
                return Err(ScenarioError::StartOccupied { pos });
            }
            taken.push(pos);
            Ok(())
        }

        let mut actors = slotmap::SlotMap::with_key();
        let mut taken: Vec<Pos> = Vec::new();

        place(&map, &mut taken, scenario.player_start)?;
        let player = Actor {
            id: EntityId::default(),
            kind: ActorKind::Player,
            pos: scenario.player_start,
            behavior: MoveBehavior::Hold,
            waypoint_index: 0,
            next_action_tick: 0,
            speed: 0,
        };
        let player_id = actors.insert(player);
        actors[player_id].id = player_id;

        for npc in &scenario.npcs {
            if npc.speed == 0 {
                return Err(ScenarioError::ZeroSpeed { pos: npc.start });
            }
            place(&map, &mut taken, npc.start)?;
            let actor = Actor {
                id: EntityId::default(),
                kind: npc.kind,
                pos: npc.start,
                behavior: npc.behavior.clone(),
                waypoint_index: 0,
                next_action_tick: u64::from(npc.speed),
                speed: npc.speed,
            };
            let id = actors.insert(actor);
            actors[id].id = id;
        }

        Ok(Self {
            seed,
            tick: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            state: GameState { map, actors, player_id },
            vars: Variables::new(),
            session: None,
            log: Vec::new(),
            next_session_seq: 0,
        })
    }

    /// Run `max_steps` whole simulation ticks. Nothing suspends mid-tick:
    /// scheduled resets, scripted movement, choice resolution, and surface
    /// coordination all complete inside the tick they run in. Within a tick,
    /// a queued forced code resolves before the distance watch is consulted,
    /// and both outrank any input the front end will offer afterwards.
    pub fn advance(&mut self, surface: &mut dyn ChoiceSurface, max_steps: u32) {
        for _ in 0..max_steps {
            self.tick += 1;
            self.vars.apply_due_resets(self.tick, &mut self.log);
            self.step_actors();
            self.drain_forced(surface);
            self.poll_distance_trigger(surface);
            self.sync_surface(surface);
        }
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read a variable slot the way a collaborator script would.
    pub fn variable(&self, id: i32) -> i32 {
        self.vars.get(id)
    }

    /// Direct write from a collaborator script. Ids at or below zero are ignored.
    pub fn set_variable(&mut self, id: i32, value: i32) {
        self.vars.set(id, value);
    }

    pub fn session(&self) -> Option<&ChoiceSession> {
        self.session.as_ref()
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn first_actor_of_kind(&self, kind: ActorKind) -> Option<EntityId> {
        self.state.actors.iter().find(|(_, actor)| actor.kind == kind).map(|(id, _)| id)
    }

    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_u64(self.next_session_seq);

        for (id, actor) in self.state.actors.iter() {
            hasher.write_u64(id.data().as_ffi());
            hasher.write_i32(actor.pos.y);
            hasher.write_i32(actor.pos.x);
        }

        for (variable, value) in self.vars.iter() {
            hasher.write_i32(variable);
            hasher.write_i32(value);
        }

        if let Some(session) = &self.session {
            hasher.write_u64(session.seq);
            hasher.write_i32(session.variable);
            for label in &session.choices {
                hasher.write(label.as_bytes());
            }
            hasher.write_i32(session.forced.unwrap_or(IDLE_SENTINEL));
            if let Some(trigger) = session.trigger {
                hasher.write_u64(trigger.entity.data().as_ffi());
                hasher.write_u32(trigger.radius);
                hasher.write_i32(trigger.result);
            }
        }

        hasher.finish()
    }
}

fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

fn neighbors(pos: Pos) -> [Pos; 4] {
    [
        Pos { y: pos.y - 1, x: pos.x },
        Pos { y: pos.y, x: pos.x + 1 },
        Pos { y: pos.y + 1, x: pos.x },
        Pos { y: pos.y, x: pos.x - 1 },
    ]
}
