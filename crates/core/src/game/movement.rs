//! Player stepping and scripted NPC movement for each simulation step.

use rand_chacha::rand_core::Rng;

use super::*;

const WANDER_DIRS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Game {
    /// Step the player one tile. Rejected when the destination is a wall,
    /// out of bounds, or occupied by another actor.
    pub fn move_player(&mut self, dir: Dir) -> bool {
        let from = self.state.actors[self.state.player_id].pos;
        let next = dir.step(from);
        if !self.is_free(next) {
            return false;
        }
        self.state.actors[self.state.player_id].pos = next;
        true
    }

    /// Run every NPC whose action tick has come up.
    pub(super) fn step_actors(&mut self) {
        let due: Vec<EntityId> = self
            .state
            .actors
            .iter()
            .filter(|(id, actor)| {
                *id != self.state.player_id && self.tick >= actor.next_action_tick
            })
            .map(|(id, _)| id)
            .collect();
        for id in due {
            self.step_actor(id);
        }
    }

    fn step_actor(&mut self, id: EntityId) {
        let Some(actor) = self.state.actors.get(id) else {
            return;
        };
        let pos = actor.pos;
        let speed = actor.speed;

        let next = match actor.behavior.clone() {
            MoveBehavior::Hold => None,
            MoveBehavior::Pursue => {
                let target = self.state.actors[self.state.player_id].pos;
                self.step_toward(pos, target)
            }
            MoveBehavior::Patrol { waypoints } => {
                if waypoints.is_empty() {
                    None
                } else {
                    let mut index = self.state.actors[id].waypoint_index % waypoints.len();
                    if pos == waypoints[index] {
                        index = (index + 1) % waypoints.len();
                        self.state.actors[id].waypoint_index = index;
                    }
                    self.step_toward(pos, waypoints[index])
                }
            }
            MoveBehavior::Wander => {
                let roll = self.rng.next_u64();
                let candidate = WANDER_DIRS[(roll % 4) as usize].step(pos);
                self.is_free(candidate).then_some(candidate)
            }
        };

        if let Some(next) = next {
            self.state.actors[id].pos = next;
        }
        self.state.actors[id].next_action_tick = self.tick + u64::from(speed);
    }

    /// Greedy single step: the free neighbor closest to the target, taken
    /// only when it actually closes the distance. Blocked actors wait.
    fn step_toward(&self, from: Pos, target: Pos) -> Option<Pos> {
        let current = manhattan(from, target);
        let mut best: Option<(Pos, u32)> = None;
        for candidate in neighbors(from) {
            if !self.is_free(candidate) {
                continue;
            }
            let distance = manhattan(candidate, target);
            let better = match best {
                None => true,
                Some((_, best_distance)) => distance < best_distance,
            };
            if better {
                best = Some((candidate, distance));
            }
        }
        best.filter(|&(_, distance)| distance < current).map(|(pos, _)| pos)
    }

    fn is_free(&self, pos: Pos) -> bool {
        self.state.map.is_walkable(pos)
            && !self.state.actors.iter().any(|(_, actor)| actor.pos == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::surface::HeadlessSurface;

    fn guard_pos(game: &Game, id: EntityId) -> Pos {
        game.state().actors[id].pos
    }

    #[test]
    fn pursuer_closes_the_manhattan_distance_each_action() {
        let mut game = lane_game();
        let mut surface = HeadlessSurface::new();
        let guard = spawn_npc(&mut game, ActorKind::Guard, Pos { y: 5, x: 10 }, MoveBehavior::Pursue, 1);

        game.advance(&mut surface, 4);

        assert_eq!(guard_pos(&game, guard), Pos { y: 5, x: 6 });
    }

    #[test]
    fn pursuer_stops_adjacent_instead_of_entering_the_player_tile() {
        let mut game = lane_game();
        let mut surface = HeadlessSurface::new();
        let guard = spawn_npc(&mut game, ActorKind::Guard, Pos { y: 5, x: 6 }, MoveBehavior::Pursue, 1);

        game.advance(&mut surface, 6);

        assert_eq!(guard_pos(&game, guard), Pos { y: 5, x: 5 });
    }

    #[test]
    fn actor_speed_sets_the_step_cadence() {
        let mut game = lane_game();
        let mut surface = HeadlessSurface::new();
        let guard = spawn_npc(&mut game, ActorKind::Guard, Pos { y: 5, x: 10 }, MoveBehavior::Pursue, 3);

        game.advance(&mut surface, 2);
        assert_eq!(guard_pos(&game, guard), Pos { y: 5, x: 10 }, "not yet due");
        game.advance(&mut surface, 1);
        assert_eq!(guard_pos(&game, guard), Pos { y: 5, x: 9 });
        game.advance(&mut surface, 3);
        assert_eq!(guard_pos(&game, guard), Pos { y: 5, x: 8 });
    }

    #[test]
    fn patrol_walks_its_waypoints_in_a_loop() {
        let mut game = lane_game();
        let mut surface = HeadlessSurface::new();
        let route = vec![Pos { y: 2, x: 8 }, Pos { y: 2, x: 10 }];
        let walker = spawn_npc(
            &mut game,
            ActorKind::Villager,
            Pos { y: 2, x: 8 },
            MoveBehavior::Patrol { waypoints: route },
            1,
        );

        game.advance(&mut surface, 2);
        assert_eq!(guard_pos(&game, walker), Pos { y: 2, x: 10 }, "reached second waypoint");
        game.advance(&mut surface, 2);
        assert_eq!(guard_pos(&game, walker), Pos { y: 2, x: 8 }, "looped back to the first");
    }

    #[test]
    fn hold_actors_never_move() {
        let mut game = lane_game();
        let mut surface = HeadlessSurface::new();
        let herald = spawn_npc(&mut game, ActorKind::Villager, Pos { y: 3, x: 4 }, MoveBehavior::Hold, 1);

        game.advance(&mut surface, 20);

        assert_eq!(guard_pos(&game, herald), Pos { y: 3, x: 4 });
    }

    #[test]
    fn wander_is_deterministic_for_a_fixed_seed() {
        let run = |seed: u64| {
            let mut game = lane_game_with_seed(seed);
            let mut surface = HeadlessSurface::new();
            let walker =
                spawn_npc(&mut game, ActorKind::Villager, Pos { y: 5, x: 10 }, MoveBehavior::Wander, 1);
            game.advance(&mut surface, 25);
            guard_pos(&game, walker)
        };

        assert_eq!(run(42), run(42));
    }

    #[test]
    fn player_cannot_walk_into_walls_or_actors() {
        let mut game = lane_game();
        let mut surface = HeadlessSurface::new();
        spawn_npc(&mut game, ActorKind::Villager, Pos { y: 5, x: 5 }, MoveBehavior::Hold, 1);
        game.advance(&mut surface, 1);

        assert!(!game.move_player(Dir::Right), "occupied tile");
        for _ in 0..10 {
            game.move_player(Dir::Left);
        }
        let pos = game.state().actors[game.state().player_id].pos;
        assert_eq!(pos, Pos { y: 5, x: 1 }, "stopped at the border wall");
    }
}
