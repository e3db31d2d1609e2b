use anyhow::Result;
use clap::Parser;
use game_core::{
    ActorKind, ChoiceSurface, Dir, DistanceTrigger, Game, HeadlessSurface, LogEvent, MoveBehavior,
    NpcSpec, Pos,
    Scenario, TileKind, UNRESOLVED_SENTINEL,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

/// Randomized harness for the choice-session machinery: interleaves session
/// starts, commits, forced codes, and movement, asserting the invariants
/// after every frame.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 2000)]
    ticks: u32,
}

const DIRS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

fn harness_scenario() -> Scenario {
    Scenario {
        name: "fuzz".to_string(),
        map_width: 14,
        map_height: 10,
        walls: vec![Pos { y: 4, x: 7 }, Pos { y: 5, x: 7 }],
        player_start: Pos { y: 5, x: 3 },
        npcs: vec![
            NpcSpec {
                kind: ActorKind::Guard,
                start: Pos { y: 7, x: 11 },
                behavior: MoveBehavior::Pursue,
                speed: 3,
            },
            NpcSpec {
                kind: ActorKind::Villager,
                start: Pos { y: 2, x: 10 },
                behavior: MoveBehavior::Wander,
                speed: 2,
            },
        ],
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!("Fuzzing choice sessions on seed {} for {} ticks...", args.seed, args.ticks);

    let scenario = harness_scenario();
    let mut game =
        Game::new(args.seed, &scenario).map_err(|e| anyhow::anyhow!("scenario: {e:?}"))?;
    let mut surface = HeadlessSurface::new();
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let guard = game.first_actor_of_kind(ActorKind::Guard).expect("guard in scenario");

    let mut starts = 0u32;
    let mut commits = 0u32;
    let mut forces = 0u32;

    for _ in 0..args.ticks {
        game.advance(&mut surface, 1);

        match rng.next_u64() % 8 {
            0 => {
                let variable = (rng.next_u64() % 4) as i32 + 5;
                let trigger = (rng.next_u64() % 2 == 0)
                    .then_some(DistanceTrigger { entity: guard, radius: 2, result: 99 });
                if game.start_choice(
                    vec!["Yes".to_string(), "No".to_string(), "Later".to_string()],
                    variable,
                    trigger,
                ) {
                    starts += 1;
                }
            }
            1 => {
                let highlight = surface.highlight() as i32;
                if game.commit_selection(&mut surface, highlight) {
                    commits += 1;
                }
            }
            2 => {
                if game.force_selection((rng.next_u64() % 5) as i32) {
                    forces += 1;
                }
            }
            _ => {
                let dir = DIRS[(rng.next_u64() % 4) as usize];
                game.move_player(dir);
            }
        }

        // Invariants after every frame.
        if let Some(session) = game.session() {
            assert!(!session.choices.is_empty(), "active session lost its choice list");
            if session.variable > 0 {
                assert_eq!(
                    game.variable(session.variable),
                    UNRESOLVED_SENTINEL,
                    "pending destination variable must hold the unresolved sentinel"
                );
            }
        }
        for (_, actor) in game.state().actors.iter() {
            assert!(
                game.state().map.tile_at(actor.pos) != TileKind::Wall,
                "actor walked into a wall"
            );
        }
    }

    let overrides = game
        .log()
        .iter()
        .filter(|event| matches!(event, LogEvent::ProximityOverride { .. }))
        .count();
    println!(
        "Fuzzing completed: {starts} sessions, {commits} commits, {forces} forces, {overrides} proximity overrides."
    );
    Ok(())
}
