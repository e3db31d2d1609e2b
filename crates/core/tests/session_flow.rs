//! End-to-end behavior of the choice-session machinery through the public
//! API: one pending session, two asynchronous resolution triggers, and the
//! sentinel protocol on the destination variable.

use core::{
    ActorKind, ChoiceSurface, DistanceTrigger, Game, HeadlessSurface, IDLE_SENTINEL, LogEvent,
    MoveBehavior,
    NpcSpec, Pos, RESULT_GRACE_TICKS, Scenario, UNRESOLVED_SENTINEL,
};

fn lane_scenario(npcs: Vec<NpcSpec>) -> Scenario {
    Scenario {
        name: "lane".to_string(),
        map_width: 16,
        map_height: 11,
        walls: Vec::new(),
        player_start: Pos { y: 5, x: 4 },
        npcs,
    }
}

fn guard_at(x: i32, behavior: MoveBehavior, speed: u32) -> NpcSpec {
    NpcSpec { kind: ActorKind::Guard, start: Pos { y: 5, x }, behavior, speed }
}

fn labels(entries: &[&str]) -> Vec<String> {
    entries.iter().map(|entry| entry.to_string()).collect()
}

#[test]
fn overlapping_start_leaves_the_active_session_untouched() {
    let scenario = lane_scenario(vec![guard_at(12, MoveBehavior::Hold, 10)]);
    let mut game = Game::new(3, &scenario).expect("scenario");
    let guard = game.first_actor_of_kind(ActorKind::Guard).expect("guard");
    let trigger = DistanceTrigger { entity: guard, radius: 2, result: 99 };

    assert!(game.start_choice(labels(&["A", "B", "C"]), 10, Some(trigger)));
    assert!(!game.start_choice(labels(&["X"]), 20, None));

    let session = game.session().expect("first session survives");
    assert_eq!(session.choices, labels(&["A", "B", "C"]));
    assert_eq!(session.variable, 10);
    assert_eq!(session.trigger, Some(trigger));
    assert_eq!(game.variable(20), IDLE_SENTINEL, "loser start must not touch storage");
}

#[test]
fn commit_writes_display_value_then_resets_after_grace() {
    let scenario = lane_scenario(Vec::new());
    let mut game = Game::new(3, &scenario).expect("scenario");
    let mut surface = HeadlessSurface::new();

    game.start_choice(labels(&["A", "B", "C"]), 10, None);
    game.advance(&mut surface, 1);
    assert!(surface.is_open() && surface.is_active());

    surface.set_highlight(1);
    let highlight = surface.highlight() as i32;
    assert!(game.commit_selection(&mut surface, highlight));
    assert_eq!(game.variable(10), 2, "0-based index 1 reads back as display value 2");

    game.advance(&mut surface, (RESULT_GRACE_TICKS - 1) as u32);
    assert_eq!(game.variable(10), 2);
    game.advance(&mut surface, 1);
    assert_eq!(game.variable(10), IDLE_SENTINEL);
}

#[test]
fn forced_code_resolves_before_the_surface_can_await_input() {
    let scenario = lane_scenario(Vec::new());
    let mut game = Game::new(3, &scenario).expect("scenario");
    let mut surface = HeadlessSurface::new();

    game.start_choice(labels(&["A", "B", "C"]), 10, None);
    game.force_selection(2);
    game.advance(&mut surface, 1);

    assert_eq!(game.variable(10), 3);
    assert!(!surface.is_open() && !surface.is_active());
    assert!(surface.choices().is_empty(), "the list must never reach the surface");
}

#[test]
fn approaching_guard_preempts_the_pending_choice_mid_display() {
    let scenario = lane_scenario(vec![guard_at(12, MoveBehavior::Pursue, 1)]);
    let mut game = Game::new(3, &scenario).expect("scenario");
    let mut surface = HeadlessSurface::new();
    let guard = game.first_actor_of_kind(ActorKind::Guard).expect("guard");

    game.start_choice(
        labels(&["X", "Y"]),
        20,
        Some(DistanceTrigger { entity: guard, radius: 2, result: 99 }),
    );
    game.advance(&mut surface, 1);
    assert!(surface.is_open(), "list is on display while the guard approaches");
    assert_eq!(game.variable(20), UNRESOLVED_SENTINEL);

    // Guard starts 8 tiles out and closes one tile per tick.
    game.advance(&mut surface, 6);

    assert_eq!(game.variable(20), 99, "configured result, not a 1-based pick");
    assert!(game.session().is_none());
    assert!(!surface.is_open() && !surface.is_active());

    game.advance(&mut surface, RESULT_GRACE_TICKS as u32);
    assert_eq!(game.variable(20), IDLE_SENTINEL);
}

#[test]
fn forced_code_wins_over_a_trigger_armed_in_the_same_tick() {
    let scenario = lane_scenario(vec![guard_at(5, MoveBehavior::Hold, 10)]);
    let mut game = Game::new(3, &scenario).expect("scenario");
    let mut surface = HeadlessSurface::new();
    let guard = game.first_actor_of_kind(ActorKind::Guard).expect("guard");

    // Guard is already inside the radius; both resolutions are ready.
    game.start_choice(
        labels(&["X", "Y"]),
        20,
        Some(DistanceTrigger { entity: guard, radius: 2, result: 99 }),
    );
    game.force_selection(1);
    game.advance(&mut surface, 1);

    assert_eq!(game.variable(20), 2, "forced commit path, not the trigger value");
    assert!(
        !game.log().iter().any(|e| matches!(e, LogEvent::ProximityOverride { .. })),
        "the trigger must never be evaluated in a tick with a pending forced code"
    );
}

#[test]
fn resolution_is_terminal_and_stale_attempts_are_no_ops() {
    let scenario = lane_scenario(vec![guard_at(12, MoveBehavior::Hold, 10)]);
    let mut game = Game::new(3, &scenario).expect("scenario");
    let mut surface = HeadlessSurface::new();
    let guard = game.first_actor_of_kind(ActorKind::Guard).expect("guard");

    game.start_choice(
        labels(&["X", "Y"]),
        20,
        Some(DistanceTrigger { entity: guard, radius: 20, result: 99 }),
    );
    // Commit before the first tick; the armed trigger would otherwise fire
    // immediately, since its radius covers the whole lane.
    game.commit_selection(&mut surface, 0);
    assert_eq!(game.variable(20), 1);

    // The trigger radius covers the whole map, but the session is gone;
    // further ticks and stale inputs must change nothing.
    game.advance(&mut surface, 3);
    assert!(!game.commit_selection(&mut surface, 1));
    assert!(!game.force_selection(5));
    assert_eq!(game.variable(20), 1);
    assert!(!game.log().iter().any(|e| matches!(e, LogEvent::ProximityOverride { .. })));
}

#[test]
fn destination_variable_holds_unresolved_sentinel_while_pending() {
    let scenario = lane_scenario(Vec::new());
    let mut game = Game::new(3, &scenario).expect("scenario");
    let mut surface = HeadlessSurface::new();

    assert_eq!(game.variable(5), IDLE_SENTINEL);
    game.start_choice(labels(&["A", "B"]), 5, None);
    assert_eq!(game.variable(5), UNRESOLVED_SENTINEL, "observable before any tick runs");

    game.advance(&mut surface, 10);
    assert_eq!(game.variable(5), UNRESOLVED_SENTINEL, "stays pending until a resolution");

    game.commit_selection(&mut surface, 0);
    assert_eq!(game.variable(5), 1);
}

#[test]
fn purely_visual_session_never_touches_storage() {
    let scenario = lane_scenario(Vec::new());
    let mut game = Game::new(3, &scenario).expect("scenario");
    let mut surface = HeadlessSurface::new();

    game.start_choice(labels(&["A", "B"]), 0, None);
    game.advance(&mut surface, 1);
    game.commit_selection(&mut surface, 1);
    game.advance(&mut surface, RESULT_GRACE_TICKS as u32);

    assert_eq!(game.variable(0), IDLE_SENTINEL);
    assert!(game.log().iter().any(|e| matches!(e, LogEvent::ChoiceCommitted { index: 1, .. })));
    assert!(!game.log().iter().any(|e| matches!(e, LogEvent::ResultCleared { .. })));
}
