//! Frame logic for the desktop app: one simulation tick per rendered frame,
//! then this frame's keys routed to either the choice list or the map.
//! Testable with an injected key list; nothing here touches the GPU.

use core::journal::InputPayload;
use core::{ActorKind, ChoiceSurface, Dir, DistanceTrigger, Game};
use macroquad::prelude::KeyCode;

use crate::choice_window::ChoiceWindow;

/// Variable the herald's scripted offer resolves into.
pub const HERALD_OFFER_VARIABLE: i32 = 10;
/// Variable the guard-watched demand resolves into.
pub const GUARD_DEMAND_VARIABLE: i32 = 20;
/// Written verbatim when the guard reaches the courier first.
pub const GUARD_DEMAND_RESULT: i32 = 99;
/// Manhattan radius of the guard demand's proximity watch.
pub const GUARD_DEMAND_RADIUS: u32 = 2;
/// Result code injected by the F key, exercising the forced-drain path.
pub const FORCED_DEMO_CODE: i32 = 2;

/// An input the simulation accepted during the current frame.
/// Drained by the caller after each frame to persist to the journal file.
pub struct AcceptedInput {
    pub tick: u64,
    pub payload: InputPayload,
}

#[derive(Default)]
pub struct AppState {
    pub accepted_inputs: Vec<AcceptedInput>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one rendered frame. The tick runs first so a queued forced
    /// code or the proximity watch resolve ahead of anything the player
    /// does this frame.
    pub fn frame(&mut self, game: &mut Game, window: &mut ChoiceWindow, keys: &[KeyCode]) {
        self.accepted_inputs.clear();
        game.advance(window, 1);
        window.step_animation();

        // Script-style force works no matter what the window is doing.
        if keys.contains(&KeyCode::F) && game.force_selection(FORCED_DEMO_CODE) {
            self.record(game, InputPayload::Force { code: FORCED_DEMO_CODE });
        }

        if window.is_active() {
            self.handle_list_keys(game, window, keys);
        } else {
            self.handle_map_keys(game, keys);
        }
    }

    /// Keys while the list has input focus. Navigation and commit wait for
    /// the open slide to finish. Escape and X are swallowed: a pending
    /// choice can only end through a commit or an override, never a cancel.
    fn handle_list_keys(&mut self, game: &mut Game, window: &mut ChoiceWindow, keys: &[KeyCode]) {
        if !window.is_open() {
            return;
        }
        if keys.contains(&KeyCode::Up) {
            window.cursor_up();
        }
        if keys.contains(&KeyCode::Down) {
            window.cursor_down();
        }
        if keys.contains(&KeyCode::Enter) || keys.contains(&KeyCode::Z) {
            let index = window.highlight() as i32;
            if game.commit_selection(window, index) {
                self.record(game, InputPayload::Commit { index });
            }
        }
    }

    fn handle_map_keys(&mut self, game: &mut Game, keys: &[KeyCode]) {
        for key in keys {
            let dir = match key {
                KeyCode::Up => Some(Dir::Up),
                KeyCode::Down => Some(Dir::Down),
                KeyCode::Left => Some(Dir::Left),
                KeyCode::Right => Some(Dir::Right),
                _ => None,
            };
            if let Some(dir) = dir
                && game.move_player(dir)
            {
                self.record(game, InputPayload::MovePlayer { dir });
            }
        }

        if keys.contains(&KeyCode::Key1) {
            self.start_herald_offer(game);
        }
        if keys.contains(&KeyCode::Key2) {
            self.start_guard_demand(game);
        }
    }

    /// Plain offer: no trigger, resolves only through the player.
    fn start_herald_offer(&mut self, game: &mut Game) {
        let choices = vec![
            "Accept the letter".to_string(),
            "Decline politely".to_string(),
            "Ask again later".to_string(),
        ];
        if game.start_choice(choices.clone(), HERALD_OFFER_VARIABLE, None) {
            self.record(
                game,
                InputPayload::StartChoice {
                    choices,
                    variable: HERALD_OFFER_VARIABLE,
                    trigger: None,
                },
            );
        }
    }

    /// Guard-watched demand: the patrol guard forces the outcome if it
    /// reaches the courier before a pick is made.
    fn start_guard_demand(&mut self, game: &mut Game) {
        let trigger = game.first_actor_of_kind(ActorKind::Guard).map(|entity| DistanceTrigger {
            entity,
            radius: GUARD_DEMAND_RADIUS,
            result: GUARD_DEMAND_RESULT,
        });
        let choices = vec!["Hand it over".to_string(), "Refuse".to_string()];
        if game.start_choice(choices.clone(), GUARD_DEMAND_VARIABLE, trigger) {
            self.record(
                game,
                InputPayload::StartChoice {
                    choices,
                    variable: GUARD_DEMAND_VARIABLE,
                    trigger,
                },
            );
        }
    }

    fn record(&mut self, game: &Game, payload: InputPayload) {
        self.accepted_inputs.push(AcceptedInput { tick: game.current_tick(), payload });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choice_window::SLIDE_FRAMES;
    use core::{ChoiceSurface, IDLE_SENTINEL, Scenario, UNRESOLVED_SENTINEL};

    fn demo_game() -> Game {
        Game::new(11, &Scenario::demo()).expect("demo scenario should build")
    }

    fn run_frames(
        app: &mut AppState,
        game: &mut Game,
        window: &mut ChoiceWindow,
        frames: u32,
        keys: &[KeyCode],
    ) {
        for _ in 0..frames {
            app.frame(game, window, keys);
        }
    }

    fn open_offer(app: &mut AppState, game: &mut Game, window: &mut ChoiceWindow) {
        app.frame(game, window, &[KeyCode::Key1]);
        // Let the open slide finish so the list takes input.
        run_frames(app, game, window, u32::from(SLIDE_FRAMES) + 1, &[]);
        assert!(window.is_open() && window.is_active());
    }

    #[test]
    fn digit_key_starts_the_offer_and_records_it() {
        let mut app = AppState::new();
        let mut game = demo_game();
        let mut window = ChoiceWindow::new();

        app.frame(&mut game, &mut window, &[KeyCode::Key1]);

        assert!(game.session().is_some());
        assert_eq!(game.variable(HERALD_OFFER_VARIABLE), UNRESOLVED_SENTINEL);
        assert_eq!(app.accepted_inputs.len(), 1);
        assert!(matches!(
            app.accepted_inputs[0].payload,
            InputPayload::StartChoice { variable: HERALD_OFFER_VARIABLE, .. }
        ));
    }

    #[test]
    fn second_start_while_pending_is_not_recorded() {
        let mut app = AppState::new();
        let mut game = demo_game();
        let mut window = ChoiceWindow::new();

        app.frame(&mut game, &mut window, &[KeyCode::Key1]);
        app.frame(&mut game, &mut window, &[KeyCode::Key2]);

        assert!(app.accepted_inputs.is_empty(), "the losing start must not reach the journal");
        let session = game.session().expect("first session still pending");
        assert_eq!(session.variable, HERALD_OFFER_VARIABLE);
    }

    #[test]
    fn enter_commits_the_highlighted_entry() {
        let mut app = AppState::new();
        let mut game = demo_game();
        let mut window = ChoiceWindow::new();
        open_offer(&mut app, &mut game, &mut window);

        app.frame(&mut game, &mut window, &[KeyCode::Down]);
        app.frame(&mut game, &mut window, &[KeyCode::Enter]);

        assert_eq!(game.variable(HERALD_OFFER_VARIABLE), 2);
        assert!(game.session().is_none());
        assert!(matches!(app.accepted_inputs[0].payload, InputPayload::Commit { index: 1 }));
    }

    #[test]
    fn escape_is_swallowed_while_the_list_is_up() {
        let mut app = AppState::new();
        let mut game = demo_game();
        let mut window = ChoiceWindow::new();
        open_offer(&mut app, &mut game, &mut window);

        run_frames(&mut app, &mut game, &mut window, 5, &[KeyCode::Escape]);
        run_frames(&mut app, &mut game, &mut window, 5, &[KeyCode::X]);

        assert!(game.session().is_some(), "cancel input must never end a session");
        assert!(window.is_open() && window.is_active());
        assert_eq!(game.variable(HERALD_OFFER_VARIABLE), UNRESOLVED_SENTINEL);
    }

    #[test]
    fn arrows_navigate_the_list_instead_of_moving_the_courier() {
        let mut app = AppState::new();
        let mut game = demo_game();
        let mut window = ChoiceWindow::new();
        let before = game.state().actors[game.state().player_id].pos;
        open_offer(&mut app, &mut game, &mut window);

        app.frame(&mut game, &mut window, &[KeyCode::Down]);

        assert_eq!(window.highlight(), 1);
        let after = game.state().actors[game.state().player_id].pos;
        assert_eq!(before, after, "list focus must capture the arrow keys");
        assert!(app.accepted_inputs.is_empty());
    }

    #[test]
    fn arrows_move_the_courier_when_no_list_is_up() {
        let mut app = AppState::new();
        let mut game = demo_game();
        let mut window = ChoiceWindow::new();
        let before = game.state().actors[game.state().player_id].pos;

        app.frame(&mut game, &mut window, &[KeyCode::Right]);

        let after = game.state().actors[game.state().player_id].pos;
        assert_eq!(after, Dir::Right.step(before));
        assert!(matches!(
            app.accepted_inputs[0].payload,
            InputPayload::MovePlayer { dir: Dir::Right }
        ));
    }

    #[test]
    fn force_key_resolves_an_open_list_through_the_commit_path() {
        let mut app = AppState::new();
        let mut game = demo_game();
        let mut window = ChoiceWindow::new();
        open_offer(&mut app, &mut game, &mut window);

        app.frame(&mut game, &mut window, &[KeyCode::F]);
        app.frame(&mut game, &mut window, &[]);

        assert!(game.session().is_none());
        assert_eq!(game.variable(HERALD_OFFER_VARIABLE), FORCED_DEMO_CODE + 1);
        assert!(!window.is_open());
    }

    #[test]
    fn committed_result_settles_back_to_idle() {
        let mut app = AppState::new();
        let mut game = demo_game();
        let mut window = ChoiceWindow::new();
        open_offer(&mut app, &mut game, &mut window);

        app.frame(&mut game, &mut window, &[KeyCode::Enter]);
        assert_eq!(game.variable(HERALD_OFFER_VARIABLE), 1);

        run_frames(&mut app, &mut game, &mut window, 10, &[]);
        assert_eq!(game.variable(HERALD_OFFER_VARIABLE), IDLE_SENTINEL);
    }
}
