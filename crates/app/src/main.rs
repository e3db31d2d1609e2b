use app::app_loop::AppState;
use app::choice_window::ChoiceWindow;
use app::journal_store;
use app::seed::{generate_runtime_seed, resolve_seed_from_args};
use core::journal_file::JournalWriter;
use core::{Game, Scenario};
use macroquad::prelude::*;

mod frame_input;
mod ui_render;
mod ui_text;
mod window_config;

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

#[macroquad::main(window_conf)]
async fn main() {
    let args: Vec<String> = std::env::args().collect();
    let seed = match resolve_seed_from_args(&args, generate_runtime_seed()) {
        Ok(choice) => choice.value(),
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    let scenario = Scenario::demo();
    let mut game = match Game::new(seed, &scenario) {
        Ok(game) => game,
        Err(error) => {
            eprintln!("scenario error: {error:?}");
            std::process::exit(2);
        }
    };

    let mut journal: Option<JournalWriter> = journal_store::default_journal_path()
        .and_then(|path| journal_store::create_run_journal(&path, seed, &scenario.name).ok());

    let mut window = ChoiceWindow::new();
    let mut app_state = AppState::new();
    let ui_scale = window_config::runtime_ui_scale();

    // One simulation tick per rendered frame; the core's 60 Hz tick rate
    // matches macroquad's default vsync cadence.
    loop {
        let keys = frame_input::capture_frame_input();
        app_state.frame(&mut game, &mut window, &keys);

        let mut journal_failed = false;
        if let Some(writer) = journal.as_mut() {
            for input in &app_state.accepted_inputs {
                if writer.append(input.tick, &input.payload).is_err() {
                    journal_failed = true;
                    break;
                }
            }
        }
        if journal_failed {
            // Keep playing without persistence rather than tearing down the run.
            journal = None;
        }

        clear_background(BLACK);
        ui_render::draw_frame(&game, &window, ui_scale);
        next_frame().await
    }
}
