//! Rendering for the map view, HUD panel, event log, and the choice window.

use app::choice_window::ChoiceWindow;
use core::{ChoiceSurface, Game, Pos, TileKind};
use macroquad::prelude::*;

use crate::ui_text::{actor_glyph, event_log_line, hud_lines, status_text};

const TILE_SIZE: f32 = 30.0;
const MAP_ORIGIN_X: f32 = 20.0;
const MAP_ORIGIN_Y: f32 = 50.0;
const HUD_X: f32 = 600.0;
const HUD_Y: f32 = 60.0;
const LINE_HEIGHT: f32 = 20.0;
const LOG_TAIL: usize = 6;

const WALL_COLOR: Color = Color { r: 0.25, g: 0.23, b: 0.2, a: 1.0 };
const FLOOR_COLOR: Color = Color { r: 0.1, g: 0.12, b: 0.1, a: 1.0 };
const WINDOW_FILL: Color = Color { r: 0.05, g: 0.07, b: 0.16, a: 0.95 };

pub fn draw_frame(game: &Game, window: &ChoiceWindow, ui_scale: f32) {
    draw_map(game, ui_scale);
    draw_status_line(game, window, ui_scale);
    draw_hud(game, ui_scale);
    draw_event_log(game, ui_scale);
    draw_choice_window(window, ui_scale);
}

fn draw_map(game: &Game, ui_scale: f32) {
    let state = game.state();
    let tile = TILE_SIZE * ui_scale;

    for y in 0..state.map.height {
        for x in 0..state.map.width {
            let pos = Pos { y: y as i32, x: x as i32 };
            let color = match state.map.tile_at(pos) {
                TileKind::Wall => WALL_COLOR,
                TileKind::Floor => FLOOR_COLOR,
            };
            draw_rectangle(
                MAP_ORIGIN_X + x as f32 * tile,
                MAP_ORIGIN_Y + y as f32 * tile,
                tile - 1.0,
                tile - 1.0,
                color,
            );
        }
    }

    for (_, actor) in state.actors.iter() {
        draw_text(
            actor_glyph(actor.kind),
            MAP_ORIGIN_X + actor.pos.x as f32 * tile + tile * 0.25,
            MAP_ORIGIN_Y + actor.pos.y as f32 * tile + tile * 0.75,
            22.0 * ui_scale,
            WHITE,
        );
    }
}

fn draw_status_line(game: &Game, window: &ChoiceWindow, ui_scale: f32) {
    let focus = window.is_open() && window.is_active();
    draw_text(&status_text(game, focus), MAP_ORIGIN_X, 30.0 * ui_scale, 20.0 * ui_scale, WHITE);
}

fn draw_hud(game: &Game, ui_scale: f32) {
    for (row, line) in hud_lines(game, game.seed()).iter().enumerate() {
        draw_text(
            line,
            HUD_X * ui_scale,
            HUD_Y + row as f32 * LINE_HEIGHT * ui_scale,
            18.0 * ui_scale,
            LIGHTGRAY,
        );
    }
}

fn draw_event_log(game: &Game, ui_scale: f32) {
    let events = game.log();
    let start = events.len().saturating_sub(LOG_TAIL);
    let base_y = HUD_Y + 8.0 * LINE_HEIGHT * ui_scale;
    for (row, event) in events[start..].iter().enumerate() {
        draw_text(
            &event_log_line(event),
            HUD_X * ui_scale,
            base_y + row as f32 * LINE_HEIGHT * ui_scale,
            16.0 * ui_scale,
            GRAY,
        );
    }
}

/// The list window slides open from its top edge; entries are drawn only
/// once the slide settles, matching when the list starts taking input.
fn draw_choice_window(window: &ChoiceWindow, ui_scale: f32) {
    if window.openness() <= 0.0 {
        return;
    }

    let row_height = 26.0 * ui_scale;
    let width = 280.0 * ui_scale;
    let full_height = row_height * window.choices().len() as f32 + 16.0 * ui_scale;
    let height = full_height * window.openness();
    let x = MAP_ORIGIN_X + 40.0 * ui_scale;
    let y = MAP_ORIGIN_Y + 60.0 * ui_scale;

    draw_rectangle(x, y, width, height, WINDOW_FILL);
    draw_rectangle_lines(x, y, width, height, 2.0, WHITE);

    if !window.is_open() {
        return;
    }
    for (row, label) in window.choices().iter().enumerate() {
        let marker = if row == window.highlight() { "> " } else { "  " };
        draw_text(
            &format!("{marker}{label}"),
            x + 10.0 * ui_scale,
            y + 18.0 * ui_scale + row as f32 * row_height,
            20.0 * ui_scale,
            WHITE,
        );
    }
}
