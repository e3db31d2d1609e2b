//! Window configuration for the desktop app.

use app::APP_NAME;
use macroquad::window::{Conf, screen_dpi_scale};
use std::env;

const DEFAULT_WINDOW_WIDTH: i32 = 960;
const DEFAULT_WINDOW_HEIGHT: i32 = 640;
const MIN_UI_SCALE: f32 = 0.5;
const MAX_UI_SCALE: f32 = 3.0;

pub fn build_window_conf() -> Conf {
    Conf {
        window_title: APP_NAME.to_owned(),
        window_width: DEFAULT_WINDOW_WIDTH,
        window_height: DEFAULT_WINDOW_HEIGHT,
        // Linux desktop sessions may not scale low-DPI framebuffers
        // automatically; request a high-DPI framebuffer so text tracks
        // display scale.
        high_dpi: true,
        ..Default::default()
    }
}

pub fn runtime_ui_scale() -> f32 {
    let override_value = env::var("WAYSIDE_UI_SCALE").ok();
    resolve_ui_scale(screen_dpi_scale(), override_value.as_deref())
}

fn resolve_ui_scale(dpi_scale: f32, ui_scale_override: Option<&str>) -> f32 {
    if let Some(scale) = ui_scale_override.and_then(|raw| raw.parse::<f32>().ok()) {
        return clamp_ui_scale(scale);
    }
    if dpi_scale.is_finite() && dpi_scale > 1.0 {
        return clamp_ui_scale(dpi_scale);
    }
    1.0
}

fn clamp_ui_scale(value: f32) -> f32 {
    if !value.is_finite() {
        return 1.0;
    }
    value.clamp(MIN_UI_SCALE, MAX_UI_SCALE)
}
