//! Keyboard capture for one rendered frame.

use macroquad::prelude::{KeyCode, is_key_pressed};

const FRAME_KEYS: [KeyCode; 11] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Enter,
    KeyCode::Z,
    KeyCode::Escape,
    KeyCode::X,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::F,
];

pub fn capture_frame_input() -> Vec<KeyCode> {
    FRAME_KEYS.iter().copied().filter(|key| is_key_pressed(*key)).collect()
}
