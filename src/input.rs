//! Keyboard and mouse sampling.

use crate::game::GameInput;
use crate::player::FrameInput;
use macroquad::prelude::*;

/// Samples keyboard and mouse once for the coming update.
pub fn sample() -> GameInput {
    let mut direction = 0;
    if is_key_down(KeyCode::D) || is_key_down(KeyCode::Right) {
        direction += 1;
    }
    if is_key_down(KeyCode::A) || is_key_down(KeyCode::Left) {
        direction -= 1;
    }

    let (mx, my) = mouse_position();

    GameInput {
        player: FrameInput {
            direction,
            jump_held: is_key_down(KeyCode::Space),
            flip_pressed: is_key_pressed(KeyCode::G),
            dt: get_frame_time(),
        },
        escape_pressed: is_key_pressed(KeyCode::Escape),
        quit_pressed: is_key_pressed(KeyCode::Q),
        any_key_pressed: get_last_key_pressed().is_some(),
        mouse: vec2(mx, my),
        mouse_clicked: is_mouse_button_pressed(MouseButton::Left),
    }
}
