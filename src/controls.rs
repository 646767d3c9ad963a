//! Raylib keyboard and mouse state turned into game input events.
use blockfire_game::{InputEvent, Key, MouseButton};
use raylib::prelude::*;

const KEYS: [(KeyboardKey, Key); 6] = [
    (KeyboardKey::KEY_W, Key::W),
    (KeyboardKey::KEY_A, Key::A),
    (KeyboardKey::KEY_S, Key::S),
    (KeyboardKey::KEY_D, Key::D),
    (KeyboardKey::KEY_SPACE, Key::Space),
    (KeyboardKey::KEY_ESCAPE, Key::Escape),
];

const DIGITS: [KeyboardKey; 10] = [
    KeyboardKey::KEY_ZERO,
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

const BUTTONS: [(raylib::consts::MouseButton, MouseButton); 3] = [
    (raylib::consts::MouseButton::MOUSE_BUTTON_LEFT, MouseButton::Left),
    (raylib::consts::MouseButton::MOUSE_BUTTON_RIGHT, MouseButton::Right),
    (raylib::consts::MouseButton::MOUSE_BUTTON_MIDDLE, MouseButton::Middle),
];

/// Edge-triggered events for this frame. Mouse motion is only reported while
/// the pointer is captured; raylib's y grows downward so it is negated.
pub fn poll(rl: &RaylibHandle, pointer_locked: bool) -> Vec<InputEvent> {
    let mut out = Vec::new();
    for (rk, key) in KEYS {
        if rl.is_key_pressed(rk) {
            out.push(InputEvent::KeyDown(key));
        }
        if rl.is_key_released(rk) {
            out.push(InputEvent::KeyUp(key));
        }
    }
    for (n, rk) in DIGITS.into_iter().enumerate() {
        if rl.is_key_pressed(rk) {
            out.push(InputEvent::KeyDown(Key::Digit(n as u8)));
        }
    }
    if pointer_locked {
        let delta = rl.get_mouse_delta();
        if delta.x != 0.0 || delta.y != 0.0 {
            out.push(InputEvent::MouseMotion {
                dx: delta.x,
                dy: -delta.y,
            });
        }
    }
    for (rb, button) in BUTTONS {
        if rl.is_mouse_button_pressed(rb) {
            out.push(InputEvent::MouseDown(button));
        }
    }
    out
}
