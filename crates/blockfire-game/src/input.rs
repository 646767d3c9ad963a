//! Backend-neutral input events. The window layer translates its own key codes into these.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    Escape,
    /// Number row key, `0..=9`.
    Digit(u8),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    /// Pointer motion in pixels; `dy` is positive upward.
    MouseMotion { dx: f32, dy: f32 },
    MouseDown(MouseButton),
}
