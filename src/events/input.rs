//! Input action types.
//!
//! [`InputAction`] names the logical actions the game understands, decoupled
//! from any physical key. [`KeyEvent`] is a raw key-down/key-up edge as
//! reported by the platform; the [`KeyMap`](crate::resources::keymap::KeyMap)
//! translates its key code into an action.

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Back/quit (default: Escape).
    Back,
    /// Start (unbound by default).
    Start,
    /// Move left (default: Left arrow).
    Left,
    /// Move right (default: Right arrow).
    Right,
    /// Move up (default: Up arrow).
    Up,
    /// Move down (default: Down arrow).
    Down,
    /// Primary fire (default: D).
    Fire1,
    /// Secondary fire (default: F).
    Fire2,
}

impl InputAction {
    /// All actions, in declaration order.
    pub const ALL: [InputAction; 8] = [
        InputAction::Back,
        InputAction::Start,
        InputAction::Left,
        InputAction::Right,
        InputAction::Up,
        InputAction::Down,
        InputAction::Fire1,
        InputAction::Fire2,
    ];

    /// Name used for this action in the `[input]` section of the config file.
    pub fn config_name(self) -> &'static str {
        match self {
            InputAction::Back => "back",
            InputAction::Start => "start",
            InputAction::Left => "left",
            InputAction::Right => "right",
            InputAction::Up => "up",
            InputAction::Down => "down",
            InputAction::Fire1 => "fire1",
            InputAction::Fire2 => "fire2",
        }
    }
}

/// A single key edge reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Platform key code.
    pub key_code: i32,
    /// `true` for key-down, `false` for key-up.
    pub pressed: bool,
}

impl KeyEvent {
    pub fn down(key_code: i32) -> Self {
        Self {
            key_code,
            pressed: true,
        }
    }

    pub fn up(key_code: i32) -> Self {
        Self {
            key_code,
            pressed: false,
        }
    }
}
