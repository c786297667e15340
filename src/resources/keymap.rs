//! Key code to logical action mapping.
//!
//! The platform layer reports raw key codes; [`KeyMap`] is the single place
//! that knows which physical key drives which [`InputAction`]. Bindings can be
//! overridden by name from the `[input]` section of the config file.
use bevy_ecs::prelude::*;
use raylib::prelude::KeyboardKey;

use crate::events::input::{InputAction, KeyEvent};

/// A physical key bound to a logical action.
#[derive(Debug, Clone, Copy)]
pub struct KeyBinding {
    pub key: KeyboardKey,
    pub action: InputAction,
}

/// Resource holding all active key bindings.
#[derive(Resource, Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<KeyBinding>,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            bindings: vec![
                KeyBinding {
                    key: KeyboardKey::KEY_ESCAPE,
                    action: InputAction::Back,
                },
                KeyBinding {
                    key: KeyboardKey::KEY_LEFT,
                    action: InputAction::Left,
                },
                KeyBinding {
                    key: KeyboardKey::KEY_RIGHT,
                    action: InputAction::Right,
                },
                KeyBinding {
                    key: KeyboardKey::KEY_UP,
                    action: InputAction::Up,
                },
                KeyBinding {
                    key: KeyboardKey::KEY_DOWN,
                    action: InputAction::Down,
                },
                KeyBinding {
                    key: KeyboardKey::KEY_D,
                    action: InputAction::Fire1,
                },
                KeyBinding {
                    key: KeyboardKey::KEY_F,
                    action: InputAction::Fire2,
                },
            ],
        }
    }
}

impl KeyMap {
    /// Action bound to a raw key code, if any.
    pub fn action_for(&self, key_code: i32) -> Option<InputAction> {
        self.bindings
            .iter()
            .find(|b| b.key as i32 == key_code)
            .map(|b| b.action)
    }

    /// Bind `key` to `action`, replacing any previous key for that action and
    /// any previous action for that key.
    pub fn rebind(&mut self, action: InputAction, key: KeyboardKey) {
        self.bindings
            .retain(|b| b.action != action && b.key as i32 != key as i32);
        self.bindings.push(KeyBinding { key, action });
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }
}

/// Key edges collected by the platform poll, waiting to be applied.
#[derive(Resource, Debug, Default)]
pub struct KeyEvents {
    pub queue: Vec<KeyEvent>,
}

impl KeyEvents {
    pub fn push(&mut self, event: KeyEvent) {
        self.queue.push(event);
    }
}

/// Parse a human-readable key name as used in `config.ini`.
///
/// Names are case-insensitive: single letters and digits, arrow names
/// (`left`, `right`, `up`, `down`), `escape`/`esc`, `enter`/`return`,
/// `space`, `tab`, `backspace`, modifier names and `f1`..`f12`.
pub fn parse_key_name(name: &str) -> Option<KeyboardKey> {
    use KeyboardKey::*;
    let name = name.trim().to_ascii_lowercase();
    let key = match name.as_str() {
        "a" => KEY_A,
        "b" => KEY_B,
        "c" => KEY_C,
        "d" => KEY_D,
        "e" => KEY_E,
        "f" => KEY_F,
        "g" => KEY_G,
        "h" => KEY_H,
        "i" => KEY_I,
        "j" => KEY_J,
        "k" => KEY_K,
        "l" => KEY_L,
        "m" => KEY_M,
        "n" => KEY_N,
        "o" => KEY_O,
        "p" => KEY_P,
        "q" => KEY_Q,
        "r" => KEY_R,
        "s" => KEY_S,
        "t" => KEY_T,
        "u" => KEY_U,
        "v" => KEY_V,
        "w" => KEY_W,
        "x" => KEY_X,
        "y" => KEY_Y,
        "z" => KEY_Z,
        "0" => KEY_ZERO,
        "1" => KEY_ONE,
        "2" => KEY_TWO,
        "3" => KEY_THREE,
        "4" => KEY_FOUR,
        "5" => KEY_FIVE,
        "6" => KEY_SIX,
        "7" => KEY_SEVEN,
        "8" => KEY_EIGHT,
        "9" => KEY_NINE,
        "left" => KEY_LEFT,
        "right" => KEY_RIGHT,
        "up" => KEY_UP,
        "down" => KEY_DOWN,
        "escape" | "esc" => KEY_ESCAPE,
        "enter" | "return" => KEY_ENTER,
        "space" => KEY_SPACE,
        "tab" => KEY_TAB,
        "backspace" => KEY_BACKSPACE,
        "lshift" | "left_shift" => KEY_LEFT_SHIFT,
        "rshift" | "right_shift" => KEY_RIGHT_SHIFT,
        "lctrl" | "left_control" => KEY_LEFT_CONTROL,
        "rctrl" | "right_control" => KEY_RIGHT_CONTROL,
        "lalt" | "left_alt" => KEY_LEFT_ALT,
        "ralt" | "right_alt" => KEY_RIGHT_ALT,
        "f1" => KEY_F1,
        "f2" => KEY_F2,
        "f3" => KEY_F3,
        "f4" => KEY_F4,
        "f5" => KEY_F5,
        "f6" => KEY_F6,
        "f7" => KEY_F7,
        "f8" => KEY_F8,
        "f9" => KEY_F9,
        "f10" => KEY_F10,
        "f11" => KEY_F11,
        "f12" => KEY_F12,
        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let map = KeyMap::default();
        assert_eq!(
            map.action_for(KeyboardKey::KEY_ESCAPE as i32),
            Some(InputAction::Back)
        );
        assert_eq!(
            map.action_for(KeyboardKey::KEY_LEFT as i32),
            Some(InputAction::Left)
        );
        assert_eq!(
            map.action_for(KeyboardKey::KEY_RIGHT as i32),
            Some(InputAction::Right)
        );
        assert_eq!(
            map.action_for(KeyboardKey::KEY_UP as i32),
            Some(InputAction::Up)
        );
        assert_eq!(
            map.action_for(KeyboardKey::KEY_DOWN as i32),
            Some(InputAction::Down)
        );
        assert_eq!(
            map.action_for(KeyboardKey::KEY_D as i32),
            Some(InputAction::Fire1)
        );
        assert_eq!(
            map.action_for(KeyboardKey::KEY_F as i32),
            Some(InputAction::Fire2)
        );
        // Start has no default key.
        assert!(map.bindings().iter().all(|b| b.action != InputAction::Start));
    }

    #[test]
    fn test_unmapped_key_has_no_action() {
        let map = KeyMap::default();
        assert_eq!(map.action_for(KeyboardKey::KEY_Q as i32), None);
        assert_eq!(map.action_for(-1), None);
    }

    #[test]
    fn test_rebind_replaces_previous_key() {
        let mut map = KeyMap::default();
        map.rebind(InputAction::Fire1, KeyboardKey::KEY_SPACE);
        assert_eq!(map.action_for(KeyboardKey::KEY_D as i32), None);
        assert_eq!(
            map.action_for(KeyboardKey::KEY_SPACE as i32),
            Some(InputAction::Fire1)
        );
    }

    #[test]
    fn test_rebind_steals_key_from_other_action() {
        let mut map = KeyMap::default();
        map.rebind(InputAction::Start, KeyboardKey::KEY_F);
        assert_eq!(
            map.action_for(KeyboardKey::KEY_F as i32),
            Some(InputAction::Start)
        );
        assert!(map.bindings().iter().all(|b| b.action != InputAction::Fire2));
    }

    #[test]
    fn test_parse_key_name() {
        assert_eq!(parse_key_name("Escape").map(|k| k as i32), Some(KeyboardKey::KEY_ESCAPE as i32));
        assert_eq!(parse_key_name(" d ").map(|k| k as i32), Some(KeyboardKey::KEY_D as i32));
        assert_eq!(parse_key_name("F12").map(|k| k as i32), Some(KeyboardKey::KEY_F12 as i32));
        assert_eq!(parse_key_name("return").map(|k| k as i32), Some(KeyboardKey::KEY_ENTER as i32));
        assert!(parse_key_name("hyper").is_none());
        assert!(parse_key_name("").is_none());
    }
}
