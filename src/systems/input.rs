//! Input systems.
//!
//! - [`poll_keyboard`] asks raylib for key edges on every bound key and queues
//!   them as [`KeyEvent`]s.
//! - [`update_input_state`] drains that queue into
//!   [`InputState`](crate::resources::input::InputState) through the
//!   [`KeyMap`].
//!
//! Only the first one touches the platform, so tests can feed the queue
//! directly.
use bevy_ecs::prelude::*;
use log::trace;

use crate::events::input::KeyEvent;
use crate::resources::input::InputState;
use crate::resources::keymap::{KeyEvents, KeyMap};

/// Queue down/up edges reported by raylib for the bound keys.
pub fn poll_keyboard(
    rl: NonSend<raylib::RaylibHandle>,
    keymap: Res<KeyMap>,
    mut events: ResMut<KeyEvents>,
) {
    for binding in keymap.bindings() {
        if rl.is_key_pressed(binding.key) {
            events.push(KeyEvent::down(binding.key as i32));
        }
        if rl.is_key_released(binding.key) {
            events.push(KeyEvent::up(binding.key as i32));
        }
    }
}

/// Apply queued key edges to the input state, in arrival order.
///
/// Key codes without a binding are dropped.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    keymap: Res<KeyMap>,
    mut events: ResMut<KeyEvents>,
) {
    for event in events.queue.drain(..) {
        match keymap.action_for(event.key_code) {
            Some(action) => input.set_action(action, event.pressed),
            None => trace!("Ignoring unmapped key code {}", event.key_code),
        }
    }
}
