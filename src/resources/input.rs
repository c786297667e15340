//! Logical input state resource.
//!
//! Holds one boolean per [`InputAction`]. The state is purely event-driven:
//! it reflects the most recent down/up edge seen for each action and never
//! polls hardware. Key repeat and debouncing are not handled.
use bevy_ecs::prelude::*;

use crate::events::input::InputAction;

/// Resource capturing which logical actions are currently held down.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub back: bool,
    pub start: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub fire1: bool,
    pub fire2: bool,
}

impl InputState {
    /// Release every action.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a down (`pressed = true`) or up edge for `action`.
    pub fn set_action(&mut self, action: InputAction, pressed: bool) {
        *self.slot(action) = pressed;
    }

    /// Whether `action` is currently held.
    pub fn is_down(&self, action: InputAction) -> bool {
        match action {
            InputAction::Back => self.back,
            InputAction::Start => self.start,
            InputAction::Left => self.left,
            InputAction::Right => self.right,
            InputAction::Up => self.up,
            InputAction::Down => self.down,
            InputAction::Fire1 => self.fire1,
            InputAction::Fire2 => self.fire2,
        }
    }

    fn slot(&mut self, action: InputAction) -> &mut bool {
        match action {
            InputAction::Back => &mut self.back,
            InputAction::Start => &mut self.start,
            InputAction::Left => &mut self.left,
            InputAction::Right => &mut self.right,
            InputAction::Up => &mut self.up,
            InputAction::Down => &mut self.down,
            InputAction::Fire1 => &mut self.fire1,
            InputAction::Fire2 => &mut self.fire2,
        }
    }
}
