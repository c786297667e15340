//! Input-to-position controller.
//!
//! Moves every active [`InputControlled`] sprite by its speed times the frame
//! delta along the held directions, then clamps it inside the logical screen.
//! There is no diagonal normalisation: each axis moves at its own full speed.
use bevy_ecs::prelude::*;

use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Unit direction per axis from the held actions.
///
/// Right is checked before left and up before down, so when both keys of an
/// axis are held, left and down win.
pub fn input_direction(input: &InputState) -> (f32, f32) {
    let mut dx = 0.0;
    let mut dy = 0.0;
    if input.right {
        dx = 1.0;
    }
    if input.left {
        dx = -1.0;
    }
    if input.up {
        dy = -1.0;
    }
    if input.down {
        dy = 1.0;
    }
    (dx, dy)
}

/// Keep a `width`×`height` box at `pos` within `[0, w-width]×[0, h-height]`.
///
/// A box larger than the screen is pinned to the origin.
pub fn clamp_to_screen(pos: &mut MapPosition, width: i32, height: i32, screen: ScreenSize) {
    let max_x = (screen.w - width).max(0) as f32;
    let max_y = (screen.h - height).max(0) as f32;
    pos.x = pos.x.clamp(0.0, max_x);
    pos.y = pos.y.clamp(0.0, max_y);
}

pub fn input_controller(
    mut query: Query<(&mut MapPosition, &Sprite, &RigidBody), With<InputControlled>>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
) {
    let (dx, dy) = input_direction(&input);
    for (mut pos, sprite, body) in query.iter_mut() {
        if !sprite.active {
            continue;
        }
        pos.x += dx * body.speed_x * time.delta;
        pos.y += dy * body.speed_y * time.delta;
        clamp_to_screen(&mut pos, sprite.width, sprite.height, *screen);
    }
}
