//! Speed component.
//!
//! [`RigidBody`] stores the per-axis speed, in pixels per second, used by the
//! input controller to move an entity. The direction multipliers are kept for
//! scripted movers and are not read by any system yet.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RigidBody {
    pub speed_x: f32,
    pub speed_y: f32,
    pub dir_x: i32,
    pub dir_y: i32,
}

impl RigidBody {
    pub fn new(speed_x: f32, speed_y: f32) -> Self {
        Self {
            speed_x,
            speed_y,
            ..Self::default()
        }
    }

    /// Replace the speed. Direction multipliers are left untouched.
    pub fn set_speed(&mut self, speed_x: f32, speed_y: f32) {
        self.speed_x = speed_x;
        self.speed_y = speed_y;
    }
}
