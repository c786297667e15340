//! Screen size resource.
//!
//! Logical resolution every gameplay and drawing calculation works in,
//! independent of the scaled window size.

use bevy_ecs::prelude::Resource;

/// Logical screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
