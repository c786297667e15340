//! Tilemap auto-scroll system.
use bevy_ecs::prelude::*;

use crate::resources::tilemap::Tilemap;
use crate::resources::worldtime::WorldTime;

/// Advance the tilemap scroll position by this frame's delta.
pub fn tilemap_scroll(mut tilemap: ResMut<Tilemap>, time: Res<WorldTime>) {
    tilemap.scroll_update(time.delta);
}
