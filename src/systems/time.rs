//! Time update system.
//!
//! Advances the [`Clock`](crate::resources::clock::Clock) and mirrors the
//! resulting delta into the shared
//! [`WorldTime`](crate::resources::worldtime::WorldTime) resource.
use bevy_ecs::prelude::*;

use crate::resources::clock::Clock;
use crate::resources::worldtime::WorldTime;

/// Update elapsed and delta seconds on the `WorldTime` resource.
///
/// `dt` is expected to be the unscaled frame delta in seconds. The system
/// applies the current `time_scale` and writes both `elapsed` and `delta`.
pub fn update_world_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    let scaled_dt = dt * wt.time_scale;
    wt.elapsed += scaled_dt;
    wt.delta = scaled_dt;
    wt.frame_count += 1;
}

/// Tick the frame clock at `now_ms` and publish the delta to `WorldTime`.
///
/// Returns the raw (unscaled) delta.
pub fn tick_clock(world: &mut World, now_ms: u64) -> f32 {
    let dt = world.resource_mut::<Clock>().tick(now_ms);
    update_world_time(world, dt);
    dt
}
