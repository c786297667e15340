//! Z-index component for render ordering.
//!
//! Sprites with higher values are drawn later (on top). Sprites without a
//! [`ZIndex`] draw at 0.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
